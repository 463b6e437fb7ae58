// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HMAC-based extract-and-expand key derivation (RFC 5869).
//!
//! This crate derives keying material in two stages:
//!
//! - **Extract**: concentrates the entropy of input keying material (IKM)
//!   into a pseudorandom key (PRK) of the MAC output length.
//! - **Expand**: stretches a PRK into output keying material (OKM) of any
//!   length up to 255 MAC blocks, bound to optional context information.
//!
//! The derivation core only depends on the [`MacOp`] capability: "key a MAC
//! instance, feed it data, finalize, and report the output size". The
//! default capability is [`HmacAlgo`] over a [`HashAlgo`]; any other keyed
//! pseudorandom function can be plugged in by implementing [`MacOp`].
//!
//! # Platform Support
//!
//! The HMAC and hash backends are platform specific:
//! - Linux: OpenSSL-based implementations
//! - Windows: Native Windows cryptography APIs (CNG)
//!
//! # Example
//!
//! ```ignore
//! use hkdf_crypto::*;
//!
//! let mac = HmacAlgo::new(HashAlgo::sha256());
//! let okm = hkdf(&mac, b"input keying material", Some(b"salt"), Some(b"context"), 42)?;
//! assert_eq!(okm.len(), 42);
//! ```

mod hash;
mod hmac;
mod kdf;
mod secret;

mod op;
mod traits;

pub use hash::*;
pub use hmac::*;
pub use kdf::*;
pub use op::*;
pub use secret::*;
use thiserror::Error;
pub use traits::*;

/// Error type for all key derivation and MAC operations.
///
/// The HKDF variants describe caller errors and are raised before any MAC
/// evaluation of the failing stage. The HMAC variants wrap failures reported
/// by the platform backend.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CryptoError {
    // HKDF errors
    /// Input keying material or pseudorandom key is empty.
    #[error("HKDF invalid input: keying material must not be empty")]
    HkdfInvalidInput,
    /// Requested output length is zero or exceeds 255 MAC blocks.
    #[error("HKDF invalid output length")]
    HkdfInvalidLength,

    // MAC errors
    /// MAC reported an output size of zero bytes.
    #[error("MAC invalid output size")]
    MacInvalidOutputSize,

    // HMAC backend errors
    /// HMAC key import failed.
    #[error("HMAC key import failed")]
    HmacKeyImportError,
    /// HMAC context initialization failed.
    #[error("HMAC initialization failed")]
    HmacInitError,
    /// HMAC update operation failed.
    #[error("HMAC update failed")]
    HmacUpdateError,
    /// HMAC finalization failed.
    #[error("HMAC finalization failed")]
    HmacFinishError,
    /// Output buffer is too small for the HMAC result.
    #[error("HMAC buffer too small")]
    HmacBufferTooSmall,

    // Key container errors
    /// Output buffer is too small to hold the exported key.
    #[error("Key buffer too small")]
    KeyBufferTooSmall,
}

/// Macro for defining platform-specific algorithm type aliases.
///
/// This macro creates platform-specific type aliases for cryptographic algorithms,
/// allowing different implementations on Linux and Windows.
macro_rules! define_type {
    ($vis:vis $name: ident, $linux_type: ty, $windows_type: ty) => {
        /// Default type for the current platform
        #[cfg(target_os = "linux")]
        $vis type $name = $linux_type;

        /// Default type for the current platform
        #[cfg(target_os = "windows")]
        $vis type $name = $windows_type;
    };
}

pub(crate) use define_type;
