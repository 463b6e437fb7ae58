// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Key marker traits and raw import/export.
//!
//! Key derivation only handles symmetric secret material, so the hierarchy is
//! small:
//!
//! - [`Key`] is the root trait for every key type
//! - [`SecretKey`] and [`DerivationKey`] classify key material
//! - [`ImportableKey`] and [`ExportableKey`] move keys in and out of raw bytes

use super::*;

/// Base trait for all cryptographic keys.
pub trait Key {
    /// Returns the length of the key in bytes.
    fn size(&self) -> usize;

    /// Returns the length of the key in bits.
    fn bits(&self) -> usize {
        self.size() * 8
    }
}

/// Marker trait for secret (symmetric) key material.
///
/// Secret keys must never be logged and should be zeroized from memory when
/// no longer needed.
pub trait SecretKey: Key {}

/// Marker trait for keys that can be used as input to [`DeriveOp`].
pub trait DerivationKey: Key {}

/// Trait for keys that can be exported to raw bytes.
pub trait ExportableKey: Key {
    /// Exports the key to its byte representation.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Optional output buffer. If `None`, only calculates required size.
    ///
    /// # Returns
    ///
    /// Returns the number of bytes written to the buffer, or the required
    /// buffer size if `bytes` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::KeyBufferTooSmall` if the output buffer cannot
    /// hold the key.
    fn to_bytes(&self, bytes: Option<&mut [u8]>) -> Result<usize, CryptoError>;

    /// Exports the key to a newly allocated vector.
    ///
    /// The caller owns the returned copy of the key material and is
    /// responsible for clearing it.
    fn to_vec(&self) -> Result<Vec<u8>, CryptoError> {
        let size = self.to_bytes(None)?;
        let mut buffer = vec![0u8; size];
        let written = self.to_bytes(Some(&mut buffer))?;
        buffer.truncate(written);
        Ok(buffer)
    }
}

/// Trait for keys that can be imported from raw bytes.
pub trait ImportableKey: Key {
    /// Imports a key from its raw byte representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the key material is not acceptable for the key type.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError>
    where
        Self: Sized;
}
