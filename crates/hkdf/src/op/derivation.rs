// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Key derivation operation trait.
//!
//! This module defines the [`DeriveOp`] trait, which provides a generic interface
//! for key derivation operations. Key derivation is the process of generating
//! cryptographic key material from a source key, here with HKDF.

use super::*;

/// Trait for key derivation operations.
///
/// Implementations carry their own configuration (mode, salt, context) so
/// that a single `derive` call only needs the source key and output length.
pub trait DeriveOp {
    /// The source key type.
    type Key: DerivationKey;

    /// The derived key type.
    type DerivedKey: SecretKey;

    /// Derives `derived_len` bytes of key material from `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source key is not acceptable for the configured algorithm
    /// - The requested derived key length is invalid
    /// - The underlying MAC operation fails
    fn derive(&self, key: &Self::Key, derived_len: usize) -> Result<Self::DerivedKey, CryptoError>;
}
