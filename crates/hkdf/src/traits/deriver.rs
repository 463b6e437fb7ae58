// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Key derivation operation wrapper.

use super::*;

/// Key derivation operation wrapper.
///
/// Provides a single entry point for every [`DeriveOp`] implementation.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Performs key derivation.
    ///
    /// # Arguments
    ///
    /// * `algo` - The configured key derivation algorithm
    /// * `key` - The source key material to derive from
    /// * `derived_len` - The desired length of the derived key in bytes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source key is not acceptable for the configured algorithm
    /// - The requested derived key length is invalid
    /// - The underlying MAC operation fails
    pub fn derive<Algo: DeriveOp>(
        algo: &Algo,
        key: &Algo::Key,
        derived_len: usize,
    ) -> Result<Algo::DerivedKey, CryptoError> {
        algo.derive(key, derived_len)
    }

    /// Performs key derivation and returns the derived bytes.
    pub fn derive_vec<Algo>(
        algo: &Algo,
        key: &Algo::Key,
        derived_len: usize,
    ) -> Result<Vec<u8>, CryptoError>
    where
        Algo: DeriveOp,
        Algo::DerivedKey: ExportableKey,
    {
        algo.derive(key, derived_len)?.to_vec()
    }
}
