// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Generic secret key implementation.

use zeroize::Zeroize;
use zeroize::ZeroizeOnDrop;

use super::*;

/// Owned secret key material.
///
/// The bytes are zeroized when the key is dropped. `Debug` only reports the
/// key length.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GenericSecretKey {
    key_data: Vec<u8>,
}

impl GenericSecretKey {
    /// Takes ownership of already derived key bytes.
    pub(crate) fn from_vec(key_data: Vec<u8>) -> Self {
        Self { key_data }
    }

    /// Borrows the raw key bytes.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.key_data
    }
}

impl std::fmt::Debug for GenericSecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericSecretKey")
            .field("size", &self.key_data.len())
            .finish_non_exhaustive()
    }
}

impl Key for GenericSecretKey {
    fn size(&self) -> usize {
        self.key_data.len()
    }
}

impl SecretKey for GenericSecretKey {}

// Marks this key as suitable for derivation operations.
impl DerivationKey for GenericSecretKey {}

impl ImportableKey for GenericSecretKey {
    /// Copies `bytes` into a new key. Any length, including zero, is accepted;
    /// the derivation validates lengths.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            key_data: bytes.to_vec(),
        })
    }
}

impl ExportableKey for GenericSecretKey {
    fn to_bytes(&self, bytes: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let key_len = self.key_data.len();
        if let Some(bytes) = bytes {
            if bytes.len() < key_len {
                return Err(CryptoError::KeyBufferTooSmall);
            }
            bytes[..key_len].copy_from_slice(&self.key_data);
        }
        Ok(key_len)
    }
}
