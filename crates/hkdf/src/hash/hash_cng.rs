// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Windows CNG (Cryptography Next Generation) hash algorithm selector.
//!
//! CNG exposes pseudo-handles for each hash and HMAC algorithm, so selecting
//! an algorithm never opens a provider and never fails.

use windows::Win32::Security::Cryptography::*;

/// CNG-based hash algorithm.
#[derive(Clone, Copy)]
pub struct CngHashAlgo {
    bcrypt_algo: BCRYPT_ALG_HANDLE,
    size: usize,
}

impl CngHashAlgo {
    fn new(bcrypt_algo: BCRYPT_ALG_HANDLE, size: usize) -> Self {
        Self { bcrypt_algo, size }
    }

    /// Creates a new SHA-1 hash instance.
    ///
    /// # Security Warning
    ///
    /// SHA-1 is cryptographically broken for collision resistance. HMAC-SHA1
    /// is only provided for compatibility with existing derivations.
    pub fn sha1() -> Self {
        Self::new(BCRYPT_SHA1_ALG_HANDLE, 20)
    }

    /// Creates a new SHA-256 hash instance.
    pub fn sha256() -> Self {
        Self::new(BCRYPT_SHA256_ALG_HANDLE, 32)
    }

    /// Creates a new SHA-384 hash instance.
    pub fn sha384() -> Self {
        Self::new(BCRYPT_SHA384_ALG_HANDLE, 48)
    }

    /// Creates a new SHA-512 hash instance.
    pub fn sha512() -> Self {
        Self::new(BCRYPT_SHA512_ALG_HANDLE, 64)
    }

    /// Returns the hash output size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the CNG pseudo-handle of the hash algorithm.
    pub(crate) fn handle(&self) -> BCRYPT_ALG_HANDLE {
        self.bcrypt_algo
    }
}
