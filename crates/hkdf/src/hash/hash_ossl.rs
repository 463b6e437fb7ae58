// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! OpenSSL-based hash algorithm selector for Linux systems.

use openssl::hash::MessageDigest;

/// OpenSSL-based hash algorithm.
///
/// Stores the OpenSSL `MessageDigest` used to key HMAC signers.
#[derive(Clone, Copy)]
pub struct OsslHashAlgo {
    md: MessageDigest,
}

impl OsslHashAlgo {
    fn new(md: MessageDigest) -> Self {
        Self { md }
    }

    /// Creates a new SHA-1 hash instance.
    ///
    /// # Security Warning
    ///
    /// SHA-1 is cryptographically broken for collision resistance. HMAC-SHA1
    /// is only provided for compatibility with existing derivations.
    pub fn sha1() -> Self {
        Self::new(MessageDigest::sha1())
    }

    /// Creates a new SHA-256 hash instance.
    pub fn sha256() -> Self {
        Self::new(MessageDigest::sha256())
    }

    /// Creates a new SHA-384 hash instance.
    pub fn sha384() -> Self {
        Self::new(MessageDigest::sha384())
    }

    /// Creates a new SHA-512 hash instance.
    pub fn sha512() -> Self {
        Self::new(MessageDigest::sha512())
    }

    /// Returns the hash output size in bytes.
    pub fn size(&self) -> usize {
        self.md.size()
    }

    /// Returns the OpenSSL MessageDigest for this hash algorithm.
    pub(crate) fn message_digest(&self) -> MessageDigest {
        self.md
    }
}
