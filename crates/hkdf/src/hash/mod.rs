// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Hash algorithm selection.
//!
//! [`HashAlgo`] names the hash function an HMAC is built on and reports its
//! digest size. The digest size is the HMAC output length, and therefore the
//! HKDF block size and default salt length.
//!
//! # Supported Hash Functions
//!
//! - **SHA-1**: 20 bytes (legacy, kept for RFC 5869 test cases 4-7)
//! - **SHA-256**: 32 bytes
//! - **SHA-384**: 48 bytes
//! - **SHA-512**: 64 bytes
//!
//! # Platform Support
//!
//! - **Linux**: OpenSSL message digests
//! - **Windows**: CNG pseudo-handles

use super::*;

#[cfg(target_os = "linux")]
mod hash_ossl;

#[cfg(target_os = "windows")]
mod hash_cng;

define_type!(pub HashAlgo, hash_ossl::OsslHashAlgo, hash_cng::CngHashAlgo);

#[cfg(test)]
mod tests;
