// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! OpenSSL-based HMAC implementation for Linux systems.
//!
//! Each evaluation imports the key as an HMAC `PKey` and drives an OpenSSL
//! `Signer` configured with the selected message digest.

use openssl::pkey::PKey;
use openssl::pkey::Private;
use openssl::sign::Signer;

use super::*;

/// OpenSSL-backed HMAC provider.
///
/// Only stores the hash selection, so one instance can be shared by
/// reference between threads; all per-evaluation state lives in
/// [`OsslHmacAlgoContext`].
pub struct OsslHmacAlgo {
    /// The hash algorithm to use for HMAC.
    hash: HashAlgo,
}

impl OsslHmacAlgo {
    /// Creates a new HMAC provider from a hash instance.
    ///
    /// # Arguments
    ///
    /// * `hash` - The hash instance specifying the algorithm to use
    pub fn new(hash: HashAlgo) -> Self {
        Self { hash }
    }
}

impl MacOp for OsslHmacAlgo {
    type Context = OsslHmacAlgoContext;

    fn size(&self) -> usize {
        self.hash.size()
    }

    /// Imports `key` and prepares a signer for a single evaluation.
    ///
    /// # Errors
    ///
    /// - `CryptoError::HmacKeyImportError` - OpenSSL rejects the key
    /// - `CryptoError::HmacInitError` - the signer cannot be created
    fn mac_init(&self, key: &[u8]) -> Result<Self::Context, CryptoError> {
        let pkey = PKey::hmac(key).map_err(|e| {
            tracing::error!(?e, "Failed to import HMAC key");
            CryptoError::HmacKeyImportError
        })?;

        let signer = Signer::new(self.hash.message_digest(), &pkey).map_err(|e| {
            tracing::error!(?e, "Failed to create HMAC signer");
            CryptoError::HmacInitError
        })?;

        Ok(OsslHmacAlgoContext {
            signer,
            _pkey: pkey,
            size: self.size(),
        })
    }
}

/// Single-use HMAC evaluation backed by an OpenSSL signer.
pub struct OsslHmacAlgoContext {
    // `Signer::new` leaves the lifetime unbound. The signer's EVP_PKEY_CTX
    // holds its own reference on the key, so the context is self-contained.
    signer: Signer<'static>,
    _pkey: PKey<Private>,
    size: usize,
}

impl MacOpContext for OsslHmacAlgoContext {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.signer.update(data).map_err(|e| {
            tracing::error!(?e, "HMAC update failed");
            CryptoError::HmacUpdateError
        })
    }

    /// Writes the HMAC into `output`.
    ///
    /// # Errors
    ///
    /// - `CryptoError::HmacBufferTooSmall` - `output` is shorter than the HMAC
    /// - `CryptoError::HmacFinishError` - OpenSSL fails to finalize
    fn finish(&mut self, output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        if let Some(output) = output {
            if output.len() < self.size {
                return Err(CryptoError::HmacBufferTooSmall);
            }

            let written = self.signer.sign(output).map_err(|e| {
                tracing::error!(?e, "HMAC finalization failed");
                CryptoError::HmacFinishError
            })?;

            if written != self.size {
                return Err(CryptoError::HmacFinishError);
            }
        }

        Ok(self.size)
    }
}
