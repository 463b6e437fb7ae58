// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Windows CNG (Cryptography Next Generation) HMAC implementation.
//!
//! Keys are bound to a hash object at creation time with `BCryptCreateHash`
//! on one of the HMAC pseudo-handles, so no algorithm provider is opened.

use windows::Win32::Security::Cryptography::*;

use super::*;

/// CNG-backed HMAC provider.
pub struct CngHmacAlgo {
    hash: HashAlgo,
    algo_handle: BCRYPT_ALG_HANDLE,
}

impl CngHmacAlgo {
    /// Creates a new HMAC provider from a hash instance.
    pub fn new(hash: HashAlgo) -> Self {
        Self {
            algo_handle: Self::hmac_handle(&hash),
            hash,
        }
    }

    fn hmac_handle(hash: &HashAlgo) -> BCRYPT_ALG_HANDLE {
        match hash.handle() {
            BCRYPT_SHA1_ALG_HANDLE => BCRYPT_HMAC_SHA1_ALG_HANDLE,
            BCRYPT_SHA256_ALG_HANDLE => BCRYPT_HMAC_SHA256_ALG_HANDLE,
            BCRYPT_SHA384_ALG_HANDLE => BCRYPT_HMAC_SHA384_ALG_HANDLE,
            // HashAlgo only hands out the four SHA handles.
            _ => BCRYPT_HMAC_SHA512_ALG_HANDLE,
        }
    }
}

impl MacOp for CngHmacAlgo {
    type Context = CngHmacAlgoContext;

    fn size(&self) -> usize {
        self.hash.size()
    }

    fn mac_init(&self, key: &[u8]) -> Result<Self::Context, CryptoError> {
        Ok(CngHmacAlgoContext {
            handle: CngHmacHandle::new(self.algo_handle, key)?,
            sig_len: self.hash.size(),
        })
    }
}

/// Single-use HMAC evaluation backed by a CNG hash object.
pub struct CngHmacAlgoContext {
    handle: CngHmacHandle,
    sig_len: usize,
}

impl MacOpContext for CngHmacAlgoContext {
    #[allow(unsafe_code)]
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        //SAFETY: Calling Windows CNG API directly.
        let status = unsafe { BCryptHashData(self.handle.handle(), data, 0) };
        status.ok().map_err(|e| {
            tracing::error!(?e, "HMAC update failed");
            CryptoError::HmacUpdateError
        })
    }

    /// Writes the HMAC into `output`.
    ///
    /// CNG requires the output buffer to be exactly the HMAC length, so only
    /// the leading `sig_len` bytes of `output` are handed to the provider.
    #[allow(unsafe_code)]
    fn finish(&mut self, output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        if let Some(output) = output {
            if output.len() < self.sig_len {
                return Err(CryptoError::HmacBufferTooSmall);
            }
            //SAFETY: Calling Windows CNG API directly.
            let status =
                unsafe { BCryptFinishHash(self.handle.handle(), &mut output[..self.sig_len], 0) };
            status.ok().map_err(|e| {
                tracing::error!(?e, "HMAC finalization failed");
                CryptoError::HmacFinishError
            })?;
        }
        Ok(self.sig_len)
    }
}

/// Owned CNG hash object keyed for HMAC, destroyed on drop.
struct CngHmacHandle {
    handle: BCRYPT_HASH_HANDLE,
}

impl CngHmacHandle {
    #[allow(unsafe_code)]
    fn new(algo: BCRYPT_ALG_HANDLE, key: &[u8]) -> Result<Self, CryptoError> {
        let mut handle = BCRYPT_HASH_HANDLE::default();
        //SAFETY: Calling Windows CNG APIs directly
        let status = unsafe { BCryptCreateHash(algo, &mut handle, None, Some(key), 0) };
        status.ok().map_err(|e| {
            tracing::error!(?e, "Failed to create HMAC object");
            CryptoError::HmacInitError
        })?;
        Ok(Self { handle })
    }

    fn handle(&self) -> BCRYPT_HASH_HANDLE {
        self.handle
    }
}

impl Drop for CngHmacHandle {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        //SAFETY: Calling Windows CNG API directly.
        let _ = unsafe { BCryptDestroyHash(self.handle) };
    }
}
