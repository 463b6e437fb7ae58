// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use zeroize::Zeroizing;

use super::*;

/// Expand stage: stretches a PRK into output keying material.
pub(crate) struct Expander<'a, M: MacOp> {
    mac: &'a M,
}

impl<'a, M: MacOp> Expander<'a, M> {
    pub(crate) fn new(mac: &'a M) -> Self {
        Self { mac }
    }

    /// Derives exactly `out_len` bytes from `prk`, bound to `info`.
    ///
    /// The PRK is only required to be non-empty. Every block is computed by a
    /// freshly keyed MAC context fed `T(i-1)`, then `info`, then the block
    /// index.
    pub(crate) fn expand(
        &self,
        prk: &[u8],
        info: &[u8],
        out_len: usize,
    ) -> Result<Vec<u8>, CryptoError> {
        if out_len == 0 {
            tracing::error!(
                error = ?CryptoError::HkdfInvalidLength,
                out_len,
                "HKDF expand: zero output length"
            );
            return Err(CryptoError::HkdfInvalidLength);
        }

        if prk.is_empty() {
            tracing::error!(error = ?CryptoError::HkdfInvalidInput, "HKDF expand: empty PRK");
            return Err(CryptoError::HkdfInvalidInput);
        }

        let hash_len = self.mac.size();
        if hash_len == 0 {
            tracing::error!(
                error = ?CryptoError::MacInvalidOutputSize,
                "HKDF expand: zero MAC size"
            );
            return Err(CryptoError::MacInvalidOutputSize);
        }

        let block_count = u8::try_from(out_len.div_ceil(hash_len)).map_err(|_| {
            tracing::error!(
                error = ?CryptoError::HkdfInvalidLength,
                out_len,
                max_len = MAX_BLOCKS * hash_len,
                "HKDF expand: output length too large"
            );
            CryptoError::HkdfInvalidLength
        })?;

        let mut okm = Vec::with_capacity(out_len);
        let mut block = Zeroizing::new(vec![0u8; hash_len]);

        for index in 1..=block_count {
            let mut context = self.mac.mac_init(prk)?;
            if index > 1 {
                context.update(block.as_slice())?;
            }
            context.update(info)?;
            context.update(&[index])?;

            let written = context.finish(Some(block.as_mut_slice()))?;
            if written != hash_len {
                tracing::error!(written, hash_len, "HKDF expand: MAC size mismatch");
                return Err(CryptoError::MacInvalidOutputSize);
            }

            let take = (out_len - okm.len()).min(hash_len);
            okm.extend_from_slice(&block[..take]);
        }

        tracing::trace!(block_count, out_len, "HKDF expand complete");
        Ok(okm)
    }
}
