// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;

/// Extract stage: concentrates IKM entropy into a PRK.
pub(crate) struct Extractor<'a, M: MacOp> {
    mac: &'a M,
}

impl<'a, M: MacOp> Extractor<'a, M> {
    pub(crate) fn new(mac: &'a M) -> Self {
        Self { mac }
    }

    /// Computes `PRK = MAC(salt, ikm)`.
    ///
    /// An absent or empty salt is replaced by `HashLen` zero bytes before the
    /// MAC is keyed. The returned PRK is exactly `HashLen` bytes.
    pub(crate) fn extract(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        if ikm.is_empty() {
            tracing::error!(error = ?CryptoError::HkdfInvalidInput, "HKDF extract: empty IKM");
            return Err(CryptoError::HkdfInvalidInput);
        }

        let hash_len = self.mac.size();
        if hash_len == 0 {
            tracing::error!(
                error = ?CryptoError::MacInvalidOutputSize,
                "HKDF extract: zero MAC size"
            );
            return Err(CryptoError::MacInvalidOutputSize);
        }

        let default_salt;
        let salt = match salt {
            Some(salt) if !salt.is_empty() => salt,
            _ => {
                default_salt = vec![0u8; hash_len];
                default_salt.as_slice()
            }
        };

        let mut context = self.mac.mac_init(salt)?;
        context.update(ikm)?;

        let mut prk = vec![0u8; hash_len];
        let written = context.finish(Some(&mut prk))?;
        if written != hash_len {
            tracing::error!(written, hash_len, "HKDF extract: MAC size mismatch");
            return Err(CryptoError::MacInvalidOutputSize);
        }

        tracing::trace!(hash_len, "HKDF extract complete");
        Ok(prk)
    }
}
