// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HKDF as a configured [`DeriveOp`].

use super::*;

/// HKDF derivation configured with a mode, a MAC, a salt and an info string.
///
/// The key passed to [`DeriveOp::derive`] is the IKM in
/// [`HkdfMode::Extract`] and [`HkdfMode::ExtractAndExpand`] modes and the PRK
/// in [`HkdfMode::Expand`] mode. The salt is ignored when only expanding and
/// the info is ignored when only extracting.
///
/// # Example
///
/// ```ignore
/// let hmac = HmacAlgo::new(HashAlgo::sha256());
/// let algo = HkdfAlgo::new(HkdfMode::ExtractAndExpand, &hmac, Some(b"salt"), Some(b"info"));
/// let okm = KeyDeriver::derive(&algo, &ikm, 32)?;
/// ```
pub struct HkdfAlgo<'a, M: MacOp> {
    mode: HkdfMode,
    mac: &'a M,
    salt: Option<&'a [u8]>,
    info: Option<&'a [u8]>,
}

impl<'a, M: MacOp> HkdfAlgo<'a, M> {
    /// Creates a new HKDF derivation.
    pub fn new(
        mode: HkdfMode,
        mac: &'a M,
        salt: Option<&'a [u8]>,
        info: Option<&'a [u8]>,
    ) -> Self {
        Self {
            mode,
            mac,
            salt,
            info,
        }
    }

    /// Returns the configured mode.
    pub fn mode(&self) -> HkdfMode {
        self.mode
    }
}

impl<M: MacOp> DeriveOp for HkdfAlgo<'_, M> {
    type Key = GenericSecretKey;
    type DerivedKey = GenericSecretKey;

    /// Runs the configured HKDF phase(s) over `key`.
    ///
    /// # Errors
    ///
    /// In [`HkdfMode::Extract`] mode `derived_len` must equal the MAC size,
    /// otherwise `CryptoError::HkdfInvalidLength` is returned. All other
    /// errors come from [`extract`], [`expand`] and [`hkdf`].
    fn derive(&self, key: &Self::Key, derived_len: usize) -> Result<Self::DerivedKey, CryptoError> {
        let derived = match self.mode {
            HkdfMode::Extract => {
                if derived_len != self.mac.size() {
                    tracing::error!(
                        error = ?CryptoError::HkdfInvalidLength,
                        derived_len,
                        hash_len = self.mac.size(),
                        "HKDF extract-only derivation must produce exactly one MAC block"
                    );
                    return Err(CryptoError::HkdfInvalidLength);
                }
                extract(self.mac, key.as_bytes(), self.salt)?
            }
            HkdfMode::Expand => expand(self.mac, key.as_bytes(), self.info, derived_len)?,
            HkdfMode::ExtractAndExpand => {
                hkdf(self.mac, key.as_bytes(), self.salt, self.info, derived_len)?
            }
        };

        Ok(GenericSecretKey::from_vec(derived))
    }
}
