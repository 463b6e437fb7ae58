// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Free-function HKDF entry points.

use super::*;

/// HKDF-Extract: derives a pseudorandom key from input keying material.
///
/// # Arguments
///
/// * `mac` - Keyed pseudorandom function, usually [`HmacAlgo`]
/// * `ikm` - Input keying material, must not be empty
/// * `salt` - Optional salt; absent or empty means `mac.size()` zero bytes
///
/// # Returns
///
/// A PRK of exactly `mac.size()` bytes.
///
/// # Errors
///
/// - `CryptoError::HkdfInvalidInput` - `ikm` is empty
/// - `CryptoError::MacInvalidOutputSize` - `mac` reports a zero output size
/// - Any error reported by the MAC backend
pub fn extract<M: MacOp>(mac: &M, ikm: &[u8], salt: Option<&[u8]>) -> Result<Vec<u8>, CryptoError> {
    Extractor::new(mac).extract(ikm, salt)
}

/// HKDF-Expand: derives `out_len` bytes of output keying material from a PRK.
///
/// `info` absent is the same as `info` empty. The PRK is only checked for
/// emptiness; PRKs shorter than `mac.size()` are accepted.
///
/// # Errors
///
/// - `CryptoError::HkdfInvalidLength` - `out_len` is zero or exceeds
///   `255 * mac.size()`
/// - `CryptoError::HkdfInvalidInput` - `prk` is empty
/// - `CryptoError::MacInvalidOutputSize` - `mac` reports a zero output size
pub fn expand<M: MacOp>(
    mac: &M,
    prk: &[u8],
    info: Option<&[u8]>,
    out_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    Expander::new(mac).expand(prk, info.unwrap_or_default(), out_len)
}

/// Full HKDF: [`extract`] followed by [`expand`].
///
/// Extraction errors are returned before any expansion block is computed.
/// The intermediate PRK is zeroized once expansion finishes.
pub fn hkdf<M: MacOp>(
    mac: &M,
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
    out_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    let prk = Zeroizing::new(extract(mac, ikm, salt)?);
    expand(mac, &prk, info, out_len)
}

/// [`extract`] with HMAC-SHA256.
pub fn extract_hmac_sha256(ikm: &[u8], salt: Option<&[u8]>) -> Result<Vec<u8>, CryptoError> {
    extract(&HmacAlgo::new(HashAlgo::sha256()), ikm, salt)
}

/// [`extract`] with HMAC-SHA512.
pub fn extract_hmac_sha512(ikm: &[u8], salt: Option<&[u8]>) -> Result<Vec<u8>, CryptoError> {
    extract(&HmacAlgo::new(HashAlgo::sha512()), ikm, salt)
}

/// [`expand`] with HMAC-SHA256. At most 8160 bytes can be derived.
pub fn expand_hmac_sha256(
    prk: &[u8],
    info: Option<&[u8]>,
    out_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    expand(&HmacAlgo::new(HashAlgo::sha256()), prk, info, out_len)
}

/// [`expand`] with HMAC-SHA512. At most 16320 bytes can be derived.
pub fn expand_hmac_sha512(
    prk: &[u8],
    info: Option<&[u8]>,
    out_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    expand(&HmacAlgo::new(HashAlgo::sha512()), prk, info, out_len)
}

/// [`hkdf`] with HMAC-SHA256.
pub fn hkdf_hmac_sha256(
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
    out_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    hkdf(&HmacAlgo::new(HashAlgo::sha256()), ikm, salt, info, out_len)
}

/// [`hkdf`] with HMAC-SHA512.
pub fn hkdf_hmac_sha512(
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
    out_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    hkdf(&HmacAlgo::new(HashAlgo::sha512()), ikm, salt, info, out_len)
}
