// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HMAC-based extract-and-expand key derivation (RFC 5869).
//!
//! ```text
//! PRK  = MAC(salt, IKM)
//! T(0) = empty
//! T(i) = MAC(PRK, T(i-1) || info || i)      for i = 1..=N
//! OKM  = first L bytes of T(1) || ... || T(N),  N = ceil(L / HashLen)
//! ```
//!
//! The free functions [`extract`], [`expand`] and [`hkdf`] work with any
//! [`MacOp`]. [`HkdfAlgo`] packages the same operations behind [`DeriveOp`]
//! for callers that go through [`KeyDeriver`].

mod derive;
mod expand;
mod extract;
mod hkdf_algo;

pub use derive::*;
pub use hkdf_algo::*;

use zeroize::Zeroizing;

use self::expand::Expander;
use self::extract::Extractor;
use super::*;

/// Upper bound on the number of expansion blocks.
///
/// The block index is a single byte starting at 1, so at most
/// `255 * HashLen` bytes can be derived from one PRK.
pub const MAX_BLOCKS: usize = 255;

/// HKDF derivation mode selector.
///
/// Specifies which phase(s) of the HKDF algorithm to execute. This allows
/// flexible usage patterns including full HKDF, or individual Extract/Expand
/// operations for scenarios requiring multiple derived keys from the same input.
///
/// # RFC 5869 Specification
///
/// ```text
/// HKDF(salt, IKM, info, L) = HKDF-Expand(HKDF-Extract(salt, IKM), info, L)
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HkdfMode {
    /// Perform only HKDF-Extract(salt, IKM) → PRK.
    ///
    /// Outputs a pseudorandom key of MAC output length. Use this mode to
    /// derive the PRK once and run several Expand operations from it.
    Extract,

    /// Perform only HKDF-Expand(PRK, info, L) → OKM.
    Expand,

    /// Perform full HKDF: Extract followed by Expand.
    ExtractAndExpand,
}
