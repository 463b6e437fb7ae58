// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! MAC operation wrapper.
//!
//! This module provides a unified interface for keyed MAC operations, supporting
//! both single-operation and streaming modes.

use super::*;

/// MAC operation wrapper.
///
/// This structure provides a unified interface for MAC operations, wrapping
/// the underlying algorithm-specific implementations to provide a consistent API.
pub struct Mac;

impl Mac {
    /// Performs single-operation MAC computation.
    ///
    /// # Arguments
    ///
    /// * `algo` - The MAC algorithm implementation
    /// * `key` - Key material
    /// * `data` - Input data to authenticate
    /// * `output` - Optional output buffer. If `None`, only calculates required size.
    ///
    /// # Returns
    ///
    /// Returns the number of bytes written to the output buffer, or the required
    /// buffer size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output buffer is too small
    /// - The key cannot be imported
    /// - The underlying cryptographic operation fails
    pub fn mac<Algo: MacOp>(
        algo: &Algo,
        key: &[u8],
        data: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.mac(key, data, output)
    }

    /// Performs single-operation MAC computation and returns the result as a vector.
    pub fn mac_vec<Algo: MacOp>(
        algo: &Algo,
        key: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let mac_size = algo.mac(key, data, None)?;
        let mut output = vec![0u8; mac_size];
        let written = algo.mac(key, data, Some(&mut output))?;
        output.truncate(written);
        Ok(output)
    }

    /// Initializes a streaming MAC context keyed with `key`.
    ///
    /// The returned context processes data in chunks through
    /// [`MacOpContext::update`] and produces the result with
    /// [`MacOpContext::finish`].
    pub fn mac_init<Algo: MacOp>(algo: &Algo, key: &[u8]) -> Result<Algo::Context, CryptoError> {
        algo.mac_init(key)
    }
}
