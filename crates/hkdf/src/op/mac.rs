// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Traits for keyed pseudorandom functions (MACs).
//!
//! HKDF is defined over an HMAC, but the derivation itself only needs two
//! things from it: a way to create a keyed instance that absorbs data and
//! produces a fixed-length output, and the length of that output. [`MacOp`]
//! captures exactly that, so any keyed PRF can back a derivation.
//!
//! # Lifecycle
//!
//! 1. Initialize: call [`MacOp::mac_init`] with the key to get a context
//! 2. Update: call [`MacOpContext::update`] with one or more data chunks
//! 3. Finalize: call [`MacOpContext::finish`] to produce the output
//!
//! A context is single-use: it is keyed for one evaluation and dropped
//! afterwards. Callers needing another evaluation with the same key create a
//! new context, which keeps concurrent derivations from ever observing each
//! other's state.

use super::*;

/// Keyed pseudorandom function used by key derivation.
///
/// # Implementation Requirements
///
/// Implementors must:
/// - Return the same positive [`size`](Self::size) for every call
/// - Produce deterministic output for a given key and message
/// - Return a context that has never been fed data from [`mac_init`](Self::mac_init)
pub trait MacOp {
    /// The context type for a single keyed MAC evaluation.
    type Context: MacOpContext;

    /// Returns the MAC output length in bytes.
    fn size(&self) -> usize;

    /// Creates a freshly keyed MAC context.
    ///
    /// # Arguments
    ///
    /// * `key` - Key material for this evaluation
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be imported or the provider fails to
    /// initialize.
    fn mac_init(&self, key: &[u8]) -> Result<Self::Context, CryptoError>;

    /// Computes the MAC of `data` under `key` in a single call.
    ///
    /// # Arguments
    ///
    /// * `key` - Key material
    /// * `data` - Message to authenticate
    /// * `output` - Optional output buffer. If `None`, only returns the required size.
    ///
    /// # Returns
    ///
    /// The number of bytes written to `output`, or the required size.
    fn mac(
        &self,
        key: &[u8],
        data: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        match output {
            Some(output) => {
                let mut context = self.mac_init(key)?;
                context.update(data)?;
                context.finish(Some(output))
            }
            None => Ok(self.size()),
        }
    }
}

/// Context for a single keyed MAC evaluation.
pub trait MacOpContext {
    /// Absorbs a chunk of data.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the update.
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;

    /// Finalizes the evaluation.
    ///
    /// # Arguments
    ///
    /// * `output` - Optional output buffer. If `None`, only returns the required size.
    ///
    /// # Returns
    ///
    /// The number of bytes written to `output`, or the required size.
    ///
    /// # Errors
    ///
    /// Returns an error if the output buffer is too small or finalization fails.
    fn finish(&mut self, output: Option<&mut [u8]>) -> Result<usize, CryptoError>;
}
