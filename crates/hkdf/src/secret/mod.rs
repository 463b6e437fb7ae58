// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Generic secret key container.
//!
//! [`GenericSecretKey`] carries raw secret bytes between derivation steps:
//! input keying material, pseudorandom keys and output keying material. It
//! implements the key marker traits needed by [`DeriveOp`] and wipes its
//! contents when dropped.
mod key;

pub use key::*;

use super::*;
