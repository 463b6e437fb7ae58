// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Core operation traits.
//!
//! This module defines the trait interfaces the rest of the crate is written
//! against:
//!
//! - [`key`]: key markers and import/export of raw key bytes
//! - [`mac`]: the keyed pseudorandom function consumed by HKDF
//! - [`derivation`]: key derivation
//!
//! # Buffer Patterns
//!
//! Operations that write into caller memory use an optional buffer:
//! - `None`: query the required buffer size
//! - `Some(buffer)`: perform the actual operation
mod derivation;
mod key;
mod mac;

pub use derivation::*;
pub use key::*;
pub use mac::*;

use super::*;
