// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! High-level operation wrappers.
//!
//! Each wrapper forwards to the corresponding operation trait and adds
//! convenience methods that return owned `Vec<u8>` results:
//!
//! - [`Mac`]: keyed MAC computation (one-shot and streaming)
//! - [`KeyDeriver`]: key derivation
//!
//! # Thread Safety
//!
//! Operation contexts are not thread-safe. Each context should be used
//! from a single thread. For concurrent operations, create separate contexts.
mod deriver;
mod mac;

pub use deriver::*;
pub use mac::*;

use super::*;
