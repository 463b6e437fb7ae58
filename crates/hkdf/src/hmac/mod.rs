// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HMAC (Hash-based Message Authentication Code) adapters.
//!
//! [`HmacAlgo`] is the default keyed pseudorandom function behind key
//! derivation. It implements [`MacOp`] over a [`HashAlgo`]: every call to
//! [`MacOp::mac_init`] imports the key into a new provider object and returns
//! a [`HmacAlgoContext`] that absorbs data until it is finalized.
//!
//! # Platform Support
//!
//! - **Linux**: OpenSSL `Signer` over an HMAC `PKey`
//! - **Windows**: CNG HMAC pseudo-handles and `BCryptCreateHash`

use super::*;

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod hmac_ossl;
    } else if #[cfg(target_os = "windows")] {
        mod hmac_cng;
    } else {
        compile_error!("Unsupported target OS for HMAC implementation");
    }
}

define_type!(pub HmacAlgo, hmac_ossl::OsslHmacAlgo, hmac_cng::CngHmacAlgo);
define_type!(pub HmacAlgoContext, hmac_ossl::OsslHmacAlgoContext, hmac_cng::CngHmacAlgoContext);
