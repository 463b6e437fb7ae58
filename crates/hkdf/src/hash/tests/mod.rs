// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use test_with_tracing::test;

use super::*;

#[test]
fn test_hash_sizes() {
    assert_eq!(HashAlgo::sha1().size(), 20);
    assert_eq!(HashAlgo::sha256().size(), 32);
    assert_eq!(HashAlgo::sha384().size(), 48);
    assert_eq!(HashAlgo::sha512().size(), 64);
}

#[test]
fn test_hash_algo_is_copy() {
    let hash = HashAlgo::sha256();
    let copy = hash;
    assert_eq!(hash.size(), copy.size());
}
