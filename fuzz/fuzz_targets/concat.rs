#![no_main]

use std::any::Any;

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use streamprobe::{ArrayStream, concat, concat_bytes};

fuzz_target!(|parts: Vec<Vec<u8>>| {
    let total: usize = parts.iter().map(Vec::len).sum();

    // Dynamic path over owned vectors
    let refs: Vec<&dyn Any> = parts.iter().map(|p| p as &dyn Any).collect();
    let joined = concat(&refs).unwrap();
    assert_eq!(joined.len(), total);

    // Verify: every part appears contiguously and in order
    let mut offset = 0;
    for part in &parts {
        assert_eq!(&joined[offset..offset + part.len()], &part[..]);
        offset += part.len();
    }

    // Verify: typed path agrees
    let bytes: Vec<Bytes> = parts.iter().cloned().map(Bytes::from).collect();
    assert_eq!(concat_bytes(&bytes), joined);

    // Verify: array stream collapses to the same buffer
    let stream: ArrayStream = bytes.into_iter().collect();
    assert_eq!(stream.into_bytes(), joined);

    // Verify: a non byte array anywhere is rejected
    if !parts.is_empty() {
        let bad = parts.len() as u64;
        let mut mixed = refs.clone();
        mixed.insert(parts.len() / 2, &bad);
        assert!(concat(&mixed).is_err());
    }
});
