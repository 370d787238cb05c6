//! Classifying inputs before handing them to a pipeline.
//!
//! Run with:
//!     cargo run --example classify

use std::any::Any;

use bytes::Bytes;
use streamprobe::{
    ArrayStream, GetReader, ProbeError, StreamCandidate, StreamKind, classify_stream, concat,
    is_server,
};

/// A stream from another library that exposes a reader.
struct VendorStream {
    parts: Vec<Bytes>,
}

impl GetReader for VendorStream {
    fn get_reader(&self) -> Box<dyn Iterator<Item = Bytes> + '_> {
        Box::new(self.parts.iter().cloned())
    }
}

impl StreamCandidate for VendorStream {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn reader(&self) -> Option<&dyn GetReader> {
        Some(self)
    }
}

fn describe(name: &str, input: Option<&dyn StreamCandidate>) {
    match classify_stream(input) {
        Ok(Some(kind)) => println!("{:<10} -> {}", name, kind),
        Ok(None) => println!("{:<10} -> not a stream", name),
        Err(e) => println!("{:<10} -> error: {}", name, e),
    }
}

fn main() -> Result<(), ProbeError> {
    println!("server host: {}", is_server());

    let array: ArrayStream = [&b"hello "[..], &b"world"[..]].into_iter().collect();
    let vendor = VendorStream {
        parts: vec![Bytes::from_static(b"vendor "), Bytes::from_static(b"bytes")],
    };

    describe("array", Some(&array));
    describe("vendor", Some(&vendor));
    describe("number", Some(&42i32));
    describe("missing", None);

    // Collapse whatever we got into one buffer
    let collected = match classify_stream(Some(&vendor))? {
        Some(StreamKind::WebLike) => {
            let parts: Vec<Bytes> = vendor.get_reader().collect();
            let refs: Vec<&dyn Any> = parts.iter().map(|p| p as &dyn Any).collect();
            concat(&refs)?
        }
        _ => Bytes::new(),
    };
    println!("vendor bytes: {:?}", collected);
    println!("array bytes: {:?}", array.into_bytes());

    Ok(())
}
