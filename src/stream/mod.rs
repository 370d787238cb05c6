//! Stream shape classification.
//!
//! - [`StreamClassifier`] / [`classify_stream`] - Tag a value by stream shape
//! - [`StreamCandidate`] - Capabilities a value exposes to the classifier
//! - [`ArrayStream`] - In-memory stream backed by a list of chunks
//! - `ReadableStream` - Standard readable stream (feature `async-io`)

mod array;
mod candidate;
mod classify;

#[cfg(feature = "async-io")]
mod readable;

pub use array::{ArrayStream, is_array_stream};
pub use candidate::{GetReader, StreamCandidate};
pub use classify::{StreamClassifier, StreamKind, classify_stream};

#[cfg(feature = "async-io")]
pub use readable::{DEFAULT_READ_CHUNK_SIZE, ReadableStream};
