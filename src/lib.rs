//! streamprobe
//!
//! Stream shape classification and byte buffer helpers for streaming
//! pipelines.
//!
//! A streaming library accepts input in several shapes and has to decide how
//! to consume each one. `streamprobe` answers that question and handles the
//! raw buffers flowing through:
//!
//! - classify a value as an array-backed stream, a standard readable stream,
//!   a reader-capable stream of another implementation, or not a stream
//! - reject legacy native pull streams with an actionable error
//! - recognize byte arrays behind a dynamically typed boundary
//! - concatenate byte arrays with a single allocation
//!
//! The crate intentionally:
//! - does NOT read or transform stream contents while classifying
//! - does NOT perform I/O of its own
//! - does NOT handle text encodings
//!
//! # Classification
//!
//! ```
//! use streamprobe::{ArrayStream, ProbeError, StreamKind, classify_stream};
//!
//! fn main() -> Result<(), ProbeError> {
//!     let stream: ArrayStream = [&b"hello "[..], &b"world"[..]].into_iter().collect();
//!
//!     match classify_stream(Some(&stream))? {
//!         Some(StreamKind::Array) => println!("{} chunks in memory", stream.len()),
//!         Some(kind) => println!("{} stream", kind),
//!         None => println!("not a stream"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Buffers
//!
//! ```
//! use bytes::Bytes;
//! use streamprobe::{concat, is_byte_array};
//!
//! let head = Bytes::from_static(&[1, 2]);
//! let tail = vec![3u8, 4, 5];
//! assert!(is_byte_array(&tail));
//!
//! let joined = concat(&[&head, &tail])?;
//! assert_eq!(&joined[..], &[1, 2, 3, 4, 5]);
//! # Ok::<(), streamprobe::ProbeError>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use streamprobe::{ReadableStream, StreamKind, classify_stream};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Send + 'static>(reader: R) -> Result<(), streamprobe::ProbeError> {
//!     let stream = ReadableStream::from_reader(reader);
//!     assert_eq!(classify_stream(Some(&stream))?, Some(StreamKind::Web));
//!
//!     let data = stream.into_bytes().await?;
//!     println!("{} bytes", data.len());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod stream;

//
// Public surface (intentionally tiny)
//

pub use buffer::{as_byte_slice, concat, concat_bytes, is_byte_array};
pub use config::{Environment, is_server};
pub use error::ProbeError;
pub use stream::{
    ArrayStream, GetReader, StreamCandidate, StreamClassifier, StreamKind, classify_stream,
    is_array_stream,
};

#[cfg(feature = "async-io")]
pub use stream::{DEFAULT_READ_CHUNK_SIZE, ReadableStream};
