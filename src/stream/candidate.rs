//! The adapter interface values implement to be classified.

use std::any::Any;

use bytes::{Bytes, BytesMut};

/// Hands out a reader over a stream's chunks.
pub trait GetReader {
    /// Returns a reader yielding the stream's chunks in order.
    fn get_reader(&self) -> Box<dyn Iterator<Item = Bytes> + '_>;
}

/// A value the [`StreamClassifier`](crate::StreamClassifier) can inspect.
///
/// Every capability defaults to "absent", so plain data types only need
/// [`as_any`](StreamCandidate::as_any). Stream implementations that are not
/// one of this crate's own stream types advertise themselves through
/// [`reader`](StreamCandidate::reader).
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use bytes::Bytes;
/// use streamprobe::{GetReader, StreamCandidate, StreamKind, classify_stream};
///
/// struct Chunks(Vec<Bytes>);
///
/// impl GetReader for Chunks {
///     fn get_reader(&self) -> Box<dyn Iterator<Item = Bytes> + '_> {
///         Box::new(self.0.iter().cloned())
///     }
/// }
///
/// impl StreamCandidate for Chunks {
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn reader(&self) -> Option<&dyn GetReader> {
///         Some(self)
///     }
/// }
///
/// let chunks = Chunks(vec![Bytes::from_static(b"a")]);
/// assert_eq!(classify_stream(Some(&chunks))?, Some(StreamKind::WebLike));
/// # Ok::<(), streamprobe::ProbeError>(())
/// ```
pub trait StreamCandidate: Any {
    /// Returns `self` as [`Any`] for concrete type tests.
    fn as_any(&self) -> &dyn Any;

    /// Returns the reader acquisition capability, if the value has one.
    fn reader(&self) -> Option<&dyn GetReader> {
        None
    }

    /// Returns true if the value carries the low-level read trigger of a
    /// legacy native pull stream.
    fn has_read_trigger(&self) -> bool {
        false
    }

    /// Returns true if the value carries the readable state of a legacy
    /// native pull stream.
    fn has_readable_state(&self) -> bool {
        false
    }
}

macro_rules! plain_candidate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StreamCandidate for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

plain_candidate!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    usize,
    i8,
    i16,
    i32,
    i64,
    isize,
    f32,
    f64,
    String,
    &'static str,
    Bytes,
    BytesMut,
    Vec<u8>,
    Box<[u8]>,
    &'static [u8],
);
