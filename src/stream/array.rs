//! The ArrayStream type - an in-memory stream backed by a list of chunks.

use std::any::Any;
use std::fmt;

use bytes::Bytes;

use super::{GetReader, StreamCandidate};
use crate::buffer::concat_bytes;

/// An in-memory stream whose chunks are held in an ordered list.
///
/// Writers append chunks with [`push`](ArrayStream::push); readers walk them
/// in insertion order. The whole stream collapses to one buffer with
/// [`into_bytes`](ArrayStream::into_bytes).
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use streamprobe::ArrayStream;
///
/// let mut stream = ArrayStream::new();
/// stream.push(Bytes::from_static(b"hello "));
/// stream.push(&b"world"[..]);
///
/// assert_eq!(stream.len(), 2);
/// assert_eq!(stream.into_bytes(), Bytes::from_static(b"hello world"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayStream {
    chunks: Vec<Bytes>,
}

impl ArrayStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk to the end of the stream.
    pub fn push(&mut self, chunk: impl Into<Bytes>) {
        self.chunks.push(chunk.into());
    }

    /// Returns the number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the stream holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the total number of bytes across all chunks.
    pub fn byte_len(&self) -> usize {
        self.chunks.iter().map(Bytes::len).sum()
    }

    /// Returns the chunks in order.
    pub fn chunks(&self) -> &[Bytes] {
        &self.chunks
    }

    /// Returns an iterator over the chunks.
    pub fn iter(&self) -> std::slice::Iter<'_, Bytes> {
        self.chunks.iter()
    }

    /// Concatenates all chunks into one buffer.
    pub fn into_bytes(self) -> Bytes {
        concat_bytes(&self.chunks)
    }

    /// Consumes the stream and returns the chunk list.
    pub fn into_chunks(self) -> Vec<Bytes> {
        self.chunks
    }
}

impl From<Vec<Bytes>> for ArrayStream {
    fn from(chunks: Vec<Bytes>) -> Self {
        Self { chunks }
    }
}

impl<B: Into<Bytes>> FromIterator<B> for ArrayStream {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<B: Into<Bytes>> Extend<B> for ArrayStream {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        self.chunks.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for ArrayStream {
    type Item = Bytes;
    type IntoIter = std::vec::IntoIter<Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArrayStream {
    type Item = &'a Bytes;
    type IntoIter = std::slice::Iter<'a, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

impl GetReader for ArrayStream {
    fn get_reader(&self) -> Box<dyn Iterator<Item = Bytes> + '_> {
        Box::new(self.chunks.iter().cloned())
    }
}

impl StreamCandidate for ArrayStream {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn reader(&self) -> Option<&dyn GetReader> {
        Some(self)
    }
}

impl fmt::Display for ArrayStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArrayStream({} chunks, {} bytes)",
            self.len(),
            self.byte_len()
        )
    }
}

/// Returns true if `input` is an [`ArrayStream`].
///
/// This is the default array-stream predicate of the
/// [`StreamClassifier`](crate::StreamClassifier).
pub fn is_array_stream(input: &dyn Any) -> bool {
    input.is::<ArrayStream>()
}
