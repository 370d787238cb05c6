//! The standard readable stream type.
//!
//! [`ReadableStream`] is a boxed, runtime-agnostic stream of byte chunks.
//! Any `futures_io::AsyncRead` converts into one with
//! [`ReadableStream::from_reader`], which is how pull-based sources are
//! brought into the classifier's supported shapes.
//!
//! # Example
//!
//! ```ignore
//! use streamprobe::{ReadableStream, StreamKind, classify_stream};
//!
//! async fn demo() -> Result<(), streamprobe::ProbeError> {
//!     let reader: &'static [u8] = b"hello world";
//!     let stream = ReadableStream::from_reader(reader);
//!     assert_eq!(classify_stream(Some(&stream))?, Some(StreamKind::Web));
//!
//!     let data = stream.into_bytes().await?;
//!     assert_eq!(&data[..], b"hello world");
//!     Ok(())
//! }
//! ```

use std::any::Any;
use std::fmt;
use std::future::poll_fn;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use super::{ArrayStream, StreamCandidate};
use crate::buffer::concat_bytes;
use crate::error::ProbeError;

/// Default number of bytes requested per read when adapting a reader (8 KiB).
pub const DEFAULT_READ_CHUNK_SIZE: usize = 8 * 1024;

/// A standard readable stream of byte chunks.
///
/// Implements `Stream<Item = io::Result<Bytes>>` and is `Send`, so it can be
/// polled from any runtime.
pub struct ReadableStream {
    inner: Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>,
}

impl ReadableStream {
    /// Wraps an existing stream of byte chunks.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }

    /// Adapts an async reader, reading up to [`DEFAULT_READ_CHUNK_SIZE`]
    /// bytes per chunk.
    ///
    /// # Runtime Compatibility
    ///
    /// For tokio readers, convert with `tokio_util::compat` first:
    ///
    /// ```ignore
    /// use tokio_util::compat::TokioAsyncReadCompatExt;
    /// use streamprobe::ReadableStream;
    ///
    /// let file = tokio::fs::File::open("data.bin").await?;
    /// let stream = ReadableStream::from_reader(file.compat());
    /// ```
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        Self::from_reader_with_chunk_size(reader, DEFAULT_READ_CHUNK_SIZE)
    }

    /// Adapts an async reader, reading up to `chunk_size` bytes per chunk.
    ///
    /// A `chunk_size` of zero is raised to one.
    pub fn from_reader_with_chunk_size<R>(reader: R, chunk_size: usize) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        Self::new(ReaderChunks {
            reader,
            buffer: vec![0u8; chunk_size.max(1)],
            finished: false,
        })
    }

    /// Drains the stream into one contiguous buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Io`] with the first error the stream yields.
    pub async fn into_bytes(mut self) -> Result<Bytes, ProbeError> {
        let mut chunks = Vec::new();
        while let Some(chunk) = poll_fn(|cx| self.inner.as_mut().poll_next(cx)).await {
            chunks.push(chunk?);
        }
        Ok(concat_bytes(&chunks))
    }
}

impl From<ArrayStream> for ReadableStream {
    fn from(stream: ArrayStream) -> Self {
        Self::new(ChunkList {
            chunks: stream.into_iter(),
        })
    }
}

impl Stream for ReadableStream {
    type Item = io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl StreamCandidate for ReadableStream {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for ReadableStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadableStream").finish_non_exhaustive()
    }
}

pin_project! {
    /// Yields the bytes of an async reader as chunks.
    struct ReaderChunks<R> {
        #[pin]
        reader: R,
        buffer: Vec<u8>,
        finished: bool,
    }
}

impl<R: AsyncRead> Stream for ReaderChunks<R> {
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        loop {
            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(Ok(0)) => {
                    *this.finished = true;
                    return Poll::Ready(None);
                }
                Poll::Ready(Ok(n)) => {
                    return Poll::Ready(Some(Ok(Bytes::copy_from_slice(&this.buffer[..n]))));
                }
            }
        }
    }
}

/// Yields the chunks of an [`ArrayStream`].
struct ChunkList {
    chunks: std::vec::IntoIter<Bytes>,
}

impl Stream for ChunkList {
    type Item = io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.chunks.next().map(Ok))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}
