//! Converting a tokio reader into a standard readable stream.
//!
//! Run with:
//!     cargo run --example readable --features async-io

use streamprobe::{ProbeError, ReadableStream, StreamKind, classify_stream};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), ProbeError> {
    let (mut tx, rx) = tokio::io::duplex(64);
    tokio::spawn(async move {
        use tokio::io::AsyncWriteExt;
        let _ = tx.write_all(b"bytes from another task").await;
    });

    let stream = ReadableStream::from_reader_with_chunk_size(rx.compat(), 8);
    assert_eq!(classify_stream(Some(&stream))?, Some(StreamKind::Web));

    let data = stream.into_bytes().await?;
    println!("read {} bytes: {:?}", data.len(), data);
    Ok(())
}
