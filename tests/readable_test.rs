// Integration tests for the standard readable stream type
// Tests cover: classification as web, environment gating, reader conversion

#![cfg(feature = "async-io")]

use bytes::Bytes;
use futures_util::StreamExt;
use streamprobe::{
    ArrayStream, Environment, ReadableStream, StreamClassifier, StreamKind, classify_stream,
};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[test]
fn test_readable_stream_is_web() {
    let reader: &'static [u8] = b"data";
    let stream = ReadableStream::from_reader(reader);
    assert_eq!(classify_stream(Some(&stream)).unwrap(), Some(StreamKind::Web));
}

#[test]
fn test_readable_stream_ignored_when_type_unavailable() {
    let classifier = StreamClassifier::new(Environment::detect().with_readable_stream(false));
    let stream = ReadableStream::from(ArrayStream::new());
    assert_eq!(classifier.classify(Some(&stream)).unwrap(), None);
}

#[test]
fn test_array_stream_stays_array_when_readable_available() {
    let classifier = StreamClassifier::new(Environment::detect().with_readable_stream(true));
    assert_eq!(
        classifier.classify(Some(&ArrayStream::new())).unwrap(),
        Some(StreamKind::Array)
    );
}

#[tokio::test]
async fn test_tokio_reader_round_trip() {
    let data: Vec<u8> = (0..20_000u32).map(|i| (i * 7 + 13) as u8).collect();
    let (mut tx, rx) = tokio::io::duplex(1024);

    let payload = data.clone();
    let writer = tokio::spawn(async move {
        use tokio::io::AsyncWriteExt;
        tx.write_all(&payload).await.unwrap();
        tx.shutdown().await.unwrap();
    });

    let stream = ReadableStream::from_reader(rx.compat());
    let out = stream.into_bytes().await.unwrap();
    writer.await.unwrap();

    assert_eq!(out, Bytes::from(data));
}

#[tokio::test]
async fn test_chunks_arrive_in_order() {
    let array: ArrayStream = (0..8u8).map(|i| vec![i; 3]).collect();
    let expected = array.chunks().to_vec();

    let chunks: Vec<Bytes> = ReadableStream::from(array)
        .map(|chunk| chunk.unwrap())
        .collect()
        .await;
    assert_eq!(chunks, expected);
}

#[test]
fn test_into_bytes_blocking() {
    let reader: &'static [u8] = b"blocking";
    let out = tokio_test::block_on(ReadableStream::from_reader(reader).into_bytes()).unwrap();
    assert_eq!(&out[..], b"blocking");
}
