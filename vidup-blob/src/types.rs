use bytes::Bytes;
use futures_core::Stream;
use std::pin::Pin;

/// Stream of bytes for video payloads.
///
/// Uploads borrow from the request that carries them, so the lifetime is
/// open; streams handed back by a store are `'static`.
pub type ByteStream<'a> = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send + 'a>>;

/// Wrap an in-memory buffer as a single-chunk stream
pub fn stream_bytes<B: Into<Bytes>>(data: B) -> ByteStream<'static> {
    let data = data.into();
    Box::pin(futures_util::stream::once(async move { Ok::<_, std::io::Error>(data) }))
}

/// Wrap a list of chunks as a stream, one item per chunk
pub fn stream_chunks<I>(chunks: I) -> ByteStream<'static>
where
    I: IntoIterator<Item = Bytes>,
    I::IntoIter: Send + 'static,
{
    Box::pin(futures_util::stream::iter(chunks.into_iter().map(Ok::<Bytes, std::io::Error>)))
}
