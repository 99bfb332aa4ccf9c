use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use std::{path::Path, str};
use tokio::{
    fs::File,
    io::{AsyncRead, AsyncReadExt},
    runtime::Runtime,
};
use tracing::{debug, trace};

use crate::rope::{Rope, RopeBuilder};

/// Bytes read per chunk when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// Reads fixed-size byte chunks and decodes them as UTF-8.
///
/// A multi-byte sequence split across a chunk boundary is carried over to the
/// next chunk, so any chunk size yields the same text.
pub struct ChunkReader<R> {
    inner: R,
    buf: Vec<u8>,
    pending: Vec<u8>,
    consumed: usize,
}

impl<R: AsyncRead + Unpin> ChunkReader<R> {
    pub fn new(inner: R, chunk_size: usize) -> Self {
        Self { inner, buf: vec![0; chunk_size.max(1)], pending: Vec::new(), consumed: 0 }
    }

    /// Next decoded chunk, or `None` at end of input. Never returns an empty
    /// string.
    pub async fn next_chunk(&mut self) -> Result<Option<String>, Report> {
        loop {
            let n = self.inner.read(&mut self.buf).await?;
            if n == 0 {
                if self.pending.is_empty() {
                    return Ok(None);
                }
                return Err(eyre!("Input ends inside a UTF-8 sequence at byte {}", self.consumed));
            }
            self.pending.extend_from_slice(&self.buf[..n]);

            let valid = match str::from_utf8(&self.pending) {
                Ok(_) => self.pending.len(),
                Err(e) if e.error_len().is_none() => e.valid_up_to(),
                Err(e) => {
                    return Err(eyre!("Invalid UTF-8 at byte {}", self.consumed + e.valid_up_to()));
                }
            };
            if valid == 0 {
                continue;
            }

            let tail = self.pending.split_off(valid);
            let bytes = std::mem::replace(&mut self.pending, tail);
            self.consumed += bytes.len();
            let chunk = String::from_utf8(bytes)?;
            trace!(len = chunk.len(), consumed = self.consumed, "chunk read");
            return Ok(Some(chunk));
        }
    }
}

/// Folds every chunk of `inner` into a rope.
pub async fn read_rope<R: AsyncRead + Unpin>(inner: R, chunk_size: usize) -> Result<Rope, Report> {
    let mut reader = ChunkReader::new(inner, chunk_size);
    let mut builder = RopeBuilder::new();
    while let Some(chunk) = reader.next_chunk().await? {
        builder.push(chunk);
    }
    Ok(builder.finish())
}

/// Loads a whole file into a rope, `chunk_size` bytes at a time.
pub fn load_file(path: &Path, chunk_size: usize) -> Result<Rope, Report> {
    debug!(path = %path.display(), chunk_size, "loading file");

    let rt = Runtime::new()?;
    let rope = rt.block_on(async {
        let file = File::open(path)
            .await
            .wrap_err_with(|| format!("Error opening file '{}'", path.display()))?;
        read_rope(file, chunk_size)
            .await
            .wrap_err_with(|| format!("Error reading file '{}'", path.display()))
    })?;

    debug!(len = rope.len(), lines = rope.line_count(), height = rope.height(), "file loaded");
    Ok(rope)
}
