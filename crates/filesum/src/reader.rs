//! Fixed-size chunked reading.

use std::fs::File;
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::Path;

use logging::trace_io;

/// Reads a source in chunks of at most `chunk_size` bytes.
///
/// Every chunk except the last is exactly `chunk_size` bytes long. An empty
/// chunk is never produced; the end of the source ends the sequence.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use filesum::ChunkReader;
///
/// let size = NonZeroUsize::new(4).unwrap();
/// let chunks: Vec<Vec<u8>> = ChunkReader::new(&b"abcdefghij"[..], size)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(chunks, [b"abcd".to_vec(), b"efgh".to_vec(), b"ij".to_vec()]);
/// ```
#[derive(Debug)]
pub struct ChunkReader<R> {
    inner: R,
    buffer: Vec<u8>,
    done: bool,
}

impl ChunkReader<File> {
    /// Opens `path` for chunked reading.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`File::open`].
    pub fn open(path: &Path, chunk_size: NonZeroUsize) -> io::Result<Self> {
        Ok(Self::new(File::open(path)?, chunk_size))
    }
}

impl<R: Read> ChunkReader<R> {
    /// Wraps `inner`.
    pub fn new(inner: R, chunk_size: NonZeroUsize) -> Self {
        Self {
            inner,
            buffer: vec![0; chunk_size.get()],
            done: false,
        }
    }

    /// Chunk size in bytes.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.buffer.len()
    }

    /// Reads the next chunk into the internal buffer.
    ///
    /// Returns `Ok(None)` once the source is exhausted. Interrupted reads are
    /// retried.
    ///
    /// # Errors
    ///
    /// Propagates any other error raised by the underlying reader.
    pub fn read_chunk(&mut self) -> io::Result<Option<&[u8]>> {
        if self.done {
            return Ok(None);
        }

        let mut filled = 0;
        while filled < self.buffer.len() {
            match self.inner.read(&mut self.buffer[filled..]) {
                Ok(0) => {
                    self.done = true;
                    break;
                }
                Ok(read) => filled += read,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => {
                    self.done = true;
                    return Err(error);
                }
            }
        }

        trace_io!("read chunk of {} bytes", filled);
        if filled == 0 {
            return Ok(None);
        }
        Ok(Some(&self.buffer[..filled]))
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_chunk()
            .map(|chunk| chunk.map(<[u8]>::to_vec))
            .transpose()
    }
}
