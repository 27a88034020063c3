//! Streams file contents into a checksum.

use std::num::NonZeroUsize;
use std::path::Path;

use checksums::Checksum;
use logging::trace_io;

use crate::error::FileChecksumError;
use crate::reader::ChunkReader;

/// Feeds every byte of `path` into `checksum`, one chunk per update.
///
/// Returns the number of bytes read.
///
/// # Errors
///
/// Returns [`FileChecksumError::Io`] when the file cannot be opened or read.
pub fn digest_file(
    checksum: &mut Checksum,
    path: &Path,
    chunk_size: NonZeroUsize,
) -> Result<u64, FileChecksumError> {
    let mut reader =
        ChunkReader::open(path, chunk_size).map_err(|error| FileChecksumError::io(path, error))?;

    let mut total = 0_u64;
    while let Some(chunk) = reader
        .read_chunk()
        .map_err(|error| FileChecksumError::io(path, error))?
    {
        checksum.update(chunk);
        total += chunk.len() as u64;
    }

    trace_io!(path = %path.display(), bytes = total, "digested file");
    Ok(total)
}

/// Feeds the files in `paths` into one `checksum`, in the order given.
///
/// The result equals the checksum of the concatenated file contents.
///
/// # Errors
///
/// Stops at the first file that cannot be read.
pub fn digest_sources<I, P>(
    checksum: &mut Checksum,
    paths: I,
    chunk_size: NonZeroUsize,
) -> Result<u64, FileChecksumError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut total = 0_u64;
    for path in paths {
        total += digest_file(checksum, path.as_ref(), chunk_size)?;
    }
    Ok(total)
}
