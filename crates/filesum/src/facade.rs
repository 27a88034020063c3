//! The public create/verify surface.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use checksums::{AlgorithmSpec, Checksum, Comparand};
use logging::{trace_verify, trace_walk};

use crate::config::ChecksumConfig;
use crate::error::FileChecksumError;
use crate::paths::{validate_dir, validate_file};
use crate::pipeline::{digest_file, digest_sources};

/// Creates and verifies checksums of files and directory trees.
///
/// The configuration is validated once in [`FileChecksum::new`]; every later
/// operation builds a fresh [`Checksum`] from it.
///
/// # Examples
///
/// ```
/// use filesum::{ChecksumConfig, FileChecksum};
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// let path = temp.path().join("empty");
/// std::fs::write(&path, b"")?;
///
/// let sums = FileChecksum::new(ChecksumConfig::default())?;
/// let sum = sums.create_checksum(&path)?;
/// assert_eq!(sum.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
/// assert!(sums.verify(&path, &sum)?);
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct FileChecksum {
    config: ChecksumConfig,
    algorithm: &'static AlgorithmSpec,
    chunk_size: NonZeroUsize,
}

impl FileChecksum {
    /// Validates `config` and builds the facade.
    ///
    /// # Errors
    ///
    /// Fails with an unknown-algorithm or invalid-argument error when
    /// [`ChecksumConfig::validate`] would.
    pub fn new(config: ChecksumConfig) -> Result<Self, FileChecksumError> {
        config.validate()?;
        let algorithm = checksums::resolve(&config.algorithm)?;
        let chunk_size = config.chunk_size()?;
        Ok(Self {
            config,
            algorithm,
            chunk_size,
        })
    }

    /// Builds a facade for `algorithm` with default chunk and output sizes.
    ///
    /// # Errors
    ///
    /// Fails when `algorithm` is not registered.
    pub fn with_algorithm(algorithm: &str) -> Result<Self, FileChecksumError> {
        Self::new(ChecksumConfig::default().with_algorithm(algorithm))
    }

    /// Every algorithm name the facade accepts.
    #[must_use]
    pub fn available_algorithms() -> BTreeSet<&'static str> {
        checksums::available_algorithms()
    }

    /// Configuration the facade was built with.
    #[must_use]
    pub const fn config(&self) -> &ChecksumConfig {
        &self.config
    }

    /// Registry entry of the configured algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> &'static AlgorithmSpec {
        self.algorithm
    }

    /// Creates an empty checksum for the configured algorithm.
    ///
    /// # Errors
    ///
    /// Does not fail for a validated configuration; the result mirrors
    /// [`Checksum::from_spec`].
    pub fn new_checksum(&self) -> Result<Checksum, FileChecksumError> {
        Ok(Checksum::from_spec(self.algorithm, self.config.output_length)?)
    }

    /// Checksum of one regular file.
    ///
    /// # Errors
    ///
    /// Returns [`FileChecksumError::NotFound`] when `path` is not a regular
    /// file and [`FileChecksumError::Io`] when reading fails.
    pub fn create_checksum(&self, path: impl AsRef<Path>) -> Result<Checksum, FileChecksumError> {
        let path = validate_file(path.as_ref())?;
        let mut checksum = self.new_checksum()?;
        digest_file(&mut checksum, &path, self.chunk_size)?;
        Ok(checksum)
    }

    /// Independent checksums for each file, in input order.
    ///
    /// With the `parallel` feature the files are hashed concurrently.
    ///
    /// # Errors
    ///
    /// Fails on the first file that is missing or unreadable.
    pub fn create_checksum_many<P>(
        &self,
        paths: &[P],
    ) -> Result<Vec<(PathBuf, Checksum)>, FileChecksumError>
    where
        P: AsRef<Path> + Sync,
    {
        self.map_files(paths, |path| {
            let path = path.as_ref();
            let checksum = self.create_checksum(path)?;
            Ok((path.to_path_buf(), checksum))
        })
    }

    /// One checksum over all files, streamed in the order given.
    ///
    /// Reordering `paths` generally changes the result.
    ///
    /// # Errors
    ///
    /// Fails on the first file that is missing or unreadable.
    pub fn create_checksum_aggregate<P>(&self, paths: &[P]) -> Result<Checksum, FileChecksumError>
    where
        P: AsRef<Path>,
    {
        let files = paths
            .iter()
            .map(|path| validate_file(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let mut checksum = self.new_checksum()?;
        digest_sources(&mut checksum, &files, self.chunk_size)?;
        Ok(checksum)
    }

    /// Independent checksums for the files below `dir` matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`FileChecksumError::NotFound`] when `dir` is not a directory,
    /// [`FileChecksumError::Walk`] for a malformed pattern or traversal
    /// failure, and I/O errors from hashing.
    pub fn create_checksum_files(
        &self,
        dir: impl AsRef<Path>,
        pattern: &str,
    ) -> Result<Vec<(PathBuf, Checksum)>, FileChecksumError> {
        let files = self.files_in(dir.as_ref(), pattern)?;
        self.create_checksum_many(&files)
    }

    /// One checksum over the files below `dir` matching `pattern`.
    ///
    /// Files are streamed in the walker's depth-first, byte-wise sorted order.
    ///
    /// # Errors
    ///
    /// As for [`create_checksum_files`](Self::create_checksum_files).
    pub fn create_checksum_dir(
        &self,
        dir: impl AsRef<Path>,
        pattern: &str,
    ) -> Result<Checksum, FileChecksumError> {
        let files = self.files_in(dir.as_ref(), pattern)?;
        let mut checksum = self.new_checksum()?;
        digest_sources(&mut checksum, &files, self.chunk_size)?;
        Ok(checksum)
    }

    /// Compares the checksum of `path` with `expected`.
    ///
    /// # Errors
    ///
    /// As for [`create_checksum`](Self::create_checksum). A mismatch is
    /// `Ok(false)`, never an error.
    pub fn verify<'a>(
        &self,
        path: impl AsRef<Path>,
        expected: impl Into<Comparand<'a>>,
    ) -> Result<bool, FileChecksumError> {
        let path = path.as_ref();
        let matched = self.create_checksum(path)?.equals(expected);
        trace_verify!(path = %path.display(), matched, "verified file");
        Ok(matched)
    }

    /// Compares each file with its own expected value, in input order.
    ///
    /// # Errors
    ///
    /// Fails on the first file that is missing or unreadable.
    pub fn verify_many<P>(
        &self,
        expected: &[(P, Comparand<'_>)],
    ) -> Result<Vec<(PathBuf, bool)>, FileChecksumError>
    where
        P: AsRef<Path> + Sync,
    {
        self.map_files(expected, |(path, comparand)| {
            let path = path.as_ref();
            let matched = self.create_checksum(path)?.equals(*comparand);
            trace_verify!(path = %path.display(), matched, "verified file");
            Ok((path.to_path_buf(), matched))
        })
    }

    /// Compares the aggregate checksum of `paths` with `expected`.
    ///
    /// # Errors
    ///
    /// As for [`create_checksum_aggregate`](Self::create_checksum_aggregate).
    pub fn verify_aggregate<'a, P>(
        &self,
        paths: &[P],
        expected: impl Into<Comparand<'a>>,
    ) -> Result<bool, FileChecksumError>
    where
        P: AsRef<Path>,
    {
        let matched = self.create_checksum_aggregate(paths)?.equals(expected);
        trace_verify!(files = paths.len(), matched, "verified aggregate");
        Ok(matched)
    }

    /// Compares the directory checksum of `dir` with `expected`.
    ///
    /// # Errors
    ///
    /// As for [`create_checksum_dir`](Self::create_checksum_dir).
    pub fn verify_dir<'a>(
        &self,
        dir: impl AsRef<Path>,
        expected: impl Into<Comparand<'a>>,
        pattern: &str,
    ) -> Result<bool, FileChecksumError> {
        let dir = dir.as_ref();
        let matched = self.create_checksum_dir(dir, pattern)?.equals(expected);
        trace_verify!(dir = %dir.display(), pattern, matched, "verified directory");
        Ok(matched)
    }

    fn files_in(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, FileChecksumError> {
        let dir = validate_dir(dir)?;
        let files = walk::matching_files(&dir, pattern)?;
        trace_walk!(
            dir = %dir.display(),
            pattern,
            algorithm = self.algorithm.name(),
            "selected {} files",
            files.len()
        );
        Ok(files)
    }

    #[cfg(feature = "parallel")]
    fn map_files<T, U, F>(&self, items: &[T], f: F) -> Result<Vec<U>, FileChecksumError>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Result<U, FileChecksumError> + Sync + Send,
    {
        crate::parallel::try_map_ordered(items, f)
    }

    #[cfg(not(feature = "parallel"))]
    fn map_files<T, U, F>(&self, items: &[T], f: F) -> Result<Vec<U>, FileChecksumError>
    where
        F: Fn(&T) -> Result<U, FileChecksumError>,
    {
        items.iter().map(f).collect()
    }
}
