#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filesum` creates and verifies checksums of files, file lists and
//! directory trees. Any algorithm registered with the [`checksums`] crate can
//! be selected by name; the result is a [`Checksum`] that can be rendered as
//! bytes, hex or an integer and compared against any of those forms.
//!
//! # Design
//!
//! - [`ChecksumConfig`] fixes the algorithm, the read chunk size and the
//!   output length of variable-length digests. [`FileChecksum::new`] rejects
//!   invalid settings up front.
//! - [`ChunkReader`] reads a source in fixed-size chunks and the
//!   [`pipeline`] functions feed those chunks, in order, into one checksum.
//!   The chunk size never affects the result.
//! - Per-file operations build one checksum per file and, with the
//!   `parallel` feature, hash files on the rayon pool while keeping result
//!   order. Aggregate operations stream every file into a single checksum
//!   and are always sequential.
//! - Directory operations delegate to the [`walk`] crate, which yields files
//!   in depth-first, byte-wise sorted order. The aggregate of a directory is
//!   therefore reproducible for a given tree; callers wanting another order
//!   pass their own list to [`FileChecksum::create_checksum_aggregate`].
//!
//! # Errors
//!
//! Every fallible operation returns [`FileChecksumError`]. Comparisons never
//! fail: a mismatching or incompatible expected value yields `false`.
//!
//! # Examples
//!
//! ```
//! use filesum::{ChecksumConfig, FileChecksum};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let a = temp.path().join("a");
//! let b = temp.path().join("b");
//! std::fs::write(&a, b"hello ")?;
//! std::fs::write(&b, b"world")?;
//!
//! let sums = FileChecksum::new(ChecksumConfig::default().with_algorithm("crc32"))?;
//! let aggregate = sums.create_checksum_aggregate(&[&a, &b])?;
//! assert_eq!(aggregate.to_int(), Some(0x0d4a_1185));
//! assert!(sums.verify_aggregate(&[&a, &b], 0x0d4a_1185_u32)?);
//! assert!(!sums.verify_aggregate(&[&b, &a], 0x0d4a_1185_u32)?);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod config;
mod error;
mod facade;
mod paths;
pub mod pipeline;
mod reader;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use checksums::{Checksum, ChecksumError, Comparand, Family};
pub use config::{ChecksumConfig, DEFAULT_CHUNK_SIZE};
pub use error::{FileChecksumError, PathKind};
pub use facade::FileChecksum;
pub use paths::{validate_dir, validate_file};
pub use reader::ChunkReader;
pub use walk::MATCH_ALL;
