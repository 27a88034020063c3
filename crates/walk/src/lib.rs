#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates the files below a directory in a deterministic order so
//! that directory-level checksums are reproducible. Entries within a
//! directory are sorted byte-wise by name and each directory is exhausted
//! before its next sibling is visited.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the root, whether the root itself is
//!   reported, and the glob used to select files.
//! - [`Walker`] yields every [`WalkEntry`] (directories, files, symlinks) in
//!   depth-first order. Symlinked directories are reported but not entered,
//!   so traversal cannot loop.
//! - [`FileWalker`] narrows the walk to regular files matching a
//!   [`FilePattern`] and yields their absolute paths.
//! - [`WalkError`] carries the failing path and the underlying I/O or glob
//!   error.
//!
//! # Examples
//!
//! ```
//! use std::fs;
//! use walk::WalkBuilder;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path();
//! fs::create_dir(root.join("nested"))?;
//! fs::write(root.join("b.txt"), b"b")?;
//! fs::write(root.join("a.bin"), b"a")?;
//! fs::write(root.join("nested").join("c.txt"), b"c")?;
//!
//! let files = WalkBuilder::new(root)
//!     .pattern("*.txt")
//!     .files()?
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(files, [root.join("b.txt"), root.join("nested").join("c.txt")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod files;
mod pattern;
mod walker;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use files::FileWalker;
pub use pattern::{FilePattern, MATCH_ALL};
pub use walker::Walker;

use std::path::{Path, PathBuf};

/// Collects the regular files below `root` whose names match `pattern`.
///
/// # Errors
///
/// Returns the first [`WalkError`] raised while compiling the pattern or
/// traversing the tree.
pub fn matching_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, WalkError> {
    WalkBuilder::new(root).pattern(pattern).files()?.collect()
}
