use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use logging::trace_walk;

use crate::entry::WalkEntry;
use crate::error::WalkError;

/// Depth-first iterator over filesystem entries.
///
/// Directory contents are sorted byte-wise before any of them is yielded,
/// and a directory's children are exhausted before its next sibling. A root
/// that is a symlink to a directory is walked through; symlinked directories
/// below the root are reported but never entered.
pub struct Walker {
    pending_root: Option<WalkEntry>,
    stack: Vec<DirectoryCursor>,
    finished: bool,
}

impl Walker {
    pub(crate) fn new(root: PathBuf, include_root: bool) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        trace_walk!(root = %root.display(), "starting walk");

        // The root is followed when it is a symlink; entries below it are not.
        let metadata = match fs::metadata(&root) {
            Ok(metadata) => metadata,
            Err(_) => fs::symlink_metadata(&root)
                .map_err(|error| WalkError::root_metadata(root.clone(), error))?,
        };

        let mut stack = Vec::new();
        if metadata.is_dir() {
            stack.push(DirectoryCursor::open(root.clone(), PathBuf::new(), 0)?);
        }

        let pending_root = include_root.then(|| WalkEntry {
            full_path: root,
            relative_path: PathBuf::new(),
            metadata,
            depth: 0,
            is_root: true,
        });

        Ok(Self {
            pending_root,
            stack,
            finished: false,
        })
    }

    fn visit(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
        depth: usize,
    ) -> Result<WalkEntry, WalkError> {
        let metadata = fs::symlink_metadata(&full_path)
            .map_err(|error| WalkError::metadata(full_path.clone(), error))?;

        if metadata.is_dir() {
            let cursor = DirectoryCursor::open(full_path.clone(), relative_path.clone(), depth)?;
            self.stack.push(cursor);
        }

        Ok(WalkEntry {
            full_path,
            relative_path,
            metadata,
            depth,
            is_root: false,
        })
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(root) = self.pending_root.take() {
            return Some(Ok(root));
        }

        loop {
            let cursor = self.stack.last_mut()?;
            let Some(name) = cursor.next_name() else {
                self.stack.pop();
                continue;
            };

            let full_path = cursor.fs_path.join(&name);
            let relative_path = cursor.relative_prefix.join(&name);
            let depth = cursor.depth + 1;

            return match self.visit(full_path, relative_path, depth) {
                Ok(entry) => Some(Ok(entry)),
                Err(error) => {
                    self.finished = true;
                    Some(Err(error))
                }
            };
        }
    }
}

#[derive(Debug)]
struct DirectoryCursor {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    names: std::vec::IntoIter<OsString>,
    depth: usize,
}

impl DirectoryCursor {
    fn open(fs_path: PathBuf, relative_prefix: PathBuf, depth: usize) -> Result<Self, WalkError> {
        let read_dir =
            fs::read_dir(&fs_path).map_err(|error| WalkError::read_dir(fs_path.clone(), error))?;
        let mut names = read_dir
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| WalkError::read_dir_entry(fs_path.clone(), error))?;
        names.sort();

        trace_walk!(
            directory = %fs_path.display(),
            "entering directory with {} entries",
            names.len()
        );

        Ok(Self {
            fs_path,
            relative_prefix,
            names: names.into_iter(),
            depth,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        self.names.next()
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir().map_err(WalkError::current_dir)?;
        Ok(cwd.join(path))
    }
}
