use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

use crate::error::WalkError;

/// Pattern selecting every file.
pub const MATCH_ALL: &str = "*";

/// Compiled glob used to select files during a walk.
///
/// A pattern without `/` is matched against the file name alone, so `*.txt`
/// selects text files at any depth. A pattern containing `/` is matched
/// against the trailing components of the path relative to the walk root:
/// `nested/*.txt` behaves like `**/nested/*.txt` and selects `nested/a.txt`
/// as well as `deep/nested/a.txt`. A leading `/` pins the pattern to the walk
/// root instead. `*` never crosses directory separators.
#[derive(Clone, Debug)]
pub struct FilePattern {
    pattern: String,
    matcher: Option<GlobMatcher>,
    anchored: bool,
}

impl FilePattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WalkErrorKind::Pattern`] when the glob is malformed.
    pub fn new(pattern: &str) -> Result<Self, WalkError> {
        if pattern == MATCH_ALL {
            return Ok(Self::default());
        }
        let anchored = pattern.contains('/');
        let source = match pattern.strip_prefix('/') {
            Some(rooted) => rooted.to_owned(),
            None if anchored && !pattern.starts_with("**/") => format!("**/{pattern}"),
            None => pattern.to_owned(),
        };
        let glob = GlobBuilder::new(&source)
            .literal_separator(true)
            .build()
            .map_err(|error| WalkError::pattern(pattern.to_owned(), error))?;

        Ok(Self {
            pattern: pattern.to_owned(),
            matcher: Some(glob.compile_matcher()),
            anchored,
        })
    }

    /// Source text of the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Tests a path relative to the walk root.
    #[must_use]
    pub fn is_match(&self, relative_path: &Path) -> bool {
        let Some(matcher) = &self.matcher else {
            return true;
        };
        if self.anchored {
            return matcher.is_match(relative_path);
        }
        relative_path
            .file_name()
            .is_some_and(|name| matcher.is_match(name))
    }
}

impl Default for FilePattern {
    fn default() -> Self {
        Self {
            pattern: MATCH_ALL.to_owned(),
            matcher: None,
            anchored: false,
        }
    }
}
