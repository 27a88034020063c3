use thiserror::Error;

use crate::registry::Family;

/// Errors raised while resolving algorithms or constructing checksum values.
///
/// Comparisons never produce this type: an unsupported comparand simply
/// compares unequal.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ChecksumError {
    /// The requested name is not present in any registered family.
    #[error("unknown checksum algorithm '{name}'")]
    UnknownAlgorithm {
        /// Name supplied by the caller.
        name: String,
    },
    /// A numeric argument was outside its accepted range.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the rejected value.
        reason: String,
    },
    /// Two family tables declared the same algorithm name.
    #[error("checksum algorithm '{name}' is declared by more than one family")]
    DuplicateAlgorithm {
        /// Name that collided.
        name: String,
    },
    /// A family table listed an algorithm whose backend belongs to another family.
    #[error("checksum algorithm '{name}' is declared as {declared} but its backend is {backend}")]
    FamilyMismatch {
        /// Name of the misplaced algorithm.
        name: String,
        /// Family of the table that declared it.
        declared: Family,
        /// Family implied by the backend.
        backend: Family,
    },
}

impl ChecksumError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownAlgorithm {
            name: name.to_owned(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Reports whether the error denotes an unregistered algorithm name.
    #[must_use]
    pub const fn is_unknown_algorithm(&self) -> bool {
        matches!(self, Self::UnknownAlgorithm { .. })
    }

    /// Reports whether the error denotes a rejected argument value.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_algorithm() {
        let error = ChecksumError::unknown("not-a-real-algo");
        assert_eq!(
            error.to_string(),
            "unknown checksum algorithm 'not-a-real-algo'"
        );
        assert!(error.is_unknown_algorithm());
        assert!(!error.is_invalid_argument());
    }

    #[test]
    fn family_mismatch_mentions_both_families() {
        let error = ChecksumError::FamilyMismatch {
            name: "crc32".into(),
            declared: Family::Digest,
            backend: Family::Rolling,
        };
        let text = error.to_string();
        assert!(text.contains("digest"), "{text}");
        assert!(text.contains("rolling"), "{text}");
    }
}
