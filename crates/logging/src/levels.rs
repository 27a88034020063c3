//! crates/logging/src/levels.rs
//! Subsystem flags and their per-subsystem verbosity levels.

/// Highest level accepted for a single subsystem (`trace`).
pub const MAX_LEVEL: u8 = 3;

/// Diagnostic categories emitted by the filesum crates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subsystem {
    /// Algorithm registry construction and lookups.
    Registry,
    /// Checksum accumulator updates and reads.
    Digest,
    /// Chunked file reading.
    Io,
    /// Directory traversal and pattern filtering.
    Walk,
    /// Checksum verification outcomes.
    Verify,
}

impl Subsystem {
    /// Every subsystem in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Registry,
        Self::Digest,
        Self::Io,
        Self::Walk,
        Self::Verify,
    ];

    /// Returns the tracing target used for events of this subsystem.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Registry => "filesum::registry",
            Self::Digest => "filesum::digest",
            Self::Io => "filesum::io",
            Self::Walk => "filesum::walk",
            Self::Verify => "filesum::verify",
        }
    }

    /// Returns the short flag name accepted by [`crate::VerbosityConfig::apply_flag`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Registry => "registry",
            Self::Digest => "digest",
            Self::Io => "io",
            Self::Walk => "walk",
            Self::Verify => "verify",
        }
    }

    /// Looks up a subsystem by its short flag name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subsystem| subsystem.name() == name)
    }

    /// Maps a tracing target back to its subsystem.
    ///
    /// Nested targets such as `filesum::digest::xof` resolve to their parent.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subsystem| {
            let root = subsystem.target();
            target == root
                || target
                    .strip_prefix(root)
                    .is_some_and(|rest| rest.starts_with("::"))
        })
    }
}

/// Per-subsystem verbosity levels (`0` = warnings only, `3` = trace).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubsystemLevels {
    /// Registry level.
    pub registry: u8,
    /// Digest level.
    pub digest: u8,
    /// Chunked I/O level.
    pub io: u8,
    /// Traversal level.
    pub walk: u8,
    /// Verification level.
    pub verify: u8,
}

impl SubsystemLevels {
    /// Returns the level configured for `subsystem`.
    #[must_use]
    pub const fn get(&self, subsystem: Subsystem) -> u8 {
        match subsystem {
            Subsystem::Registry => self.registry,
            Subsystem::Digest => self.digest,
            Subsystem::Io => self.io,
            Subsystem::Walk => self.walk,
            Subsystem::Verify => self.verify,
        }
    }

    /// Sets the level for `subsystem`, clamped to [`MAX_LEVEL`].
    pub fn set(&mut self, subsystem: Subsystem, level: u8) {
        let level = level.min(MAX_LEVEL);
        match subsystem {
            Subsystem::Registry => self.registry = level,
            Subsystem::Digest => self.digest = level,
            Subsystem::Io => self.io = level,
            Subsystem::Walk => self.walk = level,
            Subsystem::Verify => self.verify = level,
        }
    }

    /// Sets every subsystem to `level`.
    pub fn set_all(&mut self, level: u8) {
        for subsystem in Subsystem::ALL {
            self.set(subsystem, level);
        }
    }
}

/// Maps a subsystem level onto the tracing level name used in filter directives.
#[must_use]
pub const fn level_name(level: u8) -> &'static str {
    match level {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_round_trip_through_lookup() {
        for subsystem in Subsystem::ALL {
            assert_eq!(Subsystem::from_target(subsystem.target()), Some(subsystem));
            assert_eq!(Subsystem::from_name(subsystem.name()), Some(subsystem));
        }
    }

    #[test]
    fn nested_targets_resolve_to_parent() {
        assert_eq!(
            Subsystem::from_target("filesum::digest::xof"),
            Some(Subsystem::Digest)
        );
        assert_eq!(Subsystem::from_target("filesum::digester"), None);
        assert_eq!(Subsystem::from_target("other::io"), None);
    }

    #[test]
    fn set_clamps_to_max_level() {
        let mut levels = SubsystemLevels::default();
        levels.set(Subsystem::Io, 9);
        assert_eq!(levels.get(Subsystem::Io), MAX_LEVEL);
        assert_eq!(levels.get(Subsystem::Walk), 0);
    }

    #[test]
    fn level_names_follow_tracing_levels() {
        assert_eq!(level_name(0), "warn");
        assert_eq!(level_name(1), "info");
        assert_eq!(level_name(2), "debug");
        assert_eq!(level_name(3), "trace");
        assert_eq!(level_name(7), "trace");
    }
}
