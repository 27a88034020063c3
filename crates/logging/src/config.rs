//! crates/logging/src/config.rs
//! Verbosity configuration and its rendering into filter directives.

use super::levels::{MAX_LEVEL, Subsystem, SubsystemLevels, level_name};

/// Verbosity configuration for every filesum subsystem.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbosityConfig {
    /// Subsystem levels.
    pub levels: SubsystemLevels,
}

impl VerbosityConfig {
    /// Create a configuration from a `-v` count.
    ///
    /// `0` keeps warnings only, `1` reports verification outcomes and traversal,
    /// `2` adds per-file digest and registry events, `3` and above traces
    /// every chunk read.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();
        let levels = &mut config.levels;

        match level {
            0 => {}
            1 => {
                levels.verify = 1;
                levels.walk = 1;
            }
            2 => {
                levels.verify = 2;
                levels.walk = 2;
                levels.digest = 2;
                levels.registry = 1;
                levels.io = 1;
            }
            _ => levels.set_all(MAX_LEVEL),
        }

        config
    }

    /// Apply a single flag token (e.g. `"digest2"`, `"io"`, `"all3"`).
    ///
    /// A bare name selects level 1.
    pub fn apply_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        if name == "all" {
            self.levels.set_all(level);
            return Ok(());
        }

        let subsystem =
            Subsystem::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.levels.set(subsystem, level);
        Ok(())
    }

    /// Renders the configuration as an `EnvFilter`-compatible directive.
    ///
    /// Events outside the filesum targets stay at `warn`.
    #[must_use]
    pub fn directive(&self) -> String {
        let mut directive = String::from("warn");
        for subsystem in Subsystem::ALL {
            let level = self.levels.get(subsystem);
            if level > 0 {
                directive.push(',');
                directive.push_str(subsystem.target());
                directive.push('=');
                directive.push_str(level_name(level));
            }
        }
        directive
    }
}

/// Parse a flag token like "digest2" into ("digest", 2) or "io" into ("io", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((&token[..pos], level))
        }
        None => Ok((token, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_level_renders_bare_warn() {
        let config = VerbosityConfig::from_verbose_level(0);
        assert_eq!(config.directive(), "warn");
    }

    #[test]
    fn level_one_enables_verify_and_walk() {
        let config = VerbosityConfig::from_verbose_level(1);
        assert_eq!(
            config.directive(),
            "warn,filesum::walk=info,filesum::verify=info"
        );
    }

    #[test]
    fn high_levels_saturate_at_trace() {
        let config = VerbosityConfig::from_verbose_level(9);
        for subsystem in Subsystem::ALL {
            assert_eq!(config.levels.get(subsystem), MAX_LEVEL);
        }
    }

    #[test]
    fn apply_flag_parses_levels() {
        let mut config = VerbosityConfig::default();
        config.apply_flag("digest2").expect("valid flag");
        config.apply_flag("io").expect("valid flag");
        assert_eq!(config.levels.digest, 2);
        assert_eq!(config.levels.io, 1);
    }

    #[test]
    fn apply_flag_all_sets_every_subsystem() {
        let mut config = VerbosityConfig::default();
        config.apply_flag("all2").expect("valid flag");
        assert_eq!(config.levels.registry, 2);
        assert_eq!(config.levels.verify, 2);
    }

    #[test]
    fn apply_flag_rejects_bad_tokens() {
        let mut config = VerbosityConfig::default();
        assert!(config.apply_flag("").is_err());
        assert!(config.apply_flag("bogus").is_err());
        assert!(config.apply_flag("3").is_err());
        assert!(config.apply_flag("io999").is_err());
    }
}
