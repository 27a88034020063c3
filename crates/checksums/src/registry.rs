//! crates/checksums/src/registry.rs
//!
//! Static table mapping algorithm names onto backend families.
//!
//! Each family declares the names it supports in a [`FamilyTable`]. The
//! registry is assembled once from those tables; a name declared twice is a
//! configuration error reported by [`Registry::from_families`] rather than
//! at lookup time. The built-in registry is created lazily on first use and
//! is read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

use logging::trace_registry;

use crate::error::ChecksumError;

/// Algorithm selected when a caller does not name one.
pub const DEFAULT_ALGORITHM: &str = "sha1";

/// Output length, in bytes, used for variable-length digests unless overridden.
pub const DEFAULT_OUTPUT_LENGTH: usize = 32;

/// Backend family an algorithm belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Family {
    /// 32-bit incremental checksums combined chunk by chunk.
    Rolling,
    /// Cryptographic and general-purpose hash functions.
    Digest,
}

impl Family {
    /// Lower-case label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rolling => "rolling",
            Self::Digest => "digest",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rolling checksum backends.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RollingKind {
    /// CRC-32 (IEEE 802.3 polynomial, zlib compatible).
    Crc32,
    /// Adler-32 combined from a running value the way zlib does.
    Adler32,
}

/// Digest backends.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DigestKind {
    /// MD4 (RFC 1320).
    Md4,
    /// MD5 (RFC 1321).
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// SHA-512/224.
    Sha512_224,
    /// SHA-512/256.
    Sha512_256,
    /// SHA3-224.
    Sha3_224,
    /// SHA3-256.
    Sha3_256,
    /// SHA3-384.
    Sha3_384,
    /// SHA3-512.
    Sha3_512,
    /// BLAKE2b with a 512-bit output.
    Blake2b,
    /// BLAKE2s with a 256-bit output.
    Blake2s,
    /// RIPEMD-160.
    Ripemd160,
    /// Whirlpool.
    Whirlpool,
    /// SM3.
    Sm3,
    /// XXH64 with seed zero.
    Xxh64,
    /// XXH3-64 with seed zero.
    Xxh3,
    /// SHAKE128 extendable output.
    Shake128,
    /// SHAKE256 extendable output.
    Shake256,
}

impl DigestKind {
    /// Fixed output length in bytes, or `None` for extendable-output functions.
    #[must_use]
    pub const fn output_len(self) -> Option<usize> {
        match self {
            Self::Md4 | Self::Md5 => Some(16),
            Self::Sha1 | Self::Ripemd160 => Some(20),
            Self::Sha224 | Self::Sha512_224 | Self::Sha3_224 => Some(28),
            Self::Sha256 | Self::Sha512_256 | Self::Sha3_256 | Self::Blake2s | Self::Sm3 => {
                Some(32)
            }
            Self::Sha384 | Self::Sha3_384 => Some(48),
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b | Self::Whirlpool => Some(64),
            Self::Xxh64 | Self::Xxh3 => Some(8),
            Self::Shake128 | Self::Shake256 => None,
        }
    }
}

/// Identifier of the accumulator implementation behind an algorithm name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Backend {
    /// A rolling checksum.
    Rolling(RollingKind),
    /// A digest.
    Digest(DigestKind),
}

impl Backend {
    /// Family implied by the backend.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Rolling(_) => Family::Rolling,
            Self::Digest(_) => Family::Digest,
        }
    }
}

/// Immutable description of one registered algorithm.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AlgorithmSpec {
    name: &'static str,
    family: Family,
    backend: Backend,
}

impl AlgorithmSpec {
    /// Describes a rolling-family algorithm.
    #[must_use]
    pub const fn rolling(name: &'static str, kind: RollingKind) -> Self {
        Self {
            name,
            family: Family::Rolling,
            backend: Backend::Rolling(kind),
        }
    }

    /// Describes a digest-family algorithm.
    #[must_use]
    pub const fn digest(name: &'static str, kind: DigestKind) -> Self {
        Self {
            name,
            family: Family::Digest,
            backend: Backend::Digest(kind),
        }
    }

    /// Case-sensitive algorithm name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Family tag.
    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    /// Backend identifier used to instantiate the accumulator.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Output length in bytes; `None` for variable-length digests.
    #[must_use]
    pub const fn output_len(&self) -> Option<usize> {
        match self.backend {
            Backend::Rolling(_) => Some(4),
            Backend::Digest(kind) => kind.output_len(),
        }
    }

    /// Reports whether the caller chooses the output length.
    #[must_use]
    pub const fn is_variable_length(&self) -> bool {
        self.output_len().is_none()
    }
}

/// Names supported by one backend family.
#[derive(Clone, Copy, Debug)]
pub struct FamilyTable {
    /// Family declaring the names.
    pub family: Family,
    /// Algorithms contributed by the family.
    pub algorithms: &'static [AlgorithmSpec],
}

/// Rolling family names.
pub const ROLLING_FAMILY: FamilyTable = FamilyTable {
    family: Family::Rolling,
    algorithms: &[
        AlgorithmSpec::rolling("adler32", RollingKind::Adler32),
        AlgorithmSpec::rolling("crc32", RollingKind::Crc32),
    ],
};

/// Digest family names.
pub const DIGEST_FAMILY: FamilyTable = FamilyTable {
    family: Family::Digest,
    algorithms: &[
        AlgorithmSpec::digest("md4", DigestKind::Md4),
        AlgorithmSpec::digest("md5", DigestKind::Md5),
        AlgorithmSpec::digest("sha1", DigestKind::Sha1),
        AlgorithmSpec::digest("sha224", DigestKind::Sha224),
        AlgorithmSpec::digest("sha256", DigestKind::Sha256),
        AlgorithmSpec::digest("sha384", DigestKind::Sha384),
        AlgorithmSpec::digest("sha512", DigestKind::Sha512),
        AlgorithmSpec::digest("sha512_224", DigestKind::Sha512_224),
        AlgorithmSpec::digest("sha512_256", DigestKind::Sha512_256),
        AlgorithmSpec::digest("sha3_224", DigestKind::Sha3_224),
        AlgorithmSpec::digest("sha3_256", DigestKind::Sha3_256),
        AlgorithmSpec::digest("sha3_384", DigestKind::Sha3_384),
        AlgorithmSpec::digest("sha3_512", DigestKind::Sha3_512),
        AlgorithmSpec::digest("blake2b", DigestKind::Blake2b),
        AlgorithmSpec::digest("blake2s", DigestKind::Blake2s),
        AlgorithmSpec::digest("ripemd160", DigestKind::Ripemd160),
        AlgorithmSpec::digest("whirlpool", DigestKind::Whirlpool),
        AlgorithmSpec::digest("sm3", DigestKind::Sm3),
        AlgorithmSpec::digest("xxh64", DigestKind::Xxh64),
        AlgorithmSpec::digest("xxh3", DigestKind::Xxh3),
        AlgorithmSpec::digest("shake_128", DigestKind::Shake128),
        AlgorithmSpec::digest("shake_256", DigestKind::Shake256),
    ],
};

/// Families compiled into the crate.
pub const BUILTIN_FAMILIES: [FamilyTable; 2] = [ROLLING_FAMILY, DIGEST_FAMILY];

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::from_families(&BUILTIN_FAMILIES)
        .expect("built-in family tables declare disjoint, consistent names")
});

/// Lookup table from algorithm name to [`AlgorithmSpec`].
#[derive(Clone, Debug)]
pub struct Registry {
    algorithms: BTreeMap<&'static str, AlgorithmSpec>,
}

impl Registry {
    /// Builds a registry from family tables.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::DuplicateAlgorithm`] when a name appears more than
    /// once across the tables, and [`ChecksumError::FamilyMismatch`] when a table
    /// lists an algorithm whose backend belongs to a different family.
    pub fn from_families(families: &[FamilyTable]) -> Result<Self, ChecksumError> {
        let mut algorithms = BTreeMap::new();

        for table in families {
            for spec in table.algorithms {
                if spec.family() != table.family || spec.backend().family() != table.family {
                    return Err(ChecksumError::FamilyMismatch {
                        name: spec.name().to_owned(),
                        declared: table.family,
                        backend: spec.backend().family(),
                    });
                }
                if algorithms.insert(spec.name(), *spec).is_some() {
                    return Err(ChecksumError::DuplicateAlgorithm {
                        name: spec.name().to_owned(),
                    });
                }
            }
            trace_registry!(
                family = table.family.as_str(),
                "registered {} algorithms",
                table.algorithms.len()
            );
        }

        Ok(Self { algorithms })
    }

    /// Returns the registry holding every built-in family.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Names across all registered families.
    #[must_use]
    pub fn available_algorithms(&self) -> BTreeSet<&'static str> {
        self.algorithms.keys().copied().collect()
    }

    /// Resolves `name` to its specification.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::UnknownAlgorithm`] when no family declares `name`.
    pub fn resolve(&self, name: &str) -> Result<&AlgorithmSpec, ChecksumError> {
        self.algorithms
            .get(name)
            .ok_or_else(|| ChecksumError::unknown(name))
    }

    /// Reports whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// Iterates over the algorithms of one family in name order.
    pub fn family(&self, family: Family) -> impl Iterator<Item = &AlgorithmSpec> + '_ {
        self.algorithms
            .values()
            .filter(move |spec| spec.family() == family)
    }

    /// Iterates over every algorithm in name order.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmSpec> + '_ {
        self.algorithms.values()
    }

    /// Number of registered algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Returns `true` when no algorithm is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

/// Names known to the built-in registry.
#[must_use]
pub fn available_algorithms() -> BTreeSet<&'static str> {
    Registry::builtin().available_algorithms()
}

/// Resolves `name` against the built-in registry.
pub fn resolve(name: &str) -> Result<&'static AlgorithmSpec, ChecksumError> {
    Registry::builtin().resolve(name)
}
