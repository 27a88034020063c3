//! crates/checksums/src/strong/xxhash.rs
//!
//! XXHash streaming states with non-consuming reads.
//!
//! `xxhash-rust` computes the digest from a borrowed state, so reading never
//! disturbs later updates. Both hashers use seed zero and render their 64-bit
//! result in the canonical big-endian byte order used by `xxhsum`.

// ============================================================================
// XXH64
// ============================================================================

/// Streaming XXH64 state.
///
/// # Examples
///
/// ```
/// use checksums::strong::Xxh64;
///
/// let mut hasher = Xxh64::new();
/// hasher.update(b"chunk 1");
/// hasher.update(b"chunk 2");
///
/// assert_eq!(hasher.digest(), Xxh64::oneshot(b"chunk 1chunk 2"));
/// ```
#[derive(Clone)]
pub struct Xxh64 {
    inner: xxhash_rust::xxh64::Xxh64,
}

impl Xxh64 {
    /// Digest length in bytes.
    pub const DIGEST_LEN: usize = 8;

    /// Creates a hasher seeded with zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: xxhash_rust::xxh64::Xxh64::new(0),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Returns the big-endian digest of everything absorbed so far.
    #[must_use]
    pub fn digest(&self) -> [u8; 8] {
        self.inner.digest().to_be_bytes()
    }

    /// Computes the digest of `data` in one shot.
    #[must_use]
    pub fn oneshot(data: &[u8]) -> [u8; 8] {
        xxhash_rust::xxh64::xxh64(data, 0).to_be_bytes()
    }
}

impl Default for Xxh64 {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// XXH3-64
// ============================================================================

/// Streaming XXH3 state producing 64-bit digests.
///
/// # Examples
///
/// ```
/// use checksums::strong::Xxh3;
///
/// let mut hasher = Xxh3::new();
/// hasher.update(b"fast ");
/// hasher.update(b"hashing");
///
/// assert_eq!(hasher.digest(), Xxh3::oneshot(b"fast hashing"));
/// ```
#[derive(Clone)]
pub struct Xxh3 {
    inner: xxhash_rust::xxh3::Xxh3,
}

impl Xxh3 {
    /// Digest length in bytes.
    pub const DIGEST_LEN: usize = 8;

    /// Creates a hasher with the default secret and seed zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: xxhash_rust::xxh3::Xxh3::new(),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Returns the big-endian digest of everything absorbed so far.
    #[must_use]
    pub fn digest(&self) -> [u8; 8] {
        self.inner.digest().to_be_bytes()
    }

    /// Computes the digest of `data` in one shot.
    #[must_use]
    pub fn oneshot(data: &[u8]) -> [u8; 8] {
        xxhash_rust::xxh3::xxh3_64(data).to_be_bytes()
    }
}

impl Default for Xxh3 {
    fn default() -> Self {
        Self::new()
    }
}
