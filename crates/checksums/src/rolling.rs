//! crates/checksums/src/rolling.rs
//!
//! Rolling-family accumulator.
//!
//! The state is a single 32-bit running value. Each chunk is folded into it
//! with the backend's incremental combine function, starting from zero.
//! Because the combine function continues from the previous value, splitting
//! the input differently never changes the result.

use std::io::IoSlice;

use crate::registry::{AlgorithmSpec, Backend, RollingKind};

/// Running value every rolling algorithm starts from.
pub const ROLLING_SEED: u32 = 0;

/// Streaming CRC-32 / Adler-32 value.
///
/// # Examples
///
/// ```
/// use checksums::{RollingChecksum, RollingKind};
///
/// let mut crc = RollingChecksum::new(RollingKind::Crc32);
/// crc.update(b"12345");
/// crc.update(b"6789");
/// assert_eq!(crc.value(), 0xcbf4_3926);
/// assert_eq!(crc.to_bytes(), [0xcb, 0xf4, 0x39, 0x26]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RollingChecksum {
    kind: RollingKind,
    value: u32,
    len: u64,
}

impl RollingChecksum {
    /// Creates a checksum seeded with [`ROLLING_SEED`].
    #[must_use]
    pub const fn new(kind: RollingKind) -> Self {
        Self {
            kind,
            value: ROLLING_SEED,
            len: 0,
        }
    }

    /// Creates a checksum for `spec`, or `None` when `spec` is not a rolling algorithm.
    #[must_use]
    pub const fn from_spec(spec: &AlgorithmSpec) -> Option<Self> {
        match spec.backend() {
            Backend::Rolling(kind) => Some(Self::new(kind)),
            Backend::Digest(_) => None,
        }
    }

    /// Backend used by the checksum.
    #[must_use]
    pub const fn kind(&self) -> RollingKind {
        self.kind
    }

    /// Folds `chunk` into `running` and returns the new 32-bit value.
    #[must_use]
    pub fn combine(kind: RollingKind, running: u32, chunk: &[u8]) -> u32 {
        match kind {
            RollingKind::Crc32 => {
                let mut hasher = crc32fast::Hasher::new_with_initial(running);
                hasher.update(chunk);
                hasher.finalize()
            }
            RollingKind::Adler32 => {
                let mut adler = adler2::Adler32::from_checksum(running);
                adler.write_slice(chunk);
                adler.checksum()
            }
        }
    }

    /// Updates the checksum with an additional slice of bytes.
    pub fn update(&mut self, chunk: &[u8]) {
        if chunk.is_empty() {
            return;
        }
        self.value = Self::combine(self.kind, self.value, chunk);
        self.len = self.len.saturating_add(chunk.len() as u64);
    }

    /// Updates the checksum with every slice in order.
    pub fn update_vectored(&mut self, slices: &[IoSlice<'_>]) {
        for slice in slices {
            self.update(slice);
        }
    }

    /// Current 32-bit value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Current value as four big-endian bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// Number of bytes folded into the value.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if no bytes have been observed yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
