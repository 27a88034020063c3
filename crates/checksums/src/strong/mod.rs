//! crates/checksums/src/strong/mod.rs
//!
//! Digest-family accumulators.
//!
//! Every backend is a concrete, `Send + Sync` state chosen once from the
//! [`DigestKind`]. Reads clone the state before finalizing, which keeps
//! [`DigestChecksum::digest`] idempotent and lets callers continue updating
//! after a read.

use std::fmt;
use std::io::IoSlice;

use digest::Digest;
use logging::trace_digest;

use crate::error::ChecksumError;
use crate::registry::{AlgorithmSpec, Backend, DEFAULT_OUTPUT_LENGTH, DigestKind};

mod xof;
mod xxhash;

pub use xof::Shake;
pub use xxhash::{Xxh3, Xxh64};

/// Declares the fixed-length RustCrypto hashers, keyed by [`DigestKind`] variant,
/// together with the exhaustive `DigestKind -> DigestState` constructor.
macro_rules! fixed_digests {
    ($($variant:ident => $hasher:ty),+ $(,)?) => {
        #[derive(Clone)]
        enum FixedState {
            $($variant($hasher),)+
        }

        impl FixedState {
            fn update(&mut self, data: &[u8]) {
                match self {
                    $(Self::$variant(state) => Digest::update(state, data),)+
                }
            }

            fn finalize(&self) -> Vec<u8> {
                match self {
                    $(Self::$variant(state) => state.clone().finalize().to_vec(),)+
                }
            }
        }

        impl DigestState {
            fn new(kind: DigestKind) -> Self {
                match kind {
                    $(DigestKind::$variant => Self::Fixed(FixedState::$variant(<$hasher>::default())),)+
                    DigestKind::Xxh64 => Self::Xxh64(Xxh64::new()),
                    DigestKind::Xxh3 => Self::Xxh3(Xxh3::new()),
                    DigestKind::Shake128 => Self::Xof(Shake::shake128()),
                    DigestKind::Shake256 => Self::Xof(Shake::shake256()),
                }
            }
        }
    };
}

fixed_digests! {
    Md4 => md4::Md4,
    Md5 => md5::Md5,
    Sha1 => sha1::Sha1,
    Sha224 => sha2::Sha224,
    Sha256 => sha2::Sha256,
    Sha384 => sha2::Sha384,
    Sha512 => sha2::Sha512,
    Sha512_224 => sha2::Sha512_224,
    Sha512_256 => sha2::Sha512_256,
    Sha3_224 => sha3::Sha3_224,
    Sha3_256 => sha3::Sha3_256,
    Sha3_384 => sha3::Sha3_384,
    Sha3_512 => sha3::Sha3_512,
    Blake2b => blake2::Blake2b512,
    Blake2s => blake2::Blake2s256,
    Ripemd160 => ripemd::Ripemd160,
    Whirlpool => whirlpool::Whirlpool,
    Sm3 => sm3::Sm3,
}

#[derive(Clone)]
enum DigestState {
    Fixed(FixedState),
    Xxh64(Xxh64),
    Xxh3(Xxh3),
    Xof(Shake),
}

impl DigestState {
    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Fixed(state) => state.update(data),
            Self::Xxh64(state) => state.update(data),
            Self::Xxh3(state) => state.update(data),
            Self::Xof(state) => state.update(data),
        }
    }

    fn read(&self, len: usize) -> Vec<u8> {
        match self {
            Self::Fixed(state) => state.finalize(),
            Self::Xxh64(state) => state.digest().to_vec(),
            Self::Xxh3(state) => state.digest().to_vec(),
            Self::Xof(state) => state.read(len),
        }
    }
}

/// Streaming digest for one registered digest-family algorithm.
///
/// Variable-length algorithms (`shake_128`, `shake_256`) remember the output
/// length chosen at construction; fixed-length algorithms always produce
/// their natural size.
///
/// # Examples
///
/// ```
/// use checksums::DigestKind;
/// use checksums::strong::DigestChecksum;
///
/// let mut sha1 = DigestChecksum::new(DigestKind::Sha1, 32).unwrap();
/// sha1.update(b"a");
/// sha1.update(b"bc");
/// assert_eq!(sha1.output_length(), 20);
/// assert_eq!(sha1.digest()[..4], [0xa9, 0x99, 0x3e, 0x36]);
/// ```
#[derive(Clone)]
pub struct DigestChecksum {
    kind: DigestKind,
    state: DigestState,
    output_length: usize,
    len: u64,
}

impl DigestChecksum {
    /// Creates an empty digest.
    ///
    /// `output_length` applies only to variable-length algorithms, where it
    /// must be non-zero. Fixed-length algorithms ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::InvalidArgument`] when a variable-length
    /// algorithm is asked for zero output bytes.
    pub fn new(kind: DigestKind, output_length: usize) -> Result<Self, ChecksumError> {
        let output_length = match kind.output_len() {
            Some(fixed) => {
                if output_length != fixed {
                    trace_digest!(
                        ?kind,
                        requested = output_length,
                        "fixed-length digest ignores requested output length"
                    );
                }
                fixed
            }
            None if output_length == 0 => {
                return Err(ChecksumError::invalid(
                    "output length must be positive for variable-length digests",
                ));
            }
            None => output_length,
        };

        Ok(Self {
            kind,
            state: DigestState::new(kind),
            output_length,
            len: 0,
        })
    }

    /// Creates a digest for `spec` using [`DEFAULT_OUTPUT_LENGTH`] when variable.
    ///
    /// Returns `None` when `spec` names a rolling algorithm.
    #[must_use]
    pub fn from_spec(spec: &AlgorithmSpec) -> Option<Self> {
        match spec.backend() {
            Backend::Digest(kind) => Self::new(kind, DEFAULT_OUTPUT_LENGTH).ok(),
            Backend::Rolling(_) => None,
        }
    }

    /// Backend used by the digest.
    #[must_use]
    pub const fn kind(&self) -> DigestKind {
        self.kind
    }

    /// Number of bytes produced by [`digest`](Self::digest).
    #[must_use]
    pub const fn output_length(&self) -> usize {
        self.output_length
    }

    /// Reports whether the output length was chosen by the caller.
    #[must_use]
    pub const fn is_variable_length(&self) -> bool {
        self.kind.output_len().is_none()
    }

    /// Absorbs `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
        self.len = self.len.saturating_add(data.len() as u64);
    }

    /// Absorbs every slice in order.
    pub fn update_vectored(&mut self, slices: &[IoSlice<'_>]) {
        for slice in slices {
            self.update(slice);
        }
    }

    /// Digest of everything absorbed so far. Repeated calls return identical bytes.
    #[must_use]
    pub fn digest(&self) -> Vec<u8> {
        self.state.read(self.output_length)
    }

    /// Digest rendered at `len` bytes.
    ///
    /// Variable-length algorithms squeeze exactly `len` bytes; fixed-length
    /// algorithms ignore `len` and return their natural digest.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::InvalidArgument`] when `len` is zero for a
    /// variable-length algorithm.
    pub fn digest_with_length(&self, len: usize) -> Result<Vec<u8>, ChecksumError> {
        if !self.is_variable_length() {
            if len != self.output_length {
                trace_digest!(
                    kind = ?self.kind,
                    requested = len,
                    "fixed-length digest ignores requested output length"
                );
            }
            return Ok(self.digest());
        }
        if len == 0 {
            return Err(ChecksumError::invalid(
                "output length must be positive for variable-length digests",
            ));
        }
        Ok(self.state.read(len))
    }

    /// Number of bytes absorbed.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if no bytes have been absorbed yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for DigestChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestChecksum")
            .field("kind", &self.kind)
            .field("output_length", &self.output_length)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
