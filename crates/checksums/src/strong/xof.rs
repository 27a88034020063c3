//! crates/checksums/src/strong/xof.rs
//!
//! Extendable-output (SHAKE) states.
//!
//! Reading clones the sponge before squeezing, so the caller can keep
//! absorbing after any number of reads.

use digest::{ExtendableOutput, Update, XofReader};

/// SHAKE128 / SHAKE256 sponge.
#[derive(Clone)]
pub enum Shake {
    /// SHAKE128.
    Shake128(sha3::Shake128),
    /// SHAKE256.
    Shake256(sha3::Shake256),
}

impl Shake {
    /// Creates an empty SHAKE128 sponge.
    #[must_use]
    pub fn shake128() -> Self {
        Self::Shake128(sha3::Shake128::default())
    }

    /// Creates an empty SHAKE256 sponge.
    #[must_use]
    pub fn shake256() -> Self {
        Self::Shake256(sha3::Shake256::default())
    }

    /// Absorbs `data`.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Shake128(sponge) => sponge.update(data),
            Self::Shake256(sponge) => sponge.update(data),
        }
    }

    /// Squeezes `len` bytes from a copy of the current sponge.
    #[must_use]
    pub fn read(&self, len: usize) -> Vec<u8> {
        let mut output = vec![0_u8; len];
        match self {
            Self::Shake128(sponge) => sponge.clone().finalize_xof().read(&mut output),
            Self::Shake256(sponge) => sponge.clone().finalize_xof().read(&mut output),
        }
        output
    }
}
