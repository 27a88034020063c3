//! crates/checksums/src/checksum.rs
//!
//! The polymorphic checksum value.
//!
//! A [`Checksum`] is bound to one registered algorithm for its whole life.
//! The family is chosen once from the registry entry and stored as a closed
//! [`ChecksumState`] variant, so every update and read is a plain `match`.
//! Representations (`to_bytes`, `to_int`, `to_string`) never consume the
//! accumulator.

use std::fmt;
use std::io::IoSlice;
use std::ops::AddAssign;

use logging::trace_digest;

use crate::error::ChecksumError;
use crate::registry::{self, AlgorithmSpec, Backend, DEFAULT_OUTPUT_LENGTH, Family};
use crate::rolling::RollingChecksum;
use crate::strong::DigestChecksum;

/// Family-specific accumulator behind a [`Checksum`].
#[derive(Clone, Debug)]
pub enum ChecksumState {
    /// CRC-32 / Adler-32 running value.
    Rolling(RollingChecksum),
    /// Hash function state.
    Digest(DigestChecksum),
}

/// Streaming checksum for one registered algorithm.
///
/// # Examples
///
/// ```
/// use checksums::Checksum;
///
/// let mut sum = Checksum::new("sha1").unwrap();
/// sum.update(b"abc");
///
/// assert_eq!(sum.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// assert_eq!(sum.to_string(), "0xa9993e364706816aba3e25717850c26c9cd0d89d");
/// assert!(sum.equals("a9993e364706816aba3e25717850c26c9cd0d89d"));
/// assert!(!sum.equals(0xa999_u32));
/// ```
#[derive(Clone, Debug)]
pub struct Checksum {
    algorithm: AlgorithmSpec,
    state: ChecksumState,
}

impl Checksum {
    /// Creates an empty checksum for `name` using [`DEFAULT_OUTPUT_LENGTH`]
    /// for variable-length algorithms.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::UnknownAlgorithm`] when `name` is not registered.
    pub fn new(name: &str) -> Result<Self, ChecksumError> {
        Self::with_output_length(name, DEFAULT_OUTPUT_LENGTH)
    }

    /// Creates an empty checksum for `name` with an explicit output length.
    ///
    /// The length only matters for variable-length algorithms.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::UnknownAlgorithm`] when `name` is not
    /// registered, or [`ChecksumError::InvalidArgument`] when a
    /// variable-length algorithm is asked for zero bytes.
    pub fn with_output_length(name: &str, output_length: usize) -> Result<Self, ChecksumError> {
        let spec = registry::resolve(name)?;
        Self::from_spec(spec, output_length)
    }

    /// Creates an empty checksum for an already resolved algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::InvalidArgument`] when a variable-length
    /// algorithm is asked for zero bytes.
    pub fn from_spec(spec: &AlgorithmSpec, output_length: usize) -> Result<Self, ChecksumError> {
        let state = match spec.backend() {
            Backend::Rolling(kind) => ChecksumState::Rolling(RollingChecksum::new(kind)),
            Backend::Digest(kind) => {
                ChecksumState::Digest(DigestChecksum::new(kind, output_length)?)
            }
        };
        trace_digest!(algorithm = spec.name(), family = %spec.family(), "created checksum");
        Ok(Self {
            algorithm: *spec,
            state,
        })
    }

    /// Registry entry the checksum was created from.
    #[must_use]
    pub const fn algorithm(&self) -> &AlgorithmSpec {
        &self.algorithm
    }

    /// Algorithm name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Backend family.
    #[must_use]
    pub const fn family(&self) -> Family {
        self.algorithm.family()
    }

    /// Family-specific accumulator.
    #[must_use]
    pub const fn state(&self) -> &ChecksumState {
        &self.state
    }

    /// Length of [`to_bytes`](Self::to_bytes) in bytes.
    #[must_use]
    pub const fn output_length(&self) -> usize {
        match &self.state {
            ChecksumState::Rolling(_) => 4,
            ChecksumState::Digest(digest) => digest.output_length(),
        }
    }

    /// Total number of bytes passed to [`update`](Self::update).
    #[must_use]
    pub const fn bytes_consumed(&self) -> u64 {
        match &self.state {
            ChecksumState::Rolling(rolling) => rolling.len(),
            ChecksumState::Digest(digest) => digest.len(),
        }
    }

    /// Appends `chunk` to the accumulated input.
    pub fn update(&mut self, chunk: &[u8]) {
        match &mut self.state {
            ChecksumState::Rolling(rolling) => rolling.update(chunk),
            ChecksumState::Digest(digest) => digest.update(chunk),
        }
    }

    /// Appends every slice in order.
    pub fn update_vectored(&mut self, slices: &[IoSlice<'_>]) {
        match &mut self.state {
            ChecksumState::Rolling(rolling) => rolling.update_vectored(slices),
            ChecksumState::Digest(digest) => digest.update_vectored(slices),
        }
    }

    /// Raw checksum bytes. Rolling values are rendered big-endian.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match &self.state {
            ChecksumState::Rolling(rolling) => rolling.to_bytes().to_vec(),
            ChecksumState::Digest(digest) => digest.digest(),
        }
    }

    /// Raw checksum bytes at an explicit length.
    ///
    /// Only variable-length algorithms honour `len`; everything else
    /// returns [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::InvalidArgument`] when `len` is zero for a
    /// variable-length algorithm.
    pub fn digest_with_length(&self, len: usize) -> Result<Vec<u8>, ChecksumError> {
        match &self.state {
            ChecksumState::Rolling(rolling) => Ok(rolling.to_bytes().to_vec()),
            ChecksumState::Digest(digest) => digest.digest_with_length(len),
        }
    }

    /// Integer view of the checksum.
    ///
    /// Rolling checksums always have one. Digests are read as a big-endian
    /// integer when they fit in 128 bits and yield `None` otherwise.
    #[must_use]
    pub fn to_int(&self) -> Option<u128> {
        match &self.state {
            ChecksumState::Rolling(rolling) => Some(u128::from(rolling.value())),
            ChecksumState::Digest(digest) => {
                let bytes = digest.digest();
                (bytes.len() <= 16).then(|| {
                    bytes
                        .iter()
                        .fold(0_u128, |acc, byte| (acc << 8) | u128::from(*byte))
                })
            }
        }
    }

    /// Full-width lower-case hexadecimal rendering of [`to_bytes`](Self::to_bytes).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex_lower(&self.to_bytes())
    }

    /// Compares against any supported representation.
    ///
    /// - integers match only rolling checksums with the same value;
    /// - byte slices match [`to_bytes`](Self::to_bytes) exactly;
    /// - strings match the [`Display`](fmt::Display) rendering or the
    ///   full-width hex of the bytes, with or without a `0x` prefix;
    /// - checksums match when name, output length and bytes all agree.
    ///
    /// Mismatched kinds compare unequal; this never fails.
    pub fn equals<'a>(&self, other: impl Into<Comparand<'a>>) -> bool {
        match other.into() {
            Comparand::Int(value) => match &self.state {
                ChecksumState::Rolling(rolling) => u128::from(rolling.value()) == value,
                ChecksumState::Digest(_) => false,
            },
            Comparand::Bytes(bytes) => self.to_bytes() == bytes,
            Comparand::Str(text) => {
                if text == self.to_string() {
                    return true;
                }
                let digits = text.strip_prefix("0x").unwrap_or(text);
                digits == self.to_hex()
            }
            Comparand::Checksum(other) => {
                self.name() == other.name()
                    && self.output_length() == other.output_length()
                    && self.to_bytes() == other.to_bytes()
            }
        }
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ChecksumState::Rolling(rolling) => write!(f, "{:#x}", rolling.value()),
            ChecksumState::Digest(digest) => write!(f, "0x{}", hex_lower(&digest.digest())),
        }
    }
}

/// Value a [`Checksum`] can be compared against.
#[derive(Clone, Copy, Debug)]
pub enum Comparand<'a> {
    /// Integer form; only rolling checksums compare equal.
    Int(u128),
    /// Raw bytes.
    Bytes(&'a [u8]),
    /// Hexadecimal text.
    Str(&'a str),
    /// Another checksum value.
    Checksum(&'a Checksum),
}

impl From<u32> for Comparand<'_> {
    fn from(value: u32) -> Self {
        Self::Int(u128::from(value))
    }
}

impl From<u64> for Comparand<'_> {
    fn from(value: u64) -> Self {
        Self::Int(u128::from(value))
    }
}

impl From<u128> for Comparand<'_> {
    fn from(value: u128) -> Self {
        Self::Int(value)
    }
}

impl<'a> From<&'a [u8]> for Comparand<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Comparand<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Comparand<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a str> for Comparand<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for Comparand<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a Checksum> for Comparand<'a> {
    fn from(value: &'a Checksum) -> Self {
        Self::Checksum(value)
    }
}

impl AddAssign<&[u8]> for Checksum {
    fn add_assign(&mut self, chunk: &[u8]) {
        self.update(chunk);
    }
}

impl PartialEq for Checksum {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Checksum {}

impl PartialEq<[u8]> for Checksum {
    fn eq(&self, other: &[u8]) -> bool {
        self.equals(other)
    }
}

impl PartialEq<Vec<u8>> for Checksum {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.equals(other)
    }
}

impl PartialEq<str> for Checksum {
    fn eq(&self, other: &str) -> bool {
        self.equals(other)
    }
}

impl PartialEq<&str> for Checksum {
    fn eq(&self, other: &&str) -> bool {
        self.equals(*other)
    }
}

impl PartialEq<u32> for Checksum {
    fn eq(&self, other: &u32) -> bool {
        self.equals(*other)
    }
}

/// Full-width lower-case hex of `bytes`.
pub(crate) fn hex_lower(bytes: &[u8]) -> String {
    use fmt::Write as _;

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(&mut out, "{byte:02x}").expect("write! to String cannot fail");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum_of(name: &str, data: &[u8]) -> Checksum {
        let mut sum = Checksum::new(name).unwrap();
        sum.update(data);
        sum
    }

    #[test]
    fn rolling_display_is_unpadded_hex() {
        let sum = checksum_of("adler32", b"");
        assert_eq!(sum.to_string(), "0x0");
        assert_eq!(sum.to_hex(), "00000000");
        assert!(sum.equals("0x0"));
        assert!(sum.equals("00000000"));
        assert!(sum.equals(0_u32));
    }

    #[test]
    fn rolling_compares_against_integers() {
        let sum = checksum_of("crc32", b"123456789");
        assert_eq!(sum.to_int(), Some(0xcbf4_3926));
        assert!(sum.equals(0xcbf4_3926_u32));
        assert!(sum.equals(0xcbf4_3926_u64));
        assert_eq!(sum, 0xcbf4_3926_u32);
        assert!(!sum.equals(0xcbf4_3927_u32));
        assert_eq!(sum.to_bytes(), vec![0xcb, 0xf4, 0x39, 0x26]);
    }

    #[test]
    fn digests_never_equal_integers() {
        let sum = checksum_of("md5", b"");
        let int = sum.to_int().unwrap();
        assert_eq!(int, 0xd41d_8cd9_8f00_b204_e980_0998_ecf8_427e);
        assert!(!sum.equals(int));
        assert!(!sum.equals(0_u32));
    }

    #[test]
    fn wide_digests_have_no_integer_form() {
        assert_eq!(checksum_of("sha256", b"").to_int(), None);
    }

    #[test]
    fn string_comparison_accepts_prefixed_and_bare_hex() {
        let sum = checksum_of("sha1", b"");
        assert!(sum.equals("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
        assert!(sum.equals("0xda39a3ee5e6b4b0d3255bfef95601890afd80709"));
        assert!(!sum.equals("DA39A3EE5E6B4B0D3255BFEF95601890AFD80709"));
        assert!(!sum.equals("da39a3"));
        assert_eq!(sum, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn byte_comparison_is_exact() {
        let sum = checksum_of("crc32", b"123456789");
        assert!(sum.equals(&[0xcb_u8, 0xf4, 0x39, 0x26]));
        assert!(!sum.equals(&[0xcb_u8, 0xf4, 0x39]));
        let bytes = sum.to_bytes();
        assert_eq!(sum, bytes);
        assert_eq!(sum, *bytes.as_slice());
    }

    #[test]
    fn checksum_comparison_requires_same_algorithm() {
        let crc = checksum_of("crc32", b"payload");
        let same = checksum_of("crc32", b"payload");
        let adler = checksum_of("adler32", b"payload");
        assert_eq!(crc, same);
        assert_ne!(crc, adler);
    }

    #[test]
    fn checksum_comparison_requires_same_output_length() {
        let mut short = Checksum::with_output_length("shake_128", 16).unwrap();
        let mut long = Checksum::with_output_length("shake_128", 32).unwrap();
        short.update(b"x");
        long.update(b"x");
        assert_ne!(short, long);
        assert_eq!(short.to_bytes(), long.to_bytes()[..16]);
    }

    #[test]
    fn reads_are_idempotent() {
        let mut sum = checksum_of("blake2b", b"some input");
        let bytes = sum.to_bytes();
        let text = sum.to_string();
        assert_eq!(bytes, sum.to_bytes());
        assert_eq!(text, sum.to_string());

        sum.update(b" and more");
        assert_ne!(bytes, sum.to_bytes());
        assert_eq!(sum.bytes_consumed(), 19);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let error = Checksum::new("not-a-real-algo").unwrap_err();
        assert!(error.is_unknown_algorithm());
        assert!(Checksum::new("SHA1").unwrap_err().is_unknown_algorithm());
    }

    #[test]
    fn zero_output_length_is_rejected_for_shake_only() {
        assert!(
            Checksum::with_output_length("shake_256", 0)
                .unwrap_err()
                .is_invalid_argument()
        );
        let sha1 = Checksum::with_output_length("sha1", 0).unwrap();
        assert_eq!(sha1.output_length(), 20);
    }

    #[test]
    fn add_assign_appends_bytes() {
        let mut sum = Checksum::new("crc32").unwrap();
        sum += b"12345".as_slice();
        sum += b"6789".as_slice();
        assert_eq!(sum, 0xcbf4_3926_u32);
    }

    #[test]
    fn length_qualified_read_on_rolling_ignores_length() {
        let sum = checksum_of("adler32", b"abc");
        assert_eq!(sum.digest_with_length(0).unwrap(), sum.to_bytes());
    }

    #[test]
    fn accessors_report_registry_entry() {
        let sum = Checksum::new("shake_256").unwrap();
        assert_eq!(sum.name(), "shake_256");
        assert_eq!(sum.family(), Family::Digest);
        assert!(sum.algorithm().is_variable_length());
        assert_eq!(sum.output_length(), DEFAULT_OUTPUT_LENGTH);
        assert!(matches!(sum.state(), ChecksumState::Digest(_)));
    }

    #[test]
    fn hex_keeps_leading_zero_nibbles() {
        assert_eq!(hex_lower(&[0x00, 0x0f, 0xab, 0x10]), "000fab10");
        assert_eq!(hex_lower(&[]), "");
    }
}
