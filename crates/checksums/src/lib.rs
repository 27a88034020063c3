#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod checksum;
mod error;
mod registry;
mod rolling;
pub mod strong;

pub use checksum::{Checksum, ChecksumState, Comparand};
pub use error::ChecksumError;
pub use registry::{
    AlgorithmSpec, BUILTIN_FAMILIES, Backend, DEFAULT_ALGORITHM, DEFAULT_OUTPUT_LENGTH,
    DIGEST_FAMILY, DigestKind, Family, FamilyTable, ROLLING_FAMILY, Registry, RollingKind,
    available_algorithms, resolve,
};
pub use rolling::{ROLLING_SEED, RollingChecksum};
