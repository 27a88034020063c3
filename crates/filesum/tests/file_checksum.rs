//! End-to-end behaviour of the `FileChecksum` facade.

use filesum::{
    Checksum, ChecksumConfig, Comparand, FileChecksum, FileChecksumError, MATCH_ALL, PathKind,
};
use test_support::{Fixture, patterned_bytes};

fn facade(algorithm: &str) -> FileChecksum {
    FileChecksum::with_algorithm(algorithm).expect("registered algorithm")
}

fn checksum_of(algorithm: &str, data: &[u8]) -> Checksum {
    let mut sum = Checksum::new(algorithm).unwrap();
    sum.update(data);
    sum
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn unknown_algorithm_fails_at_construction() {
    let error = FileChecksum::with_algorithm("not-a-real-algo").unwrap_err();
    assert!(error.is_unknown_algorithm());
}

#[test]
fn zero_chunk_size_fails_at_construction() {
    let error = FileChecksum::new(ChecksumConfig::default().with_chunk_size(0)).unwrap_err();
    assert!(matches!(error, FileChecksumError::InvalidArgument { .. }));
}

#[test]
fn zero_output_length_fails_for_shake() {
    let config = ChecksumConfig::default()
        .with_algorithm("shake_256")
        .with_output_length(0);
    assert!(FileChecksum::new(config).unwrap_err().is_invalid_argument());
}

#[test]
fn available_algorithms_include_both_families() {
    let names = FileChecksum::available_algorithms();
    assert!(names.contains("crc32"));
    assert!(names.contains("adler32"));
    assert!(names.contains("sha1"));
    assert!(names.contains("shake_128"));
}

// ============================================================================
// Single files
// ============================================================================

#[test]
fn empty_file_matches_published_sha1() {
    let fixture = Fixture::new();
    let empty = fixture.file("empty", b"");
    let sum = facade("sha1").create_checksum(&empty).unwrap();
    assert_eq!(sum.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(sum.bytes_consumed(), 0);
}

#[test]
fn default_configuration_uses_sha1() {
    let fixture = Fixture::new();
    let path = fixture.file("abc", b"abc");
    let sums = FileChecksum::new(ChecksumConfig::default()).unwrap();
    assert_eq!(sums.algorithm().name(), "sha1");
    assert!(
        sums.verify(&path, "a9993e364706816aba3e25717850c26c9cd0d89d")
            .unwrap()
    );
}

#[test]
fn shake_output_length_comes_from_config() {
    let fixture = Fixture::new();
    let path = fixture.file("data", b"");
    let config = ChecksumConfig::default()
        .with_algorithm("shake_128")
        .with_output_length(16);
    let sum = FileChecksum::new(config).unwrap().create_checksum(&path).unwrap();
    assert_eq!(sum.to_hex(), "7f9c2ba4e88f827d616045507605853e");
}

#[test]
fn missing_file_is_not_found() {
    let fixture = Fixture::new();
    let error = facade("md5")
        .create_checksum(fixture.path().join("missing"))
        .unwrap_err();
    assert!(matches!(
        error,
        FileChecksumError::NotFound {
            expected: PathKind::File,
            ..
        }
    ));
}

#[test]
fn directory_is_not_a_file() {
    let fixture = Fixture::new();
    let dir = fixture.dir("sub");
    assert!(facade("md5").create_checksum(&dir).unwrap_err().is_not_found());
}

#[test]
fn every_algorithm_round_trips_through_all_representations() {
    let fixture = Fixture::new();
    let path = fixture.file("payload.bin", patterned_bytes(3, 5000));

    for name in FileChecksum::available_algorithms() {
        let sums = facade(name);
        let sum = sums.create_checksum(&path).unwrap();

        assert!(sums.verify(&path, &sum.to_bytes()).unwrap(), "{name} bytes");
        assert!(sums.verify(&path, &sum.to_string()).unwrap(), "{name} string");
        assert!(sums.verify(&path, &sum.to_hex()).unwrap(), "{name} hex");
        assert!(sums.verify(&path, &sum).unwrap(), "{name} checksum");

        let int_matches = sum.to_int().map(|value| sums.verify(&path, value).unwrap());
        if sum.family() == filesum::Family::Rolling {
            assert_eq!(int_matches, Some(true), "{name} int");
        } else {
            assert_ne!(int_matches, Some(true), "{name} int");
            assert!(!sums.verify(&path, 12_345_u32).unwrap(), "{name} unrelated int");
        }
    }
}

#[test]
fn different_contents_never_verify() {
    let fixture = Fixture::new();
    let a = fixture.file("a", b"contents of a");
    let b = fixture.file("b", b"contents of b");

    for name in FileChecksum::available_algorithms() {
        let sums = facade(name);
        let of_b = sums.create_checksum(&b).unwrap();
        assert!(!sums.verify(&a, &of_b).unwrap(), "{name}");
        assert!(!sums.verify(&a, &of_b.to_bytes()).unwrap(), "{name}");
    }
}

#[test]
fn checksum_of_other_algorithm_does_not_verify() {
    let fixture = Fixture::new();
    let path = fixture.file("data", b"same bytes");
    let crc = facade("crc32").create_checksum(&path).unwrap();
    assert!(!facade("adler32").verify(&path, &crc).unwrap());
}

// ============================================================================
// Many files and aggregates
// ============================================================================

#[test]
fn many_returns_independent_checksums_in_order() {
    let fixture = Fixture::new();
    let paths: Vec<_> = (0..10)
        .map(|i| fixture.file(format!("f{i}"), patterned_bytes(i, 100 + i as usize)))
        .collect();

    let results = facade("sha256").create_checksum_many(&paths).unwrap();
    assert_eq!(results.len(), paths.len());
    for ((path, sum), (i, expected)) in results.iter().zip(paths.iter().enumerate()) {
        assert_eq!(path, expected);
        let data = patterned_bytes(i as u32, 100 + i);
        assert_eq!(*sum, checksum_of("sha256", &data));
    }
}

#[test]
fn many_fails_when_any_file_is_missing() {
    let fixture = Fixture::new();
    let present = fixture.file("present", b"x");
    let missing = fixture.path().join("missing");
    let error = facade("md5")
        .create_checksum_many(&[present, missing])
        .unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn aggregate_is_concatenation_and_order_sensitive() {
    let fixture = Fixture::new();
    let a = fixture.file("a", b"first file ");
    let b = fixture.file("b", b"second file");

    for name in FileChecksum::available_algorithms() {
        let sums = facade(name);
        let ab = sums.create_checksum_aggregate(&[&a, &b]).unwrap();
        let ba = sums.create_checksum_aggregate(&[&b, &a]).unwrap();

        assert_eq!(ab, checksum_of(name, b"first file second file"), "{name}");
        assert_ne!(ab, ba, "{name}");
        assert!(sums.verify_aggregate(&[&a, &b], &ab).unwrap(), "{name}");
        assert!(!sums.verify_aggregate(&[&b, &a], &ab).unwrap(), "{name}");
    }
}

#[test]
fn verify_many_reports_each_file() {
    let fixture = Fixture::new();
    let good = fixture.file("good", b"good");
    let bad = fixture.file("bad", b"bad");
    let sums = facade("md5");
    let good_sum = sums.create_checksum(&good).unwrap();

    let expected = [
        (good.clone(), Comparand::from(&good_sum)),
        (bad.clone(), Comparand::from(&good_sum)),
        (good.clone(), Comparand::Str("0xd41d8cd98f00b204e9800998ecf8427e")),
    ];
    let results = sums.verify_many(&expected).unwrap();
    assert_eq!(results, vec![(good.clone(), true), (bad, false), (good, false)]);
}

// ============================================================================
// Directories
// ============================================================================

fn tree() -> Fixture {
    let fixture = Fixture::new();
    fixture.file("b.txt", b"bee");
    fixture.file("a.txt", b"ay");
    fixture.file("nested/c.txt", b"see");
    fixture.file("nested/d.bin", b"dee");
    fixture.dir("empty");
    fixture
}

#[test]
fn files_are_listed_in_sorted_depth_first_order() {
    let fixture = tree();
    let results = facade("crc32")
        .create_checksum_files(fixture.path(), MATCH_ALL)
        .unwrap();
    let names: Vec<_> = results
        .iter()
        .map(|(path, _)| path.strip_prefix(fixture.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        ["a.txt", "b.txt", "nested/c.txt", "nested/d.bin"]
            .iter()
            .map(std::path::PathBuf::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(results[0].1, checksum_of("crc32", b"ay"));
}

#[test]
fn pattern_filters_directory_files() {
    let fixture = tree();
    let results = facade("md5")
        .create_checksum_files(fixture.path(), "*.bin")
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].0.ends_with("nested/d.bin"));
}

#[test]
fn directory_checksum_streams_files_in_walk_order() {
    let fixture = tree();
    let sums = facade("sha1");
    let dir_sum = sums.create_checksum_dir(fixture.path(), MATCH_ALL).unwrap();
    assert_eq!(dir_sum, checksum_of("sha1", b"aybeeseedee"));

    let txt_sum = sums.create_checksum_dir(fixture.path(), "*.txt").unwrap();
    assert_eq!(txt_sum, checksum_of("sha1", b"aybeesee"));

    assert!(sums.verify_dir(fixture.path(), &dir_sum, MATCH_ALL).unwrap());
    assert!(!sums.verify_dir(fixture.path(), &dir_sum, "*.txt").unwrap());
}

#[test]
fn empty_directory_checksum_is_empty_input_checksum() {
    let fixture = Fixture::new();
    let sum = facade("sha1").create_checksum_dir(fixture.path(), MATCH_ALL).unwrap();
    assert!(sum.equals("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
}

#[test]
fn directory_operations_require_a_directory() {
    let fixture = tree();
    let file = fixture.path().join("a.txt");
    let error = facade("sha1").create_checksum_dir(&file, MATCH_ALL).unwrap_err();
    assert!(matches!(
        error,
        FileChecksumError::NotFound {
            expected: PathKind::Directory,
            ..
        }
    ));
}

#[test]
fn malformed_pattern_is_a_walk_error() {
    let fixture = tree();
    let error = facade("sha1")
        .create_checksum_files(fixture.path(), "[")
        .unwrap_err();
    assert!(matches!(error, FileChecksumError::Walk(_)));
}

#[cfg(unix)]
#[test]
fn symlinked_directory_operand_is_walked() {
    use std::os::unix::fs::symlink;

    let fixture = Fixture::new();
    let real = fixture.dir("real");
    fixture.file("real/a.txt", b"hello");
    let link = fixture.path().join("link");
    symlink(&real, &link).expect("link directory");

    let sums = facade("sha1");
    let through_link = sums.create_checksum_files(&link, MATCH_ALL).unwrap();
    assert_eq!(through_link.len(), 1);
    assert!(through_link[0].0.ends_with("link/a.txt"));
    assert_eq!(through_link[0].1, checksum_of("sha1", b"hello"));

    let dir_sum = sums.create_checksum_dir(&link, MATCH_ALL).unwrap();
    assert_eq!(dir_sum, sums.create_checksum_dir(&real, MATCH_ALL).unwrap());
    assert!(!dir_sum.equals("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
    assert!(sums.verify_dir(&link, &dir_sum, MATCH_ALL).unwrap());
}
