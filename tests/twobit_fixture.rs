//! End-to-end tests against the 2-bit files in `tests_data/`.
//!
//! `test.2bit` holds `chr1`..`chr10` written little-endian;
//! `test_swapped.2bit` is the same genome with every 32-bit field byte-swapped.

use std::io::Write;

use noodles::core::Region;
use twobitreader::prelude::*;

const TEST_2BIT: &str = "tests_data/test.2bit";
const TEST_SWAPPED_2BIT: &str = "tests_data/test_swapped.2bit";

const CHR1: &str =
    "GAACATGTACAACCTGACCTTCCACgaacatgtacaacctgaccttccacNNNNATGTACAACCTGACCTTCCAC";
const CHR10: &str = "gaaagggaactccctgaccccttgtgaaagggaactccctgaccccttgt";

fn expected_genome() -> Vec<(String, &'static str)> {
    vec![
        ("chr1".to_string(), CHR1),
        ("chr2".to_string(), "ACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTAC"),
        ("chr3".to_string(), "NNNNNNNNNNAACCTGACCTTCCACGAACATGTACAACCTGACCTTCCAC"),
        ("chr4".to_string(), "GAACATGTACAACCTGACCTTCCACGAACATGTACAACCTNNNNNNNNNN"),
        ("chr5".to_string(), "GAACATGTACaacctgaccttccacgaacaTGTACAACCTGACCTTCCAC"),
        ("chr6".to_string(), "gaacaTGTACAACCTGaccttccacgaacatgTACAACCTGACCTtccac"),
        ("chr7".to_string(), "CACCTTCCAGtcnnnnnnnnacaagCACCTTCCAGTCCAACATGTACAAG"),
        ("chr8".to_string(), "NNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNN"),
        ("chr9".to_string(), "TTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGac"),
        ("chr10".to_string(), CHR10),
    ]
}

#[test]
fn test_twobit_file_has_chrs() {
    let genome = TwoBitFile::open(TEST_2BIT).expect("could not open test.2bit");
    let mut names = genome.seqnames();
    names.sort();
    let mut expected: Vec<String> = (1..=10).map(|i| format!("chr{}", i)).collect();
    expected.sort();
    assert_eq!(names, expected);
    assert_eq!(genome.len(), 10);
    assert!(!genome.header().is_byte_swapped());
}

#[test]
fn test_twobit_sequence_lengths() {
    let genome = TwoBitFile::open(TEST_2BIT).unwrap();
    let sizes = genome.sequence_sizes().unwrap();
    assert_eq!(sizes["chr1"], 75);
    for i in 2..=10 {
        assert_eq!(sizes[format!("chr{}", i).as_str()], 50);
    }
}

#[test]
fn test_twobit_chr1_and_chr10_sequences() {
    let genome = TwoBitFile::open(TEST_2BIT).unwrap();
    assert_eq!(genome.sequence("chr1").unwrap().to_nucleotides().unwrap(), CHR1);
    assert_eq!(genome.get_sequence("chr10").unwrap(), CHR10);
}

#[test]
fn test_whole_genome_both_byte_orders() {
    for path in [TEST_2BIT, TEST_SWAPPED_2BIT] {
        let genome = TwoBitFile::open(path).unwrap();
        for (name, expected) in expected_genome() {
            let sequence = genome.get_sequence(&name).unwrap();
            assert_eq!(sequence, expected, "{} differs in {}", name, path);
        }
    }
}

#[test]
fn test_swapped_file_detected() {
    let genome = TwoBitFile::open(TEST_SWAPPED_2BIT).unwrap();
    assert!(genome.header().is_byte_swapped());
    assert_eq!(genome.header().sequence_count, 10);
    let chr7 = genome.sequence("chr7").unwrap();
    assert_eq!(chr7.unknown_blocks(), &[Block::new(12, 8)]);
    assert_eq!(chr7.mask_blocks(), &[Block::new(10, 15)]);
}

#[test]
fn test_twobitsequence_getitem_key() {
    let genome = TwoBitFile::open(TEST_2BIT).unwrap();
    let chr10 = genome.sequence("chr10").unwrap();
    for (key, expected) in [(0, b'g'), (10, b't'), (-10, b'g'), (-1, b't')] {
        assert_eq!(chr10.get(key).unwrap(), Some(expected), "get({}) failed", key);
    }
}

#[test]
fn test_twobitsequence_getitem_slice() {
    let genome = TwoBitFile::open(TEST_2BIT).unwrap();
    let chr10 = genome.sequence("chr10").unwrap();
    let slices = [
        (Some(0), Some(10), "gaaagggaac"),
        (Some(5), Some(10), "ggaac"),
        (Some(5), None, "ggaactccctgaccccttgtgaaagggaactccctgaccccttgt"),
        (None, None, CHR10),
        (Some(-10), Some(-5), "gaccc"),
        (Some(-5), None, "cttgt"),
    ];
    for (start, end, expected) in slices {
        let found = chr10.slice(start, end).unwrap();
        assert_eq!(found, expected, "slice [{:?}:{:?}] failed", start, end);
    }
}

#[test]
fn test_every_slice_has_requested_length() {
    let genome = TwoBitFile::open(TEST_SWAPPED_2BIT).unwrap();
    let chr1 = genome.sequence("chr1").unwrap();
    for start in 0..=75_i64 {
        for end in start..=75_i64 {
            let bases = chr1.slice(Some(start), Some(end)).unwrap();
            assert_eq!(bases.len() as i64, end - start);
            assert_eq!(bases, &CHR1[start as usize..end as usize]);
        }
        if start > 0 {
            assert!(chr1.slice(Some(start), Some(start - 1)).unwrap().is_empty());
        }
    }
}

#[test]
fn test_unknown_block_slice() {
    let genome = TwoBitFile::open(TEST_2BIT).unwrap();
    let chr3 = genome.sequence("chr3").unwrap();
    assert_eq!(chr3.slice(Some(8), Some(12)).unwrap(), "NNAA");
    let chr7 = genome.sequence("chr7").unwrap();
    // masked and unknown
    assert_eq!(chr7.slice(Some(9), Some(22)).unwrap(), "Gtcnnnnnnnnac");
}

#[test]
fn test_region_query() {
    let genome = TwoBitFile::open(TEST_2BIT).unwrap();
    let region: Region = "chr10:1-10".parse().unwrap();
    assert_eq!(genome.query(&region).unwrap(), "gaaagggaac");
    let region: Region = "chr5:9-12".parse().unwrap();
    assert_eq!(genome.query(&region).unwrap(), "ACaa");
}

#[test]
fn test_no_soft_mask() {
    let genome = Builder::default()
        .soft_mask(false)
        .preload(true)
        .build_from_path(TEST_2BIT)
        .unwrap();
    assert!(genome.is_loaded("chr9"));
    assert_eq!(genome.get_sequence("chr1").unwrap(), CHR1.to_ascii_uppercase().as_str());
}

#[test]
fn test_missing_sequence_name() {
    let genome = TwoBitFile::open(TEST_2BIT).unwrap();
    assert!(matches!(
        genome.sequence("chr11"),
        Err(TwoBitError::MissingSequence(_))
    ));
}

#[test]
fn test_open_not_a_file() {
    let result = TwoBitFile::open("notreallyafile");
    assert!(matches!(result, Err(TwoBitError::AccessError { .. })));
}

#[test]
fn test_open_bad_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Writing some garbage to a file\n".repeat(10).as_slice())
        .unwrap();
    file.flush().unwrap();
    let result = TwoBitFile::open(file.path());
    assert!(matches!(result, Err(TwoBitError::BadSignature(_))));
}

#[test]
fn test_open_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let result = TwoBitFile::open(file.path());
    assert!(matches!(result, Err(TwoBitError::EndOfData)));
}

#[test]
fn test_open_truncated_index() {
    let bytes = std::fs::read(TEST_2BIT).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes[..40]).unwrap();
    file.flush().unwrap();
    let result = TwoBitFile::open(file.path());
    assert!(matches!(result, Err(TwoBitError::EndOfData)));
}
