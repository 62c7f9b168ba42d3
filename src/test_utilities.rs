//! Test cases and test utility functions.
//!
//! These build 2-bit images in memory from annotated strings: `N`/`n` marks
//! unknown bases and lowercase marks soft-masked bases. They are only meant
//! for tests and benchmarks.

use rand::{thread_rng, Rng};
use std::io::Write;
use tempfile::NamedTempFile;

use crate::sequences::codec::{bases_to_byte, BASES};
use crate::twobit::header::TWOBIT_SIGNATURE;
use crate::Position;

// Stochastic test ranges defaults
//
// This is the random number of ranges to use in tests.
// The tradeoff is catching stochastic errors vs test time.
pub const NRANDOM_RANGES: usize = 2000;

/// A small genome covering unknown blocks, mask blocks spanning a packed unit
/// boundary, masked unknown bases, and a sequence shorter than one unit.
pub const TWOBIT_FIXTURE: &[(&str, &str)] = &[
    (
        "chr1",
        "GAACATGTACAACCTGACCTTCCACgaacatgtacaacctgaccttccacNNNNATGTACAACCTGACCTTCCAC",
    ),
    ("chr2", "acgtNNNNACGTACGTACgt"),
    ("chr3", "G"),
];

/// Find the runs of bases matching `predicate`, as `(start, length)`.
fn runs(sequence: &[u8], predicate: impl Fn(u8) -> bool) -> Vec<(u32, u32)> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < sequence.len() {
        if predicate(sequence[i]) {
            let start = i;
            while i < sequence.len() && predicate(sequence[i]) {
                i += 1;
            }
            blocks.push((start as u32, (i - start) as u32));
        } else {
            i += 1;
        }
    }
    blocks
}

/// Encode one sequence record (header fields then packed bases).
fn record_bytes(sequence: &str, swapped: bool) -> Vec<u8> {
    let bases = sequence.as_bytes();
    let unknown = runs(bases, |b| b.eq_ignore_ascii_case(&b'N'));
    let mask = runs(bases, |b| b.is_ascii_lowercase());

    let mut fields = vec![bases.len() as u32, unknown.len() as u32];
    fields.extend(unknown.iter().map(|b| b.0));
    fields.extend(unknown.iter().map(|b| b.1));
    fields.push(mask.len() as u32);
    fields.extend(mask.iter().map(|b| b.0));
    fields.extend(mask.iter().map(|b| b.1));
    fields.push(0);

    let mut bytes = Vec::new();
    for field in fields {
        bytes.extend_from_slice(&field_bytes(field, swapped));
    }

    // unknown bases are packed as T, and padding to a whole unit is T too
    let mut packable: Vec<u8> = bases
        .iter()
        .map(|b| if b.eq_ignore_ascii_case(&b'N') { BASES[0] } else { *b })
        .collect();
    while packable.len() % 16 != 0 {
        packable.push(BASES[0]);
    }
    for chunk in packable.chunks_exact(4) {
        let chunk: &[u8; 4] = chunk.try_into().expect("chunk of four");
        bytes.push(bases_to_byte(chunk).expect("test sequences must only contain ACGTN"));
    }
    bytes
}

fn field_bytes(field: u32, swapped: bool) -> [u8; 4] {
    if swapped {
        field.swap_bytes().to_ne_bytes()
    } else {
        field.to_ne_bytes()
    }
}

/// Build a complete 2-bit file image from `(name, sequence)` pairs, written
/// either in this machine's byte order or byte-swapped.
pub fn twobit_bytes(sequences: &[(&str, &str)], swapped: bool) -> Vec<u8> {
    let index_size: usize = sequences.iter().map(|(name, _)| 1 + name.len() + 4).sum();
    let mut offset = (16 + index_size) as u32;

    let mut bytes = Vec::new();
    for field in [TWOBIT_SIGNATURE, 0, sequences.len() as u32, 0] {
        bytes.extend_from_slice(&field_bytes(field, swapped));
    }
    let mut records = Vec::new();
    for (name, sequence) in sequences {
        bytes.push(name.len() as u8);
        bytes.extend_from_slice(name.as_bytes());
        bytes.extend_from_slice(&field_bytes(offset, swapped));
        let record = record_bytes(sequence, swapped);
        offset += record.len() as u32;
        records.extend(record);
    }
    bytes.extend(records);
    bytes
}

/// Write a 2-bit file to a temporary file.
pub fn temp_twobit_file(sequences: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("could not create temporary file");
    file.write_all(&twobit_bytes(sequences, false))
        .expect("could not write temporary 2-bit file");
    file
}

/// Build a random non-empty range start/end on a sequence of `seq_len`.
/// 0-indexed, right exclusive
pub fn random_range(seq_len: Position) -> (Position, Position) {
    let mut rng = thread_rng();
    let start = rng.gen_range(0..seq_len);
    let end = rng.gen_range(start + 1..=seq_len);
    (start, end)
}

/// Build a random sequence of `len` bases, with roughly `masked_fraction` of
/// it soft-masked and occasional runs of `N`.
pub fn random_sequence(len: usize, masked_fraction: f64) -> String {
    let mut rng = thread_rng();
    let mut sequence = Vec::with_capacity(len);
    while sequence.len() < len {
        let run = rng.gen_range(1..=200).min(len - sequence.len());
        let masked = rng.gen_bool(masked_fraction);
        let unknown = rng.gen_bool(0.02);
        for _ in 0..run {
            let base = if unknown {
                b'N'
            } else {
                BASES[rng.gen_range(0..4)]
            };
            sequence.push(if masked { base.to_ascii_lowercase() } else { base });
        }
    }
    String::from_utf8(sequence).expect("bases are ASCII")
}
