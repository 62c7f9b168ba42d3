//! Conversion between 2-bit codes and nucleotide symbols.
//!
//! Bases are packed four to a byte, the first base in the two most
//! significant bits: `00 = T`, `01 = C`, `10 = A`, `11 = G`. So the
//! sequence `TCAG` is the byte `0b00011011`.
//!
//! Decoding goes through two precomputed tables, [`BYTE_TABLE`] (one byte to
//! four bases) and [`TWOBYTE_TABLE`] (two bytes to eight bases). Both are
//! built once on first use and never mutated.

use lazy_static::lazy_static;

use crate::error::TwoBitError;

/// The four bases, indexed by their 2-bit code.
pub const BASES: [u8; 4] = *b"TCAG";

/// The symbol used for bases in unknown blocks.
pub const UNKNOWN_BASE: u8 = b'N';

lazy_static! {
    /// Every byte value mapped to the four bases it encodes.
    pub static ref BYTE_TABLE: [[u8; 4]; 256] = {
        let mut table = [[0_u8; 4]; 256];
        for (byte, bases) in table.iter_mut().enumerate() {
            *bases = byte_to_bases(byte as u8);
        }
        table
    };

    /// Every 16-bit value (first byte high) mapped to the eight bases it encodes.
    pub static ref TWOBYTE_TABLE: Vec<[u8; 8]> = (0..=u16::MAX)
        .map(|unit| {
            let [high, low] = unit.to_be_bytes();
            let mut bases = [0_u8; 8];
            bases[..4].copy_from_slice(&BYTE_TABLE[high as usize]);
            bases[4..].copy_from_slice(&BYTE_TABLE[low as usize]);
            bases
        })
        .collect();
}

/// Convert a 2-bit code to its base.
pub fn bits_to_base(bits: u8) -> Result<u8, TwoBitError> {
    BASES
        .get(bits as usize)
        .copied()
        .ok_or(TwoBitError::InvalidBaseCode(bits))
}

/// Convert a base (either case) to its 2-bit code. Returns `None` for
/// anything that is not one of `TCAG`.
pub fn base_to_bits(base: u8) -> Option<u8> {
    match base.to_ascii_uppercase() {
        b'T' => Some(0b00),
        b'C' => Some(0b01),
        b'A' => Some(0b10),
        b'G' => Some(0b11),
        _ => None,
    }
}

/// Convert one packed byte to the four bases it encodes, most significant
/// bits first.
pub fn byte_to_bases(byte: u8) -> [u8; 4] {
    [
        BASES[(byte >> 6) as usize & 0b11],
        BASES[(byte >> 4) as usize & 0b11],
        BASES[(byte >> 2) as usize & 0b11],
        BASES[byte as usize & 0b11],
    ]
}

/// Pack four bases back into one byte; the inverse of [`byte_to_bases`].
pub fn bases_to_byte(bases: &[u8; 4]) -> Option<u8> {
    bases
        .iter()
        .try_fold(0_u8, |byte, &base| Some((byte << 2) | base_to_bits(base)?))
}

/// Unpack 2-bit packed bytes, in stored order, appending four bases per byte
/// to `out`.
pub fn unpack_bases(packed: &[u8], out: &mut Vec<u8>) {
    out.reserve(packed.len() * 4);
    let mut pairs = packed.chunks_exact(2);
    for pair in &mut pairs {
        let unit = u16::from_be_bytes([pair[0], pair[1]]);
        out.extend_from_slice(&TWOBYTE_TABLE[unit as usize]);
    }
    if let [byte] = pairs.remainder() {
        out.extend_from_slice(&BYTE_TABLE[*byte as usize]);
    }
}
