//! Per-sequence records: base count, unknown blocks, mask blocks, and the
//! location of the packed bases.

use std::io::{Read, Seek, SeekFrom};
use tracing::debug;

use crate::error::TwoBitError;
use crate::io::Endianness;
use crate::ranges::Block;
use crate::Position;

/// Number of bases in one packed 32-bit unit.
pub const BASES_PER_UNIT: Position = 16;

/// Number of bytes in one packed unit.
pub const UNIT_SIZE: u64 = 4;

/// The parsed header of one sequence record.
///
/// Both block lists are sorted by start and non-overlapping; this is
/// guaranteed by the format and not re-validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    pub dna_size: Position,
    pub unknown_blocks: Vec<Block>,
    pub mask_blocks: Vec<Block>,
    /// Absolute file offset of the first packed byte.
    pub packed_offset: u64,
}

impl SequenceRecord {
    /// Number of 32-bit units of packed bases (the last one zero padded).
    pub fn packed_units(&self) -> u64 {
        u64::from(self.dna_size).div_ceil(u64::from(BASES_PER_UNIT))
    }
}

/// Read a block table: the count, then all starts, then all lengths.
fn read_blocks<R: Read>(
    reader: &mut R,
    endianness: Endianness,
) -> Result<Vec<Block>, TwoBitError> {
    let count = endianness.read_u32(reader)?;
    let starts = endianness.read_u32_vec(reader, count)?;
    let lengths = endianness.read_u32_vec(reader, count)?;
    Ok(starts
        .into_iter()
        .zip(lengths)
        .map(|(start, length)| Block::new(start, length))
        .collect())
}

/// Parse the sequence record at the absolute file `offset`.
pub fn read_sequence_record<R: Read + Seek>(
    reader: &mut R,
    offset: Position,
    endianness: Endianness,
) -> Result<SequenceRecord, TwoBitError> {
    reader.seek(SeekFrom::Start(u64::from(offset)))?;
    let dna_size = endianness.read_u32(reader)?;
    let unknown_blocks = read_blocks(reader, endianness)?;
    let mask_blocks = read_blocks(reader, endianness)?;
    // reserved
    endianness.read_u32(reader)?;
    let packed_offset = reader.stream_position()?;

    debug!(
        offset,
        dna_size,
        unknown_blocks = unknown_blocks.len(),
        mask_blocks = mask_blocks.len(),
        "parsed 2-bit sequence record"
    );
    Ok(SequenceRecord {
        dna_size,
        unknown_blocks,
        mask_blocks,
        packed_offset,
    })
}

/// Read only the base count of the record at `offset`, without parsing its
/// block tables.
pub fn read_sequence_length<R: Read + Seek>(
    reader: &mut R,
    offset: Position,
    endianness: Endianness,
) -> Result<Position, TwoBitError> {
    reader.seek(SeekFrom::Start(u64::from(offset)))?;
    endianness.read_u32(reader)
}
