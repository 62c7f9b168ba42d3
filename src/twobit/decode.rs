//! Decoding a half-open base range of one sequence record.
//!
//! Packed bases are stored in 32-bit units of 16 bases, first base in the
//! most significant bits. A request for `[start, end)` reads only the units
//! covering it, unpacks them through the [`codec`](crate::sequences::codec)
//! tables, trims to the request, then overlays the unknown and mask blocks
//! clipped to the request.

use std::io::{Read, Seek, SeekFrom};
use tracing::trace;

use super::record::{SequenceRecord, BASES_PER_UNIT, UNIT_SIZE};
use crate::error::TwoBitError;
use crate::ranges::Block;
use crate::sequences::codec::{unpack_bases, UNKNOWN_BASE};
use crate::traits::GenericRange;
use crate::Position;

/// Iterate over the parts of sorted, non-overlapping `blocks` that fall in
/// `[start, end)`, as indices local to that range.
///
/// The first candidate block is found by binary search on block ends, which
/// are sorted because the blocks are.
fn clipped_blocks(
    blocks: &[Block],
    start: Position,
    end: Position,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    let first = blocks.partition_point(|block| block.end() <= start);
    blocks[first..]
        .iter()
        .take_while(move |block| block.start < end)
        .filter_map(move |block| block.overlap_range(start, end))
        .map(move |(s, e)| ((s - start) as usize, (e - start) as usize))
}

/// Overwrite every base in an unknown block with `N`, keeping the case of
/// the position so the overlays can be applied in either order.
pub fn apply_unknown_blocks(bases: &mut [u8], blocks: &[Block], start: Position, end: Position) {
    for (s, e) in clipped_blocks(blocks, start, end) {
        for base in &mut bases[s..e] {
            *base = if base.is_ascii_lowercase() {
                UNKNOWN_BASE.to_ascii_lowercase()
            } else {
                UNKNOWN_BASE
            };
        }
    }
}

/// Lowercase every base in a mask block.
pub fn apply_mask_blocks(bases: &mut [u8], blocks: &[Block], start: Position, end: Position) {
    for (s, e) in clipped_blocks(blocks, start, end) {
        bases[s..e].make_ascii_lowercase();
    }
}

/// Decode bases `[start, end)` of `record`.
///
/// The range must already be normalized, i.e. `start <= end <= record.dna_size`.
/// An empty range returns without touching `reader`.
pub fn decode_range<R: Read + Seek>(
    reader: &mut R,
    record: &SequenceRecord,
    start: Position,
    end: Position,
    soft_mask: bool,
) -> Result<Vec<u8>, TwoBitError> {
    debug_assert!(start <= end && end <= record.dna_size);
    if start >= end {
        return Ok(Vec::new());
    }

    let start_unit = u64::from(start / BASES_PER_UNIT);
    let last_unit = record.packed_units().saturating_sub(1);
    let end_unit = u64::from((end - 1) / BASES_PER_UNIT).min(last_unit);
    let units_to_read = end_unit - start_unit + 1;
    trace!(start, end, start_unit, units_to_read, "decoding 2-bit range");

    reader.seek(SeekFrom::Start(record.packed_offset + start_unit * UNIT_SIZE))?;
    let mut packed = vec![0_u8; (units_to_read * UNIT_SIZE) as usize];
    reader.read_exact(&mut packed)?;

    // Packed bytes are taken in stored order: undoing the writer's byte
    // order on each unit and re-serializing it in that order is the identity.
    let mut bases = Vec::with_capacity(packed.len() * 4);
    unpack_bases(&packed, &mut bases);

    let first_base = (start % BASES_PER_UNIT) as usize;
    let region_size = (end - start) as usize;
    bases.truncate(first_base + region_size);
    bases.drain(..first_base);

    apply_unknown_blocks(&mut bases, &record.unknown_blocks, start, end);
    if soft_mask {
        apply_mask_blocks(&mut bases, &record.mask_blocks, start, end);
    }
    Ok(bases)
}
