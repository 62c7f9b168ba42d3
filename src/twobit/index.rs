//! The sequence index: one `(name, offset)` entry per sequence, right after
//! the header.

use byteorder::ReadBytesExt;
use indexmap::IndexMap;
use std::io::{Read, Seek, SeekFrom};
use tracing::warn;

use super::header::{FileHeader, HEADER_SIZE};
use crate::error::TwoBitError;
use crate::Position;

/// One index entry. Names are raw bytes, not necessarily UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: Vec<u8>,
    pub offset: Position,
}

/// Read `header.sequence_count` index entries, in file order.
pub fn read_index<R: Read + Seek>(
    reader: &mut R,
    header: &FileHeader,
) -> Result<Vec<IndexEntry>, TwoBitError> {
    reader.seek(SeekFrom::Start(HEADER_SIZE))?;
    let mut entries = Vec::new();
    for _ in 0..header.sequence_count {
        let name_size = reader.read_u8()?;
        let mut name = vec![0_u8; name_size as usize];
        reader.read_exact(&mut name)?;
        let offset = header.endianness.read_u32(reader)?;
        entries.push(IndexEntry { name, offset });
    }
    Ok(entries)
}

/// Build the name to offset mapping. On duplicate names the last entry wins,
/// keeping the position of the first.
pub fn index_offsets(entries: Vec<IndexEntry>) -> IndexMap<Vec<u8>, Position> {
    let mut offsets = IndexMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(previous) = offsets.insert(entry.name, entry.offset) {
            warn!(
                previous_offset = previous,
                offset = entry.offset,
                "duplicate sequence name in 2-bit index, keeping the last entry"
            );
        }
    }
    offsets
}
