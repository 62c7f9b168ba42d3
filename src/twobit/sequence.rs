//! The [`TwoBitSequence`] handle for one sequence of an open [`TwoBitFile`].

use std::borrow::Cow;
use std::fmt;
use std::io::{Read, Seek};
use std::ops::RangeBounds;
use std::rc::Rc;

use super::file::TwoBitFile;
use super::record::SequenceRecord;
use crate::error::TwoBitError;
use crate::ranges::{bounds_to_slice, normalize_index, normalize_slice, Block};
use crate::sequences::nucleotide::Nucleotides;
use crate::{Position, PositionOffset};

/// One named sequence of a [`TwoBitFile`].
///
/// Coordinates are 0-based and right-exclusive, following the UCSC
/// convention (note the UCSC genome browser *displays* 1-based closed
/// coordinates). Negative positions count back from the end, and slices past
/// the end are truncated rather than rejected.
pub struct TwoBitSequence<'a, R> {
    file: &'a TwoBitFile<R>,
    name: &'a [u8],
    record: Rc<SequenceRecord>,
}

impl<R> fmt::Debug for TwoBitSequence<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoBitSequence")
            .field("name", &String::from_utf8_lossy(self.name))
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl<'a, R: Read + Seek> TwoBitSequence<'a, R> {
    pub(crate) fn new(file: &'a TwoBitFile<R>, name: &'a [u8], record: Rc<SequenceRecord>) -> Self {
        Self { file, name, record }
    }

    /// The sequence name, lossily converted to UTF-8.
    pub fn name(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.name)
    }

    /// The raw sequence name.
    pub fn name_bytes(&self) -> &'a [u8] {
        self.name
    }

    /// The number of bases.
    pub fn len(&self) -> Position {
        self.record.dna_size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The parsed sequence record.
    pub fn record(&self) -> &SequenceRecord {
        &self.record
    }

    /// Blocks of unknown bases, rendered as `N`.
    pub fn unknown_blocks(&self) -> &[Block] {
        &self.record.unknown_blocks
    }

    /// Soft-masked blocks, rendered in lowercase.
    pub fn mask_blocks(&self) -> &[Block] {
        &self.record.mask_blocks
    }

    /// Decode the bases of the slice `[start:end]`.
    ///
    /// `None` leaves that end open. An inverted or out-of-range request
    /// returns an empty (or truncated) result rather than an error.
    pub fn slice(
        &self,
        start: Option<PositionOffset>,
        end: Option<PositionOffset>,
    ) -> Result<Nucleotides, TwoBitError> {
        let (start, end) = normalize_slice(start, end, self.len());
        Ok(self.file.decode(&self.record, start, end)?.into())
    }

    /// Decode the bases of a Rust range, e.g. `seq.range(5..)` or
    /// `seq.range(-10..-5)`.
    pub fn range(
        &self,
        range: impl RangeBounds<PositionOffset>,
    ) -> Result<Nucleotides, TwoBitError> {
        let (start, end) = bounds_to_slice(range);
        self.slice(start, end)
    }

    /// The base at `index` (negative counts from the end), or `None` if the
    /// index is outside the sequence.
    pub fn get(&self, index: PositionOffset) -> Result<Option<u8>, TwoBitError> {
        match normalize_index(index, self.len()) {
            Some(position) => {
                let bases = self.file.decode(&self.record, position, position + 1)?;
                Ok(bases.first().copied())
            }
            None => Ok(None),
        }
    }

    /// Decode the whole sequence.
    ///
    /// Fair warning: this holds the entire sequence in memory, one byte per
    /// base, which for a large chromosome is a lot.
    pub fn to_nucleotides(&self) -> Result<Nucleotides, TwoBitError> {
        self.slice(None, None)
    }
}
