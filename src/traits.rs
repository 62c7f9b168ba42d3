//! Traits used by the twobitreader library.
//!

use crate::{error::TwoBitError, Position};

/// The [`GenericRange`] trait defines common functionality for all range types.
/// Ranges are 0-indexed and right-exclusive.
pub trait GenericRange: Clone {
    fn start(&self) -> Position;
    fn end(&self) -> Position;
    fn width(&self) -> Position {
        self.end() - self.start()
    }
    /// Calculate how many basepairs overlap this range and `[start, end)`.
    fn overlap_width(&self, start: Position, end: Position) -> Position {
        self.overlap_range(start, end)
            .map_or(0, |(overlap_start, overlap_end)| overlap_end - overlap_start)
    }

    /// Return a tuple of the range created by clipping this range to `[start, end)`;
    /// `None` if they do not share at least one basepair.
    fn overlap_range(&self, start: Position, end: Position) -> Option<(Position, Position)> {
        let overlap_start = std::cmp::max(self.start(), start);
        let overlap_end = std::cmp::min(self.end(), end);

        if overlap_start < overlap_end {
            Some((overlap_start, overlap_end))
        } else {
            None
        }
    }
}

/// The [`Sequences`] trait defines generic functionality for per-basepair data,
/// e.g. nucleotide sequences, stored by sequence (i.e. chromosome) name.
pub trait Sequences {
    type Container<'a>
    where
        Self: 'a;
    type Slice<'a>;

    /// Retrieve all sequence names.
    fn seqnames(&self) -> Vec<String>;

    /// Retrieve the whole sequence for a particular sequence name.
    fn get_sequence(&self, seqname: &str) -> Result<Self::Container<'_>, TwoBitError>;

    /// Get the length of a particular sequence.
    fn get_sequence_length(&self, seqname: &str) -> Result<Position, TwoBitError>;

    /// Apply an arbitrary function to the specified region.
    ///
    /// # Arguments
    /// * `func`: a function that takes the region's data and processes it, returning a
    ///   generic type `V`.
    /// * `seqname`: the sequence name of the region to apply the function to.
    /// * `start`: the start position of the region to apply the function to.
    /// * `end`: the end position of the region to apply the function to.
    fn region_map<V, F>(
        &self,
        func: &F,
        seqname: &str,
        start: Position,
        end: Position,
    ) -> Result<V, TwoBitError>
    where
        F: Fn(Self::Slice<'_>) -> V;
}
