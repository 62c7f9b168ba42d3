//! Ranges and coordinate normalization.
//!
//! All coordinates are 0-based and right-exclusive. Caller-facing coordinates
//! are signed ([`PositionOffset`]): negative values count back from the end
//! of the sequence, and anything out of range is clamped rather than rejected.

use std::ops::{Bound, RangeBounds};

use crate::{traits::GenericRange, Position, PositionOffset};

/// A run of bases that share an annotation, i.e. an unknown (`N`) block or a
/// soft-masked (lowercase) block of a 2-bit sequence record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub start: Position,
    pub length: Position,
}

impl Block {
    /// Create a new block covering `[start, start + length)`.
    pub fn new(start: Position, length: Position) -> Self {
        Self { start, length }
    }
}

impl GenericRange for Block {
    fn start(&self) -> Position {
        self.start
    }
    fn end(&self) -> Position {
        self.start.saturating_add(self.length)
    }
}

/// Resolve one signed coordinate against a sequence of `length`, clamping
/// to `[0, length]`.
fn resolve_position(position: PositionOffset, length: Position) -> Position {
    let length_offset = PositionOffset::from(length);
    let resolved = if position < 0 {
        position + length_offset
    } else {
        position
    };
    // the clamp guarantees the value fits
    resolved.clamp(0, length_offset) as Position
}

/// Normalize a `[start:end]` slice over a sequence of `length`.
///
/// `None` means "from the beginning" for `start` and "to the end" for `end`.
/// The result always satisfies `start <= end <= length`; an inverted or
/// fully out-of-range request yields an empty range (`start == end`).
pub fn normalize_slice(
    start: Option<PositionOffset>,
    end: Option<PositionOffset>,
    length: Position,
) -> (Position, Position) {
    let start = start.map_or(0, |s| resolve_position(s, length));
    let end = end.map_or(length, |e| resolve_position(e, length));
    if start > end {
        (start, start)
    } else {
        (start, end)
    }
}

/// Normalize a single signed index over a sequence of `length`; `None` if it
/// falls outside the sequence.
pub fn normalize_index(index: PositionOffset, length: Position) -> Option<Position> {
    let length_offset = PositionOffset::from(length);
    let resolved = if index < 0 { index + length_offset } else { index };
    if (0..length_offset).contains(&resolved) {
        Some(resolved as Position)
    } else {
        None
    }
}

/// Convert Rust range syntax (`a..b`, `a..`, `..=b`, `..`) into the optional
/// slice bounds accepted by [`normalize_slice`].
pub fn bounds_to_slice(
    range: impl RangeBounds<PositionOffset>,
) -> (Option<PositionOffset>, Option<PositionOffset>) {
    let start = match range.start_bound() {
        Bound::Included(&s) => Some(s),
        Bound::Excluded(&s) => Some(s.saturating_add(1)),
        Bound::Unbounded => None,
    };
    let end = match range.end_bound() {
        // `..=-1` runs through the last base
        Bound::Included(&-1) => None,
        Bound::Included(&e) => Some(e.saturating_add(1)),
        Bound::Excluded(&e) => Some(e),
        Bound::Unbounded => None,
    };
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_clipping() {
        let block = Block::new(20, 4);
        assert_eq!(block.end(), 24);
        assert_eq!(block.width(), 4);
        assert_eq!(block.overlap_range(18, 26), Some((20, 24)));
        assert_eq!(block.overlap_range(22, 30), Some((22, 24)));
        assert_eq!(block.overlap_range(21, 22), Some((21, 22)));
        assert_eq!(block.overlap_width(18, 21), 1);
        // touching but not overlapping
        assert_eq!(block.overlap_range(24, 30), None);
        assert_eq!(block.overlap_range(10, 20), None);
        assert_eq!(block.overlap_range(22, 22), None);
    }

    #[test]
    fn test_normalize_slice_positive() {
        assert_eq!(normalize_slice(Some(0), Some(10), 50), (0, 10));
        assert_eq!(normalize_slice(Some(5), None, 50), (5, 50));
        assert_eq!(normalize_slice(None, None, 50), (0, 50));
        assert_eq!(normalize_slice(Some(40), Some(500), 50), (40, 50));
        assert_eq!(normalize_slice(Some(60), Some(70), 50), (50, 50));
    }

    #[test]
    fn test_normalize_slice_negative() {
        assert_eq!(normalize_slice(Some(-10), Some(-5), 50), (40, 45));
        assert_eq!(normalize_slice(Some(-1), None, 50), (49, 50));
        assert_eq!(normalize_slice(Some(-50), None, 50), (0, 50));
        assert_eq!(normalize_slice(Some(-500), Some(3), 50), (0, 3));
        assert_eq!(normalize_slice(None, Some(-500), 50), (0, 0));
    }

    #[test]
    fn test_normalize_slice_inverted_is_empty() {
        let (start, end) = normalize_slice(Some(30), Some(10), 50);
        assert_eq!(start, end);
        let (start, end) = normalize_slice(Some(-5), Some(-10), 50);
        assert_eq!(start, end);
        assert_eq!(normalize_slice(Some(0), Some(0), 0), (0, 0));
    }

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize_index(0, 50), Some(0));
        assert_eq!(normalize_index(-1, 50), Some(49));
        assert_eq!(normalize_index(-50, 50), Some(0));
        assert_eq!(normalize_index(50, 50), None);
        assert_eq!(normalize_index(-51, 50), None);
        assert_eq!(normalize_index(0, 0), None);
    }

    #[test]
    fn test_bounds_to_slice() {
        assert_eq!(bounds_to_slice(5..10), (Some(5), Some(10)));
        assert_eq!(bounds_to_slice(5..), (Some(5), None));
        assert_eq!(bounds_to_slice(..), (None, None));
        assert_eq!(bounds_to_slice(..=4), (None, Some(5)));
        assert_eq!(bounds_to_slice(-3..=-1), (Some(-3), None));
        assert_eq!(bounds_to_slice(-3..=-2), (Some(-3), Some(-1)));
        // far out-of-range bounds saturate, then clamp
        assert_eq!(bounds_to_slice(0..=i64::MAX), (Some(0), Some(i64::MAX)));
        assert_eq!(
            bounds_to_slice((Bound::Excluded(i64::MAX), Bound::Unbounded)),
            (Some(i64::MAX), None)
        );
        assert_eq!(normalize_slice(Some(0), Some(i64::MAX), 50), (0, 50));
    }
}
