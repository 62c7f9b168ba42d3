//! # twobitreader: random-access reading of UCSC 2-bit files
//!
//! The 2-bit format (used by the UCSC genome browser and BLAT) stores DNA
//! sequences at two bits per base, with side tables recording runs of unknown
//! bases (`N`) and soft-masked (lowercase) bases. Any region can be decoded by
//! reading only the packed bytes that cover it, so whole genomes never need to
//! be loaded into memory.
//!
//! ```no_run
//! use twobitreader::prelude::*;
//!
//! let genome = TwoBitFile::open("hg38.2bit")?;
//! for (name, length) in genome.sequence_sizes()? {
//!     println!("{}\t{}", name, length);
//! }
//!
//! let chr20 = genome.sequence("chr20")?;
//! // 0-based, right-exclusive; negative positions count from the end
//! let region = chr20.slice(Some(100_100), Some(100_200))?;
//! let last_ten = chr20.range(-10..)?;
//! # Ok::<(), TwoBitError>(())
//! ```
//!
//! Out-of-range or inverted requests are clamped and return a possibly empty
//! result; they are never errors. There is no write support.

pub mod error;
pub mod io;
pub mod ranges;
pub mod sequences;
pub mod traits;
pub mod twobit;

#[cfg(any(test, feature = "test-utilities"))]
pub mod test_utilities;

/// A base position in a sequence (0-based).
pub type Position = u32;

/// A signed, caller-facing position; negative values count back from the
/// end of the sequence.
pub type PositionOffset = i64;

pub mod prelude {
    pub use crate::error::TwoBitError;
    pub use crate::ranges::Block;
    pub use crate::sequences::nucleotide::Nucleotides;
    pub use crate::traits::{GenericRange, Sequences};
    pub use crate::twobit::{Builder, TwoBitFile, TwoBitSequence};
    pub use crate::{Position, PositionOffset};
}
