//! Reading the UCSC 2-bit format.
//!
//! A 2-bit file stores many DNA sequences at two bits per base, with
//! side tables of unknown (`N`) blocks and soft-masked (lowercase) blocks, so
//! that any region can be decoded without reading the whole sequence.
//!
//! ## File layout
//!
//! All fields are 32-bit integers in the byte order of the machine that wrote
//! the file, unless noted.
//!
//!  1. **Header** (16 bytes): `signature` (`0x1A412743`), `version` (0),
//!     `sequenceCount`, `reserved` (0). If the signature does not match, every
//!     multi-byte field of the file must be byte-swapped.
//!  2. **Index**, one entry per sequence: `nameSize` (one byte), `name`
//!     (`nameSize` bytes), `offset` of the sequence record from the start of
//!     the file.
//!  3. **Sequence records**: `dnaSize`, `nBlockCount`, `nBlockStarts`,
//!     `nBlockSizes`, `maskBlockCount`, `maskBlockStarts`, `maskBlockSizes`,
//!     `reserved`, then `packedDna`: the bases packed two bits each
//!     (`T = 00`, `C = 01`, `A = 10`, `G = 11`), first base in the most
//!     significant bits, padded to a multiple of 32 bits.
//!
//! ## Components
//!
//!  - [`header`]: parses and validates the header, detecting byte order.
//!  - [`index`]: parses the name to offset index.
//!  - [`record`]: parses a sequence record.
//!  - [`decode`]: decodes a base range of a record and overlays its blocks.
//!  - [`TwoBitFile`] and [`TwoBitSequence`]: the user-facing handles.

pub mod decode;
pub mod file;
pub mod header;
pub mod index;
pub mod record;
pub mod sequence;

pub use file::{Builder, TwoBitFile};
pub use header::FileHeader;
pub use record::SequenceRecord;
pub use sequence::TwoBitSequence;
