//! Byte order handling for the multi-byte fields of a 2-bit file.
//!
//! A 2-bit file is written in the integer byte order of the machine that
//! created it. The reader detects a mismatch from the header signature once,
//! and every later 32-bit read in the same file goes through the resulting
//! [`Endianness`].

use byteorder::{ByteOrder as _, NativeEndian, ReadBytesExt};
use std::io::Read;

use crate::error::TwoBitError;

/// Whether the 32-bit fields of a file must be byte-swapped after
/// being read in this machine's native order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Endianness {
    #[default]
    Native,
    Swapped,
}

impl Endianness {
    /// Apply this byte order to a value read in native order.
    pub fn apply(self, value: u32) -> u32 {
        match self {
            Endianness::Native => value,
            Endianness::Swapped => value.swap_bytes(),
        }
    }

    /// Decode one 32-bit field from exactly four bytes.
    pub fn u32_from_bytes(self, bytes: &[u8]) -> u32 {
        self.apply(NativeEndian::read_u32(bytes))
    }

    /// Read one 32-bit field.
    pub fn read_u32<R: Read>(self, reader: &mut R) -> Result<u32, TwoBitError> {
        Ok(self.apply(reader.read_u32::<NativeEndian>()?))
    }

    /// Read `count` consecutive 32-bit fields.
    ///
    /// The count usually comes from the file itself, so nothing is allocated
    /// up front: a bogus count on a short file fails with
    /// [`TwoBitError::EndOfData`] rather than a huge allocation.
    pub fn read_u32_vec<R: Read>(
        self,
        reader: &mut R,
        count: u32,
    ) -> Result<Vec<u32>, TwoBitError> {
        let nbytes = u64::from(count) * 4;
        let mut raw = Vec::new();
        reader.take(nbytes).read_to_end(&mut raw)?;
        if (raw.len() as u64) < nbytes {
            return Err(TwoBitError::EndOfData);
        }
        Ok(raw
            .chunks_exact(4)
            .map(|chunk| self.u32_from_bytes(chunk))
            .collect())
    }
}
