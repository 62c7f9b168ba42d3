//! The fixed 16 byte 2-bit file header.

use byteorder::{ByteOrder as _, NativeEndian};
use std::io::Read;

use crate::error::TwoBitError;
use crate::io::Endianness;

/// The 2-bit signature, in the byte order of the machine that wrote the file.
pub const TWOBIT_SIGNATURE: u32 = 0x1A412743;

/// Size of the file header in bytes; the index starts right after it.
pub const HEADER_SIZE: u64 = 16;

/// The parsed file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u32,
    pub version: u32,
    pub sequence_count: u32,
    pub reserved: u32,
    pub endianness: Endianness,
}

impl FileHeader {
    /// Whether the file was written with the opposite byte order.
    pub fn is_byte_swapped(&self) -> bool {
        self.endianness == Endianness::Swapped
    }
}

/// Decode and validate the header from its 16 raw bytes.
///
/// The four fields are read in native order; if the signature does not match,
/// all four are byte-swapped and the signature is tested again.
pub fn decode_file_header(bytes: &[u8; 16]) -> Result<FileHeader, TwoBitError> {
    let mut fields = [0_u32; 4];
    NativeEndian::read_u32_into(bytes, &mut fields);

    let endianness = if fields[0] == TWOBIT_SIGNATURE {
        Endianness::Native
    } else if fields[0].swap_bytes() == TWOBIT_SIGNATURE {
        Endianness::Swapped
    } else {
        return Err(TwoBitError::BadSignature(fields[0]));
    };
    let [signature, version, sequence_count, reserved] = fields.map(|f| endianness.apply(f));

    if version != 0 {
        return Err(TwoBitError::UnsupportedVersion(version));
    }
    if reserved != 0 {
        return Err(TwoBitError::NonZeroReserved(reserved));
    }
    Ok(FileHeader {
        signature,
        version,
        sequence_count,
        reserved,
        endianness,
    })
}

/// Read and validate the header from the current position of `reader`.
pub fn read_file_header<R: Read>(reader: &mut R) -> Result<FileHeader, TwoBitError> {
    let mut header_bytes = [0_u8; HEADER_SIZE as usize];
    reader.read_exact(&mut header_bytes)?;
    decode_file_header(&header_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header_bytes(fields: [u32; 4], swap: bool) -> [u8; 16] {
        let mut bytes = [0_u8; 16];
        for (chunk, field) in bytes.chunks_exact_mut(4).zip(fields) {
            let field = if swap { field.swap_bytes() } else { field };
            chunk.copy_from_slice(&field.to_ne_bytes());
        }
        bytes
    }

    #[test]
    fn test_native_header() {
        let bytes = header_bytes([TWOBIT_SIGNATURE, 0, 10, 0], false);
        let header = read_file_header(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(header.sequence_count, 10);
        assert_eq!(header.signature, TWOBIT_SIGNATURE);
        assert!(!header.is_byte_swapped());
    }

    #[test]
    fn test_swapped_header() {
        let bytes = header_bytes([TWOBIT_SIGNATURE, 0, 3, 0], true);
        let header = decode_file_header(&bytes).unwrap();
        assert_eq!(header.sequence_count, 3);
        assert_eq!(header.signature, TWOBIT_SIGNATURE);
        assert!(header.is_byte_swapped());
    }

    #[test]
    fn test_bad_signature() {
        let bytes = *b"Writing some ga!";
        let result = decode_file_header(&bytes);
        assert!(matches!(result, Err(TwoBitError::BadSignature(_))));
    }

    #[test]
    fn test_nonzero_version_and_reserved() {
        let bytes = header_bytes([TWOBIT_SIGNATURE, 1, 3, 0], true);
        assert!(matches!(
            decode_file_header(&bytes),
            Err(TwoBitError::UnsupportedVersion(1))
        ));
        let bytes = header_bytes([TWOBIT_SIGNATURE, 0, 3, 7], false);
        assert!(matches!(
            decode_file_header(&bytes),
            Err(TwoBitError::NonZeroReserved(7))
        ));
    }

    #[test]
    fn test_truncated_header() {
        let result = read_file_header(&mut Cursor::new(Vec::new()));
        assert!(matches!(result, Err(TwoBitError::EndOfData)));
        let result = read_file_header(&mut Cursor::new(vec![0x43, 0x27, 0x41, 0x1A]));
        assert!(matches!(result, Err(TwoBitError::EndOfData)));
    }
}
