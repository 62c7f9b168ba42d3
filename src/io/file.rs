//! Input file handling with [`InputFile`].
//!
//! A 2-bit file is read by seeking, so unlike plain text genomics formats it
//! cannot be transparently decompressed: the input must be a regular,
//! uncompressed file.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use crate::error::TwoBitError;

/// Represents an input 2-bit file on disk.
#[derive(Clone, Debug)]
pub struct InputFile {
    pub filepath: PathBuf,
}

impl InputFile {
    /// Constructs a new `InputFile`.
    ///
    /// # Arguments
    ///
    /// * `filepath` - the path to the 2-bit file.
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    fn access_error(&self, source: io::Error) -> TwoBitError {
        TwoBitError::AccessError {
            path: self.filepath.clone(),
            source,
        }
    }

    /// Check that the file exists, is a regular file, and can be opened for
    /// reading, *before* any parsing happens.
    pub fn check_access(&self) -> Result<(), TwoBitError> {
        let metadata = std::fs::metadata(&self.filepath).map_err(|e| self.access_error(e))?;
        if metadata.is_dir() {
            return Err(self.access_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path is a directory",
            )));
        }
        Ok(())
    }

    /// Opens the file and returns a buffered, seekable reader.
    ///
    /// # Returns
    ///
    /// A result containing a `BufReader<File>` on success, or a
    /// [`TwoBitError::AccessError`] if the file is missing or unreadable.
    pub fn reader(&self) -> Result<BufReader<File>, TwoBitError> {
        self.check_access()?;
        let file = File::open(&self.filepath).map_err(|e| self.access_error(e))?;
        Ok(BufReader::new(file))
    }

    /// Check if the file starts with the gzip magic numbers. A 2-bit file
    /// should never be compressed; this is used to give a clearer log message.
    pub fn is_gzipped(&self) -> io::Result<bool> {
        let mut file = File::open(&self.filepath)?;
        let mut buffer = [0; 2];
        match file.read_exact(&mut buffer) {
            Ok(()) => Ok(buffer == [0x1f, 0x8b]),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InputFile;
    use crate::error::TwoBitError;
    use std::io::Write;

    #[test]
    fn test_missing_file() {
        let input = InputFile::new("notreallyafile.2bit");
        let result = input.reader();
        assert!(matches!(result, Err(TwoBitError::AccessError { .. })));
    }

    #[test]
    fn test_directory_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();
        let input = InputFile::new(dir.path());
        assert!(matches!(
            input.check_access(),
            Err(TwoBitError::AccessError { .. })
        ));
    }

    #[test]
    fn test_gzip_detection() {
        let mut gz = tempfile::NamedTempFile::new().unwrap();
        gz.write_all(&[0x1f, 0x8b, 0x08, 0x00]).unwrap();
        assert!(InputFile::new(gz.path()).is_gzipped().unwrap());

        let empty = tempfile::NamedTempFile::new().unwrap();
        assert!(!InputFile::new(empty.path()).is_gzipped().unwrap());
    }
}
