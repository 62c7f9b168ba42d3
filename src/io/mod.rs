//! Types and methods for opening input and reading fixed-width binary fields.

pub mod endian;
pub mod file;

pub use endian::Endianness;
pub use file::InputFile;
