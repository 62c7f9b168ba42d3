//! The [`TwoBitFile`] type: an open 2-bit file and its sequence index.

use indexmap::IndexMap;
use noodles::core::Region;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::PathBuf;
use tracing::{debug, warn};

use super::decode::decode_range;
use super::header::{read_file_header, FileHeader};
use super::index::{index_offsets, read_index};
use super::record::{read_sequence_length, read_sequence_record, SequenceRecord};
use super::sequence::TwoBitSequence;
use crate::error::TwoBitError;
use crate::io::{Endianness, InputFile};
use crate::ranges::normalize_slice;
use crate::sequences::lazy::LazyLoader;
use crate::sequences::nucleotide::Nucleotides;
use crate::traits::Sequences;
use crate::{Position, PositionOffset};

/// Options for opening a [`TwoBitFile`].
///
/// ```no_run
/// use twobitreader::twobit::Builder;
///
/// let genome = Builder::default()
///     .preload(true)
///     .build_from_path("hg38.2bit")?;
/// # Ok::<(), twobitreader::error::TwoBitError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    preload: bool,
    soft_mask: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            preload: false,
            soft_mask: true,
        }
    }
}

impl Builder {
    /// Parse every sequence record when the file is opened, rather than on
    /// first access to each sequence.
    pub fn preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    /// Whether masked blocks are returned in lowercase (the default). When
    /// `false`, all bases are uppercase; unknown blocks are still `N`.
    pub fn soft_mask(mut self, soft_mask: bool) -> Self {
        self.soft_mask = soft_mask;
        self
    }

    /// Open the 2-bit file at `filepath`.
    ///
    /// Fails with [`TwoBitError::AccessError`] if the path is missing or
    /// unreadable, before any parsing happens.
    pub fn build_from_path(
        self,
        filepath: impl Into<PathBuf>,
    ) -> Result<TwoBitFile<BufReader<File>>, TwoBitError> {
        let input = InputFile::new(filepath);
        let reader = input.reader()?;
        self.build_from_reader(reader).map_err(|err| {
            if matches!(err, TwoBitError::BadSignature(_)) && input.is_gzipped().unwrap_or(false) {
                warn!(
                    path = %input.filepath.display(),
                    "input looks gzip-compressed; 2-bit files must be uncompressed"
                );
            }
            err
        })
    }

    /// Read the header and index from a seekable `reader`.
    ///
    /// Any parse error aborts the open; the reader is dropped with it.
    pub fn build_from_reader<R>(self, mut reader: R) -> Result<TwoBitFile<R>, TwoBitError>
    where
        R: Read + Seek + 'static,
    {
        reader.seek(SeekFrom::Start(0))?;
        let header = read_file_header(&mut reader)?;
        let offsets = index_offsets(read_index(&mut reader, &header)?);
        debug!(
            sequence_count = header.sequence_count,
            distinct_names = offsets.len(),
            byte_swapped = header.is_byte_swapped(),
            "opened 2-bit file"
        );

        let endianness = header.endianness;
        let lazy = LazyLoader::new(reader, move |reader: &mut R, offset: &Position| {
            read_sequence_record(reader, *offset, endianness)
        });

        let file = TwoBitFile {
            header,
            offsets,
            lazy,
            soft_mask: self.soft_mask,
        };
        if self.preload {
            for offset in file.offsets.values() {
                file.lazy.get_data(offset)?;
            }
        }
        Ok(file)
    }
}

/// An open 2-bit file.
///
/// Sequence records are parsed at most once each, on first access (or all at
/// open time with [`Builder::preload`]), and cached for the life of the file.
///
/// Every decode seeks and reads the one underlying reader, so a
/// [`TwoBitFile`] is not [`Sync`]: open one per thread.
///
/// ```no_run
/// use twobitreader::prelude::*;
///
/// let genome = TwoBitFile::open("hg38.2bit")?;
/// let chr20 = genome.sequence("chr20")?;
/// let region = chr20.slice(Some(100_100), Some(100_200))?;
/// println!("{}", region);
/// # Ok::<(), TwoBitError>(())
/// ```
pub struct TwoBitFile<R> {
    header: FileHeader,
    offsets: IndexMap<Vec<u8>, Position>,
    lazy: LazyLoader<R, SequenceRecord, Position>,
    soft_mask: bool,
}

impl<R> fmt::Debug for TwoBitFile<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoBitFile")
            .field("header", &self.header)
            .field("sequences", &self.offsets.len())
            .field("soft_mask", &self.soft_mask)
            .finish_non_exhaustive()
    }
}

impl TwoBitFile<BufReader<File>> {
    /// Open the 2-bit file at `filepath` with the default options.
    pub fn open(filepath: impl Into<PathBuf>) -> Result<Self, TwoBitError> {
        Builder::default().build_from_path(filepath)
    }
}

impl<R: Read + Seek + 'static> TwoBitFile<R> {
    /// Read a 2-bit file from any seekable reader with the default options.
    pub fn from_reader(reader: R) -> Result<Self, TwoBitError> {
        Builder::default().build_from_reader(reader)
    }
}

impl<R: Read + Seek> TwoBitFile<R> {
    /// The parsed file header.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// The byte order of the file's 32-bit fields.
    pub fn endianness(&self) -> Endianness {
        self.header.endianness
    }

    /// The number of (distinct) sequences.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the file holds no sequences.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether a sequence named `name` is in the index.
    pub fn contains(&self, name: &str) -> bool {
        self.offsets.contains_key(name.as_bytes())
    }

    /// Iterate over the raw sequence names, in index order.
    pub fn names(&self) -> impl Iterator<Item = &[u8]> {
        self.offsets.keys().map(Vec::as_slice)
    }

    /// Look up a sequence by name.
    pub fn sequence(&self, name: &str) -> Result<TwoBitSequence<'_, R>, TwoBitError> {
        self.sequence_by_name(name.as_bytes())
    }

    /// Look up a sequence by its raw (possibly non UTF-8) name.
    pub fn sequence_by_name(&self, name: &[u8]) -> Result<TwoBitSequence<'_, R>, TwoBitError> {
        let (name, offset) = self.offsets.get_key_value(name).ok_or_else(|| {
            TwoBitError::MissingSequence(String::from_utf8_lossy(name).into_owned())
        })?;
        let record = self.lazy.get_data(offset)?;
        Ok(TwoBitSequence::new(self, name, record))
    }

    /// Iterate over every sequence, in index order.
    pub fn sequences(&self) -> impl Iterator<Item = Result<TwoBitSequence<'_, R>, TwoBitError>> {
        self.offsets.iter().map(move |(name, offset)| {
            self.lazy
                .get_data(offset)
                .map(|record| TwoBitSequence::new(self, name, record))
        })
    }

    /// The length of every sequence, in index order.
    ///
    /// This reads only each record's base count; records that are not already
    /// cached are not parsed.
    pub fn sequence_sizes(&self) -> Result<IndexMap<String, Position>, TwoBitError> {
        let endianness = self.header.endianness;
        self.offsets
            .iter()
            .map(|(name, offset)| -> Result<(String, Position), TwoBitError> {
                let name = String::from_utf8_lossy(name).into_owned();
                if self.lazy.is_loaded(offset) {
                    return Ok((name, self.lazy.get_data(offset)?.dna_size));
                }
                let length = self
                    .lazy
                    .with_reader(|reader| read_sequence_length(reader, *offset, endianness))?;
                Ok((name, length))
            })
            .collect()
    }

    /// Fetch a region given in the 1-based, closed coordinates of a
    /// [`Region`], e.g. `"chr1:10-20".parse()?`. A region without an
    /// interval returns the whole sequence.
    pub fn query(&self, region: &Region) -> Result<Nucleotides, TwoBitError> {
        let name: &[u8] = region.name().as_ref();
        let sequence = self.sequence_by_name(name)?;
        let interval = region.interval();
        let to_offset =
            |position: usize| PositionOffset::try_from(position).unwrap_or(PositionOffset::MAX);
        let start = interval.start().map(|p| to_offset(p.get()) - 1);
        let end = interval.end().map(|p| to_offset(p.get()));
        sequence.slice(start, end)
    }

    /// Whether the record for sequence `name` has been parsed and cached.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.offsets
            .get(name.as_bytes())
            .is_some_and(|offset| self.lazy.is_loaded(offset))
    }

    /// Drop every cached sequence record.
    pub fn clear_cache(&self) {
        self.lazy.clear()
    }

    /// Decode normalized bases `[start, end)` of `record`.
    pub(crate) fn decode(
        &self,
        record: &SequenceRecord,
        start: Position,
        end: Position,
    ) -> Result<Vec<u8>, TwoBitError> {
        if start >= end {
            return Ok(Vec::new());
        }
        self.lazy
            .with_reader(|reader| decode_range(reader, record, start, end, self.soft_mask))
    }
}

impl<R: Read + Seek> Sequences for TwoBitFile<R> {
    type Container<'a> = Nucleotides where Self: 'a;
    type Slice<'a> = &'a [u8];

    /// Retrieve all sequence names (lossily converted to UTF-8).
    fn seqnames(&self) -> Vec<String> {
        self.names()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect()
    }

    /// Decode a whole sequence.
    fn get_sequence(&self, seqname: &str) -> Result<Self::Container<'_>, TwoBitError> {
        self.sequence(seqname)?.to_nucleotides()
    }

    /// Get the length of a particular sequence.
    fn get_sequence_length(&self, seqname: &str) -> Result<Position, TwoBitError> {
        Ok(self.sequence(seqname)?.len())
    }

    /// Apply an arbitrary function to the decoded bases of `[start, end)`,
    /// clamped to the sequence.
    fn region_map<V, F>(
        &self,
        func: &F,
        seqname: &str,
        start: Position,
        end: Position,
    ) -> Result<V, TwoBitError>
    where
        F: Fn(Self::Slice<'_>) -> V,
    {
        let sequence = self.sequence(seqname)?;
        let (start, end) = normalize_slice(Some(start.into()), Some(end.into()), sequence.len());
        let bases = self.decode(sequence.record(), start, end)?;
        Ok(func(bases.as_slice()))
    }
}
