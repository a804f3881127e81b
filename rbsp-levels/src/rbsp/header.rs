//! The header and lump directory at the start of a file.

use serde::{Deserialize, Serialize};

use super::lump::{LumpKind, LUMP_COUNT};
use crate::reader::{LumpReader, Record};
use crate::types::{LoadError, Result};

/// The first 4 bytes of every RBSP file.
pub const MAGIC_HEADER: &[u8; 4] = b"RBSP";

/// Size of the whole header, including the directory.
pub const HEADER_LEN: usize = 4 + 4 + (LUMP_COUNT * DirEntry::SIZE);

/// The header found at the start of a bsp file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    pub magic: [u8; 4],
    pub version: i32,
    pub dir_entries: [DirEntry; LUMP_COUNT],
}

/// A directory entry, pointing to a lump in the file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirEntry {
    /// Offset from beginning of file to start of lump
    pub offset: i32,

    /// Length of lump in bytes
    pub length: i32,
}

impl Record for DirEntry {
    const NAME: &'static str = "DirEntry";
    const SIZE: usize = 4 * 2;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(DirEntry {
            offset: reader.read_i32()?,
            length: reader.read_i32()?,
        })
    }
}

impl Header {
    /// Deserialise from the start of a file.
    /// # Format
    /// string[4] magic             Magic number. Always "RBSP".
    /// int version                 Version number.
    /// direntry[17] direntries     Lump directory, seventeen entries.
    ///
    /// The magic is checked before anything else is read.
    pub fn from(data: &[u8]) -> Result<Header> {
        let mut reader = LumpReader::new("Header", data, 0);

        let magic: [u8; 4] = reader.read_array()?;
        if &magic != MAGIC_HEADER {
            return Err(LoadError::InvalidFormat { magic });
        }

        let version = reader.read_i32()?;

        let mut dir_entries = [DirEntry::default(); LUMP_COUNT];
        for entry in dir_entries.iter_mut() {
            *entry = reader.read()?;
        }

        Ok(Header {
            magic,
            version,
            dir_entries,
        })
    }

    /// Serialise back into the on-disk layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN);
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&self.version.to_le_bytes());
        for entry in self.dir_entries.iter() {
            out.extend_from_slice(&entry.offset.to_le_bytes());
            out.extend_from_slice(&entry.length.to_le_bytes());
        }

        out
    }

    pub fn entry(&self, kind: LumpKind) -> DirEntry {
        self.dir_entries[kind.index()]
    }

    /// Get the bytes of a lump from the whole file.
    ///
    /// The slice is cut short if the lump runs off the end of the file, so
    /// decoding it runs into a [`LoadError::TruncatedStream`].
    pub fn get_lump<'l>(&self, buf: &'l [u8], kind: LumpKind) -> Result<&'l [u8]> {
        let entry = self.entry(kind);
        if entry.offset < 0 || entry.length < 0 {
            return Err(LoadError::BadDirectoryEntry {
                lump: kind,
                offset: entry.offset,
                length: entry.length,
            });
        }

        let start = (entry.offset as usize).min(buf.len());
        let end = (entry.offset as usize)
            .saturating_add(entry.length as usize)
            .min(buf.len());

        Ok(&buf[start..end])
    }
}
