// Copyright (C) Oscar Shrimpton 2019

// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
// more details.

// You should have received a copy of the GNU General Public License along
// with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Cluster-to-cluster visibility. Decoded but not used for culling.

use log::debug;
use serde::{Deserialize, Serialize};

use super::header::Header;
use super::lump::LumpKind;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::reader::LumpReader;
use crate::types::Result;

/// One bit vector per cluster, each `sz_vecs` bytes long.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisData {
    pub n_vecs: i32,
    pub sz_vecs: i32,
    pub vecs: Box<[u8]>,
}

impl VisData {
    /// Parse the visdata lump out of the whole file.
    ///
    /// The vectors are sized by the lump's own counts. If those disagree with
    /// the directory length it's reported, and the counts win.
    pub fn from_data(
        data: &[u8],
        header: &Header,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<VisData> {
        let entry = header.entry(LumpKind::VisData);
        header.get_lump(data, LumpKind::VisData)?;
        if entry.length == 0 {
            debug!("[VisData] Empty");
            return Ok(VisData::default());
        }

        // The counts and vectors may run past the directory length, but not past the file
        let offset = entry.offset as usize;
        let rest = data.get(offset..).unwrap_or(&[]);
        let mut reader = LumpReader::new(LumpKind::VisData.name(), rest, offset);
        let n_vecs = reader.read_i32()?;
        let sz_vecs = reader.read_i32()?;

        let expected = if n_vecs < 0 || sz_vecs < 0 {
            None
        } else {
            (n_vecs as usize).checked_mul(sz_vecs as usize)
        };

        let expected = match expected {
            Some(n) => n,
            None => {
                sink.report(Diagnostic::IncompleteRead {
                    lump: LumpKind::VisData,
                    read: 8,
                    length: entry.length as usize,
                });
                return Ok(VisData {
                    n_vecs,
                    sz_vecs,
                    vecs: Box::new([]),
                });
            }
        };

        if 8 + expected != entry.length as usize {
            sink.report(Diagnostic::IncompleteRead {
                lump: LumpKind::VisData,
                read: 8 + expected,
                length: entry.length as usize,
            });
        }

        let vecs = reader.read_bytes(expected)?.into();

        debug!(
            "[VisData] Read (off={} len={} n_vecs={} sz_vecs={})",
            entry.offset, entry.length, n_vecs, sz_vecs
        );

        Ok(VisData {
            n_vecs,
            sz_vecs,
            vecs,
        })
    }

    /// The visibility vector for `cluster`, if there is one.
    pub fn row(&self, cluster: usize) -> Option<&[u8]> {
        let size = self.sz_vecs.max(0) as usize;
        if cluster >= self.n_vecs.max(0) as usize {
            return None;
        }

        self.vecs.get(cluster * size..(cluster + 1) * size)
    }

    /// Whether `to` can be seen from `from`. Unknown clusters are never visible.
    pub fn cluster_visible(&self, from: usize, to: usize) -> bool {
        self.row(from)
            .and_then(|row| row.get(to / 8))
            .map_or(false, |byte| byte & (1 << (to % 8)) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbsp::{DirEntry, HEADER_LEN, MAGIC_HEADER};

    fn file_with_visdata(lump: &[u8], length: i32) -> (Vec<u8>, Header) {
        let mut header = Header {
            magic: *MAGIC_HEADER,
            version: 1,
            ..Header::default()
        };
        header.dir_entries[LumpKind::VisData.index()] = DirEntry {
            offset: HEADER_LEN as i32,
            length,
        };

        let mut data = header.to_bytes();
        data.extend_from_slice(lump);

        (data, header)
    }

    fn lump(n_vecs: i32, sz_vecs: i32, vecs: &[u8]) -> Vec<u8> {
        let mut out = vec![];
        out.extend_from_slice(&n_vecs.to_le_bytes());
        out.extend_from_slice(&sz_vecs.to_le_bytes());
        out.extend_from_slice(vecs);
        out
    }

    #[test]
    fn empty_lump() {
        let (data, header) = file_with_visdata(&[], 0);
        let mut diags: Vec<Diagnostic> = vec![];

        let vis = VisData::from_data(&data, &header, &mut diags).unwrap();

        assert_eq!(vis, VisData::default());
        assert!(diags.is_empty());
    }

    #[test]
    fn visibility_bits() {
        let raw = lump(2, 1, &[0b0000_0010, 0b0000_0001]);
        let (data, header) = file_with_visdata(&raw, raw.len() as i32);
        let mut diags: Vec<Diagnostic> = vec![];

        let vis = VisData::from_data(&data, &header, &mut diags).unwrap();

        assert!(diags.is_empty());
        assert_eq!(vis.row(1), Some(&[0b0000_0001][..]));
        assert!(vis.cluster_visible(0, 1));
        assert!(!vis.cluster_visible(0, 0));
        assert!(vis.cluster_visible(1, 0));
        assert!(!vis.cluster_visible(2, 0));
    }

    #[test]
    fn size_mismatch_is_reported() {
        let raw = lump(2, 2, &[1, 2, 3, 4, 5, 6]);
        let (data, header) = file_with_visdata(&raw, 10);
        let mut diags: Vec<Diagnostic> = vec![];

        let vis = VisData::from_data(&data, &header, &mut diags).unwrap();

        assert_eq!(&vis.vecs[..], &[1, 2, 3, 4]);
        assert_eq!(
            diags,
            vec![Diagnostic::IncompleteRead {
                lump: LumpKind::VisData,
                read: 12,
                length: 10,
            }]
        );
    }

    #[test]
    fn short_directory_length_reads_counts_from_file() {
        let raw = lump(1, 1, &[5]);
        let (data, header) = file_with_visdata(&raw, 4);
        let mut diags: Vec<Diagnostic> = vec![];

        let vis = VisData::from_data(&data, &header, &mut diags).unwrap();

        assert_eq!((vis.n_vecs, vis.sz_vecs), (1, 1));
        assert_eq!(&vis.vecs[..], &[5]);
        assert_eq!(
            diags,
            vec![Diagnostic::IncompleteRead {
                lump: LumpKind::VisData,
                read: 9,
                length: 4,
            }]
        );
    }

    #[test]
    fn counts_past_end_of_file() {
        let (data, header) = file_with_visdata(&[1, 0, 0, 0], 4);
        let mut diags: Vec<Diagnostic> = vec![];

        assert!(matches!(
            VisData::from_data(&data, &header, &mut diags),
            Err(crate::LoadError::TruncatedStream { .. })
        ));
    }

    #[test]
    fn vectors_past_end_of_file() {
        let raw = lump(4, 4, &[0; 3]);
        let (data, header) = file_with_visdata(&raw, raw.len() as i32);
        let mut diags: Vec<Diagnostic> = vec![];

        assert!(matches!(
            VisData::from_data(&data, &header, &mut diags),
            Err(crate::LoadError::TruncatedStream { .. })
        ));
    }
}
