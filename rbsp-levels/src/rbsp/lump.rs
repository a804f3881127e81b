/*
 * Copyright (C) Oscar Shrimpton 2020
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

//! The fixed set of lumps, and reading lumps made of repeated records.

use log::debug;

use super::header::Header;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::reader::{LumpReader, Record};
use crate::types::Result;

/// Number of entries in the lump directory.
pub const LUMP_COUNT: usize = 17;

/// Every lump in an RBSP file, in directory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LumpKind {
    Entities = 0,
    Textures = 1,
    Planes = 2,
    Nodes = 3,
    Leafs = 4,
    LeafFaces = 5,
    LeafBrushes = 6,
    Models = 7,
    Brushes = 8,
    BrushSides = 9,
    Vertexes = 10,
    MeshVerts = 11,
    Effects = 12,
    Faces = 13,
    Lightmaps = 14,
    LightVols = 15,
    VisData = 16,
}

impl LumpKind {
    pub const ALL: [LumpKind; LUMP_COUNT] = [
        LumpKind::Entities,
        LumpKind::Textures,
        LumpKind::Planes,
        LumpKind::Nodes,
        LumpKind::Leafs,
        LumpKind::LeafFaces,
        LumpKind::LeafBrushes,
        LumpKind::Models,
        LumpKind::Brushes,
        LumpKind::BrushSides,
        LumpKind::Vertexes,
        LumpKind::MeshVerts,
        LumpKind::Effects,
        LumpKind::Faces,
        LumpKind::Lightmaps,
        LumpKind::LightVols,
        LumpKind::VisData,
    ];

    /// Position in the header's directory.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            LumpKind::Entities => "Entities",
            LumpKind::Textures => "Textures",
            LumpKind::Planes => "Planes",
            LumpKind::Nodes => "Nodes",
            LumpKind::Leafs => "Leafs",
            LumpKind::LeafFaces => "LeafFaces",
            LumpKind::LeafBrushes => "LeafBrushes",
            LumpKind::Models => "Models",
            LumpKind::Brushes => "Brushes",
            LumpKind::BrushSides => "BrushSides",
            LumpKind::Vertexes => "Vertexes",
            LumpKind::MeshVerts => "MeshVerts",
            LumpKind::Effects => "Effects",
            LumpKind::Faces => "Faces",
            LumpKind::Lightmaps => "Lightmaps",
            LumpKind::LightVols => "LightVols",
            LumpKind::VisData => "VisData",
        }
    }
}

/// Read a lump that is a flat array of `T`.
///
/// `length / T::SIZE` records are decoded. If the length has a remainder it is
/// reported and the trailing bytes are ignored; the records read so far are kept.
pub(crate) fn read_records<T: Record>(
    data: &[u8],
    header: &Header,
    kind: LumpKind,
    sink: &mut dyn DiagnosticSink,
) -> Result<Box<[T]>> {
    let entry = header.entry(kind);
    let lump = header.get_lump(data, kind)?;
    let length = entry.length as usize;

    if length % T::SIZE != 0 {
        sink.report(Diagnostic::LumpLengthMismatch {
            lump: kind,
            length,
            record_size: T::SIZE,
        });
    }

    let count = length / T::SIZE;
    let mut reader = LumpReader::new(kind.name(), lump, entry.offset as usize);

    // A bogus length shouldn't make us reserve memory the file can't back
    let mut records = Vec::with_capacity(count.min(lump.len() / T::SIZE + 1));
    for _ in 0..count {
        records.push(reader.read::<T>()?);
    }

    debug!(
        "[{}] Read (off={} len={} count={})",
        kind.name(),
        entry.offset,
        entry.length,
        records.len()
    );

    Ok(records.into_boxed_slice())
}
