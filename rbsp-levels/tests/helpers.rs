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
#![allow(dead_code)]

use rbsp_levels::rbsp::{DirEntry, Header, LumpKind, HEADER_LEN, LUMP_COUNT, MAGIC_HEADER};

/// Assembles a BSP file in memory, one lump at a time.
#[derive(Default)]
pub struct BspBuilder {
    lumps: Vec<(LumpKind, Vec<u8>)>,
}

impl BspBuilder {
    pub fn new() -> BspBuilder {
        BspBuilder::default()
    }

    pub fn lump(mut self, kind: LumpKind, data: Vec<u8>) -> BspBuilder {
        self.lumps.push((kind, data));
        self
    }

    /// Header and lumps, with lumps placed in the order they were added.
    pub fn build(self) -> Vec<u8> {
        let mut dir_entries = [DirEntry::default(); LUMP_COUNT];
        let mut body = vec![];

        for (kind, data) in self.lumps.iter() {
            dir_entries[kind.index()] = DirEntry {
                offset: (HEADER_LEN + body.len()) as i32,
                length: data.len() as i32,
            };
            body.extend_from_slice(data);
        }

        let header = Header {
            magic: *MAGIC_HEADER,
            version: 1,
            dir_entries,
        };

        let mut out = header.to_bytes();
        out.extend_from_slice(&body);
        out
    }
}

pub fn push_i32s(buf: &mut Vec<u8>, vals: &[i32]) {
    for v in vals {
        buf.extend_from_slice(&v.to_le_bytes());
    }
}

pub fn push_f32s(buf: &mut Vec<u8>, vals: &[f32]) {
    for v in vals {
        buf.extend_from_slice(&v.to_le_bytes());
    }
}

pub fn texture(name: &str, flags: i32, contents: i32) -> Vec<u8> {
    let mut out = vec![0u8; 64];
    out[..name.len()].copy_from_slice(name.as_bytes());
    push_i32s(&mut out, &[flags, contents]);
    out
}

pub fn plane(normal: [f32; 3], dist: f32) -> Vec<u8> {
    let mut out = vec![];
    push_f32s(&mut out, &normal);
    push_f32s(&mut out, &[dist]);
    out
}

pub fn vertex(position: [f32; 3], st: [f32; 2], normal: [f32; 3]) -> Vec<u8> {
    let mut out = vec![];
    push_f32s(&mut out, &position);
    push_f32s(&mut out, &st);
    push_f32s(&mut out, &[0.0; 8]);
    push_f32s(&mut out, &normal);
    out.extend_from_slice(&[255; 16]);
    out
}

pub fn mesh_verts(offsets: &[i32]) -> Vec<u8> {
    let mut out = vec![];
    push_i32s(&mut out, offsets);
    out
}

/// A face with no lightmap data.
pub fn face(
    shader: i32,
    surface_type: i32,
    vertices: (i32, i32),
    indices: (i32, i32),
    patch_size: (i32, i32),
) -> Vec<u8> {
    let mut out = vec![];
    push_i32s(
        &mut out,
        &[shader, -1, surface_type, vertices.0, vertices.1, indices.0, indices.1],
    );
    out.extend_from_slice(&[0; 8]);
    push_i32s(&mut out, &[-1; 12]);
    push_i32s(&mut out, &[0, 0]);
    push_f32s(&mut out, &[0.0; 12]);
    push_i32s(&mut out, &[patch_size.0, patch_size.1]);
    out
}

pub fn concat(records: &[Vec<u8>]) -> Vec<u8> {
    records.concat()
}
