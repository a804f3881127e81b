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

use std::convert::TryFrom;
use std::ops::Range;

use na::Vector3;
use serde::{Deserialize, Serialize};

use super::vertices::MAX_LIGHTMAPS;
use crate::reader::{LumpReader, Record};
use crate::types::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum FaceType {
    Polygon = 1,
    Patch = 2,
    Mesh = 3,
    Billboard = 4,
}

impl TryFrom<i32> for FaceType {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, i32> {
        match value {
            1 => Ok(FaceType::Polygon),
            2 => Ok(FaceType::Patch),
            3 => Ok(FaceType::Mesh),
            4 => Ok(FaceType::Billboard),
            other => Err(other),
        }
    }
}

/// A drawable surface.
///
/// Lightmap fields are per layer. The lightmap origin & basis vectors are
/// left in map axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub shader_num: i32,
    pub fog_num: i32,
    pub surface_type: i32,
    pub first_vertex: i32,
    pub num_vertices: i32,
    pub first_index: i32,
    pub num_indices: i32,

    pub lightmap_styles: [u8; MAX_LIGHTMAPS],
    pub vertex_styles: [u8; MAX_LIGHTMAPS],
    pub lightmap_num: [i32; MAX_LIGHTMAPS],
    pub lightmap_x: [i32; MAX_LIGHTMAPS],
    pub lightmap_y: [i32; MAX_LIGHTMAPS],
    pub lightmap_width: i32,
    pub lightmap_height: i32,
    pub lightmap_origin: Vector3<f32>,
    pub lightmap_vecs: [Vector3<f32>; 3],

    /// Control point grid size, only meaningful for patches.
    pub patch_width: i32,
    pub patch_height: i32,
}

impl Face {
    /// `None` for unrecognised surface types.
    pub fn face_type(&self) -> Option<FaceType> {
        FaceType::try_from(self.surface_type).ok()
    }

    /// Range into the vertices lump, or `None` if it's negative.
    pub fn vertices_range(&self) -> Option<Range<usize>> {
        to_range(self.first_vertex, self.num_vertices)
    }

    /// Range into the meshverts lump, or `None` if it's negative.
    pub fn indices_range(&self) -> Option<Range<usize>> {
        to_range(self.first_index, self.num_indices)
    }

    /// Number of 3x3 sub-patches a patch face is split into.
    pub fn patch_count(&self) -> usize {
        let columns = ((self.patch_width - 1) / 2).max(0) as usize;
        let rows = ((self.patch_height - 1) / 2).max(0) as usize;

        columns * rows
    }
}

fn to_range(first: i32, count: i32) -> Option<Range<usize>> {
    if first < 0 || count < 0 {
        return None;
    }

    let first = first as usize;
    Some(first..first + count as usize)
}

impl Record for Face {
    const NAME: &'static str = "Face";
    const SIZE: usize = (4 * 7)
        + (MAX_LIGHTMAPS * 2)
        + (4 * MAX_LIGHTMAPS * 3)
        + (4 * 2)
        + (4 * 3)
        + (4 * 3 * 3)
        + (4 * 2);

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(Face {
            shader_num: reader.read_i32()?,
            fog_num: reader.read_i32()?,
            surface_type: reader.read_i32()?,
            first_vertex: reader.read_i32()?,
            num_vertices: reader.read_i32()?,
            first_index: reader.read_i32()?,
            num_indices: reader.read_i32()?,
            lightmap_styles: reader.read_array()?,
            vertex_styles: reader.read_array()?,
            lightmap_num: reader.read_i32s()?,
            lightmap_x: reader.read_i32s()?,
            lightmap_y: reader.read_i32s()?,
            lightmap_width: reader.read_i32()?,
            lightmap_height: reader.read_i32()?,
            lightmap_origin: reader.read_vec3()?,
            lightmap_vecs: [reader.read_vec3()?, reader.read_vec3()?, reader.read_vec3()?],
            patch_width: reader.read_i32()?,
            patch_height: reader.read_i32()?,
        })
    }
}
