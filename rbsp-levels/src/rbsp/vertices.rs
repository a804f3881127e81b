// Copyright (C) 2019 Oscar Shrimpton
//
// This file is part of rbsp-levels.
//
// rbsp-levels is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// rbsp-levels is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with rbsp-levels.  If not, see <http://www.gnu.org/licenses/>.

use na::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::coords::{flip_uv, radiant_to_y_up, scale_position};
use crate::reader::{LumpReader, Record};
use crate::types::{Result, Rgba};

/// Lightmap layers per vertex/face.
pub const MAX_LIGHTMAPS: usize = 4;

/// A vertex, used to describe a face.
///
/// `position` and `normal` are already in [`crate::coords::YUpSystem`] axes,
/// but still in map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vector3<f32>,
    pub st: Vector2<f32>,
    pub lightmap: [Vector2<f32>; MAX_LIGHTMAPS],
    pub normal: Vector3<f32>,
    pub color: [Rgba; MAX_LIGHTMAPS],
}

impl Vertex {
    /// Position in mesh units.
    pub fn scaled_position(&self, scale: &Vector3<f32>) -> Vector3<f32> {
        scale_position(self.position, scale)
    }

    /// Surface texture coordinate with v flipped for the mesh.
    pub fn mesh_uv(&self) -> Vector2<f32> {
        flip_uv(self.st)
    }
}

/// # Format
/// vec3 position
/// vec2 st                 Surface texture coords
/// vec2[4] lightmap        Lightmap texture coords, one per layer
/// vec3 normal
/// ubyte[4][4] color       RGBA, one per layer
impl Record for Vertex {
    const NAME: &'static str = "Vertex";
    const SIZE: usize =
        (4 * 3) + (4 * 2) + (4 * 2 * MAX_LIGHTMAPS) + (4 * 3) + (4 * MAX_LIGHTMAPS);

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        let position = reader.read_vec3()?;
        let st = reader.read_vec2()?;

        let mut lightmap = [Vector2::zeros(); MAX_LIGHTMAPS];
        for uv in lightmap.iter_mut() {
            *uv = reader.read_vec2()?;
        }

        let normal = reader.read_vec3()?;

        let mut color = [Rgba::default(); MAX_LIGHTMAPS];
        for c in color.iter_mut() {
            *c = Rgba::from_bytes(reader.read_array()?);
        }

        Ok(Vertex {
            position: radiant_to_y_up(position),
            st,
            lightmap,
            normal: radiant_to_y_up(normal),
            color,
        })
    }
}

/// A vertex offset, relative to a face's first vertex. Used to describe triangle meshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshVert {
    pub offset: i32,
}

impl Record for MeshVert {
    const NAME: &'static str = "MeshVert";
    const SIZE: usize = 4;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(MeshVert {
            offset: reader.read_i32()?,
        })
    }
}
