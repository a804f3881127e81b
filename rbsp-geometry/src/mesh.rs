// Copyright (C) 2019 Oscar Shrimpton
//
// This file is part of rbsp-geometry.
//
// rbsp-geometry is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// rbsp-geometry is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with rbsp-geometry.  If not, see <http://www.gnu.org/licenses/>.

//! Meshes produced from faces.

use na::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Which kind of face a mesh came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshKind {
    Polygon,
    Mesh,
    Patch,
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            min: Vector3::zeros(),
            max: Vector3::zeros(),
        }
    }
}

impl Bounds {
    /// The smallest box holding every point. All zeros if there are none.
    pub fn from_points(points: &[Vector3<f32>]) -> Bounds {
        let first = match points.first() {
            Some(p) => *p,
            None => return Bounds::default(),
        };

        points.iter().fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, p| Bounds {
                min: b.min.inf(p),
                max: b.max.sup(p),
            },
        )
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }
}

/// A triangle mesh ready to be handed to a renderer.
///
/// `positions`, `normals` and `uvs` are parallel. `indices` are triangles,
/// three per triangle, into those arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableMesh<H> {
    pub name: String,
    pub kind: MeshKind,

    /// Index of the face this was built from
    pub face: usize,

    /// Which sub-patch, for patch faces.
    pub patch: Option<usize>,

    pub positions: Vec<Vector3<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub uvs: Vec<Vector2<f32>>,
    pub indices: Vec<u32>,
    pub bounds: Bounds,
    pub materials: Vec<H>,
}

impl<H> RenderableMesh<H> {
    /// Create a mesh with normals and bounds worked out from the geometry, and no materials.
    pub fn new(
        name: String,
        kind: MeshKind,
        face: usize,
        positions: Vec<Vector3<f32>>,
        uvs: Vec<Vector2<f32>>,
        indices: Vec<u32>,
    ) -> RenderableMesh<H> {
        let mut mesh = RenderableMesh {
            name,
            kind,
            face,
            patch: None,
            normals: Vec::new(),
            bounds: Bounds::default(),
            positions,
            uvs,
            indices,
            materials: Vec::new(),
        };

        mesh.recalculate_normals();
        mesh.recalculate_bounds();

        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Smooth normals from the triangles, weighted by area.
    ///
    /// Vertices no triangle uses get a zero normal. Triangles with an index
    /// out of range are ignored.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.positions.len()];

        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let (pa, pb, pc) = match (
                self.positions.get(a),
                self.positions.get(b),
                self.positions.get(c),
            ) {
                (Some(pa), Some(pb), Some(pc)) => (pa, pb, pc),
                _ => continue,
            };

            // Length is twice the triangle's area
            let n = (pb - pa).cross(&(pc - pa));
            normals[a] += n;
            normals[b] += n;
            normals[c] += n;
        }

        self.normals = normals
            .into_iter()
            .map(|n| n.try_normalize(0.0).unwrap_or_else(Vector3::zeros))
            .collect();
    }

    pub fn recalculate_bounds(&mut self) {
        self.bounds = Bounds::from_points(&self.positions);
    }
}
