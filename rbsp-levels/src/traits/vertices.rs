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


use std::ops::Range;

use crate::rbsp::{MeshVert, Vertex};

pub trait HasVertices {
    fn vertices(&self) -> &[Vertex];

    fn get_vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices().get(index)
    }

    /// `None` unless the whole range exists.
    fn vertex_range(&self, range: Range<usize>) -> Option<&[Vertex]> {
        self.vertices().get(range)
    }
}

pub trait HasMeshVerts: HasVertices {
    fn mesh_verts(&self) -> &[MeshVert];

    fn get_mesh_vert(&self, index: usize) -> Option<MeshVert> {
        self.mesh_verts().get(index).copied()
    }

    /// The vertex a meshvert points to, relative to `base`.
    fn resolve_mesh_vert(&self, index: usize, base: usize) -> Option<&Vertex> {
        let offset = self.get_mesh_vert(index)?.offset;
        if offset < 0 {
            return None;
        }

        self.get_vertex(base + offset as usize)
    }
}
