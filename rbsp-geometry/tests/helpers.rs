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

use nalgebra::{Vector2, Vector3};

use rbsp_levels::rbsp::{Face, MeshVert, Texture, Vertex, MAX_LIGHTMAPS};
use rbsp_levels::types::Rgba;
use rbsp_geometry::MaterialResolver;

/// A vertex already in Y-up axes.
pub fn vertex(position: [f32; 3], st: [f32; 2]) -> Vertex {
    Vertex {
        position: Vector3::from(position),
        st: Vector2::from(st),
        lightmap: [Vector2::zeros(); MAX_LIGHTMAPS],
        normal: Vector3::new(0.0, 1.0, 0.0),
        color: [Rgba::from_bytes([255; 4]); MAX_LIGHTMAPS],
    }
}

pub fn texture(name: &str) -> Texture {
    Texture {
        name: name.to_owned(),
        flags: 0,
        contents: 1,
    }
}

pub fn mesh_verts(offsets: &[i32]) -> Vec<MeshVert> {
    offsets.iter().map(|&offset| MeshVert { offset }).collect()
}

pub fn face(shader: i32, surface_type: i32, vertices: (i32, i32), indices: (i32, i32)) -> Face {
    Face {
        shader_num: shader,
        fog_num: -1,
        surface_type,
        first_vertex: vertices.0,
        num_vertices: vertices.1,
        first_index: indices.0,
        num_indices: indices.1,
        lightmap_styles: [0; MAX_LIGHTMAPS],
        vertex_styles: [0; MAX_LIGHTMAPS],
        lightmap_num: [-1; MAX_LIGHTMAPS],
        lightmap_x: [0; MAX_LIGHTMAPS],
        lightmap_y: [0; MAX_LIGHTMAPS],
        lightmap_width: 0,
        lightmap_height: 0,
        lightmap_origin: Vector3::zeros(),
        lightmap_vecs: [Vector3::zeros(); 3],
        patch_width: 0,
        patch_height: 0,
    }
}

pub fn patch_face(shader: i32, first_vertex: i32, width: i32, height: i32) -> Face {
    Face {
        patch_width: width,
        patch_height: height,
        ..face(shader, 2, (first_vertex, width * height), (0, 0))
    }
}

/// A `width x height` control grid on the XZ plane, with some height variation.
pub fn control_grid(width: usize, height: usize) -> Vec<Vertex> {
    let mut out = vec![];
    for y in 0..height {
        for x in 0..width {
            let h = ((x * 3 + y * 5) % 4) as f32 * 8.0;
            out.push(vertex(
                [x as f32 * 32.0, h, y as f32 * 32.0],
                [x as f32 / (width - 1) as f32, y as f32 / (height - 1) as f32],
            ));
        }
    }
    out
}

/// Answers with the name it was given, and remembers every call.
#[derive(Default)]
pub struct Recording {
    pub calls: Vec<String>,
}

impl MaterialResolver for Recording {
    type Handle = String;

    fn resolve(&mut self, name: &str) -> Vec<String> {
        self.calls.push(name.to_owned());
        vec![name.to_owned()]
    }
}
