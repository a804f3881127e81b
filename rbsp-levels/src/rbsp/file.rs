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

//! A complete RBSP file

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, trace};

use super::*;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::traits::{HasFaces, HasMeshVerts, HasTextures, HasVertices};
use crate::types::{LoadError, Result};

/// Every lump of a parsed RBSP file.
///
/// Nothing is changed after loading, except that vertex positions and normals
/// were converted to Y-up axes as they were read.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub header: Header,
    pub entities: EntityLump,
    pub textures: Box<[Texture]>,
    pub planes: Box<[Plane]>,
    pub nodes: Box<[Node]>,
    pub leafs: Box<[Leaf]>,
    pub leaf_faces: Box<[LeafFace]>,
    pub leaf_brushes: Box<[LeafBrush]>,
    pub models: Box<[Model]>,
    pub brushes: Box<[Brush]>,
    pub brush_sides: Box<[BrushSide]>,
    pub vertices: Box<[Vertex]>,
    pub mesh_verts: Box<[MeshVert]>,
    pub effects: Box<[Effect]>,
    pub faces: Box<[Face]>,
    pub light_maps: Box<[LightMap]>,
    pub light_vols: Box<[LightVol]>,
    pub vis_data: VisData,
}

/// Parse `data` as an RBSP file.
///
/// Lumps are read in directory order. The first fatal error stops the load;
/// anything recoverable goes to `sink`.
pub fn parse(data: &[u8], sink: &mut dyn DiagnosticSink) -> Result<Scene> {
    let header = Header::from(data)?;
    debug!("[Header] version={}", header.version);

    let entities = EntityLump::from_data(data, &header)?;

    let textures = read_records::<Texture>(data, &header, LumpKind::Textures, sink)?;
    for (i, texture) in textures.iter().enumerate() {
        trace!("[Textures] {}: {}", i, texture.name);
    }

    let planes = read_records(data, &header, LumpKind::Planes, sink)?;
    let nodes = read_records(data, &header, LumpKind::Nodes, sink)?;
    let leafs = read_records(data, &header, LumpKind::Leafs, sink)?;
    let leaf_faces = read_records(data, &header, LumpKind::LeafFaces, sink)?;
    let leaf_brushes = read_records(data, &header, LumpKind::LeafBrushes, sink)?;
    let models = read_records(data, &header, LumpKind::Models, sink)?;
    let brushes = read_records(data, &header, LumpKind::Brushes, sink)?;
    let brush_sides = read_records(data, &header, LumpKind::BrushSides, sink)?;
    let vertices = read_records(data, &header, LumpKind::Vertexes, sink)?;
    let mesh_verts = read_records(data, &header, LumpKind::MeshVerts, sink)?;
    let effects = read_records(data, &header, LumpKind::Effects, sink)?;
    let faces = read_records(data, &header, LumpKind::Faces, sink)?;
    let light_maps = read_records(data, &header, LumpKind::Lightmaps, sink)?;
    let light_vols = read_records(data, &header, LumpKind::LightVols, sink)?;
    let vis_data = VisData::from_data(data, &header, sink)?;

    Ok(Scene {
        header,
        entities,
        textures,
        planes,
        nodes,
        leafs,
        leaf_faces,
        leaf_brushes,
        models,
        brushes,
        brush_sides,
        vertices,
        mesh_verts,
        effects,
        faces,
        light_maps,
        light_vols,
        vis_data,
    })
}

/// Load the file at `path`, logging anything recoverable as a warning.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Scene> {
    load_with_diagnostics(path, &mut LogSink)
}

/// Load the file at `path`, handing anything recoverable to `sink`.
pub fn load_with_diagnostics<P: AsRef<Path>>(
    path: P,
    sink: &mut dyn DiagnosticSink,
) -> Result<Scene> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    debug!("Loading {} ({} bytes)", path.display(), data.len());

    parse(&data, sink)
}

impl HasTextures for Scene {
    fn textures(&self) -> &[Texture] {
        &self.textures
    }
}

impl HasVertices for Scene {
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl HasMeshVerts for Scene {
    fn mesh_verts(&self) -> &[MeshVert] {
        &self.mesh_verts
    }
}

impl HasFaces for Scene {
    fn faces(&self) -> &[Face] {
        &self.faces
    }
}
