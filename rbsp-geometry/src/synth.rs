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

//! Turning faces into meshes

use log::{debug, trace};
use na::{Vector2, Vector3};

use rbsp_levels::prelude::*;
use rbsp_levels::rbsp::{Face, FaceType, Vertex};
use rbsp_levels::Diagnostic;

use crate::bezier::{patch_indices, tessellate_grid};
use crate::config::SynthesisConfig;
use crate::error::{FaceError, SynthesisError};
use crate::materials::MaterialResolver;
use crate::mesh::{MeshKind, RenderableMesh};

/// Builds meshes from every face of a level.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    pub fn new(config: SynthesisConfig) -> Result<Synthesizer, SynthesisError> {
        config.validate()?;
        Ok(Synthesizer { config })
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Build meshes for every face, in face order.
    ///
    /// Faces that can't be built are skipped and reported to `sink`; they
    /// never stop the rest. Materials are resolved once per built face.
    pub fn synthesize<S, R>(
        &self,
        scene: &S,
        resolver: &mut R,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<RenderableMesh<R::Handle>>
    where
        S: GeometrySource + ?Sized,
        R: MaterialResolver,
    {
        let mut meshes = Vec::new();

        for (idx, face) in scene.faces().iter().enumerate() {
            let built = match face.face_type() {
                Some(FaceType::Polygon) => self.polygon(scene, idx, face, MeshKind::Polygon),
                Some(FaceType::Mesh) => self.polygon(scene, idx, face, MeshKind::Mesh),
                Some(FaceType::Patch) => self.patches(scene, idx, face),
                Some(FaceType::Billboard) | None => {
                    sink.report(Diagnostic::UnsupportedFaceType {
                        face: idx,
                        surface_type: face.surface_type,
                    });
                    continue;
                }
            };

            let built = match built {
                Ok(built) => built,
                Err(e) => {
                    sink.report(Diagnostic::MalformedFace {
                        face: idx,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let materials = match scene.texture_for_shader(face.shader_num) {
                Some(texture) => resolver.resolve(&texture.name),
                None => {
                    sink.report(Diagnostic::MissingTexture {
                        face: idx,
                        shader: face.shader_num,
                    });
                    Vec::new()
                }
            };

            trace!(
                "[face {}] {} meshes, {} materials",
                idx,
                built.len(),
                materials.len()
            );

            for mut mesh in built {
                mesh.materials = materials.clone();
                meshes.push(mesh);
            }
        }

        debug!(
            "Built {} meshes from {} faces",
            meshes.len(),
            scene.faces_len()
        );

        meshes
    }

    /// The face's own vertices, checked against the scene.
    fn face_vertices<'s, S>(&self, scene: &'s S, face: &Face) -> Result<&'s [Vertex], FaceError>
    where
        S: GeometrySource + ?Sized,
    {
        face.vertices_range()
            .and_then(|range| scene.vertex_range(range))
            .ok_or(FaceError::VertexRange {
                first: face.first_vertex,
                count: face.num_vertices,
                available: scene.vertices().len(),
            })
    }

    fn polygon<S, H>(
        &self,
        scene: &S,
        idx: usize,
        face: &Face,
        kind: MeshKind,
    ) -> Result<Vec<RenderableMesh<H>>, FaceError>
    where
        S: GeometrySource + ?Sized,
    {
        let vertices = self.face_vertices(scene, face)?;
        let mesh_verts = face
            .indices_range()
            .and_then(|range| scene.mesh_verts().get(range))
            .ok_or(FaceError::IndexRange {
                first: face.first_index,
                count: face.num_indices,
                available: scene.mesh_verts().len(),
            })?;

        if mesh_verts.len() % 3 != 0 {
            return Err(FaceError::PartialTriangle {
                count: mesh_verts.len(),
            });
        }

        // Offsets are already relative to the face's first vertex
        let indices = mesh_verts
            .iter()
            .map(|mv| match mv.offset {
                o if o >= 0 && (o as usize) < vertices.len() => Ok(o as u32),
                o => Err(FaceError::IndexOutOfRange {
                    index: o,
                    vertices: vertices.len(),
                }),
            })
            .collect::<Result<Vec<u32>, FaceError>>()?;

        let positions = vertices
            .iter()
            .map(|v| v.scaled_position(&self.config.scale))
            .collect();
        let uvs = vertices.iter().map(Vertex::mesh_uv).collect();

        Ok(vec![RenderableMesh::new(
            format!("face {}", idx),
            kind,
            idx,
            positions,
            uvs,
            indices,
        )])
    }

    fn patches<S, H>(
        &self,
        scene: &S,
        idx: usize,
        face: &Face,
    ) -> Result<Vec<RenderableMesh<H>>, FaceError>
    where
        S: GeometrySource + ?Sized,
    {
        let (width, height) = (face.patch_width, face.patch_height);
        if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
            return Err(FaceError::PatchSize { width, height });
        }

        let vertices = self.face_vertices(scene, face)?;
        if (width as usize) * (height as usize) > vertices.len() {
            return Err(FaceError::PatchVertices {
                width,
                height,
                vertices: vertices.len(),
            });
        }

        let level = self.config.tessellation_level;
        let width = width as usize;
        let columns = (width - 1) / 2;

        let mut meshes = Vec::with_capacity(face.patch_count());
        for patch in 0..face.patch_count() {
            let patch_x = (patch % columns) * 2;
            let patch_y = (patch / columns) * 2;

            let mut positions = [Vector3::zeros(); 9];
            let mut uvs = [Vector2::zeros(); 9];
            for y in 0..3 {
                for x in 0..3 {
                    let control = &vertices[(patch_y + y) * width + patch_x + x];
                    positions[y * 3 + x] = control.scaled_position(&self.config.scale);
                    uvs[y * 3 + x] = control.mesh_uv();
                }
            }

            let mut mesh = RenderableMesh::new(
                format!("face {} patch {}", idx, patch),
                MeshKind::Patch,
                idx,
                tessellate_grid(level, &positions),
                tessellate_grid(level, &uvs),
                patch_indices(level),
            );
            mesh.patch = Some(patch);

            meshes.push(mesh);
        }

        Ok(meshes)
    }
}

/// Build meshes for every face of `scene` with the given options.
pub fn synthesize<S, R>(
    scene: &S,
    resolver: &mut R,
    config: SynthesisConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<RenderableMesh<R::Handle>>, SynthesisError>
where
    S: GeometrySource + ?Sized,
    R: MaterialResolver,
{
    Ok(Synthesizer::new(config)?.synthesize(scene, resolver, sink))
}
