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

mod helpers;

use std::fs;

use rbsp_levels::prelude::*;
use rbsp_levels::rbsp::{FaceType, LumpKind, Texture};
use rbsp_levels::{load, load_with_diagnostics, parse, Diagnostic, LoadError};

use helpers::*;

fn quad_file() -> Vec<u8> {
    BspBuilder::new()
        .lump(
            LumpKind::Entities,
            b"{\n\"classname\" \"worldspawn\"\n}\n\0".to_vec(),
        )
        .lump(
            LumpKind::Textures,
            concat(&[texture("textures/base/floor", 0, 1), texture("sky", 4, 0)]),
        )
        .lump(LumpKind::Planes, plane([0.0, 0.0, 1.0], 64.0))
        .lump(
            LumpKind::Vertexes,
            concat(&[
                vertex([0.0, 0.0, 0.0], [0.0, 0.0], [0.0, 0.0, 1.0]),
                vertex([64.0, 0.0, 0.0], [1.0, 0.0], [0.0, 0.0, 1.0]),
                vertex([64.0, 64.0, 0.0], [1.0, 1.0], [0.0, 0.0, 1.0]),
                vertex([0.0, 64.0, 0.0], [0.0, 1.0], [0.0, 0.0, 1.0]),
            ]),
        )
        .lump(LumpKind::MeshVerts, mesh_verts(&[0, 1, 2, 0, 2, 3]))
        .lump(LumpKind::Faces, face(0, 1, (0, 4), (0, 6), (0, 0)))
        .build()
}

#[test]
fn loads_every_lump() {
    let mut diags: Vec<Diagnostic> = vec![];
    let scene = parse(&quad_file(), &mut diags).unwrap();

    assert!(diags.is_empty(), "{:?}", diags);
    assert_eq!(scene.header.version, 1);

    let names: Vec<&str> = scene.textures().iter().map(|t: &Texture| t.name.as_str()).collect();
    assert_eq!(names, vec!["textures/base/floor", "sky"]);
    assert_eq!(scene.planes[0].dist, 64.0);
    assert_eq!(scene.vertices().len(), 4);
    assert_eq!(scene.mesh_verts().len(), 6);
    assert_eq!(scene.faces_len(), 1);
    assert_eq!(scene.faces()[0].face_type(), Some(FaceType::Polygon));
    assert!(scene.nodes.is_empty());
    assert!(scene.light_maps.is_empty());
    assert!(scene.vis_data.vecs.is_empty());

    let entities = scene.entities.parse().unwrap();
    assert_eq!(entities[0].class_name(), Some("worldspawn"));
}

#[test]
fn vertices_are_y_up() {
    let mut diags: Vec<Diagnostic> = vec![];
    let scene = parse(&quad_file(), &mut diags).unwrap();

    let v = scene.get_vertex(2).unwrap();
    assert_eq!(v.position.x, -64.0);
    assert_eq!(v.position.y, 0.0);
    assert_eq!(v.position.z, -64.0);
    assert_eq!(v.normal.y, 1.0);
}

#[test]
fn record_counts_match_lengths() {
    let data = quad_file();
    let mut diags: Vec<Diagnostic> = vec![];
    let scene = parse(&data, &mut diags).unwrap();

    let entry = |kind: LumpKind| scene.header.entry(kind).length as usize;
    assert_eq!(scene.textures.len() * 72, entry(LumpKind::Textures));
    assert_eq!(scene.vertices.len() * 80, entry(LumpKind::Vertexes));
    assert_eq!(scene.faces.len() * 148, entry(LumpKind::Faces));
    assert_eq!(scene.mesh_verts.len() * 4, entry(LumpKind::MeshVerts));
}

#[test]
fn bad_magic_is_invalid_format() {
    let mut data = quad_file();
    data[..4].copy_from_slice(b"IBSP");
    let mut diags: Vec<Diagnostic> = vec![];

    match parse(&data, &mut diags) {
        Err(LoadError::InvalidFormat { magic }) => assert_eq!(&magic, b"IBSP"),
        other => panic!("expected InvalidFormat, got {:?}", other.map(|_| ())),
    }
    assert!(diags.is_empty());
}

#[test]
fn length_mismatch_keeps_going() {
    let mut planes = concat(&[plane([1.0, 0.0, 0.0], 8.0), plane([0.0, 1.0, 0.0], 16.0)]);
    planes.extend_from_slice(&[0xAA; 5]);

    let data = BspBuilder::new()
        .lump(LumpKind::Planes, planes)
        .lump(LumpKind::MeshVerts, mesh_verts(&[3, 4, 5]))
        .build();
    let mut diags: Vec<Diagnostic> = vec![];

    let scene = parse(&data, &mut diags).unwrap();

    assert_eq!(scene.planes.len(), 2);
    assert_eq!(scene.planes[1].dist, 16.0);
    assert_eq!(scene.mesh_verts.len(), 3);
    assert_eq!(
        diags,
        vec![Diagnostic::LumpLengthMismatch {
            lump: LumpKind::Planes,
            length: 37,
            record_size: 16,
        }]
    );
}

#[test]
fn lump_past_end_of_file_is_truncated() {
    let mut data = BspBuilder::new()
        .lump(LumpKind::Vertexes, vertex([1.0, 2.0, 3.0], [0.0, 0.0], [0.0, 0.0, 1.0]))
        .build();
    data.truncate(data.len() - 10);
    let mut diags: Vec<Diagnostic> = vec![];

    match parse(&data, &mut diags) {
        Err(LoadError::TruncatedStream { lump, needed, .. }) => {
            assert_eq!(lump, "Vertexes");
            assert!(needed > 0);
        }
        other => panic!("expected TruncatedStream, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn header_only_is_empty_scene() {
    let data = BspBuilder::new().build();
    let mut diags: Vec<Diagnostic> = vec![];

    let scene = parse(&data, &mut diags).unwrap();

    assert!(scene.faces.is_empty());
    assert!(scene.entities.text.is_empty());
    assert!(diags.is_empty());
}

#[test]
fn load_from_disk() {
    let path = std::env::temp_dir().join(format!("rbsp-levels-load-{}.bsp", std::process::id()));
    fs::write(&path, quad_file()).unwrap();

    let scene = load(&path);
    let mut diags: Vec<Diagnostic> = vec![];
    let again = load_with_diagnostics(&path, &mut diags);
    fs::remove_file(&path).unwrap();

    assert_eq!(scene.unwrap().faces.len(), 1);
    assert_eq!(again.unwrap().textures.len(), 2);
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("rbsp-levels-does-not-exist.bsp");

    match load(&path) {
        Err(LoadError::FileNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {:?}", other.map(|_| ())),
    }
}
