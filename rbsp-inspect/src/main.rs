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

//! Loads an RBSP map, builds its geometry and prints a summary.
//!
//! Usage: `rbsp-inspect <map.bsp> [asset root] [tessellation level]`

extern crate log;
extern crate simple_logger;

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::{info, warn};

use rbsp_geometry::materials::FsTextureResolver;
use rbsp_geometry::{MaterialResolver, MeshKind, NullResolver, SynthesisConfig, Synthesizer};
use rbsp_levels::{load_with_diagnostics, Diagnostic, DiagnosticSink, LogSink, Scene};

struct Args {
    map: PathBuf,
    assets: Option<PathBuf>,
    level: Option<u32>,
}

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);

    let map = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("usage: rbsp-inspect <map.bsp> [asset root] [tessellation level]"))?;
    let assets = args.next().map(PathBuf::from);
    let level = args
        .next()
        .map(|l| l.parse::<u32>())
        .transpose()
        .context("Tessellation level must be a whole number")?;

    Ok(Args { map, assets, level })
}

fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    let args = parse_args()?;

    let mut diagnostics: Vec<Diagnostic> = vec![];
    let scene = load_with_diagnostics(&args.map, &mut diagnostics)
        .with_context(|| format!("Couldn't load {}", args.map.display()))?;

    print_scene(&scene);

    let mut config = SynthesisConfig::default();
    if let Some(level) = args.level {
        config = config.with_tessellation_level(level);
    }
    let synth = Synthesizer::new(config).context("Invalid synthesis options")?;

    match args.assets {
        Some(root) => build(&synth, &scene, FsTextureResolver::new(root), &mut diagnostics),
        None => build(&synth, &scene, NullResolver, &mut diagnostics),
    }

    for diag in diagnostics.iter() {
        LogSink.report(diag.clone());
    }
    info!("{} diagnostics", diagnostics.len());

    Ok(())
}

fn print_scene(scene: &Scene) {
    info!("Header version {}", scene.header.version);
    info!(
        "{} textures, {} planes, {} nodes, {} leafs, {} models, {} brushes, {} brush sides",
        scene.textures.len(),
        scene.planes.len(),
        scene.nodes.len(),
        scene.leafs.len(),
        scene.models.len(),
        scene.brushes.len(),
        scene.brush_sides.len()
    );
    info!(
        "{} vertices, {} meshverts, {} faces, {} effects",
        scene.vertices.len(),
        scene.mesh_verts.len(),
        scene.faces.len(),
        scene.effects.len()
    );
    info!(
        "{} lightmaps, {} lightvols, {} vis clusters",
        scene.light_maps.len(),
        scene.light_vols.len(),
        scene.vis_data.n_vecs
    );

    match scene.entities.parse() {
        Ok(entities) => info!("{} entities", entities.len()),
        Err(e) => warn!("Couldn't parse entities: {}", e),
    }
}

fn build<R: MaterialResolver>(
    synth: &Synthesizer,
    scene: &Scene,
    mut resolver: R,
    diagnostics: &mut dyn DiagnosticSink,
) {
    let meshes = synth.synthesize(scene, &mut resolver, diagnostics);

    let count = |kind: MeshKind| meshes.iter().filter(|m| m.kind == kind).count();
    let vertices: usize = meshes.iter().map(|m| m.vertex_count()).sum();
    let triangles: usize = meshes.iter().map(|m| m.triangle_count()).sum();
    let untextured = meshes.iter().filter(|m| m.materials.is_empty()).count();

    info!(
        "{} meshes ({} polygon, {} mesh, {} patch)",
        meshes.len(),
        count(MeshKind::Polygon),
        count(MeshKind::Mesh),
        count(MeshKind::Patch)
    );
    info!(
        "{} vertices, {} triangles, {} meshes without materials",
        vertices, triangles, untextured
    );
}
