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

//! Parsing data from Raven BSPs

mod brushes;
mod effects;
mod entities;
mod faces;
pub mod file;
mod header;
mod light_maps;
mod light_vols;
mod lump;
mod models;
mod planes;
mod textures;
mod tree;
mod vertices;
mod visdata;

pub use self::brushes::{Brush, BrushSide};
pub use self::effects::Effect;
pub use self::entities::{Entity, EntityLump};
pub use self::faces::{Face, FaceType};
pub use self::file::{load, load_with_diagnostics, parse, Scene};
pub use self::header::{DirEntry, Header, HEADER_LEN, MAGIC_HEADER};
pub use self::light_maps::{LightMap, LIGHTMAP_DIM};
pub use self::light_vols::LightVol;
pub use self::lump::{LumpKind, LUMP_COUNT};
pub use self::models::Model;
pub use self::planes::Plane;
pub use self::textures::Texture;
pub use self::tree::{Leaf, LeafBrush, LeafFace, Node, NodeChild};
pub use self::vertices::{MeshVert, Vertex, MAX_LIGHTMAPS};
pub use self::visdata::VisData;

pub(crate) use self::lump::read_records;
