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

//! Builds triangle meshes from a loaded level.
//!
//! Polygon and mesh faces become one mesh each. Patch faces are split into
//! 3x3 sub-patches, each tessellated into its own mesh. Materials come from a
//! [`MaterialResolver`] supplied by the caller.

extern crate nalgebra as na;

pub mod bezier;
pub mod config;
pub mod error;
pub mod materials;
pub mod mesh;
pub mod synth;

pub use self::config::{SynthesisConfig, MAX_TESSELLATION_LEVEL};
pub use self::error::SynthesisError;
pub use self::materials::{CachedResolver, MaterialCache, MaterialResolver, NullResolver};
pub use self::mesh::{Bounds, MeshKind, RenderableMesh};
pub use self::synth::{synthesize, Synthesizer};
