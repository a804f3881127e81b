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

//! Parses Raven BSP (RBSP) level files into a typed, read-only scene.
//!
//! Loading is eager: every one of the 17 lumps is decoded, whether or not
//! anything downstream consumes it. Vertex positions and normals are moved
//! into the Y-up target axes as they are decoded, see [`coords`].

extern crate nalgebra as na;

pub mod coords;
pub mod diagnostics;
pub mod features;
mod helpers;
pub mod prelude;
pub mod rbsp;
pub mod reader;
pub mod traits;
pub mod types;

pub use self::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use self::rbsp::{load, load_with_diagnostics, parse, Scene};
pub use self::types::{LoadError, Result};
