// Copyright (C) 2019 Oscar Shrimpton
//
// This file is part of rbsp-levels.
//
// rbsp-levels is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// rbsp-levels is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with rbsp-levels.  If not, see <http://www.gnu.org/licenses/>.

//! Various types used in parsed BSP files.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rbsp::LumpKind;

/// RGBA Colour (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Interpret the given bytes as an RGBA colour.
    pub fn from_bytes(bytes: [u8; 4]) -> Rgba {
        Rgba {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        }
    }
}

/// RGB Colour (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Interpret the given bytes as an RGB colour.
    pub fn from_bytes(bytes: [u8; 3]) -> Rgb {
        Rgb {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        }
    }
}

/// A fatal error encountered while loading a map. Anything recoverable is
/// reported as a [`crate::Diagnostic`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Map file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Error reading map file")]
    Io(#[from] io::Error),

    #[error("Not an RBSP file (magic was {magic:?})")]
    InvalidFormat { magic: [u8; 4] },

    #[error("Unexpected end of data in {lump} lump at byte {offset} (needed {needed} more, {available} left)")]
    TruncatedStream {
        lump: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Directory entry for {lump:?} is invalid (offset {offset}, length {length})")]
    BadDirectoryEntry {
        lump: LumpKind,
        offset: i32,
        length: i32,
    },
}

/// Standard result type.
pub type Result<T> = std::result::Result<T, LoadError>;

/// The entity lump's text isn't well formed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityParseError {
    #[error("Unexpected '{found}' at byte {at}")]
    Unexpected { found: char, at: usize },

    #[error("Entity text ends inside an entity")]
    Unterminated,
}
