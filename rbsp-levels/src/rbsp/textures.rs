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

use serde::{Deserialize, Serialize};

use crate::reader::{LumpReader, Record};
use crate::types::Result;

/// A texture (or shader) reference from a BSP File.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    pub name: String,
    pub flags: i32,
    pub contents: i32,
}

/// # Format
/// string[64] name     Texture name.
/// int flags           Surface flags.
/// int contents        Content flags.
impl Record for Texture {
    const NAME: &'static str = "Texture";
    const SIZE: usize = 64 + 4 + 4;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(Texture {
            name: reader.read_fixed_str(64)?,
            flags: reader.read_i32()?,
            contents: reader.read_i32()?,
        })
    }
}
