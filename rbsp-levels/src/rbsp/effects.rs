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

use serde::{Deserialize, Serialize};

use crate::reader::{LumpReader, Record};
use crate::types::Result;

/// A volumetric effect, usually fog, bound to a brush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub name: String,
    pub brush: i32,
    pub unknown: i32,
}

impl Record for Effect {
    const NAME: &'static str = "Effect";
    const SIZE: usize = 64 + 4 + 4;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(Effect {
            name: reader.read_fixed_str(64)?,
            brush: reader.read_i32()?,
            unknown: reader.read_i32()?,
        })
    }
}
