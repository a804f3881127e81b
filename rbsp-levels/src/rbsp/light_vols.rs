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
use crate::types::{Result, Rgb};

/// One cell of the light grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightVol {
    pub ambient: Rgb,
    pub directional: Rgb,
    /// Direction to light, as (phi, theta)
    pub dir: [u8; 2],
}

impl Record for LightVol {
    const NAME: &'static str = "LightVol";
    const SIZE: usize = (3 * 2) + 2;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(LightVol {
            ambient: Rgb::from_bytes(reader.read_array()?),
            directional: Rgb::from_bytes(reader.read_array()?),
            dir: reader.read_array()?,
        })
    }
}
