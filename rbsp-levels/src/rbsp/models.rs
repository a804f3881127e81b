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

use na::Vector3;
use serde::{Deserialize, Serialize};

use crate::reader::{LumpReader, Record};
use crate::types::Result;

/// A brush model: the world itself is model 0, doors/lifts/etc follow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub mins: Vector3<f32>,
    pub maxs: Vector3<f32>,
    pub face: i32,
    pub n_faces: i32,
    pub brush: i32,
    pub n_brushes: i32,
}

impl Record for Model {
    const NAME: &'static str = "Model";
    const SIZE: usize = (4 * 3 * 2) + (4 * 4);

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(Model {
            mins: reader.read_vec3()?,
            maxs: reader.read_vec3()?,
            face: reader.read_i32()?,
            n_faces: reader.read_i32()?,
            brush: reader.read_i32()?,
            n_brushes: reader.read_i32()?,
        })
    }
}
