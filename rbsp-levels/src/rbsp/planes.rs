use na::Vector3;
use serde::{Deserialize, Serialize};

use crate::reader::{LumpReader, Record};
use crate::types::Result;

/// A plane, referenced by nodes and brush sides. Kept in map axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub dist: f32,
}

impl Record for Plane {
    const NAME: &'static str = "Plane";
    const SIZE: usize = (4 * 3) + 4;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(Plane {
            normal: reader.read_vec3()?,
            dist: reader.read_f32()?,
        })
    }
}
