//! Brushes & brush sides

use serde::{Deserialize, Serialize};

use crate::reader::{LumpReader, Record};
use crate::types::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    pub brush_side: i32,
    pub n_brush_sides: i32,
    pub texture: i32,
}

impl Record for Brush {
    const NAME: &'static str = "Brush";
    const SIZE: usize = 4 * 3;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(Brush {
            brush_side: reader.read_i32()?,
            n_brush_sides: reader.read_i32()?,
            texture: reader.read_i32()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushSide {
    pub plane_num: i32,
    pub shader_num: i32,
    pub draw_surf_num: i32,
}

impl BrushSide {
    /// Planes come in pairs, odd ones face the other way.
    pub fn is_opposing(&self) -> bool {
        self.plane_num % 2 != 0
    }
}

impl Record for BrushSide {
    const NAME: &'static str = "BrushSide";
    const SIZE: usize = 4 * 3;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(BrushSide {
            plane_num: reader.read_i32()?,
            shader_num: reader.read_i32()?,
            draw_surf_num: reader.read_i32()?,
        })
    }
}
