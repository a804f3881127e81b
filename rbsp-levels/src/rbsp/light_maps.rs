use std::fmt;

use crate::reader::{LumpReader, Record};
use crate::types::{Result, Rgb};

/// Width & height of every lightmap.
pub const LIGHTMAP_DIM: usize = 128;

/// A baked lighting texture
#[derive(Clone, PartialEq)]
pub struct LightMap {
    /// Stored x-major, as in the file.
    pub texels: Box<[Rgb]>,
}

impl LightMap {
    /// # Panics
    /// If x or y are out of range
    pub fn texel(&self, x: usize, y: usize) -> Rgb {
        self.texels[x * LIGHTMAP_DIM + y]
    }
}

impl fmt::Debug for LightMap {
    // 16k texels is not useful output
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LightMap {{ {}x{} }}", LIGHTMAP_DIM, LIGHTMAP_DIM)
    }
}

impl Record for LightMap {
    const NAME: &'static str = "LightMap";
    const SIZE: usize = LIGHTMAP_DIM * LIGHTMAP_DIM * 3;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        let raw = reader.read_bytes(Self::SIZE)?;
        let texels = raw
            .chunks_exact(3)
            .map(|c| Rgb::from_bytes([c[0], c[1], c[2]]))
            .collect();

        Ok(LightMap { texels })
    }
}
