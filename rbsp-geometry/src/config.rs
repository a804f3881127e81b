use na::Vector3;
use serde::{Deserialize, Serialize};

use rbsp_levels::coords::VERTEX_SCALE;

use crate::error::SynthesisError;

/// Default number of segments each patch curve is split into.
pub const DEFAULT_TESSELLATION_LEVEL: u32 = 5;

/// Highest accepted level. Index buffers are `u32`, and `6 * level^2` indices
/// must stay well inside that.
pub const MAX_TESSELLATION_LEVEL: u32 = 4096;

/// Options for building meshes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Segments per bezier curve. Between 1 and [`MAX_TESSELLATION_LEVEL`].
    pub tessellation_level: u32,

    /// Applied per axis to every vertex position, after axis conversion.
    pub scale: Vector3<f32>,
}

impl SynthesisConfig {
    pub fn with_tessellation_level(mut self, level: u32) -> SynthesisConfig {
        self.tessellation_level = level;
        self
    }

    pub fn validate(&self) -> Result<(), SynthesisError> {
        if self.tessellation_level < 1 || self.tessellation_level > MAX_TESSELLATION_LEVEL {
            return Err(SynthesisError::InvalidTessellationLevel(
                self.tessellation_level,
            ));
        }

        Ok(())
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig {
            tessellation_level: DEFAULT_TESSELLATION_LEVEL,
            scale: Vector3::repeat(VERTEX_SCALE),
        }
    }
}
