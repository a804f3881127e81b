//! Error types

use thiserror::Error;

/// The synthesizer was set up with options it can't work with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Tessellation level must be between 1 and 4096 (got {0})")]
    InvalidTessellationLevel(u32),
}

/// Why a single face couldn't be turned into geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum FaceError {
    #[error("vertex range {first}+{count} is outside the {available} vertices")]
    VertexRange {
        first: i32,
        count: i32,
        available: usize,
    },

    #[error("index range {first}+{count} is outside the {available} meshverts")]
    IndexRange {
        first: i32,
        count: i32,
        available: usize,
    },

    #[error("{count} indices don't make whole triangles")]
    PartialTriangle { count: usize },

    #[error("index {index} is outside the face's {vertices} vertices")]
    IndexOutOfRange { index: i32, vertices: usize },

    #[error("patch size {width}x{height} isn't odd and at least 3x3")]
    PatchSize { width: i32, height: i32 },

    #[error("patch of {width}x{height} needs more than the face's {vertices} vertices")]
    PatchVertices {
        width: i32,
        height: i32,
        vertices: usize,
    },
}
