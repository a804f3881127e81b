//! Common traits, glob-import this to get at a scene's contents generically.

pub use crate::diagnostics::DiagnosticSink;
pub use crate::features::GeometrySource;
pub use crate::traits::{HasFaces, HasMeshVerts, HasTextures, HasVertices};
