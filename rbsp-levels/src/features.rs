//! Groups of traits a consumer needs from a level.

use crate::traits::{HasFaces, HasMeshVerts, HasTextures, HasVertices};

/// Everything needed to build triangle geometry from a level.
pub trait GeometrySource: HasFaces + HasVertices + HasMeshVerts + HasTextures {}

impl<T: ?Sized> GeometrySource for T where T: HasFaces + HasVertices + HasMeshVerts + HasTextures {}
