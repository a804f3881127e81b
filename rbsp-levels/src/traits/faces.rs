use crate::rbsp::Face;

use super::{HasMeshVerts, HasTextures};

pub trait HasFaces: HasTextures + HasMeshVerts {
    fn faces(&self) -> &[Face];

    fn faces_len(&self) -> usize {
        self.faces().len()
    }

    fn get_face(&self, index: usize) -> Option<&Face> {
        self.faces().get(index)
    }
}
