//! Nodes & leaves of the BSP tree, and the index lumps leaves point into.
//!
//! These are decoded as-is. Nothing here walks the tree.

use na::Vector3;
use serde::{Deserialize, Serialize};

use crate::reader::{LumpReader, Record};
use crate::types::Result;

/// What a node's child index points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeChild {
    Node(usize),
    Leaf(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub plane: i32,
    /// Negative values are leaves, stored as `-(leaf + 1)`.
    pub children: [i32; 2],
    pub mins: Vector3<i32>,
    pub maxs: Vector3<i32>,
}

impl Node {
    pub fn child(&self, side: usize) -> NodeChild {
        let i = self.children[side];
        if i < 0 {
            NodeChild::Leaf((-(i as i64) - 1) as usize)
        } else {
            NodeChild::Node(i as usize)
        }
    }
}

impl Record for Node {
    const NAME: &'static str = "Node";
    const SIZE: usize = 4 + (4 * 2) + (4 * 3) + (4 * 3);

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(Node {
            plane: reader.read_i32()?,
            children: reader.read_i32s()?,
            mins: reader.read_vec3i()?,
            maxs: reader.read_vec3i()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    pub cluster: i32,
    pub area: i32,
    pub mins: Vector3<i32>,
    pub maxs: Vector3<i32>,
    pub leaf_face: i32,
    pub n_leaf_faces: i32,
    pub leaf_brush: i32,
    pub n_leaf_brushes: i32,
}

impl Record for Leaf {
    const NAME: &'static str = "Leaf";
    const SIZE: usize = (4 * 2) + (4 * 3 * 2) + (4 * 4);

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(Leaf {
            cluster: reader.read_i32()?,
            area: reader.read_i32()?,
            mins: reader.read_vec3i()?,
            maxs: reader.read_vec3i()?,
            leaf_face: reader.read_i32()?,
            n_leaf_faces: reader.read_i32()?,
            leaf_brush: reader.read_i32()?,
            n_leaf_brushes: reader.read_i32()?,
        })
    }
}

/// An index into the faces lump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafFace {
    pub face: i32,
}

impl Record for LeafFace {
    const NAME: &'static str = "LeafFace";
    const SIZE: usize = 4;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(LeafFace {
            face: reader.read_i32()?,
        })
    }
}

/// An index into the brushes lump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafBrush {
    pub brush: i32,
}

impl Record for LeafBrush {
    const NAME: &'static str = "LeafBrush";
    const SIZE: usize = 4;

    fn read(reader: &mut LumpReader<'_>) -> Result<Self> {
        Ok(LeafBrush {
            brush: reader.read_i32()?,
        })
    }
}
