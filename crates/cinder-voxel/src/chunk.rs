//! Dense voxel grids.
//!
//! A [`Chunk`] is both the unit the [`ChunkStore`](crate::ChunkStore) keeps
//! loaded (always [`CHUNK_SIZE`], chunk-aligned) and the payload of a map
//! update from the server (any size that fits inside one chunk).

use crate::block::Block;
use crate::coords::Int3D;

/// Size of a full chunk in blocks: 16 × 16 horizontally, 128 tall.
pub const CHUNK_SIZE: Int3D = Int3D::new(16, 16, 128);

/// Errors from building a chunk out of raw server data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkError {
    /// The block list length does not match the declared size.
    #[error("chunk of size {size} needs {expected} blocks, got {actual}")]
    SizeMismatch {
        /// Declared size.
        size: Int3D,
        /// Number of blocks the size implies.
        expected: usize,
        /// Number of blocks supplied.
        actual: usize,
    },
}

/// A dense box of blocks anchored at an absolute origin.
///
/// Blocks are stored z-fastest, then y, then x, the column order the server
/// sends them in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    position: Int3D,
    size: Int3D,
    blocks: Vec<Block>,
}

impl Chunk {
    /// Creates an all-air grid at `position` with the given `size`.
    ///
    /// A size with a non-positive component yields an empty grid.
    pub fn new(position: Int3D, size: Int3D) -> Self {
        Self {
            position,
            size,
            blocks: vec![Block::AIR; size.volume()],
        }
    }

    /// Builds a grid from blocks in storage order (z fastest, then y, then x).
    pub fn from_blocks(position: Int3D, size: Int3D, blocks: Vec<Block>) -> Result<Self, ChunkError> {
        let expected = size.volume();
        if blocks.len() != expected {
            return Err(ChunkError::SizeMismatch {
                size,
                expected,
                actual: blocks.len(),
            });
        }
        Ok(Self {
            position,
            size,
            blocks,
        })
    }

    /// Absolute coordinate of the grid's minimum corner.
    pub fn position(&self) -> Int3D {
        self.position
    }

    /// Extent of the grid in blocks.
    pub fn size(&self) -> Int3D {
        self.size
    }

    /// All blocks in storage order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the block at a coordinate relative to [`position`](Self::position).
    ///
    /// Out-of-range coordinates read as air.
    pub fn get_block(&self, local: Int3D) -> Block {
        match self.index_of(local) {
            Some(index) => self.blocks[index],
            None => {
                tracing::warn!("Chunk::get_block out of bounds: {} in size {}", local, self.size);
                Block::AIR
            }
        }
    }

    /// Overwrites the block at a coordinate relative to [`position`](Self::position).
    ///
    /// No-op with a warning log if the coordinate is out of range.
    pub fn set_block(&mut self, local: Int3D, block: Block) {
        match self.index_of(local) {
            Some(index) => self.blocks[index] = block,
            None => {
                tracing::warn!("Chunk::set_block out of bounds: {} in size {}", local, self.size);
            }
        }
    }

    /// Number of non-air blocks.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_air()).count()
    }

    fn index_of(&self, local: Int3D) -> Option<usize> {
        let in_bounds = (0..self.size.x).contains(&local.x)
            && (0..self.size.y).contains(&local.y)
            && (0..self.size.z).contains(&local.z);
        if !in_bounds {
            return None;
        }
        let (x, y, z) = (local.x as usize, local.y as usize, local.z as usize);
        let (size_y, size_z) = (self.size.y as usize, self.size.z as usize);
        Some(z + y * size_z + x * size_z * size_y)
    }
}
