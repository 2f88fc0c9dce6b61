//! Owner of every loaded chunk, keyed by chunk-aligned origin.
//!
//! The server streams the world as full chunks and smaller fragments. The
//! [`ChunkStore`] materializes a chunk on its first full-size update, merges
//! later fragments into it in place, and drops it on unload. Lookups in
//! regions with no loaded chunk read as air.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::block::Block;
use crate::chunk::{CHUNK_SIZE, Chunk};
use crate::coords::Int3D;

/// Returns the origin of the chunk containing `coord`.
///
/// Uses floor modulo so negative coordinates land in the chunk below zero:
/// `chunk_key((-1, -1, -1)) == (-16, -16, -128)`.
pub fn chunk_key(coord: Int3D) -> Int3D {
    coord - coord % CHUNK_SIZE
}

/// Why a map update was not applied. The store is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkUpdateRejection {
    /// The update has no volume.
    #[error("update at {position} has empty size {size}")]
    EmptyUpdate {
        /// Update origin.
        position: Int3D,
        /// Update size.
        size: Int3D,
    },
    /// The update's box spans more than one chunk.
    #[error("update at {position} with size {size} crosses a chunk boundary")]
    CrossesBoundary {
        /// Update origin.
        position: Int3D,
        /// Update size.
        size: Int3D,
    },
    /// A fragment arrived for a chunk that was never loaded in full.
    #[error("partial update at {position} with size {size} targets unloaded chunk {key}")]
    NotLoaded {
        /// Update origin.
        position: Int3D,
        /// Update size.
        size: Int3D,
        /// Key of the missing chunk.
        key: Int3D,
    },
}

/// The region an accepted update overwrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkUpdated {
    /// Absolute origin of the updated region.
    pub position: Int3D,
    /// Size of the updated region.
    pub size: Int3D,
}

/// Owns all currently loaded chunks.
#[derive(Debug, Default)]
pub struct ChunkStore {
    chunks: FxHashMap<Int3D, Chunk>,
}

impl ChunkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the block at an absolute coordinate, or air if its chunk is not loaded.
    pub fn block_at(&self, coord: Int3D) -> Block {
        let key = chunk_key(coord);
        match self.chunks.get(&key) {
            Some(chunk) => chunk.get_block(coord - key),
            None => Block::AIR,
        }
    }

    /// Merges a full or partial map update into the store.
    ///
    /// A full-size update for an unloaded chunk creates it; a smaller one is
    /// rejected as initialization noise. Accepted updates overwrite every
    /// block in their box.
    pub fn apply_update(&mut self, update: &Chunk) -> Result<ChunkUpdated, ChunkUpdateRejection> {
        let position = update.position();
        let size = update.size();

        if !size.is_positive() {
            return Err(ChunkUpdateRejection::EmptyUpdate { position, size });
        }

        let key = chunk_key(position);
        if chunk_key(position + size - Int3D::ONE) != key {
            return Err(ChunkUpdateRejection::CrossesBoundary { position, size });
        }

        let chunk = match self.chunks.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) if size == CHUNK_SIZE => {
                tracing::debug!("Materializing chunk {}", key);
                entry.insert(Chunk::new(key, CHUNK_SIZE))
            }
            Entry::Vacant(_) => {
                return Err(ChunkUpdateRejection::NotLoaded {
                    position,
                    size,
                    key,
                });
            }
        };

        let offset = position - key;
        for x in 0..size.x {
            for y in 0..size.y {
                for z in 0..size.z {
                    let local = Int3D::new(x, y, z);
                    chunk.set_block(offset + local, update.get_block(local));
                }
            }
        }

        Ok(ChunkUpdated { position, size })
    }

    /// Removes the chunk containing `coord`, returning it if one was loaded.
    pub fn evict(&mut self, coord: Int3D) -> Option<Chunk> {
        self.chunks.remove(&chunk_key(coord))
    }

    /// Returns `true` if any block in the inclusive box `[min, max]` is not air.
    ///
    /// Unloaded chunks read as air, so they never block.
    pub fn collides_in_volume(&self, min: Int3D, max: Int3D) -> bool {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    if !self.block_at(Int3D::new(x, y, z)).is_air() {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Immutable access to the chunk stored under `key`.
    pub fn get_chunk(&self, key: Int3D) -> Option<&Chunk> {
        self.chunks.get(&key)
    }

    /// Returns `true` if the chunk containing `coord` is loaded.
    pub fn is_loaded(&self, coord: Int3D) -> bool {
        self.chunks.contains_key(&chunk_key(coord))
    }

    /// Number of currently loaded chunks.
    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates over the keys of all loaded chunks.
    pub fn loaded_keys(&self) -> impl Iterator<Item = &Int3D> {
        self.chunks.keys()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
