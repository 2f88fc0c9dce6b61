//! Voxel world model for the Cinder client: block values, dense chunks streamed
//! from the server, the chunk store that merges partial updates, and the item
//! stack-height table.

pub mod block;
pub mod chunk;
pub mod chunk_store;
pub mod coords;
pub mod items;

pub use block::{Block, ItemType};
pub use chunk::{CHUNK_SIZE, Chunk, ChunkError};
pub use chunk_store::{ChunkStore, ChunkUpdateRejection, ChunkUpdated, chunk_key};
pub use coords::Int3D;
pub use items::{ItemStackTable, UNKNOWN_STACK_HEIGHT};
