//! Craftworld: a chunked voxel sandbox game core
//!
//! Everything that makes the game run without a screen attached: a
//! sparse voxel world streamed in 16x16 full-height chunk columns,
//! seeded terrain generation, hidden-face chunk meshing, AABB physics
//! and raycasting, and the game layer on top (player, hostile mobs,
//! inventory, crafting, day/night, JSON save files).
//!
//! Rendering and input stay outside: meshes leave through the
//! [`world::meshing::MeshSink`] trait and input arrives as a
//! [`game::MovementIntent`] per tick.
//!
//! ```no_run
//! use craftworld::game::{GameConfig, GameState, MovementIntent};
//! use craftworld::world::meshing::NullMeshSink;
//!
//! let mut game = GameState::new(GameConfig::default());
//! let mut sink = NullMeshSink;
//! game.update(0.016, &MovementIntent::default(), &mut sink);
//! ```

pub mod constants;
pub mod error;
pub mod game;
pub mod persistence;
pub mod physics;
pub mod world;

pub use error::{GameError, GameResult};
pub use game::{GameConfig, GameState, MovementIntent};
pub use world::{BlockId, BlockRegistry, ChunkPos, VoxelPos};
