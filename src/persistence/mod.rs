//! Flat snapshot save/load
//!
//! One JSON document carries everything a session needs: seed, player,
//! inventory, time of day, and the voxel edit diff against generated
//! terrain. Loading parses and validates the whole document before any
//! game state is touched, so a malformed file never half-applies.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::game::inventory::{Slot, SLOT_COUNT};
use crate::game::GameState;
use crate::world::core::{BlockId, VoxelPos};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// RFC 3339 wall-clock timestamp of the save
    pub saved_at: String,
    pub seed: f32,
    pub time_of_day: f32,
    pub player: PlayerSnapshot,
    pub inventory: InventorySnapshot,
    /// Player edits relative to generated terrain, breaks as AIR
    pub edits: Vec<(VoxelPos, BlockId)>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub slots: Vec<Slot>,
    pub selected: usize,
}

impl Snapshot {
    pub fn capture(game: &GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
            seed: game.generator.seed(),
            time_of_day: game.daynight.time(),
            player: PlayerSnapshot {
                position: game.player.position.into(),
                yaw: game.player.yaw,
                pitch: game.player.pitch,
                health: game.player.health,
            },
            inventory: InventorySnapshot {
                slots: game.inventory.slots().to_vec(),
                selected: game.inventory.selected_index(),
            },
            edits: game.store.edits().collect(),
        }
    }
}

/// Write the current session to `path` as JSON
pub fn save(game: &GameState, path: &Path) -> GameResult<()> {
    let snapshot = Snapshot::capture(game);
    let file = File::create(path).map_err(|source| GameError::SaveFailed {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::to_writer(BufWriter::new(file), &snapshot)?;
    log::info!(
        "saved world to {} ({} edits)",
        path.display(),
        snapshot.edits.len()
    );
    Ok(())
}

/// Restore a session from `path`.
///
/// The file is read and decoded completely before anything is applied;
/// on any error the game is left exactly as it was.
pub fn load(game: &mut GameState, path: &Path) -> GameResult<()> {
    let mut text = String::new();
    File::open(path)
        .and_then(|file| BufReader::new(file).read_to_string(&mut text))
        .map_err(|source| GameError::LoadFailed {
            path: path.display().to_string(),
            source,
        })?;
    let snapshot: Snapshot = serde_json::from_str(&text)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(GameError::VersionMismatch {
            expected: SNAPSHOT_VERSION,
            found: snapshot.version,
        });
    }
    apply(game, snapshot);
    log::info!("loaded world from {}", path.display());
    Ok(())
}

fn apply(game: &mut GameState, snapshot: Snapshot) {
    game.reset_world(snapshot.seed);
    game.store.load_edits(snapshot.edits);

    game.player.position = Point3::from(snapshot.player.position);
    game.player.yaw = snapshot.player.yaw;
    game.player.pitch = snapshot.player.pitch;
    game.player.health = snapshot.player.health;

    let mut slots = [Slot::EMPTY; SLOT_COUNT];
    for (slot, saved) in slots.iter_mut().zip(snapshot.inventory.slots) {
        *slot = saved;
    }
    game.inventory.restore(slots, snapshot.inventory.selected);

    game.daynight.set_time(snapshot.time_of_day);
    // Chunks regenerate around the player on the next tick; mesh them
    // all at once instead of one per frame
    game.request_full_rebuild();
}
