//! World and simulation constants

/// Core world dimensions
pub mod core {
    /// Chunk column edge length in voxels (X and Z)
    pub const CHUNK_SIZE: i32 = 16;

    /// World height in voxels; chunks span the full height
    pub const WORLD_HEIGHT: i32 = 50;

    /// Extra Chebyshev chunk distance a loaded chunk survives beyond
    /// the load radius, so pacing at the boundary does not thrash
    pub const UNLOAD_HYSTERESIS: i32 = 2;
}

/// Movement and picking
pub mod physics {
    /// Downward acceleration in voxels per second squared
    pub const GRAVITY: f32 = -30.0;

    /// Falling below this Y respawns the player
    pub const KILL_PLANE_Y: f32 = -10.0;

    /// March step for the fixed-step voxel raycast
    pub const RAYCAST_STEP: f32 = 0.05;

    /// Forward nudge applied before flooring a raycast sample, so a
    /// sample on a voxel boundary resolves to the cell being entered
    pub const RAYCAST_INSIDE_EPSILON: f32 = 1e-3;
}

/// Simulation pacing
pub mod timing {
    /// Frame delta clamp; stalls longer than this simulate as this
    pub const MAX_DELTA_SECS: f32 = 0.1;

    /// Seconds of game time in one full day/night cycle
    pub const DAY_LENGTH_SECS: f32 = 600.0;

    /// Enemy AI runs once per this many game ticks
    pub const ENEMY_UPDATE_INTERVAL: u32 = 5;
}
