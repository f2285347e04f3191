//! Invaders - a fixed-timestep arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sprites, collisions, game state)
//! - `renderer`: Draw list and vertex data for the sprite store
//! - `audio`: Sound effect playback over a pluggable backend
//! - `assets`: Opaque texture/sound handles and the startup asset set
//! - `level`/`settings`: Data-driven configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod level;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use level::LevelConfig;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield extent: borders sit on +/- this value
    pub const PLAYFIELD_HALF_EXTENT: f32 = 3.0;
    /// Border strip thickness
    pub const BORDER_THICKNESS: f32 = 0.25;
    /// Height of the mid-divider the ship cannot cross
    pub const DIVIDER_Y: f32 = -1.0;

    /// Horizontal offset used to park disabled sprites off-screen
    pub const PARK_OFFSET: f32 = 20.0;

    /// Ship defaults
    pub const SHIP_START_Y: f32 = -2.75;
    pub const SHIP_SIZE: f32 = 0.25;
    pub const SHIP_LIVES: u32 = 3;
    pub const SHIP_SPEED: f32 = 0.05;

    /// Invader grid capacity and layout
    pub const MAX_ROWS: usize = 14;
    pub const MAX_COLS: usize = 22;
    pub const INVADER_SIZE: f32 = 0.25;
    pub const INVADER_SPACING: f32 = 0.25;
    pub const INVADER_TOP_Y: f32 = 2.5;
    pub const INVADER_START_VELOCITY: f32 = 0.01;
    pub const INVADER_START_DIRECTION: f32 = -0.25;
    /// Swarm speeds up when this many invaders remain
    pub const SPEED_UP_REMAINING: u32 = 4;
    pub const SPEED_UP_FACTOR: f32 = 4.0;

    /// Projectile pools
    pub const NUM_MISSILES: usize = 2;
    pub const NUM_BOMBS: usize = 2;
    pub const PROJECTILE_WIDTH: f32 = 0.0625;
    pub const PROJECTILE_HEIGHT: f32 = 0.25;
    pub const MISSILE_SPEED: f32 = 0.3;
    pub const BOMB_SPEED: f32 = 0.2;
    /// Missile spawns this far above the ship
    pub const MISSILE_SPAWN_OFFSET: f32 = 0.5;
    /// Bomb spawns this far below the invader
    pub const BOMB_SPAWN_OFFSET: f32 = -0.25;
    /// How far off-column an invader may be and still drop a bomb on the ship
    pub const BOMB_AIM_MARGIN: f32 = 0.3;

    /// Firing cooldowns (frames)
    pub const MISSILE_COOLDOWN: u32 = 5;
    pub const BOMB_COOLDOWN: u32 = 30;
    pub const BOMB_COOLDOWN_AFTER_HIT: u32 = 50;
    pub const BOMB_COOLDOWN_START: u32 = 50;

    /// Walls
    pub const MAX_WALLS: usize = 10;
    pub const WALL_LIVES: u32 = 3;
    pub const WALL_SIZE: f32 = 0.25;
    pub const WALL_START_X: f32 = -2.75;
    pub const WALL_SPACING: f32 = 1.5;

    /// Number of sound sources cycled round-robin
    pub const NUM_SOUND_SOURCES: usize = 8;
}
