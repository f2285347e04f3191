//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (store index order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod sprite;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{aabb_overlap, column_aligned};
pub use sprite::Sprite;
pub use state::{Banner, Border, GamePhase, GameState, Layout, SpriteStore};
pub use tick::{TickInput, tick};
