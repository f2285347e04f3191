//! Demo autopilot
//!
//! Produces input for an unattended game: line the ship up under the nearest
//! invader, sidestep bombs coming down its column, and keep firing.

use std::cmp::Ordering;

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::{NUM_BOMBS, SHIP_SPEED};

/// How close a bomb's column must be before the ship dodges
const DODGE_MARGIN: f32 = 0.1;

/// Build this frame's input from the current state
pub fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        // Alternate so every press is a fresh edge
        fire: state.frame % 2 == 0,
        ..Default::default()
    };

    let ship = state.sprites.ship();
    let ship_x = ship.position().x;

    // Dodge first: any live bomb above us in our column
    let threat = (0..NUM_BOMBS)
        .map(|i| state.sprites.bomb(i))
        .find(|b| {
            b.is_enabled() && b.position().y > ship.position().y && b.is_above(ship, DODGE_MARGIN)
        });
    if let Some(bomb) = threat {
        if bomb.position().x >= ship_x {
            input.left = true;
        } else {
            input.right = true;
        }
        return input;
    }

    let target = (0..state.sprites.invader_count())
        .map(|i| state.sprites.invader(i))
        .filter(|s| s.is_enabled())
        .min_by(|a, b| {
            let da = (a.position().x - ship_x).abs();
            let db = (b.position().x - ship_x).abs();
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        });

    if let Some(invader) = target {
        let dx = invader.position().x - ship_x;
        if dx < -SHIP_SPEED * 0.5 {
            input.left = true;
        } else if dx > SHIP_SPEED * 0.5 {
            input.right = true;
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetDict, TextureSet};
    use crate::level::LevelConfig;
    use crate::sim::tick;

    fn new_state(seed: u64) -> GameState {
        let textures = TextureSet::load(&mut AssetDict::new());
        GameState::new(LevelConfig::default(), textures, seed)
    }

    #[test]
    fn test_heads_for_nearest_invader() {
        let state = new_state(1);
        // Ship starts at x=0, the grid sits to its left
        let input = autopilot(&state);
        assert!(input.left);
        assert!(!input.right);
        assert!(input.fire);
    }

    #[test]
    fn test_dodges_bomb_overhead() {
        let mut state = new_state(1);
        let ship = *state.sprites.ship();
        let bomb = state.sprites.bomb_mut(0);
        bomb.set_relative(&ship, 0.02, 1.0);
        bomb.set_enabled(true);

        let input = autopilot(&state);
        assert!(input.left);
    }

    #[test]
    fn test_demo_game_scores() {
        let mut state = new_state(2024);
        for _ in 0..600 {
            let input = autopilot(&state);
            tick(&mut state, &input);
            state.drain_sounds();
        }
        assert!(state.score > 0);
    }

    #[test]
    fn test_demo_game_is_reproducible() {
        let mut a = new_state(42);
        let mut b = new_state(42);
        for _ in 0..1000 {
            let input_a = autopilot(&a);
            let input_b = autopilot(&b);
            assert_eq!(input_a, input_b);
            tick(&mut a, &input_a);
            tick(&mut b, &input_b);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.live_invaders, b.live_invaders);
        assert_eq!(a.sprites.ship().position(), b.sprites.ship().position());
    }
}
