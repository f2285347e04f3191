//! Rendering data
//!
//! Reads the sprite store after the simulation step and turns it into
//! textured quads. Nothing here mutates game state; GPU submission belongs to
//! the host.

pub mod shapes;
pub mod vertex;

pub use shapes::{SpriteQuad, draw_list, flatten, sprite_quad};
pub use vertex::{Vertex, vertex_bytes};

use crate::sim::GameState;

/// Score line drawn in the top-left corner
pub fn hud_text(state: &GameState) -> String {
    format!("score: {}  lives: {}", state.score, state.ship_lives())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetDict, TextureSet};
    use crate::level::LevelConfig;
    use crate::sim::{Banner, TickInput, tick};

    fn new_state() -> GameState {
        let textures = TextureSet::load(&mut AssetDict::new());
        GameState::new(LevelConfig::default(), textures, 3)
    }

    #[test]
    fn test_draw_list_skips_hidden_sprites() {
        let state = new_state();
        let quads = draw_list(&state.sprites);
        // ship + 50 invaders + 4 visible borders + 3 walls
        assert_eq!(quads.len(), 1 + 50 + 4 + 3);
        assert_eq!(quads[0].texture, state.textures.ship);
        assert_eq!(flatten(&quads).len(), quads.len() * 6);
        assert_eq!(
            vertex_bytes(&flatten(&quads)).len(),
            quads.len() * 6 * Vertex::STRIDE
        );
    }

    #[test]
    fn test_draw_list_shows_pause_banner() {
        let mut state = new_state();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        let quads = draw_list(&state.sprites);
        assert!(quads.iter().any(|q| q.texture == state.textures.pause));
        assert!(state.sprites.banner(Banner::Pause).is_enabled());
    }

    #[test]
    fn test_hud_text() {
        let state = new_state();
        assert_eq!(hud_text(&state), "score: 0  lives: 3");
    }
}
