//! Game state and core simulation types
//!
//! The sprite store is one flat array carved into per-category ranges. It is
//! sized once from the level and never grows or shrinks; "destroying" a sprite
//! only disables it.

use std::ops::Range;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::sprite::Sprite;
use crate::assets::TextureSet;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::level::LevelConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Ship destroyed or swarm cleared; waiting for restart
    GameOver,
}

/// Status banners, parked until the matching event reveals them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    GameOver,
    GameWon,
    Restart,
    Pause,
}

impl Banner {
    pub const ALL: [Banner; 4] = [Banner::GameOver, Banner::GameWon, Banner::Restart, Banner::Pause];

    fn slot(self) -> usize {
        match self {
            Banner::GameOver => 0,
            Banner::GameWon => 1,
            Banner::Restart => 2,
            Banner::Pause => 3,
        }
    }
}

/// Playfield borders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Bottom,
    Top,
    Left,
    Right,
    /// Invisible line the ship cannot move above
    Divider,
}

impl Border {
    pub const ALL: [Border; 5] = [
        Border::Bottom,
        Border::Top,
        Border::Left,
        Border::Right,
        Border::Divider,
    ];

    fn slot(self) -> usize {
        match self {
            Border::Bottom => 0,
            Border::Top => 1,
            Border::Left => 2,
            Border::Right => 3,
            Border::Divider => 4,
        }
    }
}

const SHIP: usize = 0;
const FIRST_BANNER: usize = 1;

/// Index ranges of each sprite category within the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub invaders: Range<usize>,
    pub missiles: Range<usize>,
    pub bombs: Range<usize>,
    pub borders: Range<usize>,
    pub walls: Range<usize>,
}

impl Layout {
    pub fn new(level: &LevelConfig) -> Self {
        let first_invader = FIRST_BANNER + Banner::ALL.len();
        let invaders = first_invader..first_invader + level.invaders;
        let missiles = invaders.end..invaders.end + NUM_MISSILES;
        let bombs = missiles.end..missiles.end + NUM_BOMBS;
        let borders = bombs.end..bombs.end + Border::ALL.len();
        let walls = borders.end..borders.end + level.walls;
        Self {
            invaders,
            missiles,
            bombs,
            borders,
            walls,
        }
    }

    /// Total number of sprites
    pub fn total(&self) -> usize {
        self.walls.end
    }
}

/// Fixed-size store of every sprite in the game
#[derive(Debug, Clone)]
pub struct SpriteStore {
    sprites: Vec<Sprite>,
    layout: Layout,
}

impl SpriteStore {
    /// Build the initial arrangement for a level
    pub fn new(level: &LevelConfig, textures: &TextureSet) -> Self {
        let layout = Layout::new(level);
        let mut sprites = Vec::with_capacity(layout.total());

        sprites.push(
            Sprite::new(Some(textures.ship), 0.0, SHIP_START_Y, SHIP_SIZE, SHIP_SIZE)
                .with_lives(SHIP_LIVES),
        );

        // Banners start parked
        for banner in Banner::ALL {
            let (texture, y, w, h) = match banner {
                Banner::GameOver => (textures.game_over, 0.0, 3.0, 1.5),
                Banner::GameWon => (textures.game_won, 0.0, 3.0, 1.5),
                Banner::Restart => (textures.restart, -1.0, 1.5, 0.75),
                Banner::Pause => (textures.pause, 0.0, 1.5, 0.75),
            };
            sprites.push(Sprite::new(Some(texture), PARK_OFFSET, y, w, h).disabled());
        }

        for i in 0..level.invaders {
            let (row, col) = level.grid_cell(i);
            let x = (col as f32 - MAX_COLS as f32 * 0.5) * INVADER_SPACING;
            let y = INVADER_TOP_Y - row as f32 * INVADER_SPACING;
            sprites.push(Sprite::new(
                Some(textures.invader),
                x,
                y,
                INVADER_SIZE,
                INVADER_SIZE,
            ));
        }

        for _ in 0..NUM_MISSILES {
            sprites.push(
                Sprite::new(
                    Some(textures.missile),
                    PARK_OFFSET,
                    0.0,
                    PROJECTILE_WIDTH,
                    PROJECTILE_HEIGHT,
                )
                .disabled(),
            );
        }
        for _ in 0..NUM_BOMBS {
            sprites.push(
                Sprite::new(
                    Some(textures.bomb),
                    PARK_OFFSET,
                    0.0,
                    PROJECTILE_WIDTH,
                    PROJECTILE_HEIGHT,
                )
                .disabled(),
            );
        }

        let span = PLAYFIELD_HALF_EXTENT * 2.0;
        for border in Border::ALL {
            let edge = PLAYFIELD_HALF_EXTENT;
            let sprite = match border {
                Border::Bottom => Sprite::new(Some(textures.border), 0.0, -edge, span, BORDER_THICKNESS),
                Border::Top => Sprite::new(Some(textures.border), 0.0, edge, span, BORDER_THICKNESS),
                Border::Left => Sprite::new(Some(textures.border), -edge, 0.0, BORDER_THICKNESS, span),
                Border::Right => Sprite::new(Some(textures.border), edge, 0.0, BORDER_THICKNESS, span),
                Border::Divider => Sprite::new(None, 0.0, DIVIDER_Y, span, BORDER_THICKNESS),
            };
            sprites.push(sprite);
        }

        for i in 0..level.walls {
            sprites.push(
                Sprite::new(
                    Some(textures.wall_stage(WALL_LIVES)),
                    WALL_START_X + i as f32 * WALL_SPACING,
                    DIVIDER_Y,
                    WALL_SIZE,
                    WALL_SIZE,
                )
                .with_lives(WALL_LIVES),
            );
        }

        debug_assert_eq!(sprites.len(), layout.total());
        Self { sprites, layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// All sprites in store order (for rendering)
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn get(&self, index: usize) -> &Sprite {
        &self.sprites[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Sprite {
        &mut self.sprites[index]
    }

    pub fn ship(&self) -> &Sprite {
        &self.sprites[SHIP]
    }

    pub fn ship_mut(&mut self) -> &mut Sprite {
        &mut self.sprites[SHIP]
    }

    pub fn banner(&self, banner: Banner) -> &Sprite {
        &self.sprites[FIRST_BANNER + banner.slot()]
    }

    pub fn banner_mut(&mut self, banner: Banner) -> &mut Sprite {
        &mut self.sprites[FIRST_BANNER + banner.slot()]
    }

    pub fn border(&self, border: Border) -> &Sprite {
        &self.sprites[self.layout.borders.start + border.slot()]
    }

    pub fn invader_count(&self) -> usize {
        self.layout.invaders.len()
    }

    pub fn wall_count(&self) -> usize {
        self.layout.walls.len()
    }

    pub fn invader(&self, i: usize) -> &Sprite {
        &self.sprites[self.layout.invaders.start + i]
    }

    pub fn invader_mut(&mut self, i: usize) -> &mut Sprite {
        let idx = self.layout.invaders.start + i;
        &mut self.sprites[idx]
    }

    pub fn missile(&self, i: usize) -> &Sprite {
        &self.sprites[self.layout.missiles.start + i]
    }

    pub fn missile_mut(&mut self, i: usize) -> &mut Sprite {
        let idx = self.layout.missiles.start + i;
        &mut self.sprites[idx]
    }

    pub fn bomb(&self, i: usize) -> &Sprite {
        &self.sprites[self.layout.bombs.start + i]
    }

    pub fn bomb_mut(&mut self, i: usize) -> &mut Sprite {
        let idx = self.layout.bombs.start + i;
        &mut self.sprites[idx]
    }

    pub fn wall(&self, i: usize) -> &Sprite {
        &self.sprites[self.layout.walls.start + i]
    }

    pub fn wall_mut(&mut self, i: usize) -> &mut Sprite {
        let idx = self.layout.walls.start + i;
        &mut self.sprites[idx]
    }

    /// Enabled sprites in a category range
    pub fn enabled_in(&self, range: Range<usize>) -> usize {
        self.sprites[range].iter().filter(|s| s.is_enabled()).count()
    }

    /// First enabled sprite in `range` that overlaps `sprite`
    pub fn first_hit(&self, sprite: &Sprite, range: Range<usize>) -> Option<usize> {
        range
            .into_iter()
            .find(|&i| self.sprites[i].is_enabled() && sprite.collides_with(&self.sprites[i]))
    }

    /// Move every enabled invader
    pub fn move_invaders(&mut self, dx: f32, dy: f32) {
        let range = self.layout.invaders.clone();
        for invader in &mut self.sprites[range] {
            if invader.is_enabled() {
                invader.translate(dx, dy);
            }
        }
    }

    /// True if any enabled invader overlaps the given border
    pub fn invaders_touch(&self, border: Border) -> bool {
        let border = self.border(border);
        self.sprites[self.layout.invaders.clone()]
            .iter()
            .any(|s| s.is_enabled() && s.collides_with(border))
    }
}

/// Complete game state for one play session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Every sprite in the game
    pub sprites: SpriteStore,
    /// Current phase
    pub phase: GamePhase,
    /// Invaders destroyed this session
    pub score: u32,
    /// Invaders still alive
    pub live_invaders: u32,
    /// Horizontal swarm step per frame (sign = direction)
    pub invader_velocity: f32,
    /// Vertical swarm step applied on each bounce (sign = direction)
    pub invader_direction: f32,
    /// Frames before the ship may fire again
    pub missile_cooldown: u32,
    /// Frames before the swarm may drop another bomb
    pub bomb_cooldown: u32,
    /// Simulation frame counter (not reset on restart)
    pub frame: u64,
    /// Level the store was built from
    pub level: LevelConfig,
    /// Texture handles used for (re)building and wall damage
    pub textures: TextureSet,
    /// Seeded RNG for bomb targeting
    pub rng: Pcg32,
    /// Sounds triggered since the last drain
    sounds: Vec<SoundEffect>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(level: LevelConfig, textures: TextureSet, seed: u64) -> Self {
        log::info!(
            "New session: {} invaders in {}x{}, {} walls, seed {}",
            level.invaders,
            level.rows,
            level.cols,
            level.walls,
            seed
        );
        Self {
            sprites: SpriteStore::new(&level, &textures),
            phase: GamePhase::Playing,
            score: 0,
            live_invaders: level.invaders as u32,
            invader_velocity: INVADER_START_VELOCITY,
            invader_direction: INVADER_START_DIRECTION,
            missile_cooldown: 0,
            bomb_cooldown: BOMB_COOLDOWN_START,
            frame: 0,
            level,
            textures,
            rng: Pcg32::seed_from_u64(seed),
            sounds: Vec::new(),
        }
    }

    /// Reinitialise everything except the RNG stream and frame counter
    pub fn reset(&mut self) {
        self.sprites = SpriteStore::new(&self.level, &self.textures);
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.live_invaders = self.level.invaders as u32;
        self.invader_velocity = INVADER_START_VELOCITY;
        self.invader_direction = INVADER_START_DIRECTION;
        self.missile_cooldown = 0;
        self.bomb_cooldown = BOMB_COOLDOWN_START;
        self.sounds.clear();
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// True once every invader has been destroyed
    pub fn is_won(&self) -> bool {
        self.is_game_over() && self.live_invaders == 0
    }

    pub fn ship_lives(&self) -> u32 {
        self.sprites.ship().lives()
    }

    /// Queue a sound for the audio frontend
    pub fn play(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    /// Take the sounds triggered since the last call
    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    /// Sounds triggered since the last drain, without consuming them
    pub fn pending_sounds(&self) -> &[SoundEffect] {
        &self.sounds
    }

    /// Move a parked banner into view (no-op if already shown)
    pub fn reveal_banner(&mut self, banner: Banner) {
        let sprite = self.sprites.banner_mut(banner);
        if !sprite.is_enabled() {
            sprite.unpark();
        }
    }

    /// Park a banner again (no-op if already hidden)
    pub fn hide_banner(&mut self, banner: Banner) {
        let sprite = self.sprites.banner_mut(banner);
        if sprite.is_enabled() {
            sprite.park();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetDict;

    fn new_state() -> GameState {
        let textures = TextureSet::load(&mut AssetDict::new());
        GameState::new(LevelConfig::default(), textures, 1)
    }

    #[test]
    fn test_layout_ranges_are_disjoint_and_ordered() {
        let layout = Layout::new(&LevelConfig::default());
        assert_eq!(layout.invaders, 5..55);
        assert_eq!(layout.missiles, 55..57);
        assert_eq!(layout.bombs, 57..59);
        assert_eq!(layout.borders, 59..64);
        assert_eq!(layout.walls, 64..67);
        assert_eq!(layout.total(), 67);
    }

    #[test]
    fn test_initial_store() {
        let state = new_state();
        let store = &state.sprites;
        assert_eq!(store.len(), 67);
        assert_eq!(store.ship().lives(), SHIP_LIVES);
        assert!(store.ship().is_enabled());
        assert_eq!(store.enabled_in(store.layout().invaders.clone()), 50);
        assert_eq!(store.enabled_in(store.layout().missiles.clone()), 0);
        assert_eq!(store.enabled_in(store.layout().bombs.clone()), 0);
        for banner in Banner::ALL {
            assert!(!store.banner(banner).is_enabled());
            assert!(store.banner(banner).position().x >= PARK_OFFSET);
        }
        assert!(store.border(Border::Divider).texture().is_none());
        for i in 0..store.wall_count() {
            assert_eq!(store.wall(i).lives(), WALL_LIVES);
        }
        assert_eq!(state.live_invaders, 50);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_invader_grid_layout() {
        let state = new_state();
        let first = state.sprites.invader(0).position();
        let second_row = state.sprites.invader(10).position();
        assert!((first.x - (-2.75)).abs() < 1e-6);
        assert!((first.y - INVADER_TOP_Y).abs() < 1e-6);
        assert!((second_row.x - first.x).abs() < 1e-6);
        assert!((second_row.y - (INVADER_TOP_Y - INVADER_SPACING)).abs() < 1e-6);
    }

    #[test]
    fn test_banner_reveal_is_idempotent() {
        let mut state = new_state();
        state.reveal_banner(Banner::Restart);
        state.reveal_banner(Banner::Restart);
        let restart = state.sprites.banner(Banner::Restart);
        assert!(restart.is_enabled());
        assert!(restart.position().x.abs() < 1e-6);

        state.hide_banner(Banner::Restart);
        state.hide_banner(Banner::Restart);
        assert!((state.sprites.banner(Banner::Restart).position().x - PARK_OFFSET).abs() < 1e-6);
    }

    #[test]
    fn test_drain_sounds() {
        let mut state = new_state();
        state.play(SoundEffect::MissileFired);
        state.play(SoundEffect::WallHit);
        assert_eq!(state.pending_sounds().len(), 2);
        assert_eq!(
            state.drain_sounds(),
            vec![SoundEffect::MissileFired, SoundEffect::WallHit]
        );
        assert!(state.drain_sounds().is_empty());
    }
}
