//! Asset handles
//!
//! Textures and sounds are opaque handles handed out by an [`AssetProvider`].
//! The simulation never looks inside them; it only stores and swaps them.

use std::collections::HashMap;

use crate::consts::WALL_LIVES;

/// Opaque texture handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Opaque sound buffer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Pixel layout requested when loading a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

/// Sample layout requested when loading a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Mono16,
}

/// Source of texture and sound handles.
///
/// Handles must be stable: asking twice for the same path returns the same
/// handle, so they can be cached across frames.
pub trait AssetProvider {
    fn texture(&mut self, format: PixelFormat, path: &str) -> TextureId;
    fn sound(&mut self, format: SampleFormat, path: &str) -> SoundHandle;
}

/// In-memory asset dictionary that interns paths into handles.
///
/// Nothing is decoded; the path is the identity. Useful headless and in tests.
#[derive(Debug, Default)]
pub struct AssetDict {
    textures: HashMap<String, TextureId>,
    sounds: HashMap<String, SoundHandle>,
}

impl AssetDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path a texture handle was interned from
    pub fn texture_path(&self, id: TextureId) -> Option<&str> {
        self.textures
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }
}

impl AssetProvider for AssetDict {
    fn texture(&mut self, _format: PixelFormat, path: &str) -> TextureId {
        // Handle 0 is reserved so a zero id never aliases "no texture"
        let next = TextureId(self.textures.len() as u32 + 1);
        *self.textures.entry(path.to_string()).or_insert(next)
    }

    fn sound(&mut self, _format: SampleFormat, path: &str) -> SoundHandle {
        let next = SoundHandle(self.sounds.len() as u32 + 1);
        *self.sounds.entry(path.to_string()).or_insert(next)
    }
}

/// Every texture the game uses, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSet {
    pub ship: TextureId,
    pub game_over: TextureId,
    pub game_won: TextureId,
    pub restart: TextureId,
    pub pause: TextureId,
    pub invader: TextureId,
    pub missile: TextureId,
    pub bomb: TextureId,
    pub border: TextureId,
    /// Wall damage stages, indexed by `lives - 1` (last entry = undamaged)
    pub walls: [TextureId; WALL_LIVES as usize],
}

impl TextureSet {
    pub fn load(assets: &mut impl AssetProvider) -> Self {
        let mut rgba = |path: &str| assets.texture(PixelFormat::Rgba, path);
        let ship = rgba("assets/invaders/player.gif");
        let game_over = rgba("assets/invaders/GameOver.gif");
        let game_won = rgba("assets/invaders/GameWon.gif");
        let restart = rgba("assets/invaders/GameRestart.gif");
        let pause = rgba("assets/invaders/GamePause.gif");
        let invader = rgba("assets/invaders/enemy.gif");
        let missile = rgba("assets/invaders/missile.gif");
        let bomb = rgba("assets/invaders/bomb.gif");
        let walls = std::array::from_fn(|i| rgba(format!("assets/invaders/wall{}.gif", i + 1).as_str()));
        let border = assets.texture(PixelFormat::Rgb, "#042151");

        Self {
            ship,
            game_over,
            game_won,
            restart,
            pause,
            invader,
            missile,
            bomb,
            border,
            walls,
        }
    }

    /// Texture for a wall with the given lives left
    pub fn wall_stage(&self, lives: u32) -> TextureId {
        let idx = (lives.max(1) as usize - 1).min(self.walls.len() - 1);
        self.walls[idx]
    }
}

/// The two samples the game plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundBank {
    pub whoosh: SoundHandle,
    pub bang: SoundHandle,
}

impl SoundBank {
    pub fn load(assets: &mut impl AssetProvider) -> Self {
        Self {
            whoosh: assets.sound(SampleFormat::Mono16, "assets/invaders/whoosh.wav"),
            bang: assets.sound(SampleFormat::Mono16, "assets/invaders/bang.wav"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dict_handles_are_stable() {
        let mut dict = AssetDict::new();
        let a = dict.texture(PixelFormat::Rgba, "a.gif");
        let b = dict.texture(PixelFormat::Rgba, "b.gif");
        assert_ne!(a, b);
        assert_eq!(dict.texture(PixelFormat::Rgba, "a.gif"), a);
        assert_eq!(dict.texture_path(b), Some("b.gif"));
        assert_ne!(a, TextureId(0));
    }

    #[test]
    fn test_texture_set_wall_stages() {
        let mut dict = AssetDict::new();
        let set = TextureSet::load(&mut dict);
        assert_eq!(dict.texture_path(set.wall_stage(3)), Some("assets/invaders/wall3.gif"));
        assert_eq!(dict.texture_path(set.wall_stage(1)), Some("assets/invaders/wall1.gif"));
        // Out of range clamps instead of panicking
        assert_eq!(set.wall_stage(0), set.wall_stage(1));
        assert_eq!(set.wall_stage(9), set.wall_stage(3));
        // 8 sprite textures, 3 wall stages, 1 border colour
        assert_eq!(dict.texture_count(), 12);
    }

    #[test]
    fn test_sound_bank() {
        let mut dict = AssetDict::new();
        let bank = SoundBank::load(&mut dict);
        assert_ne!(bank.whoosh, bank.bang);
        assert_eq!(dict.sound_count(), 2);
    }
}
