//! Sound effect playback
//!
//! The simulation only queues [`SoundEffect`]s. The frontend drains them each
//! frame into an [`AudioManager`], which picks the sample and hands it to the
//! next source of a small round-robin pool.

use crate::assets::{SoundBank, SoundHandle};
use crate::consts::NUM_SOUND_SOURCES;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ship fired a missile
    MissileFired,
    /// An invader dropped a bomb
    BombDropped,
    /// Missile destroyed an invader
    InvaderDestroyed,
    /// Bomb hit the ship
    ShipHit,
    /// Missile or bomb hit a wall
    WallHit,
    /// Missile and bomb destroyed each other
    ProjectilesCollided,
}

/// The recorded samples effects are played with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Whoosh,
    Bang,
}

impl SoundEffect {
    pub fn sample(self) -> Sample {
        match self {
            SoundEffect::MissileFired | SoundEffect::BombDropped => Sample::Whoosh,
            SoundEffect::InvaderDestroyed
            | SoundEffect::ShipHit
            | SoundEffect::WallHit
            | SoundEffect::ProjectilesCollided => Sample::Bang,
        }
    }
}

/// Output device: plays a sound buffer on one of the pooled sources.
///
/// Fire-and-forget; must not block.
pub trait AudioBackend {
    fn play(&mut self, source: usize, sound: SoundHandle, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, source: usize, sound: SoundHandle, volume: f32) {
        log::debug!("sound {:?} on source {} at volume {:.2}", sound, source, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    bank: SoundBank,
    next_source: usize,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, bank: SoundBank) -> Self {
        Self {
            backend,
            bank,
            next_source: 0,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Apply volume and mute preferences
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let sound = match effect.sample() {
            Sample::Whoosh => self.bank.whoosh,
            Sample::Bang => self.bank.bang,
        };
        let source = self.next_source;
        self.next_source = (self.next_source + 1) % NUM_SOUND_SOURCES;
        self.backend.play(source, sound, vol);
    }

    /// Play every effect in order
    pub fn play_all(&mut self, effects: impl IntoIterator<Item = SoundEffect>) {
        for effect in effects {
            self.play(effect);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
