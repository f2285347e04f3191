//! Invaders entry point
//!
//! Runs an unattended game driven by the autopilot and prints a JSON summary.
//!
//! Usage: `invaders [settings.json] [frames]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use invaders::Settings;
use invaders::assets::{AssetDict, SoundBank, TextureSet};
use invaders::audio::{AudioManager, LogBackend};
use invaders::renderer::{draw_list, hud_text};
use invaders::sim::{GameState, autopilot, tick};

/// Frames to run when no count is given (about five minutes at 60 Hz)
const DEFAULT_FRAMES: u64 = 18_000;

/// Result of a demo run
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    score: u32,
    lives: u32,
    live_invaders: u32,
    won: bool,
    game_over: bool,
}

fn main() {
    env_logger::init();
    log::info!("Invaders (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let max_frames = match args.next() {
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) => n,
            Err(e) => {
                log::warn!("Invalid frame count {raw:?} ({e}), using {DEFAULT_FRAMES}");
                DEFAULT_FRAMES
            }
        },
        None => DEFAULT_FRAMES,
    };

    let settings = Settings::load_or_default(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut assets = AssetDict::new();
    let textures = TextureSet::load(&mut assets);
    let bank = SoundBank::load(&mut assets);
    log::info!(
        "Registered {} textures and {} sounds",
        assets.texture_count(),
        assets.sound_count()
    );

    let mut audio = AudioManager::new(LogBackend, bank);
    audio.apply_settings(&settings);

    let mut state = GameState::new(settings.level, textures, seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut frames = 0;
    while frames < max_frames && !state.is_game_over() {
        let input = autopilot(&state);
        tick(&mut state, &input);
        audio.play_all(state.drain_sounds());

        let quads = draw_list(&state.sprites);
        if frames % 600 == 0 {
            log::debug!("frame {}: {} ({} quads)", frames, hud_text(&state), quads.len());
        }
        frames += 1;
    }

    let summary = RunSummary {
        seed,
        frames,
        score: state.score,
        lives: state.ship_lives(),
        live_invaders: state.live_invaders,
        won: state.is_won(),
        game_over: state.is_game_over(),
    };
    log::info!("Finished after {} frames: {}", frames, hud_text(&state));

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}
