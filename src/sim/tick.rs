//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one frame. Phases run in a fixed order:
//! ship, missile firing, bomb firing, missiles, bombs, swarm.

use rand::Rng;

use super::state::{Banner, Border, GamePhase, GameState};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Direction keys held (level-sensitive)
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire key went down this frame (edge-sensitive)
    pub fire: bool,
    /// Pause key went down this frame (edge-sensitive)
    pub pause: bool,
    /// Restart key held; only honoured after game over
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.frame += 1;

    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                log::info!("Restarting (final score {})", state.score);
                state.reset();
            }
            return;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                state.reveal_banner(Banner::Pause);
                return;
            }
        }
        GamePhase::Paused => {
            if !input.pause {
                return;
            }
            // Unpausing runs the rest of this frame
            state.phase = GamePhase::Playing;
            state.hide_banner(Banner::Pause);
        }
    }

    move_ship(state, input);
    fire_missiles(state, input.fire);
    fire_bombs(state);
    move_missiles(state);
    move_bombs(state);
    move_swarm(state);
}

/// Move the ship one step, undoing the move if it hits the matching boundary
fn move_ship(state: &mut GameState, input: &TickInput) {
    let (dx, dy, border) = if input.left {
        (-SHIP_SPEED, 0.0, Border::Left)
    } else if input.right {
        (SHIP_SPEED, 0.0, Border::Right)
    } else if input.up {
        (0.0, SHIP_SPEED, Border::Divider)
    } else if input.down {
        (0.0, -SHIP_SPEED, Border::Bottom)
    } else {
        return;
    };

    let store = &mut state.sprites;
    store.ship_mut().translate(dx, dy);
    if store.ship().collides_with(store.border(border)) {
        store.ship_mut().translate(-dx, -dy);
    }
}

fn fire_missiles(state: &mut GameState, fire: bool) {
    if state.missile_cooldown > 0 {
        state.missile_cooldown -= 1;
        return;
    }
    if !fire {
        return;
    }

    let Some(slot) = (0..NUM_MISSILES).find(|&i| !state.sprites.missile(i).is_enabled()) else {
        return;
    };
    let ship = *state.sprites.ship();
    let missile = state.sprites.missile_mut(slot);
    missile.set_relative(&ship, 0.0, MISSILE_SPAWN_OFFSET);
    missile.set_enabled(true);
    state.missile_cooldown = MISSILE_COOLDOWN;
    state.play(SoundEffect::MissileFired);
}

fn fire_bombs(state: &mut GameState) {
    if state.bomb_cooldown > 0 {
        state.bomb_cooldown -= 1;
        return;
    }
    let count = state.sprites.invader_count();
    if count == 0 {
        return;
    }
    let start = state.rng.random_range(0..count);
    drop_bomb_from(state, start);
}

/// Scan invaders from `start` to the end of the grid (no wrap-around) and let
/// the first one lined up with the ship drop a bomb.
///
/// Only that first invader is considered: if every bomb is already in flight
/// nothing is dropped this frame. Returns true if a bomb was dropped.
fn drop_bomb_from(state: &mut GameState, start: usize) -> bool {
    let ship = *state.sprites.ship();
    let shooter = (start..state.sprites.invader_count()).find(|&j| {
        let invader = state.sprites.invader(j);
        invader.is_enabled() && invader.is_above(&ship, BOMB_AIM_MARGIN)
    });
    let Some(shooter) = shooter else {
        return false;
    };
    let Some(slot) = (0..NUM_BOMBS).find(|&i| !state.sprites.bomb(i).is_enabled()) else {
        return false;
    };

    let invader = *state.sprites.invader(shooter);
    let bomb = state.sprites.bomb_mut(slot);
    bomb.set_relative(&invader, 0.0, BOMB_SPAWN_OFFSET);
    bomb.set_enabled(true);
    state.bomb_cooldown = BOMB_COOLDOWN;
    state.play(SoundEffect::BombDropped);
    true
}

fn move_missiles(state: &mut GameState) {
    let layout = state.sprites.layout().clone();
    for m in layout.missiles.clone() {
        if !state.sprites.get(m).is_enabled() {
            continue;
        }
        state.sprites.get_mut(m).translate(0.0, MISSILE_SPEED);
        let missile = *state.sprites.get(m);

        if let Some(j) = state.sprites.first_hit(&missile, layout.invaders.clone()) {
            let invader = state.sprites.get_mut(j);
            invader.lose_life();
            invader.park();
            state.sprites.get_mut(m).park();
            on_invader_destroyed(state);
            continue;
        }
        if missile.collides_with(state.sprites.border(Border::Top)) {
            state.sprites.get_mut(m).park();
            continue;
        }
        if let Some(w) = state.sprites.first_hit(&missile, layout.walls.clone()) {
            state.sprites.get_mut(m).park();
            on_wall_hit(state, w);
            continue;
        }
        if let Some(b) = state.sprites.first_hit(&missile, layout.bombs.clone()) {
            state.sprites.get_mut(b).park();
            state.sprites.get_mut(m).park();
            state.play(SoundEffect::ProjectilesCollided);
        }
    }
}

fn move_bombs(state: &mut GameState) {
    let layout = state.sprites.layout().clone();
    for b in layout.bombs.clone() {
        if !state.sprites.get(b).is_enabled() {
            continue;
        }
        state.sprites.get_mut(b).translate(0.0, -BOMB_SPEED);
        let bomb = *state.sprites.get(b);

        let ship = state.sprites.ship();
        if ship.is_enabled() && bomb.collides_with(ship) {
            state.sprites.get_mut(b).park();
            state.bomb_cooldown = BOMB_COOLDOWN_AFTER_HIT;
            on_ship_hit(state);
            continue;
        }
        if bomb.collides_with(state.sprites.border(Border::Bottom)) {
            state.sprites.get_mut(b).park();
            continue;
        }
        if let Some(w) = state.sprites.first_hit(&bomb, layout.walls.clone()) {
            state.sprites.get_mut(b).park();
            on_wall_hit(state, w);
        }
    }
}

/// Sweep the swarm sideways; on reaching a side border bounce and step
/// vertically, reversing vertical direction at the top or the divider.
fn move_swarm(state: &mut GameState) {
    let side = if state.invader_velocity < 0.0 {
        Border::Left
    } else {
        Border::Right
    };
    let top = if state.invader_direction < 0.0 {
        Border::Divider
    } else {
        Border::Top
    };

    state.sprites.move_invaders(state.invader_velocity, 0.0);
    if !state.sprites.invaders_touch(side) {
        return;
    }

    state.invader_velocity = -state.invader_velocity;
    state
        .sprites
        .move_invaders(state.invader_velocity, state.invader_direction);
    if state.sprites.invaders_touch(top) {
        state.invader_direction = -state.invader_direction;
        state
            .sprites
            .move_invaders(state.invader_velocity, state.invader_direction);
    }
}

fn on_invader_destroyed(state: &mut GameState) {
    state.play(SoundEffect::InvaderDestroyed);
    state.live_invaders = state.live_invaders.saturating_sub(1);
    state.score += 1;

    if state.live_invaders == SPEED_UP_REMAINING {
        state.invader_velocity *= SPEED_UP_FACTOR;
        log::debug!("{} invaders left, swarm speeds up", SPEED_UP_REMAINING);
    } else if state.live_invaders == 0 {
        state.phase = GamePhase::GameOver;
        state.reveal_banner(Banner::GameWon);
        state.reveal_banner(Banner::Restart);
        log::info!("Swarm cleared at frame {}, score {}", state.frame, state.score);
    }
}

fn on_ship_hit(state: &mut GameState) {
    state.play(SoundEffect::ShipHit);
    let ship = state.sprites.ship_mut();
    ship.lose_life();
    let lives = ship.lives();
    log::debug!("Ship hit, {} lives left", lives);

    if lives == 0 {
        ship.set_enabled(false);
        state.phase = GamePhase::GameOver;
        state.reveal_banner(Banner::GameOver);
        state.reveal_banner(Banner::Restart);
        log::info!("Ship destroyed at frame {}, score {}", state.frame, state.score);
    }
}

/// Damage a wall one stage, destroying it on its last life
fn on_wall_hit(state: &mut GameState, index: usize) {
    state.play(SoundEffect::WallHit);
    let lives = state.sprites.get(index).lives();
    let texture = state.textures.wall_stage(lives.saturating_sub(1));

    let wall = state.sprites.get_mut(index);
    wall.lose_life();
    if lives > 1 {
        wall.change_texture(texture);
    } else {
        wall.park();
    }
}
