//! The sprite: one positioned, sized, enable-able game object

use glam::Vec2;

use super::collision::{aabb_overlap, column_aligned};
use crate::assets::TextureId;
use crate::consts::PARK_OFFSET;

/// A sprite-backed game object.
///
/// The bounding box is always axis-aligned and centred on `pos`; the half
/// extents are fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pos: Vec2,
    half: Vec2,
    /// `None` for invisible gameplay-only sprites
    texture: Option<TextureId>,
    enabled: bool,
    lives: u32,
}

impl Sprite {
    /// Create an enabled sprite with one life
    pub fn new(texture: Option<TextureId>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            half: Vec2::new(width * 0.5, height * 0.5),
            texture,
            enabled: true,
            lives: 1,
        }
    }

    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Lose one life; stays at zero once there
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.half
    }

    #[inline]
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn change_texture(&mut self, texture: TextureId) {
        self.texture = Some(texture);
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos += Vec2::new(dx, dy);
    }

    /// Place this sprite at `other`'s position plus an offset
    pub fn set_relative(&mut self, other: &Sprite, dx: f32, dy: f32) {
        self.pos = other.pos + Vec2::new(dx, dy);
    }

    /// Disable and move off the playfield
    pub fn park(&mut self) {
        self.enabled = false;
        self.translate(PARK_OFFSET, 0.0);
    }

    /// Enable and bring back from the parking area
    pub fn unpark(&mut self) {
        self.enabled = true;
        self.translate(-PARK_OFFSET, 0.0);
    }

    pub fn collides_with(&self, other: &Sprite) -> bool {
        aabb_overlap(self.pos, self.half, other.pos, other.half)
    }

    /// True if `other` is within this sprite's column, widened by `margin`
    pub fn is_above(&self, other: &Sprite, margin: f32) -> bool {
        column_aligned(self.pos, self.half, other.pos, margin)
    }
}
