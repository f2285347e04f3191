//! Shape generation for sprite quads

use glam::Vec2;

use super::vertex::Vertex;
use crate::assets::TextureId;
use crate::sim::{Sprite, SpriteStore};

/// One textured quad, two triangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteQuad {
    pub texture: TextureId,
    pub vertices: [Vertex; 6],
}

/// Generate the quad covering a sprite's bounding box.
///
/// Returns `None` for sprites without a texture; they exist for gameplay only.
pub fn sprite_quad(sprite: &Sprite) -> Option<SpriteQuad> {
    let texture = sprite.texture()?;
    let c = sprite.position();
    let h = sprite.half_extents();

    let bl = c + Vec2::new(-h.x, -h.y);
    let br = c + Vec2::new(h.x, -h.y);
    let tr = c + Vec2::new(h.x, h.y);
    let tl = c + Vec2::new(-h.x, h.y);

    let v_bl = Vertex::new(bl.x, bl.y, 0.0, 0.0);
    let v_br = Vertex::new(br.x, br.y, 1.0, 0.0);
    let v_tr = Vertex::new(tr.x, tr.y, 1.0, 1.0);
    let v_tl = Vertex::new(tl.x, tl.y, 0.0, 1.0);

    Some(SpriteQuad {
        texture,
        vertices: [v_bl, v_br, v_tr, v_tr, v_tl, v_bl],
    })
}

/// Quads for every enabled, visible sprite in store order
pub fn draw_list(store: &SpriteStore) -> Vec<SpriteQuad> {
    store
        .iter()
        .filter(|s| s.is_enabled())
        .filter_map(sprite_quad)
        .collect()
}

/// Flatten quads into one vertex buffer
pub fn flatten(quads: &[SpriteQuad]) -> Vec<Vertex> {
    quads.iter().flat_map(|q| q.vertices).collect()
}
