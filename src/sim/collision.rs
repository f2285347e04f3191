//! Axis-aligned overlap tests
//!
//! Every sprite is a box centred on its position. Boxes that only touch along
//! an edge do not collide.

use glam::Vec2;

/// True if two centred boxes overlap on both axes
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, b_half: Vec2) -> bool {
    let d = (b_pos - a_pos).abs();
    d.x < a_half.x + b_half.x && d.y < a_half.y + b_half.y
}

/// True if `b` lies within `a`'s column, widened by `margin`.
///
/// Only the horizontal axis is considered; vertical distance is ignored.
#[inline]
pub fn column_aligned(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, margin: f32) -> bool {
    (b_pos.x - a_pos.x).abs() < a_half.x + margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_and_separation() {
        let half = Vec2::splat(0.125);
        assert!(aabb_overlap(Vec2::ZERO, half, Vec2::new(0.2, 0.1), half));
        assert!(!aabb_overlap(Vec2::ZERO, half, Vec2::new(0.3, 0.0), half));
        assert!(!aabb_overlap(Vec2::ZERO, half, Vec2::new(0.0, -0.3), half));
    }

    #[test]
    fn test_edge_touching_is_not_collision() {
        let half = Vec2::splat(0.5);
        assert!(!aabb_overlap(Vec2::ZERO, half, Vec2::new(1.0, 0.0), half));
        assert!(!aabb_overlap(Vec2::ZERO, half, Vec2::new(0.0, 1.0), half));
    }

    #[test]
    fn test_column_alignment_ignores_height() {
        let half = Vec2::splat(0.125);
        assert!(column_aligned(Vec2::new(0.0, 2.5), half, Vec2::new(0.3, -2.75), 0.3));
        assert!(!column_aligned(Vec2::new(0.0, 2.5), half, Vec2::new(0.5, -2.75), 0.3));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -5.0f32..5.0, ay in -5.0f32..5.0,
            bx in -5.0f32..5.0, by in -5.0f32..5.0,
            aw in 0.01f32..3.0, ah in 0.01f32..3.0,
            bw in 0.01f32..3.0, bh in 0.01f32..3.0,
        ) {
            let (a, ah2) = (Vec2::new(ax, ay), Vec2::new(aw, ah));
            let (b, bh2) = (Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(aabb_overlap(a, ah2, b, bh2), aabb_overlap(b, bh2, a, ah2));
        }

        #[test]
        fn prop_box_overlaps_itself(
            x in -5.0f32..5.0, y in -5.0f32..5.0,
            w in 0.01f32..3.0, h in 0.01f32..3.0,
        ) {
            let (p, half) = (Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!(aabb_overlap(p, half, p, half));
        }
    }
}
