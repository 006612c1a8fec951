//! Collision detection
//!
//! Everything in the run is an axis-aligned box. Sprites are drawn larger than
//! they collide: the hitboxes are inset so near misses feel fair.

use super::state::{Dino, Obstacle};

/// Dino hitbox insets (sprite-relative)
pub const DINO_INSET_X: f32 = 8.0;
pub const DINO_INSET_TOP: f32 = 5.0;
pub const DINO_INSET_BOTTOM: f32 = 5.0;
/// Obstacle hitbox inset on every side
pub const OBSTACLE_INSET: f32 = 2.0;

/// Axis-aligned rectangle in canvas units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by the given amounts on each side
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: self.x + left,
            y: self.y + top,
            width: self.width - left - right,
            height: self.height - top - bottom,
        }
    }

    /// Open-interval overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Collision box for the dino in its current pose
pub fn dino_hitbox(dino: &Dino) -> Rect {
    dino.bounds()
        .inset(DINO_INSET_X, DINO_INSET_TOP, DINO_INSET_X, DINO_INSET_BOTTOM)
}

/// Collision box for an obstacle
pub fn obstacle_hitbox(obstacle: &Obstacle) -> Rect {
    obstacle
        .bounds()
        .inset(OBSTACLE_INSET, OBSTACLE_INSET, OBSTACLE_INSET, OBSTACLE_INSET)
}

/// Index of the first obstacle the dino runs into, if any.
///
/// Stops at the first hit; later obstacles are not examined.
pub fn first_hit(dino: &Dino, obstacles: &[Obstacle]) -> Option<usize> {
    let hitbox = dino_hitbox(dino);
    obstacles
        .iter()
        .position(|obstacle| hitbox.overlaps(&obstacle_hitbox(obstacle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_overlaps_itself() {
        let r = Rect::new(3.0, 4.0, 10.0, 12.0);
        assert!(r.overlaps(&r));
    }

    #[test]
    fn test_disjoint_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_dino_hitbox_insets() {
        let dino = Dino::new();
        let hb = dino_hitbox(&dino);
        assert_eq!(hb, Rect::new(DINO_X + 8.0, DINO_GROUND_Y + 5.0, 34.0, 35.0));
    }

    #[test]
    fn test_cactus_in_front_of_dino_hits() {
        let dino = Dino::new();
        let cactus = Obstacle::cactus(DINO_X + 20.0);
        assert_eq!(first_hit(&dino, &[cactus]), Some(0));
    }

    #[test]
    fn test_low_bird_passes_over_standing_dino() {
        let dino = Dino::new();
        let bird = Obstacle::bird(DINO_X, BIRD_LANES[0], 0.0, false);
        assert_eq!(first_hit(&dino, &[bird]), None);
    }

    #[test]
    fn test_first_hit_short_circuits_in_order() {
        let dino = Dino::new();
        let far = Obstacle::cactus(600.0);
        let near = Obstacle::cactus(DINO_X);
        let also_near = Obstacle::cactus(DINO_X + 10.0);
        assert_eq!(first_hit(&dino, &[far, near, also_near]), Some(1));
    }

    #[test]
    fn test_sprite_touching_but_hitbox_clear() {
        let dino = Dino::new();
        // Sprite edges overlap by 5 units but the insets keep hitboxes apart
        let cactus = Obstacle::cactus(DINO_X + DINO_WIDTH - 5.0);
        assert_eq!(first_hit(&dino, &[cactus]), None);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..200.0, 0.5f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn overlap_is_reflexive(a in rect_strategy()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn separated_on_x_never_overlap(a in rect_strategy(), gap in 0.0f32..100.0) {
            let b = Rect::new(a.right() + gap, a.y, a.width, a.height);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
