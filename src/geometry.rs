//! Axis-aligned bounding boxes.
//!
//! Boxes never rotate.  `(x, y)` is the top-left corner in pixels, with y
//! growing downwards.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Pin the box inside `[0, width] × [0, height]`, one axis at a time.
    pub fn clamp_within(&self, width: f32, height: f32) -> Rect {
        Rect {
            x: clamp_axis(self.x, self.width, width),
            y: clamp_axis(self.y, self.height, height),
            ..*self
        }
    }
}

fn clamp_axis(pos: f32, size: f32, limit: f32) -> f32 {
    if pos < 0.0 {
        0.0
    } else if pos > limit - size {
        limit - size
    } else {
        pos
    }
}

/// Edge-based overlap test.
///
/// Two boxes overlap unless one's right/bottom edge is at or before the
/// other's left/top edge.  The far side is inclusive (`x > r2`), so a box
/// starting exactly on another's right edge still counts as a hit.
#[allow(clippy::too_many_arguments)]
pub fn collides(x: f32, y: f32, r: f32, b: f32, x2: f32, y2: f32, r2: f32, b2: f32) -> bool {
    !(r <= x2 || x > r2 || b <= y2 || y > b2)
}

pub fn box_collides(a: &Rect, b: &Rect) -> bool {
    collides(a.x, a.y, a.right(), a.bottom(), b.x, b.y, b.right(), b.bottom())
}
