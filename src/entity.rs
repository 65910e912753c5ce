//! Base movable/drawable body shared by every entity kind.

/// Per-side pixel shrink applied to the sprite box before hit-testing, so
/// transparent sprite padding does not count as contact.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Inset {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Inset {
    pub const NONE: Inset = Inset { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 };

    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    pub const fn uniform(px: f64) -> Self {
        Self::new(px, px, px, px)
    }
}

/// Axis-aligned rectangle in world pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical speed, positive = upward.
    pub speed_y: f64,
    /// Draw mirrored. Character sprites face right, so for the character this
    /// means facing left; enemy sprites face left and mirror to face right.
    pub other_direction: bool,
    pub offset: Inset,
}

impl Entity {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed_y: 0.0,
            other_direction: false,
            offset: Inset::NONE,
        }
    }

    pub fn with_offset(mut self, offset: Inset) -> Self {
        self.offset = offset;
        self
    }

    pub fn facing_left(mut self, left: bool) -> Self {
        self.other_direction = left;
        self
    }

    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height].iter().all(|v| v.is_finite())
    }

    /// Sprite box shrunk by the inset.
    pub fn hitbox(&self) -> Rect {
        Rect {
            left: self.x + self.offset.left,
            top: self.y + self.offset.top,
            right: self.x + self.width - self.offset.right,
            bottom: self.y + self.height - self.offset.bottom,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Horizontal gap between the two hitboxes; 0 when they overlap on x.
    pub fn gap_x(&self, other: &Entity) -> f64 {
        let a = self.hitbox();
        let b = other.hitbox();
        (b.left - a.right).max(a.left - b.right).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hitbox_applies_inset() {
        let e = Entity::new(10.0, 20.0, 100.0, 50.0).with_offset(Inset::new(5.0, 6.0, 7.0, 8.0));
        let r = e.hitbox();
        assert_eq!(r.left, 17.0);
        assert_eq!(r.top, 25.0);
        assert_eq!(r.right, 102.0);
        assert_eq!(r.bottom, 64.0);
        assert_eq!(r.width(), 85.0);
    }

    #[test]
    fn gap_is_symmetric_and_zero_on_overlap() {
        let a = Entity::new(0.0, 0.0, 10.0, 10.0);
        let b = Entity::new(30.0, 0.0, 10.0, 10.0);
        assert_eq!(a.gap_x(&b), 20.0);
        assert_eq!(b.gap_x(&a), 20.0);
        let c = Entity::new(5.0, 0.0, 10.0, 10.0);
        assert_eq!(a.gap_x(&c), 0.0);
    }
}
