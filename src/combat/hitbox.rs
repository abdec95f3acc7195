//! Hit geometry
//!
//! Places a skill's hit region in world space in front of the caster.

use serde::{Deserialize, Serialize};

use crate::data::{HitRegion, Knockback};

/// World position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Horizontal facing of the caster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn is_right(&self) -> bool {
        matches!(self, Facing::Right)
    }
}

/// Axis-aligned rectangle; `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Hit rectangle for a region, mirrored when facing left and centered
/// vertically on the caster's offset line
pub fn hit_rect(region: &HitRegion, caster: Point, facing: Facing) -> Rect {
    let x = match facing {
        Facing::Right => caster.x + region.offset_x,
        Facing::Left => caster.x - region.offset_x - region.width,
    };
    let y = caster.y + region.offset_y - region.height / 2.0;

    Rect { x, y, width: region.width, height: region.height }
}

/// Knockback pointing away from the caster
pub fn directed_knockback(knockback: Knockback, facing: Facing) -> Knockback {
    match facing {
        Facing::Right => knockback,
        Facing::Left => Knockback { x: -knockback.x, y: knockback.y },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGION: HitRegion = HitRegion {
        width: 80.0,
        height: 60.0,
        offset_x: 50.0,
        offset_y: 0.0,
    };

    #[test]
    fn test_hit_rect_facing_right() {
        let rect = hit_rect(&REGION, Point::new(100.0, 200.0), Facing::Right);
        assert_eq!(rect, Rect { x: 150.0, y: 170.0, width: 80.0, height: 60.0 });
    }

    #[test]
    fn test_hit_rect_facing_left_mirrors() {
        let rect = hit_rect(&REGION, Point::new(100.0, 200.0), Facing::Left);
        assert_eq!(rect, Rect { x: -30.0, y: 170.0, width: 80.0, height: 60.0 });
        assert!(rect.right() < 100.0);
    }

    #[test]
    fn test_rect_contains_and_intersects() {
        let rect = Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
        assert!(rect.contains(Point::new(5.0, 5.0)));
        assert!(!rect.contains(Point::new(11.0, 5.0)));
        assert!(rect.intersects(&Rect { x: 9.0, y: 9.0, width: 5.0, height: 5.0 }));
        assert!(!rect.intersects(&Rect { x: 10.0, y: 0.0, width: 5.0, height: 5.0 }));
    }

    #[test]
    fn test_knockback_mirrors_with_facing() {
        let kb = Knockback { x: 150.0, y: -100.0 };
        assert_eq!(directed_knockback(kb, Facing::Left), Knockback { x: -150.0, y: -100.0 });
        assert_eq!(directed_knockback(kb, Facing::Right), kb);
    }
}
