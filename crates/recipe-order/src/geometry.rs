//! Collision Geometry
//!
//! Nearest-center collision between the pointer and measured drop targets.

/// Viewport coordinates in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A measured droppable element
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    pub id: String,
    pub rect: Rect,
}

impl DropTarget {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self { id: id.into(), rect }
    }
}

/// Target whose center is nearest to `at`; the earliest target wins ties
pub fn closest_center<'a, I>(at: Point, targets: I) -> Option<&'a DropTarget>
where
    I: IntoIterator<Item = &'a DropTarget>,
{
    let mut best: Option<(&'a DropTarget, f64)> = None;
    for target in targets {
        let distance = at.distance_to(target.rect.center());
        match best {
            Some((_, nearest)) if distance >= nearest => {}
            _ => best = Some((target, distance)),
        }
    }
    best.map(|(target, _)| target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<DropTarget> {
        // Two columns of 100x100 cards with a 20px gap
        vec![
            DropTarget::new("a", Rect::new(0.0, 0.0, 100.0, 100.0)),
            DropTarget::new("b", Rect::new(120.0, 0.0, 100.0, 100.0)),
            DropTarget::new("c", Rect::new(0.0, 120.0, 100.0, 100.0)),
            DropTarget::new("d", Rect::new(120.0, 120.0, 100.0, 100.0)),
        ]
    }

    #[test]
    fn test_picks_nearest_center() {
        let targets = grid();
        let hit = closest_center(Point::new(160.0, 180.0), &targets);
        assert_eq!(hit.map(|t| t.id.as_str()), Some("d"));
    }

    #[test]
    fn test_point_in_gap_resolves_deterministically() {
        let targets = grid();
        // Equidistant from a and b: first in order wins
        let hit = closest_center(Point::new(110.0, 50.0), &targets);
        assert_eq!(hit.map(|t| t.id.as_str()), Some("a"));
    }

    #[test]
    fn test_no_targets() {
        assert!(closest_center(Point::new(0.0, 0.0), &[]).is_none());
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(Rect::new(10.0, 20.0, 30.0, 40.0).center(), Point::new(25.0, 40.0));
    }
}
