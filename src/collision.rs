use crate::grid::Cell;

/// Returns true iff `candidate` equals any cell in `segments`.
///
/// Callers pass the pre-move body, tail included, so a head moving into the
/// cell the tail is about to vacate still counts as a collision.
#[must_use]
pub fn self_collision<'a, I>(candidate: Cell, segments: I) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    segments.into_iter().any(|segment| *segment == candidate)
}

/// Axis-aligned overlap test with strict inequalities: touching edges do not
/// overlap.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn rect_overlap(x1: f64, y1: f64, w1: f64, h1: f64, x2: f64, y2: f64, w2: f64, h2: f64) -> bool {
    x1 < x2 + w2 && x1 + w1 > x2 && y1 < y2 + h2 && y1 + h1 > y2
}

/// Axis-aligned rectangle in continuous (pixel) coordinates.
///
/// Widths and heights are expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rect_overlap(
            self.x, self.y, self.w, self.h, other.x, other.y, other.w, other.h,
        )
    }

    /// Returns true when the rectangle lies fully inside `[0, width] x [0, height]`.
    #[must_use]
    pub fn is_within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, rect_overlap, self_collision};
    use crate::grid::Cell;

    #[test]
    fn candidate_on_body_collides() {
        let body = [Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)];

        assert!(self_collision(Cell::new(1, 2), &body));
        assert!(!self_collision(Cell::new(3, 2), &body));
    }

    #[test]
    fn candidate_on_tail_collides() {
        let body = [Cell::new(2, 2), Cell::new(2, 3), Cell::new(1, 3), Cell::new(1, 2)];

        assert!(self_collision(Cell::new(1, 2), &body));
    }

    #[test]
    fn overlapping_rects_collide() {
        assert!(rect_overlap(0.0, 0.0, 20.0, 20.0, 19.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn touching_rects_do_not_collide() {
        assert!(!rect_overlap(0.0, 0.0, 20.0, 20.0, 20.0, 0.0, 20.0, 20.0));
        assert!(!rect_overlap(0.0, 0.0, 20.0, 20.0, 0.0, 20.0, 20.0, 20.0));
    }

    #[test]
    fn overlap_is_symmetric() {
        let player = Rect::new(0.0, 0.0, 20.0, 20.0);
        let fruit = Rect::new(10.0, 15.0, 20.0, 20.0);

        assert!(player.overlaps(&fruit));
        assert!(fruit.overlaps(&player));
    }

    #[test]
    fn rect_inside_screen() {
        let screen = (640.0, 480.0);

        assert!(Rect::new(0.0, 0.0, 20.0, 20.0).is_within(screen.0, screen.1));
        assert!(Rect::new(620.0, 460.0, 20.0, 20.0).is_within(screen.0, screen.1));
        assert!(!Rect::new(621.0, 0.0, 20.0, 20.0).is_within(screen.0, screen.1));
        assert!(!Rect::new(0.0, -1.0, 20.0, 20.0).is_within(screen.0, screen.1));
    }
}
