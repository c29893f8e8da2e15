use crate::collision::Rect;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        in_bounds(self, bounds)
    }
}

/// Logical grid dimensions, in cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Returns true iff `0 <= x < width` and `0 <= y < height`.
#[must_use]
pub fn in_bounds(cell: Cell, bounds: GridSize) -> bool {
    cell.x >= 0
        && cell.y >= 0
        && cell.x < i32::from(bounds.width)
        && cell.y < i32::from(bounds.height)
}

/// Grid dimensions together with the pixel size of one cell.
///
/// Bridges grid cells to the continuous coordinate space used by
/// [`Rect`]: cell `(x, y)` covers the square starting at
/// `(x * cell_size, y * cell_size)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridGeometry {
    pub size: GridSize,
    pub cell_size_px: u16,
}

impl GridGeometry {
    #[must_use]
    pub fn new(size: GridSize, cell_size_px: u16) -> Self {
        Self { size, cell_size_px }
    }

    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        in_bounds(cell, self.size)
    }

    /// Pixel dimensions of the whole play field.
    #[must_use]
    pub fn pixel_size(self) -> (u32, u32) {
        let cell = u32::from(self.cell_size_px);
        (
            u32::from(self.size.width) * cell,
            u32::from(self.size.height) * cell,
        )
    }

    /// Pixel-space rectangle covered by `cell`.
    #[must_use]
    pub fn cell_rect(self, cell: Cell) -> Rect {
        let side = f64::from(self.cell_size_px);
        Rect::new(f64::from(cell.x) * side, f64::from(cell.y) * side, side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, GridGeometry, GridSize, in_bounds};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 15,
    };

    #[test]
    fn corners_are_in_bounds() {
        assert!(in_bounds(Cell::new(0, 0), BOUNDS));
        assert!(in_bounds(Cell::new(19, 0), BOUNDS));
        assert!(in_bounds(Cell::new(0, 14), BOUNDS));
        assert!(in_bounds(Cell::new(19, 14), BOUNDS));
    }

    #[test]
    fn cells_past_any_edge_are_out_of_bounds() {
        assert!(!in_bounds(Cell::new(-1, 5), BOUNDS));
        assert!(!in_bounds(Cell::new(20, 5), BOUNDS));
        assert!(!in_bounds(Cell::new(5, -1), BOUNDS));
        assert!(!in_bounds(Cell::new(5, 15), BOUNDS));
    }

    #[test]
    fn geometry_maps_cells_to_pixel_squares() {
        let geometry = GridGeometry::new(BOUNDS, 20);

        assert_eq!(geometry.pixel_size(), (400, 300));

        let rect = geometry.cell_rect(Cell::new(3, 2));
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (60.0, 40.0, 20.0, 20.0));
    }

    #[test]
    fn adjacent_cell_rects_touch_without_overlapping() {
        let geometry = GridGeometry::new(BOUNDS, 20);
        let a = geometry.cell_rect(Cell::new(4, 4));
        let b = geometry.cell_rect(Cell::new(5, 4));

        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&a));
    }
}
