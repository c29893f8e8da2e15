use rand::Rng;

use crate::grid::{Cell, GridSize};

/// The single target cell on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Cell,
}

impl Fruit {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Moves the fruit to a free cell. Returns `false` and leaves the fruit
    /// where it is when the board has no free cell.
    pub fn relocate<'a, R, I>(&mut self, rng: &mut R, bounds: GridSize, occupied: I) -> bool
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell>,
    {
        match sample(rng, &free_cells(bounds, occupied)) {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => false,
        }
    }
}

/// Collects every cell not in `occupied`, ordered by x then y.
#[must_use]
pub fn free_cells<'a, I>(bounds: GridSize, occupied: I) -> Vec<Cell>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let occupied: Vec<Cell> = occupied.into_iter().copied().collect();
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(occupied.len()));

    for x in 0..i32::from(bounds.width) {
        for y in 0..i32::from(bounds.height) {
            let cell = Cell { x, y };
            if !occupied.contains(&cell) {
                candidates.push(cell);
            }
        }
    }

    candidates
}

/// Picks a uniformly random free cell, or returns `current` when the grid is
/// fully occupied.
#[must_use]
pub fn place_fruit<'a, R, I>(rng: &mut R, bounds: GridSize, occupied: I, current: Cell) -> Cell
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Cell>,
{
    sample(rng, &free_cells(bounds, occupied)).unwrap_or(current)
}

fn sample<R: Rng + ?Sized>(rng: &mut R, candidates: &[Cell]) -> Option<Cell> {
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Fruit, free_cells, place_fruit};
    use crate::grid::{Cell, GridSize};

    const SMALL: GridSize = GridSize {
        width: 3,
        height: 2,
    };

    #[test]
    fn free_cells_are_ordered_by_column_then_row() {
        let occupied = [Cell::new(1, 0)];

        let cells = free_cells(SMALL, &occupied);

        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(2, 0),
                Cell::new(2, 1),
            ]
        );
    }

    #[test]
    fn placement_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let body = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)];
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let cell = place_fruit(&mut rng, bounds, &body, Cell::new(0, 0));
            assert!(!body.contains(&cell));
            assert!(cell.is_within_bounds(bounds));
        }
    }

    #[test]
    fn placement_is_reproducible_for_a_fixed_seed() {
        let body = [Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)];
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        let first = place_fruit(&mut StdRng::seed_from_u64(42), bounds, &body, Cell::new(0, 0));
        let second = place_fruit(&mut StdRng::seed_from_u64(42), bounds, &body, Cell::new(0, 0));

        assert_eq!(first, second);
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(3);
        let occupied = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(2, 1),
        ];

        let cell = place_fruit(&mut rng, SMALL, &occupied, Cell::new(0, 0));

        assert_eq!(cell, Cell::new(1, 1));
    }

    #[test]
    fn full_board_keeps_current_fruit() {
        let mut rng = StdRng::seed_from_u64(1);
        let occupied = free_cells(SMALL, std::iter::empty());
        let mut fruit = Fruit::new(Cell::new(2, 1));

        assert!(!fruit.relocate(&mut rng, SMALL, &occupied));
        assert_eq!(fruit.position, Cell::new(2, 1));
    }
}
