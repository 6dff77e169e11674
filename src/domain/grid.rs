use super::{Cell, LifeError, Pattern};
use rand::Rng;
use rayon::prelude::*;

/// Relative `(column, row)` positions of the Moore neighborhood
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid owns the state of every cell on a bounded board.
/// Positions off the board read as permanently dead, there is no wrapping.
///
/// Cells are stored row-major: `(column, row)` lives at `column + row * columns`.
/// A second buffer receives each generation and is swapped in afterwards,
/// so every cell is evaluated against the pre-step state.
#[derive(Clone, Debug)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(columns: usize, rows: usize) -> Result<Self, LifeError> {
        if columns == 0 || rows == 0 {
            return Err(LifeError::InvalidDimension { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            cells: vec![Cell::Dead; columns * rows],
            next: vec![Cell::Dead; columns * rows],
        })
    }

    /// Create a grid where each cell is independently alive with `probability`
    pub fn random<R: Rng>(
        columns: usize,
        rows: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, LifeError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(LifeError::InvalidProbability(probability));
        }
        let mut grid = Self::new(columns, rows)?;
        grid.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(probability)));
        Ok(grid)
    }

    /// Get grid dimensions as `(columns, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    const fn index(&self, column: usize, row: usize) -> usize {
        column + row * self.columns
    }

    /// Storage index for signed coordinates, `None` when off the board
    fn checked_index(&self, column: isize, row: isize) -> Option<usize> {
        let column = usize::try_from(column).ok().filter(|&c| c < self.columns)?;
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        Some(self.index(column, row))
    }

    /// Whether the cell is alive; anything off the board is dead
    pub fn is_alive(&self, column: isize, row: isize) -> bool {
        self.checked_index(column, row)
            .is_some_and(|idx| self.cells[idx].is_alive())
    }

    /// Set a single cell (used for painting and test setup)
    pub fn set_alive(&mut self, column: isize, row: isize, alive: bool) -> Result<(), LifeError> {
        let idx = self
            .checked_index(column, row)
            .ok_or(LifeError::OutOfBounds { column, row })?;
        self.cells[idx] = Cell::from_alive(alive);
        Ok(())
    }

    /// Live cells among the 8 surrounding positions
    pub fn live_neighbors(&self, column: usize, row: usize) -> u8 {
        count_live_neighbors(&self.cells, self.columns, self.rows, column, row)
    }

    /// Number of live cells on the board
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        let (columns, rows) = (self.columns, self.rows);
        let current = &self.cells;
        self.next
            .chunks_mut(columns)
            .enumerate()
            .for_each(|(row, out)| evolve_row(current, columns, rows, row, out));
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Same generation as [`Grid::step`], rows computed with rayon.
    /// Worth it for grids > 100x100
    pub fn step_parallel(&mut self) {
        let (columns, rows) = (self.columns, self.rows);
        let current = &self.cells;
        self.next
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(row, out)| evolve_row(current, columns, rows, row, out));
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Set every cell covered by `pattern` anchored at `(anchor_column, anchor_row)` alive.
    ///
    /// All-or-nothing: if any covered cell is off the board the grid is left untouched
    /// and the first offending coordinate is reported.
    pub fn stamp_pattern(
        &mut self,
        anchor_column: isize,
        anchor_row: isize,
        pattern: &Pattern,
    ) -> Result<(), LifeError> {
        let indices = pattern
            .cells_at(anchor_column, anchor_row)
            .map(|(column, row)| {
                self.checked_index(column, row)
                    .ok_or(LifeError::OutOfBounds { column, row })
            })
            .collect::<Result<Vec<_>, _>>()?;

        indices.into_iter().for_each(|idx| self.cells[idx] = Cell::Alive);
        Ok(())
    }

    /// Row-major `(column, row, alive)` snapshot for rendering.
    /// Call again (or clone the iterator) to restart.
    pub fn cell_state(&self) -> impl Iterator<Item = (usize, usize, bool)> + Clone + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % columns, idx / columns, cell.is_alive()))
    }
}

impl PartialEq for Grid {
    /// The scratch buffer holds stale data and is not part of the state
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.rows == other.rows && self.cells == other.cells
    }
}

impl Eq for Grid {}

fn count_live_neighbors(cells: &[Cell], columns: usize, rows: usize, column: usize, row: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dc, dr)| {
            let c = column.checked_add_signed(dc).filter(|&c| c < columns)?;
            let r = row.checked_add_signed(dr).filter(|&r| r < rows)?;
            Some(cells[c + r * columns])
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Write the next state of one row into `out`, reading only from `cells`
fn evolve_row(cells: &[Cell], columns: usize, rows: usize, row: usize, out: &mut [Cell]) {
    out.iter_mut().enumerate().for_each(|(column, next)| {
        let neighbors = count_live_neighbors(cells, columns, rows, column, row);
        *next = cells[column + row * columns].evolve(neighbors);
    });
}
