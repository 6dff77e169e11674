/// Cell represents the state of a single grid position.
/// Position is implied by the cell's slot in the grid's row-major storage.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Next state under B3/S23 given the live Moore neighbor count:
    /// 2 neighbors keeps the current state, 3 neighbors is alive, anything else is dead.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match neighbors {
            2 => self,
            3 => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
