use crate::error::MoveError;

use super::PlayerId;

/// Number of contiguous pieces needed to win.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `height` x `width` grid. Row 0 is the bottom row; pieces fall towards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Callers guarantee both dimensions are non-zero
    /// and that the cell count fits in memory.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Create an empty board, or `None` if `height * width` cells cannot be
    /// counted or allocated.
    pub fn try_new(height: usize, width: usize) -> Option<Self> {
        let len = height.checked_mul(width)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, Cell::Empty);
        Some(Board {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row `height - 1` is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn is_player(&self, row: usize, col: usize, player: PlayerId) -> bool {
        self.get(row, col) == Cell::Occupied(player)
    }

    /// A move into `col` is valid when the top cell of that column is empty.
    /// Columns outside the board are never valid.
    pub fn is_valid_move(&self, col: usize) -> bool {
        match self.height.checked_sub(1) {
            Some(top) if col < self.width => self.get(top, col).is_empty(),
            _ => false,
        }
    }

    /// Lowest empty row of `col`, scanning up from the bottom.
    pub fn next_open_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::OutOfBounds {
                column: col,
                width: self.width,
            });
        }

        (0..self.height)
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(MoveError::ColumnFull { column: col })
    }

    /// Drop a piece for `player` in a column, returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        let row = self.next_open_row(col)?;
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Occupied(player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Whether `player` has four in a row anywhere on the board.
    ///
    /// Scans the whole grid in four orientations. A dimension smaller than
    /// [`RUN_LENGTH`] leaves the matching ranges empty.
    pub fn has_run(&self, player: PlayerId) -> bool {
        self.has_horizontal_run(player)
            || self.has_vertical_run(player)
            || self.has_falling_run(player)
            || self.has_rising_run(player)
    }

    // Number of start positions along a dimension for a run of four.
    fn starts(len: usize) -> usize {
        len.saturating_sub(RUN_LENGTH - 1)
    }

    fn has_horizontal_run(&self, player: PlayerId) -> bool {
        for c in 0..Self::starts(self.width) {
            for r in 0..self.height {
                if (0..RUN_LENGTH).all(|k| self.is_player(r, c + k, player)) {
                    return true;
                }
            }
        }
        false
    }

    fn has_vertical_run(&self, player: PlayerId) -> bool {
        for c in 0..self.width {
            for r in 0..Self::starts(self.height) {
                if (0..RUN_LENGTH).all(|k| self.is_player(r + k, c, player)) {
                    return true;
                }
            }
        }
        false
    }

    /// Top-left to bottom-right (\), anchored at the top-left cell.
    fn has_falling_run(&self, player: PlayerId) -> bool {
        for c in 0..Self::starts(self.width) {
            for r in (RUN_LENGTH - 1)..self.height {
                if (0..RUN_LENGTH).all(|k| self.is_player(r - k, c + k, player)) {
                    return true;
                }
            }
        }
        false
    }

    /// Bottom-left to top-right (/), anchored at the bottom-left cell.
    fn has_rising_run(&self, player: PlayerId) -> bool {
        for c in 0..Self::starts(self.width) {
            for r in 0..Self::starts(self.height) {
                if (0..RUN_LENGTH).all(|k| self.is_player(r + k, c + k, player)) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(6, 7)
    }
}
