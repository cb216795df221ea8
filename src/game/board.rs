use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELLS: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// 6×7 Connect Four grid.
///
/// Row 0 is the top, row 5 is the bottom. Cells are only ever written by
/// `drop_piece`, so a cell above an empty cell is always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Get a cell by flattened index `row * COLS + col`.
    /// Agrees with `get` for every position.
    pub fn get_index(&self, index: usize) -> Cell {
        self.cells[index / COLS][index % COLS]
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != Cell::Empty)
            .count()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Drop a piece in a column.
    ///
    /// Returns the landing row numbered 1 (bottom) to 6 (top), the convention
    /// the rendering layer uses for its drop animation.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<u8, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok((ROWS - row) as u8);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Scan every possible 4-in-a-row line and return the winner, if any.
    ///
    /// Cells are visited row-major; from each occupied cell the four line
    /// directions right, up, up-right and up-left are probed. The first
    /// uniform line found decides the winner.
    pub fn winner(&self) -> Option<super::Player> {
        const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (-1, 0), (-1, 1), (-1, -1)];

        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                if cell == Cell::Empty {
                    continue;
                }

                for (d_row, d_col) in DIRECTIONS {
                    if self.has_four_from(row, col, d_row, d_col, cell) {
                        return match cell {
                            Cell::One => Some(super::Player::One),
                            Cell::Two => Some(super::Player::Two),
                            Cell::Empty => unreachable!("empty cells are skipped"),
                        };
                    }
                }
            }
        }

        None
    }

    fn has_four_from(&self, row: usize, col: usize, d_row: i32, d_col: i32, cell: Cell) -> bool {
        for i in 1..4 {
            let r = row as i32 + d_row * i;
            let c = col as i32 + d_col * i;

            if r < 0 || r >= ROWS as i32 || c < 0 || c >= COLS as i32 {
                return false;
            }
            if self.cells[r as usize][c as usize] != cell {
                return false;
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
