use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after this one
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Every line of three, rows first, then columns, then diagonals.
/// Lookups walk this order and stop at the first match.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The 3x3 grid, row-major:
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells
    pub fn from_cells(cells: [Option<Player>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Symbol at `index`, `None` when empty or out of range
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.cells
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// Board with `player` placed at `index`, if that cell exists and is empty
    pub fn with_move(&self, index: usize, player: Player) -> Option<Board> {
        if !self.is_empty_cell(index) {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Some(player);
        Some(next)
    }

    /// First completed line in `WIN_LINES` order, with its owner
    pub fn winner(&self) -> Option<(Player, [usize; 3])> {
        WIN_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            match self.cells[a] {
                Some(p) if self.cells[b] == Some(p) && self.cells[c] == Some(p) => Some((p, line)),
                _ => None,
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            let symbols: Vec<String> = (0..3)
                .map(|col| match self.cells[row * 3 + col] {
                    Some(p) => p.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", symbols.join(" | "))?;
        }
        Ok(())
    }
}
