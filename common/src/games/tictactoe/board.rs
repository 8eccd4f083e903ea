use super::types::{CELL_COUNT, Mark};

/// 3x3 grid, row-major: index 0 is top-left, 8 is bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from nine characters: `X`, `O`, anything else is empty.
    /// Whitespace is skipped so rows can be laid out visually.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let marks: Vec<Mark> = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                _ => Mark::Empty,
            })
            .collect();
        let cells: [Mark; CELL_COUNT] = marks.try_into().ok()?;
        Some(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Caller guarantees `index < CELL_COUNT`.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear_cell(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Number of marks placed so far.
    pub fn ply(&self) -> usize {
        CELL_COUNT - self.count(Mark::Empty)
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}
