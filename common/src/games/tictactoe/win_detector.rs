use super::board::Board;
use super::types::{Mark, RoundOutcome, WinningLine};

/// Rows, then columns, then the two diagonals. Scan order decides which line
/// is reported when a board holds more than one.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new(0, 1, 2),
    WinningLine::new(3, 4, 5),
    WinningLine::new(6, 7, 8),
    WinningLine::new(0, 3, 6),
    WinningLine::new(1, 4, 7),
    WinningLine::new(2, 5, 8),
    WinningLine::new(0, 4, 8),
    WinningLine::new(2, 4, 6),
];

fn line_mark(board: &Board, line: &WinningLine) -> Option<Mark> {
    let [a, b, c] = line.cells();
    let first = board.get(a)?;
    if first != Mark::Empty && board.get(b) == Some(first) && board.get(c) == Some(first) {
        Some(first)
    } else {
        None
    }
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinningLine)> {
    WINNING_LINES
        .iter()
        .find_map(|line| line_mark(board, line).map(|mark| (mark, *line)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn has_line(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line_mark(board, line) == Some(mark))
}

pub fn evaluate_round(board: &Board) -> RoundOutcome {
    if let Some((mark, line)) = check_win_with_line(board)
        && let Some(side) = mark.side()
    {
        return RoundOutcome::Win(side, line);
    }

    if board.is_full() {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}
