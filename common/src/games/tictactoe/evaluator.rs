use super::board::{Board, get_available_moves};
use super::types::Side;
use super::win_detector::has_line;

/// Magnitude of a decided game. Positive values favour player two.
pub const WIN_SCORE: i32 = 10;

/// Game-theoretic value of a position, always from player two's point of view,
/// together with the first cell that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i32,
    pub best_index: Option<usize>,
}

impl Evaluation {
    fn terminal(value: i32) -> Self {
        Self {
            value,
            best_index: None,
        }
    }
}

/// Exhaustive minimax. Terminal positions are judged before `side_to_move`
/// is looked at, so a finished board yields no move whoever is nominally on turn.
pub fn evaluate(board: &Board, side_to_move: Side) -> Evaluation {
    let mut scratch = *board;
    minimax(&mut scratch, side_to_move)
}

pub fn calculate_minimax_move(board: &Board, side_to_move: Side) -> Option<usize> {
    evaluate(board, side_to_move).best_index
}

fn minimax(board: &mut Board, side_to_move: Side) -> Evaluation {
    if has_line(board, Side::PlayerOne.mark()) {
        return Evaluation::terminal(-WIN_SCORE);
    }
    if has_line(board, Side::PlayerTwo.mark()) {
        return Evaluation::terminal(WIN_SCORE);
    }
    if board.is_full() {
        return Evaluation::terminal(0);
    }

    let is_maximizing = side_to_move == Side::PlayerTwo;
    let mut best = Evaluation::terminal(if is_maximizing { i32::MIN } else { i32::MAX });

    for index in get_available_moves(board) {
        board.place(index, side_to_move.mark());
        let value = minimax(board, side_to_move.opponent()).value;
        board.clear_cell(index);

        // strict comparison keeps the lowest index among equal values
        let improves = if is_maximizing {
            value > best.value
        } else {
            value < best.value
        };
        if improves {
            best = Evaluation {
                value,
                best_index: Some(index),
            };
        }
    }

    best
}
