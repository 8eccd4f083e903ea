mod board;
mod error;
mod evaluator;
mod game_controller;
mod renderer;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use error::GameError;
pub use evaluator::{Evaluation, WIN_SCORE, calculate_minimax_move, evaluate};
pub use game_controller::{GameController, MatchPhase, MatchScore, MatchSettings, TurnTicket};
pub use renderer::Renderer;
pub use session::{GameSession, SessionCommand};
pub use types::{CELL_COUNT, ColorTag, Mark, Mode, RoundOutcome, Side, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate_round, has_line};
