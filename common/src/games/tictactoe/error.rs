use std::fmt;

/// Why a request was turned down. Every rejection leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    MatchNotStarted,
    RoundNotInProgress,
    IndexOutOfRange(usize),
    CellOccupied(usize),
    NotYourTurn,
    StaleComputerTurn,
    NoMoveAvailable,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MatchNotStarted => write!(f, "No match has been started"),
            GameError::RoundNotInProgress => write!(f, "Round is not in progress"),
            GameError::IndexOutOfRange(index) => write!(f, "Cell {} is out of range", index),
            GameError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            GameError::NotYourTurn => write!(f, "Not your turn"),
            GameError::StaleComputerTurn => write!(f, "Computer turn is no longer current"),
            GameError::NoMoveAvailable => write!(f, "No move available"),
        }
    }
}

impl std::error::Error for GameError {}
