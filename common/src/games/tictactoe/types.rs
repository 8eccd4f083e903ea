use std::fmt;

pub const CELL_COUNT: usize = 9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn side(&self) -> Option<Side> {
        match self {
            Mark::X => Some(Side::PlayerOne),
            Mark::O => Some(Side::PlayerTwo),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub fn mark(self) -> Mark {
        match self {
            Side::PlayerOne => Mark::X,
            Side::PlayerTwo => Mark::O,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            Side::PlayerOne => ColorTag::Red,
            Side::PlayerTwo => ColorTag::Blue,
        }
    }

    pub fn label(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Side::PlayerOne, _) => "Player 1",
            (Side::PlayerTwo, Mode::Friend) => "Player 2",
            (Side::PlayerTwo, Mode::Ai) => "AI",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Friend,
    Ai,
}

impl Mode {
    pub fn other(self) -> Mode {
        match self {
            Mode::Friend => Mode::Ai,
            Mode::Ai => Mode::Friend,
        }
    }

    /// Caption of a control that switches *to* this mode.
    pub fn select_label(self) -> &'static str {
        match self {
            Mode::Friend => "Play with Friend",
            Mode::Ai => "Play with AI",
        }
    }

    /// Whether `side` is driven by local input in this mode.
    pub fn is_human(self, side: Side) -> bool {
        match self {
            Mode::Friend => true,
            Mode::Ai => side == Side::PlayerOne,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WinningLine {
    cells: [usize; 3],
}

impl WinningLine {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { cells: [a, b, c] }
    }

    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    pub fn start(&self) -> usize {
        self.cells[0]
    }

    pub fn end(&self) -> usize {
        self.cells[2]
    }
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Win(Side, WinningLine),
    Draw,
}
