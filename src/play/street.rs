/// Betting rounds of one hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Preflop, Self::Flop, Self::Turn, Self::River]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::Preflop => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::River,
            Self::River => panic!("terminal"),
        }
    }
    /// community cards on the table during this street
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River => 5,
        }
    }
    /// community cards dealt when this street closes
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Preflop => 3,
            Self::Flop => 1,
            Self::Turn => 1,
            Self::River => panic!("terminal"),
        }
    }
}

impl From<usize> for Street {
    fn from(n_observed: usize) -> Self {
        match n_observed {
            0 => Self::Preflop,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::River,
            _ => panic!("no street with {} community cards", n_observed),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Preflop => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
        }
    }
}

/// Where a table is in its lifecycle.
///
/// `Waiting` between games, `Dealing` while a hand is set up and forced
/// bets are taken, `Betting` while a street is open, `Showdown` while pots
/// are paid out. A finished hand goes straight back to `Dealing`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Dealing,
    Betting(Street),
    Showdown,
}

impl Phase {
    pub fn in_progress(&self) -> bool {
        !matches!(self, Self::Waiting)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Dealing => write!(f, "dealing"),
            Self::Betting(street) => write!(f, "betting {}", street),
            Self::Showdown => write!(f, "showdown"),
        }
    }
}
