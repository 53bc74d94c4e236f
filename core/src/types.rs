use std::fmt;

/// One of the two asymmetric forces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The larger force surrounding the board (Muscovites).
    Attacker,
    /// The smaller force guarding the king (Swedes).
    Defender,
}

impl Side {
    /// Returns the opposing side.
    pub const fn opponent(self) -> Self {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }

    /// Number of pieces this side starts the game with.
    /// The defender count includes the king.
    pub const fn starting_pieces(self) -> u32 {
        match self {
            Side::Attacker => 16,
            Side::Defender => 9,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::Attacker => 0,
            Side::Defender => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => write!(f, "attacker"),
            Side::Defender => write!(f, "defender"),
        }
    }
}

/// Outcome reported by a game state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Winner {
    /// Game still in progress.
    Nobody,
    /// Game over without a winner.
    Draw,
    /// Game over, won by the given side.
    Won(Side),
}

impl Winner {
    /// Returns true once the game is over, whatever the result.
    pub const fn is_decided(self) -> bool {
        !matches!(self, Winner::Nobody)
    }

    /// Returns true if `side` won.
    pub fn is_won_by(self, side: Side) -> bool {
        self == Winner::Won(side)
    }
}
