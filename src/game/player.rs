use std::fmt;

/// A player number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(usize);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Build a player id, rejecting zero.
    pub fn new(number: usize) -> Option<Self> {
        (number >= 1).then_some(PlayerId(number))
    }

    /// The player's number as shown to users.
    pub fn number(self) -> usize {
        self.0
    }

    /// The player whose turn follows this one, wrapping back to player 1
    /// after `player_count`.
    pub fn next(self, player_count: usize) -> PlayerId {
        if self.0 < player_count {
            PlayerId(self.0 + 1)
        } else {
            PlayerId::FIRST
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
