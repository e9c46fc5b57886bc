//! Trigger outcomes
//!
//! Proximity triggers carry a tag saying which side the game ends for when
//! they fire; the trigger scan dispatches on the tag.

/// How a game ends when a proximity trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A player reached the destination: victory for the humans.
    PlayersWin,
    /// A zombie reached a player: the horde feeds.
    PlayersLose,
}

impl TriggerOutcome {
    /// True when this outcome is a win for the players' side.
    pub fn players_won(self) -> bool {
        matches!(self, TriggerOutcome::PlayersWin)
    }
}
