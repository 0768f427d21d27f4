//! The record stored in a [`PlayerTree`][crate::PlayerTree].

use serde::{Deserialize, Serialize};

/// A player on the leaderboard. The `name` is the player's identity: a tree holds at most one
/// `Player` per name and orders them by it. `wins` is carried along but never affects placement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Unique name, compared lexicographically.
    pub name: String,
    /// Number of games won.
    pub wins: u32,
}

impl Player {
    /// Creates a new `Player`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leaderboard_bst::Player;
    ///
    /// let magnus = Player::new("magnus", 12);
    /// assert_eq!(magnus.name, "magnus");
    /// assert_eq!(magnus.wins, 12);
    /// ```
    pub fn new(name: impl Into<String>, wins: u32) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}
