use serde::{Deserialize, Serialize};

/// A catalog entry as served to clients.
///
/// Field names are the wire format: `id`, `name`, `description`,
/// `min_players`, `max_players`, `avg_duration`, `picture`.
/// Invariant: `1 <= min_players <= max_players`, `avg_duration >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub min_players: u32,
    pub max_players: u32,
    /// Minutes
    pub avg_duration: u32,
    pub picture: String,
}

impl Game {
    /// `"4 players"` for a fixed count, `"2-5 players"` for a range.
    pub fn players_label(&self) -> String {
        if self.min_players == self.max_players {
            format!("{} players", self.min_players)
        } else {
            format!("{}-{} players", self.min_players, self.max_players)
        }
    }

    /// Whether `players` people can sit down to this game.
    pub fn seats(&self, players: u32) -> bool {
        self.min_players <= players && players <= self.max_players
    }
}
