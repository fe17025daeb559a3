//! Filter builder: raw query values in, structured catalog filter out.
//!
//! Malformed values (non-numeric, zero, negative, overflowing) are treated as
//! if the parameter had not been sent. The same rule applies to every
//! parameter and every endpoint.

use std::fmt;
use std::num::NonZeroU32;

use tracing::debug;

use super::game::Game;

/// Player-count clause: range overlap against `[min_players, max_players]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerClause {
    #[default]
    Any,
    /// `min_players <= n AND max_players >= n`
    Seats(NonZeroU32),
}

/// Duration clause: upper bound on `avg_duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationClause {
    #[default]
    Any,
    /// `avg_duration <= n`
    AtMost(NonZeroU32),
}

/// Conjunction of the player and duration clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameFilter {
    pub players: PlayerClause,
    pub duration: DurationClause,
}

impl GameFilter {
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Build a filter from raw query-string values.
    pub fn build(players: Option<&str>, max_duration: Option<&str>) -> Self {
        let players = match lenient_positive("players", players) {
            Some(n) => PlayerClause::Seats(n),
            None => PlayerClause::Any,
        };
        let duration = match lenient_positive("maxDuration", max_duration) {
            Some(n) => DurationClause::AtMost(n),
            None => DurationClause::Any,
        };
        Self { players, duration }
    }

    /// Build a filter from already-typed values; zero means absent.
    pub fn from_parts(players: Option<u32>, max_duration: Option<u32>) -> Self {
        Self {
            players: players
                .and_then(NonZeroU32::new)
                .map_or(PlayerClause::Any, PlayerClause::Seats),
            duration: max_duration
                .and_then(NonZeroU32::new)
                .map_or(DurationClause::Any, DurationClause::AtMost),
        }
    }

    pub fn is_match_all(&self) -> bool {
        matches!(
            (self.players, self.duration),
            (PlayerClause::Any, DurationClause::Any)
        )
    }

    /// In-memory evaluation; must agree with the SQL the adapter emits.
    pub fn matches(&self, game: &Game) -> bool {
        let players_ok = match self.players {
            PlayerClause::Any => true,
            PlayerClause::Seats(n) => game.seats(n.get()),
        };
        let duration_ok = match self.duration {
            DurationClause::Any => true,
            DurationClause::AtMost(max) => game.avg_duration <= max.get(),
        };
        players_ok && duration_ok
    }
}

impl fmt::Display for GameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.players {
            PlayerClause::Any => f.write_str("players=any")?,
            PlayerClause::Seats(n) => write!(f, "players={n}")?,
        }
        match self.duration {
            DurationClause::Any => f.write_str(" max_duration=any"),
            DurationClause::AtMost(n) => write!(f, " max_duration={n}"),
        }
    }
}

/// Parse a strictly positive integer, or `None` for anything else.
pub fn parse_positive(raw: &str) -> Option<NonZeroU32> {
    raw.trim().parse::<u32>().ok().and_then(NonZeroU32::new)
}

fn lenient_positive(param: &'static str, raw: Option<&str>) -> Option<NonZeroU32> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_positive(raw);
    if parsed.is_none() {
        debug!(param, raw, "ignoring malformed query parameter");
    }
    parsed
}
