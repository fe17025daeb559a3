// Proptest generators and fixtures for catalog types.

use proptest::prelude::*;

use crate::domain::Game;

/// Fixed game with the given id, player range and duration.
pub fn game_with(id: i64, min_players: u32, max_players: u32, avg_duration: u32) -> Game {
    Game {
        id,
        name: format!("Game {id}"),
        description: format!("A {min_players}-{max_players} player game"),
        min_players,
        max_players,
        avg_duration,
        picture: format!("/img/{id}.png"),
    }
}

/// A game that satisfies the catalog invariants.
pub fn game(id: i64) -> impl Strategy<Value = Game> {
    (1u32..=8, 0u32..=6, 5u32..=240).prop_map(move |(min, spread, duration)| {
        game_with(id, min, min + spread, duration)
    })
}

/// A catalog of up to `max_len` valid games with distinct ids.
pub fn catalog(max_len: usize) -> impl Strategy<Value = Vec<Game>> {
    prop::collection::vec((1u32..=8, 0u32..=6, 5u32..=240), 0..=max_len).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (min, spread, duration))| game_with(i as i64 + 1, min, min + spread, duration))
            .collect()
    })
}
