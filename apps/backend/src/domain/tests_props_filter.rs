//! Property tests for the filter builder (pure domain, no DB).

use proptest::prelude::*;

use crate::domain::filter::parse_positive;
use crate::domain::test_gens::{catalog, game};
use crate::domain::{DurationClause, GameFilter, PlayerClause};

proptest! {
    /// Every game kept by a player filter seats that many players.
    #[test]
    fn prop_player_filter_respects_range(
        games in catalog(30),
        players in 1u32..=16,
    ) {
        let filter = GameFilter::build(Some(&players.to_string()), None);
        for g in games.iter().filter(|g| filter.matches(g)) {
            prop_assert!(g.min_players <= players && players <= g.max_players,
                "{g:?} kept for players={players}");
        }
        // ...and nothing that seats them is dropped
        let kept = games.iter().filter(|g| filter.matches(g)).count();
        let expected = games.iter().filter(|g| g.seats(players)).count();
        prop_assert_eq!(kept, expected);
    }

    /// Every game kept by a duration filter fits within it.
    #[test]
    fn prop_duration_filter_is_upper_bound(
        games in catalog(30),
        max in 1u32..=300,
    ) {
        let filter = GameFilter::build(None, Some(&max.to_string()));
        for g in games.iter().filter(|g| filter.matches(g)) {
            prop_assert!(g.avg_duration <= max);
        }
    }

    /// Anything that is not a positive integer behaves like an absent parameter.
    #[test]
    fn prop_non_numeric_is_absent(raw in "[^0-9]*") {
        prop_assert!(parse_positive(&raw).is_none());
        let filter = GameFilter::build(Some(&raw), Some(&raw));
        prop_assert_eq!(filter.players, PlayerClause::Any);
        prop_assert_eq!(filter.duration, DurationClause::Any);
    }

    /// The empty filter keeps every game.
    #[test]
    fn prop_match_all_keeps_everything(g in game(1)) {
        prop_assert!(GameFilter::match_all().matches(&g));
    }

    /// Combined filters are the intersection of their parts.
    #[test]
    fn prop_clauses_compose_as_and(
        g in game(1),
        players in 1u32..=16,
        max in 1u32..=300,
    ) {
        let both = GameFilter::from_parts(Some(players), Some(max));
        let p = GameFilter::from_parts(Some(players), None);
        let d = GameFilter::from_parts(None, Some(max));
        prop_assert_eq!(both.matches(&g), p.matches(&g) && d.matches(&g));
    }
}
