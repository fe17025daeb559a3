//! Random selection over a matching set.
//!
//! The picker only decides *which ordinal* to fetch; the catalog service
//! pairs it with a count and an offset query.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::game::Game;

/// Outcome of a random pick. `NoMatch` is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPick {
    Found(Game),
    NoMatch,
}

impl CatalogPick {
    pub fn into_option(self) -> Option<Game> {
        match self {
            CatalogPick::Found(game) => Some(game),
            CatalogPick::NoMatch => None,
        }
    }
}

/// Uniform draw from `[0, count)`; `None` when the set is empty.
pub fn pick_offset<R: Rng + ?Sized>(rng: &mut R, count: u64) -> Option<u64> {
    if count == 0 {
        return None;
    }
    Some(rng.random_range(0..count))
}

/// Shared random source for offset draws.
///
/// The lock is held for a single draw and never across an `.await`.
pub struct OffsetPicker {
    rng: Mutex<StdRng>,
}

impl OffsetPicker {
    /// `Some(seed)` gives a reproducible sequence; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn pick(&self, count: u64) -> Option<u64> {
        pick_offset(&mut *self.rng.lock(), count)
    }
}

impl Default for OffsetPicker {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for OffsetPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffsetPicker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_offset() {
        let picker = OffsetPicker::new(Some(1));
        assert_eq!(picker.pick(0), None);
    }

    #[test]
    fn singleton_always_zero() {
        let picker = OffsetPicker::new(Some(99));
        for _ in 0..100 {
            assert_eq!(picker.pick(1), Some(0));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = OffsetPicker::new(Some(42));
        let b = OffsetPicker::new(Some(42));
        let seq_a: Vec<_> = (0..20).map(|_| a.pick(1_000)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.pick(1_000)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn pick_into_option() {
        assert_eq!(CatalogPick::NoMatch.into_option(), None);
    }
}
