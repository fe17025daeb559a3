//! Property and statistical tests for offset picking.

use std::collections::HashMap;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{pick_offset, OffsetPicker};

proptest! {
    /// Offsets always land inside the matching set.
    #[test]
    fn prop_offset_in_range(seed in any::<u64>(), count in 1u64..=1_000_000) {
        let mut rng = StdRng::seed_from_u64(seed);
        let offset = pick_offset(&mut rng, count);
        prop_assert!(matches!(offset, Some(o) if o < count));
    }

    #[test]
    fn prop_empty_set_never_yields_offset(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(pick_offset(&mut rng, 0), None);
    }
}

/// Each of k offsets should come up roughly n/k times.
#[test]
fn offsets_are_roughly_uniform() {
    const K: u64 = 5;
    const N: usize = 50_000;

    let picker = OffsetPicker::new(Some(0xB0A2D));
    let mut hits: HashMap<u64, usize> = HashMap::new();
    for _ in 0..N {
        let offset = picker.pick(K).expect("non-empty set");
        *hits.entry(offset).or_default() += 1;
    }

    assert_eq!(hits.len(), K as usize, "every offset should be drawn");
    let expected = N as f64 / K as f64;
    for (offset, count) in hits {
        let ratio = count as f64 / expected;
        assert!(
            (0.95..=1.05).contains(&ratio),
            "offset {offset} drawn {count} times, expected about {expected}"
        );
    }
}
