//! Benchmark profiles for the dotlife grid engine.
//!
//! Provides pre-built states for benchmarks:
//!
//! - [`reference_profile`]: 128x128 soup (16K cells) under B3/S23
//! - [`stress_profile`]: 512x512 soup (~262K cells) under B3/S23
//! - [`highlife_profile`]: 128x128 soup under B36/S23, exercising the
//!   directive path of the encoding

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dotlife_core::{LifeState, NeighbourSet, RuleSet};
use dotlife_test_utils::soup::random_soup;

/// Soup density used by every profile.
pub const SOUP_DENSITY: f64 = 0.35;

/// 128x128 soup under the default rules.
pub fn reference_profile(seed: u64) -> LifeState {
    LifeState::new(random_soup(128, 128, SOUP_DENSITY, seed), RuleSet::default())
}

/// 512x512 soup under the default rules.
pub fn stress_profile(seed: u64) -> LifeState {
    LifeState::new(random_soup(512, 512, SOUP_DENSITY, seed), RuleSet::default())
}

/// 128x128 soup under HighLife (B36/S23).
pub fn highlife_profile(seed: u64) -> LifeState {
    let rules = RuleSet::new(
        NeighbourSet::empty().with(3).with(6),
        RuleSet::CONWAY.survival(),
    );
    LifeState::new(random_soup(128, 128, SOUP_DENSITY, seed), rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_have_expected_shapes() {
        let r = reference_profile(1);
        assert_eq!((r.grid.width(), r.grid.height()), (128, 128));
        assert!(r.rules.is_default());

        let s = stress_profile(1);
        assert_eq!(s.grid.cell_count(), 512 * 512);

        let h = highlife_profile(1);
        assert_eq!(h.rules.to_string(), "B36/S23");
        assert!(h.encode().starts_with("B36/S23"));
    }
}
