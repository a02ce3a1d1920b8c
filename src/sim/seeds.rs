//! Echo seeds: run-start upgrade bundles
//!
//! A run draws a fixed number of seeds from the pool without replacement and
//! folds them into a [`Modifiers`] value once, at construction. The fold is
//! order-independent by design: every transform is either a multiplication
//! of its own field or a boolean set, so no two seeds interfere. Keep it
//! that way when adding seeds; an order-dependent transform would make the
//! draw order gameplay-visible.

use rand::seq::index;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Upgrade identifiers, drawn without replacement at run start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EchoSeed {
    Swiftstride,
    MoonlightBones,
    BrittleThorns,
    GlacialRhythm,
    HeavyBloom,
    Tailwind,
}

/// The full pool a run draws from
pub const SEED_POOL: [EchoSeed; 6] = [
    EchoSeed::Swiftstride,
    EchoSeed::MoonlightBones,
    EchoSeed::BrittleThorns,
    EchoSeed::GlacialRhythm,
    EchoSeed::HeavyBloom,
    EchoSeed::Tailwind,
];

impl EchoSeed {
    pub fn name(self) -> &'static str {
        match self {
            EchoSeed::Swiftstride => "Swiftstride",
            EchoSeed::MoonlightBones => "Moonlight Bones",
            EchoSeed::BrittleThorns => "Brittle Thorns",
            EchoSeed::GlacialRhythm => "Glacial Rhythm",
            EchoSeed::HeavyBloom => "Heavy Bloom",
            EchoSeed::Tailwind => "Tailwind",
        }
    }

    /// One-line description for the presentation layer
    pub fn description(self) -> &'static str {
        match self {
            EchoSeed::Swiftstride => "+20% movement speed.",
            EchoSeed::MoonlightBones => "Lower gravity, slightly higher jump.",
            EchoSeed::BrittleThorns => "Spring thorns are now dangerous.",
            EchoSeed::GlacialRhythm => "Season cycle cooldown increased.",
            EchoSeed::HeavyBloom => "Spring/Summer water slows you more.",
            EchoSeed::Tailwind => "Autumn wind pushes harder.",
        }
    }

    /// Apply this seed's transform to a modifier set under construction
    fn apply(self, mods: &mut Modifiers) {
        match self {
            EchoSeed::Swiftstride => mods.speed_mult *= 1.2,
            EchoSeed::MoonlightBones => {
                mods.gravity_mult *= 0.82;
                mods.jump_mult *= 1.08;
            }
            EchoSeed::BrittleThorns => mods.brittle_thorns = true,
            EchoSeed::GlacialRhythm => mods.slow_cycle = true,
            EchoSeed::HeavyBloom => mods.water_drag_mult *= 0.75,
            EchoSeed::Tailwind => mods.wind_push = 0.45,
        }
    }
}

/// Resolved gameplay multipliers for one run, immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    pub speed_mult: f32,
    pub gravity_mult: f32,
    pub jump_mult: f32,
    pub water_drag_mult: f32,
    /// Horizontal nudge per overlapped wind zone in Autumn
    pub wind_push: f32,
    pub ice_slip: f32,
    /// Spring thorns become active hazards
    pub brittle_thorns: bool,
    /// Construct the season cycler with the longer cooldown
    pub slow_cycle: bool,
}

impl Default for Modifiers {
    /// Identity: no seed selected changes nothing
    fn default() -> Self {
        Self {
            speed_mult: 1.0,
            gravity_mult: 1.0,
            jump_mult: 1.0,
            water_drag_mult: 1.0,
            wind_push: 0.24,
            ice_slip: 1.0,
            brittle_thorns: false,
            slow_cycle: false,
        }
    }
}

impl Modifiers {
    /// Fold a selection of distinct seeds into a modifier set
    pub fn resolve(seeds: &[EchoSeed]) -> Self {
        let mut mods = Modifiers::default();
        for seed in seeds {
            seed.apply(&mut mods);
        }
        mods
    }
}

/// Draw `count` distinct seeds from the pool.
///
/// Panics if `count` exceeds the pool size; a caller asking for more seeds
/// than exist is a configuration defect, not a runtime condition.
pub fn draw_seeds(rng: &mut Pcg32, count: usize) -> Vec<EchoSeed> {
    assert!(
        count <= SEED_POOL.len(),
        "cannot draw {count} seeds from a pool of {}",
        SEED_POOL.len()
    );
    index::sample(rng, SEED_POOL.len(), count)
        .iter()
        .map(|i| SEED_POOL[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_empty_selection_is_identity() {
        let mods = Modifiers::resolve(&[]);
        assert_eq!(mods, Modifiers::default());
        assert_eq!(mods.speed_mult, 1.0);
        assert_eq!(mods.gravity_mult, 1.0);
        assert_eq!(mods.jump_mult, 1.0);
        assert_eq!(mods.water_drag_mult, 1.0);
        assert!(!mods.brittle_thorns);
        assert!(!mods.slow_cycle);
    }

    #[test]
    fn test_swiftstride_alone() {
        let mods = Modifiers::resolve(&[EchoSeed::Swiftstride]);
        assert!((mods.speed_mult - 1.2).abs() < 1e-6);
        // Nothing else moves
        assert_eq!(mods.gravity_mult, 1.0);
        assert_eq!(mods.jump_mult, 1.0);
    }

    #[test]
    fn test_fold_is_order_independent() {
        let a = Modifiers::resolve(&[EchoSeed::Swiftstride, EchoSeed::MoonlightBones]);
        let b = Modifiers::resolve(&[EchoSeed::MoonlightBones, EchoSeed::Swiftstride]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tailwind_sets_wind_push() {
        let mods = Modifiers::resolve(&[EchoSeed::Tailwind]);
        assert!((mods.wind_push - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_draw_is_without_replacement() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let seeds = draw_seeds(&mut rng, 2);
            assert_eq!(seeds.len(), 2);
            assert_ne!(seeds[0], seeds[1]);
        }
    }

    #[test]
    fn test_draw_full_pool() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seeds = draw_seeds(&mut rng, SEED_POOL.len());
        seeds.sort_by_key(|s| s.name());
        seeds.dedup();
        assert_eq!(seeds.len(), SEED_POOL.len());
    }

    #[test]
    #[should_panic(expected = "cannot draw")]
    fn test_overdraw_panics() {
        let mut rng = Pcg32::seed_from_u64(7);
        let _ = draw_seeds(&mut rng, SEED_POOL.len() + 1);
    }
}
