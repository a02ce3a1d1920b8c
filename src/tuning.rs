//! Data-driven game balance
//!
//! Every physics and pacing constant the sim consumes lives here and is
//! passed into run construction explicitly. Nothing in the sim reads
//! ambient/global balance state, so tests and headless drivers can tune a
//! run without touching the rest of the crate.

use serde::{Deserialize, Serialize};

use crate::consts::{ROOM_COUNT, SEEDS_PER_RUN};

/// Balance values for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Horizontal speed while a direction key is held (px/frame)
    pub base_speed: f32,
    /// Initial upward speed of a jump (px/frame)
    pub base_jump: f32,
    /// Downward acceleration per frame
    pub base_gravity: f32,
    /// Terminal fall speed
    pub max_fall: f32,
    /// Horizontal scale while swimming in Spring/Summer water
    pub water_drag: f32,
    /// Residual velocity kept per frame on Winter ice
    pub ice_slip: f32,
    /// Season cycle cooldown (ms)
    pub cycle_cooldown_ms: i64,
    /// Cooldown used instead when the Glacial Rhythm seed is held (ms)
    pub slow_cycle_cooldown_ms: i64,
    /// Rooms per run
    pub room_count: usize,
    /// Echo seeds drawn per run
    pub seeds_per_run: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 4.8,
            base_jump: 12.5,
            base_gravity: 0.58,
            max_fall: 15.0,
            water_drag: 0.45,
            ice_slip: 0.985,
            cycle_cooldown_ms: 500,
            slow_cycle_cooldown_ms: 800,
            room_count: ROOM_COUNT,
            seeds_per_run: SEEDS_PER_RUN,
        }
    }
}

impl Tuning {
    /// Cooldown to construct the season cycler with
    pub fn cooldown_for(&self, slow_cycle: bool) -> i64 {
        if slow_cycle {
            self.slow_cycle_cooldown_ms
        } else {
            self.cycle_cooldown_ms
        }
    }
}
