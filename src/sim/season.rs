//! The season wheel
//!
//! Exactly one season is active at a time. The player cycles it one step at
//! a time, gated by a cooldown against the presentation layer's monotonic
//! clock. Which geometry is solid and which hazards bite is derived from the
//! active season elsewhere; this module only owns the wheel itself.

use serde::{Deserialize, Serialize};

/// One of the four discrete global modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Cyclic order followed by [`SeasonCycle::request_cycle`]
pub const SEASON_ORDER: [Season; 4] = [
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
];

impl Season {
    /// Next season in cyclic order (Winter wraps to Spring)
    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

/// Flash intensity set on a successful cycle (cosmetic, decays per frame)
const FLASH_ON_CYCLE: f32 = 170.0;
const FLASH_DECAY_PER_FRAME: f32 = 8.0;

/// Cooldown-gated season cycler
///
/// Timestamps are milliseconds from the presentation layer's monotonic
/// clock; signed so a fresh cycler can anchor one cooldown in the past and
/// accept its first request immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonCycle {
    active: Season,
    cooldown_ms: i64,
    last_cycle_ms: i64,
    /// Visual flash intensity, 0 when idle. Never read by physics.
    pub flash: f32,
}

impl SeasonCycle {
    /// A cycler starting at Spring whose first request succeeds at `now_ms`
    pub fn new(cooldown_ms: i64, now_ms: i64) -> Self {
        Self {
            active: Season::Spring,
            cooldown_ms,
            last_cycle_ms: now_ms - cooldown_ms,
            flash: 0.0,
        }
    }

    pub fn active(&self) -> Season {
        self.active
    }

    pub fn cooldown_ms(&self) -> i64 {
        self.cooldown_ms
    }

    /// Milliseconds until the next cycle is allowed (0 when ready)
    pub fn cooldown_remaining_ms(&self, now_ms: i64) -> i64 {
        (self.cooldown_ms - (now_ms - self.last_cycle_ms)).max(0)
    }

    pub fn can_cycle(&self, now_ms: i64) -> bool {
        now_ms - self.last_cycle_ms >= self.cooldown_ms
    }

    /// Advance the wheel one step if off cooldown. Returns whether the
    /// season changed; a rejected request has no effect at all.
    pub fn request_cycle(&mut self, now_ms: i64) -> bool {
        if !self.can_cycle(now_ms) {
            return false;
        }
        self.active = self.active.next();
        self.last_cycle_ms = now_ms;
        self.flash = FLASH_ON_CYCLE;
        log::debug!("season cycled to {}", self.active.as_str());
        true
    }

    /// Per-frame cosmetic update: linear flash decay toward zero
    pub fn update(&mut self) {
        if self.flash > 0.0 {
            self.flash = (self.flash - FLASH_DECAY_PER_FRAME).max(0.0);
        }
    }
}
