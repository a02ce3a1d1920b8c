//! Fractured Forest - a season-shifting platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (seasons, physics, rooms, run state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input polling, and UI live in a presentation layer on top of
//! this crate: it feeds the sim sampled input plus a monotonic clock and
//! reads back [`sim::RunSnapshot`] values.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical pixels)
    pub const ARENA_WIDTH: i32 = 960;
    pub const ARENA_HEIGHT: i32 = 540;
    /// Top of the always-solid ground strip
    pub const GROUND_Y: i32 = ARENA_HEIGHT - 42;

    /// Nominal frame cadence (logical frames per second)
    pub const FRAME_RATE: u32 = 60;

    /// Actor collision box
    pub const ACTOR_WIDTH: i32 = 34;
    pub const ACTOR_HEIGHT: i32 = 52;

    /// Vertical safety clamp: the actor may rise this far above the arena
    /// before being clamped. The bottom is left open so that falling out of
    /// the world stays detectable.
    pub const CEILING_Y: i32 = -200;

    /// Actor top edge past this line means the actor fell out of the world
    pub const FALL_OUT_Y: i32 = ARENA_HEIGHT + 80;

    /// Number of rooms in one run
    pub const ROOM_COUNT: usize = 5;
    /// Echo seeds drawn per run
    pub const SEEDS_PER_RUN: usize = 2;
}
