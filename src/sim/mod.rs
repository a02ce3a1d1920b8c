//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed frame cadence only
//! - Seeded RNG only, consumed at run construction
//! - Input and the clock sampled once per frame by the caller
//! - No rendering or platform dependencies

pub mod physics;
pub mod rect;
pub mod room;
pub mod season;
pub mod seeds;
pub mod state;
pub mod tick;

pub use physics::Actor;
pub use rect::Rect;
pub use room::{RoomGeometry, SeasonalPlatform, SurfaceKind, builtin_templates};
pub use season::{SEASON_ORDER, Season, SeasonCycle};
pub use seeds::{EchoSeed, Modifiers, SEED_POOL};
pub use state::{Outcome, RunSnapshot, RunState};
pub use tick::{TickInput, tick};
