//! Run state: one attempt from the first room to a terminal outcome
//!
//! Construction is deterministic from a `u64` seed: the room sequence is
//! sampled from the templates with replacement and the echo seeds are drawn
//! without replacement, all from one seeded PCG stream. No randomness is
//! consumed after construction, so a seed fully reproduces a run given the
//! same per-frame inputs.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::physics::Actor;
use super::rect::Rect;
use super::room::{self, RoomGeometry};
use super::season::{Season, SeasonCycle};
use super::seeds::{self, EchoSeed, Modifiers};
use crate::consts::{ARENA_WIDTH, CEILING_Y};
use crate::tuning::Tuning;

/// Where a run stands. Transitions are one-way: once terminal, only a fresh
/// [`RunState`] resumes play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Failed,
}

/// All mutable state for one attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Seed the run was constructed from, for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub room_index: usize,
    pub rooms: Vec<RoomGeometry>,
    pub actor: Actor,
    pub season_cycle: SeasonCycle,
    pub selected_seeds: Vec<EchoSeed>,
    pub modifiers: Modifiers,
    pub outcome: Outcome,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl RunState {
    /// Construct a run over the built-in room templates
    pub fn new(seed: u64, now_ms: i64, tuning: Tuning) -> Self {
        Self::with_templates(seed, now_ms, tuning, &room::builtin_templates())
    }

    /// Construct a run over a caller-supplied template set.
    ///
    /// Malformed setup (empty template list, a template without a usable
    /// exit or spawn, drawing more seeds than the pool holds) is a
    /// configuration defect and panics here rather than surfacing later as
    /// silent misbehavior.
    pub fn with_templates(
        seed: u64,
        now_ms: i64,
        tuning: Tuning,
        templates: &[RoomGeometry],
    ) -> Self {
        assert!(tuning.room_count > 0, "a run needs at least one room");
        for (i, t) in templates.iter().enumerate() {
            assert!(t.exit.is_valid(), "template {i} has a degenerate exit");
            assert!(
                (0..=ARENA_WIDTH).contains(&t.spawn.x) && t.spawn.y >= CEILING_Y,
                "template {i} spawn is outside the arena"
            );
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let rooms = room::sample_rooms(&mut rng, templates, tuning.room_count);
        let selected_seeds = seeds::draw_seeds(&mut rng, tuning.seeds_per_run);
        let modifiers = Modifiers::resolve(&selected_seeds);
        let season_cycle = SeasonCycle::new(tuning.cooldown_for(modifiers.slow_cycle), now_ms);
        let actor = Actor::new(rooms[0].spawn);

        log::info!(
            "run start: seed={seed} rooms={} seeds={:?}",
            rooms.len(),
            selected_seeds.iter().map(|s| s.name()).collect::<Vec<_>>()
        );

        Self {
            seed,
            tuning,
            room_index: 0,
            rooms,
            actor,
            season_cycle,
            selected_seeds,
            modifiers,
            outcome: Outcome::InProgress,
            start_ms: now_ms,
            end_ms: 0,
        }
    }

    pub fn current_room(&self) -> &RoomGeometry {
        &self.rooms[self.room_index.min(self.rooms.len() - 1)]
    }

    pub fn season(&self) -> Season {
        self.season_cycle.active()
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Elapsed run duration; frozen at the end timestamp once terminal
    pub fn elapsed_ms(&self, now_ms: i64) -> i64 {
        match self.outcome {
            Outcome::InProgress => now_ms - self.start_ms,
            _ => self.end_ms - self.start_ms,
        }
    }

    /// Step into the next room, or win the run past the last one. The actor
    /// respawns fresh; the season wheel and modifiers carry over.
    pub(crate) fn advance_room(&mut self, now_ms: i64) {
        self.room_index += 1;
        if self.room_index >= self.rooms.len() {
            self.outcome = Outcome::Won;
            self.end_ms = now_ms;
            log::info!("run won in {} ms", self.elapsed_ms(now_ms));
            return;
        }
        log::info!("entering room {}/{}", self.room_index + 1, self.rooms.len());
        let spawn = self.rooms[self.room_index].spawn;
        self.actor.reset(spawn);
    }

    pub(crate) fn fail(&mut self, now_ms: i64, reason: &str) {
        if self.outcome != Outcome::InProgress {
            return;
        }
        self.outcome = Outcome::Failed;
        self.end_ms = now_ms;
        log::info!("run failed ({reason}) after {} ms", self.elapsed_ms(now_ms));
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self, now_ms: i64) -> RunSnapshot {
        let season = self.season();
        let room = self.current_room();
        RunSnapshot {
            season,
            cooldown_remaining_ms: self.season_cycle.cooldown_remaining_ms(now_ms),
            flash: self.season_cycle.flash,
            room_index: self.room_index,
            room_count: self.rooms.len(),
            actor: self.actor.rect,
            active_platforms: room.active_platforms(season),
            hazards: room.hazards.clone(),
            hazard_active: room.hazard_active(season, self.modifiers.brittle_thorns),
            water: room.water.clone(),
            wind: room.wind.clone(),
            exit: room.exit,
            seed_names: self
                .selected_seeds
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
            outcome: self.outcome,
            elapsed_ms: self.elapsed_ms(now_ms),
        }
    }
}

/// Everything the presentation layer reads per frame, resolved for the
/// current season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub season: Season,
    pub cooldown_remaining_ms: i64,
    pub flash: f32,
    pub room_index: usize,
    pub room_count: usize,
    pub actor: Rect,
    pub active_platforms: Vec<Rect>,
    pub hazards: Vec<Rect>,
    pub hazard_active: bool,
    pub water: Vec<Rect>,
    pub wind: Vec<Rect>,
    pub exit: Rect,
    pub seed_names: Vec<String>,
    pub outcome: Outcome,
    pub elapsed_ms: i64,
}
