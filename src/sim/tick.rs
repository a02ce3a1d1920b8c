//! Per-frame run orchestration
//!
//! One logical frame = one sampled input + one physics step + one outcome
//! check, strictly in that order. Input and the clock are sampled once by
//! the caller and treated as immutable for the frame.

use super::state::{Outcome, RunState};

/// Input sampled for a single frame by the presentation layer.
///
/// `left`/`right` are held-key states; `jump` and `cycle_season` are
/// edge-triggered (true only on the frame the key went down). Restarting is
/// not an input: a terminal run stays frozen until the caller constructs a
/// fresh [`RunState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub cycle_season: bool,
}

impl TickInput {
    /// Held-direction intent; opposing keys cancel
    pub fn direction(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// Advance the run by one frame. A terminal run is frozen: inputs are
/// ignored and nothing moves.
pub fn tick(state: &mut RunState, input: &TickInput, now_ms: i64) {
    if state.is_terminal() {
        return;
    }

    if input.cycle_season {
        state.season_cycle.request_cycle(now_ms);
    }

    if input.jump {
        state.actor.jump(&state.tuning, &state.modifiers);
    }

    let season = state.season();
    state.actor.step(
        input.direction(),
        &state.rooms[state.room_index],
        season,
        &state.modifiers,
        &state.tuning,
    );

    // Outcome checks against the post-step actor: hazards first, then the
    // fall-out line, then the exit.
    let room = &state.rooms[state.room_index];
    let hit_hazard = room.hazard_active(season, state.modifiers.brittle_thorns)
        && room.hazards.iter().any(|h| state.actor.rect.overlaps(h));
    let fell_out = state.actor.rect.top() > crate::consts::FALL_OUT_Y;
    let at_exit = state.actor.rect.overlaps(&room.exit);

    if hit_hazard {
        state.fail(now_ms, "hazard");
        return;
    }
    if fell_out {
        state.fail(now_ms, "fell out of world");
        return;
    }
    if at_exit {
        state.advance_room(now_ms);
        if state.outcome == Outcome::Won {
            return;
        }
    }

    state.season_cycle.update();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ARENA_WIDTH, GROUND_Y};
    use crate::sim::rect::Rect;
    use crate::sim::room::RoomGeometry;
    use crate::sim::season::Season;
    use crate::tuning::Tuning;
    use glam::IVec2;

    /// One flat room: floor, an exit a short walk to the right, nothing else
    fn walk_right_template(hazard_under_spawn: bool) -> RoomGeometry {
        RoomGeometry {
            base_platforms: vec![Rect::new(0, GROUND_Y, ARENA_WIDTH, 50)],
            seasonal_platforms: vec![],
            hazards: if hazard_under_spawn {
                vec![Rect::new(60, GROUND_Y - 18, 80, 18)]
            } else {
                vec![]
            },
            water: vec![],
            wind: vec![],
            exit: Rect::new(200, GROUND_Y - 70, 44, 70),
            spawn: IVec2::new(70, GROUND_Y - 52),
        }
    }

    fn one_room_tuning() -> Tuning {
        Tuning {
            room_count: 1,
            seeds_per_run: 0,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_walk_right_to_victory() {
        let mut state = RunState::with_templates(
            1,
            0,
            one_room_tuning(),
            &[walk_right_template(false)],
        );
        assert_eq!(state.outcome, Outcome::InProgress);

        let input = TickInput {
            right: true,
            ..Default::default()
        };
        let mut now = 0;
        for _ in 0..120 {
            now += 16;
            tick(&mut state, &input, now);
            if state.is_terminal() {
                break;
            }
        }
        assert_eq!(state.outcome, Outcome::Won);
        // Past the single room: index advanced off the end of the list
        assert_eq!(state.room_index, 1);
        assert!(state.elapsed_ms(now) > 0);
    }

    #[test]
    fn test_summer_hazard_fails_on_first_frame() {
        let mut state = RunState::with_templates(
            1,
            0,
            one_room_tuning(),
            &[walk_right_template(true)],
        );
        // Start the run in Summer
        assert!(state.season_cycle.request_cycle(0));
        assert_eq!(state.season(), Season::Summer);

        tick(&mut state, &TickInput::default(), 16);
        assert_eq!(state.outcome, Outcome::Failed);
    }

    #[test]
    fn test_spring_thorns_safe_without_brittle_seed() {
        let mut state = RunState::with_templates(
            1,
            0,
            one_room_tuning(),
            &[walk_right_template(true)],
        );
        // Spring, no seeds drawn: standing on the thorns is fine
        for frame in 1..=30 {
            tick(&mut state, &TickInput::default(), frame * 16);
        }
        assert_eq!(state.outcome, Outcome::InProgress);
    }

    #[test]
    fn test_falling_out_of_world_fails() {
        let mut template = walk_right_template(false);
        template.base_platforms.clear();
        let mut state = RunState::with_templates(1, 0, one_room_tuning(), &[template]);

        let mut now = 0;
        for _ in 0..240 {
            now += 16;
            tick(&mut state, &TickInput::default(), now);
            if state.is_terminal() {
                break;
            }
        }
        assert_eq!(state.outcome, Outcome::Failed);
        assert!(state.actor.rect.top() > crate::consts::FALL_OUT_Y);
    }

    #[test]
    fn test_terminal_run_is_frozen() {
        let mut template = walk_right_template(false);
        template.base_platforms.clear();
        let mut state = RunState::with_templates(1, 0, one_room_tuning(), &[template]);

        let mut now = 0;
        while !state.is_terminal() {
            now += 16;
            tick(&mut state, &TickInput::default(), now);
        }
        let frozen_actor = state.actor.rect;
        let end_ms = state.end_ms;

        // Inputs after the terminal frame change nothing
        let input = TickInput {
            right: true,
            jump: true,
            cycle_season: true,
            ..Default::default()
        };
        for _ in 0..10 {
            now += 16;
            tick(&mut state, &input, now);
        }
        assert_eq!(state.actor.rect, frozen_actor);
        assert_eq!(state.end_ms, end_ms);
        assert_eq!(state.season(), Season::Spring);
    }

    #[test]
    fn test_cycle_input_respects_cooldown() {
        let mut state = RunState::with_templates(
            1,
            0,
            one_room_tuning(),
            &[walk_right_template(false)],
        );
        let cycle = TickInput {
            cycle_season: true,
            ..Default::default()
        };
        tick(&mut state, &cycle, 0);
        assert_eq!(state.season(), Season::Summer);

        // Within the cooldown window the request is ignored
        tick(&mut state, &cycle, 100);
        assert_eq!(state.season(), Season::Summer);

        tick(&mut state, &cycle, 500);
        assert_eq!(state.season(), Season::Autumn);
    }

    #[test]
    fn test_jump_only_fires_grounded() {
        let mut state = RunState::with_templates(
            1,
            0,
            one_room_tuning(),
            &[walk_right_template(false)],
        );
        // Settle onto the floor
        tick(&mut state, &TickInput::default(), 16);
        assert!(state.actor.on_ground);

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, 32);
        assert!(!state.actor.on_ground);
        assert!(state.actor.vel_y < 0.0);

        // Mid-air jump input does nothing
        let vel_before = state.actor.vel_y;
        tick(&mut state, &jump, 48);
        assert!(state.actor.vel_y > vel_before, "gravity kept pulling");
    }

    #[test]
    fn test_multi_room_run_carries_season_wheel() {
        let mut state = RunState::with_templates(
            1,
            0,
            Tuning {
                room_count: 2,
                seeds_per_run: 0,
                ..Tuning::default()
            },
            &[walk_right_template(false)],
        );
        // Cycle once before moving; the wheel must survive the room change
        let cycle = TickInput {
            cycle_season: true,
            ..Default::default()
        };
        tick(&mut state, &cycle, 0);
        assert_eq!(state.season(), Season::Summer);

        let input = TickInput {
            right: true,
            ..Default::default()
        };
        let mut now = 0;
        while state.room_index == 0 && !state.is_terminal() {
            now += 16;
            tick(&mut state, &input, now);
        }
        assert_eq!(state.outcome, Outcome::InProgress);
        assert_eq!(state.room_index, 1);
        // Actor respawned at the new room's spawn with zero velocity
        assert_eq!(state.actor.rect.pos, IVec2::new(70, GROUND_Y - 52));
        assert_eq!(state.actor.vel_x, 0.0);
        assert!(!state.actor.on_ground);
        // Season carried across the boundary
        assert_eq!(state.season(), Season::Summer);

        while !state.is_terminal() {
            now += 16;
            tick(&mut state, &input, now);
        }
        assert_eq!(state.outcome, Outcome::Won);
        assert_eq!(state.room_index, 2);
    }
}
