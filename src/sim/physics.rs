//! Actor physics: fixed-step integration and axis-separated collision
//!
//! The tricky part of the sim. Each frame the actor's horizontal velocity
//! is recomputed from held input, shaped by season effects (water drag,
//! autumn wind, winter ice), then the move is committed one axis at a time:
//! the horizontal move is applied and fully resolved against every active
//! platform BEFORE the vertical move begins. Reversing that order changes
//! how corners of L-shaped platform arrangements resolve and would let the
//! actor tunnel diagonally; the order is an invariant, not a preference.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::room::RoomGeometry;
use super::season::Season;
use super::seeds::Modifiers;
use crate::consts::{ACTOR_HEIGHT, ACTOR_WIDTH, ARENA_WIDTH, CEILING_Y};
use crate::tuning::Tuning;

/// The player-controlled body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
    pub vel_x: f32,
    pub vel_y: f32,
    pub on_ground: bool,
}

impl Actor {
    pub fn new(spawn: IVec2) -> Self {
        Self {
            rect: Rect::new(spawn.x, spawn.y, ACTOR_WIDTH, ACTOR_HEIGHT),
            vel_x: 0.0,
            vel_y: 0.0,
            on_ground: false,
        }
    }

    /// Reset to a spawn point with zero velocity (room entry, run start)
    pub fn reset(&mut self, spawn: IVec2) {
        self.rect.pos = spawn;
        self.vel_x = 0.0;
        self.vel_y = 0.0;
        self.on_ground = false;
    }

    /// Edge-triggered jump. Only fires while grounded; clears the grounded
    /// flag immediately so the same press cannot double-fire.
    pub fn jump(&mut self, tuning: &Tuning, mods: &Modifiers) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vel_y = -tuning.base_jump * mods.jump_mult;
        self.on_ground = false;
        true
    }

    /// Advance one frame.
    ///
    /// `direction` is -1/0/+1 from the held movement keys (opposing keys
    /// cancel). Water and wind overlap are sampled against the position at
    /// the start of the frame, before any movement.
    pub fn step(
        &mut self,
        direction: i32,
        room: &RoomGeometry,
        season: Season,
        mods: &Modifiers,
        tuning: &Tuning,
    ) {
        let in_water = room.water.iter().any(|w| self.rect.overlaps(w));

        // 1. Horizontal intent from input
        self.vel_x = direction as f32 * tuning.base_speed * mods.speed_mult;

        // 2. Water drag while swimmable (Spring/Summer)
        if in_water && matches!(season, Season::Spring | Season::Summer) {
            self.vel_x *= tuning.water_drag * mods.water_drag_mult;
        }

        // 3. Autumn wind, once per overlapped zone
        if season == Season::Autumn {
            for zone in &room.wind {
                if self.rect.overlaps(zone) {
                    self.vel_x += mods.wind_push;
                }
            }
        }

        // 4. Gravity, clamped to terminal fall speed
        self.vel_y = (self.vel_y + tuning.base_gravity * mods.gravity_mult).min(tuning.max_fall);

        let platforms = room.active_platforms(season);

        // 5. Horizontal move, then push out of every overlapped platform.
        //    Only the position clamps; velocity is untouched.
        self.rect.pos.x += self.vel_x.round() as i32;
        for platform in &platforms {
            if self.rect.overlaps(platform) {
                if self.vel_x > 0.0 {
                    self.rect.set_right(platform.left());
                } else if self.vel_x < 0.0 {
                    self.rect.set_left(platform.right());
                }
            }
        }

        // 6. Vertical move and resolve; landing re-establishes grounding
        self.rect.pos.y += self.vel_y.round() as i32;
        self.on_ground = false;
        for platform in &platforms {
            if self.rect.overlaps(platform) {
                if self.vel_y > 0.0 {
                    self.rect.set_bottom(platform.top());
                    self.vel_y = 0.0;
                    self.on_ground = true;
                } else if self.vel_y < 0.0 {
                    self.rect.set_top(platform.bottom());
                    self.vel_y = 0.0;
                }
            }
        }

        // 7. Winter ice: residual horizontal velocity bleeds off slowly,
        //    giving the soft slide feel on frozen water
        if in_water && season == Season::Winter {
            self.vel_x *= tuning.ice_slip * mods.ice_slip;
        }

        // 8. Safety clamp: sides and ceiling only. The bottom stays open so
        //    falling out of the world remains observable to the run logic.
        self.rect.pos.x = self.rect.pos.x.clamp(0, ARENA_WIDTH - self.rect.size.x);
        if self.rect.pos.y < CEILING_Y {
            self.rect.pos.y = CEILING_Y;
        }
    }
}
