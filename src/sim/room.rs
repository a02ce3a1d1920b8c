//! Room geometry and templates
//!
//! A room is one traversal segment: always-solid platforms, season-gated
//! platforms, hazards, water, wind zones, and a single exit. Geometry is
//! immutable once built; the only season-dependent behavior a room exposes
//! is which rectangles are solid ([`RoomGeometry::active_platforms`]) and
//! whether hazards bite ([`RoomGeometry::hazard_active`]).

use glam::IVec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::season::Season;
use crate::consts::{ARENA_WIDTH, GROUND_Y};

/// Visual/material tag for a seasonal platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Vine,
    Ice,
}

/// A platform that is solid only in its tagged seasons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalPlatform {
    pub rect: Rect,
    pub seasons: Vec<Season>,
    pub kind: SurfaceKind,
}

impl SeasonalPlatform {
    pub fn solid_in(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }
}

/// Immutable geometry for one room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomGeometry {
    pub base_platforms: Vec<Rect>,
    pub seasonal_platforms: Vec<SeasonalPlatform>,
    pub hazards: Vec<Rect>,
    pub water: Vec<Rect>,
    pub wind: Vec<Rect>,
    pub exit: Rect,
    /// Actor spawn point (top-left of the actor rect on room entry)
    pub spawn: IVec2,
}

impl RoomGeometry {
    /// All rectangles that are solid in `season`: base platforms, seasonal
    /// platforms tagged with it, and water surfaces frozen over in Winter.
    pub fn active_platforms(&self, season: Season) -> Vec<Rect> {
        let mut active = self.base_platforms.clone();
        active.extend(
            self.seasonal_platforms
                .iter()
                .filter(|p| p.solid_in(season))
                .map(|p| p.rect),
        );
        if season == Season::Winter {
            active.extend(self.water.iter().copied());
        }
        active
    }

    /// Whether hazard rectangles are lethal right now. Thorns bite in
    /// Summer and Autumn; in Spring only under the Brittle Thorns seed;
    /// Winter is always safe.
    pub fn hazard_active(&self, season: Season, brittle_thorns: bool) -> bool {
        match season {
            Season::Summer | Season::Autumn => true,
            Season::Spring => brittle_thorns,
            Season::Winter => false,
        }
    }
}

/// The built-in room layouts. A run picks from these with replacement.
pub fn builtin_templates() -> Vec<RoomGeometry> {
    vec![
        RoomGeometry {
            base_platforms: vec![
                Rect::new(0, GROUND_Y, ARENA_WIDTH, 50),
                Rect::new(190, 430, 170, 20),
                Rect::new(450, 360, 180, 20),
            ],
            seasonal_platforms: vec![
                SeasonalPlatform {
                    rect: Rect::new(330, 300, 130, 16),
                    seasons: vec![Season::Spring, Season::Autumn],
                    kind: SurfaceKind::Vine,
                },
                SeasonalPlatform {
                    rect: Rect::new(690, 270, 170, 16),
                    seasons: vec![Season::Winter],
                    kind: SurfaceKind::Ice,
                },
            ],
            hazards: vec![Rect::new(560, GROUND_Y - 18, 130, 18)],
            water: vec![Rect::new(95, GROUND_Y - 18, 180, 18)],
            wind: vec![Rect::new(640, 210, 200, 220)],
            exit: Rect::new(900, GROUND_Y - 70, 44, 70),
            spawn: IVec2::new(70, 420),
        },
        RoomGeometry {
            base_platforms: vec![
                Rect::new(0, GROUND_Y, ARENA_WIDTH, 50),
                Rect::new(160, 390, 120, 20),
                Rect::new(350, 330, 140, 20),
                Rect::new(560, 285, 120, 20),
            ],
            seasonal_platforms: vec![
                SeasonalPlatform {
                    rect: Rect::new(285, 445, 110, 16),
                    seasons: vec![Season::Winter],
                    kind: SurfaceKind::Ice,
                },
                SeasonalPlatform {
                    rect: Rect::new(725, 250, 145, 16),
                    seasons: vec![Season::Spring, Season::Autumn],
                    kind: SurfaceKind::Vine,
                },
            ],
            hazards: vec![Rect::new(380, GROUND_Y - 18, 120, 18)],
            water: vec![Rect::new(640, GROUND_Y - 20, 210, 20)],
            wind: vec![Rect::new(95, 220, 180, 230)],
            exit: Rect::new(902, 180, 40, 68),
            spawn: IVec2::new(70, 420),
        },
        RoomGeometry {
            base_platforms: vec![
                Rect::new(0, GROUND_Y, ARENA_WIDTH, 50),
                Rect::new(105, 455, 160, 20),
                Rect::new(360, 415, 160, 20),
                Rect::new(620, 360, 150, 20),
            ],
            seasonal_platforms: vec![
                SeasonalPlatform {
                    rect: Rect::new(500, 300, 130, 16),
                    seasons: vec![Season::Spring, Season::Autumn],
                    kind: SurfaceKind::Vine,
                },
                SeasonalPlatform {
                    rect: Rect::new(260, 310, 130, 16),
                    seasons: vec![Season::Winter],
                    kind: SurfaceKind::Ice,
                },
            ],
            hazards: vec![
                Rect::new(140, GROUND_Y - 16, 135, 16),
                Rect::new(810, GROUND_Y - 16, 90, 16),
            ],
            water: vec![Rect::new(430, GROUND_Y - 18, 200, 18)],
            wind: vec![Rect::new(700, 210, 160, 210)],
            exit: Rect::new(34, 380, 38, 70),
            spawn: IVec2::new(70, 420),
        },
    ]
}

/// Build a run's room sequence by sampling templates with replacement
pub fn sample_rooms(rng: &mut Pcg32, templates: &[RoomGeometry], count: usize) -> Vec<RoomGeometry> {
    use rand::Rng;
    assert!(!templates.is_empty(), "room template set is empty");
    assert!(count > 0, "a run needs at least one room");
    (0..count)
        .map(|_| templates[rng.random_range(0..templates.len())].clone())
        .collect()
}
