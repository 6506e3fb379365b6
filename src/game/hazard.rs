//! Hazards thrown at the player when a door timer runs out, plus the
//! rectangle maths shared with the player and door.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Axis-aligned overlap with strict inequalities: touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HazardKind {
    Fire,
    Arrow,
}

impl HazardKind {
    pub fn pick<R: Rng + ?Sized>(fire_chance: f64, rng: &mut R) -> Self {
        if rng.r#gen::<f64>() < fire_chance {
            HazardKind::Fire
        } else {
            HazardKind::Arrow
        }
    }

    // (y offset from the player's top, width, height)
    fn shape(self) -> (f64, f64, f64) {
        match self {
            HazardKind::Fire => (10.0, 28.0, 28.0),
            HazardKind::Arrow => (18.0, 40.0, 6.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hazard {
    pub kind: HazardKind,
    pub rect: Rect,
    /// Horizontal velocity in units per 60 Hz frame; always leftward.
    pub vx: f64,
    pub active: bool,
}

/// Outcome of moving a hazard one simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardStep {
    Flying,
    HitPlayer,
    LeftPlayfield,
}

impl Hazard {
    /// New hazard just off the right edge, level with the player.
    pub fn spawn(kind: HazardKind, player_y: f64, cfg: &GameConfig) -> Self {
        let (dy, w, h) = kind.shape();
        let speed = match kind {
            HazardKind::Fire => cfg.fire_speed,
            HazardKind::Arrow => cfg.arrow_speed,
        };
        Self {
            kind,
            rect: Rect::new(cfg.playfield_w + cfg.hazard_spawn_margin, player_y + dy, w, h),
            vx: -speed.abs(),
            active: true,
        }
    }

    pub fn advance(&mut self, dt: f64, player: &Rect, exit_x: f64) -> HazardStep {
        self.rect.x += self.vx * dt * 60.0;
        if self.rect.overlaps(player) {
            self.active = false;
            HazardStep::HitPlayer
        } else if self.rect.x < exit_x {
            self.active = false;
            HazardStep::LeftPlayfield
        } else {
            HazardStep::Flying
        }
    }
}
