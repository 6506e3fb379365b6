//! Read-only view of a game for renderers and the DOM HUD.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::config::GameConfig;
use super::hazard::{HazardKind, Rect};
use super::round::{MarkedChar, Phase};
use super::GameState;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HazardView {
    pub kind: HazardKind,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OverlayView {
    pub title: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Snapshot {
    pub target: String,
    pub typed: String,
    pub chars: Vec<MarkedChar>,
    pub mismatch: bool,
    pub phase: Phase,
    pub timer_ratio: f64,
    pub time_left: f64,
    pub door: Rect,
    pub door_open: f64,
    pub player: Rect,
    pub hazard: Option<HazardView>,
    pub score: u64,
    pub streak: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub level: u32,
    pub max_level: u32,
    pub paused: bool,
    pub over: bool,
    pub won: bool,
    pub shake_frames: u32,
    /// The treasure chest sits behind the final door.
    pub treasure_visible: bool,
    pub overlay: Option<OverlayView>,
    pub playfield_w: f64,
    pub playfield_h: f64,
}

impl Snapshot {
    pub fn capture(state: &GameState, cfg: &GameConfig) -> Self {
        let (chars, mismatch) = state.round.marks();
        Self {
            target: state.round.target().to_string(),
            typed: state.round.typed().to_string(),
            chars,
            mismatch,
            phase: state.round.phase,
            timer_ratio: state.round.time_ratio(),
            time_left: state.round.time_left(),
            door: state.door.rect,
            door_open: state.door.open,
            player: state.player.rect,
            hazard: state.hazard.as_ref().map(|h| HazardView {
                kind: h.kind,
                rect: h.rect,
            }),
            score: state.progress.score,
            streak: state.progress.streak,
            lives: state.progress.lives,
            max_lives: cfg.starting_lives,
            level: state.progress.level,
            max_level: cfg.max_level,
            paused: state.paused,
            over: state.over,
            won: state.won,
            shake_frames: state.shake_frames,
            treasure_visible: state.progress.level == cfg.max_level,
            overlay: state.overlay.as_ref().map(|o| OverlayView {
                title: o.title(),
                message: o.message(),
            }),
            playfield_w: cfg.playfield_w,
            playfield_h: cfg.playfield_h,
        }
    }

    /// Countdown text for the HUD, e.g. "7.3s".
    pub fn timer_text(&self) -> String {
        format!("{:.1}s", self.time_left)
    }
}
