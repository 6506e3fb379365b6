//! Tunable constants for a run. `GameConfig::default()` reproduces the classic
//! seven-room dungeon; a JSON document can override any subset of fields when
//! the `serde_json` feature is enabled.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub max_level: u32,
    pub starting_lives: u32,
    // round_time(level) = max(floor, base - (level - 1) * step)
    pub round_time_base: f64,
    pub round_time_step: f64,
    pub round_time_floor: f64,
    /// Wall-clock delay before a failed round is resolved.
    pub failure_delay_ms: f64,
    /// Wall-clock delay between a solved door and the next room.
    pub success_delay_ms: f64,
    /// Upper bound on one simulation step, in seconds.
    pub max_step_s: f64,
    pub playfield_w: f64,
    pub playfield_h: f64,
    pub player_start_x: f64,
    pub player_w: f64,
    pub player_h: f64,
    /// Walking speed in units per 60 Hz frame.
    pub player_speed: f64,
    pub door_x: f64,
    pub door_w: f64,
    pub door_h: f64,
    /// Door open-ratio gained per second while the success walk plays.
    pub door_open_rate: f64,
    pub fire_chance: f64,
    pub fire_speed: f64,
    pub arrow_speed: f64,
    pub hazard_spawn_margin: f64,
    pub hazard_exit_x: f64,
    pub resolve_shake_frames: u32,
    pub impact_shake_frames: u32,
    /// Levels at or above this may get a lengthened word.
    pub lengthen_from_level: u32,
    /// When true, pending delayed events are frozen while the game is paused.
    pub delays_pause_with_game: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_level: 7,
            starting_lives: 3,
            round_time_base: 10.0,
            round_time_step: 0.8,
            round_time_floor: 5.0,
            failure_delay_ms: 800.0,
            success_delay_ms: 1000.0,
            max_step_s: 0.033,
            playfield_w: 960.0,
            playfield_h: 540.0,
            player_start_x: 80.0,
            player_w: 36.0,
            player_h: 52.0,
            player_speed: 3.2,
            door_x: 560.0,
            door_w: 80.0,
            door_h: 140.0,
            door_open_rate: 1.2,
            fire_chance: 0.6,
            fire_speed: 6.0,
            arrow_speed: 8.0,
            hazard_spawn_margin: 40.0,
            hazard_exit_x: -60.0,
            resolve_shake_frames: 12,
            impact_shake_frames: 10,
            lengthen_from_level: 5,
            delays_pause_with_game: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    #[cfg(feature = "serde_json")]
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "serde_json")]
            ConfigError::Parse(e) => write!(f, "malformed config: {e}"),
            ConfigError::Invalid(what) => write!(f, "invalid config: {what}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde_json")]
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Round duration in seconds for a 1-based level.
    pub fn round_time(&self, level: u32) -> f64 {
        let steps = level.saturating_sub(1) as f64;
        (self.round_time_base - steps * self.round_time_step).max(self.round_time_floor)
    }

    pub fn player_y(&self) -> f64 {
        self.playfield_h - 140.0
    }

    pub fn door_y(&self) -> f64 {
        self.playfield_h - 200.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::Invalid("max_level must be at least 1"));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be at least 1"));
        }
        if !(self.round_time_floor > 0.0 && self.round_time_base >= self.round_time_floor) {
            return Err(ConfigError::Invalid(
                "round_time_base must be >= round_time_floor > 0",
            ));
        }
        if self.round_time_step < 0.0 {
            return Err(ConfigError::Invalid("round_time_step must not be negative"));
        }
        if self.failure_delay_ms <= 0.0 || self.success_delay_ms <= 0.0 {
            return Err(ConfigError::Invalid("delays must be positive"));
        }
        if self.max_step_s <= 0.0 {
            return Err(ConfigError::Invalid("max_step_s must be positive"));
        }
        if !(0.0..=1.0).contains(&self.fire_chance) {
            return Err(ConfigError::Invalid("fire_chance must be within 0..=1"));
        }
        if self.playfield_w <= 0.0
            || self.playfield_h <= 0.0
            || self.player_w <= 0.0
            || self.player_h <= 0.0
            || self.door_w <= 0.0
            || self.door_h <= 0.0
        {
            return Err(ConfigError::Invalid("geometry must be positive"));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config and validate it.
    #[cfg(feature = "serde_json")]
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
