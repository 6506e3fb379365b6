//! Typing-dungeon gameplay core.
//!
//! The player stands in front of a door showing a target word. Typing it exactly
//! before the countdown ends opens the door and moves on to the next room;
//! letting the countdown run out throws a hazard, costs a life and restarts the
//! room with a new word. Everything here is platform independent: the browser
//! glue in `crate::web` feeds keys and animation-frame timestamps into a
//! [`Game`] and draws its [`Snapshot`].
//!
//! Frame order: delayed events that became due are applied first, then one
//! simulation step (delta capped at `GameConfig::max_step_s`) runs.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub mod config;
pub mod hazard;
pub mod round;
pub mod schedule;
pub mod scoring;
pub mod snapshot;
pub mod words;

pub use config::{ConfigError, GameConfig};
pub use hazard::{Hazard, HazardKind, HazardStep, Rect};
pub use round::{CharMark, MarkedChar, Phase, Round};
pub use schedule::{EventKind, Scheduled, Scheduler};
pub use scoring::{Advance, Award, Progress, format_score};
pub use snapshot::Snapshot;

/// Keyboard input as the core understands it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    /// Toggles pause.
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Backspace" => Key::Backspace,
            "Escape" => Key::Escape,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// What asked for the pause; the overlay wording differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseSource {
    Button,
    Key,
}

/// Modal message shown over the playfield.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    Paused(PauseSource),
    GameOver { score: u64 },
    Won { score: u64, streak: u32 },
}

impl Overlay {
    pub fn title(&self) -> &'static str {
        match self {
            Overlay::Paused(_) => "Paused",
            Overlay::GameOver { .. } => "☠ Game Over",
            Overlay::Won { .. } => "🎉 Treasure Found!",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Overlay::Paused(PauseSource::Button) => "Take a short break.".to_string(),
            Overlay::Paused(PauseSource::Key) => "Press Resume to continue.".to_string(),
            Overlay::GameOver { score } => format!(
                "Final Score: {}. Press Restart to try again.",
                format_score(*score)
            ),
            Overlay::Won { score, streak } => format!(
                "You cleared all rooms with a score of {} and a streak of {}.",
                format_score(*score),
                streak
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Walking velocity in units per 60 Hz frame; non-zero only while leaving a room.
    pub vx: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Door {
    pub rect: Rect,
    /// 0 closed .. 1 fully open.
    pub open: f64,
}

/// Everything the simulation mutates.
#[derive(Clone, Debug)]
pub struct GameState {
    pub progress: Progress,
    pub paused: bool,
    pub over: bool,
    pub won: bool,
    pub round: Round,
    pub player: Player,
    pub door: Door,
    pub hazard: Option<Hazard>,
    /// A hazard already hit the player this round (frame-level collision).
    pub struck: bool,
    pub shake_frames: u32,
    /// Simulated seconds since start.
    pub t: f64,
    pub last_award: Option<Award>,
    pub overlay: Option<Overlay>,
}

pub struct Game<R = SmallRng> {
    cfg: GameConfig,
    rng: R,
    state: GameState,
    scheduler: Scheduler,
    next_round_id: u64,
    last_frame_ms: Option<f64>,
}

impl Game<SmallRng> {
    /// Game seeded from the platform entropy source.
    pub fn new(cfg: GameConfig) -> Self {
        Self::with_rng(cfg, SmallRng::from_entropy())
    }

    pub fn seeded(cfg: GameConfig, seed: u64) -> Self {
        Self::with_rng(cfg, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(cfg: GameConfig, mut rng: R) -> Self {
        let target = words::generate_target(1, cfg.lengthen_from_level, &mut rng);
        let round = Round::new(1, target, cfg.round_time(1));
        let state = GameState {
            progress: Progress::new(cfg.starting_lives),
            paused: false,
            over: false,
            won: false,
            round,
            player: Player {
                rect: Rect::new(cfg.player_start_x, cfg.player_y(), cfg.player_w, cfg.player_h),
                vx: 0.0,
            },
            door: Door {
                rect: Rect::new(cfg.door_x, cfg.door_y(), cfg.door_w, cfg.door_h),
                open: 0.0,
            },
            hazard: None,
            struck: false,
            shake_frames: 0,
            t: 0.0,
            last_award: None,
            overlay: None,
        };
        info!("new game: target {:?}", state.round.target());
        Self {
            cfg,
            rng,
            state,
            scheduler: Scheduler::new(),
            next_round_id: 2,
            last_frame_ms: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_events(&self) -> usize {
        self.scheduler.pending()
    }

    fn accepts_input(&self) -> bool {
        !self.state.paused && !self.state.over
    }

    // --- Input ---------------------------------------------------------------

    /// Feed one key press. Returns true if it changed the game.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(c) => self.type_char(c),
            Key::Backspace => self.backspace(),
            Key::Escape => self.toggle_pause(),
            Key::Other => false,
        }
    }

    pub fn type_char(&mut self, c: char) -> bool {
        if !self.accepts_input() || self.state.round.phase != Phase::Typing || c.is_control() {
            return false;
        }
        if self.state.round.append_char(c) {
            self.succeed();
        }
        true
    }

    pub fn backspace(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.state.round.backspace()
    }

    // --- Commands ------------------------------------------------------------

    pub fn pause(&mut self) -> bool {
        self.pause_from(PauseSource::Button)
    }

    fn pause_from(&mut self, source: PauseSource) -> bool {
        if self.state.over || self.state.paused {
            return false;
        }
        self.state.paused = true;
        self.state.overlay = Some(Overlay::Paused(source));
        debug!("paused in {:?} via {:?}", self.state.round.phase, source);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.over || !self.state.paused {
            return false;
        }
        self.state.paused = false;
        self.state.overlay = None;
        debug!("resumed in {:?}", self.state.round.phase);
        true
    }

    /// Escape key: pause, or resume when already paused.
    pub fn toggle_pause(&mut self) -> bool {
        if self.state.paused {
            self.resume()
        } else {
            self.pause_from(PauseSource::Key)
        }
    }

    /// Back to level 1 with full lives from any state. Pending events are
    /// dropped and the new round id makes any survivor stale.
    pub fn restart(&mut self) {
        self.scheduler.clear();
        let s = &mut self.state;
        s.progress = Progress::new(self.cfg.starting_lives);
        s.paused = false;
        s.over = false;
        s.won = false;
        s.overlay = None;
        s.shake_frames = 0;
        s.last_award = None;
        self.new_round();
        info!("restart");
    }

    // --- Frame loop ------------------------------------------------------------

    /// Drive the game from an animation-frame timestamp in milliseconds.
    pub fn frame(&mut self, now_ms: f64) {
        let elapsed = match self.last_frame_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        self.step(elapsed);
    }

    /// Advance by `elapsed_ms` of wall-clock time: due events first, then one
    /// capped simulation step.
    pub fn step(&mut self, elapsed_ms: f64) {
        if !(self.state.paused && self.cfg.delays_pause_with_game) {
            self.scheduler.advance(elapsed_ms);
        }
        while let Some(ev) = self.scheduler.pop_due() {
            self.fire(ev);
        }
        if self.accepts_input() {
            let dt = (elapsed_ms.max(0.0) / 1000.0).min(self.cfg.max_step_s);
            self.update(dt);
        }
    }

    fn update(&mut self, dt: f64) {
        let cfg = &self.cfg;
        let s = &mut self.state;
        s.t += dt;

        if s.round.phase == Phase::Succeeding {
            s.door.open = (s.door.open + dt * cfg.door_open_rate).clamp(0.0, 1.0);
        }

        let expired = s.round.tick(dt);

        if s.player.vx != 0.0 {
            s.player.rect.x += s.player.vx * dt * 60.0;
            if s.player.rect.x > s.door.rect.x + s.door.rect.w + 20.0 {
                s.player.vx = 0.0;
            }
        }

        if let Some(h) = s.hazard.as_mut() {
            match h.advance(dt, &s.player.rect, cfg.hazard_exit_x) {
                HazardStep::Flying => {}
                HazardStep::HitPlayer => {
                    debug!("{:?} hit the player", h.kind);
                    s.hazard = None;
                    s.struck = true;
                    s.shake_frames = cfg.impact_shake_frames;
                }
                HazardStep::LeftPlayfield => s.hazard = None,
            }
        }

        s.shake_frames = s.shake_frames.saturating_sub(1);

        if expired {
            self.fail();
        }
    }

    // --- Round transitions -------------------------------------------------------

    fn new_round(&mut self) {
        let id = self.next_round_id;
        self.next_round_id += 1;
        let level = self.state.progress.level;
        let target = words::generate_target(level, self.cfg.lengthen_from_level, &mut self.rng);
        info!("round {id}: level {level}, target {target:?}");
        let s = &mut self.state;
        s.round = Round::new(id, target, self.cfg.round_time(level));
        s.door.open = 0.0;
        s.player.rect.x = self.cfg.player_start_x;
        s.player.vx = 0.0;
        s.hazard = None;
        s.struck = false;
    }

    fn succeed(&mut self) {
        let s = &mut self.state;
        s.round.phase = Phase::Succeeding;
        let award = s
            .progress
            .record_success(s.round.time_left(), s.round.round_time());
        s.last_award = Some(award);
        s.player.vx = self.cfg.player_speed * 1.2;
        info!(
            "door opened: +{} (streak {}), score {}",
            award.total(),
            s.progress.streak,
            s.progress.score
        );
        self.scheduler
            .schedule(self.cfg.success_delay_ms, s.round.id, EventKind::AdvanceRoom);
    }

    fn fail(&mut self) {
        let s = &mut self.state;
        if s.round.phase != Phase::Typing || s.paused || s.over {
            return;
        }
        s.round.phase = Phase::Failing;
        let kind = HazardKind::pick(self.cfg.fire_chance, &mut self.rng);
        s.hazard = Some(Hazard::spawn(kind, s.player.rect.y, &self.cfg));
        info!("time up on round {}: {:?} incoming", s.round.id, kind);
        self.scheduler
            .schedule(self.cfg.failure_delay_ms, s.round.id, EventKind::ResolveFailure);
    }

    fn fire(&mut self, ev: Scheduled) {
        if ev.round_id != self.state.round.id || self.state.over {
            debug!("dropping stale {:?} for round {}", ev.kind, ev.round_id);
            return;
        }
        match ev.kind {
            EventKind::ResolveFailure => self.resolve_failure(),
            EventKind::AdvanceRoom => self.advance_room(),
        }
    }

    fn resolve_failure(&mut self) {
        let s = &mut self.state;
        if s.round.phase != Phase::Failing {
            return;
        }
        let overlapping = s
            .hazard
            .as_ref()
            .is_some_and(|h| h.rect.overlaps(&s.player.rect));
        if s.struck || overlapping {
            s.shake_frames = self.cfg.resolve_shake_frames;
        }
        if s.progress.lose_life() {
            info!("life lost, {} left", s.progress.lives);
            self.new_round();
        } else {
            s.over = true;
            s.hazard = None;
            s.overlay = Some(Overlay::GameOver {
                score: s.progress.score,
            });
            info!("game over, final score {}", s.progress.score);
        }
    }

    fn advance_room(&mut self) {
        if self.state.round.phase != Phase::Succeeding {
            return;
        }
        self.state.player.vx = 0.0;
        match self.state.progress.advance(self.cfg.max_level) {
            Advance::NextLevel(level) => {
                debug!("entering level {level}");
                self.new_round();
            }
            Advance::Won => {
                let s = &mut self.state;
                s.won = true;
                s.over = true;
                s.overlay = Some(Overlay::Won {
                    score: s.progress.score,
                    streak: s.progress.streak,
                });
                info!(
                    "treasure found: score {}, streak {}",
                    s.progress.score, s.progress.streak
                );
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.cfg)
    }

    #[cfg(feature = "serde_json")]
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn game() -> Game {
        Game::seeded(GameConfig::default(), 7)
    }

    fn with_target(g: &mut Game, target: &str) {
        let id = g.state.round.id;
        let rt = g.state.round.round_time();
        g.state.round = Round::new(id, target.to_string(), rt);
    }

    fn type_str(g: &mut Game, s: &str) {
        for c in s.chars() {
            g.type_char(c);
        }
    }

    fn run_ms(g: &mut Game, ms: f64) {
        let mut left = ms;
        while left > 0.0 {
            let step = left.min(FRAME_MS);
            g.step(step);
            left -= step;
        }
    }

    fn expire_timer(g: &mut Game) {
        g.state.round.set_time_left(0.001);
        g.step(FRAME_MS);
        assert_eq!(g.state.round.phase, Phase::Failing);
    }

    #[test]
    fn brave_at_full_time_scores_210() {
        let mut g = game();
        with_target(&mut g, "brave");
        type_str(&mut g, "brave");
        assert_eq!(g.state.round.phase, Phase::Succeeding);
        assert_eq!(g.state.progress.score, 210);
        assert_eq!(g.state.progress.streak, 1);
        assert_eq!(g.state.last_award, Some(Award { points: 200, streak_bonus: 10 }));
    }

    #[test]
    fn match_at_zero_time_scores_base_100() {
        let mut g = game();
        with_target(&mut g, "vault");
        g.state.round.set_time_left(0.0);
        type_str(&mut g, "vault");
        assert_eq!(g.state.last_award.unwrap().points, 100);
    }

    #[test]
    fn success_advances_level_after_delay() {
        let mut g = game();
        with_target(&mut g, "onyx");
        type_str(&mut g, "onyx");
        run_ms(&mut g, 990.0);
        assert_eq!(g.state.progress.level, 1);
        assert!(g.state.door.open > 0.0);
        assert!(g.state.player.rect.x > 80.0);
        run_ms(&mut g, 20.0);
        assert_eq!(g.state.progress.level, 2);
        assert_eq!(g.state.round.phase, Phase::Typing);
        assert_eq!(g.state.door.open, 0.0);
        assert_eq!(g.state.player.rect.x, 80.0);
        assert!((g.state.round.round_time() - 9.2).abs() < 1e-9);
        assert!(g.state.round.time_left() > 9.1);
    }

    #[test]
    fn input_ignored_while_door_opens() {
        let mut g = game();
        with_target(&mut g, "onyx");
        type_str(&mut g, "onyx");
        assert!(!g.type_char('x'));
        assert!(!g.backspace());
        assert_eq!(g.state.round.typed(), "onyx");
    }

    #[test]
    fn timer_expiry_spawns_one_hazard_and_schedules_resolution() {
        let mut g = game();
        expire_timer(&mut g);
        assert!(g.state.hazard.is_some());
        assert_eq!(g.pending_events(), 1);
        run_ms(&mut g, 100.0);
        assert_eq!(g.pending_events(), 1);
    }

    #[test]
    fn failure_costs_a_life_and_resets_streak() {
        let mut g = game();
        g.state.progress.streak = 3;
        let first_round = g.state.round.id;
        expire_timer(&mut g);
        run_ms(&mut g, 820.0);
        assert_eq!(g.state.progress.lives, 2);
        assert_eq!(g.state.progress.streak, 0);
        assert_ne!(g.state.round.id, first_round);
        assert_eq!(g.state.round.phase, Phase::Typing);
        assert!(g.state.hazard.is_none());
        assert_eq!(g.state.round.round_time(), 10.0);
        assert!(g.state.round.time_left() > 9.9);
    }

    #[test]
    fn overlap_at_resolution_shakes_and_costs_life() {
        let cfg = GameConfig {
            fire_chance: 1.0,
            ..GameConfig::default()
        };
        let mut g = Game::seeded(cfg, 1);
        expire_timer(&mut g);
        let player = g.state.player.rect;
        let h = g.state.hazard.as_mut().unwrap();
        assert_eq!(h.kind, HazardKind::Fire);
        h.rect.x = player.x + 4.0;
        assert!(!g.state.struck);
        g.fire(Scheduled {
            due_ms: 0.0,
            round_id: g.state.round.id,
            kind: EventKind::ResolveFailure,
        });
        assert_eq!(g.state.progress.lives, 2);
        assert_eq!(g.state.shake_frames, 12);
    }

    #[test]
    fn frame_level_hit_still_costs_life_at_resolution() {
        let cfg = GameConfig {
            fire_chance: 1.0,
            ..GameConfig::default()
        };
        let mut g = Game::seeded(cfg, 1);
        expire_timer(&mut g);
        let player = g.state.player.rect;
        g.state.hazard.as_mut().unwrap().rect.x = player.x + player.w + 2.0;
        g.step(FRAME_MS);
        assert!(g.state.hazard.is_none(), "frame-level hit clears the hazard");
        assert!(g.state.struck);
        assert_eq!(g.state.progress.lives, 3, "no life lost at impact");
        run_ms(&mut g, 800.0);
        assert_eq!(g.state.progress.lives, 2);
    }

    #[test]
    fn no_overlap_at_resolution_means_no_shake() {
        let mut g = game();
        expire_timer(&mut g);
        g.state.shake_frames = 0;
        run_ms(&mut g, 820.0);
        assert_eq!(g.state.progress.lives, 2);
        assert_eq!(g.state.shake_frames, 0);
    }

    #[test]
    fn last_life_ends_the_game() {
        let mut g = game();
        g.state.progress.lives = 1;
        g.state.progress.score = 1234;
        expire_timer(&mut g);
        run_ms(&mut g, 820.0);
        assert!(g.state.over);
        assert!(!g.state.won);
        assert_eq!(g.state.progress.lives, 0);
        assert_eq!(g.state.overlay, Some(Overlay::GameOver { score: 1234 }));
        assert!(!g.type_char('a'));
        assert!(!g.handle_key(Key::Escape));
        let before = g.state.round.time_left();
        run_ms(&mut g, 5000.0);
        assert_eq!(g.state.round.time_left(), before);
    }

    #[test]
    fn winning_final_level_ends_the_run() {
        let cfg = GameConfig {
            max_level: 2,
            ..GameConfig::default()
        };
        let mut g = Game::seeded(cfg, 3);
        for _ in 0..2 {
            let target = g.state.round.target().to_string();
            type_str(&mut g, &target);
            run_ms(&mut g, 1020.0);
        }
        assert!(g.state.won && g.state.over);
        assert_eq!(g.state.progress.level, 2);
        assert_eq!(g.state.progress.streak, 2);
        assert_eq!(g.pending_events(), 0);
        assert!(matches!(g.state.overlay, Some(Overlay::Won { streak: 2, .. })));
    }

    #[test]
    fn pause_freezes_timer_input_and_pending_events() {
        let mut g = game();
        expire_timer(&mut g);
        assert!(g.pause());
        run_ms(&mut g, 5000.0);
        assert_eq!(g.state.progress.lives, 3);
        assert!(!g.type_char('a'));
        assert!(g.resume());
        run_ms(&mut g, 820.0);
        assert_eq!(g.state.progress.lives, 2);
    }

    #[test]
    fn wall_clock_delays_can_ignore_pause() {
        let cfg = GameConfig {
            delays_pause_with_game: false,
            ..GameConfig::default()
        };
        let mut g = Game::seeded(cfg, 4);
        expire_timer(&mut g);
        g.pause();
        run_ms(&mut g, 820.0);
        assert_eq!(g.state.progress.lives, 2);
        assert!(g.state.paused);
        let t = g.state.round.time_left();
        run_ms(&mut g, 500.0);
        assert_eq!(g.state.round.time_left(), t, "simulation stays paused");
    }

    #[test]
    fn pause_during_door_opening_resumes_the_success_window() {
        let mut g = game();
        with_target(&mut g, "ember");
        type_str(&mut g, "ember");
        run_ms(&mut g, 500.0);
        assert!(g.pause());
        let open = g.state.door.open;
        let x = g.state.player.rect.x;
        run_ms(&mut g, 5000.0);
        assert_eq!(g.state.progress.level, 1);
        assert_eq!(g.state.door.open, open);
        assert_eq!(g.state.player.rect.x, x);
        assert_eq!(g.pending_events(), 1);

        assert!(g.resume());
        assert_eq!(g.state.round.phase, Phase::Succeeding);
        run_ms(&mut g, 450.0);
        assert_eq!(g.state.progress.level, 1);
        assert!(g.state.door.open > open);
        run_ms(&mut g, 70.0);
        assert_eq!(g.state.progress.level, 2);
        assert_eq!(g.state.round.phase, Phase::Typing);
        assert_eq!(g.pending_events(), 0);
    }

    #[test]
    fn wall_clock_advance_fires_while_paused() {
        let cfg = GameConfig {
            delays_pause_with_game: false,
            ..GameConfig::default()
        };
        let mut g = Game::seeded(cfg, 5);
        with_target(&mut g, "ember");
        type_str(&mut g, "ember");
        assert!(g.pause());
        run_ms(&mut g, 1020.0);
        assert_eq!(g.state.progress.level, 2);
        assert_eq!(g.state.round.phase, Phase::Typing);
        assert!(g.state.paused);
        assert_eq!(g.pending_events(), 0);
    }

    #[test]
    fn stale_event_after_restart_is_ignored() {
        let mut g = game();
        expire_timer(&mut g);
        let stale = Scheduled {
            due_ms: 0.0,
            round_id: g.state.round.id,
            kind: EventKind::ResolveFailure,
        };
        g.restart();
        g.fire(stale);
        assert_eq!(g.state.progress.lives, 3);
        assert_eq!(g.state.round.phase, Phase::Typing);
    }

    #[test]
    fn restart_resets_everything() {
        let mut g = game();
        g.state.progress = Progress {
            level: 4,
            score: 900,
            streak: 2,
            lives: 1,
        };
        g.pause();
        let old_id = g.state.round.id;
        g.restart();
        assert_eq!(g.state.progress, Progress::new(3));
        assert!(!g.state.paused && !g.state.over && !g.state.won);
        assert!(g.state.round.id > old_id);
        assert_eq!(g.state.round.time_left(), 10.0);
        assert_eq!(g.state.round.typed(), "");
        assert!(g.state.overlay.is_none());
    }

    #[test]
    fn frame_delta_is_capped() {
        let mut g = game();
        g.frame(0.0);
        g.frame(5000.0);
        assert!((g.state.round.time_left() - (10.0 - 0.033)).abs() < 1e-9);
    }

    #[test]
    fn escape_toggles_pause() {
        let mut g = game();
        assert!(g.handle_key(Key::Escape));
        assert!(g.state.paused);
        assert_eq!(g.state.overlay, Some(Overlay::Paused(PauseSource::Key)));
        assert!(g.handle_key(Key::Escape));
        assert!(!g.state.paused);
    }

    #[test]
    fn pause_wording_depends_on_source() {
        let mut g = game();
        g.pause();
        let button = g.state.overlay.clone().unwrap();
        assert_eq!(button, Overlay::Paused(PauseSource::Button));
        assert_eq!(button.message(), "Take a short break.");
        g.resume();
        g.handle_key(Key::Escape);
        let key = g.state.overlay.clone().unwrap();
        assert_eq!(key.title(), "Paused");
        assert_eq!(key.message(), "Press Resume to continue.");
    }

    #[test]
    fn dom_keys_map_to_core_keys() {
        assert_eq!(Key::from_dom("a"), Key::Char('a'));
        assert_eq!(Key::from_dom(" "), Key::Char(' '));
        assert_eq!(Key::from_dom("Backspace"), Key::Backspace);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("Shift"), Key::Other);
        assert_eq!(Key::from_dom("ArrowUp"), Key::Other);
    }
}
