//! Score, streak, lives and level bookkeeping.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Points for solving a door: 100 base plus up to 100 for speed.
pub fn round_points(time_left: f64, round_time: f64) -> u64 {
    let ratio = if round_time > 0.0 {
        (time_left / round_time).clamp(0.0, 1.0)
    } else {
        0.0
    };
    100 + (100.0 * ratio).round() as u64
}

/// Score awarded by one success, split for HUD feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Award {
    pub points: u64,
    pub streak_bonus: u64,
}

impl Award {
    pub fn total(&self) -> u64 {
        self.points + self.streak_bonus
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    NextLevel(u32),
    Won,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Progress {
    pub level: u32,
    pub score: u64,
    pub streak: u32,
    pub lives: u32,
}

impl Progress {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            level: 1,
            score: 0,
            streak: 0,
            lives: starting_lives,
        }
    }

    /// Bump the streak first, then score the round including the new streak bonus.
    pub fn record_success(&mut self, time_left: f64, round_time: f64) -> Award {
        self.streak += 1;
        let award = Award {
            points: round_points(time_left, round_time),
            streak_bonus: self.streak as u64 * 10,
        };
        self.score += award.total();
        award
    }

    /// Take one life. Returns true if the player is still alive, in which case
    /// the streak is broken.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            return false;
        }
        self.streak = 0;
        true
    }

    pub fn advance(&mut self, max_level: u32) -> Advance {
        if self.level < max_level {
            self.level += 1;
            Advance::NextLevel(self.level)
        } else {
            Advance::Won
        }
    }
}

/// Group digits the way the HUD shows them: last three digits, then pairs
/// (1,23,45,678).
pub fn format_score(score: u64) -> String {
    let digits = score.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
