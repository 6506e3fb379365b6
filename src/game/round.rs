//! One door challenge: the target word, what has been typed so far and the
//! countdown. Pause / game-over gating happens in [`super::Game`]; a `Round`
//! only knows its own phase.

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// Accepting keystrokes, timer running.
    Typing,
    /// Door opening, waiting for the advance event.
    Succeeding,
    /// Timer expired, hazard in flight, waiting for the resolution event.
    Failing,
}

/// Display state of one character in the typing panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharMark {
    Correct,
    Wrong,
    /// Not yet typed, prefix so far is correct.
    Pending,
    /// Not yet typed, but an earlier character is wrong.
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MarkedChar {
    pub ch: char,
    pub mark: CharMark,
}

/// Typed characters compared position by position against the target,
/// followed by the untyped remainder of the target. Returns the marks and
/// whether any typed character is wrong.
pub fn decompose(typed: &str, target: &str) -> (Vec<MarkedChar>, bool) {
    let target_chars: Vec<char> = target.chars().collect();
    let mut marks = Vec::with_capacity(target_chars.len().max(typed.len()));
    let mut mismatch = false;
    let mut typed_len = 0;
    for (i, ch) in typed.chars().enumerate() {
        let ok = target_chars.get(i) == Some(&ch);
        mismatch |= !ok;
        marks.push(MarkedChar {
            ch,
            mark: if ok { CharMark::Correct } else { CharMark::Wrong },
        });
        typed_len = i + 1;
    }
    let rest = if mismatch { CharMark::Blocked } else { CharMark::Pending };
    for &ch in target_chars.iter().skip(typed_len) {
        marks.push(MarkedChar { ch, mark: rest });
    }
    (marks, mismatch)
}

#[derive(Clone, Debug)]
pub struct Round {
    /// Monotonic id shared with the events this round schedules.
    pub id: u64,
    target: String,
    typed: String,
    round_time: f64,
    time_left: f64,
    pub phase: Phase,
}

impl Round {
    pub fn new(id: u64, target: String, round_time: f64) -> Self {
        Self {
            id,
            target,
            typed: String::new(),
            round_time,
            time_left: round_time,
            phase: Phase::Typing,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn round_time(&self) -> f64 {
        self.round_time
    }

    pub fn time_left(&self) -> f64 {
        self.time_left
    }

    pub fn time_ratio(&self) -> f64 {
        if self.round_time <= 0.0 {
            return 0.0;
        }
        (self.time_left / self.round_time).clamp(0.0, 1.0)
    }

    /// Append one printable character. Returns true when the buffer now
    /// matches the target exactly.
    pub fn append_char(&mut self, c: char) -> bool {
        if self.phase != Phase::Typing || c.is_control() {
            return false;
        }
        self.typed.push(c);
        self.is_match()
    }

    /// Remove the last typed character. Returns false if nothing changed.
    pub fn backspace(&mut self) -> bool {
        if self.phase != Phase::Typing {
            return false;
        }
        self.typed.pop().is_some()
    }

    pub fn is_match(&self) -> bool {
        self.typed == self.target
    }

    pub fn marks(&self) -> (Vec<MarkedChar>, bool) {
        decompose(&self.typed, &self.target)
    }

    /// Advance the countdown. Only a typing round counts down; the return
    /// value is true on the tick where the timer hits zero.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.phase != Phase::Typing || self.time_left <= 0.0 {
            return false;
        }
        self.time_left = (self.time_left - dt).max(0.0);
        self.time_left == 0.0
    }

    #[cfg(test)]
    pub(crate) fn set_time_left(&mut self, t: f64) {
        self.time_left = t.clamp(0.0, self.round_time);
    }
}
