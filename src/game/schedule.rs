//! Delayed one-shot events. Each event is tagged with the id of the round that
//! scheduled it; the game drops events whose round is no longer current.

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Settle a failed round: shake check, life loss, next round or game over.
    ResolveFailure,
    /// Leave a solved room: next level or win.
    AdvanceRoom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scheduled {
    pub due_ms: f64,
    pub round_id: u64,
    pub kind: EventKind,
}

/// Event queue driven by its own millisecond clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    clock_ms: f64,
    // kept sorted by due time, FIFO among equal due times
    queue: VecDeque<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn schedule(&mut self, delay_ms: f64, round_id: u64, kind: EventKind) {
        let ev = Scheduled {
            due_ms: self.clock_ms + delay_ms.max(0.0),
            round_id,
            kind,
        };
        let at = self
            .queue
            .iter()
            .position(|q| q.due_ms > ev.due_ms)
            .unwrap_or(self.queue.len());
        self.queue.insert(at, ev);
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        if elapsed_ms > 0.0 {
            self.clock_ms += elapsed_ms;
        }
    }

    /// Next event whose due time has passed, earliest first.
    pub fn pop_due(&mut self) -> Option<Scheduled> {
        match self.queue.front() {
            Some(ev) if ev.due_ms <= self.clock_ms => self.queue.pop_front(),
            _ => None,
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
