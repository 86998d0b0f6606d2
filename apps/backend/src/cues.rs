//! Best-effort audio cue notifications.
//!
//! The controller announces round start, correct and wrong guesses through a
//! [`CueSink`]. Sink failures are logged and dropped; they never reach game
//! state or the caller.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Upper bound on undrained cues per session.
pub const DEFAULT_CUE_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Intro,
    Correct,
    Wrong,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CueError {
    #[error("cue queue is full ({capacity} pending)")]
    QueueFull { capacity: usize },
    #[error("cue sink unavailable: {0}")]
    Unavailable(String),
}

pub trait CueSink: Send + Sync {
    fn play(&self, cue: Cue) -> Result<(), CueError>;
}

/// Fire a cue, swallowing and logging any failure.
pub fn notify(sink: &dyn CueSink, cue: Cue) {
    match sink.play(cue) {
        Ok(()) => debug!(?cue, "cue emitted"),
        Err(err) => warn!(?cue, error = %err, "cue playback failed"),
    }
}

/// Per-session queue drained by the browser on its next poll.
pub struct QueuedCues {
    pending: Mutex<VecDeque<Cue>>,
    capacity: usize,
}

impl QueuedCues {
    pub fn new(capacity: usize) -> Self {
        Self {
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Take every pending cue in emission order.
    pub fn drain(&self) -> Vec<Cue> {
        self.pending.lock().drain(..).collect()
    }
}

impl Default for QueuedCues {
    fn default() -> Self {
        Self::new(DEFAULT_CUE_CAPACITY)
    }
}

impl CueSink for QueuedCues {
    fn play(&self, cue: Cue) -> Result<(), CueError> {
        let mut pending = self.pending.lock();
        if pending.len() >= self.capacity {
            return Err(CueError::QueueFull {
                capacity: self.capacity,
            });
        }
        pending.push_back(cue);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl CueSink for Broken {
        fn play(&self, _cue: Cue) -> Result<(), CueError> {
            Err(CueError::Unavailable("no audio device".into()))
        }
    }

    #[test]
    fn drains_in_order() {
        let cues = QueuedCues::default();
        notify(&cues, Cue::Intro);
        notify(&cues, Cue::Wrong);
        assert_eq!(cues.drain(), vec![Cue::Intro, Cue::Wrong]);
        assert!(cues.drain().is_empty());
    }

    #[test]
    fn full_queue_drops_new_cues() {
        let cues = QueuedCues::new(1);
        assert!(cues.play(Cue::Intro).is_ok());
        assert_eq!(
            cues.play(Cue::Correct),
            Err(CueError::QueueFull { capacity: 1 })
        );
        notify(&cues, Cue::Wrong);
        assert_eq!(cues.drain(), vec![Cue::Intro]);
    }

    #[test]
    fn notify_swallows_sink_errors() {
        notify(&Broken, Cue::Correct);
    }
}
