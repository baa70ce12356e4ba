//! Elapsed-time tracking for a running quiz or puzzle session.
//!
//! The ticker is a wall-clock state machine with no internal thread: the
//! presentation layer calls [`SessionTicker::tick`] roughly once a second to
//! refresh the display. Start and stop are explicit and tied to the owning
//! session's lifetime, so nothing keeps ticking after the session ends.

use chrono::DateTime;
use chrono::Utc;

use quizfi_core::Clock;

/// One-second display ticker for a session's elapsed time.
#[derive(Debug, Clone)]
pub struct SessionTicker {
    clock: Clock,
    started_at: Option<DateTime<Utc>>,
    elapsed_secs: i64,
    running: bool,
}

impl SessionTicker {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            started_at: None,
            elapsed_secs: 0,
            running: false,
        }
    }

    /// Begin counting from zero. Restarting an already-running ticker
    /// resets it.
    pub fn start(&mut self) {
        self.started_at = Some(self.clock.now());
        self.elapsed_secs = 0;
        self.running = true;
    }

    /// Refresh the elapsed reading. Returns the whole seconds since start,
    /// or the frozen value once stopped.
    pub fn tick(&mut self) -> i64 {
        if self.running {
            if let Some(started_at) = self.started_at {
                self.elapsed_secs = (self.clock.now() - started_at).num_seconds();
            }
        }
        self.elapsed_secs
    }

    /// Stop counting and freeze the elapsed value. Idempotent.
    ///
    /// Returns the final elapsed seconds.
    pub fn stop(&mut self) -> i64 {
        if self.running {
            self.tick();
            self.running = false;
        }
        self.elapsed_secs
    }

    /// Discard all state, as on session reset.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.elapsed_secs = 0;
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> i64 {
        self.elapsed_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quizfi_core::time::fixed_clock;

    #[test]
    fn tick_tracks_the_clock() {
        let mut clock = fixed_clock();
        let mut ticker = SessionTicker::new(clock);
        ticker.start();

        clock.advance(Duration::seconds(3));
        ticker.clock = clock;
        assert_eq!(ticker.tick(), 3);
    }

    #[test]
    fn stop_freezes_elapsed_time() {
        let mut clock = fixed_clock();
        let mut ticker = SessionTicker::new(clock);
        ticker.start();

        clock.advance(Duration::seconds(10));
        ticker.clock = clock;
        assert_eq!(ticker.stop(), 10);

        clock.advance(Duration::seconds(60));
        ticker.clock = clock;
        assert_eq!(ticker.tick(), 10);
        assert!(!ticker.is_running());
    }

    #[test]
    fn reset_discards_everything() {
        let mut ticker = SessionTicker::new(fixed_clock());
        ticker.start();
        ticker.reset();
        assert_eq!(ticker.elapsed_secs(), 0);
        assert!(!ticker.is_running());
        assert_eq!(ticker.tick(), 0);
    }
}
