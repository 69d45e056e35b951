use super::enums::FocusStatus;

/// Default focus session length in seconds (25 minutes)
pub const DEFAULT_FOCUS_SECS: u32 = 25 * 60;

/// Outcome of applying a one-second tick to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed
    Skipped,
    /// One second elapsed, session still in progress
    Counted,
    /// The countdown reached zero and the session completed
    Completed,
}

/// Countdown state machine for the focus timer.
///
/// The session is created once at startup and lives for the whole process.
/// Pausing keeps the remaining time; only reset or completion winds the
/// countdown back to the full duration.
#[derive(Debug, Clone)]
pub struct FocusSession {
    /// Session length in seconds, fixed at construction
    pub duration_secs: u32,
    /// Seconds left in the current countdown
    pub remaining_secs: u32,
    /// Current machine state
    pub status: FocusStatus,
    /// Sessions completed since startup
    pub sessions_today: u32,
}

impl FocusSession {
    pub fn new(duration_secs: u32) -> Self {
        let duration_secs = duration_secs.max(1);
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            status: FocusStatus::Idle,
            sessions_today: 0,
        }
    }

    /// Start or resume the countdown. No-op while already running.
    pub fn start(&mut self) {
        if self.status != FocusStatus::Running {
            self.status = FocusStatus::Running;
        }
    }

    /// Pause the countdown, keeping the remaining time. No-op unless running.
    pub fn pause(&mut self) {
        if self.status == FocusStatus::Running {
            self.status = FocusStatus::Paused;
        }
    }

    /// Stop and wind the countdown back to the full duration
    pub fn reset(&mut self) {
        self.status = FocusStatus::Idle;
        self.remaining_secs = self.duration_secs;
    }

    /// Apply one one-second tick.
    ///
    /// On reaching zero the session counter increments and the machine
    /// returns to idle at full duration; the caller applies the reward
    /// side effects when `Completed` comes back.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != FocusStatus::Running {
            return TickOutcome::Skipped;
        }

        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }

        if self.remaining_secs == 0 {
            self.sessions_today += 1;
            self.reset();
            return TickOutcome::Completed;
        }

        TickOutcome::Counted
    }

    /// Whether the countdown is advancing
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Remaining time formatted as zero-padded MM:SS
    pub fn formatted(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// Fraction of the session already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self) -> f64 {
        let elapsed = self.duration_secs - self.remaining_secs;
        f64::from(elapsed) / f64::from(self.duration_secs)
    }
}

/// Format a second count as MM:SS, zero-padded to two digits each
pub fn format_clock(total_secs: u32) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
