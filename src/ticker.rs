use std::time::{Duration, Instant};

/// Event-loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Wall-clock period of the focus countdown
pub const CADENCE_PERIOD: Duration = Duration::from_secs(1);

/// Get the event-loop poll timeout
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// A cancellable repeating tick schedule.
///
/// Deadlines are chained one period apart (`next_due + period`, not
/// `now + period`), so a late poll still yields exactly one tick per
/// elapsed period. At most one deadline chain exists at a time: arming
/// while armed is a no-op. Cancelling bumps the generation and drops the
/// deadline, so a deadline that already passed can never fire after
/// `cancel` returns — holders of a stale generation compare unequal.
#[derive(Debug, Clone)]
pub struct Cadence {
    period: Duration,
    generation: u64,
    next_due: Option<Instant>,
}

impl Cadence {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            generation: 0,
            next_due: None,
        }
    }

    /// Arm the schedule. No-op while already armed.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.generation = self.generation.wrapping_add(1);
            self.next_due = Some(now + self.period);
        }
    }

    /// Disarm the schedule. Nothing fires after this returns.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.next_due = None;
    }

    /// Whether a deadline chain is currently armed
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Current arm generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count the deadlines that have come due, advancing the chain
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while let Some(due) = self.next_due {
            if now < due {
                break;
            }
            self.next_due = Some(due + self.period);
            fired += 1;
        }
        fired
    }
}

/// A single delayed event (login verification, bot reply)
#[derive(Debug, Clone, Copy)]
pub struct OneShot {
    fire_at: Instant,
}

impl OneShot {
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            fire_at: now + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.fire_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_cadence_fires_once_per_period() {
        let t0 = Instant::now();
        let mut cadence = Cadence::new(Duration::from_secs(1));
        cadence.start(t0);

        assert_eq!(cadence.poll(t0), 0);
        assert_eq!(cadence.poll(t0 + Duration::from_millis(999)), 0);
        assert_eq!(cadence.poll(t0 + Duration::from_secs(1)), 1);
        assert_eq!(cadence.poll(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(cadence.poll(t0 + Duration::from_millis(2100)), 1);
    }

    #[test]
    fn test_cadence_catches_up_after_late_poll() {
        let t0 = Instant::now();
        let mut cadence = Cadence::new(Duration::from_secs(1));
        cadence.start(t0);

        // Polling three seconds late yields exactly three ticks, not one
        assert_eq!(cadence.poll(t0 + Duration::from_secs(3)), 3);
        assert_eq!(cadence.poll(t0 + Duration::from_secs(3)), 0);
    }

    #[test]
    fn test_start_while_armed_keeps_single_chain() {
        let t0 = Instant::now();
        let mut cadence = Cadence::new(Duration::from_secs(1));
        cadence.start(t0);
        let generation = cadence.generation();

        // A second start must not create a second deadline chain
        cadence.start(t0 + Duration::from_millis(500));
        assert_eq!(cadence.generation(), generation);
        assert_eq!(cadence.poll(t0 + Duration::from_secs(1)), 1);
        assert_eq!(cadence.poll(t0 + Duration::from_millis(1600)), 0);
    }

    #[test]
    fn test_cancel_stops_elapsed_deadline() {
        let t0 = Instant::now();
        let mut cadence = Cadence::new(Duration::from_secs(1));
        cadence.start(t0);

        // The deadline has already passed, but cancel wins
        cadence.cancel();
        assert!(!cadence.is_armed());
        assert_eq!(cadence.poll(t0 + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_restart_after_cancel_reseeds_from_now() {
        let t0 = Instant::now();
        let mut cadence = Cadence::new(Duration::from_secs(1));
        cadence.start(t0);
        let first_generation = cadence.generation();
        cadence.cancel();

        let t1 = t0 + Duration::from_secs(10);
        cadence.start(t1);
        assert!(cadence.generation() > first_generation);

        // No back ticks from the cancelled chain
        assert_eq!(cadence.poll(t1), 0);
        assert_eq!(cadence.poll(t1 + Duration::from_secs(1)), 1);
    }

    #[test]
    fn test_one_shot() {
        let t0 = Instant::now();
        let shot = OneShot::after(t0, Duration::from_millis(800));
        assert!(!shot.is_due(t0));
        assert!(!shot.is_due(t0 + Duration::from_millis(799)));
        assert!(shot.is_due(t0 + Duration::from_millis(800)));
        assert!(shot.is_due(t0 + Duration::from_secs(5)));
    }
}
