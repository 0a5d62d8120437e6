use std::time::Duration;

use tracing::trace;

/// How often the clocks are refreshed.
pub const UPDATE_PERIOD: Duration = Duration::from_millis(1000);

/// One-shot timer provided by the host. The host calls back into
/// [`Ticker::fire`] once `after` has elapsed.
pub trait Scheduler {
    fn schedule(&mut self, after: Duration);
}

/// Periodic task built on one-shot host timers.
///
/// At most one timer is outstanding at any time, so starting an already
/// started (or stopped but still pending) ticker never doubles the tick rate.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    running: bool,
    pending: bool,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(UPDATE_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: false,
            pending: false,
        }
    }

    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        self.running = true;
        self.arm(scheduler);
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The pending timer elapsed. Returns whether a tick should run.
    pub fn fire(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        self.pending = false;
        if !self.running {
            trace!("Timer elapsed after stop");
            return false;
        }
        self.arm(scheduler);
        true
    }

    fn arm(&mut self, scheduler: &mut dyn Scheduler) {
        if !self.pending {
            scheduler.schedule(self.period);
            self.pending = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Manual {
        scheduled: Vec<Duration>,
    }

    impl Scheduler for Manual {
        fn schedule(&mut self, after: Duration) {
            self.scheduled.push(after);
        }
    }

    #[test]
    fn ticks_every_period() {
        let mut timer = Manual::default();
        let mut ticker = Ticker::default();
        ticker.start(&mut timer);
        assert_eq!(timer.scheduled, [UPDATE_PERIOD]);

        assert!(ticker.fire(&mut timer));
        assert!(ticker.fire(&mut timer));
        assert_eq!(timer.scheduled.len(), 3);
    }

    #[test]
    fn restart_keeps_single_stream() {
        let mut timer = Manual::default();
        let mut ticker = Ticker::new(Duration::from_millis(10));
        ticker.start(&mut timer);
        ticker.start(&mut timer);
        ticker.stop();
        ticker.start(&mut timer);
        assert_eq!(timer.scheduled.len(), 1);

        assert!(ticker.fire(&mut timer));
        assert_eq!(timer.scheduled.len(), 2);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = Manual::default();
        let mut ticker = Ticker::default();
        ticker.stop();
        ticker.start(&mut timer);
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());

        assert!(!ticker.fire(&mut timer));
        assert_eq!(timer.scheduled.len(), 1);

        ticker.start(&mut timer);
        assert_eq!(timer.scheduled.len(), 2);
    }
}
