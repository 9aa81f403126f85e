use std::time::{Duration, Instant};

/// A cancellable, repeating deadline.
///
/// At most one schedule is active at a time: starting the ticker replaces
/// whatever schedule was there before, so a deadline computed under an old
/// interval can never fire after a new one has been set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ticker {
    schedule: Option<Schedule>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Schedule {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub(crate) fn new() -> Ticker {
        Ticker { schedule: None }
    }

    /// Start ticking every `interval`, with the first tick one interval after
    /// `now`
    pub(crate) fn start(&mut self, interval: Duration, now: Instant) {
        self.schedule = Some(Schedule {
            interval,
            next: now + interval,
        });
    }

    pub(crate) fn stop(&mut self) {
        self.schedule = None;
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    #[cfg(test)]
    pub(crate) fn interval(&self) -> Option<Duration> {
        self.schedule.map(|s| s.interval)
    }

    /// Return how long until the next tick is due, or `None` if the ticker is
    /// stopped
    pub(crate) fn time_until(&self, now: Instant) -> Option<Duration> {
        self.schedule
            .map(|s| s.next.saturating_duration_since(now))
    }

    /// Return `true` if a tick is due at `now`, scheduling the one after it.
    /// Ticks missed because the caller was late are dropped rather than
    /// delivered in a burst.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        let Some(ref mut sched) = self.schedule else {
            return false;
        };
        if now < sched.next {
            return false;
        }
        sched.next += sched.interval;
        if sched.next <= now {
            sched.next = now + sched.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS100: Duration = Duration::from_millis(100);

    #[test]
    fn stopped_never_fires() {
        let mut ticker = Ticker::new();
        let now = Instant::now();
        assert!(!ticker.is_running());
        assert_eq!(ticker.time_until(now), None);
        assert!(!ticker.poll(now + Duration::from_secs(60)));
    }

    #[test]
    fn fires_on_schedule() {
        let mut ticker = Ticker::new();
        let t0 = Instant::now();
        ticker.start(MS100, t0);
        assert_eq!(ticker.interval(), Some(MS100));
        assert_eq!(ticker.time_until(t0), Some(MS100));
        assert!(!ticker.poll(t0 + Duration::from_millis(99)));
        assert!(ticker.poll(t0 + MS100));
        assert!(!ticker.poll(t0 + Duration::from_millis(150)));
        assert_eq!(
            ticker.time_until(t0 + Duration::from_millis(150)),
            Some(Duration::from_millis(50))
        );
        assert!(ticker.poll(t0 + Duration::from_millis(205)));
        assert_eq!(
            ticker.time_until(t0 + Duration::from_millis(205)),
            Some(Duration::from_millis(95))
        );
    }

    #[test]
    fn late_poll_does_not_burst() {
        let mut ticker = Ticker::new();
        let t0 = Instant::now();
        ticker.start(MS100, t0);
        let late = t0 + Duration::from_millis(1000);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.time_until(late), Some(MS100));
    }

    #[test]
    fn restart_replaces_old_deadline() {
        let mut ticker = Ticker::new();
        let t0 = Instant::now();
        ticker.start(Duration::from_millis(220), t0);
        let t1 = t0 + Duration::from_millis(150);
        ticker.start(Duration::from_millis(205), t1);
        assert_eq!(ticker.interval(), Some(Duration::from_millis(205)));
        // The old deadline (t0 + 220ms) must not fire
        assert!(!ticker.poll(t0 + Duration::from_millis(220)));
        assert!(ticker.poll(t1 + Duration::from_millis(205)));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let mut ticker = Ticker::new();
        let t0 = Instant::now();
        ticker.start(MS100, t0);
        ticker.stop();
        assert!(!ticker.poll(t0 + MS100));
        assert_eq!(ticker.interval(), None);
    }
}
