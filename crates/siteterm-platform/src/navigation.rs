//! Delayed, fire-and-forget page navigation for event-loop hosts.

use std::time::{Duration, Instant};

use crate::services::Navigator;

/// A `Navigator` that queues navigations until the host loop polls them.
///
/// Several navigations may be pending at once. The first one to come due
/// wins and the rest are discarded with the page that scheduled them.
#[derive(Debug, Default)]
pub struct NavigationTimer {
    pending: Vec<(Instant, String)>,
    fading: bool,
}

impl NavigationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a fade-out transition is in progress.
    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// Number of navigations waiting for their deadline.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Queue a navigation relative to an explicit point in time.
    pub fn schedule_at(&mut self, now: Instant, destination: &str, delay: Duration) {
        self.pending.push((now + delay, destination.to_string()));
    }

    /// Return the destination whose deadline passed first, if any.
    ///
    /// A returned navigation tears the page down: every other pending
    /// navigation and the fade state are dropped with it.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (_, destination) = self
            .pending
            .iter()
            .filter(|(deadline, _)| *deadline <= now)
            .min_by_key(|(deadline, _)| *deadline)?
            .clone();
        self.pending.clear();
        self.fading = false;
        log::info!("Navigating to {destination}");
        Some(destination)
    }
}

impl Navigator for NavigationTimer {
    fn fade_out(&mut self) {
        self.fading = true;
    }

    fn schedule(&mut self, destination: &str, delay: Duration) {
        self.schedule_at(Instant::now(), destination, delay);
        log::debug!("Scheduled navigation to {destination} in {delay:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_before_deadline() {
        let start = Instant::now();
        let mut timer = NavigationTimer::new();
        timer.schedule_at(start, "about.html", Duration::from_millis(280));
        assert_eq!(timer.poll(start), None);
        assert_eq!(timer.poll(start + Duration::from_millis(279)), None);
        assert_eq!(timer.pending_count(), 1);
    }

    #[test]
    fn due_after_deadline() {
        let start = Instant::now();
        let mut timer = NavigationTimer::new();
        timer.fade_out();
        timer.schedule_at(start, "about.html", Duration::from_millis(280));
        assert_eq!(
            timer.poll(start + Duration::from_millis(280)).as_deref(),
            Some("about.html")
        );
        assert!(!timer.is_fading());
        assert_eq!(timer.pending_count(), 0);
    }

    #[test]
    fn earliest_deadline_wins_and_clears_rest() {
        let start = Instant::now();
        let mut timer = NavigationTimer::new();
        timer.schedule_at(start, "certs.html", Duration::from_millis(300));
        timer.schedule_at(start, "about.html", Duration::from_millis(100));
        let later = start + Duration::from_secs(1);
        assert_eq!(timer.poll(later).as_deref(), Some("about.html"));
        assert_eq!(timer.poll(later), None);
    }

    #[test]
    fn navigator_trait_schedules_from_now() {
        let mut timer = NavigationTimer::new();
        Navigator::schedule(&mut timer, "index.html", Duration::ZERO);
        let due = timer.poll(Instant::now() + Duration::from_millis(1));
        assert_eq!(due.as_deref(), Some("index.html"));
    }

    #[test]
    fn fade_out_sets_fading() {
        let mut timer = NavigationTimer::new();
        assert!(!timer.is_fading());
        timer.fade_out();
        assert!(timer.is_fading());
    }
}
