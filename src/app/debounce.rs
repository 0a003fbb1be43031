//! Cancellable, delayed delivery of the latest value.
//!
//! Each call to [`Debouncer::schedule`] supersedes whatever was pending; only
//! the ticket handed out by the most recent call can release the value. The
//! caller owns the clock: it arms a timer for [`Debouncer::delay`] per ticket
//! and calls [`Debouncer::fire`] when that timer elapses.
//!
//! # Example
//!
//! ```rust
//! use blognest::app::debounce::Debouncer;
//! use std::time::Duration;
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(300));
//! let first = debouncer.schedule("c".to_string());
//! let second = debouncer.schedule("ca".to_string());
//!
//! assert_eq!(debouncer.fire(first), None);
//! assert_eq!(debouncer.fire(second), Some("ca".to_string()));
//! assert_eq!(debouncer.fire(second), None);
//! ```

use std::time::Duration;

/// Default quiet period before a search query is applied.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Handle for one scheduled delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// Holds at most one pending value, released only by its own ticket.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    last_issued: u64,
    pending: Option<(DebounceTicket, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_issued: 0,
            pending: None,
        }
    }

    /// The quiet period the caller should wait before firing a ticket.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value with `value` and returns its ticket.
    pub fn schedule(&mut self, value: T) -> DebounceTicket {
        self.last_issued = self.last_issued.wrapping_add(1);
        let ticket = DebounceTicket(self.last_issued);

        if let Some((superseded, _)) = self.pending.replace((ticket, value)) {
            tracing::trace!(superseded = superseded.0, ticket = ticket.0, "pending value superseded");
        }

        ticket
    }

    /// Releases the pending value if `ticket` is the one that scheduled it.
    ///
    /// Tickets that were superseded or cancelled yield `None`.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        match &self.pending {
            Some((current, _)) if *current == ticket => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Drops the pending value without delivering it. Returns `true` if
    /// something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Takes the pending value immediately, skipping the remaining delay.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_ticket_never_fires() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule(1);
        assert!(debouncer.cancel());
        assert_eq!(debouncer.fire(ticket), None);
        assert!(!debouncer.cancel());
    }

    #[test]
    fn flush_skips_the_wait() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule("query");
        assert_eq!(debouncer.flush(), Some("query"));
        assert_eq!(debouncer.fire(ticket), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn only_latest_of_many_survives() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        let tickets: Vec<_> = (0..5).map(|n| debouncer.schedule(n)).collect();

        let delivered: Vec<_> = tickets.into_iter().filter_map(|t| debouncer.fire(t)).collect();
        assert_eq!(delivered, vec![4]);
    }

    #[test]
    fn reports_configured_delay() {
        let debouncer: Debouncer<()> = Debouncer::new(Duration::from_millis(120));
        assert_eq!(debouncer.delay(), Duration::from_millis(120));
    }
}
