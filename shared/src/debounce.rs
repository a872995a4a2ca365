//! Timer-agnostic debounce bookkeeping.
//!
//! Every dependency change calls [`Debouncer::schedule`] and arms a timer
//! for the returned [`Ticket`]. When a timer elapses its ticket is passed to
//! [`Debouncer::fire`], which only succeeds for the most recent ticket. The
//! caller reads the current state at that moment, so a burst of changes
//! collapses into one action carrying the final values. Dropping or
//! cancelling the stale timers is an optimization, not a requirement.

/// Handle for one scheduled firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number, useful in logs.
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Tracks which ticket is still allowed to fire.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    latest: u64,
    armed: bool,
}

impl Debouncer {
    /// Fresh debouncer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede any pending ticket and return a new one.
    pub fn schedule(&mut self) -> Ticket {
        self.latest += 1;
        self.armed = true;
        Ticket(self.latest)
    }

    /// Consume `ticket`. Returns `true` exactly once, and only if no newer
    /// ticket was scheduled and nothing was cancelled in between.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.armed && ticket.0 == self.latest {
            self.armed = false;
            true
        } else {
            false
        }
    }

    /// Invalidate the pending ticket, if any.
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.armed = false;
    }

    /// Whether a ticket is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires_once() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        let third = debouncer.schedule();

        assert!(!debouncer.fire(first));
        assert!(!debouncer.fire(second));
        assert!(debouncer.fire(third));
        assert!(!debouncer.fire(third));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_kills_pending_ticket() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule();
        debouncer.cancel();
        assert!(!debouncer.fire(ticket));
    }
}
