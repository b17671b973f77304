//! A single-slot debounce timer.
//!
//! The [`Debouncer`] owns at most one pending timer. Arming it cancels the
//! previous timer first, so only the last trigger inside the quiet window
//! fires. Timers themselves come from a host-provided [`Scheduler`]; in the
//! browser that is `setTimeout`, in tests a simulated clock.
//!
//! Each armed timer is identified by a [`Ticket`]. When a timer fires the
//! host hands its ticket back to [`Debouncer::fire`], which accepts only the
//! most recently armed ticket and only once.

use std::time::Duration;

use tracing::trace;

/// Cancellation hook for a scheduled timer.
pub trait TimerHandle {
    /// Prevents the timer from firing. Cancelling a timer that already fired
    /// must be harmless.
    fn cancel(self);
}

/// Source of one-shot timers.
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Arranges for `ticket` to be delivered back to the owner of the
    /// [`Debouncer`] after `delay`.
    fn schedule(
        &mut self,
        delay: Duration,
        ticket: Ticket,
    ) -> Self::Handle;
}

/// Identifies one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Pending<H> {
    ticket: Ticket,
    handle: H,
    fired: bool,
}

/// Holds the one pending timer of a debounced action.
#[derive(Debug)]
pub struct Debouncer<H> {
    delay: Duration,
    issued: u64,
    pending: Option<Pending<H>>,
}

impl<H: TimerHandle> Debouncer<H> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            issued: 0,
            pending: None,
        }
    }

    /// Cancels any pending timer and schedules a new one.
    pub fn arm<S>(
        &mut self,
        scheduler: &mut S,
    ) -> Ticket
    where
        S: Scheduler<Handle = H>,
    {
        self.cancel();

        self.issued += 1;
        let ticket = Ticket(self.issued);
        let handle = scheduler.schedule(self.delay, ticket);
        trace!(ticket = ticket.0, delay_ms = self.delay.as_millis() as u64, "timer armed");

        self.pending = Some(Pending {
            ticket,
            handle,
            fired: false,
        });
        ticket
    }

    /// Records that the timer for `ticket` went off.
    ///
    /// Returns `true` only for the currently armed ticket, the first time it
    /// is reported. The handle stays in the slot until the next
    /// [`arm`](Self::arm) or [`cancel`](Self::cancel), so a host timer is not
    /// released from inside its own callback.
    pub fn fire(
        &mut self,
        ticket: Ticket,
    ) -> bool {
        match &mut self.pending {
            Some(pending) if pending.ticket == ticket && !pending.fired => {
                pending.fired = true;
                true
            }
            _ => {
                trace!(ticket = ticket.0, "stale timer ignored");
                false
            }
        }
    }

    /// Cancels the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            if !pending.fired {
                trace!(ticket = pending.ticket.0, "timer cancelled");
            }
            pending.handle.cancel();
        }
    }

    /// Whether a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.fired)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Log {
        scheduled: Vec<(Duration, Ticket)>,
        cancelled: Vec<Ticket>,
    }

    struct LogHandle {
        ticket: Ticket,
        log: Rc<RefCell<Log>>,
    }

    impl TimerHandle for LogHandle {
        fn cancel(self) {
            self.log.borrow_mut().cancelled.push(self.ticket);
        }
    }

    #[derive(Default)]
    struct LogScheduler {
        log: Rc<RefCell<Log>>,
    }

    impl Scheduler for LogScheduler {
        type Handle = LogHandle;

        fn schedule(
            &mut self,
            delay: Duration,
            ticket: Ticket,
        ) -> LogHandle {
            self.log.borrow_mut().scheduled.push((delay, ticket));
            LogHandle {
                ticket,
                log: Rc::clone(&self.log),
            }
        }
    }

    fn debouncer() -> Debouncer<LogHandle> {
        Debouncer::new(Duration::from_millis(500))
    }

    #[test]
    fn arm_schedules_with_configured_delay() {
        let mut scheduler = LogScheduler::default();
        let mut debouncer = debouncer();

        let ticket = debouncer.arm(&mut scheduler);

        assert_eq!(
            scheduler.log.borrow().scheduled,
            vec![(Duration::from_millis(500), ticket)]
        );
        assert!(debouncer.is_pending());
    }

    #[test]
    fn rearming_cancels_previous_timer() {
        let mut scheduler = LogScheduler::default();
        let mut debouncer = debouncer();

        let first = debouncer.arm(&mut scheduler);
        let second = debouncer.arm(&mut scheduler);

        assert_ne!(first, second);
        assert_eq!(scheduler.log.borrow().cancelled, vec![first]);
    }

    #[test]
    fn only_latest_ticket_fires() {
        let mut scheduler = LogScheduler::default();
        let mut debouncer = debouncer();

        let first = debouncer.arm(&mut scheduler);
        let second = debouncer.arm(&mut scheduler);

        assert!(!debouncer.fire(first));
        assert!(debouncer.fire(second));
    }

    #[test]
    fn ticket_fires_once() {
        let mut scheduler = LogScheduler::default();
        let mut debouncer = debouncer();

        let ticket = debouncer.arm(&mut scheduler);

        assert!(debouncer.fire(ticket));
        assert!(!debouncer.fire(ticket));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut scheduler = LogScheduler::default();
        let mut debouncer = debouncer();

        let ticket = debouncer.arm(&mut scheduler);
        debouncer.cancel();

        assert!(!debouncer.fire(ticket));
        assert_eq!(scheduler.log.borrow().cancelled, vec![ticket]);
    }

    #[test]
    fn cancel_without_pending_timer_is_noop() {
        let mut debouncer = debouncer();

        debouncer.cancel();

        assert!(!debouncer.is_pending());
    }
}
