use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

type Callback = Box<dyn FnOnce()>;

/// Identifies one scheduled timer; pass it back to `clear_timeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    deadline: Duration,
    seq: u64,
}

#[derive(Default)]
struct TimerQueue {
    now: Duration,
    next_seq: u64,
    // Keyed by (deadline, seq) so equal deadlines fire in scheduling order.
    timers: BTreeMap<(Duration, u64), Callback>,
}

/// Single-threaded timer loop on a virtual clock.
///
/// Nothing fires on its own: the owner moves time forward with `advance`
/// (tests) or `advance_to` (a driver mapping the wall clock onto it).
#[derive(Default)]
pub struct EventLoop {
    queue: Rc<RefCell<TimerQueue>>,
}

/// Cheap handle for scheduling onto an `EventLoop`.
#[derive(Clone)]
pub struct Scheduler {
    queue: Rc<RefCell<TimerQueue>>,
}

impl EventLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduler(&self) -> Scheduler {
        Scheduler {
            queue: Rc::clone(&self.queue),
        }
    }

    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.borrow().timers.keys().next().map(|(at, _)| *at)
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Moves the clock forward by `by`, firing everything that comes due.
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        self.advance_to(target)
    }

    /// Fires due timers in deadline order up to `target`, including timers
    /// scheduled by callbacks along the way. The clock never moves backwards.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;

        while let Some(callback) = self.pop_due(target) {
            callback();
            fired += 1;
        }

        let mut queue = self.queue.borrow_mut();
        if queue.now < target {
            queue.now = target;
        }

        fired
    }

    /// Drains the queue, jumping the clock to each deadline in turn.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.next_deadline() {
            fired += self.advance_to(deadline);
        }
        fired
    }

    // The borrow ends before the callback runs, so callbacks may schedule.
    fn pop_due(&self, target: Duration) -> Option<Callback> {
        let mut queue = self.queue.borrow_mut();
        let key = *queue.timers.keys().next()?;
        if key.0 > target {
            return None;
        }
        let callback = queue.timers.remove(&key)?;
        if queue.now < key.0 {
            queue.now = key.0;
        }
        Some(callback)
    }
}

impl Scheduler {
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn set_timeout<F>(&self, delay: Duration, callback: F) -> TimerHandle
    where
        F: FnOnce() + 'static,
    {
        let mut queue = self.queue.borrow_mut();
        let handle = TimerHandle {
            deadline: queue.now + delay,
            seq: queue.next_seq,
        };
        queue.next_seq += 1;
        queue
            .timers
            .insert((handle.deadline, handle.seq), Box::new(callback));
        handle
    }

    /// Returns false when the timer already fired or was cleared.
    pub fn clear_timeout(&self, handle: TimerHandle) -> bool {
        self.queue
            .borrow_mut()
            .timers
            .remove(&(handle.deadline, handle.seq))
            .is_some()
    }
}
