use crate::runtime::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

struct DebounceState<T> {
    pending: Option<TimerHandle>,
    latest: Option<T>,
}

/// Collapses bursts of calls into one, delivered after `quiet` has passed
/// without a new call. Only the most recent value reaches the handler.
pub struct Debounce<T> {
    scheduler: Scheduler,
    quiet: Duration,
    state: Rc<RefCell<DebounceState<T>>>,
    handler: Rc<dyn Fn(T)>,
}

impl<T: 'static> Debounce<T> {
    pub fn new<F>(scheduler: Scheduler, quiet: Duration, handler: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            scheduler,
            quiet,
            state: Rc::new(RefCell::new(DebounceState {
                pending: None,
                latest: None,
            })),
            handler: Rc::new(handler),
        }
    }

    /// Cancel-and-reschedule.
    pub fn call(&self, value: T) {
        let mut state = self.state.borrow_mut();
        if let Some(timer) = state.pending.take() {
            self.scheduler.clear_timeout(timer);
        }
        state.latest = Some(value);

        let weak_state: Weak<RefCell<DebounceState<T>>> = Rc::downgrade(&self.state);
        let weak_handler = Rc::downgrade(&self.handler);
        state.pending = Some(self.scheduler.set_timeout(self.quiet, move || {
            let (Some(state), Some(handler)) = (weak_state.upgrade(), weak_handler.upgrade())
            else {
                return;
            };
            let latest = {
                let mut state = state.borrow_mut();
                state.pending = None;
                state.latest.take()
            };
            if let Some(value) = latest {
                handler(value);
            }
        }));
    }

    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(timer) = state.pending.take() {
            self.scheduler.clear_timeout(timer);
        }
        state.latest = None;
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }
}

impl<T> Drop for Debounce<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.state.borrow_mut().pending.take() {
            self.scheduler.clear_timeout(timer);
        }
    }
}
