mod debounce;
mod event_loop;

pub use debounce::Debounce;
pub use event_loop::{EventLoop, Scheduler, TimerHandle};
