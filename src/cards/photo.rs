use crate::cards::labels::NO_PHOTO_CLASS;
use crate::dom::{NodeRef, WeakNode};
use crate::images::{ImageFetch, ImageLoader, ImageOutcome};
use crate::runtime::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Lifecycle of one card's background photo.
///
/// `Pending` moves to exactly one of the other three and stays there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoState {
    Pending,
    Loaded,
    Failed,
    TimedOut,
}

impl PhotoState {
    pub fn is_terminal(self) -> bool {
        self != PhotoState::Pending
    }
}

struct PhotoSlot {
    state: PhotoState,
    url: String,
    card: WeakNode,
    scheduler: Scheduler,
    timer: Option<TimerHandle>,
    fetch: Option<ImageFetch>,
    cancelled: bool,
}

/// Per-card photo load racing a timeout. Every callback captures this card's
/// own slot, never a shared "current card".
#[derive(Clone)]
pub struct Photo {
    slot: Rc<RefCell<PhotoSlot>>,
}

impl Photo {
    /// Arms the timeout, then starts the fetch.
    pub fn start(
        card: &NodeRef,
        url: String,
        timeout: Duration,
        scheduler: &Scheduler,
        loader: &dyn ImageLoader,
    ) -> Self {
        let photo = Photo {
            slot: Rc::new(RefCell::new(PhotoSlot {
                state: PhotoState::Pending,
                url: url.clone(),
                card: Rc::downgrade(card),
                scheduler: scheduler.clone(),
                timer: None,
                fetch: None,
                cancelled: false,
            })),
        };

        let on_timeout = photo.clone();
        let timer = scheduler.set_timeout(timeout, move || on_timeout.finish(PhotoState::TimedOut));
        photo.slot.borrow_mut().timer = Some(timer);

        let on_done = photo.clone();
        let fetch = loader.load(
            &url,
            Box::new(move |outcome| {
                on_done.finish(match outcome {
                    ImageOutcome::Loaded => PhotoState::Loaded,
                    ImageOutcome::Failed => PhotoState::Failed,
                })
            }),
        );

        // A loader may answer synchronously; then there is nothing to keep.
        let mut slot = photo.slot.borrow_mut();
        if !slot.state.is_terminal() && !slot.cancelled {
            slot.fetch = Some(fetch);
        }
        drop(slot);

        photo
    }

    pub fn state(&self) -> PhotoState {
        self.slot.borrow().state
    }

    /// Detaches a photo whose card left the page: the timer is cleared, the
    /// fetch aborted, and whatever answers later is ignored. The state stays
    /// as it was.
    pub fn cancel(&self) {
        let (timer, fetch, scheduler) = {
            let mut slot = self.slot.borrow_mut();
            if slot.cancelled || slot.state.is_terminal() {
                return;
            }
            slot.cancelled = true;
            slot.card = WeakNode::new();
            (slot.timer.take(), slot.fetch.take(), slot.scheduler.clone())
        };

        if let Some(timer) = timer {
            scheduler.clear_timeout(timer);
        }
        if let Some(fetch) = fetch {
            fetch.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.slot.borrow().cancelled
    }

    fn finish(&self, next: PhotoState) {
        let (card, timer, fetch, scheduler, url) = {
            let mut slot = self.slot.borrow_mut();
            if slot.cancelled {
                return;
            }
            if slot.state.is_terminal() {
                tracing::trace!(url = %slot.url, state = ?slot.state, ignored = ?next, "photo already settled");
                return;
            }
            slot.state = next;
            (
                slot.card.upgrade(),
                slot.timer.take(),
                slot.fetch.take(),
                slot.scheduler.clone(),
                slot.url.clone(),
            )
        };

        if let Some(timer) = timer {
            scheduler.clear_timeout(timer);
        }
        if next == PhotoState::TimedOut {
            tracing::debug!(%url, "photo timed out");
            if let Some(fetch) = fetch {
                fetch.abort();
            }
        }

        let Some(card) = card else {
            tracing::trace!(%url, "card no longer rendered");
            return;
        };
        let mut card = card.borrow_mut();
        match next {
            PhotoState::Loaded => card.set_style("background-image", &format!("url('{url}')")),
            PhotoState::Failed | PhotoState::TimedOut => card.add_class(NO_PHOTO_CLASS),
            PhotoState::Pending => {}
        }
    }
}
