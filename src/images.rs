// images.rs
use reqwest::blocking::Client;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

pub type ImageCallback = Box<dyn FnOnce(ImageOutcome)>;

/// Handle to an in-flight image request. Aborting guarantees the
/// completion callback will not run.
pub struct ImageFetch {
    abort: Option<Box<dyn FnOnce()>>,
}

impl ImageFetch {
    pub fn new<F>(abort: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            abort: Some(Box::new(abort)),
        }
    }

    /// For requests that already settled and have nothing left to abort.
    pub fn settled() -> Self {
        Self { abort: None }
    }

    pub fn abort(mut self) {
        if let Some(abort) = self.abort.take() {
            abort();
        }
    }
}

/// Where card photos come from. `done` is called at most once, from the
/// event loop thread.
pub trait ImageLoader {
    fn load(&self, url: &str, done: ImageCallback) -> ImageFetch;
}

type Pending = Rc<RefCell<HashMap<u64, ImageCallback>>>;
type Aborted = Arc<Mutex<HashSet<u64>>>;

/// Worker threads per loader.
pub const WORKERS: usize = 4;

struct Job {
    id: u64,
    url: String,
}

/// Fetches photos over HTTP on a fixed pool of worker threads. Completions
/// queue up until the driver calls `pump` or `wait` on the loop thread.
pub struct HttpImageLoader {
    next_id: Cell<u64>,
    pending: Pending,
    aborted: Aborted,
    jobs: Sender<Job>,
    rx: Receiver<(u64, ImageOutcome)>,
}

impl HttpImageLoader {
    pub fn new(client: Client) -> Self {
        Self::with_workers(client, WORKERS)
    }

    pub fn with_workers(client: Client, workers: usize) -> Self {
        let (jobs, job_rx) = channel::<Job>();
        let (tx, rx) = channel();
        let job_rx = Arc::new(Mutex::new(job_rx));
        let aborted: Aborted = Arc::new(Mutex::new(HashSet::new()));

        for _ in 0..workers.max(1) {
            let client = client.clone();
            let job_rx = Arc::clone(&job_rx);
            let aborted = Arc::clone(&aborted);
            let tx = tx.clone();
            std::thread::spawn(move || work(client, job_rx, aborted, tx));
        }

        Self {
            next_id: Cell::new(0),
            pending: Rc::new(RefCell::new(HashMap::new())),
            aborted,
            jobs,
            rx,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Delivers every completion that has already arrived.
    pub fn pump(&self) -> usize {
        let mut delivered = 0;
        while let Ok((id, outcome)) = self.rx.try_recv() {
            delivered += self.deliver(id, outcome);
        }
        delivered
    }

    /// Blocks up to `timeout` for one completion, then pumps the rest.
    pub fn wait(&self, timeout: Duration) -> usize {
        match self.rx.recv_timeout(timeout) {
            Ok((id, outcome)) => self.deliver(id, outcome) + self.pump(),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => 0,
        }
    }

    fn deliver(&self, id: u64, outcome: ImageOutcome) -> usize {
        if let Ok(mut aborted) = self.aborted.lock() {
            aborted.remove(&id);
        }
        // Aborted requests were removed already; their late results are dropped here.
        let callback = self.pending.borrow_mut().remove(&id);
        match callback {
            Some(done) => {
                done(outcome);
                1
            }
            None => 0,
        }
    }
}

impl ImageLoader for HttpImageLoader {
    fn load(&self, url: &str, done: ImageCallback) -> ImageFetch {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.pending.borrow_mut().insert(id, done);

        let job = Job {
            id,
            url: url.to_string(),
        };
        if self.jobs.send(job).is_err() {
            tracing::warn!(%url, "no image workers left");
            if let Some(done) = self.pending.borrow_mut().remove(&id) {
                done(ImageOutcome::Failed);
            }
            return ImageFetch::settled();
        }

        let pending = Rc::downgrade(&self.pending);
        let aborted = Arc::clone(&self.aborted);
        ImageFetch::new(move || {
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().remove(&id);
            }
            if let Ok(mut aborted) = aborted.lock() {
                aborted.insert(id);
            }
        })
    }
}

// Runs until the loader (and with it the job sender) is dropped.
fn work(
    client: Client,
    jobs: Arc<Mutex<Receiver<Job>>>,
    aborted: Aborted,
    tx: Sender<(u64, ImageOutcome)>,
) {
    loop {
        let job = match jobs.lock() {
            Ok(jobs) => match jobs.recv() {
                Ok(job) => job,
                Err(_) => return,
            },
            Err(_) => return,
        };

        // Skip requests aborted while still queued.
        let skip = aborted
            .lock()
            .map(|mut aborted| aborted.remove(&job.id))
            .unwrap_or(false);
        if skip {
            continue;
        }

        let outcome = fetch(&client, &job.url);
        if tx.send((job.id, outcome)).is_err() {
            return;
        }
    }
}

fn fetch(client: &Client, url: &str) -> ImageOutcome {
    match client.get(url).send() {
        Ok(resp) if resp.status().is_success() && is_image(&resp) => ImageOutcome::Loaded,
        Ok(resp) => {
            tracing::debug!(%url, status = %resp.status(), "photo rejected");
            ImageOutcome::Failed
        }
        Err(e) => {
            tracing::debug!(%url, "photo request failed: {e}");
            ImageOutcome::Failed
        }
    }
}

fn is_image(resp: &reqwest::blocking::Response) -> bool {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("image/"))
        .unwrap_or(true)
}
