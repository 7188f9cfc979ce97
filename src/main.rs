use clap::Parser;
use hotels_list::catalog::CatalogClient;
use hotels_list::images::HttpImageLoader;
use hotels_list::pagination::ScrollSample;
use hotels_list::runtime::EventLoop;
use hotels_list::{logging, HotelsPage, PageConfig};
use std::process::ExitCode;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Footer fully on screen.
const FOOTER_IN_VIEW: ScrollSample = ScrollSample {
    footer_bottom: 800.0,
    footer_height: 120.0,
    viewport_height: 800.0,
};

/// Loads the catalog, drives the hotels page headlessly and prints the
/// resulting HTML once every photo has settled.
#[derive(Parser, Debug)]
#[command(name = "hotels-list", version)]
struct Args {
    /// Catalog URL or file path (overrides HOTELS_CATALOG_URL).
    #[arg(long)]
    catalog: Option<String>,

    /// Base for relative preview URLs (overrides HOTELS_IMAGE_BASE).
    #[arg(long)]
    image_base: Option<String>,

    /// Filter control to click after load, e.g. filter-cheap.
    #[arg(long, value_name = "CONTROL_ID")]
    filter: Option<String>,

    /// How many times to scroll down to the footer.
    #[arg(long, default_value_t = 0)]
    scrolls: usize,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let mut config = match PageConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("hotels-list: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(catalog) = args.catalog {
        config.catalog_url = catalog;
    }
    if let Some(base) = args.image_base {
        config.image_base = base;
    }

    let client = match CatalogClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("hotels-list: {e}");
            return ExitCode::FAILURE;
        }
    };

    let event_loop = EventLoop::new();
    let images = Rc::new(HttpImageLoader::new(client.http()));
    let page = HotelsPage::new(&config, event_loop.scheduler(), images.clone());
    let driver = Driver {
        event_loop: &event_loop,
        images: &images,
        started: Instant::now(),
    };

    // A failed load leaves an empty list, which still gets printed.
    if let Err(e) = page.boot(&client) {
        tracing::debug!("printing the empty page: {e}");
    }

    if let Some(control) = &args.filter {
        if !page.click(control) {
            tracing::warn!(%control, "click ignored");
        }
    }

    for _ in 0..args.scrolls {
        page.scroll(FOOTER_IN_VIEW);
        driver.run_for(config.scroll_debounce);
    }

    driver.run_until_idle();
    println!("{}", page.render_html());

    ExitCode::SUCCESS
}

/// Maps the wall clock onto the event loop and feeds it photo completions.
struct Driver<'a> {
    event_loop: &'a EventLoop,
    images: &'a HttpImageLoader,
    started: Instant,
}

impl Driver<'_> {
    const MAX_WAIT: Duration = Duration::from_millis(250);

    fn tick(&self, max_wait: Duration) {
        let now = self.started.elapsed();
        let wait = self
            .event_loop
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
            .unwrap_or(max_wait)
            .min(max_wait);

        self.images.wait(wait);
        self.event_loop.advance_to(self.started.elapsed());
    }

    fn run_for(&self, period: Duration) {
        let until = self.started.elapsed() + period;
        while let Some(left) = until.checked_sub(self.started.elapsed()) {
            if left.is_zero() {
                break;
            }
            self.tick(left);
        }
        self.event_loop.advance_to(self.started.elapsed());
    }

    fn run_until_idle(&self) {
        while !self.event_loop.is_idle() || self.images.in_flight() > 0 {
            self.tick(Self::MAX_WAIT);
        }
    }
}
