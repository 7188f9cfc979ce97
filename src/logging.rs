use tracing_subscriber::EnvFilter;

/// Stderr logging for the binaries. `RUST_LOG` takes full filter directives
/// (`hotels_list=debug,reqwest=warn`); INFO when unset or unparsable.
/// Stdout is left for program output.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
