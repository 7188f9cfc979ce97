use clap::Parser;
use hotels_list::{logging, ota};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Normalizes an OTA rate feed into the hotels.json catalog, written to stdout.
#[derive(Parser, Debug)]
#[command(name = "ota-parser", version)]
struct Args {
    /// Raw OTA rate-feed JSON file.
    feed: PathBuf,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    // Build everything before touching stdout so a failure leaves no partial output.
    let output = match ota::normalize_file(&args.feed)
        .and_then(|hotels| serde_json::to_string(&hotels).map_err(Into::into))
    {
        Ok(json) => json,
        Err(e) => {
            eprintln!("ota-parser: {}: {e}", args.feed.display());
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{output}") {
        eprintln!("ota-parser: failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
