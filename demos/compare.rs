//! Planaria compare — features and shape difference of two specimens.
//!
//! Usage:
//! ```text
//! cargo run --example compare -- a_skeleton_extra.txt b_skeleton_extra.txt
//! RUST_LOG=planaria=debug cargo run --example compare -- a.txt b.txt
//! ```
//!
//! Prints one JSON object with both feature rows and the difference.

use std::path::Path;
use std::process::ExitCode;

use planaria::format::ParseOptions;
use planaria::specimen::{sample_name, SKELETON_PATH_SUFFIX};
use planaria::Specimen;

fn load(path: &str, options: &ParseOptions) -> Option<(String, Specimen)> {
    let name = sample_name(Path::new(path), SKELETON_PATH_SUFFIX).unwrap_or_else(|| path.to_owned());
    match Specimen::from_file(path, options) {
        Ok(specimen) => Some((name, specimen)),
        Err(err) => {
            tracing::error!(%path, %err, "failed to load specimen");
            None
        }
    }
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for planaria.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planaria=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planaria=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [first, second] = args.as_slice() else {
        eprintln!("usage: compare <specimen_a> <specimen_b>");
        return ExitCode::from(2);
    };

    let options = ParseOptions::default();
    let (Some((name_a, a)), Some((name_b, b))) = (load(first, &options), load(second, &options))
    else {
        return ExitCode::FAILURE;
    };

    let report = serde_json::json!({
        "a": a.feature_row(name_a, -1),
        "b": b.feature_row(name_b, -1),
        "diff": a.compare(&b),
    });
    match serde_json::to_string_pretty(&report) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "failed to serialize report");
            ExitCode::FAILURE
        }
    }
}
