use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(clap::Parser)]
#[clap(
    version,
    about = "Generates the MSP430 information memory lookup table.",
    long_about = "Generates the MSP430 information memory lookup table.\n\n\
        The table is printed to stdout as a `phf_map!` literal. Diagnostics go to stderr \
        and are controlled with RUST_LOG."
)]
struct Cli {
    /// A text file with one known device name per line.
    #[arg(value_name = "NAMES")]
    names: PathBuf,
    /// A CSV export of the device headers: name, origin, length, end, sectors.
    #[arg(value_name = "HEADERS")]
    headers: PathBuf,
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    for input in [&cli.names, &cli.headers] {
        ensure!(input.is_file(), "No such file: {}", input.display());
    }

    infomem_gen::generate(&cli.names, &cli.headers, std::io::stdout().lock()).with_context(
        || {
            format!(
                "Failed to generate the table from '{}' and '{}'.",
                cli.names.display(),
                cli.headers.display()
            )
        },
    )
}

/// Logs to stderr, so stdout only carries the generated table.
///
/// Uses `RUST_LOG` and falls back to `WARN`.
fn setup_logging() {
    let stderr_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        );

    tracing_subscriber::registry()
        .with(stderr_subscriber)
        .init();
}
