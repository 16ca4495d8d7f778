use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use makerelease::{tracks_from_json, ComposeOptions, TagComposer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "makerelease",
    version,
    about = "Compose a release name from media track metadata"
)]
struct Cli {
    /// JSON track dump (pymediainfo `to_data()` or `mediainfo --Output=JSON`).
    /// Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Release title
    #[arg(short, long)]
    title: String,

    /// Release year
    #[arg(short, long)]
    year: String,

    /// Release crew, appended as `[crew]` when non-empty
    #[arg(short, long, default_value = "")]
    crew: String,

    /// TOML options file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop empty tag segments instead of leaving double spaces
    #[arg(long)]
    collapse_whitespace: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut options = match &cli.config {
        Some(path) => ComposeOptions::from_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => ComposeOptions::default(),
    };
    if cli.collapse_whitespace {
        options.collapse_whitespace = true;
    }
    tracing::debug!(?options, "compose options");

    let raw = read_input(cli.input.as_ref())?;
    let composer = TagComposer::with_options(options);
    let name = compose_dump(&composer, &raw, &cli)?;

    println!("{}", name);
    Ok(())
}

fn compose_dump(composer: &TagComposer, raw: &str, cli: &Cli) -> Result<String> {
    let tracks = tracks_from_json(raw).context("Failed to load track dump")?;
    composer
        .compose(&tracks, &cli.title, &cli.year, &cli.crew)
        .context("Failed to compose release name")
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Initialize logging to stderr. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "makerelease=warn",
        1 => "makerelease=info",
        2 => "makerelease=debug",
        _ => "makerelease=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
