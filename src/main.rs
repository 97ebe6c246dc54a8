use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contacts::cli::Session;
use contacts::config::{paths::DATA_DIR_ENV, ContactsPaths, Settings};

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Interactive command-line contact manager",
    long_about = "Keeps names, phone numbers and birthdays, and tells you whom to \
                  congratulate in the coming week. Type 'help' at the prompt for \
                  the list of commands."
)]
struct Cli {
    /// Directory holding addressbook.json, settings.json and audit.log
    #[arg(long, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "contacts=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let paths = cli
        .data_dir
        .map(ContactsPaths::with_base_dir)
        .unwrap_or_default();
    let settings = Settings::load_or_default(&paths)?;
    tracing::debug!(data_dir = %paths.base_dir().display(), "starting session");

    let mut session = Session::open(&paths, settings)?;
    session.run(std::io::stdin().lock(), std::io::stdout().lock())?;

    Ok(())
}
