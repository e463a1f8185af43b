use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use di_payload::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.into_config()?;

    // Progress lines go to stderr; --verbose raises the default level so
    // per-file and per-output messages show. RUST_LOG still wins.
    let default_directive = if config.verbose {
        "di_payload=info"
    } else {
        "di_payload=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(default_directive.parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    di_payload::run(&config)?;
    Ok(())
}
