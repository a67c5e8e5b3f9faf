//! Rowscope - terminal table browser

use clap::Parser;
use rowscope_cli::{build_engine, load_config, session, AppResult, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = load_config(&cli)?;
    let mut engine = build_engine(&config)?;
    tracing::info!("Rowscope ready: {} records", engine.store().len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(engine.view())?);
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(
        &mut engine,
        &config.view.page_size_options,
        stdin.lock(),
        stdout.lock(),
    )?;
    Ok(())
}
