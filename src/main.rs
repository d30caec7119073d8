use anyhow::Context;
use autolot::utils::{logger, validation::Validate};
use autolot::{CliConfig, Menu, Settings};
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if let Some(path) = config.config.clone() {
        let settings = Settings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path))?;
        config.merge_settings(&settings);
    }

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting autolot");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), config.data_file());
    menu.run()?;

    tracing::info!("Exiting autolot");
    Ok(())
}
