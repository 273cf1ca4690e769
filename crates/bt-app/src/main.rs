use anyhow::Result;
use clap::Parser;

pub mod app;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis les overrides CLI
    let mut config = app::resolve_config(&cli)?;
    app::apply_overrides(&cli, &mut config)?;
    log::debug!("Config : {config:?}");

    // 4. Translittérer et afficher
    let output = app::run(&cli, &config, std::io::stdin().lock())?;
    println!("{output}");
    Ok(())
}
