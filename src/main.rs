//! collection-hooks - shape virtual collections into feeds and listings.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use collection_hooks::{
    cli::{self, Cli},
    config::{ConfigError, SiteConfig},
    log, logger,
};

fn main() {
    if let Err(err) = run() {
        // Diagnostics already carry their own colored header
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => eprintln!("{diag}"),
            _ => log!("error"; "{:#}", err),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;
    cli::hooks::run(&cli, &config)
}
