use anyhow::Context;
use clap::Parser;
use std::io;
use vfab_demo::cli::Cli;
use vfab_demo::config::load_config;
use vfab_demo::{init_logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = load_config(cli.config.as_deref()).context("Configuration is malformed")?;
    let _log = init_logging(&cfg.logging, cli.log_level.as_deref())?;

    run(&cli, &cfg.args, io::stdin().lock(), io::stdout().lock())
}
