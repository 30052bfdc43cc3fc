use anyhow::Context;
use colored::Colorize;
use treekv_server::{ServerConfig, TreeServer};

use crate::cli::*;
use crate::logging;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args, cli.verbose),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_serve(args: ServeArgs, verbose: bool) -> anyhow::Result<()> {
    let config = resolve(&args.settings)?;
    logging::init(&config.log, verbose)?;
    println!(
        "{} treekv on {} (max body {} bytes)",
        "▶".green().bold(),
        config.bind_addr.to_string().bold(),
        config.max_body_size
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(TreeServer::new(config).serve())
        .context("server stopped with an error")
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve(&args.settings)?;
    let source = match &args.settings.config {
        Some(path) => path.display().to_string(),
        None => "defaults".into(),
    };
    println!("{}", format!("# effective configuration ({source})").dimmed());
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Load the configuration file, if any, then apply command-line overrides.
pub fn resolve(settings: &Settings) -> anyhow::Result<ServerConfig> {
    let mut config = match &settings.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("cannot load configuration from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = settings.bind {
        config.bind_addr = bind;
    }
    if let Some(max) = settings.max_body_size {
        config.max_body_size = max;
    }
    if let Some(level) = &settings.log_level {
        config.log.level = level.clone();
    }
    if let Some(format) = settings.log_format {
        config.log.format = format.into();
    }
    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}
