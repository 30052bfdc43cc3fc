use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use treekv_server::LogFormat;

#[derive(Parser)]
#[command(
    name = "treekv",
    about = "treekv: in-memory hierarchical key/value store over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub settings: Settings,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub settings: Settings,
}

/// Configuration file plus command-line overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct Settings {
    /// TOML configuration file
    #[arg(short, long, env = "TREEKV_CONFIG")]
    pub config: Option<PathBuf>,
    /// Address to listen on
    #[arg(long, env = "TREEKV_BIND")]
    pub bind: Option<SocketAddr>,
    /// Largest accepted PUT body in bytes
    #[arg(long)]
    pub max_body_size: Option<usize>,
    /// Log filter directive, e.g. `info` or `treekv_tree=debug`
    #[arg(long)]
    pub log_level: Option<String>,
    /// Log output format
    #[arg(long)]
    pub log_format: Option<LogFormatArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["treekv", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.settings.config.is_none());
            assert!(args.settings.bind.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "treekv", "serve",
            "--bind", "127.0.0.1:9000",
            "--max-body-size", "64",
            "--log-format", "text",
            "--log-level", "debug",
        ]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.settings.bind, Some("127.0.0.1:9000".parse().unwrap()));
            assert_eq!(args.settings.max_body_size, Some(64));
            assert!(matches!(args.settings.log_format, Some(LogFormatArg::Text)));
            assert_eq!(args.settings.log_level.as_deref(), Some("debug"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_config_file() {
        let cli = Cli::try_parse_from(["treekv", "config", "-c", "/etc/treekv.toml"]).unwrap();
        if let Command::Config(args) = cli.command {
            assert_eq!(args.settings.config, Some(PathBuf::from("/etc/treekv.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn reject_bad_bind_address() {
        assert!(Cli::try_parse_from(["treekv", "serve", "--bind", "nowhere"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["treekv", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn log_format_arg_converts() {
        assert_eq!(LogFormat::from(LogFormatArg::Json), LogFormat::Json);
        assert_eq!(LogFormat::from(LogFormatArg::Text), LogFormat::Text);
    }
}
