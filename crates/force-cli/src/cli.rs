//! CLI definition using clap

use clap::{Parser, Subcommand};
use force_types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "force-validator")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Check a mixed Clan / Inner Sphere force against a tonnage cap")]
#[command(long_about = None)]
pub struct Cli {
    /// Defaults to `check` with every value prompted for
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colored status output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a force composition. Missing values are prompted for.
    Check {
        /// Clan tonnage (weighted by the handicap factor)
        #[arg(long, allow_negative_numbers = true)]
        clan: Option<f64>,

        /// Inner Sphere tonnage
        #[arg(long, allow_negative_numbers = true)]
        inner_sphere: Option<f64>,

        /// Base tonnage limit
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable colored status
        #[arg(long)]
        set_color: Option<bool>,

        /// Set default log level
        #[arg(long)]
        set_log_level: Option<LogLevel>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["force-validator"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_check_flags() {
        let cli = Cli::try_parse_from([
            "force-validator",
            "check",
            "--clan",
            "100",
            "--inner-sphere",
            "200",
            "--limit",
            "400",
            "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Some(Commands::Check { clan, inner_sphere, limit }) => {
                assert_eq!(clan, Some(100.0));
                assert_eq!(inner_sphere, Some(200.0));
                assert_eq!(limit, Some(400.0));
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_non_numeric_flag_rejected() {
        assert!(Cli::try_parse_from(["force-validator", "check", "--clan", "heavy"]).is_err());
    }

    #[test]
    fn test_config_flags() {
        let cli =
            Cli::try_parse_from(["force-validator", "config", "--set-color", "false", "--set-log-level", "debug"])
                .unwrap();
        match cli.command {
            Some(Commands::Config { set_color, set_log_level, .. }) => {
                assert_eq!(set_color, Some(false));
                assert_eq!(set_log_level, Some(LogLevel::Debug));
            }
            _ => panic!("expected config command"),
        }
    }
}
