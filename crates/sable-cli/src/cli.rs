use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::commands::Commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "sable",
    author,
    version,
    about = "Analyze, run and format Sable programs",
    long_about = "Sable runs independent passes over a program: name resolution,\n\
                  evaluation, formatting and control-flow analysis.\n\n\
                  Programs are read from their JSON form. Configure logging with\n\
                  --log-level and --log-file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "warn",
        help = "Set the log level"
    )]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to the specified file")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub log_json: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    pub fn configure_colors(&self) {
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        if self.no_color || no_color_env {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_check_command() {
        let cli = Cli::try_parse_from(["sable", "check", "program.json"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.program, PathBuf::from("program.json"));
                assert_eq!(args.format, OutputFormat::Pretty);
                assert!(!args.fail_on_warnings);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn cli_parses_check_with_options() {
        let cli = Cli::try_parse_from([
            "sable",
            "check",
            "program.json",
            "--format",
            "json",
            "--fail-on-warnings",
        ])
        .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.fail_on_warnings);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["sable", "check", "p.json", "--format", "sarif"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_run_command() {
        let cli = Cli::try_parse_from(["sable", "run", "program.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn cli_parses_fmt_with_indent() {
        let cli = Cli::try_parse_from(["sable", "fmt", "program.json", "--indent", "2"]).unwrap();
        match cli.command {
            Commands::Fmt(args) => assert_eq!(args.indent, Some(2)),
            _ => panic!("Expected Fmt command"),
        }
    }

    #[test]
    fn cli_parses_cfg_command() {
        let cli =
            Cli::try_parse_from(["sable", "cfg", "program.json", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Cfg(args) => assert_eq!(args.format, OutputFormat::Json),
            _ => panic!("Expected Cfg command"),
        }
    }

    #[test]
    fn cli_requires_program_path() {
        assert!(Cli::try_parse_from(["sable", "run"]).is_err());
    }

    #[test]
    fn logging_defaults() {
        let cli = Cli::try_parse_from(["sable", "run", "p.json"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(cli.log_file.is_none());
        assert!(!cli.log_json);
        assert!(!cli.no_color);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "sable",
            "run",
            "p.json",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/sable.log",
            "--log-json",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/sable.log")));
        assert!(cli.log_json);
        assert!(cli.no_color);
    }

    #[test]
    fn cli_version_is_set() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_help_contains_commands() {
        let mut cmd = Cli::command();
        let help = cmd.render_help().to_string();
        assert!(help.contains("check"));
        assert!(help.contains("run"));
        assert!(help.contains("fmt"));
        assert!(help.contains("cfg"));
        assert!(help.contains("--log-level"));
    }

    #[test]
    fn check_help_shows_options() {
        let mut cmd = Cli::command();
        let check_cmd = cmd
            .get_subcommands_mut()
            .find(|c| c.get_name() == "check")
            .unwrap();
        let help = check_cmd.render_help().to_string();
        assert!(help.contains("PROGRAM"));
        assert!(help.contains("--format"));
        assert!(help.contains("--fail-on-warnings"));
    }

    #[test]
    fn log_level_converts_to_tracing_level() {
        assert_eq!(LogLevel::Debug.as_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::Info.as_tracing_level(), tracing::Level::INFO);
        assert_eq!(LogLevel::Warn.as_tracing_level(), tracing::Level::WARN);
        assert_eq!(LogLevel::Error.as_tracing_level(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Trace.as_tracing_level(), tracing::Level::TRACE);
    }
}
