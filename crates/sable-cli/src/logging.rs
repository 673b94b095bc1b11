use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, fmt::writer::BoxMakeWriter, prelude::*};

use crate::cli::Cli;

/// Where log lines go and whether they may carry ANSI colors.
struct Sink {
    writer: BoxMakeWriter,
    ansi: bool,
    guard: Option<WorkerGuard>,
}

impl Sink {
    /// Stderr by default; `--log-file` switches to a non-blocking file writer
    /// whose guard must outlive the program.
    fn for_cli(cli: &Cli) -> Self {
        match cli.log_file.as_deref() {
            Some(path) => {
                let appender = tracing_appender::rolling::never(log_dir(path), log_file_name(path));
                let (writer, guard) = tracing_appender::non_blocking(appender);
                Sink {
                    writer: BoxMakeWriter::new(writer),
                    ansi: false,
                    guard: Some(guard),
                }
            }
            None => Sink {
                writer: BoxMakeWriter::new(std::io::stderr),
                ansi: !cli.no_color,
                guard: None,
            },
        }
    }
}

pub fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let level = cli.log_level.as_tracing_level();
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let sink = Sink::for_cli(cli);

    let layer = fmt::layer()
        .with_writer(sink.writer)
        .with_ansi(sink.ansi)
        .with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    if cli.log_json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }

    sink.guard
}

fn log_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn log_file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("sable.log")
}
