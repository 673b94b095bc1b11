//! Human-readable colored output

use std::fmt::Write;

use colored::{ColoredString, Colorize};
use sable_core::analysis::Analysis;
use sable_core::diagnostic::Severity;
use sable_core::semantic::ControlFlowGraph;

#[derive(Debug, Default)]
pub struct PrettyFormatter;

impl PrettyFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, analysis: &Analysis, program: &str) -> String {
        let mut out = String::new();

        for diag in &analysis.diagnostics {
            let _ = writeln!(
                out,
                "{}[{}]: {}",
                severity_label(diag.severity),
                diag.code.dimmed(),
                diag.message
            );
            let _ = writeln!(out, "  {} {} ({})", "-->".blue(), program, diag.name);
            if let Some(suggestion) = &diag.suggestion {
                let _ = writeln!(out, "  {} {}", "suggestion:".green(), suggestion);
            }
            out.push('\n');
        }

        let errors = analysis.count(Severity::Error);
        let warnings = analysis.count(Severity::Warning);
        if analysis.diagnostics.is_empty() {
            let _ = writeln!(out, "{} no issues found", "ok:".green().bold());
        } else {
            let _ = writeln!(
                out,
                "Found {} error(s) and {} warning(s)",
                errors, warnings
            );
        }

        out
    }

    pub fn format_cfg(&self, cfg: &ControlFlowGraph<'_>) -> String {
        let mut out = String::new();

        match cfg.start() {
            Some(start) => {
                let _ = writeln!(out, "{} {}", "start:".bold(), start);
            }
            None => {
                let _ = writeln!(out, "{} (empty program)", "start:".bold());
            }
        }

        let _ = writeln!(out, "{}", "edges:".bold());
        for (from, to) in cfg.edges() {
            let _ = writeln!(out, "  {} {} {}", from, "->".blue(), to);
        }

        let reachability = cfg.reachability();
        let _ = writeln!(out, "{}", "reachable:".bold());
        for vertex in &reachability.reachable {
            let _ = writeln!(out, "  {}", vertex.to_string().green());
        }
        let _ = writeln!(out, "{}", "unreachable:".bold());
        for vertex in &reachability.unreachable {
            let _ = writeln!(out, "  {}", vertex.to_string().red());
        }

        out
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
        Severity::Info => "info".blue().bold(),
        Severity::Hint => "hint".cyan().bold(),
    }
}
