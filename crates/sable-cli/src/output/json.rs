//! JSON output formatter
//!
//! Structured output of analysis results and control-flow graphs for
//! programmatic integration.

use sable_core::analysis::Analysis;
use sable_core::diagnostic::{Diagnostic, Severity};
use sable_core::semantic::ControlFlowGraph;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub version: &'static str,
    pub metadata: JsonMetadata,
    pub summary: JsonSummary,
    pub diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
pub struct JsonMetadata {
    pub sable_version: &'static str,
    pub program: String,
}

#[derive(Serialize)]
pub struct JsonSummary {
    pub resolved: bool,
    pub total_diagnostics: usize,
    pub by_severity: SeverityCounts,
}

#[derive(Serialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
    pub hint: usize,
}

#[derive(Serialize)]
pub struct JsonCfg {
    pub start: Option<String>,
    pub vertices: Vec<String>,
    pub edges: Vec<JsonEdge>,
    pub reachable: Vec<String>,
    pub unreachable: Vec<String>,
}

#[derive(Serialize)]
pub struct JsonEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, analysis: &Analysis, program: &str) -> String {
        let output = JsonOutput {
            version: "1.0",
            metadata: JsonMetadata {
                sable_version: env!("CARGO_PKG_VERSION"),
                program: program.to_string(),
            },
            summary: self.build_summary(analysis),
            diagnostics: &analysis.diagnostics,
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_cfg(&self, cfg: &ControlFlowGraph<'_>) -> String {
        let reachability = cfg.reachability();
        let output = JsonCfg {
            start: cfg.start().map(|v| v.to_string()),
            vertices: cfg.vertices().map(|v| v.to_string()).collect(),
            edges: cfg
                .edges()
                .map(|(from, to)| JsonEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
            reachable: reachability.reachable.iter().map(|v| v.to_string()).collect(),
            unreachable: reachability.unreachable.iter().map(|v| v.to_string()).collect(),
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn build_summary(&self, analysis: &Analysis) -> JsonSummary {
        JsonSummary {
            resolved: analysis.resolved,
            total_diagnostics: analysis.diagnostics.len(),
            by_severity: SeverityCounts {
                error: analysis.count(Severity::Error),
                warning: analysis.count(Severity::Warning),
                info: analysis.count(Severity::Info),
                hint: analysis.count(Severity::Hint),
            },
        }
    }
}
