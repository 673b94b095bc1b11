//! Program analysis
//!
//! Runs name resolution and control-flow reachability over a program and
//! reports the findings as diagnostics.

use tracing::debug;

use crate::ast::Stmt;
use crate::config::Config;
use crate::diagnostic::{Diagnostic, Severity};
use crate::semantic::{Declarations, NameResolver, build_cfg};

pub const UNRESOLVED_NAME: (&str, &str) = ("S001", "unresolved-name");
pub const UNREACHABLE_CODE: (&str, &str) = ("S002", "unreachable-code");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Whether every variable read resolved.
    pub resolved: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    unresolved: Option<Severity>,
    unreachable: Option<Severity>,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            unresolved: config.analysis.unresolved.severity(),
            unreachable: config.analysis.unreachable.severity(),
        }
    }

    pub fn analyze(&self, program: &Stmt) -> Analysis {
        let mut diagnostics = Vec::new();

        let (mut scopes, global) = Declarations::with_root();
        let mut resolver = NameResolver::new(&mut scopes);
        let resolved = resolver.resolve(program, global);

        if let Some(severity) = self.unresolved {
            let (code, name) = UNRESOLVED_NAME;
            for var in resolver.into_unresolved() {
                diagnostics.push(
                    Diagnostic::new(
                        code,
                        name,
                        severity,
                        format!("variable '{}' is read before it is declared", var),
                    )
                    .with_suggestion(format!(
                        "assign '{}' earlier in this block or an enclosing one",
                        var
                    )),
                );
            }
        }

        if let Some(severity) = self.unreachable {
            let (code, name) = UNREACHABLE_CODE;
            let cfg = build_cfg(program);
            for vertex in cfg.reachability().unreachable {
                diagnostics.push(
                    Diagnostic::new(
                        code,
                        name,
                        severity,
                        format!("unreachable statement `{}`", vertex),
                    )
                    .with_suggestion("remove it or move it before the return"),
                );
            }
        }

        debug!(resolved, diagnostics = diagnostics.len(), "analysis finished");

        Analysis {
            resolved,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{assign, int, plus, ret, try_block, variable};
    use crate::config::SeverityValue;

    fn program() -> Stmt {
        try_block([
            assign("x", variable("y")),
            ret(plus(variable("x"), int(1))),
            assign("z", int(2)),
        ])
        .unwrap()
    }

    #[test]
    fn reports_unresolved_and_unreachable() {
        let analysis = AnalysisEngine::new().analyze(&program());

        assert!(!analysis.resolved);
        assert!(analysis.has_errors());
        let codes: Vec<_> = analysis.diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["S001", "S002"]);
        assert_eq!(
            analysis.diagnostics[0].message,
            "variable 'y' is read before it is declared"
        );
        assert_eq!(analysis.diagnostics[1].message, "unreachable statement `z = 2`");
        assert_eq!(analysis.diagnostics[1].severity, Severity::Warning);
    }

    #[test]
    fn clean_program_has_no_diagnostics() {
        let program = try_block([assign("x", int(1)), ret(variable("x"))]).unwrap();
        let analysis = AnalysisEngine::new().analyze(&program);

        assert!(analysis.resolved);
        assert!(analysis.diagnostics.is_empty());
    }

    #[test]
    fn config_controls_severity_and_disables_checks() {
        let mut config = Config::default();
        config.analysis.unresolved = SeverityValue::Warning;
        config.analysis.unreachable = SeverityValue::Off;

        let analysis = AnalysisEngine::with_config(&config).analyze(&program());

        assert_eq!(analysis.diagnostics.len(), 1);
        assert_eq!(analysis.diagnostics[0].severity, Severity::Warning);
        assert!(!analysis.has_errors());
        assert!(!analysis.resolved);
    }
}
