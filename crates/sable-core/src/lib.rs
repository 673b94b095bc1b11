//! Core engine for the Sable expression language
//!
//! The AST in [`ast`] is fed unmodified into independent passes, each
//! dispatched through [`visitor::Pass`]:
//!
//! - [`resolve_names`] checks every variable read against the scope chain
//! - [`evaluate`] interprets the program
//! - [`unparse`] renders indented source text
//! - [`build_cfg`] builds the control-flow graph, whose
//!   [`reachability`](semantic::ControlFlowGraph::reachability) separates live
//!   statements from dead ones

pub mod analysis;
pub mod ast;
pub mod builder;
pub mod config;
pub mod diagnostic;
pub mod eval;
pub mod program;
pub mod semantic;
pub mod unparse;
pub mod visitor;

pub use eval::{EvalError, evaluate};
pub use semantic::{build_cfg, resolve_names};
pub use unparse::unparse;
