//! Semantic analysis module
//!
//! Provides scope tables, name resolution, and control flow graph
//! construction with reachability.

pub mod cfg;
pub mod graph;
pub mod resolver;
pub mod scope;

pub use cfg::{ControlFlowGraph, Cursor, Reachability, Vertex, build_cfg, vertex_of};
pub use graph::{DirectedGraph, GraphNode, NodeId};
pub use resolver::{Declarations, NameResolver, resolve_names};
pub use scope::{AncestorIter, Scope, ScopeId, ScopeTree};
