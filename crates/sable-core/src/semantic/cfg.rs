//! Control Flow Graph construction and reachability
//!
//! Vertices are the assignment and return statements of a program, compared
//! by identity. The builder threads a [`Cursor`] through the tree: each
//! statement receives the cursor left by the one before it and hands back the
//! cursor for whatever follows. A return closes the chain, so every statement
//! after it is still recorded as a vertex but never receives an edge.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use tracing::{debug, trace};

use crate::ast::{Assignment, Binary, Block, Return, Stmt, Value, Variable};
use crate::visitor::Pass;

use super::graph::DirectedGraph;

/// A statement that can appear in the control-flow graph.
#[derive(Clone, Copy)]
pub enum Vertex<'a> {
    Assignment(&'a Assignment),
    Return(&'a Return),
}

impl<'a> Vertex<'a> {
    pub fn accept<P: Pass<'a>>(self, pass: &mut P, input: P::Input) -> P::StmtOutput {
        match self {
            Vertex::Assignment(assignment) => assignment.accept(pass, input),
            Vertex::Return(ret) => ret.accept(pass, input),
        }
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Vertex::Return(_))
    }

    fn address(&self) -> *const () {
        match *self {
            Vertex::Assignment(assignment) => ptr::from_ref(assignment).cast(),
            Vertex::Return(ret) => ptr::from_ref(ret).cast(),
        }
    }
}

impl PartialEq for Vertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.is_return() == other.is_return() && ptr::eq(self.address(), other.address())
    }
}

impl Eq for Vertex<'_> {}

impl Hash for Vertex<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_return().hash(state);
        ptr::hash(self.address(), state);
    }
}

impl fmt::Debug for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.accept(&mut crate::unparse::Unparser::new(), 0);
        match self {
            Vertex::Assignment(_) => write!(f, "Assignment({} @ {:p})", text, self.address()),
            Vertex::Return(_) => write!(f, "Return({} @ {:p})", text, self.address()),
        }
    }
}

impl fmt::Display for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.accept(&mut crate::unparse::Unparser::new(), 0))
    }
}

/// Sequencing state threaded between statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor<'a> {
    /// Nothing has executed yet; the next statement becomes the start.
    Entry,
    /// The statement that executes immediately before the next one.
    After(Vertex<'a>),
    /// A return has closed the chain; what follows is dead code.
    Terminated,
}

/// Result of a reachability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability<'a> {
    /// Breadth-first order from the start vertex, start included.
    pub reachable: Vec<Vertex<'a>>,
    /// Every other vertex, in insertion order.
    pub unreachable: Vec<Vertex<'a>>,
}

impl Reachability<'_> {
    pub fn is_reachable(&self, stmt: &Stmt) -> bool {
        Self::find(&self.reachable, stmt)
    }

    pub fn is_unreachable(&self, stmt: &Stmt) -> bool {
        Self::find(&self.unreachable, stmt)
    }

    fn find(vertices: &[Vertex<'_>], stmt: &Stmt) -> bool {
        vertex_of(stmt).is_some_and(|v| vertices.iter().any(|&candidate| candidate == v))
    }
}

/// The vertex for an assignment or return statement. Blocks are not vertices.
pub fn vertex_of(stmt: &Stmt) -> Option<Vertex<'_>> {
    match stmt {
        Stmt::Assignment(assignment) => Some(Vertex::Assignment(assignment)),
        Stmt::Return(ret) => Some(Vertex::Return(ret)),
        Stmt::Block(_) => None,
    }
}

#[derive(Debug)]
pub struct ControlFlowGraph<'a> {
    graph: DirectedGraph<Vertex<'a>>,
    start: Option<Vertex<'a>>,
}

impl Default for ControlFlowGraph<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ControlFlowGraph<'a> {
    pub fn new() -> Self {
        Self {
            graph: DirectedGraph::new(),
            start: None,
        }
    }

    pub fn build(root: &'a Stmt) -> Self {
        let mut builder = CfgBuilder::new();
        root.accept(&mut builder, Cursor::Entry);
        let cfg = builder.graph;
        debug!(
            vertices = cfg.vertex_count(),
            edges = cfg.edge_count(),
            "control flow graph built"
        );
        cfg
    }

    pub fn start(&self) -> Option<Vertex<'a>> {
        self.start
    }

    pub fn graph(&self) -> &DirectedGraph<Vertex<'a>> {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex<'a>> + '_ {
        self.graph.vertices()
    }

    pub fn edges(&self) -> impl Iterator<Item = (Vertex<'a>, Vertex<'a>)> + '_ {
        self.graph.edges()
    }

    pub fn contains(&self, stmt: &'a Stmt) -> bool {
        vertex_of(stmt).is_some_and(|v| self.graph.contains_vertex(v))
    }

    pub fn has_edge(&self, from: &'a Stmt, to: &'a Stmt) -> bool {
        match (vertex_of(from), vertex_of(to)) {
            (Some(from), Some(to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    pub fn successors(&self, vertex: Vertex<'a>) -> impl Iterator<Item = Vertex<'a>> + '_ {
        self.graph.successors(vertex)
    }

    pub fn predecessors(&self, vertex: Vertex<'a>) -> impl Iterator<Item = Vertex<'a>> + '_ {
        self.graph.predecessors(vertex)
    }

    /// Partitions the vertices into those reachable from the start and the rest.
    pub fn reachability(&self) -> Reachability<'a> {
        let reachable = match self.start {
            Some(start) => self.graph.reachable_from(start),
            None => Vec::new(),
        };
        let seen: HashSet<_> = reachable.iter().copied().collect();
        let unreachable = self
            .graph
            .vertices()
            .filter(|v| !seen.contains(v))
            .collect();

        Reachability {
            reachable,
            unreachable,
        }
    }

    fn insert(&mut self, vertex: Vertex<'a>, cursor: Cursor<'a>) {
        self.graph.add_vertex(vertex);
        trace!(%vertex, "cfg vertex");

        match cursor {
            Cursor::Entry => {
                if self.start.is_none() {
                    self.start = Some(vertex);
                }
            }
            Cursor::After(previous) => {
                self.graph.add_edge(previous, vertex);
                trace!(from = %previous, to = %vertex, "cfg edge");
            }
            Cursor::Terminated => {}
        }
    }
}

/// Builds the control-flow graph of `root`.
pub fn build_cfg(root: &Stmt) -> ControlFlowGraph<'_> {
    ControlFlowGraph::build(root)
}

struct CfgBuilder<'a> {
    graph: ControlFlowGraph<'a>,
}

impl CfgBuilder<'_> {
    fn new() -> Self {
        Self {
            graph: ControlFlowGraph::new(),
        }
    }
}

impl<'a> Pass<'a> for CfgBuilder<'a> {
    type Input = Cursor<'a>;
    type ExprOutput = ();
    type StmtOutput = Cursor<'a>;

    fn visit_literal(&mut self, _value: Value, _cursor: Cursor<'a>) {}

    fn visit_variable(&mut self, _variable: &'a Variable, _cursor: Cursor<'a>) {}

    fn visit_binary(&mut self, _binary: &'a Binary, _cursor: Cursor<'a>) {}

    fn visit_assignment(&mut self, assignment: &'a Assignment, cursor: Cursor<'a>) -> Cursor<'a> {
        let vertex = Vertex::Assignment(assignment);
        self.graph.insert(vertex, cursor);
        match cursor {
            Cursor::Terminated => Cursor::Terminated,
            Cursor::Entry | Cursor::After(_) => Cursor::After(vertex),
        }
    }

    fn visit_return(&mut self, ret: &'a Return, cursor: Cursor<'a>) -> Cursor<'a> {
        self.graph.insert(Vertex::Return(ret), cursor);
        Cursor::Terminated
    }

    fn visit_block(&mut self, block: &'a Block, cursor: Cursor<'a>) -> Cursor<'a> {
        block
            .statements
            .iter()
            .fold(cursor, |current, stmt| stmt.accept(self, current))
    }
}
