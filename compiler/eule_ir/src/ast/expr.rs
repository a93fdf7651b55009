//! Expression nodes.
//!
//! Nodes whose evaluation can fault carry the line of their operator token
//! so runtime errors point back at the source.

use std::rc::Rc;

use super::{BinaryOp, Block, LogicalOp, Name, UnaryOp, UpdateOp};

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Absent optional expression (`for(;;)` parts, bare `return`).
    Empty,
    /// `target = value`, where `target` is an identifier or an index.
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
        line: u32,
    },
    /// `target op= value`
    CompoundAssign {
        op: BinaryOp,
        target: Box<Expr>,
        value: Box<Expr>,
        line: u32,
    },
    Prefix {
        op: UnaryOp,
        operand: Box<Expr>,
        line: u32,
    },
    /// `++target` / `--target`
    Update {
        op: UpdateOp,
        target: Box<Expr>,
        line: u32,
    },
    Infix {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        line: u32,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        line: u32,
    },
    /// `object[key]`, and `object.name` with a string key.
    Index {
        object: Box<Expr>,
        key: Box<Expr>,
        line: u32,
    },
    /// `proto { ... }`: a table literal whose prototype is `proto`.
    ProtoTable {
        proto: Box<Expr>,
        table: Vec<TableEntry>,
        line: u32,
    },
    Identifier {
        name: Name,
        line: u32,
    },
    Nihil,
    Bool(bool),
    Number(f64),
    String(Name),
    /// `{ k: v }` pairs and `[a, b]` elements.
    Table {
        pairs: Vec<TableEntry>,
        array: Vec<Expr>,
    },
    Function(Rc<FunctionLit>),
}

impl Expr {
    /// Whether this expression may appear on the left of `=`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Identifier { .. } | Expr::Index { .. })
    }
}

/// One `key: value` entry of a table literal.
#[derive(Clone, Debug, PartialEq)]
pub struct TableEntry {
    pub key: Expr,
    pub value: Expr,
}

impl TableEntry {
    pub fn new(key: Expr, value: Expr) -> Self {
        TableEntry { key, value }
    }
}

/// Function flavours. Only [`FunctionKind::Sync`] is executable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionKind {
    Sync,
    SyncGenerator,
    Async,
    AsyncGenerator,
}

impl FunctionKind {
    pub fn new(is_async: bool, is_generator: bool) -> Self {
        match (is_async, is_generator) {
            (false, false) => FunctionKind::Sync,
            (false, true) => FunctionKind::SyncGenerator,
            (true, false) => FunctionKind::Async,
            (true, true) => FunctionKind::AsyncGenerator,
        }
    }

    pub fn is_generator(self) -> bool {
        matches!(self, FunctionKind::SyncGenerator | FunctionKind::AsyncGenerator)
    }

    pub fn describe(self) -> &'static str {
        match self {
            FunctionKind::Sync => "function",
            FunctionKind::SyncGenerator => "generator function",
            FunctionKind::Async => "async function",
            FunctionKind::AsyncGenerator => "async generator function",
        }
    }
}

/// A function literal, shared between the tree and every closure made from it.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLit {
    pub params: Vec<Name>,
    pub body: Block,
    pub kind: FunctionKind,
    /// Line of the `function` keyword.
    pub line: u32,
}
