//! Syntax tree nodes for the supported Python subset.
//!
//! The shapes mirror the JSON produced by the parse bridge (see
//! [`crate::source`]): every node is an object tagged with `_type`, using the
//! field names of Python's `ast` module. Statement and expression kinds
//! outside the supported subset deserialize to an `Unsupported` variant so
//! the printer can decide what to do with them.

use serde::Deserialize;

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Module {
    pub body: Vec<Stmt>,
}

/// A statement together with the position the parser recorded for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stmt {
    #[serde(default)]
    pub lineno: u32,
    /// Column of the first character, in spaces. Used verbatim as indentation.
    #[serde(default)]
    pub col_offset: u32,
    #[serde(flatten)]
    pub kind: StmtKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum StmtKind {
    Expr {
        value: Expr,
    },
    Pass,
    Assign {
        targets: Vec<Expr>,
        value: Expr,
    },
    AnnAssign {
        target: Expr,
        annotation: Expr,
        #[serde(default)]
        value: Option<Expr>,
    },
    AugAssign {
        target: Expr,
        op: Operator,
        value: Expr,
    },
    Return {
        #[serde(default)]
        value: Option<Expr>,
    },
    For {
        target: Expr,
        iter: Expr,
        body: Vec<Stmt>,
    },
    If {
        test: Expr,
        body: Vec<Stmt>,
    },
    Import {
        names: Vec<Alias>,
    },
    ImportFrom {
        #[serde(default)]
        module: Option<String>,
        names: Vec<Alias>,
        #[serde(default)]
        level: Option<u32>,
    },
    Raise {
        #[serde(default)]
        exc: Option<Expr>,
        #[serde(default)]
        cause: Option<Expr>,
    },
    FunctionDef(FunctionDef),
    #[serde(other)]
    Unsupported,
}

impl StmtKind {
    /// Short, stable name of the statement kind, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Expr { .. } => "Expr",
            StmtKind::Pass => "Pass",
            StmtKind::Assign { .. } => "Assign",
            StmtKind::AnnAssign { .. } => "AnnAssign",
            StmtKind::AugAssign { .. } => "AugAssign",
            StmtKind::Return { .. } => "Return",
            StmtKind::For { .. } => "For",
            StmtKind::If { .. } => "If",
            StmtKind::Import { .. } => "Import",
            StmtKind::ImportFrom { .. } => "ImportFrom",
            StmtKind::Raise { .. } => "Raise",
            StmtKind::FunctionDef(_) => "FunctionDef",
            StmtKind::Unsupported => "Unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub args: Arguments,
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub decorator_list: Vec<Expr>,
    #[serde(default)]
    pub returns: Option<Expr>,
}

/// Formal parameters of a function definition, in Python's layout:
/// `posonlyargs / args *vararg kwonlyargs **kwarg`.
///
/// `defaults` line up with the tail of `posonlyargs` followed by `args`;
/// `kw_defaults` has one entry per keyword-only parameter, `None` when it
/// has no default.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub posonlyargs: Vec<Arg>,
    #[serde(default)]
    pub args: Vec<Arg>,
    #[serde(default)]
    pub vararg: Option<Arg>,
    #[serde(default)]
    pub kwonlyargs: Vec<Arg>,
    #[serde(default)]
    pub kw_defaults: Vec<Option<Expr>>,
    #[serde(default)]
    pub kwarg: Option<Arg>,
    #[serde(default)]
    pub defaults: Vec<Expr>,
}

impl Arguments {
    /// Iterate positional parameters paired with their default value, if any.
    pub fn positional(&self) -> impl Iterator<Item = (&Arg, Option<&Expr>)> {
        let total = self.posonlyargs.len() + self.args.len();
        let first_default = total.saturating_sub(self.defaults.len());
        self.posonlyargs
            .iter()
            .chain(self.args.iter())
            .enumerate()
            .map(move |(i, arg)| {
                let default = i
                    .checked_sub(first_default)
                    .and_then(|d| self.defaults.get(d));
                (arg, default)
            })
    }

    /// Iterate keyword-only parameters paired with their default value, if any.
    pub fn keyword_only(&self) -> impl Iterator<Item = (&Arg, Option<&Expr>)> {
        self.kwonlyargs.iter().enumerate().map(move |(i, arg)| {
            let default = self.kw_defaults.get(i).and_then(Option::as_ref);
            (arg, default)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Arg {
    pub arg: String,
    #[serde(default)]
    pub annotation: Option<Expr>,
}

/// A keyword argument in a call. `arg` is `None` for `**mapping`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keyword {
    #[serde(default)]
    pub arg: Option<String>,
    pub value: Expr,
}

/// An imported name, optionally renamed with `as`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alias {
    pub name: String,
    #[serde(default)]
    pub asname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum Expr {
    Name {
        id: String,
    },
    Constant {
        value: Literal,
    },
    Call {
        func: Box<Expr>,
        #[serde(default)]
        args: Vec<Expr>,
        #[serde(default)]
        keywords: Vec<Keyword>,
    },
    Attribute {
        value: Box<Expr>,
        attr: String,
    },
    BinOp {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
    Compare {
        left: Box<Expr>,
        ops: Vec<CmpOperator>,
        comparators: Vec<Expr>,
    },
    List {
        elts: Vec<Expr>,
    },
    #[serde(other)]
    Unsupported,
}

impl Expr {
    /// The identifier of a bare name reference.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Expr::Name { id } => Some(id),
            _ => None,
        }
    }
}

/// Payload of a constant node.
///
/// Numeric and bytes payloads carry the textual form the source language
/// itself would print, so big integers and float formatting survive intact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Literal {
    Str(String),
    Int(String),
    Float(String),
    Complex(String),
    Bytes(String),
    Bool(bool),
    None,
    Ellipsis,
}

/// Binary and augmented-assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "_type")]
pub enum Operator {
    Add,
    Sub,
    Mult,
    Div,
    Pow,
    Mod,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,
}

impl Operator {
    pub const ALL: [Operator; 12] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mult,
        Operator::Div,
        Operator::Pow,
        Operator::Mod,
        Operator::LShift,
        Operator::RShift,
        Operator::BitOr,
        Operator::BitXor,
        Operator::BitAnd,
        Operator::FloorDiv,
    ];
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "_type")]
pub enum CmpOperator {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

impl CmpOperator {
    pub const ALL: [CmpOperator; 10] = [
        CmpOperator::Eq,
        CmpOperator::NotEq,
        CmpOperator::Lt,
        CmpOperator::LtE,
        CmpOperator::Gt,
        CmpOperator::GtE,
        CmpOperator::Is,
        CmpOperator::IsNot,
        CmpOperator::In,
        CmpOperator::NotIn,
    ];
}
