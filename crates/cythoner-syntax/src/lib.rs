//! Syntax tree model for the cythoner generator.
//!
//! This crate provides:
//! - The closed set of statement and expression nodes the generator renders
//!   (`Module`, `Stmt`, `Expr`, operators, literals)
//! - Decorator markers (`no_gil`, `except_error`) as plain data
//! - The bridge to the external Python parser (JSON in, `Module` out)

pub mod ast;
pub use ast::{
    Alias, Arg, Arguments, CmpOperator, Expr, FunctionDef, Keyword, Literal, Module, Operator,
    Stmt, StmtKind,
};

pub mod error;
pub use error::{MarkerError, SyntaxError};

pub mod markers;
pub use markers::Marker;

pub mod source;
pub use source::{ParseOptions, parse_json, parse_source};
