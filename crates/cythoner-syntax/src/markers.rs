//! Decorator markers recognized on function definitions.
//!
//! `@no_gil()` and `@except_error(Kind)` are plain Python decorators at run
//! time. For the generator they are only signals: each one adds an option to
//! the generated function header. Any other decorator is ignored.

use crate::ast::{Expr, FunctionDef};
use crate::error::MarkerError;

pub const NO_GIL: &str = "no_gil";
pub const EXCEPT_ERROR: &str = "except_error";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker<'a> {
    /// Function may run without holding the interpreter lock.
    NoGil,
    /// Function header carries an `except <kind>` clause.
    ExceptError(&'a Expr),
}

/// Name a decorator is referred to by, ignoring call parentheses and any
/// module qualification (`cythoner.no_gil()` is `no_gil`).
fn decorator_name(decorator: &Expr) -> Option<(&str, &[Expr])> {
    let no_args: &[Expr] = &[];
    match decorator {
        Expr::Name { id } => Some((id.as_str(), no_args)),
        Expr::Attribute { attr, .. } => Some((attr.as_str(), no_args)),
        Expr::Call { func, args, .. } => match func.as_ref() {
            Expr::Name { id } => Some((id.as_str(), args.as_slice())),
            Expr::Attribute { attr, .. } => Some((attr.as_str(), args.as_slice())),
            _ => None,
        },
        _ => None,
    }
}

impl FunctionDef {
    /// Markers in declaration order.
    pub fn markers(&self) -> Result<Vec<Marker<'_>>, MarkerError> {
        let mut markers = Vec::new();
        for decorator in &self.decorator_list {
            let Some((name, args)) = decorator_name(decorator) else {
                continue;
            };
            let arity_error = |marker, expected| MarkerError {
                function: self.name.clone(),
                marker,
                expected,
                found: args.len(),
            };
            match (name, args) {
                (NO_GIL, []) => markers.push(Marker::NoGil),
                (NO_GIL, _) => return Err(arity_error(NO_GIL, 0)),
                (EXCEPT_ERROR, [kind]) => markers.push(Marker::ExceptError(kind)),
                (EXCEPT_ERROR, _) => return Err(arity_error(EXCEPT_ERROR, 1)),
                _ => {}
            }
        }
        Ok(markers)
    }
}
