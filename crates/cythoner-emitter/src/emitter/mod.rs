//! Printer - renders the syntax tree as Cython source.
//!
//! Dispatch is a flat `match` per site: statements (`statements.rs`),
//! function headers and parameter lists (`functions.rs`), expressions and
//! atoms (`expressions.rs`), constants (`literals.rs`).
//!
//! Indentation is never computed from nesting. Each statement is indented by
//! exactly the `col_offset` the parser recorded for it.

use cythoner_syntax::{Arguments, CmpOperator, Expr, Keyword, Module, Operator};
use tracing::debug;

use crate::error::EmitError;
use crate::source_writer::SourceWriter;

mod expressions;
mod functions;
mod helpers;
mod literals;
mod statements;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Drop statements outside the supported subset instead of failing.
    pub skip_unsupported: bool,
}

/// Argument-level dispatch input.
#[derive(Debug, Clone, Copy)]
pub enum ArgumentList<'a> {
    /// Formal parameters of a function definition.
    Parameters(&'a Arguments),
    /// Arguments of a call.
    Call {
        args: &'a [Expr],
        keywords: &'a [Keyword],
    },
}

/// Stateless renderer. Every call builds its own output, so one `Printer`
/// can render any number of trees, and the same tree always renders to the
/// same text.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    options: PrinterOptions,
}

impl Printer {
    pub fn new(options: PrinterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Render a whole module. Every top-level statement is followed by a newline.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = module.body.len()))]
    pub fn print_module(&self, module: &Module) -> Result<String, EmitError> {
        let mut writer = SourceWriter::new();
        for stmt in &module.body {
            if let Some(text) = self.render_statement(stmt)? {
                writer.write(&text);
                writer.write_line();
            }
        }
        debug!(lines = writer.line_count(), bytes = writer.len(), "rendered module");
        Ok(writer.finish())
    }
}

/// Symbol for a binary or augmented-assignment operator.
pub fn get_operator_text(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Sub => "-",
        Operator::Mult => "*",
        Operator::Div => "/",
        Operator::Pow => "**",
        Operator::Mod => "%",
        Operator::LShift => "<<",
        Operator::RShift => ">>",
        Operator::BitOr => "|",
        Operator::BitXor => "^",
        Operator::BitAnd => "&",
        Operator::FloorDiv => "//",
    }
}

/// Symbol for a comparison operator.
pub fn get_comparison_text(op: CmpOperator) -> &'static str {
    match op {
        CmpOperator::Eq => "==",
        CmpOperator::NotEq => "!=",
        CmpOperator::Lt => "<",
        CmpOperator::LtE => "<=",
        CmpOperator::Gt => ">",
        CmpOperator::GtE => ">=",
        CmpOperator::Is => "is",
        CmpOperator::IsNot => "is not",
        CmpOperator::In => "in",
        CmpOperator::NotIn => "not in",
    }
}

#[cfg(test)]
#[path = "tests/operators.rs"]
mod operators_tests;
