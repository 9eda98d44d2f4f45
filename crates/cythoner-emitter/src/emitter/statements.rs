use cythoner_syntax::{Alias, Expr, Stmt, StmtKind};
use tracing::{trace, warn};

use super::helpers::space;
use super::{ArgumentList, Printer, get_operator_text};
use crate::error::EmitError;

impl Printer {
    // =========================================================================
    // Statements
    // =========================================================================

    /// Render one statement, indented by its recorded column offset.
    ///
    /// Returns `Ok(None)` only when the statement is outside the supported
    /// subset and `skip_unsupported` is set; otherwise unsupported input is
    /// an error.
    pub fn render_statement(&self, stmt: &Stmt) -> Result<Option<String>, EmitError> {
        trace!(kind = stmt.kind.name(), line = stmt.lineno, "render statement");
        match self.render_statement_kind(stmt) {
            Ok(text) => Ok(Some(text)),
            Err(err) if self.options.skip_unsupported && err.is_unsupported() => {
                warn!(line = stmt.lineno, column = stmt.col_offset, %err, "skipping statement");
                Ok(None)
            }
            Err(err) => Err(err.in_statement(stmt.lineno, stmt.col_offset)),
        }
    }

    /// Render a block, in order, one statement per line. Skipped statements
    /// leave no line behind.
    pub fn render_body(&self, body: &[Stmt]) -> Result<String, EmitError> {
        let mut lines = Vec::with_capacity(body.len());
        for stmt in body {
            if let Some(text) = self.render_statement(stmt)? {
                lines.push(text);
            }
        }
        Ok(lines.join("\n"))
    }

    fn render_statement_kind(&self, stmt: &Stmt) -> Result<String, EmitError> {
        let indent = space(stmt.col_offset);
        let text = match &stmt.kind {
            StmtKind::Pass => format!("{indent}..."),
            StmtKind::Expr { value } => format!("{indent}{}", self.render_expression(value)?),
            StmtKind::AnnAssign {
                target,
                annotation,
                value,
            } => {
                let target = self.render_atom(target)?;
                let annotation = self.render_atom(annotation)?;
                match value {
                    Some(value) => format!(
                        "{indent}{target}: {annotation} = {}",
                        self.render_expression(value)?
                    ),
                    None => format!("{indent}{target}: {annotation}"),
                }
            }
            StmtKind::Assign { targets, value } => {
                // Only the first of `a = b = value` is kept.
                let Some(target) = targets.first() else {
                    return Err(EmitError::UnsupportedExpression {
                        context: "assignment target",
                    });
                };
                format!(
                    "{indent}{} = {}",
                    self.render_atom(target)?,
                    self.render_expression(value)?
                )
            }
            StmtKind::AugAssign { target, op, value } => format!(
                "{indent}{} {}= {}",
                self.render_atom(target)?,
                get_operator_text(*op),
                self.render_expression(value)?
            ),
            StmtKind::Return { value } => match value {
                Some(value) => format!("{indent}return {}", self.render_expression(value)?),
                None => format!("{indent}return"),
            },
            StmtKind::For { target, iter, body } => format!(
                "{indent}for {} in {}:\n{}\n",
                self.render_atom(target)?,
                self.render_expression(iter)?,
                self.render_body(body)?
            ),
            StmtKind::If { test, body } => format!(
                "{indent}if {}:\n{}\n",
                self.render_expression(test)?,
                self.render_body(body)?
            ),
            StmtKind::Import { names } => format!("{indent}import {}", render_aliases(names)),
            StmtKind::ImportFrom {
                module,
                names,
                level,
            } => {
                let dots = ".".repeat(level.unwrap_or(0) as usize);
                match module {
                    Some(module) => {
                        format!("{indent}from {dots}{module} import {}", render_aliases(names))
                    }
                    None => format!("{indent}from {dots} import {}", render_aliases(names)),
                }
            }
            StmtKind::Raise { exc, cause: None } => return self.render_raise(stmt, exc.as_ref()),
            StmtKind::Raise { cause: Some(_), .. } => {
                return Err(EmitError::UnsupportedRaise {
                    line: stmt.lineno,
                    column: stmt.col_offset,
                });
            }
            StmtKind::FunctionDef(def) => return self.render_function(stmt, def),
            StmtKind::Unsupported => {
                return Err(EmitError::UnsupportedStatement {
                    line: stmt.lineno,
                    column: stmt.col_offset,
                });
            }
        };
        Ok(text)
    }

    fn render_raise(&self, stmt: &Stmt, exc: Option<&Expr>) -> Result<String, EmitError> {
        let indent = space(stmt.col_offset);
        match exc {
            Some(Expr::Name { id }) => Ok(format!("{indent}raise {id}")),
            Some(Expr::Call {
                func,
                args,
                keywords,
            }) if keywords.is_empty() => {
                if let Some(name) = func.as_name() {
                    let args = self.render_arguments(ArgumentList::Call { args, keywords })?;
                    return Ok(format!("{indent}raise {name}({args})"));
                }
                Err(EmitError::UnsupportedRaise {
                    line: stmt.lineno,
                    column: stmt.col_offset,
                })
            }
            _ => Err(EmitError::UnsupportedRaise {
                line: stmt.lineno,
                column: stmt.col_offset,
            }),
        }
    }
}

fn render_aliases(names: &[Alias]) -> String {
    names
        .iter()
        .map(|alias| match &alias.asname {
            Some(asname) => format!("{} as {asname}", alias.name),
            None => alias.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
