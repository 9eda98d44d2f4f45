use cythoner_syntax::{Expr, Keyword, Operator};

use super::helpers::comma_join;
use super::literals::literal_text;
use super::{ArgumentList, Printer, get_comparison_text, get_operator_text};
use crate::error::EmitError;

/// Binding strength of an operator expression; `None` for everything that
/// never needs parentheses as an operand.
fn precedence(expr: &Expr) -> Option<u8> {
    match expr {
        Expr::Compare { .. } => Some(0),
        Expr::BinOp { op, .. } => Some(match op {
            Operator::BitOr => 1,
            Operator::BitXor => 2,
            Operator::BitAnd => 3,
            Operator::LShift | Operator::RShift => 4,
            Operator::Add | Operator::Sub => 5,
            Operator::Mult | Operator::Div | Operator::FloorDiv | Operator::Mod => 6,
            Operator::Pow => 7,
        }),
        _ => None,
    }
}

impl Printer {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn render_expression(&self, expr: &Expr) -> Result<String, EmitError> {
        match expr {
            Expr::Name { id } => Ok(id.clone()),
            Expr::Constant { value } => Ok(literal_text(value)),
            Expr::Call {
                func,
                args,
                keywords,
            } => self.render_call(func, args, keywords),
            Expr::Attribute { value, attr } => Ok(format!("{}.{attr}", self.render_atom(value)?)),
            Expr::BinOp { left, op, right } => {
                let parent = precedence(expr);
                // `**` groups right to left, every other operator left to right.
                let right_assoc = *op == Operator::Pow;
                Ok(format!(
                    "{} {} {}",
                    self.render_operand(left, parent, right_assoc)?,
                    get_operator_text(*op),
                    self.render_operand(right, parent, !right_assoc)?
                ))
            }
            Expr::Compare {
                left,
                ops,
                comparators,
            } => {
                if ops.is_empty() || ops.len() != comparators.len() {
                    return Err(EmitError::UnsupportedExpression {
                        context: "comparison",
                    });
                }
                let mut text = self.render_operand(left, Some(0), true)?;
                for (op, comparator) in ops.iter().zip(comparators) {
                    text.push(' ');
                    text.push_str(get_comparison_text(*op));
                    text.push(' ');
                    text.push_str(&self.render_operand(comparator, Some(0), true)?);
                }
                Ok(text)
            }
            Expr::List { elts } => Ok(format!(
                "[{}]",
                comma_join(elts, |elt| self.render_expression(elt))?
            )),
            Expr::Unsupported => Err(EmitError::UnsupportedExpression {
                context: "expression",
            }),
        }
    }

    /// Names and constants render directly; anything else goes through
    /// [`Printer::render_expression`].
    pub fn render_atom(&self, expr: &Expr) -> Result<String, EmitError> {
        match expr {
            Expr::Name { id } => Ok(id.clone()),
            Expr::Constant { value } => Ok(literal_text(value)),
            _ => self.render_expression(expr),
        }
    }

    /// `func(args)` or `object.method(args)`.
    fn render_call(
        &self,
        func: &Expr,
        args: &[Expr],
        keywords: &[Keyword],
    ) -> Result<String, EmitError> {
        let arguments = self.render_arguments(ArgumentList::Call { args, keywords })?;
        match func {
            Expr::Attribute { value, attr } => {
                Ok(format!("{}.{attr}({arguments})", self.render_atom(value)?))
            }
            _ => Ok(format!("{}({arguments})", self.render_atom(func)?)),
        }
    }

    /// Render an operand of an operator expression, parenthesized when it
    /// binds looser than its parent. `strict` also parenthesizes an operand
    /// of equal strength (the side that does not associate).
    fn render_operand(
        &self,
        operand: &Expr,
        parent: Option<u8>,
        strict: bool,
    ) -> Result<String, EmitError> {
        let text = self.render_atom(operand)?;
        let needs_parens = match (precedence(operand), parent) {
            (Some(child), Some(parent)) => child < parent || (strict && child == parent),
            _ => false,
        };
        Ok(if needs_parens { format!("({text})") } else { text })
    }
}
