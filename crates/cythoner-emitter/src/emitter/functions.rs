use cythoner_syntax::{Arg, Expr, FunctionDef, Keyword, Marker, Stmt};
use tracing::debug;

use super::helpers::{comma_join, space};
use super::{ArgumentList, Printer};
use crate::error::EmitError;

impl Printer {
    // =========================================================================
    // Function definitions
    // =========================================================================

    /// `cdef <ret> name(<params>) <options>:` when the function declares a
    /// return type, `def name(<params>) <options>:` otherwise.
    ///
    /// The options segment is always preceded by a space, even when empty.
    pub(super) fn render_function(
        &self,
        stmt: &Stmt,
        def: &FunctionDef,
    ) -> Result<String, EmitError> {
        let indent = space(stmt.col_offset);
        let options = self.function_options(def)?;
        let params = self.render_arguments(ArgumentList::Parameters(&def.args))?;

        let header = match &def.returns {
            Some(returns) => format!("cdef {} {}({params})", self.render_atom(returns)?, def.name),
            None => format!("def {}({params})", def.name),
        };
        debug!(
            name = %def.name,
            typed = def.returns.is_some(),
            options = %options,
            "render function"
        );

        Ok(format!(
            "{indent}{header} {options}:\n{}\n",
            self.render_body(&def.body)?
        ))
    }

    /// Header options from the function's markers, space-joined in
    /// declaration order.
    fn function_options(&self, def: &FunctionDef) -> Result<String, EmitError> {
        let mut options = Vec::new();
        for marker in def.markers()? {
            match marker {
                Marker::NoGil => options.push("nogil".to_string()),
                Marker::ExceptError(kind) => {
                    options.push(format!("except {}", self.render_atom(kind)?));
                }
            }
        }
        Ok(options.join(" "))
    }

    // =========================================================================
    // Argument lists
    // =========================================================================

    /// Parameters render as `<type> <name>` (or bare `<name>`), with
    /// `=<default>` appended when one applies, in Python's order:
    /// positional-only, `/`, positional, `*args` (or a bare `*` before
    /// keyword-only parameters), keyword-only, `**kwargs`. Call arguments
    /// render as atoms followed by `name=value` keywords.
    pub fn render_arguments(&self, list: ArgumentList<'_>) -> Result<String, EmitError> {
        match list {
            ArgumentList::Parameters(arguments) => {
                let mut params = Vec::new();
                for (i, (arg, default)) in arguments.positional().enumerate() {
                    params.push(self.render_parameter(arg, default)?);
                    if i + 1 == arguments.posonlyargs.len() {
                        params.push("/".to_string());
                    }
                }
                match &arguments.vararg {
                    Some(vararg) => params.push(format!("*{}", variadic_name(vararg)?)),
                    None if !arguments.kwonlyargs.is_empty() => params.push("*".to_string()),
                    None => {}
                }
                for (arg, default) in arguments.keyword_only() {
                    params.push(self.render_parameter(arg, default)?);
                }
                if let Some(kwarg) = &arguments.kwarg {
                    params.push(format!("**{}", variadic_name(kwarg)?));
                }
                Ok(params.join(", "))
            }
            ArgumentList::Call { args, keywords } => {
                let positional = args.iter().map(|arg| self.render_atom(arg));
                let named = keywords.iter().map(|keyword| self.render_keyword(keyword));
                comma_join(positional.chain(named), |rendered| rendered)
            }
        }
    }

    fn render_parameter(&self, arg: &Arg, default: Option<&Expr>) -> Result<String, EmitError> {
        let mut param = match &arg.annotation {
            Some(annotation) => format!("{} {}", self.render_atom(annotation)?, arg.arg),
            None => arg.arg.clone(),
        };
        if let Some(default) = default {
            param.push('=');
            param.push_str(&self.render_atom(default)?);
        }
        Ok(param)
    }

    fn render_keyword(&self, keyword: &Keyword) -> Result<String, EmitError> {
        let value = self.render_atom(&keyword.value)?;
        Ok(match &keyword.arg {
            Some(name) => format!("{name}={value}"),
            None => format!("**{value}"),
        })
    }
}

/// `*args` and `**kwargs` have no typed Cython form.
fn variadic_name(arg: &Arg) -> Result<&str, EmitError> {
    match arg.annotation {
        Some(_) => Err(EmitError::UnsupportedExpression {
            context: "annotated variadic parameter",
        }),
        None => Ok(&arg.arg),
    }
}
