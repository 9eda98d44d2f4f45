use cythoner_syntax::MarkerError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// Statement kind outside the supported subset (classes, `while`, `try`, ...).
    #[error("{line}:{column}: statement kind is not supported")]
    UnsupportedStatement { line: u32, column: u32 },

    /// `raise` of anything other than a bare name or a call of a name.
    #[error("{line}:{column}: only `raise Name` and `raise Name(args)` are supported")]
    UnsupportedRaise { line: u32, column: u32 },

    #[error("unsupported expression in {context}")]
    UnsupportedExpression { context: &'static str },

    #[error(transparent)]
    MalformedMarker(#[from] MarkerError),

    /// An error raised while rendering the statement at `line`.
    #[error("{line}:{column}: {source}")]
    InStatement {
        line: u32,
        column: u32,
        #[source]
        source: Box<EmitError>,
    },
}

impl EmitError {
    /// Whether this error comes from input outside the supported grammar,
    /// as opposed to a malformed marker.
    pub fn is_unsupported(&self) -> bool {
        match self {
            EmitError::UnsupportedStatement { .. }
            | EmitError::UnsupportedRaise { .. }
            | EmitError::UnsupportedExpression { .. } => true,
            EmitError::MalformedMarker(_) => false,
            EmitError::InStatement { source, .. } => source.is_unsupported(),
        }
    }

    /// Attach a statement position unless the error already carries one.
    pub(crate) fn in_statement(self, line: u32, column: u32) -> Self {
        match self {
            EmitError::UnsupportedStatement { .. }
            | EmitError::UnsupportedRaise { .. }
            | EmitError::InStatement { .. } => self,
            other => EmitError::InStatement {
                line,
                column,
                source: Box::new(other),
            },
        }
    }
}
