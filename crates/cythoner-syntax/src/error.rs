use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The JSON tree was malformed, or named an operator outside the table.
    #[error("invalid syntax tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("python interpreter `{}` not found", .0.display())]
    InterpreterNotFound(PathBuf),

    #[error("failed to run python interpreter `{}`: {source}", .interpreter.display())]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("python could not parse the source:\n{stderr}")]
    Parse { stderr: String },
}

/// A recognized decorator marker used with the wrong number of arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`@{marker}` on `{function}` takes {expected} argument(s), found {found}")]
pub struct MarkerError {
    pub function: String,
    pub marker: &'static str,
    pub expected: usize,
    pub found: usize,
}
