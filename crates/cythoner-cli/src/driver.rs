//! Generation driver: input selection, rendering and the output write.
//!
//! Rendering and writing are separate phases. The module is rendered in
//! full before anything touches the disk, and the write goes through a
//! temporary file that is renamed over the destination, so a failed run
//! never leaves a partial `generated.pyx` behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use cythoner_emitter::{EmitError, Printer};
use cythoner_syntax::{Module, SyntaxError, parse_json, parse_source};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ResolvedOptions;

pub const DEFAULT_OUTPUT: &str = "generated.pyx";

/// Where the Python program comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateInput {
    /// A Python source file.
    File(PathBuf),
    /// Python source text.
    Code(String),
    /// A JSON syntax tree written by an external parser.
    Ast(PathBuf),
}

impl GenerateInput {
    /// Pick the input from the optional sources; a file wins over inline
    /// code, inline code over a JSON tree.
    pub fn select(
        file: Option<PathBuf>,
        code: Option<String>,
        ast: Option<PathBuf>,
    ) -> Result<Self, GenerateError> {
        match (file, code, ast) {
            (Some(file), _, _) => Ok(GenerateInput::File(file)),
            (None, Some(code), _) => Ok(GenerateInput::Code(code)),
            (None, None, Some(ast)) => Ok(GenerateInput::Ast(ast)),
            (None, None, None) => Err(GenerateError::MissingInput),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("filename or code must be specified")]
    MissingInput,

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn read(path: &Path) -> Result<String, GenerateError> {
    std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Obtain the syntax tree for `input` from the external parser.
pub fn load_tree(input: &GenerateInput, options: &ResolvedOptions) -> Result<Module, GenerateError> {
    let module = match input {
        GenerateInput::File(path) => parse_source(&read(path)?, &options.parse)?,
        GenerateInput::Code(code) => parse_source(code, &options.parse)?,
        GenerateInput::Ast(path) => parse_json(&read(path)?)?,
    };
    debug!(statements = module.body.len(), "loaded syntax tree");
    Ok(module)
}

/// Render `input` to Cython source without writing anything.
pub fn render(input: &GenerateInput, options: &ResolvedOptions) -> Result<String, GenerateError> {
    let module = load_tree(input, options)?;
    let printer = Printer::new(options.printer);
    Ok(printer.print_module(&module)?)
}

/// Render `input` and write it to the configured output path.
pub fn generate(input: &GenerateInput, options: &ResolvedOptions) -> Result<PathBuf, GenerateError> {
    let text = render(input, options)?;
    write_atomic(&options.output, &text)?;
    info!(path = %options.output.display(), bytes = text.len(), "wrote generated module");
    Ok(options.output.clone())
}

/// Replace `path` with `text` in one rename.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), GenerateError> {
    let write_error = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;
    file.persist(path).map_err(|err| write_error(err.error))?;
    Ok(())
}
