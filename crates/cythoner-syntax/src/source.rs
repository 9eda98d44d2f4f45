//! Bridge to the external parser.
//!
//! The generator never parses Python itself. Source text is handed to a
//! Python interpreter running [`AST_DUMPER`], which prints the `ast` tree
//! as JSON on stdout; [`parse_json`] turns that JSON into a [`Module`].

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::ast::Module;
use crate::error::SyntaxError;

/// Python program that reads source on stdin and writes its syntax tree as
/// JSON on stdout. Constants are wrapped as `{"kind": ..., "value": ...}`
/// with non-string payloads rendered through `str()`.
pub const AST_DUMPER: &str = r#"
import ast, json, sys

def literal(v):
    if isinstance(v, bool):
        return {"kind": "bool", "value": v}
    if v is None:
        return {"kind": "none", "value": None}
    if v is Ellipsis:
        return {"kind": "ellipsis", "value": None}
    if isinstance(v, str):
        return {"kind": "str", "value": v}
    if isinstance(v, bytes):
        return {"kind": "bytes", "value": str(v)}
    if isinstance(v, int):
        return {"kind": "int", "value": str(v)}
    if isinstance(v, float):
        return {"kind": "float", "value": str(v)}
    if isinstance(v, complex):
        return {"kind": "complex", "value": str(v)}
    return {"kind": "str", "value": str(v)}

def convert(node):
    if isinstance(node, ast.AST):
        out = {"_type": type(node).__name__}
        for name, value in ast.iter_fields(node):
            if isinstance(node, ast.Constant) and name == "value":
                out[name] = literal(value)
            elif isinstance(node, ast.Constant) and name == "kind":
                continue
            else:
                out[name] = convert(value)
        for attr in ("lineno", "col_offset"):
            if hasattr(node, attr):
                out[attr] = getattr(node, attr)
        return out
    if isinstance(node, list):
        return [convert(v) for v in node]
    return node

json.dump(convert(ast.parse(sys.stdin.read())), sys.stdout)
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Interpreter used to run the dumper.
    pub python: PathBuf,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            python: PathBuf::from("python3"),
        }
    }
}

/// Deserialize a JSON syntax tree.
pub fn parse_json(json: &str) -> Result<Module, SyntaxError> {
    let module: Module = serde_json::from_str(json)?;
    trace!(statements = module.body.len(), "deserialized syntax tree");
    Ok(module)
}

/// Parse Python source by running it through the external interpreter.
pub fn parse_source(code: &str, options: &ParseOptions) -> Result<Module, SyntaxError> {
    debug!(python = %options.python.display(), bytes = code.len(), "parsing source");

    let spawn_error = |source: std::io::Error| {
        if source.kind() == ErrorKind::NotFound {
            SyntaxError::InterpreterNotFound(options.python.clone())
        } else {
            SyntaxError::Spawn {
                interpreter: options.python.clone(),
                source,
            }
        }
    };

    let mut child = Command::new(&options.python)
        .arg("-c")
        .arg(AST_DUMPER)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(code.as_bytes()).map_err(spawn_error)?;
    }

    let output = child.wait_with_output().map_err(spawn_error)?;
    if !output.status.success() {
        return Err(SyntaxError::Parse {
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    let module: Module = serde_json::from_slice(&output.stdout)?;
    debug!(statements = module.body.len(), "parsed source");
    Ok(module)
}
