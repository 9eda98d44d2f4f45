//! Build step: compile a generated `.pyx` into an extension module.
//!
//! Equivalent to `setup(ext_modules=cythonize(..))` with `build_ext
//! --inplace`, done through the `cythonize` command-line tool.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum LanguageLevel {
    #[value(name = "2")]
    #[serde(rename = "2")]
    Two,
    #[default]
    #[value(name = "3")]
    #[serde(rename = "3")]
    Three,
    #[value(name = "3str")]
    #[serde(rename = "3str")]
    ThreeStr,
}

impl LanguageLevel {
    fn flag(self) -> &'static str {
        match self {
            LanguageLevel::Two => "-2",
            LanguageLevel::Three => "-3",
            LanguageLevel::ThreeStr => "--3str",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub cythonize: PathBuf,
    pub language_level: LanguageLevel,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            cythonize: PathBuf::from("cythonize"),
            language_level: LanguageLevel::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Cython not installed: `{}` was not found", .0.display())]
    ToolchainNotFound(PathBuf),

    #[error("no such file: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("failed to run `{}`: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cythonize exited with {status}")]
    Failed { status: ExitStatus },
}

/// Arguments passed to `cythonize` for `pyx`.
pub fn cythonize_args(pyx: &Path, options: &BuildOptions) -> Vec<String> {
    vec![
        "-i".to_string(),
        options.language_level.flag().to_string(),
        pyx.display().to_string(),
    ]
}

/// Compile `pyx` in place.
pub fn build_module(pyx: &Path, options: &BuildOptions) -> Result<(), BuildError> {
    if !pyx.is_file() {
        return Err(BuildError::MissingSource(pyx.to_path_buf()));
    }

    let args = cythonize_args(pyx, options);
    info!(program = %options.cythonize.display(), ?args, "building extension module");

    let status = Command::new(&options.cythonize)
        .args(&args)
        .status()
        .map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                BuildError::ToolchainNotFound(options.cythonize.clone())
            } else {
                BuildError::Spawn {
                    program: options.cythonize.clone(),
                    source,
                }
            }
        })?;

    if !status.success() {
        return Err(BuildError::Failed { status });
    }
    Ok(())
}
