use clap::Parser;
use std::path::PathBuf;

use crate::build::LanguageLevel;

/// CLI arguments for the cythoner binary.
#[derive(Parser, Debug)]
#[command(
    name = "cythoner",
    version,
    about = "Generate Cython (.pyx) source from Python"
)]
pub struct CliArgs {
    // ==================== Input ====================
    /// Python source file to convert.
    #[arg(conflicts_with_all = ["code", "ast"])]
    pub file: Option<PathBuf>,

    /// Python source given inline instead of a file.
    #[arg(short = 'c', long, conflicts_with = "ast")]
    pub code: Option<String>,

    /// JSON syntax tree produced by an external parser.
    #[arg(long, value_name = "JSON")]
    pub ast: Option<PathBuf>,

    // ==================== Output ====================
    /// Where to write the generated module (default: generated.pyx).
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Print the generated module instead of writing it.
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    /// Drop unsupported statements instead of failing.
    #[arg(long = "skip-unsupported")]
    pub skip_unsupported: bool,

    // ==================== Build ====================
    /// Compile the generated module in place with cythonize.
    #[arg(long, conflicts_with = "stdout")]
    pub build: bool,

    /// Compile an existing .pyx file without generating anything.
    #[arg(
        long = "build-only",
        value_name = "PYX",
        conflicts_with_all = ["file", "code", "ast", "build", "stdout"]
    )]
    pub build_only: Option<PathBuf>,

    /// Cython language level passed to cythonize.
    #[arg(long = "language-level", value_enum)]
    pub language_level: Option<LanguageLevel>,

    // ==================== Tools ====================
    /// Python interpreter used to parse source.
    #[arg(long, value_name = "EXE")]
    pub python: Option<PathBuf>,

    /// cythonize executable used by --build.
    #[arg(long, value_name = "EXE")]
    pub cythonize: Option<PathBuf>,

    /// Path to cythoner.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,
}
