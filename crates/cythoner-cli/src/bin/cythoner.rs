#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use cythoner_cli::args::CliArgs;
use cythoner_cli::build::build_module;
use cythoner_cli::config::{find_config, load_config, resolve_options};
use cythoner_cli::driver::{self, GenerateInput};

fn main() -> ExitCode {
    // Initialize tracing if CYTHONER_LOG or RUST_LOG is set (zero cost otherwise).
    cythoner_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let config = match find_config(args.project.as_deref(), &cwd)? {
        Some(path) => Some(load_config(&path)?),
        None => None,
    };
    let options = resolve_options(args, config.as_ref(), &cwd);

    if let Some(pyx) = &args.build_only {
        build_module(pyx, &options.build)
            .with_context(|| format!("failed to build {}", pyx.display()))?;
        eprintln!("{} {}", "Built".green().bold(), pyx.display());
        return Ok(());
    }

    let input = GenerateInput::select(args.file.clone(), args.code.clone(), args.ast.clone())?;

    if args.stdout {
        let text = driver::render(&input, &options)?;
        print!("{text}");
        return Ok(());
    }

    let path = driver::generate(&input, &options)?;
    eprintln!("{} {}", "Generated".green().bold(), path.display());

    if args.build {
        build_module(&path, &options.build)
            .with_context(|| format!("failed to build {}", path.display()))?;
        eprintln!("{} {}", "Built".green().bold(), path.display());
    }
    Ok(())
}
