use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use cythoner_emitter::PrinterOptions;
use cythoner_syntax::ParseOptions;

use crate::args::CliArgs;
use crate::build::{BuildOptions, LanguageLevel};
use crate::driver::DEFAULT_OUTPUT;

pub const CONFIG_FILE_NAME: &str = "cythoner.json";

/// Accepts `true`, `"true"`, `"yes"`, `"1"` and friends for boolean options.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

/// Accepts `3` as well as `"3"` for the language level.
fn deserialize_language_level<'de, D>(deserializer: D) -> Result<Option<LanguageLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrLevel {
        Number(u8),
        Level(LanguageLevel),
    }

    match Option::<NumberOrLevel>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrLevel::Level(level)) => Ok(Some(level)),
        Some(NumberOrLevel::Number(2)) => Ok(Some(LanguageLevel::Two)),
        Some(NumberOrLevel::Number(3)) => Ok(Some(LanguageLevel::Three)),
        Some(NumberOrLevel::Number(n)) => Err(Error::custom(format!(
            "invalid language level: {n}. Expected 2, 3, or '3str'"
        ))),
    }
}

/// Contents of `cythoner.json`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CythonerConfig {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub skip_unsupported: Option<bool>,
    #[serde(default)]
    pub python: Option<String>,
    #[serde(default)]
    pub cythonize: Option<String>,
    #[serde(default, deserialize_with = "deserialize_language_level")]
    pub language_level: Option<LanguageLevel>,
}

/// A config file together with the directory its relative paths resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: CythonerConfig,
}

impl LoadedConfig {
    fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Settings after merging defaults, the config file and CLI flags, in that
/// order of increasing precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub output: PathBuf,
    pub printer: PrinterOptions,
    pub parse: ParseOptions,
    pub build: BuildOptions,
}

impl ResolvedOptions {
    /// Defaults with the output placed in `cwd`.
    pub fn defaults(cwd: &Path) -> Self {
        Self {
            output: cwd.join(DEFAULT_OUTPUT),
            printer: PrinterOptions::default(),
            parse: ParseOptions::default(),
            build: BuildOptions::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<LoadedConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: CythonerConfig = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(LoadedConfig {
        path: path.to_path_buf(),
        config,
    })
}

/// Locate the config file: `--project` (a file, or a directory holding
/// `cythoner.json`), otherwise `cythoner.json` in `cwd` when present.
pub fn find_config(project: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(project) = project else {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        return Ok(candidate.is_file().then_some(candidate));
    };

    let project = if project.is_absolute() {
        project.to_path_buf()
    } else {
        cwd.join(project)
    };
    if project.is_dir() {
        let candidate = project.join(CONFIG_FILE_NAME);
        if !candidate.is_file() {
            bail!("no {} found in {}", CONFIG_FILE_NAME, project.display());
        }
        return Ok(Some(candidate));
    }
    if !project.is_file() {
        bail!("config file not found: {}", project.display());
    }
    Ok(Some(project))
}

pub fn resolve_options(args: &CliArgs, config: Option<&LoadedConfig>, cwd: &Path) -> ResolvedOptions {
    let mut resolved = ResolvedOptions::defaults(cwd);

    if let Some(loaded) = config {
        let file = &loaded.config;
        if let Some(output) = &file.output {
            resolved.output = loaded.base_dir().join(output);
        }
        if let Some(skip) = file.skip_unsupported {
            resolved.printer.skip_unsupported = skip;
        }
        if let Some(python) = &file.python {
            resolved.parse.python = PathBuf::from(python);
        }
        if let Some(cythonize) = &file.cythonize {
            resolved.build.cythonize = PathBuf::from(cythonize);
        }
        if let Some(level) = file.language_level {
            resolved.build.language_level = level;
        }
    }

    if let Some(out) = &args.out {
        resolved.output = cwd.join(out);
    }
    if args.skip_unsupported {
        resolved.printer.skip_unsupported = true;
    }
    if let Some(python) = &args.python {
        resolved.parse.python = python.clone();
    }
    if let Some(cythonize) = &args.cythonize {
        resolved.build.cythonize = cythonize.clone();
    }
    if let Some(level) = args.language_level {
        resolved.build.language_level = level;
    }

    resolved
}
