use crate::args::CliArgs;
use crate::build::LanguageLevel;
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse_from(std::iter::once("cythoner").chain(args.iter().copied()))
}

#[test]
fn test_file_argument() {
    let args = parse(&["script.py"]).expect("parses");
    assert_eq!(args.file, Some(PathBuf::from("script.py")));
    assert!(args.code.is_none());
    assert!(!args.stdout);
    assert!(!args.skip_unsupported);
}

#[test]
fn test_inline_code() {
    let args = parse(&["-c", "x = 1"]).expect("parses");
    assert_eq!(args.code.as_deref(), Some("x = 1"));
}

#[test]
fn test_file_conflicts_with_code() {
    assert!(parse(&["script.py", "-c", "x = 1"]).is_err());
}

#[test]
fn test_code_conflicts_with_ast() {
    assert!(parse(&["--code", "x = 1", "--ast", "tree.json"]).is_err());
}

#[test]
fn test_stdout_conflicts_with_out_and_build() {
    assert!(parse(&["a.py", "--stdout", "-o", "b.pyx"]).is_err());
    assert!(parse(&["a.py", "--stdout", "--build"]).is_err());
}

#[test]
fn test_build_only_conflicts_with_inputs() {
    assert!(parse(&["--build-only", "m.pyx", "a.py"]).is_err());
    assert!(parse(&["--build-only", "m.pyx", "--build"]).is_err());

    let args = parse(&["--build-only", "m.pyx"]).expect("parses");
    assert_eq!(args.build_only, Some(PathBuf::from("m.pyx")));
}

#[test]
fn test_language_level_values() {
    let args = parse(&["a.py", "--language-level", "2"]).expect("parses");
    assert_eq!(args.language_level, Some(LanguageLevel::Two));
    let args = parse(&["a.py", "--language-level", "3str"]).expect("parses");
    assert_eq!(args.language_level, Some(LanguageLevel::ThreeStr));
    assert!(parse(&["a.py", "--language-level", "4"]).is_err());
}

#[test]
fn test_tool_overrides() {
    let args = parse(&[
        "a.py",
        "--python",
        "/opt/py/bin/python3",
        "--cythonize",
        "/opt/py/bin/cythonize",
        "-p",
        "proj",
        "--skip-unsupported",
    ])
    .expect("parses");
    assert_eq!(args.python, Some(PathBuf::from("/opt/py/bin/python3")));
    assert_eq!(args.cythonize, Some(PathBuf::from("/opt/py/bin/cythonize")));
    assert_eq!(args.project, Some(PathBuf::from("proj")));
    assert!(args.skip_unsupported);
}
