use clap::Parser;
use create_effect_agent::cli::{Args, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("create-effect-agent")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let parsed = Args::try_parse_from(make_args(&["generate", "./demo"])).unwrap();
    let Command::Generate(generate) = parsed.command;

    assert_eq!(generate.path, PathBuf::from("./demo"));
    assert_eq!(generate.name, None);
    assert!(!generate.yes);
    assert!(!generate.no_git);
    assert_eq!(generate.template, None);
    assert_eq!(generate.answers, None);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "generate",
        "/tmp/demo",
        "--name",
        "demo-lib",
        "--yes",
        "--no-git",
        "--template",
        "supermemory",
        "--answers",
        "answers.yml",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();
    let Command::Generate(generate) = parsed.command;

    assert_eq!(generate.name.as_deref(), Some("demo-lib"));
    assert!(generate.yes);
    assert!(generate.no_git);
    assert_eq!(generate.template.as_deref(), Some("supermemory"));
    assert_eq!(generate.answers, Some(PathBuf::from("answers.yml")));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "generate", "-y", "-n", "x", "./demo"]);
    let parsed = Args::try_parse_from(args).unwrap();
    let Command::Generate(generate) = parsed.command;

    assert!(parsed.verbose);
    assert!(generate.yes);
    assert_eq!(generate.name.as_deref(), Some("x"));
}

#[test]
fn test_to_config() {
    let args = make_args(&["generate", "demo", "--yes", "--no-git"]);
    let Command::Generate(generate) = Args::try_parse_from(args).unwrap().command;
    let config = generate.to_config();

    assert_eq!(config.path, PathBuf::from("demo"));
    assert!(config.non_interactive);
    assert!(config.skip_git);
    assert_eq!(config.name, None);
}

#[test]
fn test_missing_args() {
    assert!(Args::try_parse_from(make_args(&["generate"])).is_err());
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_unknown_flag() {
    let args = make_args(&["generate", "demo", "--force"]);
    assert!(Args::try_parse_from(args).is_err());
}
