use std::path::PathBuf;

use crate::cli::{GenerateArgs, build_cli};

fn parse(argv: &[&str]) -> GenerateArgs {
    let matches = build_cli()
        .try_get_matches_from(argv)
        .expect("arguments should parse");
    GenerateArgs::from_matches(&matches)
}

#[test]
fn splits_comma_separated_type_names() {
    let args = parse(&["renum", "--type", "Status,Code"]);
    assert_eq!(args.types, ["Status", "Code"]);
    assert_eq!(args.output, None);
    assert_eq!(args.path, PathBuf::from("."));
}

#[test]
fn trims_and_drops_empty_names() {
    let args = parse(&["renum", "--type", " Status , ,Code "]);
    assert_eq!(args.types, ["Status", "Code"]);
}

#[test]
fn accepts_output_and_positional_path() {
    let args = parse(&[
        "renum",
        "-t",
        "Status",
        "-o",
        "status_enum.go",
        "./internal/status",
    ]);
    assert_eq!(args.output, Some(PathBuf::from("status_enum.go")));
    assert_eq!(args.path, PathBuf::from("./internal/status"));
}

#[test]
fn type_flag_is_required() {
    assert!(build_cli().try_get_matches_from(["renum", "."]).is_err());
}
