//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the export pipeline.

use clap::Parser;
use std::path::PathBuf;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "simlis")]
struct Args {
    #[arg(default_value = ".")]
    path: PathBuf,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[test]
fn test_parse_no_args_defaults_to_current_dir() {
    let args = Args::try_parse_from(["simlis"]).unwrap();
    assert_eq!(args.path, PathBuf::from("."));
    assert!(args.output.is_none());
}

#[test]
fn test_parse_pack_path() {
    let args = Args::try_parse_from(["simlis", "packs/My Pack"]).unwrap();
    assert_eq!(args.path, PathBuf::from("packs/My Pack"));
}

#[test]
fn test_parse_output_short_flag() {
    let args = Args::try_parse_from(["simlis", "pack", "-o", "out.csv"]).unwrap();
    assert_eq!(args.output, Some(PathBuf::from("out.csv")));
}

#[test]
fn test_parse_output_long_flag() {
    let args = Args::try_parse_from(["simlis", "pack", "--output", "out.csv"]).unwrap();
    assert_eq!(args.output, Some(PathBuf::from("out.csv")));
}

#[test]
fn test_parse_rejects_extra_positionals() {
    assert!(Args::try_parse_from(["simlis", "a", "b"]).is_err());
}
