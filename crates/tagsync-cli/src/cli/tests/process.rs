//! Tests for the process subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand, OutputFormat};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_process_defaults() {
    match parse(&["tagsync", "process", "--ads", "ads.xlsx", "--tags", "tags.csv"]) {
        CliCommand::Process {
            ads,
            tags,
            out_dir,
            name,
            format,
        } => {
            assert_eq!(ads, Path::new("ads.xlsx"));
            assert_eq!(tags, Path::new("tags.csv"));
            assert_eq!(out_dir, Path::new("."));
            assert_eq!(name, "Updated_TikTok_Ads");
            assert_eq!(format, OutputFormat::Both);
        }
        _ => panic!("expected Process"),
    }
}

#[test]
fn cli_parse_process_format_and_out_dir() {
    match parse(&[
        "tagsync", "process", "--ads", "a.csv", "--tags", "t.csv", "--out-dir", "/tmp/out", "--format", "xlsx",
    ]) {
        CliCommand::Process { out_dir, format, .. } => {
            assert_eq!(out_dir, Path::new("/tmp/out"));
            assert_eq!(format, OutputFormat::Xlsx);
            assert!(format.xlsx());
            assert!(!format.csv());
        }
        _ => panic!("expected Process with --format xlsx"),
    }
}

#[test]
fn cli_parse_process_requires_both_files() {
    assert!(Cli::try_parse_from(["tagsync", "process", "--ads", "a.csv"]).is_err());
}

#[test]
fn cli_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "tagsync", "process", "--ads", "a.csv", "--tags", "t.csv", "-v", "--config", "cfg.toml",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.config.as_deref(), Some(Path::new("cfg.toml")));
}
