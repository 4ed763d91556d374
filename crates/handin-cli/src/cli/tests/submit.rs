//! Tests for submit and files subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_submit() {
    match parse(&["handin", "submit", "dc1"]) {
        CliCommand::Submit { exercise, dir } => {
            assert_eq!(exercise, "dc1");
            assert!(dir.is_none());
        }
        _ => panic!("expected Submit"),
    }
}

#[test]
fn cli_parse_submit_dir() {
    match parse(&["handin", "submit", "dc3-1", "--dir", "/home/student/dc3"]) {
        CliCommand::Submit { exercise, dir } => {
            assert_eq!(exercise, "dc3-1");
            assert_eq!(dir.as_deref(), Some(Path::new("/home/student/dc3")));
        }
        _ => panic!("expected Submit with --dir"),
    }
}

#[test]
fn cli_parse_submit_requires_exercise() {
    assert!(Cli::try_parse_from(["handin", "submit"]).is_err());
}

#[test]
fn cli_parse_files() {
    match parse(&["handin", "files", "dt-2", "--dir", "."]) {
        CliCommand::Files { exercise, dir } => {
            assert_eq!(exercise, "dt-2");
            assert_eq!(dir.as_deref(), Some(Path::new(".")));
        }
        _ => panic!("expected Files"),
    }
}
