//! Tests for interactive, preview, extract, link, completions.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[test]
fn cli_parse_interactive() {
    match parse(&["ncpl", "interactive"]) {
        CliCommand::Interactive { render, debug_dump } => {
            assert!(!render);
            assert!(!debug_dump);
        }
        _ => panic!("expected Interactive"),
    }
}

#[test]
fn cli_parse_interactive_flags() {
    match parse(&["ncpl", "interactive", "--render", "--debug-dump"]) {
        CliCommand::Interactive { render, debug_dump } => {
            assert!(render);
            assert!(debug_dump);
        }
        _ => panic!("expected Interactive with flags"),
    }
}

#[test]
fn cli_parse_preview() {
    match parse(&[
        "ncpl",
        "preview",
        "https://cloud.example.com/s/AbC123",
        "--html",
        "page.html",
        "--json",
    ]) {
        CliCommand::Preview {
            url,
            html,
            subpath,
            render,
            json,
        } => {
            assert_eq!(url, "https://cloud.example.com/s/AbC123");
            assert_eq!(html, Some(PathBuf::from("page.html")));
            assert!(subpath.is_none());
            assert!(!render);
            assert!(json);
        }
        _ => panic!("expected Preview"),
    }
}

#[test]
fn cli_parse_extract() {
    match parse(&["ncpl", "extract", "saved.html", "--json"]) {
        CliCommand::Extract { path, json } => {
            assert_eq!(path, PathBuf::from("saved.html"));
            assert!(json);
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_link() {
    match parse(&["ncpl", "link", "https://cloud.example.com/s/AbC123", "Ep 1.mkv"]) {
        CliCommand::Link { url, filename } => {
            assert_eq!(url, "https://cloud.example.com/s/AbC123");
            assert_eq!(filename, "Ep 1.mkv");
        }
        _ => panic!("expected Link"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["ncpl", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_unknown_shell_and_subcommand() {
    assert!(Cli::try_parse_from(["ncpl", "completions", "cmd.exe"]).is_err());
    assert!(Cli::try_parse_from(["ncpl", "status"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
