//! Tests for list and config.

use super::{parse, try_parse};
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_list() {
    match parse(&["certfetch", "list"]) {
        CliCommand::List { dest } => assert!(dest.is_none()),
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_dest() {
    match parse(&["certfetch", "list", "--dest", "/srv/certs"]) {
        CliCommand::List { dest } => assert_eq!(dest.as_deref(), Some(Path::new("/srv/certs"))),
        _ => panic!("expected List with --dest"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["certfetch", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_requires_subcommand() {
    assert!(try_parse(&["certfetch"]).is_err());
}
