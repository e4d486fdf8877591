//! CLI argument parsing tests.

use crate::{Cli, Commands, ConfigAction};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn test_resolve_defaults() {
    let cli = Cli::try_parse_from(["dgrid", "resolve"]).unwrap();
    match cli.command {
        Commands::Resolve {
            layout,
            cols,
            viewport,
            id,
            ..
        } => {
            assert!(layout.is_none());
            assert!(cols.is_none());
            assert!(viewport.is_none());
            assert!(id.is_none());
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_resolve_with_patch() {
    let cli = Cli::try_parse_from([
        "dgrid", "resolve", "--cols", "12", "--id", "w1", "--x", "10", "--w", "8",
    ])
    .unwrap();
    match cli.command {
        Commands::Resolve {
            cols, id, x, y, w, h, ..
        } => {
            assert_eq!(cols, Some(12));
            assert_eq!(id.as_deref(), Some("w1"));
            assert_eq!((x, y, w, h), (Some(10), None, Some(8), None));
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_cols_conflicts_with_viewport() {
    let result = Cli::try_parse_from(["dgrid", "resolve", "--cols", "6", "--viewport", "800"]);
    assert!(result.is_err());
}

#[test]
fn test_geometry_requires_id() {
    let result = Cli::try_parse_from(["dgrid", "resolve", "--x", "3"]);
    assert!(result.is_err());
}

#[test]
fn test_replay_requires_events() {
    assert!(Cli::try_parse_from(["dgrid", "replay"]).is_err());
    let cli = Cli::try_parse_from(["dgrid", "replay", "--events", "drag.jsonl"]).unwrap();
    match cli.command {
        Commands::Replay { events, .. } => assert_eq!(events, PathBuf::from("drag.jsonl")),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_global_config_after_subcommand() {
    let cli = Cli::try_parse_from(["dgrid", "tui", "--config", "/tmp/c.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    assert!(matches!(cli.command, Commands::Tui { layout: None }));
}

#[test]
fn test_config_init_force() {
    let cli = Cli::try_parse_from(["dgrid", "config", "init", "--force"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Init { force: true }
        }
    ));
}

#[test]
fn test_config_without_action_fails() {
    assert!(Cli::try_parse_from(["dgrid", "config"]).is_err());
}
