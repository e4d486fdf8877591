//! Dashboard Grid - CLI entry point
//!
//! Resolves layouts, replays recorded gestures, hosts the terminal UI and
//! manages the configuration file.

use clap::{Parser, Subcommand};
use dashboard_grid::config::error::ConfigError;
use dashboard_grid::config::loader::ConfigLoader;
use dashboard_grid::config::schema::Config;
use dashboard_grid::config::{default, xdg};
use dashboard_grid::layout::io::{load_layout, write_layout, LayoutFileError};
use dashboard_grid::layout::seed::demo_layout;
use dashboard_grid::replay::{load_events, replay, ReplayError};
use dashboard_grid::tui::app::App;
use dashboard_grid::tui::scale::CellScale;
use dashboard_grid::{logging, resolve_layout, Dashboard, GeometryPatch, LayoutError, Widget};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

/// Grid dashboard reflow engine
#[derive(Parser)]
#[command(name = "dgrid")]
#[command(version, about = "Grid dashboard reflow engine")]
struct Cli {
    /// Configuration file (defaults to the XDG location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dgrid CLI
#[derive(Subcommand)]
enum Commands {
    /// Resolve a layout, optionally applying one geometry change, and print it as JSON
    Resolve {
        /// Layout file (JSON array of widgets); the demo layout when omitted
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Column count
        #[arg(long, conflicts_with = "viewport")]
        cols: Option<u32>,
        /// Viewport width in pixels; columns follow the configured breakpoints
        #[arg(long)]
        viewport: Option<f64>,
        /// Widget to move or resize
        #[arg(long)]
        id: Option<String>,
        /// New left column
        #[arg(long, requires = "id")]
        x: Option<u32>,
        /// New top row
        #[arg(long, requires = "id")]
        y: Option<u32>,
        /// New width in columns
        #[arg(long, requires = "id")]
        w: Option<u32>,
        /// New height in rows
        #[arg(long, requires = "id")]
        h: Option<u32>,
    },

    /// Feed a JSON Lines event script through a dashboard and print the report
    Replay {
        /// Event script, one DashboardEvent per line
        #[arg(long)]
        events: PathBuf,
        /// Layout file; the demo layout when omitted
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Initial viewport width in pixels
        #[arg(long)]
        viewport: Option<f64>,
    },

    /// Launch the terminal user interface
    Tui {
        /// Layout file; the demo layout when omitted
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

/// Failures surfaced by the CLI.
#[derive(Error, Debug)]
enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Layout file error: {0}")]
    LayoutFile(#[from] LayoutFileError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { action } => run_config_command(action, cli.config.as_deref()),
        command => run_with_config(command, cli.config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the configuration, starts logging and runs a layout command.
fn run_with_config(command: Commands, config_path: Option<&Path>) -> Result<(), CliError> {
    let config = ConfigLoader::load(config_path)?;
    let interactive = matches!(command, Commands::Tui { .. });
    logging::init(&config.logging, interactive)?;

    match command {
        Commands::Resolve {
            layout,
            cols,
            viewport,
            id,
            x,
            y,
            w,
            h,
        } => {
            let widgets = read_layout(layout.as_deref())?;
            let cols = cols.unwrap_or_else(|| viewport_grid(&config, viewport).cols);
            let patch = id.map(|id| GeometryPatch { id, x, y, w, h });
            let resolved = resolve_layout(patch.as_ref(), &widgets, cols)?;
            write_layout(io::stdout().lock(), &resolved)?;
            Ok(())
        }
        Commands::Replay {
            events,
            layout,
            viewport,
        } => {
            let widgets = read_layout(layout.as_deref())?;
            let mut dashboard = Dashboard::new(
                widgets,
                viewport_grid(&config, viewport),
                config.grid.breakpoints,
            )
            .with_show_grid(config.tui.show_grid);
            dashboard.normalize()?;
            let report = replay(&mut dashboard, load_events(&events)?)?;
            serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
            println!();
            Ok(())
        }
        Commands::Tui { layout } => {
            let widgets = read_layout(layout.as_deref())?;
            let tick_rate = config.tui.tick_rate()?;
            let mut dashboard = Dashboard::new(
                widgets,
                viewport_grid(&config, None),
                config.grid.breakpoints,
            )
            .with_show_grid(config.tui.show_grid);
            dashboard.normalize()?;
            let scale = CellScale::new(config.tui.cell_width_px, config.tui.cell_height_px);

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                let mut app = App::new(dashboard, scale, tick_rate);
                app.run().await
            })?;
            Ok(())
        }
        Commands::Config { action } => run_config_command(action, config_path),
    }
}

fn run_config_command(action: ConfigAction, config_path: Option<&Path>) -> Result<(), CliError> {
    match action {
        ConfigAction::Init { force } => {
            let path = match config_path {
                Some(path) => {
                    default::create_default_config_at(path, force)?;
                    path.to_path_buf()
                }
                None => default::create_default_config(force)?,
            };
            println!("Created configuration at {}", path.display());
        }
        ConfigAction::Path => {
            let path = config_path.map_or_else(xdg::config_path, Path::to_path_buf);
            println!("{}", path.display());
        }
        ConfigAction::Validate => {
            let config = ConfigLoader::load(config_path)?;
            println!("Configuration is valid");
            println!("{config:#?}");
        }
    }
    Ok(())
}

fn read_layout(path: Option<&Path>) -> Result<Vec<Widget>, LayoutFileError> {
    match path {
        Some(path) => load_layout(path),
        None => Ok(demo_layout()),
    }
}

/// Grid for `viewport` pixels, or the widest breakpoint when unknown.
fn viewport_grid(config: &Config, viewport: Option<f64>) -> dashboard_grid::GridConfig {
    config.grid_for_viewport(viewport.unwrap_or(f64::INFINITY))
}

#[cfg(test)]
mod cli_tests;
