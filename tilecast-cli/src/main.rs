//! Tilecast - level tile grids projected to screen pixels
//!
//! Usage:
//!   tilecast --levels levels.json list
//!   tilecast --levels levels.json project 4-7
//!   tilecast --levels levels.json project 4-7 --side --format json
//!   tilecast --levels levels.json preview 4-7 --columns 120

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tilecast_core::{Side, TileProjector};

mod output;
mod preview;

#[derive(Parser)]
#[command(name = "tilecast")]
#[command(about = "Project level tile grids into screen coordinates")]
struct Cli {
    /// Path to the JSON level-data file
    #[arg(long)]
    levels: PathBuf,

    /// Output frame width in pixels
    #[arg(long, default_value_t = 1280, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Output frame height in pixels
    #[arg(long, default_value_t = 720, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every level in the data file
    List,
    /// Print pixel coordinates for each tile of one level
    Project {
        /// Stage id, code, level id, or display name
        identifier: String,
        /// Project from the alternate camera side
        #[arg(long)]
        side: bool,
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },
    /// Draw the projected grid as a scatter plot in the terminal
    Preview {
        /// Stage id, code, level id, or display name
        identifier: String,
        /// Project from the alternate camera side
        #[arg(long)]
        side: bool,
        /// Plot width in terminal cells
        #[arg(long, default_value_t = 100)]
        columns: u16,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let projector = TileProjector::new(cli.width, cli.height, &cli.levels)
        .with_context(|| format!("failed to load levels from {}", cli.levels.display()))?;

    match cli.command {
        Commands::List => {
            output::print_catalog(projector.catalog());
            Ok(())
        }
        Commands::Project {
            identifier,
            side,
            format,
        } => project(&projector, &identifier, Side::from(side), format),
        Commands::Preview {
            identifier,
            side,
            columns,
        } => draw_preview(&projector, &identifier, Side::from(side), columns),
    }
}

/// Print the projection for one level as a table or JSON document
fn project(projector: &TileProjector, identifier: &str, side: Side, format: Format) -> Result<()> {
    let level = projector
        .catalog()
        .get(identifier)
        .with_context(|| format!("no level matches {identifier:?}"))?;
    let grid = projector.project(level, side);

    match format {
        Format::Table => output::print_table(level.key(), &grid),
        Format::Json => output::print_json(level.key(), side, projector.camera(), &grid)?,
    }
    Ok(())
}

/// Scatter-plot the projection for one level on stdout
fn draw_preview(
    projector: &TileProjector,
    identifier: &str,
    side: Side,
    columns: u16,
) -> Result<()> {
    let level = projector
        .catalog()
        .get(identifier)
        .with_context(|| format!("no level matches {identifier:?}"))?;
    let grid = projector.project(level, side);
    preview::draw_grid(level.key(), side, projector.camera(), &grid, columns)
}
