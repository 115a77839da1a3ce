/// Table, list, and JSON output for projection results
use serde::Serialize;
use tilecast_core::{CameraModel, LevelCatalog, LevelKey, ProjectedGrid, Side, Tile};

/// Print a one-line summary for every level in the catalog
pub fn print_catalog(catalog: &LevelCatalog) {
    println!("{:<24} {:<10} {:>5}  {}", "stageId", "code", "size", "name");
    for level in catalog.iter() {
        let key = level.key();
        println!(
            "{:<24} {:<10} {:>2}x{:<2}  {}",
            key.stage_id,
            key.code,
            level.width(),
            level.height(),
            key.name
        );
    }
}

/// Print pixel coordinates for every tile, one line per tile
pub fn print_table(key: &LevelKey, grid: &ProjectedGrid) {
    println!(
        "{} ({}) {}x{}",
        key.code,
        key.stage_id,
        grid.width(),
        grid.height()
    );
    println!(
        "{:>4} {:>4} {:>9} {:>9} {:>7} {:>10}  {}",
        "row", "col", "x", "y", "height", "buildable", "tileKey"
    );
    for (i, row) in grid.positions.iter().enumerate() {
        for (j, pixel) in row.iter().enumerate() {
            let tile = &grid.tiles[i][j];
            println!(
                "{:>4} {:>4} {:>9.2} {:>9.2} {:>7} {:>10}  {}",
                i,
                j,
                pixel.x,
                pixel.y,
                tile.height_type,
                tile.buildable_type,
                tile_key_or_dash(tile)
            );
        }
    }
}

fn tile_key_or_dash(tile: &Tile) -> &str {
    if tile.tile_key.is_empty() {
        "-"
    } else {
        &tile.tile_key
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionDoc<'a> {
    #[serde(flatten)]
    key: &'a LevelKey,
    side: &'static str,
    output_width: u32,
    output_height: u32,
    cells: Vec<CellRecord<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CellRecord<'a> {
    row: usize,
    col: usize,
    x: f64,
    y: f64,
    #[serde(flatten)]
    tile: &'a Tile,
}

/// Print the projection as one pretty-printed JSON document
pub fn print_json(
    key: &LevelKey,
    side: Side,
    camera: &CameraModel,
    grid: &ProjectedGrid,
) -> anyhow::Result<()> {
    let cells: Vec<CellRecord> = grid
        .positions
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, pixel)| CellRecord {
                row: i,
                col: j,
                x: pixel.x,
                y: pixel.y,
                tile: &grid.tiles[i][j],
            })
        })
        .collect();

    let doc = ProjectionDoc {
        key,
        side: side.as_str(),
        output_width: camera.output_width(),
        output_height: camera.output_height(),
        cells,
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
