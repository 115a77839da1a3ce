/// Example: Project one level's tile grid to pixel coordinates
///
/// Usage: cargo run --example project_level -- path/to/levels.json 4-7
use std::env;
use std::io;

use tilecast_core::{Side, TileProjector};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <levels-json> [identifier]", args[0]);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "missing level data path",
        ));
    }

    let projector = TileProjector::new(1280, 720, &args[1]).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to load levels: {}", e),
        )
    })?;

    if args.len() < 3 {
        eprintln!("No identifier provided, listing levels...");
        for level in projector.catalog().iter() {
            println!("{}  {}", level.key().code, level.key().stage_id);
        }
        return Ok(());
    }

    let identifier = &args[2];
    println!("Projecting {} at 1280x720...", identifier);

    let grid = projector
        .run(identifier.as_str(), Side::Primary)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No level matches {}", identifier),
            )
        })?;

    for (i, row) in grid.positions.iter().enumerate() {
        for (j, pixel) in row.iter().enumerate() {
            println!("({}, {}) -> ({:.2}, {:.2})", i, j, pixel.x, pixel.y);
        }
    }

    Ok(())
}
