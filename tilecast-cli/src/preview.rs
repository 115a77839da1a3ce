/// Terminal scatter preview of a projected grid
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};
use tilecast_core::{CameraModel, LevelKey, ProjectedGrid, Side, Tile};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 0.5;
/// Upper bound on plot rows when the frame ratio is extreme
const MAX_ROWS: usize = 512;

/// Character scatter plot that maps frame pixels to terminal cells
pub struct ScatterPreview {
    columns: usize,
    rows: usize,
    frame_width: f64,
    frame_height: f64,
    cells: Vec<char>,
    tints: Vec<Color>,
}

impl ScatterPreview {
    /// Size the plot after the frame, compensating for tall terminal cells
    ///
    /// Zero frame dimensions are treated as 1 and the row count is
    /// bounded, so any input yields a drawable plot.
    pub fn new(columns: u16, frame_width: u32, frame_height: u32) -> Self {
        let columns = columns.max(1) as usize;
        let frame_width = f64::from(frame_width.max(1));
        let frame_height = f64::from(frame_height.max(1));
        let ratio = frame_height / frame_width;
        let rows = (columns as f64 * ratio * CELL_ASPECT)
            .round()
            .clamp(1.0, MAX_ROWS as f64) as usize;
        let size = columns * rows;
        Self {
            columns,
            rows,
            frame_width,
            frame_height,
            cells: vec![' '; size],
            tints: vec![Color::Reset; size],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Plot one projected pixel; pixels outside the frame are dropped
    pub fn plot(&mut self, x: f64, y: f64, marker: char, tint: Color) {
        if x < 0.0 || y < 0.0 || x >= self.frame_width || y >= self.frame_height {
            return;
        }
        let col = (x / self.frame_width * self.columns as f64) as usize;
        let row = (y / self.frame_height * self.rows as f64) as usize;
        let idx = row.min(self.rows - 1) * self.columns + col.min(self.columns - 1);
        self.cells[idx] = marker;
        self.tints[idx] = tint;
    }

    /// Queue the plot to `writer`, one line per row
    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let idx = row * self.columns + col;
                writer.queue(SetForegroundColor(self.tints[idx]))?;
                writer.queue(Print(self.cells[idx]))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        writer.flush()
    }
}

/// Draw the projection for one level as a scatter plot on stdout
pub fn draw_grid(
    key: &LevelKey,
    side: Side,
    camera: &CameraModel,
    grid: &ProjectedGrid,
    columns: u16,
) -> anyhow::Result<()> {
    let mut plot = ScatterPreview::new(columns, camera.output_width(), camera.output_height());
    for (i, row) in grid.positions.iter().enumerate() {
        for (j, pixel) in row.iter().enumerate() {
            let tile = &grid.tiles[i][j];
            plot.plot(pixel.x, pixel.y, marker_for(tile), tint_for(tile));
        }
    }

    println!(
        "{} ({}) {}x{} -> {}x{} cells",
        key.code,
        side.as_str(),
        camera.output_width(),
        camera.output_height(),
        plot.columns(),
        plot.rows()
    );
    let mut stdout = io::stdout();
    plot.draw(&mut stdout)?;
    Ok(())
}

/// Elevated tiles get a caret so platforms stand out from the floor
fn marker_for(tile: &Tile) -> char {
    if tile.height_type > 0 {
        '^'
    } else {
        'o'
    }
}

fn tint_for(tile: &Tile) -> Color {
    match tile.buildable_type {
        0 => Color::DarkGrey,
        1 => Color::Green,
        2 => Color::Cyan,
        _ => Color::White,
    }
}
