/// Level records and the tile grids they carry
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A single cell of a level's tile grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Elevation band; nonzero tiles sit above the ground plane
    pub height_type: i32,
    pub buildable_type: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tile_key: String,
}

/// The identifiers a level can be looked up by
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelKey {
    pub stage_id: String,
    pub code: String,
    pub level_id: String,
    pub name: String,
}

impl LevelKey {
    /// Placeholder stored when a record carries no display name
    pub const DEFAULT_NAME: &'static str = "null";

    /// True when `query` exactly matches any of the four identifier fields
    pub fn matches_text(&self, query: &str) -> bool {
        self.stage_id == query || self.code == query || self.level_id == query || self.name == query
    }
}

/// A level definition: identifiers, camera anchors, and a rectangular tile grid
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    key: LevelKey,
    width: usize,
    height: usize,
    view: Vec<Point3<f64>>,
    tiles: Vec<Vec<Tile>>,
}

impl Level {
    /// Build a level, checking that the grid is rectangular and the
    /// anchor list covers both camera sides
    pub fn new(
        key: LevelKey,
        width: usize,
        height: usize,
        view: Vec<Point3<f64>>,
        tiles: Vec<Vec<Tile>>,
    ) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "Level {}: width and height must be nonzero",
                key.stage_id
            ));
        }
        if view.len() < 2 {
            return Err(format!(
                "Level {}: expected at least 2 view anchors, found {}",
                key.stage_id,
                view.len()
            ));
        }
        if tiles.len() != height {
            return Err(format!(
                "Level {}: expected {} tile rows, found {}",
                key.stage_id,
                height,
                tiles.len()
            ));
        }
        for (row, cells) in tiles.iter().enumerate() {
            if cells.len() != width {
                return Err(format!(
                    "Level {}: row {} has {} tiles, expected {}",
                    key.stage_id,
                    row,
                    cells.len(),
                    width
                ));
            }
        }

        Ok(Self {
            key,
            width,
            height,
            view,
            tiles,
        })
    }

    pub(crate) fn from_record(record: LevelRecord) -> Result<Self, String> {
        let key = LevelKey {
            stage_id: record.stage_id,
            code: record.code,
            level_id: record.level_id,
            name: record
                .name
                .unwrap_or_else(|| LevelKey::DEFAULT_NAME.to_string()),
        };
        let view: Vec<Point3<f64>> = record.view.into_iter().map(Point3::from).collect();
        Self::new(key, record.width, record.height, view, record.tiles)
    }

    pub fn key(&self) -> &LevelKey {
        &self.key
    }

    /// Number of tile columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of tile rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Camera anchor positions; index 0 is the primary side, index 1 the alternate
    pub fn view(&self) -> &[Point3<f64>] {
        &self.view
    }

    /// Tile at `row`, `col`; row 0 is the top of the grid
    pub fn tile(&self, row: usize, col: usize) -> &Tile {
        &self.tiles[row][col]
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }
}

/// Raw shape of one level entry in a level-data document
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LevelRecord {
    stage_id: String,
    code: String,
    level_id: String,
    name: Option<String>,
    height: usize,
    width: usize,
    view: Vec<[f64; 3]>,
    tiles: Vec<Vec<Tile>>,
}
