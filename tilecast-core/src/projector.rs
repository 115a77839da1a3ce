/// Projection of whole tile grids into pixel coordinates
use std::path::Path;

use nalgebra::{Matrix4, Point2, Point3, Vector3};

use crate::aspect::{aspect_shift, AspectShift};
use crate::camera::{CameraModel, Side};
use crate::catalog::{CatalogError, LevelCatalog, LevelQuery};
use crate::level::{Level, Tile};

/// Vertical drop per elevation band, in world units
const ELEVATION_STEP: f64 = -0.4;

/// Pixel positions for every tile of a level, row-major like the grid
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedGrid {
    pub positions: Vec<Vec<Point2<f64>>>,
    pub tiles: Vec<Vec<Tile>>,
}

impl ProjectedGrid {
    pub fn height(&self) -> usize {
        self.positions.len()
    }

    pub fn width(&self) -> usize {
        self.positions.first().map_or(0, |row| row.len())
    }
}

/// Projects level tile grids through the fixed stage camera
#[derive(Debug)]
pub struct TileProjector {
    camera: CameraModel,
    catalog: LevelCatalog,
}

impl TileProjector {
    /// Load level data and fix the output size in one step
    pub fn new(
        output_width: u32,
        output_height: u32,
        path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let catalog = LevelCatalog::load(path)?;
        Ok(Self::from_parts(
            CameraModel::new(output_width, output_height),
            catalog,
        ))
    }

    pub fn from_parts(camera: CameraModel, catalog: LevelCatalog) -> Self {
        Self { camera, catalog }
    }

    /// True when some level matches `query`
    pub fn contains<'a>(&self, query: impl Into<LevelQuery<'a>>) -> bool {
        self.catalog.contains(query)
    }

    /// Project the first level matching `query`, if any
    pub fn run<'a>(&self, query: impl Into<LevelQuery<'a>>, side: Side) -> Option<ProjectedGrid> {
        self.catalog
            .get(query)
            .map(|level| self.project(level, side))
    }

    /// Project every tile of `level` from the given side
    pub fn project(&self, level: &Level, side: Side) -> ProjectedGrid {
        let anchor = level.view()[side.index()];
        let shift = aspect_shift(self.camera.output_width(), self.camera.output_height())
            .unwrap_or_default();
        let matrix = self
            .camera
            .view_projection(side, &anchor_translation(&anchor, shift));

        let width = level.width();
        let height = level.height();
        let half_w = (width as f64 - 1.0) / 2.0;
        let half_h = (height as f64 - 1.0) / 2.0;

        let mut positions = Vec::with_capacity(height);
        for i in 0..height {
            let mut row = Vec::with_capacity(width);
            for j in 0..width {
                let tile = level.tile(i, j);
                let world = Point3::new(
                    j as f64 - half_w,
                    half_h - i as f64,
                    f64::from(tile.height_type) * ELEVATION_STEP,
                );
                row.push(self.camera.project_point(&matrix, &world));
            }
            positions.push(row);
        }

        ProjectedGrid {
            positions,
            tiles: level.tiles().to_vec(),
        }
    }

    pub fn camera(&self) -> &CameraModel {
        &self.camera
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }
}

/// Translation that moves the camera anchor, plus any aspect shift, to the origin
fn anchor_translation(anchor: &Point3<f64>, shift: AspectShift) -> Matrix4<f64> {
    Matrix4::new_translation(&Vector3::new(
        -anchor.x,
        -anchor.y - shift.y,
        -anchor.z - shift.z,
    ))
}
