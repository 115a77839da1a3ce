/// Loading and querying collections of level records
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::level::{Level, LevelKey, LevelRecord};

/// Failure to produce a catalog from a level-data document
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read level data from {}", path.display())]
    Load { path: PathBuf, source: io::Error },
    #[error("malformed level data: {0}")]
    Parse(String),
}

/// Selects levels either by full key or by one identifier string
#[derive(Debug, Clone, Copy)]
pub enum LevelQuery<'a> {
    Key(&'a LevelKey),
    Text(&'a str),
}

impl LevelQuery<'_> {
    /// True when `key` satisfies this query
    pub fn matches(self, key: &LevelKey) -> bool {
        match self {
            LevelQuery::Key(wanted) => wanted == key,
            LevelQuery::Text(text) => key.matches_text(text),
        }
    }
}

impl<'a> From<&'a LevelKey> for LevelQuery<'a> {
    fn from(key: &'a LevelKey) -> Self {
        LevelQuery::Key(key)
    }
}

impl<'a> From<&'a str> for LevelQuery<'a> {
    fn from(text: &'a str) -> Self {
        LevelQuery::Text(text)
    }
}

/// An in-memory set of levels, kept in document order
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Read and parse a JSON level-data file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse JSON text holding an array of level records
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let records: Vec<LevelRecord> =
            serde_json::from_str(text).map_err(|err| CatalogError::Parse(err.to_string()))?;
        let levels = records
            .into_iter()
            .map(Level::from_record)
            .collect::<Result<Vec<_>, String>>()
            .map_err(CatalogError::Parse)?;
        Ok(Self { levels })
    }

    pub fn from_levels(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// First level matching `query`, in document order
    pub fn get<'a>(&self, query: impl Into<LevelQuery<'a>>) -> Option<&Level> {
        let query = query.into();
        self.levels.iter().find(|level| query.matches(level.key()))
    }

    pub fn contains<'a>(&self, query: impl Into<LevelQuery<'a>>) -> bool {
        self.get(query).is_some()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate levels in document order
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
      {
        "stageId": "main_01-01",
        "code": "1-1",
        "levelId": "obt/main/level_main_01-01",
        "name": "Burning Run",
        "height": 2,
        "width": 3,
        "view": [[0.0, -4.81, -7.76], [0.0, -5.05, -7.33]],
        "tiles": [
          [
            {"heightType": 0, "buildableType": 1},
            {"heightType": 1, "buildableType": 2, "tileKey": "tile_forbidden"},
            {"heightType": 0, "buildableType": 0}
          ],
          [
            {"heightType": 0, "buildableType": 1, "tileKey": "tile_road"},
            {"heightType": 0, "buildableType": 0},
            {"heightType": 1, "buildableType": 2}
          ]
        ]
      },
      {
        "stageId": "main_01-02",
        "code": "1-2",
        "levelId": "obt/main/level_main_01-02",
        "name": null,
        "height": 1,
        "width": 1,
        "view": [[0.0, -4.0, -8.0], [0.0, -4.2, -7.9]],
        "tiles": [[{"heightType": 0, "buildableType": 1}]]
      }
    ]"#;

    #[test]
    fn test_from_json_parses_records() {
        let catalog = LevelCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let level = catalog.get("1-1").unwrap();
        assert_eq!(level.key().name, "Burning Run");
        assert_eq!(level.width(), 3);
        assert_eq!(level.height(), 2);
        assert_eq!(level.tile(0, 1).tile_key, "tile_forbidden");
        // tileKey falls back to the empty string when absent
        assert_eq!(level.tile(0, 0).tile_key, "");
    }

    #[test]
    fn test_lookup_by_any_identifier() {
        let catalog = LevelCatalog::from_json(SAMPLE).unwrap();
        assert!(catalog.contains("main_01-01"));
        assert!(catalog.contains("1-1"));
        assert!(catalog.contains("obt/main/level_main_01-01"));
        assert!(catalog.contains("Burning Run"));
        assert!(!catalog.contains("4-7"));

        let key = catalog.get("1-1").unwrap().key().clone();
        assert_eq!(catalog.get(&key).unwrap().key(), &key);
    }

    #[test]
    fn test_null_name_becomes_placeholder() {
        let catalog = LevelCatalog::from_json(SAMPLE).unwrap();
        let level = catalog.get("main_01-02").unwrap();
        assert_eq!(level.key().name, "null");
        // which makes the placeholder itself a valid query
        assert!(catalog.contains("null"));
    }

    #[test]
    fn test_absent_name_falls_back() {
        let text = r#"[{
            "stageId": "s", "code": "c", "levelId": "l",
            "height": 1, "width": 1,
            "view": [[0, 0, 0], [0, 0, 0]],
            "tiles": [[{"heightType": 0, "buildableType": 0}]]
        }]"#;
        let catalog = LevelCatalog::from_json(text).unwrap();
        assert_eq!(catalog.get("s").unwrap().key().name, "null");
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let text = r#"[
            {"stageId": "a", "code": "dup", "levelId": "la", "name": "A",
             "height": 1, "width": 1, "view": [[0, 0, 0], [0, 0, 0]],
             "tiles": [[{"heightType": 0, "buildableType": 0}]]},
            {"stageId": "b", "code": "dup", "levelId": "lb", "name": "B",
             "height": 1, "width": 1, "view": [[0, 0, 0], [0, 0, 0]],
             "tiles": [[{"heightType": 0, "buildableType": 0}]]}
        ]"#;
        let catalog = LevelCatalog::from_json(text).unwrap();
        assert_eq!(catalog.get("dup").unwrap().key().stage_id, "a");
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = LevelCatalog::from_json("not json at all");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_bad_grid_shape_is_a_parse_error() {
        // height says 2 but only one row is present
        let text = r#"[{
            "stageId": "s", "code": "c", "levelId": "l", "name": "n",
            "height": 2, "width": 1,
            "view": [[0, 0, 0], [0, 0, 0]],
            "tiles": [[{"heightType": 0, "buildableType": 0}]]
        }]"#;
        let result = LevelCatalog::from_json(text);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = LevelCatalog::load("/no/such/levels.json").unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }));
        assert!(err.to_string().contains("/no/such/levels.json"));
    }
}
