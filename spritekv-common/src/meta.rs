//! Animation and spritesheet description documents (YAML)
//!
//! ```yaml
//! # animations.yaml: a sequence of records
//! - name: hero_walk
//!   tag: walk
//!   spritesheet: hero
//!   frames: [[0, 0], [0, 1]]   # [row, column] in the sheet grid
//!   durations: [100, 150]       # optional, one per frame
//!
//! # spritesheets.yaml: sheet name to tile grid size
//! hero:
//!   width: 4
//!   height: 2
//! ```

use crate::error::MetaError;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// One animation description record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationMeta {
    pub name: String,
    #[serde(default)]
    pub tag: String,
    pub spritesheet: String,
    /// `[row, column]` tile coordinates in playback order
    pub frames: Vec<[u32; 2]>,
    /// Per-frame durations; empty means "use the pipeline default"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub durations: Vec<i32>,
}

/// Tile grid of one spritesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritesheetMeta {
    /// Tiles per row
    pub width: u32,
    /// Rows of tiles
    pub height: u32,
}

/// Parse an animations document
pub fn read_animations(data: &[u8]) -> Result<Vec<AnimationMeta>, MetaError> {
    serde_yaml::from_slice(data).map_err(MetaError::Animations)
}

/// Parse a spritesheets document
pub fn read_spritesheets(data: &[u8]) -> Result<HashMap<String, SpritesheetMeta>, MetaError> {
    serde_yaml::from_slice(data).map_err(MetaError::Spritesheets)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIMATIONS: &str = r#"
- name: hero_walk
  tag: walk
  spritesheet: hero
  frames: [[0, 0], [0, 1]]
  durations: [100, 150]
- name: hero_idle
  spritesheet: hero
  frames:
    - [1, 0]
"#;

    const SPRITESHEETS: &str = r#"
hero:
  width: 4
  height: 2
slime:
  width: 8
  height: 1
"#;

    #[test]
    fn test_read_animations() {
        let animations = read_animations(ANIMATIONS.as_bytes()).unwrap();
        assert_eq!(animations.len(), 2);

        let walk = &animations[0];
        assert_eq!(walk.name, "hero_walk");
        assert_eq!(walk.tag, "walk");
        assert_eq!(walk.spritesheet, "hero");
        assert_eq!(walk.frames, vec![[0, 0], [0, 1]]);
        assert_eq!(walk.durations, vec![100, 150]);

        // Optional fields default
        let idle = &animations[1];
        assert_eq!(idle.tag, "");
        assert!(idle.durations.is_empty());
        assert_eq!(idle.frames, vec![[1, 0]]);
    }

    #[test]
    fn test_read_spritesheets() {
        let sheets = read_spritesheets(SPRITESHEETS.as_bytes()).unwrap();
        assert_eq!(sheets.len(), 2);
        assert_eq!(
            sheets["hero"],
            SpritesheetMeta {
                width: 4,
                height: 2
            }
        );
        assert_eq!(sheets["slime"].width, 8);
    }

    #[test]
    fn test_empty_animations_list() {
        assert!(read_animations(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_schema_mismatch() {
        let err = read_animations(b"hero: {width: 1}").unwrap_err();
        assert!(matches!(err, MetaError::Animations(_)));

        let err = read_spritesheets(b"hero: {width: -1, height: 2}").unwrap_err();
        assert!(matches!(err, MetaError::Spritesheets(_)));
    }

    #[test]
    fn test_missing_frames_rejected() {
        let err = read_animations(b"- name: a\n  spritesheet: hero\n").unwrap_err();
        assert!(err.to_string().contains("animations"));
    }
}
