//! Import pipeline: metadata + spritesheet pictures -> store
//!
//! For each spritesheet the picture is stored under its name. For each
//! animation record the sheet's picture bounds are tiled by the sheet grid,
//! the record's `[row, column]` tiles are picked in order, and the result
//! is stored under `anim:<name>` and listed under `tag:<tag>`.

use crate::error::StoreError;
use crate::formats::{Animation, Picture};
use crate::frames::FrameGrid;
use crate::meta::{AnimationMeta, SpritesheetMeta};
use crate::store::{AssetStore, KvStore};
use hashbrown::HashMap;

/// Error while importing metadata into a store
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Animation {animation:?} references unknown spritesheet {spritesheet:?}")]
    UnknownSpritesheet {
        animation: String,
        spritesheet: String,
    },

    #[error("Animation {animation:?} references spritesheet {spritesheet:?} which has no picture")]
    MissingPicture {
        animation: String,
        spritesheet: String,
    },

    #[error(
        "Animation {animation:?} frame [{row}, {column}] is outside the {width}x{height} grid"
    )]
    FrameOutOfGrid {
        animation: String,
        row: u32,
        column: u32,
        width: u32,
        height: u32,
    },

    #[error("Animation {animation:?} has {frames} frames but {durations} durations")]
    DurationCount {
        animation: String,
        frames: usize,
        durations: usize,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Counts of what an import wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub pictures: usize,
    pub animations: usize,
    /// Tag list updates (new names added to a tag)
    pub tags: usize,
}

/// Builds animation records from metadata and writes them to a store
#[derive(Debug, Clone)]
pub struct Importer {
    spritesheets: HashMap<String, SpritesheetMeta>,
    pictures: HashMap<String, Picture>,
    default_duration: i32,
}

impl Importer {
    /// Duration used when neither the record nor the caller sets one
    pub const DEFAULT_DURATION: i32 = 100;

    pub fn new(spritesheets: HashMap<String, SpritesheetMeta>) -> Self {
        Self {
            spritesheets,
            pictures: HashMap::new(),
            default_duration: Self::DEFAULT_DURATION,
        }
    }

    /// Per-frame duration for records that list no durations
    pub fn with_default_duration(mut self, duration: i32) -> Self {
        self.default_duration = duration;
        self
    }

    /// Register the picture for spritesheet `name`
    pub fn add_picture(&mut self, name: impl Into<String>, picture: Picture) {
        self.pictures.insert(name.into(), picture);
    }

    pub fn spritesheets(&self) -> &HashMap<String, SpritesheetMeta> {
        &self.spritesheets
    }

    /// Resolve one record into an animation without touching any store
    pub fn build_animation(&self, meta: &AnimationMeta) -> Result<Animation, ImportError> {
        let sheet = self.spritesheets.get(&meta.spritesheet).ok_or_else(|| {
            ImportError::UnknownSpritesheet {
                animation: meta.name.clone(),
                spritesheet: meta.spritesheet.clone(),
            }
        })?;
        let picture =
            self.pictures
                .get(&meta.spritesheet)
                .ok_or_else(|| ImportError::MissingPicture {
                    animation: meta.name.clone(),
                    spritesheet: meta.spritesheet.clone(),
                })?;

        let grid = FrameGrid::new(picture.bounds, sheet.width, sheet.height);
        let frames = meta
            .frames
            .iter()
            .map(|&[row, column]| {
                grid.tile(row, column)
                    .ok_or_else(|| ImportError::FrameOutOfGrid {
                        animation: meta.name.clone(),
                        row,
                        column,
                        width: sheet.width,
                        height: sheet.height,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let durations = if meta.durations.is_empty() {
            vec![self.default_duration; frames.len()]
        } else if meta.durations.len() == frames.len() {
            meta.durations.clone()
        } else {
            return Err(ImportError::DurationCount {
                animation: meta.name.clone(),
                frames: frames.len(),
                durations: meta.durations.len(),
            });
        };

        Ok(Animation::new(meta.spritesheet.clone(), frames, durations))
    }

    /// Write every picture, then every animation and its tag entry.
    ///
    /// Stops at the first failing record; records before it stay written.
    /// A failing record leaves nothing behind: its animation and tag entry
    /// are written together through [`AssetStore::put_tagged_animation`].
    pub fn run<S: KvStore>(
        &self,
        animations: &[AnimationMeta],
        store: &mut AssetStore<S>,
    ) -> Result<ImportReport, ImportError> {
        let mut report = ImportReport::default();

        let mut sheet_names: Vec<&String> = self.pictures.keys().collect();
        sheet_names.sort();
        for name in sheet_names {
            store.put_picture(name, &self.pictures[name])?;
            report.pictures += 1;
        }

        for meta in animations {
            let animation = self.build_animation(meta)?;
            if meta.tag.is_empty() {
                store.put_animation(&meta.name, &animation)?;
            } else if store.put_tagged_animation(&meta.name, &animation, &meta.tag)? {
                report.tags += 1;
            }
            report.animations += 1;
            tracing::debug!(
                "Stored animation {:?} ({} frames, sheet {:?})",
                meta.name,
                animation.frame_count(),
                animation.spritesheet
            );
        }

        tracing::info!(
            "Imported {} pictures, {} animations, {} tag entries",
            report.pictures,
            report.animations,
            report.tags
        );
        Ok(report)
    }
}
