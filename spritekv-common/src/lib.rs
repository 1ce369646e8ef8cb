//! Shared types and codecs for spritekv
//!
//! Converts sprite pictures, animation records and tag lists to flat byte
//! sequences for a key-value store, and restores them losslessly.
//!
//! - [`formats`]: the binary picture/animation layouts and the tag codec
//! - [`keys`]: key namespacing so payload kinds can share one keyspace
//! - [`frames`], [`meta`]: spritesheet tiling and metadata documents
//! - [`store`], [`pipeline`]: the store seam and the import pipeline

pub mod error;
pub mod formats;
pub mod frames;
pub mod keys;
pub mod math;
pub mod meta;
pub mod pipeline;
pub mod store;

pub use error::{DecodeError, EncodeError, MetaError, StoreError};
pub use formats::{Animation, Picture, decode_tags, encode_tags};
pub use frames::{FrameGrid, spritesheet_frames};
pub use keys::{ANIMATION_PREFIX, TAG_PREFIX, animation_key, tag_key};
pub use math::Rect;
pub use meta::{AnimationMeta, SpritesheetMeta, read_animations, read_spritesheets};
pub use pipeline::{ImportError, ImportReport, Importer};
pub use store::{AssetStore, DirStore, KvStore, MemoryStore};

// Re-export for callers building pixel buffers
pub use image::Rgba;
