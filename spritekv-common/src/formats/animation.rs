//! Animation format
//!
//! Spritesheet name, frame rectangles and per-frame durations. All fields
//! big-endian, no padding.
//!
//! # Layout
//! ```text
//! 0x00:  name_length  i32
//! 0x04:  name         name_length bytes, UTF-8, no terminator
//!        frame_count  i32
//!        frames       frame_count × [min_x f64, min_y f64, max_x f64, max_y f64]
//!        durations    frame_count × i32
//! ```
//!
//! There is no separate duration count: `frame_count` sizes both lists.
//! The encoder refuses records whose lists differ in length, so every
//! stream it produces decodes.

use super::binary::{BinaryReader, BinaryWriter, MAX_PREALLOC};
use crate::error::{DecodeError, EncodeError};
use crate::math::Rect;
use std::io::{Read, Write};

/// Decoded animation record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animation {
    /// Key of the spritesheet picture in the store
    pub spritesheet: String,
    /// Frame rectangles in playback order
    pub frames: Vec<Rect>,
    /// One duration per frame, same order as `frames`
    pub durations: Vec<i32>,
}

impl Animation {
    pub fn new(spritesheet: impl Into<String>, frames: Vec<Rect>, durations: Vec<i32>) -> Self {
        Self {
            spritesheet: spritesheet.into(),
            frames,
            durations,
        }
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Sum of all frame durations
    pub fn total_duration(&self) -> i64 {
        self.durations.iter().map(|&d| i64::from(d)).sum()
    }

    /// Encoded size in bytes
    pub fn encoded_size(&self) -> usize {
        4 + self.spritesheet.len() + 4 + self.frames.len() * 32 + self.durations.len() * 4
    }

    /// Encode to a new byte buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut writer = BinaryWriter::new(Vec::with_capacity(self.encoded_size()));
        self.write_to(&mut writer)?;
        Ok(writer.into_inner())
    }

    /// Decode from bytes. Trailing bytes after the durations are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::read_from(&mut BinaryReader::new(bytes))
    }

    /// Write all fields in layout order
    ///
    /// Fails with [`EncodeError::LengthMismatch`] before writing anything if
    /// the frame and duration lists differ in length.
    pub fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> Result<(), EncodeError> {
        if self.frames.len() != self.durations.len() {
            return Err(EncodeError::LengthMismatch {
                frames: self.frames.len(),
                durations: self.durations.len(),
            });
        }

        writer.write_count("spritesheet name", self.spritesheet.len())?;
        writer.write_bytes(self.spritesheet.as_bytes())?;

        writer.write_count("frame count", self.frames.len())?;
        for frame in &self.frames {
            writer.write_rect(frame)?;
        }

        for &duration in &self.durations {
            writer.write_i32(duration)?;
        }

        Ok(())
    }

    /// Read all fields in layout order
    pub fn read_from<R: Read>(reader: &mut BinaryReader<R>) -> Result<Self, DecodeError> {
        let name_length = reader.read_count("spritesheet name length")?;
        let name_bytes = reader.read_bytes("spritesheet name", name_length)?;
        let spritesheet = String::from_utf8(name_bytes)
            .map_err(|e| DecodeError::malformed("spritesheet name", e.to_string()))?;

        let frame_count = reader.read_count("frame count")?;

        let mut frames = Vec::with_capacity(frame_count.min(MAX_PREALLOC));
        for _ in 0..frame_count {
            frames.push(reader.read_rect("frames")?);
        }

        let mut durations = Vec::with_capacity(frame_count.min(MAX_PREALLOC));
        for _ in 0..frame_count {
            durations.push(reader.read_i32("durations")?);
        }

        Ok(Self {
            spritesheet,
            frames,
            durations,
        })
    }
}
