//! Picture format
//!
//! RGBA pixel buffer with stride and bounds. All fields big-endian, no
//! padding.
//!
//! # Layout
//! ```text
//! 0x00:      pixel_count i32
//! 0x04:      pixels      pixel_count × [r u8, g u8, b u8, a u8]
//! 4+4n:      stride      i32
//! 8+4n:      bounds      min_x f64, min_y f64, max_x f64, max_y f64
//! ```
//!
//! Total size is `40 + 4 × pixel_count` bytes. The codec does not check the
//! pixel count against stride or bounds.

use super::binary::{BinaryReader, BinaryWriter, MAX_PREALLOC};
use crate::error::{DecodeError, EncodeError};
use crate::math::Rect;
use image::{Rgba, RgbaImage};
use std::io::{Read, Write};

/// Decoded picture: pixels in row-major order as produced by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Picture {
    pub pixels: Vec<Rgba<u8>>,
    /// Pixels per row; may be zero or negative
    pub stride: i32,
    pub bounds: Rect,
}

impl Picture {
    /// Size of the fixed fields (count + stride + bounds)
    pub const FIXED_SIZE: usize = 4 + 4 + 32;

    pub fn new(pixels: Vec<Rgba<u8>>, stride: i32, bounds: Rect) -> Self {
        Self {
            pixels,
            stride,
            bounds,
        }
    }

    /// Encoded size in bytes
    pub fn encoded_size(&self) -> usize {
        Self::FIXED_SIZE + self.pixels.len() * 4
    }

    /// Build a picture from a decoded image.
    ///
    /// Bounds are `(0, 0, width, height)` and the stride is the image width,
    /// saturated at `i32::MAX` for images wider than the wire field allows.
    /// Rows are stored bottom-up so buffer row 0 is the lowest row in y-up
    /// coordinates.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut pixels = Vec::with_capacity(width as usize * height as usize);

        for y in (0..height).rev() {
            for x in 0..width {
                pixels.push(*img.get_pixel(x, y));
            }
        }

        Self {
            pixels,
            stride: stride_for_width(width),
            bounds: Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
        }
    }

    /// Inverse of [`Picture::from_rgba_image`].
    ///
    /// Returns `None` unless the stride is positive and divides the pixel
    /// count evenly.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let width = usize::try_from(self.stride).ok().filter(|&w| w > 0)?;
        if self.pixels.len() % width != 0 {
            return None;
        }
        let height = self.pixels.len() / width;

        let mut img = RgbaImage::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?);
        for (row_index, row) in self.pixels.chunks_exact(width).enumerate() {
            let y = (height - 1 - row_index) as u32;
            for (x, pixel) in row.iter().enumerate() {
                img.put_pixel(x as u32, y, *pixel);
            }
        }
        Some(img)
    }

    /// Pixel at buffer column `x`, buffer row `y` (stride-addressed)
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba<u8>> {
        let stride = usize::try_from(self.stride).ok()?;
        if x >= stride {
            return None;
        }
        let index = y.checked_mul(stride)?.checked_add(x)?;
        self.pixels.get(index).copied()
    }

    /// Encode to a new byte buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut writer = BinaryWriter::new(Vec::with_capacity(self.encoded_size()));
        self.write_to(&mut writer)?;
        Ok(writer.into_inner())
    }

    /// Decode from bytes. Trailing bytes after the bounds are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::read_from(&mut BinaryReader::new(bytes))
    }

    /// Write all fields in layout order
    pub fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> Result<(), EncodeError> {
        writer.write_count("pixel count", self.pixels.len())?;

        for pixel in &self.pixels {
            let [r, g, b, a] = pixel.0;
            writer.write_u8(r)?;
            writer.write_u8(g)?;
            writer.write_u8(b)?;
            writer.write_u8(a)?;
        }

        writer.write_i32(self.stride)?;
        writer.write_rect(&self.bounds)?;
        Ok(())
    }

    /// Read all fields in layout order
    pub fn read_from<R: Read>(reader: &mut BinaryReader<R>) -> Result<Self, DecodeError> {
        let count = reader.read_count("pixel count")?;

        let mut pixels = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            let r = reader.read_u8("pixels")?;
            let g = reader.read_u8("pixels")?;
            let b = reader.read_u8("pixels")?;
            let a = reader.read_u8("pixels")?;
            pixels.push(Rgba([r, g, b, a]));
        }

        let stride = reader.read_i32("stride")?;
        let bounds = reader.read_rect("bounds")?;

        Ok(Self {
            pixels,
            stride,
            bounds,
        })
    }
}

/// Image width as a wire stride, saturating instead of wrapping negative
fn stride_for_width(width: u32) -> i32 {
    i32::try_from(width).unwrap_or(i32::MAX)
}
