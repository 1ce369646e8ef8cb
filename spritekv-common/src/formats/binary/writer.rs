//! Big-endian field writer

use crate::error::EncodeError;
use crate::math::Rect;
use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

/// Writes fixed-width fields to any byte sink
pub struct BinaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a new binary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_u8(&mut self, value: u8) -> io::Result<()> {
        self.writer.write_u8(value)
    }

    pub fn write_i32(&mut self, value: i32) -> io::Result<()> {
        self.writer.write_i32::<BigEndian>(value)
    }

    pub fn write_f64(&mut self, value: f64) -> io::Result<()> {
        self.writer.write_f64::<BigEndian>(value)
    }

    /// Write a length or count as a signed 32-bit field
    pub fn write_count(&mut self, field: &'static str, len: usize) -> Result<(), EncodeError> {
        let count = i32::try_from(len).map_err(|_| EncodeError::CountOverflow { field, len })?;
        self.write_i32(count)?;
        Ok(())
    }

    /// Write the four bounds in min_x, min_y, max_x, max_y order
    pub fn write_rect(&mut self, rect: &Rect) -> io::Result<()> {
        for bound in rect.to_array() {
            self.write_f64(bound)?;
        }
        Ok(())
    }

    /// Write raw bytes with no length prefix
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    /// Consume the writer and return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
