//! Big-endian field reader

use crate::error::DecodeError;
use crate::math::Rect;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Read};

/// Reads fixed-width fields from any byte source
///
/// Every read names the field it belongs to, so a short input reports
/// exactly where it ran out.
pub struct BinaryReader<R: Read> {
    reader: R,
}

impl<R: Read> BinaryReader<R> {
    /// Create a new binary reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, DecodeError> {
        self.reader.read_u8().map_err(|e| map_io(field, e))
    }

    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, DecodeError> {
        self.reader
            .read_i32::<BigEndian>()
            .map_err(|e| map_io(field, e))
    }

    pub fn read_f64(&mut self, field: &'static str) -> Result<f64, DecodeError> {
        self.reader
            .read_f64::<BigEndian>()
            .map_err(|e| map_io(field, e))
    }

    /// Read a signed 32-bit count; negative values are malformed
    pub fn read_count(&mut self, field: &'static str) -> Result<usize, DecodeError> {
        let count = self.read_i32(field)?;
        usize::try_from(count)
            .map_err(|_| DecodeError::malformed(field, format!("negative count {count}")))
    }

    /// Read four bounds in min_x, min_y, max_x, max_y order
    pub fn read_rect(&mut self, field: &'static str) -> Result<Rect, DecodeError> {
        let mut bounds = [0.0; 4];
        for bound in &mut bounds {
            *bound = self.read_f64(field)?;
        }
        Ok(Rect::from_array(bounds))
    }

    /// Read exactly `len` raw bytes
    ///
    /// The buffer grows with the data actually present, so a corrupt length
    /// fails as truncation without allocating `len` bytes first.
    pub fn read_bytes(&mut self, field: &'static str, len: usize) -> Result<Vec<u8>, DecodeError> {
        let mut bytes = Vec::new();
        (&mut self.reader)
            .take(len as u64)
            .read_to_end(&mut bytes)
            .map_err(|e| map_io(field, e))?;
        if bytes.len() < len {
            return Err(DecodeError::Truncated { field });
        }
        Ok(bytes)
    }

    /// Consume the reader and return the inner reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

fn map_io(field: &'static str, err: io::Error) -> DecodeError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        DecodeError::Truncated { field }
    } else {
        DecodeError::malformed(field, err.to_string())
    }
}
