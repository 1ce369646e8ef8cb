//! Fixed-width binary primitives (big-endian)
//!
//! Picture and animation records are written and read one primitive field
//! at a time through a cursor, always in declared order. There is no
//! padding, no magic and no version field.
//!
//! ```text
//! i32  4 bytes, two's complement, big-endian
//! u8   1 byte
//! f64  8 bytes, IEEE 754 binary64, big-endian
//! rect 4 × f64: min_x, min_y, max_x, max_y
//! ```

mod reader;
mod writer;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;

/// Upper bound on up-front allocation driven by an untrusted count field.
///
/// Larger counts still decode; the buffer just grows as items arrive, so a
/// corrupt count surfaces as truncation instead of a huge allocation.
pub(crate) const MAX_PREALLOC: usize = 4096;
