//! spritekv payload formats
//!
//! Two unrelated encodings live here:
//!
//! - Fixed-width, big-endian records ([`Picture`], [`Animation`]) built on
//!   [`binary`]. This is the wire/file layout and is bit-exact.
//! - The tag list codec ([`encode_tags`]/[`decode_tags`]), a packed
//!   length-prefixed encoding that only round-trips with itself.
//!
//! No framing is shared between the two. Neither carries magic bytes or a
//! version: the payload kind is known from the key it is stored under.

pub mod animation;
pub mod binary;
pub mod picture;
pub mod tag;

pub use animation::Animation;
pub use binary::{BinaryReader, BinaryWriter};
pub use picture::Picture;
pub use tag::{decode_tags, encode_tags};
