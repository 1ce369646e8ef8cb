//! Key namespacing
//!
//! Animation records and tag lists share one flat keyspace with spritesheet
//! pictures. A fixed prefix marks the payload kind; pictures are stored
//! under their bare spritesheet name.

/// Prefix for keys holding an encoded [`Animation`](crate::Animation)
pub const ANIMATION_PREFIX: &str = "anim:";

/// Prefix for keys holding an encoded tag list (animation names)
pub const TAG_PREFIX: &str = "tag:";

/// Key under which animation `key` is stored
pub fn animation_key(key: &str) -> String {
    format!("{ANIMATION_PREFIX}{key}")
}

/// Key under which the list of animations tagged `key` is stored
pub fn tag_key(key: &str) -> String {
    format!("{TAG_PREFIX}{key}")
}
