//! Human-readable summaries of encoded payloads

use anyhow::{Context, Result};
use clap::ValueEnum;
use spritekv_common::{Animation, Picture, decode_tags};
use std::fmt::Write as _;
use std::path::Path;

/// Payload kind of an encoded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    Picture,
    Animation,
    Tags,
}

/// Decode `path` as `kind` and describe it
pub fn inspect_file(path: &Path, kind: PayloadKind) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    describe(&bytes, kind).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Decode `bytes` as `kind` and describe it
pub fn describe(bytes: &[u8], kind: PayloadKind) -> Result<String> {
    let mut out = String::new();
    match kind {
        PayloadKind::Picture => {
            let picture = Picture::from_bytes(bytes)?;
            let b = picture.bounds;
            writeln!(out, "picture: {} pixels", picture.pixels.len())?;
            writeln!(out, "stride: {}", picture.stride)?;
            writeln!(out, "bounds: ({}, {}) - ({}, {})", b.min.x, b.min.y, b.max.x, b.max.y)?;
        }
        PayloadKind::Animation => {
            let animation = Animation::from_bytes(bytes)?;
            writeln!(out, "spritesheet: {}", animation.spritesheet)?;
            writeln!(
                out,
                "frames: {} (total {} ms)",
                animation.frame_count(),
                animation.total_duration()
            )?;
            for (i, (frame, duration)) in animation
                .frames
                .iter()
                .zip(&animation.durations)
                .enumerate()
            {
                writeln!(
                    out,
                    "  [{i}] ({}, {}) - ({}, {}) {duration} ms",
                    frame.min.x, frame.min.y, frame.max.x, frame.max.y
                )?;
            }
        }
        PayloadKind::Tags => {
            let tags = decode_tags(bytes)?;
            writeln!(out, "tags: {}", tags.len())?;
            for tag in &tags {
                writeln!(out, "  {tag}")?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spritekv_common::{Rect, Rgba, encode_tags};

    #[test]
    fn test_describe_animation() {
        let animation = Animation::new(
            "hero",
            vec![
                Rect::new(0.0, 0.0, 32.0, 32.0),
                Rect::new(32.0, 0.0, 64.0, 32.0),
            ],
            vec![100, 150],
        );
        let text = describe(&animation.to_bytes().unwrap(), PayloadKind::Animation).unwrap();
        assert!(text.contains("spritesheet: hero"));
        assert!(text.contains("frames: 2 (total 250 ms)"));
        assert!(text.contains("[1] (32, 0) - (64, 32) 150 ms"));
    }

    #[test]
    fn test_describe_picture() {
        let picture = Picture::new(vec![Rgba([0, 0, 0, 0]); 2], 2, Rect::new(0.0, 0.0, 2.0, 1.0));
        let text = describe(&picture.to_bytes().unwrap(), PayloadKind::Picture).unwrap();
        assert!(text.contains("picture: 2 pixels"));
        assert!(text.contains("stride: 2"));
    }

    #[test]
    fn test_describe_tags() {
        let bytes = encode_tags(&["a".to_string(), "b".to_string()]);
        let text = describe(&bytes, PayloadKind::Tags).unwrap();
        assert!(text.starts_with("tags: 2"));
    }

    #[test]
    fn test_describe_wrong_kind_fails() {
        let bytes = encode_tags(&["hero".to_string()]);
        assert!(describe(&bytes, PayloadKind::Picture).is_err());
    }
}
