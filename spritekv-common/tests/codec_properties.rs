//! Property tests for the payload codecs
//!
//! Round trips for arbitrary values, and truncation at every cut point of
//! the fixed-width formats.

use proptest::prelude::*;
use spritekv_common::{Animation, Picture, Rect, Rgba, decode_tags, encode_tags};

fn any_rect() -> impl Strategy<Value = Rect> {
    prop::array::uniform4(any::<f64>()).prop_map(Rect::from_array)
}

fn any_picture() -> impl Strategy<Value = Picture> {
    (
        prop::collection::vec(any::<[u8; 4]>().prop_map(Rgba), 0..64),
        any::<i32>(),
        any_rect(),
    )
        .prop_map(|(pixels, stride, bounds)| Picture::new(pixels, stride, bounds))
}

fn any_animation() -> impl Strategy<Value = Animation> {
    (
        ".{0,24}",
        prop::collection::vec((any_rect(), any::<i32>()), 0..16),
    )
        .prop_map(|(name, frames)| {
            let (frames, durations) = frames.into_iter().unzip();
            Animation::new(name, frames, durations)
        })
}

fn pictures_bit_equal(a: &Picture, b: &Picture) -> bool {
    a.pixels == b.pixels && a.stride == b.stride && a.bounds.bits_eq(&b.bounds)
}

fn animations_bit_equal(a: &Animation, b: &Animation) -> bool {
    a.spritesheet == b.spritesheet
        && a.durations == b.durations
        && a.frames.len() == b.frames.len()
        && a.frames.iter().zip(&b.frames).all(|(x, y)| x.bits_eq(y))
}

proptest! {
    #[test]
    fn picture_roundtrip(picture in any_picture()) {
        let bytes = picture.to_bytes().unwrap();
        prop_assert_eq!(bytes.len(), picture.encoded_size());
        let decoded = Picture::from_bytes(&bytes).unwrap();
        prop_assert!(pictures_bit_equal(&decoded, &picture));
    }

    #[test]
    fn animation_roundtrip(animation in any_animation()) {
        let bytes = animation.to_bytes().unwrap();
        prop_assert_eq!(bytes.len(), animation.encoded_size());
        let decoded = Animation::from_bytes(&bytes).unwrap();
        prop_assert!(animations_bit_equal(&decoded, &animation));
    }

    #[test]
    fn tag_roundtrip(tags in prop::collection::vec(".{0,16}", 0..32)) {
        let decoded = decode_tags(&encode_tags(&tags)).unwrap();
        prop_assert_eq!(decoded, tags);
    }

    #[test]
    fn truncated_picture_is_error(picture in any_picture(), cut in any::<prop::sample::Index>()) {
        let bytes = picture.to_bytes().unwrap();
        let cut = cut.index(bytes.len());
        let err = Picture::from_bytes(&bytes[..cut]).unwrap_err();
        prop_assert!(err.is_truncated());
    }

    #[test]
    fn truncated_animation_is_error(animation in any_animation(), cut in any::<prop::sample::Index>()) {
        let bytes = animation.to_bytes().unwrap();
        let cut = cut.index(bytes.len());
        let err = Animation::from_bytes(&bytes[..cut]).unwrap_err();
        prop_assert!(err.is_truncated());
    }

    #[test]
    fn decoders_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = Picture::from_bytes(&bytes);
        let _ = Animation::from_bytes(&bytes);
        let _ = decode_tags(&bytes);
    }
}
