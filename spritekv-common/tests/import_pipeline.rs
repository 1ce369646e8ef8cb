//! Integration tests for the import pipeline
//!
//! YAML documents + PNG spritesheet -> importer -> store -> typed readback

use image::{Rgba, RgbaImage};
use spritekv_common::{
    AssetStore, DirStore, Importer, KvStore, MemoryStore, Picture, Rect, read_animations,
    read_spritesheets,
};
use tempfile::tempdir;

const SPRITESHEETS: &str = "
hero:
  width: 4
  height: 2
";

const ANIMATIONS: &str = "
- name: hero_walk
  tag: walk
  spritesheet: hero
  frames: [[0, 0], [0, 1], [0, 2], [0, 3]]
  durations: [90, 90, 90, 120]
- name: hero_idle
  tag: idle
  spritesheet: hero
  frames: [[1, 0], [1, 1]]
- name: hero_walk_slow
  tag: walk
  spritesheet: hero
  frames: [[0, 0], [0, 2]]
  durations: [200, 200]
";

/// 128×64 sheet with a distinct colour per 32×32 tile
fn hero_sheet() -> RgbaImage {
    RgbaImage::from_fn(128, 64, |x, y| {
        let tile = (y / 32) * 4 + x / 32;
        Rgba([tile as u8 * 30, 0, 0, 255])
    })
}

fn importer_for(sheet: &RgbaImage) -> Importer {
    let sheets = read_spritesheets(SPRITESHEETS.as_bytes()).expect("spritesheets parse");
    let mut importer = Importer::new(sheets).with_default_duration(100);
    importer.add_picture("hero", Picture::from_rgba_image(sheet));
    importer
}

#[test]
fn test_import_into_memory_store() {
    let animations = read_animations(ANIMATIONS.as_bytes()).expect("animations parse");
    let importer = importer_for(&hero_sheet());
    let mut store = AssetStore::new(MemoryStore::new());

    let report = importer.run(&animations, &mut store).unwrap();
    assert_eq!(report.pictures, 1);
    assert_eq!(report.animations, 3);
    assert_eq!(report.tags, 3);

    // 1 picture + 3 animations + 2 tags
    assert_eq!(store.inner().len(), 6);

    let walk = store.animation("hero_walk").unwrap().unwrap();
    assert_eq!(walk.spritesheet, "hero");
    assert_eq!(walk.durations, vec![90, 90, 90, 120]);
    // Top row in y-up coordinates
    assert_eq!(walk.frames[0], Rect::new(0.0, 32.0, 32.0, 64.0));
    assert_eq!(walk.frames[3], Rect::new(96.0, 32.0, 128.0, 64.0));

    let idle = store.animation("hero_idle").unwrap().unwrap();
    assert_eq!(idle.durations, vec![100, 100]);
    assert_eq!(idle.frames[1], Rect::new(32.0, 0.0, 64.0, 32.0));

    assert_eq!(
        store.tags("walk").unwrap(),
        vec!["hero_walk", "hero_walk_slow"]
    );
    assert_eq!(store.tags("idle").unwrap(), vec!["hero_idle"]);
}

#[test]
fn test_frames_address_the_right_pixels() {
    let sheet = hero_sheet();
    let animations = read_animations(ANIMATIONS.as_bytes()).unwrap();
    let mut store = AssetStore::new(MemoryStore::new());
    importer_for(&sheet).run(&animations, &mut store).unwrap();

    let picture = store.picture("hero").unwrap().unwrap();
    let idle = store.animation("hero_idle").unwrap().unwrap();

    // Frame [1, 1] is image tile (row 1, column 1): colour index 5
    let frame = idle.frames[1];
    let pixel = picture
        .pixel(frame.min.x as usize, frame.min.y as usize)
        .unwrap();
    assert_eq!(pixel, Rgba([5 * 30, 0, 0, 255]));

    // And the picture converts back to the original image
    assert_eq!(picture.to_rgba_image(), Some(sheet));
}

#[test]
fn test_import_into_dir_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let animations = read_animations(ANIMATIONS.as_bytes()).unwrap();
    let mut store = AssetStore::new(DirStore::open(dir.path().join("store")).unwrap());

    importer_for(&hero_sheet())
        .run(&animations, &mut store)
        .unwrap();

    let dir_store = store.into_inner();
    assert_eq!(
        dir_store.keys().unwrap(),
        vec![
            "anim:hero_idle",
            "anim:hero_walk",
            "anim:hero_walk_slow",
            "hero",
            "tag:idle",
            "tag:walk",
        ]
    );

    // Raw bytes on disk follow the animation layout
    let raw = dir_store.get("anim:hero_idle").unwrap().unwrap();
    assert_eq!(&raw[0..4], &4i32.to_be_bytes());
    assert_eq!(&raw[4..8], b"hero");
    assert_eq!(&raw[8..12], &2i32.to_be_bytes());

    // A fresh facade over the same directory reads everything back
    let reopened = AssetStore::new(DirStore::open(dir.path().join("store")).unwrap());
    assert_eq!(
        reopened.animation("hero_walk_slow").unwrap().unwrap().durations,
        vec![200, 200]
    );
}

#[test]
fn test_reimport_does_not_duplicate_tags() {
    let animations = read_animations(ANIMATIONS.as_bytes()).unwrap();
    let importer = importer_for(&hero_sheet());
    let mut store = AssetStore::new(MemoryStore::new());

    importer.run(&animations, &mut store).unwrap();
    let second = importer.run(&animations, &mut store).unwrap();

    assert_eq!(second.tags, 0);
    assert_eq!(store.tags("walk").unwrap().len(), 2);
}
