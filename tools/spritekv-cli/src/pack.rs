//! Store build from a manifest

use anyhow::{Context, Result};
use spritekv_common::{
    AnimationMeta, AssetStore, DirStore, ImportReport, Importer, Picture, Rect, read_animations,
    read_spritesheets,
};
use std::path::{Path, PathBuf};

use crate::manifest::{ManifestContext, load_manifest};

/// Build a directory store from the manifest at `manifest_path`
pub fn build(manifest_path: &Path, output: Option<PathBuf>) -> Result<ImportReport> {
    let ctx = load_manifest(manifest_path)?;
    let (mut importer, sheet_names, animations) = load_documents(&ctx)?;

    for name in sheet_names {
        let path = ctx.image_path(&name);
        let picture = load_picture(&path)?;
        tracing::info!(
            "Loaded spritesheet {:?} ({} pixels) from {}",
            name,
            picture.pixels.len(),
            path.display()
        );
        importer.add_picture(name, picture);
    }

    let output = output.unwrap_or_else(|| ctx.output_path());
    let mut store = AssetStore::new(
        DirStore::open(&output)
            .with_context(|| format!("Failed to open store at {}", output.display()))?,
    );

    let report = importer.run(&animations, &mut store)?;
    tracing::info!("Store written to {}", output.display());
    Ok(report)
}

/// Resolve every record the way `build` would, without writing anything.
///
/// Only image headers are read; each sheet gets a pixel-less picture with
/// the image's bounds, which is all frame tiling needs. Fails on the first
/// record that `build` would fail on.
pub fn check(manifest_path: &Path) -> Result<(usize, usize)> {
    let ctx = load_manifest(manifest_path)?;
    let (mut importer, sheet_names, animations) = load_documents(&ctx)?;

    for name in &sheet_names {
        let path = ctx.image_path(name);
        let (width, height) = image::image_dimensions(&path)
            .with_context(|| format!("Failed to load image: {}", path.display()))?;
        let bounds = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        importer.add_picture(name.clone(), Picture::new(Vec::new(), 0, bounds));
    }

    for meta in &animations {
        let animation = importer.build_animation(meta)?;
        tracing::debug!(
            "Animation {:?}: {} frames on {:?}",
            meta.name,
            animation.frame_count(),
            animation.spritesheet
        );
    }

    Ok((sheet_names.len(), animations.len()))
}

/// Parse both documents into an importer (no pictures yet), the sorted
/// spritesheet names and the animation records
fn load_documents(ctx: &ManifestContext) -> Result<(Importer, Vec<String>, Vec<AnimationMeta>)> {
    let sheets_path = ctx.spritesheets_path();
    let sheets_doc = std::fs::read(&sheets_path)
        .with_context(|| format!("Failed to read {}", sheets_path.display()))?;
    let spritesheets = read_spritesheets(&sheets_doc)?;

    let anims_path = ctx.animations_path();
    let anims_doc = std::fs::read(&anims_path)
        .with_context(|| format!("Failed to read {}", anims_path.display()))?;
    let animations = read_animations(&anims_doc)?;

    let mut sheet_names: Vec<String> = spritesheets.keys().cloned().collect();
    sheet_names.sort();

    let importer =
        Importer::new(spritesheets).with_default_duration(ctx.manifest.pack.default_duration);
    Ok((importer, sheet_names, animations))
}

/// Load an image file as a y-up picture
pub fn load_picture(path: &Path) -> Result<Picture> {
    let img =
        image::open(path).with_context(|| format!("Failed to load image: {}", path.display()))?;
    Ok(Picture::from_rgba_image(&img.to_rgba8()))
}
