//! spritekv.toml manifest parsing

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// spritekv.toml manifest structure
#[derive(Debug, Deserialize)]
pub struct SpritekvManifest {
    pub pack: PackSection,
}

/// Inputs and output of a store build
#[derive(Debug, Deserialize)]
pub struct PackSection {
    /// Spritesheet description document (YAML)
    #[serde(default = "default_spritesheets")]
    pub spritesheets: PathBuf,

    /// Animation description document (YAML)
    #[serde(default = "default_animations")]
    pub animations: PathBuf,

    /// Directory holding `<sheet>.png` for every spritesheet
    #[serde(default = "default_images")]
    pub images: PathBuf,

    /// Directory store root
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Per-frame duration for records without durations.
    /// Default: 100
    #[serde(default = "default_duration")]
    pub default_duration: i32,
}

fn default_spritesheets() -> PathBuf {
    PathBuf::from("spritesheets.yaml")
}

fn default_animations() -> PathBuf {
    PathBuf::from("animations.yaml")
}

fn default_images() -> PathBuf {
    PathBuf::from("images")
}

fn default_output() -> PathBuf {
    PathBuf::from("store")
}

fn default_duration() -> i32 {
    100
}

impl SpritekvManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse spritekv.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.pack.default_duration <= 0 {
            bail!(
                "default_duration must be positive (got {})",
                self.pack.default_duration
            );
        }
        Ok(())
    }
}

/// Manifest plus the directory its relative paths resolve against
pub struct ManifestContext {
    pub manifest: SpritekvManifest,
    pub project_dir: PathBuf,
}

impl ManifestContext {
    pub fn spritesheets_path(&self) -> PathBuf {
        self.project_dir.join(&self.manifest.pack.spritesheets)
    }

    pub fn animations_path(&self) -> PathBuf {
        self.project_dir.join(&self.manifest.pack.animations)
    }

    /// PNG for spritesheet `name`
    pub fn image_path(&self, name: &str) -> PathBuf {
        self.project_dir
            .join(&self.manifest.pack.images)
            .join(format!("{name}.png"))
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_dir.join(&self.manifest.pack.output)
    }
}

pub fn load_manifest(manifest_path: &Path) -> Result<ManifestContext> {
    let manifest = SpritekvManifest::load(manifest_path)?;
    manifest.validate()?;

    let project_dir = manifest_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    Ok(ManifestContext {
        manifest,
        project_dir,
    })
}
