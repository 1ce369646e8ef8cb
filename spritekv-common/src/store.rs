//! Key-value store seam and backends
//!
//! The storage engine is external; everything here goes through [`KvStore`]
//! (get/put/delete of opaque bytes by string key). [`AssetStore`] layers the
//! payload codecs and key namespacing on top of any backend.

use crate::error::{DecodeError, EncodeError, StoreError};
use crate::formats::{Animation, Picture, decode_tags, encode_tags};
use crate::keys::{animation_key, tag_key};
use hashbrown::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Flat string-keyed byte store
pub trait KvStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Remove `key`; removing an absent key is not an error
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.contains_key(key))
    }
}

/// Directory-backed store: one file per key
///
/// Keys are hex-encoded and the hex string is cut into segments of at most
/// [`DirStore::SEGMENT_LEN`] characters. Every segment but the last names a
/// directory; the last one plus `.bin` names the file. Short keys therefore
/// live directly under the root (`tag:x` is `7461673a78.bin`), and keys of
/// any length stay within the usual 255-byte file name limit.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    const EXTENSION: &'static str = "bin";

    /// Longest path segment, in hex characters (even, so no byte is split)
    pub const SEGMENT_LEN: usize = 250;

    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            key: String::new(),
            source,
        })?;
        tracing::debug!("Opened directory store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let encoded = hex::encode(key);
        let mut path = self.root.clone();
        let mut rest = encoded.as_str();
        while rest.len() > Self::SEGMENT_LEN {
            let (dir, tail) = rest.split_at(Self::SEGMENT_LEN);
            path.push(dir);
            rest = tail;
        }
        path.push(format!("{rest}.{}", Self::EXTENSION));
        path
    }

    /// All keys present under the root, sorted
    ///
    /// Files whose path does not map back to a key are skipped.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|e| StoreError::Io {
                key: String::new(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(Self::EXTENSION) {
                continue;
            }
            match self.key_for(path) {
                Some(key) => keys.push(key),
                None => tracing::warn!("Skipping foreign file in store: {}", path.display()),
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Inverse of [`DirStore::path_for`]
    fn key_for(&self, path: &Path) -> Option<String> {
        let relative = path.with_extension("");
        let relative = relative.strip_prefix(&self.root).ok()?;
        let mut encoded = String::new();
        for component in relative.components() {
            encoded.push_str(component.as_os_str().to_str()?);
        }
        let key = String::from_utf8(hex::decode(&encoded).ok()?).ok()?;
        // Reject layouts path_for would never produce (e.g. short directories)
        (self.path_for(&key) == path).then_some(key)
    }
}

impl KvStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| *p != self.root.as_path()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        tracing::debug!("put {:?} ({} bytes) -> {}", key, value.len(), path.display());
        fs::write(&path, value).map_err(io_err)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("delete {:?} -> {}", key, path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(key).is_file())
    }
}

/// Typed access to pictures, animations and tag lists in a [`KvStore`]
///
/// | payload   | key             |
/// |-----------|-----------------|
/// | Picture   | `<sheet>`       |
/// | Animation | `anim:<name>`   |
/// | Tag list  | `tag:<tag>`     |
#[derive(Debug, Clone, Default)]
pub struct AssetStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> AssetStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Store a spritesheet picture under its bare name
    pub fn put_picture(&mut self, sheet: &str, picture: &Picture) -> Result<(), StoreError> {
        let bytes = picture.to_bytes().map_err(|e| encode_err(sheet, e))?;
        self.store.put(sheet, bytes)
    }

    pub fn picture(&self, sheet: &str) -> Result<Option<Picture>, StoreError> {
        self.load(sheet, Picture::from_bytes)
    }

    /// Store an animation under `anim:<name>`
    pub fn put_animation(&mut self, name: &str, animation: &Animation) -> Result<(), StoreError> {
        let key = animation_key(name);
        let bytes = animation.to_bytes().map_err(|e| encode_err(&key, e))?;
        self.store.put(&key, bytes)
    }

    pub fn animation(&self, name: &str) -> Result<Option<Animation>, StoreError> {
        self.load(&animation_key(name), Animation::from_bytes)
    }

    /// Replace the list stored under `tag:<tag>`
    pub fn put_tags(&mut self, tag: &str, names: &[String]) -> Result<(), StoreError> {
        self.store.put(&tag_key(tag), encode_tags(names))
    }

    /// Names stored under `tag:<tag>`; empty if the tag has none
    pub fn tags(&self, tag: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.load(&tag_key(tag), decode_tags)?.unwrap_or_default())
    }

    /// Append `name` to the list under `tag:<tag>` unless already present.
    ///
    /// Returns whether the list changed.
    pub fn add_to_tag(&mut self, tag: &str, name: &str) -> Result<bool, StoreError> {
        let mut names = self.tags(tag)?;
        if names.iter().any(|n| n == name) {
            return Ok(false);
        }
        names.push(name.to_string());
        self.put_tags(tag, &names)?;
        Ok(true)
    }

    /// Store an animation and list it under `tag:<tag>`, all or nothing.
    ///
    /// If the tag list write fails, `anim:<name>` is put back to its previous
    /// value (or removed) before the error is returned. Returns whether the
    /// tag list changed.
    pub fn put_tagged_animation(
        &mut self,
        name: &str,
        animation: &Animation,
        tag: &str,
    ) -> Result<bool, StoreError> {
        let mut names = self.tags(tag)?;
        let listed = names.iter().any(|n| n == name);

        let key = animation_key(name);
        let bytes = animation.to_bytes().map_err(|e| encode_err(&key, e))?;
        let previous = self.store.get(&key)?;
        self.store.put(&key, bytes)?;
        if listed {
            return Ok(false);
        }

        names.push(name.to_string());
        if let Err(err) = self.put_tags(tag, &names) {
            let undo = match previous {
                Some(bytes) => self.store.put(&key, bytes),
                None => self.store.delete(&key),
            };
            if let Err(undo_err) = undo {
                tracing::warn!("Failed to roll back {:?}: {}", key, undo_err);
            }
            return Err(err);
        }
        Ok(true)
    }

    fn load<T>(
        &self,
        key: &str,
        decode: impl FnOnce(&[u8]) -> Result<T, DecodeError>,
    ) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            Some(bytes) => decode(&bytes).map(Some).map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            }),
            None => Ok(None),
        }
    }
}

fn encode_err(key: &str, source: EncodeError) -> StoreError {
    StoreError::Encode {
        key: key.to_string(),
        source,
    }
}
