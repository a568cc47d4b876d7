//! File-backed store for inflection sets
//!
//! Persists one JSON file per namespace so inflections survive across runs of
//! the process. Entries never expire; each records when it was written.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::{namespace_from, CacheOptions, InflectionCache};
use crate::InflectionSet;

/// A single cached word on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    /// The inflected forms, in service order
    inflections: InflectionSet,
    /// When the entry was written
    cached_at: DateTime<Utc>,
}

/// Contents of one namespace file
#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

/// Turns a namespace into a file stem that stays inside the cache directory
///
/// Anything other than letters, digits, `_` and `-` becomes `_`, so separators
/// and `..` can't escape `cache_dir`.
fn file_stem(namespace: &str) -> String {
    let stem: String = namespace
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem != namespace {
        warn!(%namespace, %stem, "Cache namespace rewritten for use as a file name");
    }
    stem
}

/// Stores inflection sets as JSON files in a cache directory
///
/// Uses the XDG cache directory (`~/.cache/ruinflect/` on Linux) unless the
/// `dir` option is given. The namespace (`key` option) names the file.
#[derive(Debug, Clone)]
pub struct FileCache {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
    /// File stem inside `cache_dir`
    namespace: String,
}

impl FileCache {
    /// Creates a file cache from forwarded options (`dir`, `key`)
    ///
    /// Falls back to `./.ruinflect-cache` if no XDG cache directory can be
    /// determined; `connect` reports whether the directory is usable.
    pub fn from_options(options: &CacheOptions) -> Self {
        let cache_dir = options
            .get("dir")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .or_else(Self::default_dir)
            .unwrap_or_else(|| PathBuf::from(".ruinflect-cache"));
        Self {
            cache_dir,
            namespace: file_stem(&namespace_from(options)),
        }
    }

    /// Creates a file cache in a specific directory
    pub fn with_dir(cache_dir: PathBuf, namespace: impl Into<String>) -> Self {
        Self {
            cache_dir,
            namespace: file_stem(&namespace.into()),
        }
    }

    fn default_dir() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "ruinflect")?;
        Some(project_dirs.cache_dir().to_path_buf())
    }

    /// Path of the file holding this namespace
    fn cache_path(&self) -> PathBuf {
        self.cache_dir.join(format!("{}.json", self.namespace))
    }

    /// Loads the namespace file; missing or unreadable files read as empty
    fn load(&self) -> CacheStore {
        let content = match fs::read_to_string(self.cache_path()) {
            Ok(content) => content,
            Err(_) => return CacheStore::default(),
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %self.cache_path().display(), error = %e, "Corrupt cache file ignored");
            CacheStore::default()
        })
    }

    fn save(&self, store: &CacheStore) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;
        let json = serde_json::to_string_pretty(store)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(self.cache_path(), json)
    }

    /// When `key` was cached, if present
    pub fn cached_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.load().entries.get(key).map(|entry| entry.cached_at)
    }
}

impl InflectionCache for FileCache {
    fn connect(&mut self) -> bool {
        match fs::create_dir_all(&self.cache_dir) {
            Ok(()) => true,
            Err(e) => {
                debug!(dir = %self.cache_dir.display(), error = %e, "Cache directory unavailable");
                false
            }
        }
    }

    fn get(&self, key: &str) -> Option<InflectionSet> {
        self.load()
            .entries
            .remove(key)
            .map(|entry| entry.inflections)
    }

    fn set(&mut self, key: &str, value: &InflectionSet) -> bool {
        let mut store = self.load();
        store.entries.insert(
            key.to_string(),
            CacheEntry {
                inflections: value.clone(),
                cached_at: Utc::now(),
            },
        );
        match self.save(&store) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %self.cache_path().display(), error = %e, "Failed to write cache file");
                false
            }
        }
    }
}
