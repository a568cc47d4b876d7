//! Cache port for storing inflection sets between lookups
//!
//! The inflector talks to its store through the [`InflectionCache`] trait.
//! Stores are picked by name through a [`CacheRegistry`]; asking for a name the
//! registry doesn't know disables caching instead of failing, so a client with
//! a misconfigured store still works, it just fetches every time.

mod file;
mod null;
mod session;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::warn;

use crate::InflectionSet;

pub use file::FileCache;
pub use null::NullCache;
pub use session::SessionCache;

/// Namespace used when the options don't provide a non-empty `key`
pub const DEFAULT_NAMESPACE: &str = "YANDEX_INFLECTOR";

/// Name of the store used when none is configured
pub const DEFAULT_VARIANT: &str = "session";

/// Options forwarded verbatim to a cache factory (e.g. `key`, `dir`)
pub type CacheOptions = BTreeMap<String, String>;

/// Constructor for a cache variant
pub type CacheFactory = fn(&CacheOptions) -> Box<dyn InflectionCache>;

/// Storage capability used by the inflector
///
/// `get` must tell "never stored" (`None`) apart from "stored but empty"
/// (`Some(vec![])`).
pub trait InflectionCache: Send {
    /// Prepare the store for use. Returns `false` if it is unavailable.
    fn connect(&mut self) -> bool;

    /// Read the set previously stored under `key`
    fn get(&self, key: &str) -> Option<InflectionSet>;

    /// Store or overwrite the set under `key`. Returns `false` on failure.
    fn set(&mut self, key: &str, value: &InflectionSet) -> bool;
}

/// Resolves the `key` option to a namespace, falling back to [`DEFAULT_NAMESPACE`]
pub(crate) fn namespace_from(options: &CacheOptions) -> String {
    options
        .get("key")
        .map(|key| key.trim())
        .filter(|key| !key.is_empty())
        .unwrap_or(DEFAULT_NAMESPACE)
        .to_string()
}

/// Name → factory table for cache variants
///
/// The default registry knows `session`, `file` and `null`.
#[derive(Clone)]
pub struct CacheRegistry {
    factories: HashMap<String, CacheFactory>,
}

impl fmt::Debug for CacheRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("CacheRegistry").field("variants", &names).finish()
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("session", |options| Box::new(SessionCache::new(options)));
        registry.register("file", |options| Box::new(FileCache::from_options(options)));
        registry.register("null", |_| Box::new(NullCache));
        registry
    }
}

impl CacheRegistry {
    /// Creates a registry with no variants
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Adds or replaces a variant. Names are matched case-insensitively.
    pub fn register(&mut self, name: &str, factory: CacheFactory) {
        self.factories.insert(name.trim().to_lowercase(), factory);
    }

    /// Whether `name` is a known variant
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.trim().to_lowercase())
    }

    /// Instantiates the variant called `name`
    ///
    /// # Returns
    /// * `Some(store)` if the variant is registered
    /// * `None` if it isn't; the caller should run without a cache
    pub fn build(&self, name: &str, options: &CacheOptions) -> Option<Box<dyn InflectionCache>> {
        match self.factories.get(&name.trim().to_lowercase()) {
            Some(factory) => Some(factory(options)),
            None => {
                warn!(variant = %name, "Unknown cache variant, caching disabled");
                None
            }
        }
    }
}
