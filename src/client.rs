//! Inflection client
//!
//! [`Inflector`] ties the pipeline together: it validates the word, serves it
//! from the cache when possible, otherwise fetches and parses the service
//! response and stores the result. Accessors then read single cases and fall
//! back to the original word whenever a form is missing.

use std::fmt;

use tracing::{debug, warn};

use crate::cache::{CacheRegistry, InflectionCache};
use crate::case::{CaseSelector, GrammaticalCase};
use crate::config::InflectorConfig;
use crate::error::InflectError;
use crate::parser::parse_response;
use crate::transport::{HttpTransport, Transport};
use crate::InflectionSet;

/// Client for the inflection service
///
/// Holds one word and its inflections at a time; each call to
/// [`inflect`](Inflector::inflect) replaces both.
pub struct Inflector {
    transport: Box<dyn Transport>,
    cache: Option<Box<dyn InflectionCache>>,
    resource_path: String,
    word: String,
    inflections: InflectionSet,
}

impl fmt::Debug for Inflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inflector")
            .field("resource_path", &self.resource_path)
            .field("caching", &self.cache.is_some())
            .field("word", &self.word)
            .field("inflections", &self.inflections)
            .finish()
    }
}

impl Inflector {
    /// Create a new Inflector from configuration using the built-in cache variants
    pub fn new(config: InflectorConfig) -> Result<Self, InflectError> {
        Self::with_registry(config, &CacheRegistry::default())
    }

    /// Create a new Inflector, resolving the cache variant through `registry`
    ///
    /// An unknown variant leaves the inflector without a cache.
    pub fn with_registry(
        config: InflectorConfig,
        registry: &CacheRegistry,
    ) -> Result<Self, InflectError> {
        let transport = HttpTransport::new(config.base_url.clone(), config.timeout())?;
        let cache = registry.build(&config.cache_variant, &config.cache_options);
        Ok(Self::with_parts(&config, transport, cache))
    }

    /// Create a new Inflector with explicit collaborators
    ///
    /// Only `resource_path` is read from `config`; the transport and cache are
    /// used as given.
    pub fn with_parts(
        config: &InflectorConfig,
        transport: impl Transport + 'static,
        cache: Option<Box<dyn InflectionCache>>,
    ) -> Self {
        Self {
            transport: Box::new(transport),
            cache,
            resource_path: config.resource_path.clone(),
            word: String::new(),
            inflections: InflectionSet::new(),
        }
    }

    /// Whether a cache collaborator is configured
    pub fn is_caching(&self) -> bool {
        self.cache.is_some()
    }

    /// Fetch the inflections of `word`
    ///
    /// # Returns
    /// * `Ok(InflectionSet)` - The forms in service order, possibly fewer than six
    /// * `Err(InflectError::InvalidWord)` - If `word` is blank; nothing is fetched
    /// * `Err(InflectError)` - If the fetch fails or the response can't be parsed
    ///
    /// # Behavior
    /// - A cached set is used as-is, even when empty
    /// - Cache connection and write failures fall through to a plain fetch
    /// - Fresh results are written back to the cache
    pub async fn inflect(&mut self, word: &str) -> Result<InflectionSet, InflectError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(InflectError::InvalidWord);
        }

        self.word = word.to_string();
        self.inflections.clear();

        if let Some(cache) = self.cache.as_mut() {
            if cache.connect() {
                if let Some(cached) = cache.get(&self.word) {
                    debug!(word = %self.word, forms = cached.len(), "Cache hit");
                    self.inflections = cached;
                    return Ok(self.inflections.clone());
                }
                debug!(word = %self.word, "Cache miss");
            } else {
                debug!(word = %self.word, "Cache unavailable, fetching");
            }
        }

        let body = self.transport.fetch(&self.resource_path, &self.word).await?;
        self.inflections = parse_response(&body)?;

        if let Some(cache) = self.cache.as_mut() {
            if !cache.set(&self.word, &self.inflections) {
                warn!(word = %self.word, "Failed to store inflections in cache");
            }
        }

        Ok(self.inflections.clone())
    }

    /// The word passed to the last successful `inflect` validation
    pub fn original(&self) -> &str {
        &self.word
    }

    /// The form addressed by `selector`, or the original word if it is missing
    ///
    /// Selectors accept an index `0..=5`, an English or Russian case name in
    /// any letter case, or a [`GrammaticalCase`]. Unrecognized selectors read
    /// the nominative.
    pub fn inflection(&self, selector: impl Into<CaseSelector>) -> &str {
        let index = selector.into().resolve().index();
        self.inflections
            .get(index)
            .filter(|form| !form.is_empty())
            .map(String::as_str)
            .unwrap_or(&self.word)
    }

    pub fn nominative(&self) -> &str {
        self.inflection(GrammaticalCase::Nominative)
    }

    pub fn genitive(&self) -> &str {
        self.inflection(GrammaticalCase::Genitive)
    }

    pub fn dative(&self) -> &str {
        self.inflection(GrammaticalCase::Dative)
    }

    pub fn accusative(&self) -> &str {
        self.inflection(GrammaticalCase::Accusative)
    }

    pub fn instrumental(&self) -> &str {
        self.inflection(GrammaticalCase::Instrumental)
    }

    pub fn prepositional(&self) -> &str {
        self.inflection(GrammaticalCase::Prepositional)
    }

    /// Every form of the current word, as returned by the service
    pub fn all(&self) -> &[String] {
        &self.inflections
    }
}
