//! ruinflect: Russian case inflections from a remote inflection service
//!
//! The [`Inflector`] fetches the six case forms of a word, caches them through a
//! pluggable [`InflectionCache`], and exposes each case through named accessors
//! that fall back to the original word when a form is missing.

pub mod cache;
pub mod case;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod transport;

pub use cache::{CacheOptions, CacheRegistry, FileCache, InflectionCache, NullCache, SessionCache};
pub use case::{CaseSelector, GrammaticalCase};
pub use client::Inflector;
pub use config::InflectorConfig;
pub use error::InflectError;
pub use parser::parse_response;
pub use transport::{HttpTransport, Transport};

/// Forms of one word in service order: nominative, genitive, dative,
/// accusative, instrumental, prepositional. May hold fewer than six.
pub type InflectionSet = Vec<String>;
