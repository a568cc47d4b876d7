//! Always-miss store

use super::InflectionCache;
use crate::InflectionSet;

/// A store that never holds anything; every lookup goes to the network
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl InflectionCache for NullCache {
    fn connect(&mut self) -> bool {
        true
    }

    fn get(&self, _key: &str) -> Option<InflectionSet> {
        None
    }

    fn set(&mut self, _key: &str, _value: &InflectionSet) -> bool {
        true
    }
}
