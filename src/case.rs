//! Russian grammatical cases and the selectors used to address them
//!
//! An inflection set is positional: the service returns the six forms in a
//! fixed order, so every case maps to one index. Selectors may name a case by
//! index, by its English name or by its Russian name.

use serde::{Deserialize, Serialize};

/// One of the six Russian grammatical cases, in service order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalCase {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

impl GrammaticalCase {
    /// All cases in the order the service returns them
    pub const ALL: [GrammaticalCase; 6] = [
        GrammaticalCase::Nominative,
        GrammaticalCase::Genitive,
        GrammaticalCase::Dative,
        GrammaticalCase::Accusative,
        GrammaticalCase::Instrumental,
        GrammaticalCase::Prepositional,
    ];

    /// Position of this case inside an inflection set
    pub fn index(self) -> usize {
        match self {
            GrammaticalCase::Nominative => 0,
            GrammaticalCase::Genitive => 1,
            GrammaticalCase::Dative => 2,
            GrammaticalCase::Accusative => 3,
            GrammaticalCase::Instrumental => 4,
            GrammaticalCase::Prepositional => 5,
        }
    }

    /// Returns the case stored at `index`, or `None` outside `0..=5`
    pub fn from_index(index: usize) -> Option<GrammaticalCase> {
        Self::ALL.get(index).copied()
    }

    /// English name, lowercase
    pub fn english_name(self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "nominative",
            GrammaticalCase::Genitive => "genitive",
            GrammaticalCase::Dative => "dative",
            GrammaticalCase::Accusative => "accusative",
            GrammaticalCase::Instrumental => "instrumental",
            GrammaticalCase::Prepositional => "prepositional",
        }
    }

    /// Russian name, lowercase
    pub fn russian_name(self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "именительный",
            GrammaticalCase::Genitive => "родительный",
            GrammaticalCase::Dative => "дательный",
            GrammaticalCase::Accusative => "винительный",
            GrammaticalCase::Instrumental => "творительный",
            GrammaticalCase::Prepositional => "предложный",
        }
    }

    /// Parse an English or Russian case name, ignoring letter case.
    ///
    /// Returns `None` if the input doesn't name a case.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<GrammaticalCase> {
        match s.trim().to_lowercase().as_str() {
            "nominative" | "именительный" => Some(GrammaticalCase::Nominative),
            "genitive" | "родительный" => Some(GrammaticalCase::Genitive),
            "dative" | "дательный" => Some(GrammaticalCase::Dative),
            "accusative" | "винительный" => Some(GrammaticalCase::Accusative),
            "instrumental" | "творительный" => Some(GrammaticalCase::Instrumental),
            "prepositional" | "предложный" => Some(GrammaticalCase::Prepositional),
            _ => None,
        }
    }
}

/// Anything that can address a slot of an inflection set.
///
/// Resolution is lenient: selectors that don't match a case resolve to
/// [`GrammaticalCase::Nominative`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseSelector {
    Case(GrammaticalCase),
    Index(i64),
    Name(String),
}

impl CaseSelector {
    /// Resolve to a case, falling back to nominative
    pub fn resolve(&self) -> GrammaticalCase {
        self.try_resolve().unwrap_or(GrammaticalCase::Nominative)
    }

    /// Resolve to a case, or `None` if the selector is not recognized
    pub fn try_resolve(&self) -> Option<GrammaticalCase> {
        match self {
            CaseSelector::Case(case) => Some(*case),
            CaseSelector::Index(index) => usize::try_from(*index)
                .ok()
                .and_then(GrammaticalCase::from_index),
            CaseSelector::Name(name) => {
                let name = name.trim();
                match name.parse::<usize>() {
                    Ok(index) => GrammaticalCase::from_index(index),
                    Err(_) => GrammaticalCase::from_str(name),
                }
            }
        }
    }
}

impl From<GrammaticalCase> for CaseSelector {
    fn from(case: GrammaticalCase) -> Self {
        CaseSelector::Case(case)
    }
}

impl From<usize> for CaseSelector {
    fn from(index: usize) -> Self {
        CaseSelector::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<i32> for CaseSelector {
    fn from(index: i32) -> Self {
        CaseSelector::Index(i64::from(index))
    }
}

impl From<&str> for CaseSelector {
    fn from(name: &str) -> Self {
        CaseSelector::Name(name.to_string())
    }
}

impl From<String> for CaseSelector {
    fn from(name: String) -> Self {
        CaseSelector::Name(name)
    }
}
