//! Data model
//!
//! Character classes, repetition policies, frequency tables and the report
//! that the renderer turns into output.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::error::CharFreqError;

/// Category an accepted byte is counted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Letter,
    Punctuation,
    Symbol,
}

impl CharacterClass {
    /// All classes in report order
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letter,
        CharacterClass::Punctuation,
        CharacterClass::Symbol,
    ];

    /// Word used for this class in rendered output
    pub fn word(self) -> &'static str {
        match self {
            CharacterClass::Letter => "letter",
            CharacterClass::Punctuation => "punctuation",
            CharacterClass::Symbol => "symbol",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Letter => 0x1,
            CharacterClass::Punctuation => 0x2,
            CharacterClass::Symbol => 0x4,
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.word())
    }
}

/// Rule used to pick one character out of a frequency table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepetitionPolicy {
    NonRepeating,
    LeastRepeating,
    MostRepeating,
}

impl RepetitionPolicy {
    /// Command-line spelling of the policy
    pub fn as_str(self) -> &'static str {
        match self {
            RepetitionPolicy::NonRepeating => "non-repeating",
            RepetitionPolicy::LeastRepeating => "least-repeating",
            RepetitionPolicy::MostRepeating => "most-repeating",
        }
    }

    /// Leading phrase of each rendered result line
    pub fn phrase(self) -> &'static str {
        match self {
            RepetitionPolicy::NonRepeating => "First non-repeating",
            RepetitionPolicy::LeastRepeating => "First least repeating",
            RepetitionPolicy::MostRepeating => "First most repeating",
        }
    }
}

impl std::str::FromStr for RepetitionPolicy {
    type Err = CharFreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "non-repeating" => Ok(RepetitionPolicy::NonRepeating),
            "least-repeating" => Ok(RepetitionPolicy::LeastRepeating),
            "most-repeating" => Ok(RepetitionPolicy::MostRepeating),
            _ => Err(CharFreqError::FormatArgument(format!(
                "unknown format: {:?} (expected non-repeating, least-repeating or most-repeating)",
                s
            ))),
        }
    }
}

/// Occurrence counts per byte, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<u8, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `byte`, appending it if unseen
    pub fn record(&mut self, byte: u8) {
        *self.counts.entry(byte).or_insert(0) += 1;
    }

    #[cfg(test)]
    pub fn count(&self, byte: u8) -> Option<usize> {
        self.counts.get(&byte).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().map(|(&byte, &count)| (byte, count))
    }

    /// Keys in first-seen order
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts.keys().copied()
    }
}

impl FromIterator<u8> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for byte in iter {
            table.record(byte);
        }
        table
    }
}

/// Set of requested classes, always iterated in report order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet {
    bits: u8,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.bits |= class.bit();
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.bits & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = CategorySet::new();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Selected character for one requested class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub category: CharacterClass,
    pub character: Option<char>,
}

/// Everything a single run reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Input path exactly as given on the command line
    pub file: String,
    pub policy: RepetitionPolicy,
    pub results: Vec<Finding>,
}
