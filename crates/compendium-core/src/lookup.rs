//! Lookup tables mapping canonical names to localized names

use crate::error::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Semantic category of a vocabulary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    Demon,
    Enemy,
    Skill,
    Race,
    Element,
    Item,
    Area,
}

impl Vocabulary {
    /// Every vocabulary, in load order
    pub const ALL: [Vocabulary; 7] = [
        Vocabulary::Demon,
        Vocabulary::Enemy,
        Vocabulary::Skill,
        Vocabulary::Race,
        Vocabulary::Element,
        Vocabulary::Item,
        Vocabulary::Area,
    ];

    /// Short name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Vocabulary::Demon => "demon",
            Vocabulary::Enemy => "enemy",
            Vocabulary::Skill => "skill",
            Vocabulary::Race => "race",
            Vocabulary::Element => "elem",
            Vocabulary::Item => "item",
            Vocabulary::Area => "area",
        }
    }

    /// File name of the table inside a data directory (e.g. "demon-names.json")
    pub fn file_name(self) -> String {
        format!("{}-names.json", self.name())
    }

    /// Area names are compound, so they are matched by longest prefix
    pub fn matches_by_prefix(self) -> bool {
        matches!(self, Vocabulary::Area)
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Vocabulary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vocabulary::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| Error::UnknownVocabulary(s.to_string()))
    }
}

/// Canonical name -> localized names, one slot per supported language.
///
/// Insertion order is kept so that prefix scans are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyTable {
    entries: IndexMap<String, Vec<String>>,
}

impl VocabularyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, canonical: impl Into<String>, localized: Vec<String>) {
        self.entries.insert(canonical.into(), localized);
    }

    /// Localized name of `word` for a language code, if the slot exists and is non-empty
    pub fn get(&self, word: &str, code: usize) -> Option<&str> {
        self.entries
            .get(word)
            .and_then(|names| names.get(code))
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Longest canonical key that is a literal prefix of `word`.
    ///
    /// The first key of maximal length wins; an empty key never matches.
    pub fn longest_prefix(&self, word: &str) -> Option<&str> {
        let mut best: Option<&str> = None;
        for key in self.entries.keys() {
            let longer = key.len() > best.map_or(0, str::len);
            if longer && word.starts_with(key.as_str()) {
                best = Some(key.as_str());
            }
        }
        best
    }

    /// Number of canonical names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for VocabularyTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Application titles: id -> [canonical title, lang0, lang1, ...]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleTable {
    entries: IndexMap<String, Vec<String>>,
}

impl TitleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, id: impl Into<String>, titles: Vec<String>) {
        self.entries.insert(id.into(), titles);
    }

    /// Localized title for the first entry whose canonical title equals `title`.
    ///
    /// Slot 0 holds the canonical title, so languages are offset by one.
    pub fn find(&self, title: &str, code: usize) -> Option<&str> {
        self.entries
            .values()
            .find(|titles| titles.first().is_some_and(|t| t == title))
            .and_then(|titles| titles.get(code + 1))
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

/// Caller-supplied exceptions consulted before any vocabulary table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides {
    words: HashMap<String, Vec<String>>,
}

impl Overrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the overrides for a word
    pub fn insert(&mut self, word: impl Into<String>, localized: Vec<String>) {
        self.words.insert(word.into(), localized);
    }

    /// Override for `word` at a language code, if present and non-empty
    pub fn get(&self, word: &str, code: usize) -> Option<&str> {
        self.words
            .get(word)
            .and_then(|names| names.get(code))
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Number of overridden words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if there are no overrides
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// All tables the translator reads from
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    /// Language identifiers; index 0 is the canonical language
    pub languages: Vec<String>,
    /// Application titles
    pub titles: TitleTable,
    tables: HashMap<Vocabulary, VocabularyTable>,
}

impl LookupTables {
    /// Create tables with a language list and no vocabulary entries
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            languages,
            titles: TitleTable::new(),
            tables: HashMap::new(),
        }
    }

    /// Builder-style setter for a vocabulary table
    pub fn with_table(mut self, vocab: Vocabulary, table: VocabularyTable) -> Self {
        self.set_table(vocab, table);
        self
    }

    /// Builder-style setter for the title table
    pub fn with_titles(mut self, titles: TitleTable) -> Self {
        self.titles = titles;
        self
    }

    /// Replace a vocabulary table
    pub fn set_table(&mut self, vocab: Vocabulary, table: VocabularyTable) {
        self.tables.insert(vocab, table);
    }

    /// Get a vocabulary table (missing tables behave as empty)
    pub fn table(&self, vocab: Vocabulary) -> &VocabularyTable {
        static EMPTY: once_cell::sync::Lazy<VocabularyTable> =
            once_cell::sync::Lazy::new(VocabularyTable::new);
        self.tables.get(&vocab).unwrap_or(&EMPTY)
    }

    /// The canonical language identifier, if the list is non-empty
    pub fn canonical_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }

    /// Target languages (everything after the canonical one)
    pub fn supported_languages(&self) -> &[String] {
        self.languages.get(1..).unwrap_or(&[])
    }

    /// Index of a language in the supported list; `None` means "do not translate"
    pub fn language_code(&self, language: &str) -> Option<usize> {
        self.supported_languages()
            .iter()
            .position(|l| l == language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_get() {
        let mut table = VocabularyTable::new();
        table.insert("Zan", names(&["Zan", "Shock", ""]));

        assert_eq!(table.get("Zan", 1), Some("Shock"));
        assert_eq!(table.get("Zan", 2), None);
        assert_eq!(table.get("Zan", 5), None);
        assert_eq!(table.get("Agi", 0), None);
    }

    #[test]
    fn test_longest_prefix() {
        let table: VocabularyTable = vec![
            ("Fortress", names(&["F"])),
            ("Fortress Gate", names(&["FG"])),
            ("Tokyo", names(&["T"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.longest_prefix("Fortress Gate East"), Some("Fortress Gate"));
        assert_eq!(table.longest_prefix("Fortress Hall"), Some("Fortress"));
        assert_eq!(table.longest_prefix("Ginza"), None);
    }

    #[test]
    fn test_longest_prefix_ignores_empty_key() {
        let table: VocabularyTable = vec![("", names(&["x"]))].into_iter().collect();
        assert_eq!(table.longest_prefix("Anything"), None);
    }

    #[test]
    fn test_title_find_offsets_language() {
        let mut titles = TitleTable::new();
        titles.insert("smt4f", names(&["SMT IV Final", "Titre", "Titel"]));

        assert_eq!(titles.find("SMT IV Final", 0), Some("Titre"));
        assert_eq!(titles.find("SMT IV Final", 1), Some("Titel"));
        assert_eq!(titles.find("SMT IV Final", 2), None);
        assert_eq!(titles.find("Unknown", 0), None);
    }

    #[test]
    fn test_language_code() {
        let tables = LookupTables::new(names(&["en", "ja", "fr"]));

        assert_eq!(tables.canonical_language(), Some("en"));
        assert_eq!(tables.supported_languages(), &names(&["ja", "fr"])[..]);
        assert_eq!(tables.language_code("ja"), Some(0));
        assert_eq!(tables.language_code("fr"), Some(1));
        assert_eq!(tables.language_code("en"), None);
        assert_eq!(tables.language_code("de"), None);
    }

    #[test]
    fn test_empty_language_list() {
        let tables = LookupTables::default();
        assert!(tables.supported_languages().is_empty());
        assert_eq!(tables.language_code("en"), None);
    }

    #[test]
    fn test_missing_table_is_empty() {
        let tables = LookupTables::new(names(&["en", "fr"]));
        assert!(tables.table(Vocabulary::Item).is_empty());
    }

    #[test]
    fn test_vocabulary_from_str() {
        assert_eq!("elem".parse::<Vocabulary>().unwrap(), Vocabulary::Element);
        assert_eq!(Vocabulary::Element.file_name(), "elem-names.json");
        assert!("weapon".parse::<Vocabulary>().is_err());
    }

    #[test]
    fn test_overrides_skip_empty_slots() {
        let overrides: Overrides = vec![("Pixie", names(&["", "Lutin"]))].into_iter().collect();
        assert_eq!(overrides.get("Pixie", 0), None);
        assert_eq!(overrides.get("Pixie", 1), Some("Lutin"));
        assert_eq!(overrides.len(), 1);
    }
}
