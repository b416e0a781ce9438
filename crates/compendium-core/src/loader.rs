//! Loading lookup tables and overrides from a JSON data directory

use crate::error::{Error, Result};
use crate::lookup::{LookupTables, Overrides, TitleTable, Vocabulary, VocabularyTable};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File holding the language list
pub const TRANSLATIONS_FILE: &str = "translations.json";
/// File holding the application titles
pub const TITLES_FILE: &str = "fusion-tools.json";

/// Only the language list is read from the translations file
#[derive(Debug, Deserialize)]
struct TranslationsFile {
    #[serde(rename = "Languages")]
    languages: LanguagesSection,
}

#[derive(Debug, Deserialize)]
struct LanguagesSection {
    #[serde(rename = "Languages")]
    languages: Vec<String>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| Error::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read an optional table, falling back to an empty one when the file is absent
fn read_optional<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        log::warn!("{} not found, using an empty table", path.display());
        return Ok(T::default());
    }
    read_json(path)
}

impl LookupTables {
    /// Load every table from a data directory.
    ///
    /// `translations.json` is required; title and vocabulary files are optional.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let lang_path = dir.join(TRANSLATIONS_FILE);
        let translations: TranslationsFile = read_json(&lang_path)?;
        if translations.languages.languages.is_empty() {
            return Err(Error::NoLanguages(lang_path));
        }

        let titles: TitleTable = read_optional(&dir.join(TITLES_FILE))?;
        let mut tables = LookupTables::new(translations.languages.languages).with_titles(titles);

        for vocab in Vocabulary::ALL {
            let table: VocabularyTable = read_optional(&dir.join(vocab.file_name()))?;
            log::debug!("loaded {} {} names", table.len(), vocab);
            tables.set_table(vocab, table);
        }

        Ok(tables)
    }
}

impl Overrides {
    /// Load overrides from a JSON file of shape `{word: [lang0, lang1, ...]}`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_json(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn data_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            TRANSLATIONS_FILE,
            r#"{"Languages": {"Languages": ["en", "ja", "fr"]}, "Other": {"x": ["y"]}}"#,
        );
        write(dir.path(), TITLES_FILE, r#"{"smt4": ["SMT IV", "真女神転生IV", "SMT IV fr"]}"#);
        write(dir.path(), "demon-names.json", r#"{"Pixie": ["ピクシー", "Fée"]}"#);
        write(
            dir.path(),
            "area-names.json",
            r#"{"Ginza": ["銀座", "Ginza"], "Ginza Station": ["銀座駅", "Gare"]}"#,
        );
        dir
    }

    #[test]
    fn test_load_dir() {
        let dir = data_dir();
        let tables = LookupTables::load_dir(dir.path()).unwrap();

        assert_eq!(tables.supported_languages(), &["ja".to_string(), "fr".to_string()][..]);
        assert_eq!(tables.table(Vocabulary::Demon).get("Pixie", 1), Some("Fée"));
        assert_eq!(
            tables.table(Vocabulary::Area).longest_prefix("Ginza Station 2"),
            Some("Ginza Station")
        );
        assert!(tables.table(Vocabulary::Skill).is_empty());
        assert_eq!(tables.titles.find("SMT IV", 0), Some("真女神転生IV"));
    }

    #[test]
    fn test_load_dir_requires_languages() {
        let dir = TempDir::new().unwrap();
        let err = LookupTables::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));

        write(dir.path(), TRANSLATIONS_FILE, r#"{"Languages": {"Languages": []}}"#);
        let err = LookupTables::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoLanguages(_)));
    }

    #[test]
    fn test_load_dir_rejects_malformed_table() {
        let dir = data_dir();
        write(dir.path(), "skill-names.json", r#"{"Zan": "not a list"}"#);

        let err = LookupTables::load_dir(dir.path()).unwrap_err();
        match err {
            Error::JsonParse { path, .. } => assert!(path.ends_with("skill-names.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_overrides() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "overrides.json", r#"{"Pixie": ["", "Lutin"]}"#);

        let overrides = Overrides::load(dir.path().join("overrides.json")).unwrap();
        assert_eq!(overrides.get("Pixie", 1), Some("Lutin"));
        assert_eq!(overrides.get("Pixie", 0), None);
    }
}
