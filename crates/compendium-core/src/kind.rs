//! Dispatch of JSON documents to the matching transformer

use crate::error::{Error, Result};
use crate::records::{
    DemonTable, DemonUnlock, EnemyTable, EvolutionTable, FusionChart, RecipeTable, SkillTable,
};
use crate::translator::Translator;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of data file a JSON document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Demons,
    Enemies,
    Skills,
    SpecialRecipes,
    FusionSpells,
    FusionChart,
    DemonUnlocks,
    Evolutions,
    Races,
    Elems,
}

impl RecordKind {
    pub const ALL: [RecordKind; 10] = [
        RecordKind::Demons,
        RecordKind::Enemies,
        RecordKind::Skills,
        RecordKind::SpecialRecipes,
        RecordKind::FusionSpells,
        RecordKind::FusionChart,
        RecordKind::DemonUnlocks,
        RecordKind::Evolutions,
        RecordKind::Races,
        RecordKind::Elems,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Demons => "demons",
            RecordKind::Enemies => "enemies",
            RecordKind::Skills => "skills",
            RecordKind::SpecialRecipes => "recipes",
            RecordKind::FusionSpells => "fusion-spells",
            RecordKind::FusionChart => "fusion-chart",
            RecordKind::DemonUnlocks => "unlocks",
            RecordKind::Evolutions => "evolutions",
            RecordKind::Races => "races",
            RecordKind::Elems => "elems",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

fn reencode<T, U>(json: &str, f: impl FnOnce(&T) -> U) -> Result<String>
where
    T: DeserializeOwned,
    U: Serialize,
{
    let input: T = serde_json::from_str(json)?;
    Ok(serde_json::to_string_pretty(&f(&input))?)
}

impl Translator {
    /// Parse `json` as `kind`, translate it and return pretty-printed JSON.
    ///
    /// Output is normalized through the typed records: optional fields given
    /// as `null` are omitted, so even a passthrough language only returns the
    /// input structure for documents without explicit `null`s.
    pub fn translate_json(
        &self,
        kind: RecordKind,
        json: &str,
        language: &str,
    ) -> Result<String> {
        match kind {
            RecordKind::Demons => reencode(json, |d: &DemonTable| {
                self.translate_demon_data(d, language).into_owned()
            }),
            RecordKind::Enemies => reencode(json, |e: &EnemyTable| {
                self.translate_enemy_data(e, language).into_owned()
            }),
            RecordKind::Skills => reencode(json, |s: &SkillTable| {
                self.translate_skill_data(s, language).into_owned()
            }),
            RecordKind::SpecialRecipes => reencode(json, |r: &RecipeTable| {
                self.translate_special_recipes(r, language).into_owned()
            }),
            RecordKind::FusionSpells => reencode(json, |c: &RecipeTable| {
                self.translate_fusion_spells(c, language).into_owned()
            }),
            RecordKind::FusionChart => reencode(json, |c: &FusionChart| {
                self.translate_fusion_chart(c, language).into_owned()
            }),
            RecordKind::DemonUnlocks => reencode(json, |u: &Vec<DemonUnlock>| {
                self.translate_demon_unlocks(u, language).into_owned()
            }),
            RecordKind::Evolutions => reencode(json, |e: &EvolutionTable| {
                self.translate_evolutions(e, language).into_owned()
            }),
            RecordKind::Races => reencode(json, |r: &Vec<String>| {
                self.translate_races(r, language).into_owned()
            }),
            RecordKind::Elems => reencode(json, |e: &Vec<String>| {
                self.translate_elems(e, language).into_owned()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupTables, Vocabulary, VocabularyTable};
    use serde_json::{json, Value};

    fn translator() -> Translator {
        let races: VocabularyTable = vec![("Fairy", vec!["Fairy".to_string(), "Fée".to_string()])]
            .into_iter()
            .collect();
        let tables = LookupTables::new(vec!["en".into(), "ja".into(), "fr".into()])
            .with_table(Vocabulary::Race, races);
        Translator::new(tables)
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.name().parse::<RecordKind>().unwrap(), kind);
        }
        assert!(matches!("monsters".parse::<RecordKind>(), Err(Error::UnknownKind(_))));
    }

    #[test]
    fn test_translate_json_races() {
        let out = translator()
            .translate_json(RecordKind::Races, r#"["Fairy","Beast"]"#, "fr")
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!(["Fée", "Beast"]));
    }

    #[test]
    fn test_translate_json_demons_passthrough() {
        let input = r#"{"Pixie": {"race": "Fairy", "lvl": 2}}"#;
        let out = translator().translate_json(RecordKind::Demons, input, "en").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"Pixie": {"race": "Fairy", "lvl": 2}}));
    }

    #[test]
    fn test_translate_json_drops_null_optionals() {
        let input = r#"{"Pixie": {"race": "Fairy", "innate": null, "item": null}}"#;
        let out = translator().translate_json(RecordKind::Demons, input, "en").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"Pixie": {"race": "Fairy"}}));
    }

    #[test]
    fn test_translate_json_bad_shape() {
        let err = translator()
            .translate_json(RecordKind::FusionChart, r#"{"races": 3}"#, "fr")
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
