//! Game record types carried through translation
//!
//! Fields the translator rewrites are typed; everything else is kept in
//! `extra` and copied through verbatim. Optional typed fields set to `null`
//! read as absent and are not written back out.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Demons keyed by canonical name
pub type DemonTable = IndexMap<String, DemonEntry>;
/// Enemies keyed by canonical name
pub type EnemyTable = IndexMap<String, EnemyEntry>;
/// Skills keyed by canonical name
pub type SkillTable = IndexMap<String, SkillEntry>;
/// Special recipes or fusion spells: name -> ingredient lists
pub type RecipeTable = IndexMap<String, Vec<String>>;
/// Evolutions keyed by canonical name of the demon that evolves
pub type EvolutionTable = IndexMap<String, Evolution>;

/// A compendium demon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemonEntry {
    pub race: String,
    /// Skill name -> learn level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<IndexMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_cards: Option<IndexMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innate: Option<String>,
    #[serde(default, rename = "trait", skip_serializing_if = "Option::is_none")]
    pub trait_skill: Option<String>,
    /// Comma-joined list ("Bead, Soma")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// Canonical name, set on translated output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_name: Option<String>,
    /// Canonical race, set on translated output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_race: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DemonEntry {
    /// Create a demon of the given race with no optional fields
    pub fn new(race: impl Into<String>) -> Self {
        Self {
            race: race.into(),
            skills: None,
            skill_cards: None,
            innate: None,
            trait_skill: None,
            item: None,
            orig_name: None,
            orig_race: None,
            extra: Map::new(),
        }
    }
}

/// Enemy area, either one location or several
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaField {
    Single(String),
    Many(Vec<String>),
}

/// A field enemy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// Demon the enemy is a variant of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// Drops may be skills (cards) or items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drops: Option<Vec<String>>,
    /// Drop name -> chance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dodds: Option<IndexMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A skill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Absent means "Self"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Comma-joined demon names carrying this skill card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A cell of a fusion chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartCell {
    /// Race or demon name
    Name(String),
    /// Rank modifier (element charts)
    Number(Number),
}

/// Race-by-race fusion chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionChart {
    pub races: Vec<String>,
    pub table: Vec<Vec<ChartCell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elems: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<Vec<ChartCell>>>,
}

/// A group of demons unlocked together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemonUnlock {
    pub category: String,
    pub unlocked: bool,
    /// Comma-joined demon names -> condition text
    pub conditions: IndexMap<String, String>,
}

/// Level-triggered evolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    pub lvl: Number,
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demon_entry_keeps_unknown_fields() {
        let json = r#"{"race":"Fairy","lvl":2,"stats":[3,4],"trait":"Charm"}"#;
        let entry: DemonEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.race, "Fairy");
        assert_eq!(entry.trait_skill.as_deref(), Some("Charm"));
        assert_eq!(entry.extra.get("lvl"), Some(&Value::from(2)));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["stats"], serde_json::json!([3, 4]));
        assert!(back.get("origName").is_none());
    }

    #[test]
    fn test_enemy_area_shapes() {
        let one: EnemyEntry = serde_json::from_str(r#"{"area":"Ginza"}"#).unwrap();
        let many: EnemyEntry = serde_json::from_str(r#"{"area":["Ginza","Ikebukuro"]}"#).unwrap();

        assert_eq!(one.area, Some(AreaField::Single("Ginza".to_string())));
        assert!(matches!(many.area, Some(AreaField::Many(ref v)) if v.len() == 2));
    }

    #[test]
    fn test_chart_cells_mix_names_and_numbers() {
        let json = r#"{"races":["Fairy"],"table":[["Pixie", -1]],"elems":["Erthys"]}"#;
        let chart: FusionChart = serde_json::from_str(json).unwrap();

        assert_eq!(chart.table[0][0], ChartCell::Name("Pixie".to_string()));
        assert!(matches!(chart.table[0][1], ChartCell::Number(_)));
        assert!(chart.pairs.is_none());
    }
}
