//! compendium-core: Core library for localizing demon compendium data
//!
//! This library provides functionality to:
//! - Hold per-category vocabulary tables (demons, skills, races, areas, ...)
//! - Resolve single names, including disambiguation suffixes and compound area names
//! - Translate whole game records (demons, enemies, skills, recipes, fusion charts,
//!   unlock conditions, evolutions) into a display language without touching the input
//! - Load tables and overrides from a JSON data directory

pub mod error;
pub mod kind;
pub mod loader;
pub mod lookup;
pub mod records;
pub mod translator;

pub use error::{Error, Result};
pub use kind::RecordKind;
pub use lookup::{LookupTables, Overrides, TitleTable, Vocabulary, VocabularyTable};
pub use records::{
    AreaField, ChartCell, DemonEntry, DemonTable, DemonUnlock, EnemyEntry, EnemyTable, Evolution,
    EvolutionTable, FusionChart, RecipeTable, SkillEntry, SkillTable,
};
pub use translator::Translator;
