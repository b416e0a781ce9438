//! Translation engine for compendium data
//!
//! Every transformer resolves the language once. An unknown language (or the
//! canonical one) hands back the input itself; otherwise a fresh structure is
//! built and the input is left untouched so it can be re-rendered later.

use crate::lookup::{LookupTables, Overrides, Vocabulary};
use crate::records::{
    AreaField, ChartCell, DemonTable, DemonUnlock, EnemyTable, Evolution, EvolutionTable,
    FusionChart, RecipeTable, SkillTable,
};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// "<body> <letter>" where the letter tells apart two entities sharing a name
static SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*) ([A-HJ-Z])$").unwrap());

/// Target used by skills that do not name one
const DEFAULT_TARGET: &str = "Self";

/// Rewrites proper nouns in game records into a display language
#[derive(Debug, Clone, Default)]
pub struct Translator {
    tables: LookupTables,
    overrides: Overrides,
}

impl Translator {
    /// Create a translator with no overrides
    pub fn new(tables: LookupTables) -> Self {
        Self {
            tables,
            overrides: Overrides::new(),
        }
    }

    /// Create a translator with an initial override set
    pub fn with_overrides(tables: LookupTables, overrides: Overrides) -> Self {
        Self { tables, overrides }
    }

    /// Replace the override table wholesale
    pub fn load_overrides(&mut self, overrides: Overrides) {
        log::debug!("installing {} translation overrides", overrides.len());
        self.overrides = overrides;
    }

    /// Currently installed overrides
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Tables this translator reads from
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Languages a caller may request
    pub fn supported_languages(&self) -> &[String] {
        self.tables.supported_languages()
    }

    /// Language code for an identifier; `None` means passthrough
    pub fn language_code(&self, language: &str) -> Option<usize> {
        let code = self.tables.language_code(language);
        if code.is_none() {
            log::debug!("language '{}' is not a translation target", language);
        }
        code
    }

    /// Resolve one word against one vocabulary.
    ///
    /// Overrides win over everything. A trailing " X" disambiguation letter is
    /// stripped before lookup and put back afterwards. Area names match by
    /// longest prefix, keeping the untranslated remainder. Unknown words come
    /// back unchanged.
    pub fn translate_word(&self, word: &str, code: Option<usize>, vocab: Vocabulary) -> String {
        let Some(code) = code else {
            return word.to_string();
        };

        if let Some(replacement) = self.overrides.get(word, code) {
            return replacement.to_string();
        }

        let captures = SUFFIX.captures(word);
        let (body, suffix) = match &captures {
            Some(caps) => (
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map(|m| m.as_str()),
            ),
            None => (word, None),
        };

        let table = self.tables.table(vocab);
        let translated = match vocab
            .matches_by_prefix()
            .then(|| table.longest_prefix(body))
            .flatten()
        {
            Some(prefix) => {
                let head = table.get(prefix, code).unwrap_or(prefix);
                format!("{}{}", head, &body[prefix.len()..])
            }
            None => table.get(body, code).unwrap_or(body).to_string(),
        };

        match suffix {
            Some(letter) => format!("{} {}", translated, letter),
            None => translated,
        }
    }

    /// Try `first`; if it leaves the word unchanged, try `second`
    fn translate_either(
        &self,
        word: &str,
        code: usize,
        first: Vocabulary,
        second: Vocabulary,
    ) -> String {
        let translated = self.translate_word(word, Some(code), first);
        if translated != word {
            translated
        } else {
            self.translate_word(word, Some(code), second)
        }
    }

    /// Feed the output of `first` into `second`
    fn translate_through(
        &self,
        word: &str,
        code: usize,
        first: Vocabulary,
        second: Vocabulary,
    ) -> String {
        let once = self.translate_word(word, Some(code), first);
        self.translate_word(&once, Some(code), second)
    }

    fn map_words(&self, words: &[String], code: usize, vocab: Vocabulary) -> Vec<String> {
        words
            .iter()
            .map(|w| self.translate_word(w, Some(code), vocab))
            .collect()
    }

    fn map_joined(&self, joined: &str, sep: &str, code: usize, vocab: Vocabulary) -> String {
        joined
            .split(sep)
            .map(|w| self.translate_word(w, Some(code), vocab))
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn map_chart_rows(&self, rows: &[Vec<ChartCell>], code: usize) -> Vec<Vec<ChartCell>> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        ChartCell::Name(name) => ChartCell::Name(self.translate_through(
                            name,
                            code,
                            Vocabulary::Race,
                            Vocabulary::Demon,
                        )),
                        other => other.clone(),
                    })
                    .collect()
            })
            .collect()
    }

    /// Translate every word of a list
    pub fn translate_list<'a>(
        &self,
        words: &'a [String],
        language: &str,
        vocab: Vocabulary,
    ) -> Cow<'a, [String]> {
        match self.language_code(language) {
            None => Cow::Borrowed(words),
            Some(code) => Cow::Owned(self.map_words(words, code, vocab)),
        }
    }

    /// Translate race names
    pub fn translate_races<'a>(&self, races: &'a [String], language: &str) -> Cow<'a, [String]> {
        self.translate_list(races, language, Vocabulary::Race)
    }

    /// Translate element or stat names
    pub fn translate_elems<'a>(&self, elems: &'a [String], language: &str) -> Cow<'a, [String]> {
        self.translate_list(elems, language, Vocabulary::Element)
    }

    /// Localized application title, or the input when none is known
    pub fn translate_app_title(&self, title: &str, language: &str) -> String {
        self.language_code(language)
            .and_then(|code| self.tables.titles.find(title, code))
            .unwrap_or(title)
            .to_string()
    }

    /// Namespace a settings key by language so each language keeps its own settings
    pub fn translate_settings_key(&self, key: &str, language: &str) -> String {
        match self.language_code(language) {
            Some(_) => format!("{}-{}", key, language),
            None => key.to_string(),
        }
    }

    /// Translate compendium demons, recording their canonical name and race
    pub fn translate_demon_data<'a>(
        &self,
        demons: &'a DemonTable,
        language: &str,
    ) -> Cow<'a, DemonTable> {
        let Some(code) = self.language_code(language) else {
            return Cow::Borrowed(demons);
        };
        let mut translated = DemonTable::with_capacity(demons.len());

        for (name, entry) in demons {
            let mut new_entry = entry.clone();
            new_entry.orig_name = Some(name.clone());

            let skill_keys = |set: &IndexMap<String, serde_json::Value>| {
                set.iter()
                    .map(|(skill, lvl)| {
                        (self.translate_word(skill, Some(code), Vocabulary::Skill), lvl.clone())
                    })
                    .collect::<IndexMap<_, _>>()
            };
            new_entry.skills = entry.skills.as_ref().map(skill_keys);
            new_entry.skill_cards = entry.skill_cards.as_ref().map(skill_keys);

            for extra_skill in [&mut new_entry.innate, &mut new_entry.trait_skill] {
                if let Some(skill) = extra_skill.as_mut().filter(|s| !s.is_empty()) {
                    *skill = self.translate_word(skill, Some(code), Vocabulary::Skill);
                }
            }

            new_entry.orig_race = Some(entry.race.clone());
            new_entry.race = self.translate_word(&entry.race, Some(code), Vocabulary::Race);

            if let Some(item) = entry.item.as_deref().filter(|i| !i.is_empty()) {
                new_entry.item = Some(self.map_joined(item, ", ", code, Vocabulary::Skill));
            }

            let key = self.translate_word(name, Some(code), Vocabulary::Demon);
            translated.insert(key, new_entry);
        }

        Cow::Owned(translated)
    }

    /// Translate field enemies
    pub fn translate_enemy_data<'a>(
        &self,
        enemies: &'a EnemyTable,
        language: &str,
    ) -> Cow<'a, EnemyTable> {
        let Some(code) = self.language_code(language) else {
            return Cow::Borrowed(enemies);
        };
        let mut translated = EnemyTable::with_capacity(enemies.len());

        for (name, entry) in enemies {
            let mut new_entry = entry.clone();

            if let Some(skills) = &entry.skills {
                new_entry.skills = Some(self.map_words(skills, code, Vocabulary::Skill));
            }
            if let Some(persona) = &entry.persona {
                new_entry.persona =
                    Some(self.translate_word(persona, Some(code), Vocabulary::Demon));
            }
            if let Some(drops) = &entry.drops {
                new_entry.drops = Some(
                    drops
                        .iter()
                        .map(|d| {
                            self.translate_either(d, code, Vocabulary::Skill, Vocabulary::Item)
                        })
                        .collect(),
                );
            }
            if let Some(dodds) = &entry.dodds {
                new_entry.dodds = Some(
                    dodds
                        .iter()
                        .map(|(drop, chance)| {
                            let drop = self.translate_either(
                                drop,
                                code,
                                Vocabulary::Skill,
                                Vocabulary::Item,
                            );
                            (drop, chance.clone())
                        })
                        .collect(),
                );
            }
            new_entry.area = entry.area.as_ref().map(|area| match area {
                AreaField::Single(a) => {
                    AreaField::Single(self.translate_word(a, Some(code), Vocabulary::Area))
                }
                AreaField::Many(list) => {
                    AreaField::Many(self.map_words(list, code, Vocabulary::Area))
                }
            });
            if let Some(areas) = &entry.areas {
                new_entry.areas = Some(self.map_words(areas, code, Vocabulary::Area));
            }
            if let Some(race) = &entry.race {
                new_entry.race = Some(self.translate_word(race, Some(code), Vocabulary::Race));
            }

            let key = self.translate_word(name, Some(code), Vocabulary::Enemy);
            translated.insert(key, new_entry);
        }

        Cow::Owned(translated)
    }

    /// Translate skills; a missing target becomes the translated "Self"
    pub fn translate_skill_data<'a>(
        &self,
        skills: &'a SkillTable,
        language: &str,
    ) -> Cow<'a, SkillTable> {
        let Some(code) = self.language_code(language) else {
            return Cow::Borrowed(skills);
        };
        let mut translated = SkillTable::with_capacity(skills.len());

        for (name, entry) in skills {
            let mut new_entry = entry.clone();
            let target = entry
                .target
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TARGET);
            new_entry.target = Some(self.translate_word(target, Some(code), Vocabulary::Element));

            if let Some(card) = entry.card.as_deref().filter(|c| !c.is_empty()) {
                new_entry.card = Some(self.map_joined(card, ", ", code, Vocabulary::Demon));
            }

            let key = self.translate_word(name, Some(code), Vocabulary::Skill);
            translated.insert(key, new_entry);
        }

        Cow::Owned(translated)
    }

    /// Translate special recipes ("A x B" ingredient strings)
    pub fn translate_special_recipes<'a>(
        &self,
        recipes: &'a RecipeTable,
        language: &str,
    ) -> Cow<'a, RecipeTable> {
        let Some(code) = self.language_code(language) else {
            return Cow::Borrowed(recipes);
        };

        let translated: RecipeTable = recipes
            .iter()
            .map(|(name, recipe)| {
                let ingredients = recipe
                    .iter()
                    .map(|r| {
                        r.split(" x ")
                            .map(|i| {
                                self.translate_through(i, code, Vocabulary::Demon, Vocabulary::Race)
                            })
                            .collect::<Vec<_>>()
                            .join(" x ")
                    })
                    .collect();
                (self.translate_word(name, Some(code), Vocabulary::Demon), ingredients)
            })
            .collect();

        Cow::Owned(translated)
    }

    /// Translate fusion spells, keyed by skill and listing races or demons
    pub fn translate_fusion_spells<'a>(
        &self,
        cards: &'a RecipeTable,
        language: &str,
    ) -> Cow<'a, RecipeTable> {
        let Some(code) = self.language_code(language) else {
            return Cow::Borrowed(cards);
        };

        let translated: RecipeTable = cards
            .iter()
            .map(|(name, entries)| {
                let entries = entries
                    .iter()
                    .map(|c| {
                        self.translate_through(c, code, Vocabulary::Race, Vocabulary::Demon)
                    })
                    .collect();
                (self.translate_word(name, Some(code), Vocabulary::Skill), entries)
            })
            .collect();

        Cow::Owned(translated)
    }

    /// Translate a fusion chart.
    ///
    /// Element charts only rename their element demons; their table holds
    /// modifiers. Other charts translate every table cell.
    pub fn translate_fusion_chart<'a>(
        &self,
        chart: &'a FusionChart,
        language: &str,
    ) -> Cow<'a, FusionChart> {
        let Some(code) = self.language_code(language) else {
            return Cow::Borrowed(chart);
        };

        let races = self.map_words(&chart.races, code, Vocabulary::Race);
        let (table, elems) = match &chart.elems {
            Some(elems) => (
                chart.table.clone(),
                Some(self.map_words(elems, code, Vocabulary::Demon)),
            ),
            None => (self.map_chart_rows(&chart.table, code), None),
        };
        let pairs = chart.pairs.as_deref().map(|rows| self.map_chart_rows(rows, code));

        Cow::Owned(FusionChart {
            races,
            table,
            elems,
            pairs,
        })
    }

    /// Translate the demon names in unlock conditions
    pub fn translate_demon_unlocks<'a>(
        &self,
        unlocks: &'a [DemonUnlock],
        language: &str,
    ) -> Cow<'a, [DemonUnlock]> {
        let Some(code) = self.language_code(language) else {
            return Cow::Borrowed(unlocks);
        };

        let translated: Vec<DemonUnlock> = unlocks
            .iter()
            .map(|unlock| DemonUnlock {
                category: unlock.category.clone(),
                unlocked: unlock.unlocked,
                conditions: unlock
                    .conditions
                    .iter()
                    .map(|(names, cond)| {
                        (self.map_joined(names, ",", code, Vocabulary::Demon), cond.clone())
                    })
                    .collect(),
            })
            .collect();

        Cow::Owned(translated)
    }

    /// Translate evolutions; levels pass through
    pub fn translate_evolutions<'a>(
        &self,
        evolutions: &'a EvolutionTable,
        language: &str,
    ) -> Cow<'a, EvolutionTable> {
        let Some(code) = self.language_code(language) else {
            return Cow::Borrowed(evolutions);
        };

        let translated: EvolutionTable = evolutions
            .iter()
            .map(|(name, evo)| {
                (
                    self.translate_word(name, Some(code), Vocabulary::Demon),
                    Evolution {
                        lvl: evo.lvl.clone(),
                        result: self.translate_word(&evo.result, Some(code), Vocabulary::Demon),
                    },
                )
            })
            .collect();

        Cow::Owned(translated)
    }
}
