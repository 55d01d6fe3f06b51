//! Content categories of the game database and the order they are searched in.
//!
//! An English name is looked up in every category; the kind of page it came
//! from decides which category is trusted first.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A searchable collection of the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Quests,
    Items,
    Monsters,
    Subareas,
    Areas,
    Dungeons,
    Achievements,
    Equipments,
    Spells,
}

impl ContentCategory {
    /// Every category, in default search order.
    pub const ALL: [ContentCategory; 9] = [
        ContentCategory::Quests,
        ContentCategory::Items,
        ContentCategory::Monsters,
        ContentCategory::Subareas,
        ContentCategory::Areas,
        ContentCategory::Dungeons,
        ContentCategory::Achievements,
        ContentCategory::Equipments,
        ContentCategory::Spells,
    ];

    /// Path segment of this category on the API.
    pub fn api_path(self) -> &'static str {
        match self {
            ContentCategory::Quests => "quests",
            ContentCategory::Items => "items",
            ContentCategory::Monsters => "monsters",
            ContentCategory::Subareas => "subareas",
            ContentCategory::Areas => "areas",
            ContentCategory::Dungeons => "dungeons",
            ContentCategory::Achievements => "achievements",
            ContentCategory::Equipments => "equipments",
            ContentCategory::Spells => "spells",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_path())
    }
}

/// Kind of encyclopedia page a name was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Quest,
    Item,
    Equipment,
    Monster,
    Area,
    Subarea,
    Dungeon,
    Achievement,
    Spell,
    #[default]
    Unknown,
}

impl PageKind {
    pub const ALL: [PageKind; 10] = [
        PageKind::Quest,
        PageKind::Item,
        PageKind::Equipment,
        PageKind::Monster,
        PageKind::Area,
        PageKind::Subarea,
        PageKind::Dungeon,
        PageKind::Achievement,
        PageKind::Spell,
        PageKind::Unknown,
    ];

    /// The category this kind of page belongs to, if any.
    pub fn category(self) -> Option<ContentCategory> {
        match self {
            PageKind::Quest => Some(ContentCategory::Quests),
            PageKind::Item => Some(ContentCategory::Items),
            PageKind::Equipment => Some(ContentCategory::Equipments),
            PageKind::Monster => Some(ContentCategory::Monsters),
            PageKind::Area => Some(ContentCategory::Areas),
            PageKind::Subarea => Some(ContentCategory::Subareas),
            PageKind::Dungeon => Some(ContentCategory::Dungeons),
            PageKind::Achievement => Some(ContentCategory::Achievements),
            PageKind::Spell => Some(ContentCategory::Spells),
            PageKind::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Quest => "quest",
            PageKind::Item => "item",
            PageKind::Equipment => "equipment",
            PageKind::Monster => "monster",
            PageKind::Area => "area",
            PageKind::Subarea => "subarea",
            PageKind::Dungeon => "dungeon",
            PageKind::Achievement => "achievement",
            PageKind::Spell => "spell",
            PageKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = String;

    /// Accepts singular and plural forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        PageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == singular || kind.as_str() == lower)
            .ok_or_else(|| format!("unknown page kind '{s}'"))
    }
}

/// Categories to search for a page of the given kind: its own category
/// first, then the rest in default order.
pub fn search_order(kind: PageKind) -> Vec<ContentCategory> {
    let mut order = ContentCategory::ALL.to_vec();
    if let Some(first) = kind.category() {
        order.retain(|c| *c != first);
        order.insert(0, first);
    }
    order
}

/// One search hit, reduced to what the linker needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: i64,
    pub name_en: Option<String>,
    pub name_fr: Option<String>,
}

/// Search hits grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupResults {
    by_category: HashMap<ContentCategory, Vec<CandidateRecord>>,
}

impl LookupResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: ContentCategory, records: Vec<CandidateRecord>) {
        self.by_category.insert(category, records);
    }

    pub fn get(&self, category: ContentCategory) -> &[CandidateRecord] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(Vec::is_empty)
    }

    /// Category of the first non-empty result in `order`.
    pub fn first_match(&self, order: &[ContentCategory]) -> Option<(ContentCategory, &CandidateRecord)> {
        order
            .iter()
            .find_map(|c| self.get(*c).first().map(|record| (*c, record)))
    }

    /// French name of the first record of the first non-empty category.
    ///
    /// Later categories are not consulted when that record has no French
    /// name.
    pub fn french_name(&self, order: &[ContentCategory]) -> Option<&str> {
        let (_, record) = self.first_match(order)?;
        record.name_fr.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
