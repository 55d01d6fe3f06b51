//! The two slug builders.
//!
//! The guide site has pages from two eras. Older pages fold accented letters
//! to plain ASCII (`é` → `e`); newer ones spell them as HTML entity names
//! without the `&`/`;` (`é` → `eacute`). Both builders share the punctuation
//! handling below and differ in how apostrophes and accents are rewritten.
//!
//! ```text
//! lowercase ─► drop , ! ─► apprentissage prefix ─► colons ─► apostrophes ─► accents ─► finalize
//! ```

use serde::Serialize;

use crate::finalize::finalize;
use crate::pattern::{ApostrophePattern, detect_pattern};

/// Which encoding of accented letters a slug uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugVariant {
    /// Accents folded to plain letters: `forêt` → `foret`.
    Normalized,
    /// Accents spelled as entity names: `forêt` → `forecirct`.
    Entity,
}

impl SlugVariant {
    /// The other variant.
    pub fn other(self) -> Self {
        match self {
            SlugVariant::Normalized => SlugVariant::Entity,
            SlugVariant::Entity => SlugVariant::Normalized,
        }
    }
}

impl std::fmt::Display for SlugVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlugVariant::Normalized => write!(f, "normalized"),
            SlugVariant::Entity => write!(f, "entity"),
        }
    }
}

/// Both slugs of a name, plus the apostrophe pattern that shaped them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slugs {
    pub pattern: ApostrophePattern,
    pub normalized: String,
    pub entity: String,
}

impl Slugs {
    pub fn of(name: &str) -> Self {
        Self {
            pattern: detect_pattern(name),
            normalized: to_normalized_slug(name),
            entity: to_entity_slug(name),
        }
    }

    pub fn get(&self, variant: SlugVariant) -> &str {
        match variant {
            SlugVariant::Normalized => &self.normalized,
            SlugVariant::Entity => &self.entity,
        }
    }
}

/// Build one slug variant for a name.
pub fn build_slug(name: &str, variant: SlugVariant) -> String {
    match variant {
        SlugVariant::Normalized => to_normalized_slug(name),
        SlugVariant::Entity => to_entity_slug(name),
    }
}

/// Accented letters folded to ASCII.
const ASCII_FOLDS: &[(char, &str)] = &[
    ('œ', "oe"),
    ('é', "e"),
    ('è', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('à', "a"),
    ('â', "a"),
    ('ä', "a"),
    ('î', "i"),
    ('ï', "i"),
    ('ô', "o"),
    ('ö', "o"),
    ('ù', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ç', "c"),
];

/// Accented letters spelled as their HTML entity name.
const ENTITY_NAMES: &[(char, &str)] = &[
    ('œ', "oelig"),
    ('é', "eacute"),
    ('è', "egrave"),
    ('ê', "ecirc"),
    ('ë', "euml"),
    ('à', "agrave"),
    ('â', "acirc"),
    ('ä', "auml"),
    ('î', "icirc"),
    ('ï', "iuml"),
    ('ô', "ocirc"),
    ('ö', "ouml"),
    ('ù', "ugrave"),
    ('û', "ucirc"),
    ('ü', "uuml"),
    ('ç', "ccedil"),
];

/// Slug with accents folded to plain ASCII letters.
///
/// ```
/// use dofus_linker_core::to_normalized_slug;
///
/// assert_eq!(to_normalized_slug("Épreuve du Zobal"), "epreuve-du-zobal");
/// assert_eq!(to_normalized_slug("L'Œil de Forfut"), "l-oeil-de-forfut");
/// ```
pub fn to_normalized_slug(name: &str) -> String {
    let pattern = detect_pattern(name);
    let prepared = prepare(&name.to_lowercase(), pattern);
    let without_apostrophes = match pattern {
        ApostrophePattern::KeepAllHyphens => apostrophes_keep_all(&prepared),
        ApostrophePattern::KeepDHyphenOnly => apostrophes_keep_d(&prepared),
        ApostrophePattern::ApprentissageDouble | ApostrophePattern::Standard => {
            apostrophes_standard(&prepared)
        }
    };
    finalize(&substitute(&without_apostrophes, ASCII_FOLDS))
}

/// Slug with accents spelled as entity names.
///
/// The apostrophe pattern only affects the `apprentissage` prefix here:
/// every `l'`, `d'` and `n'` loses its apostrophe without a hyphen.
///
/// ```
/// use dofus_linker_core::to_entity_slug;
///
/// assert_eq!(to_entity_slug("Épreuve du Zobal"), "eacutepreuve-du-zobal");
/// assert_eq!(to_entity_slug("L'Œil de Forfut"), "loeligil-de-forfut");
/// ```
pub fn to_entity_slug(name: &str) -> String {
    let pattern = detect_pattern(name);
    let prepared = prepare(&name.to_lowercase(), pattern);
    let without_apostrophes = apostrophes_entity(&prepared);
    finalize(&substitute(&without_apostrophes, ENTITY_NAMES))
}

// ── Shared steps ────────────────────────────────────────────────────────────

const APPRENTISSAGE_PREFIX: &str = "apprentissage : ";

/// Punctuation handling common to both variants. `lower` is already lowercased.
fn prepare(lower: &str, pattern: ApostrophePattern) -> String {
    let mut result = lower.replace([',', '!'], "");

    if let Some(rest) = result.strip_prefix(APPRENTISSAGE_PREFIX) {
        let joined = match pattern {
            ApostrophePattern::ApprentissageDouble => "apprentissage--",
            _ => "apprentissage-",
        };
        result = format!("{joined}{rest}");
    }

    result.replace(" : ", "--").replace(':', "-")
}

/// `c'est` and `p'ti` are written run together in every regime.
fn join_idioms(text: &str) -> String {
    let text = replace_word(text, "c'est", "cest", true);
    replace_word(&text, "p'ti", "pti", true)
}

fn apostrophes_keep_all(text: &str) -> String {
    join_idioms(text)
        .replace("l'", "l-")
        .replace("d'", "d-")
        .replace("m'", "m-")
        .replace("n'", "n-")
        .replace('\'', "")
}

/// `l'` keeps its hyphen at the start and after `de` / `à`; elsewhere it is
/// glued to the next word.
fn elide_articles(text: &str) -> String {
    let mut result = join_idioms(text);
    if let Some(rest) = result.strip_prefix("l'") {
        result = format!("l-{rest}");
    }
    result
        .replace(" de l'", " de l-")
        .replace(" à l'", " a l-")
        .replace(" l'", " l")
}

fn apostrophes_keep_d(text: &str) -> String {
    elide_articles(text)
        .replace("d'", "d-")
        .replace("n'", "n")
        .replace('\'', "")
}

fn apostrophes_standard(text: &str) -> String {
    let text = replace_word(&elide_articles(text), "d'", "d", false);
    text.replace("n'", "n").replace('\'', "")
}

fn apostrophes_entity(text: &str) -> String {
    let text = join_idioms(text).replace("l'", "l");
    let text = replace_word(&text, "d'", "d", false);
    text.replace("n'", "n").replace('\'', "")
}

fn substitute(text: &str, table: &[(char, &str)]) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    for c in text.chars() {
        match table.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace `needle` where it starts a word, and optionally also ends one.
/// Word characters are ASCII letters, digits and `_`, so `é` is a boundary.
fn replace_word(text: &str, needle: &str, replacement: &str, whole_word: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (idx, _) in text.match_indices(needle) {
        let end = idx + needle.len();
        let starts_word = text[..idx].chars().next_back().is_none_or(|c| !is_word_char(c));
        let ends_word = !whole_word || text[end..].chars().next().is_none_or(|c| !is_word_char(c));
        if starts_word && ends_word {
            out.push_str(&text[last..idx]);
            out.push_str(replacement);
            last = end;
        }
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;
