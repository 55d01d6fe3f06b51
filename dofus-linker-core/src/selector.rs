//! Choosing which slug variant to try first.
//!
//! Neither encoding is right for every page, so the [`Linker`](crate::Linker)
//! always produces both URLs and asks a [`VariantPolicy`] which one should be
//! the primary. The default [`HeuristicPolicy`] looks at the accented letters
//! of the display name.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LinkerError;
use crate::slug::SlugVariant;

/// Decides whether the entity-encoded slug should be tried first.
pub trait VariantPolicy: Send + Sync + std::fmt::Debug {
    /// `true` when the entity slug is the better first guess for `name`.
    fn prefers_entity(&self, name: &str) -> bool;

    /// Variant to use for the primary URL.
    fn primary_variant(&self, name: &str) -> SlugVariant {
        if self.prefers_entity(name) {
            SlugVariant::Entity
        } else {
            SlugVariant::Normalized
        }
    }
}

/// Always prefer the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedPolicy {
    Normalized,
    Entity,
}

impl VariantPolicy for FixedPolicy {
    fn prefers_entity(&self, _name: &str) -> bool {
        matches!(self, FixedPolicy::Entity)
    }
}

// ---------------------------------------------------------------------------
// Heuristic rules
// ---------------------------------------------------------------------------

/// Accented letters the heuristic counts.
const ACCENTED: &str = "àâäéèêëïîôöùûüç";

/// Letters whose presence alone selects the entity slug.
const RARE_LETTERS: &[char] = &['î', 'Î'];

/// Letter pairs that select the entity slug when both are present.
const LETTER_PAIRS: &[(char, char)] = &[('à', 'é'), ('è', 'ê'), ('â', 'ä')];

/// Substrings of the lowercased name that select the entity slug.
const MARKERS: &[&str] = &["kwismas", "énigme", "épreuve"];

/// Names matching these live at plain-ASCII addresses despite their accents.
const BUILTIN_EXCEPTIONS: &[&str] = &[
    r"(?i)^apprentissage\s*:",
    r"(?i)(^|[^\w])(c|d|j|l|m|n|qu|s|t)'\w",
];

static SPACED_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[?!]|[?!]\s").expect("static pattern"));

/// The literals the heuristic runs on.
///
/// Both exception lists start with the builtin patterns; settings can append
/// to either one without touching the rule order.
#[derive(Debug, Clone)]
pub struct SelectorRules {
    pub rare_letters: Vec<char>,
    pub accented: Vec<char>,
    pub letter_pairs: Vec<(char, char)>,
    pub markers: Vec<String>,
    /// Checked when a name has several accents of several kinds.
    pub multi_accent_exceptions: Vec<Regex>,
    /// Checked when a name has a single `é` or `è`.
    pub single_accent_exceptions: Vec<Regex>,
}

impl Default for SelectorRules {
    fn default() -> Self {
        let builtin: Vec<Regex> = BUILTIN_EXCEPTIONS
            .iter()
            .map(|p| Regex::new(p).expect("static pattern"))
            .collect();
        Self {
            rare_letters: RARE_LETTERS.to_vec(),
            accented: ACCENTED.chars().collect(),
            letter_pairs: LETTER_PAIRS.to_vec(),
            markers: MARKERS.iter().map(|m| m.to_string()).collect(),
            multi_accent_exceptions: builtin.clone(),
            single_accent_exceptions: builtin,
        }
    }
}

impl SelectorRules {
    /// Default rules plus extra exception patterns.
    pub fn with_exceptions<S: AsRef<str>>(multi: &[S], single: &[S]) -> Result<Self, LinkerError> {
        let mut rules = Self::default();
        rules.multi_accent_exceptions.extend(compile_all(multi)?);
        rules.single_accent_exceptions.extend(compile_all(single)?);
        Ok(rules)
    }
}

fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>, LinkerError> {
    patterns
        .iter()
        .map(|p| {
            let p = p.as_ref();
            Regex::new(p).map_err(|e| LinkerError::invalid_pattern(p, e))
        })
        .collect()
}

fn is_excepted(exceptions: &[Regex], name: &str) -> bool {
    exceptions.iter().any(|re| re.is_match(name))
}

/// The ordered rule chain; the first rule that applies decides.
///
/// 1. a rare letter (`î`) → entity
/// 2. two or more accents of two or more kinds → entity, unless excepted
/// 3. exactly one accent, `é` or `è` → entity, unless excepted
/// 4. `à`+`é`, `è`+`ê` or `â`+`ä` together → entity
/// 5. a marker word (`kwismas`, `énigme`, `épreuve`) → entity
/// 6. `?` or `!` next to whitespace → entity
/// 7. otherwise normalized
#[derive(Debug, Clone, Default)]
pub struct HeuristicPolicy {
    rules: SelectorRules,
}

impl HeuristicPolicy {
    pub fn new(rules: SelectorRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SelectorRules {
        &self.rules
    }
}

impl VariantPolicy for HeuristicPolicy {
    fn prefers_entity(&self, name: &str) -> bool {
        let rules = &self.rules;

        if name.chars().any(|c| rules.rare_letters.contains(&c)) {
            return true;
        }

        let lower = name.to_lowercase();
        let accents: Vec<char> = lower.chars().filter(|c| rules.accented.contains(c)).collect();
        let kinds = accents.iter().collect::<HashSet<_>>().len();

        if accents.len() >= 2 && kinds >= 2 {
            return !is_excepted(&rules.multi_accent_exceptions, name);
        }

        if let [only @ ('é' | 'è')] = accents.as_slice() {
            log::trace!("Selector: single accent '{}' in '{}'", only, name);
            return !is_excepted(&rules.single_accent_exceptions, name);
        }

        if rules
            .letter_pairs
            .iter()
            .any(|(a, b)| lower.contains(*a) && lower.contains(*b))
        {
            return true;
        }

        if rules.markers.iter().any(|m| lower.contains(m.as_str())) {
            return true;
        }

        SPACED_PUNCTUATION_RE.is_match(name)
    }
}

#[cfg(test)]
#[path = "tests/selector_tests.rs"]
mod tests;
