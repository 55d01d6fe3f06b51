//! Exact name → slug overrides.
//!
//! A hit in this table bypasses every heuristic: the stored slug is used
//! verbatim for both the primary and the fallback URL.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::exception_data::BUILTIN_EXCEPTIONS;

static BUILTIN: LazyLock<ExceptionTable> =
    LazyLock::new(|| ExceptionTable::from_entries(BUILTIN_EXCEPTIONS.iter().copied()));

/// A key that was asserted more than once with different slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub name: String,
    /// Slug that was overwritten.
    pub discarded: String,
    /// Slug that is now in effect.
    pub kept: String,
}

/// Case-insensitive mapping from French display names to known slugs.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    entries: HashMap<String, String>,
    duplicates: Vec<DuplicateKey>,
}

impl ExceptionTable {
    /// The curated table compiled into the crate.
    pub fn builtin() -> &'static ExceptionTable {
        &BUILTIN
    }

    /// Build a table from `(name, slug)` pairs. Names are lowercased; when a
    /// name repeats, the last slug wins and the conflict is recorded.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::default();
        table.extend(entries, true);
        table
    }

    /// Layer extra entries over a copy of this table. Replacing an existing
    /// slug here is intentional and is not recorded as a duplicate.
    pub fn with_overrides<I, K, V>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = self.clone();
        table.extend(entries, false);
        table
    }

    fn extend<I, K, V>(&mut self, entries: I, record_conflicts: bool)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, slug) in entries {
            let key = name.as_ref().to_lowercase();
            let slug = slug.into();
            let Some(previous) = self.entries.insert(key.clone(), slug.clone()) else {
                continue;
            };
            if previous == slug {
                continue;
            }
            if !record_conflicts {
                log::debug!("Exception table: '{}' overridden with '{}'", key, slug);
                continue;
            }
            log::warn!(
                "Exception table: '{}' maps to both '{}' and '{}'; keeping the last one",
                key,
                previous,
                slug,
            );
            self.duplicates.push(DuplicateKey {
                name: key,
                discarded: previous,
                kept: slug,
            });
        }
    }

    /// Look up the known slug for a name (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Keys that were asserted with conflicting slugs, in the order found.
    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs.into_iter()
    }
}
