use dofus_linker_core::{ContentCategory, Linker, LookupResults, PageKind, UrlVariants, search_order};
use futures::future::join_all;
use serde::Serialize;

use crate::client::DofusDbClient;

/// Search every category for an English name.
///
/// Categories are queried concurrently. A category whose request fails is
/// logged and left out; an empty result set is not an error.
pub async fn fetch_all_content(client: &DofusDbClient, english_name: &str) -> LookupResults {
    let searches = ContentCategory::ALL.map(|category| async move {
        (category, client.search(category, english_name).await)
    });

    let mut results = LookupResults::new();
    for (category, outcome) in join_all(searches).await {
        match outcome {
            Ok(records) if records.is_empty() => {}
            Ok(records) => {
                log::debug!(
                    "Found {} in {}: {:?}",
                    english_name,
                    category,
                    records[0].name_fr
                );
                results.insert(category, records);
            }
            Err(e) => log::warn!("Lookup in {} failed for '{}': {}", category, english_name, e),
        }
    }
    results
}

/// French name of an English one, searching the page kind's own category first.
pub async fn resolve_french_name(
    client: &DofusDbClient,
    english_name: &str,
    kind: PageKind,
) -> Option<String> {
    let results = fetch_all_content(client, english_name).await;
    results
        .french_name(&search_order(kind))
        .map(str::to_string)
}

/// Outcome of resolving an English name all the way to URLs.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedName {
    pub english: String,
    /// `None` when no category had a French name.
    pub french: Option<String>,
    pub urls: UrlVariants,
}

impl ResolvedName {
    /// The name the URLs were generated from.
    pub fn slug_input(&self) -> &str {
        self.french.as_deref().unwrap_or(&self.english)
    }
}

/// Resolve the French name, then generate URLs from it. Without a French
/// name the English one is used as is.
pub async fn resolve_urls(
    client: &DofusDbClient,
    linker: &Linker,
    english_name: &str,
    kind: PageKind,
) -> ResolvedName {
    let french = resolve_french_name(client, english_name, kind).await;
    if french.is_none() {
        log::warn!(
            "No French name found for '{}', using it unchanged",
            english_name
        );
    }
    let urls = linker.generate(french.as_deref().unwrap_or(english_name));
    ResolvedName {
        english: english_name.to_string(),
        french,
        urls,
    }
}
