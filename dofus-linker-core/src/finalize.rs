//! Shared post-processing for both slug variants.

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]+").expect("static pattern"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

static HYPHEN_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{3,}").expect("static pattern"));

/// Turn a transformed name into a URL path segment.
///
/// 1. `?` becomes a space so the words around it stay apart
/// 2. anything but `a-z`, digits, whitespace and `-` is deleted
/// 3. three spaces in a row become `--`
/// 4. remaining whitespace runs become `-`
/// 5. runs of three or more hyphens shrink to `--`
/// 6. leading and trailing hyphens are trimmed
///
/// The result is empty or matches `[a-z0-9]([a-z0-9-]*[a-z0-9])?`, and
/// finalizing it again is a no-op.
///
/// ```
/// use dofus_linker_core::finalize;
///
/// assert_eq!(finalize("une enquete - investigation"), "une-enquete--investigation");
/// assert_eq!(finalize("ou est la 7e compagnie ?"), "ou-est-la-7e-compagnie");
/// ```
pub fn finalize(text: &str) -> String {
    let spaced = text.replace('?', " ");
    let cleaned = DISALLOWED_RE.replace_all(&spaced, "");
    let gaps = cleaned.replace("   ", "--");
    let hyphenated = WHITESPACE_RE.replace_all(&gaps, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "--");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
#[path = "tests/finalize_tests.rs"]
mod tests;
