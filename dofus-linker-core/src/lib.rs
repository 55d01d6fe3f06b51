//! Slug generation for DofusPourLesNoobs guide links.
//!
//! Given the French display name of a game entity (quest, item, monster...),
//! this crate guesses the address of the matching guide page. The target site
//! is inconsistent about how it encodes names, so every lookup yields two
//! candidate URLs:
//!
//! ```text
//! name ─► exception table ──────────────────────────────► { primary, fallback }
//!           │ (miss)
//!           └─► pattern ─► normalized / entity slugs ─► selector ─► { primary, fallback }
//! ```
//!
//! Everything in the pipeline is a pure function of its input and static
//! tables, so a [`Linker`] can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use dofus_linker_core::generate_url_variants;
//!
//! let urls = generate_url_variants("Forêt enchantée");
//! assert_eq!(urls.primary, "https://www.dofuspourlesnoobs.com/forecirct-enchanteacutee.html");
//! assert_eq!(urls.fallback, "https://www.dofuspourlesnoobs.com/foret-enchantee.html");
//! ```

pub mod category;
pub mod error;
pub mod exceptions;
pub mod finalize;
pub mod pattern;
pub mod selector;
pub mod settings;
pub mod slug;
pub mod url;

mod exception_data;

pub use category::{CandidateRecord, ContentCategory, LookupResults, PageKind, search_order};
pub use error::LinkerError;
pub use exceptions::ExceptionTable;
pub use finalize::finalize;
pub use pattern::{ApostrophePattern, detect_pattern};
pub use selector::{FixedPolicy, HeuristicPolicy, SelectorRules, VariantPolicy};
pub use settings::Settings;
pub use slug::{SlugVariant, Slugs, build_slug, to_entity_slug, to_normalized_slug};
pub use url::{DEFAULT_BASE_URL, Linker, Resolution, UrlVariants, assemble_url, generate_url_variants};
