//! English → French name resolution against the DofusDB content API.
//!
//! The guide site is French, but the in-game encyclopedia a name is read from
//! may be in English. Each content category is searched by English name and
//! the French name of the best hit feeds the slug pipeline.

pub mod client;
pub mod error;
pub mod lookup;
pub mod types;

pub use client::DofusDbClient;
pub use error::LookupError;
pub use lookup::{fetch_all_content, resolve_french_name, resolve_urls, ResolvedName};
