//! Assembling candidate page addresses.

use std::sync::{Arc, LazyLock};

use serde::Serialize;

use crate::exceptions::ExceptionTable;
use crate::selector::{HeuristicPolicy, VariantPolicy};
use crate::slug::{SlugVariant, Slugs};

/// Origin of the guide site.
pub const DEFAULT_BASE_URL: &str = "https://www.dofuspourlesnoobs.com";

static DEFAULT_LINKER: LazyLock<Linker> = LazyLock::new(Linker::default);

/// `{base}/{slug}.html`, tolerating a trailing slash on `base`.
pub fn assemble_url(base: &str, slug: &str) -> String {
    format!("{}/{}.html", base.trim_end_matches('/'), slug)
}

/// How the primary URL was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resolution {
    /// The name is in the exception table; both URLs are the stored slug.
    Exception,
    /// The selector picked `primary`; the fallback uses the other variant.
    Heuristic { primary: SlugVariant },
}

/// The two addresses to try, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlVariants {
    pub primary: String,
    pub fallback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub resolution: Resolution,
}

impl UrlVariants {
    /// Whether the slug came out empty, leaving a URL like `https://host/.html`.
    pub fn is_degenerate(&self) -> bool {
        self.primary.ends_with("/.html")
    }

    /// Primary first, then the fallback when it differs.
    pub fn candidates(&self) -> Vec<&str> {
        if self.primary == self.fallback {
            vec![self.primary.as_str()]
        } else {
            vec![self.primary.as_str(), self.fallback.as_str()]
        }
    }
}

/// The full name → URLs pipeline.
#[derive(Debug, Clone)]
pub struct Linker {
    base_url: String,
    exceptions: ExceptionTable,
    policy: Arc<dyn VariantPolicy>,
}

impl Default for Linker {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            ExceptionTable::builtin().clone(),
            Arc::new(HeuristicPolicy::default()),
        )
    }
}

impl Linker {
    pub fn new(
        base_url: impl Into<String>,
        exceptions: ExceptionTable,
        policy: Arc<dyn VariantPolicy>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            exceptions,
            policy,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn VariantPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_exceptions(mut self, exceptions: ExceptionTable) -> Self {
        self.exceptions = exceptions;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    /// Generate the primary and fallback URLs for a French display name.
    pub fn generate(&self, name: &str) -> UrlVariants {
        if let Some(slug) = self.exceptions.lookup(name) {
            log::debug!("Exception table hit for '{}': {}", name, slug);
            let url = assemble_url(&self.base_url, slug);
            return UrlVariants {
                primary: url.clone(),
                fallback: url,
                name: Some(name.to_string()),
                resolution: Resolution::Exception,
            };
        }

        let slugs = Slugs::of(name);
        let primary = self.policy.primary_variant(name);
        log::debug!(
            "'{}': pattern {}, {} first ({} / {})",
            name,
            slugs.pattern,
            primary,
            slugs.normalized,
            slugs.entity
        );

        UrlVariants {
            primary: assemble_url(&self.base_url, slugs.get(primary)),
            fallback: assemble_url(&self.base_url, slugs.get(primary.other())),
            name: Some(name.to_string()),
            resolution: Resolution::Heuristic { primary },
        }
    }
}

/// Run the default pipeline: builtin exceptions, heuristic selector and
/// [`DEFAULT_BASE_URL`].
pub fn generate_url_variants(name: &str) -> UrlVariants {
    DEFAULT_LINKER.generate(name)
}
