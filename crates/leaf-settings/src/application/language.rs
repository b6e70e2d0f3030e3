//! LanguageResolver: the effective display language.
//!
//! The host's language is queried exactly once, when the resolver is built at
//! startup, and held by the resolver from then on.  Passing the resolver
//! around explicitly (instead of caching the host answer in a global) keeps
//! start-up order obvious and lets tests pin any language with
//! [`LanguageResolver::with_default`].

use leaf_core::{Language, Settings, SystemLanguage};
use thiserror::Error;
use tracing::info;

/// Error type for host language detection.
///
/// Either variant is fatal: the application cannot pick its strings without
/// a language.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The host could not report its language.
    #[error("host language query failed: {0}")]
    Query(String),

    /// The host reported a language code no [`SystemLanguage`] matches.
    #[error("host reported unknown language code {0:#018x}")]
    UnknownLanguage(u64),
}

/// Host port reporting the configured system language.
#[cfg_attr(test, mockall::automock)]
pub trait SystemLocale: Send + Sync {
    /// Returns the numeric language code (packed locale tag).
    fn language_code(&self) -> Result<u64, LocaleError>;
}

/// Resolves the language the UI should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageResolver {
    default: Language,
}

impl LanguageResolver {
    /// Queries `locale` once and remembers the matching translation.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the query fails or the reported code is not
    /// a known system language.
    pub fn detect(locale: &dyn SystemLocale) -> Result<Self, LocaleError> {
        let code = locale.language_code()?;
        let sys = SystemLanguage::from_language_code(code).ok_or(LocaleError::UnknownLanguage(code))?;
        let default = Language::from_system(sys);
        info!("host language is {} ({default:?})", sys.tag());
        Ok(Self { default })
    }

    /// A resolver whose host default is fixed to `default`.
    pub fn with_default(default: Language) -> Self {
        Self { default }
    }

    /// The language derived from the host.
    pub fn default_language(&self) -> Language {
        self.default
    }

    /// The user's custom language if configured, otherwise the host default.
    pub fn resolve(&self, settings: &Settings) -> Language {
        settings.custom_language.unwrap_or(self.default)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
