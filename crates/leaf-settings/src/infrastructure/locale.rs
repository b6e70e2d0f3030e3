//! Host locale adapters.
//!
//! On a development machine the system language comes from the POSIX locale
//! variables (`LC_ALL`, then `LC_MESSAGES`, then `LANG`).  A value such as
//! `fr_CA.UTF-8` becomes the locale tag `fr-CA`, which is matched against the
//! host languages exactly, then by its primary subtag.  A well-formed locale
//! the console has no language for (`sv_SE`, `pl_PL`) selects American
//! English, the same fallback the UI uses for untranslated languages.

use std::env::VarError;

use leaf_core::SystemLanguage;
use tracing::warn;

use crate::application::language::{LocaleError, SystemLocale};

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reads the system language from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocale;

impl EnvLocale {
    /// Matches a POSIX locale value to a host language.
    ///
    /// `None`, `C`, and `POSIX` select American English, and so does any
    /// locale with no matching host language.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Query`] if the value is not a locale name at all
    /// (its language part is not two or three ASCII letters).
    pub fn parse(value: Option<&str>) -> Result<SystemLanguage, LocaleError> {
        let raw = match value.map(str::trim) {
            None | Some("") | Some("C") | Some("POSIX") => return Ok(SystemLanguage::AmericanEnglish),
            Some(raw) => raw,
        };

        // Drop the encoding and modifier: `de_DE.UTF-8@euro` -> `de_DE`.
        let name = raw.split(['.', '@']).next().unwrap_or(raw);
        let tag = name.replace('_', "-");
        let primary = tag.split('-').next().unwrap_or(&tag);

        let is_language = (2..=3).contains(&primary.len())
            && primary.bytes().all(|b| b.is_ascii_alphabetic());
        if !is_language {
            return Err(LocaleError::Query(format!("unreadable locale {raw:?}")));
        }

        let matched = SystemLanguage::from_tag(&tag)
            .or_else(|| SystemLanguage::from_tag(primary))
            .or(match primary {
                "en" => Some(SystemLanguage::AmericanEnglish),
                "zh" => Some(SystemLanguage::Chinese),
                _ => None,
            });
        Ok(matched.unwrap_or_else(|| {
            warn!("no host language for locale {raw:?}, using en-US");
            SystemLanguage::AmericanEnglish
        }))
    }
}

impl SystemLocale for EnvLocale {
    fn language_code(&self) -> Result<u64, LocaleError> {
        let mut value = None;
        for var in LOCALE_VARS {
            match std::env::var(var) {
                Ok(v) if !v.is_empty() => {
                    value = Some(v);
                    break;
                }
                Ok(_) | Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => {
                    return Err(LocaleError::Query(format!("{var} is not valid UTF-8")));
                }
            }
        }
        Ok(Self::parse(value.as_deref())?.language_code())
    }
}

/// A locale that always reports the same language code.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocale(pub u64);

impl FixedLocale {
    pub fn new(lang: SystemLanguage) -> Self {
        Self(lang.language_code())
    }
}

impl SystemLocale for FixedLocale {
    fn language_code(&self) -> Result<u64, LocaleError> {
        Ok(self.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unset_or_c_locale_is_american_english() {
        for value in [None, Some(""), Some("C"), Some("POSIX")] {
            assert_eq!(EnvLocale::parse(value).unwrap(), SystemLanguage::AmericanEnglish);
        }
    }

    #[test]
    fn test_parse_exact_region_match() {
        assert_eq!(EnvLocale::parse(Some("en_GB.UTF-8")).unwrap(), SystemLanguage::BritishEnglish);
        assert_eq!(EnvLocale::parse(Some("fr_CA")).unwrap(), SystemLanguage::CanadianFrench);
        assert_eq!(EnvLocale::parse(Some("pt_BR.utf8")).unwrap(), SystemLanguage::BrazilianPortuguese);
    }

    #[test]
    fn test_parse_falls_back_to_primary_subtag() {
        assert_eq!(EnvLocale::parse(Some("de_AT.UTF-8@euro")).unwrap(), SystemLanguage::German);
        assert_eq!(EnvLocale::parse(Some("nl_BE")).unwrap(), SystemLanguage::Dutch);
        assert_eq!(EnvLocale::parse(Some("en_AU.UTF-8")).unwrap(), SystemLanguage::AmericanEnglish);
    }

    #[test]
    fn test_parse_locale_without_host_language_falls_back_to_american_english() {
        for value in ["sv_SE.UTF-8", "pl_PL.UTF-8", "fi_FI", "tlh"] {
            assert_eq!(
                EnvLocale::parse(Some(value)).unwrap(),
                SystemLanguage::AmericanEnglish,
                "locale {value}"
            );
        }
    }

    #[test]
    fn test_parse_unreadable_locale_is_error() {
        for value in ["x", "1234_56", "e5_US.UTF-8", "?"] {
            assert!(
                matches!(EnvLocale::parse(Some(value)), Err(LocaleError::Query(_))),
                "locale {value}"
            );
        }
    }

    #[test]
    fn test_fixed_locale_reports_its_code() {
        let locale = FixedLocale::new(SystemLanguage::Italian);
        let code = locale.language_code().unwrap();
        assert_eq!(SystemLanguage::from_language_code(code), Some(SystemLanguage::Italian));
    }
}
