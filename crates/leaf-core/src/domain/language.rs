//! Display languages and the host system-language enumeration.
//!
//! The host reports its configured language as a *numeric language code*:
//! the ASCII bytes of a locale tag such as `en-US` packed little-endian into a
//! `u64` and zero padded.  [`SystemLanguage::from_language_code`] unpacks that
//! value and [`Language::from_system`] folds the eighteen host languages onto
//! the handful of translations the application ships.

/// A translation shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    German,
    French,
    Italian,
    Dutch,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::German,
        Language::French,
        Language::Italian,
        Language::Dutch,
    ];

    /// Two-letter code used in the settings document (`customLanguage`).
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::German => "de",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Dutch => "nl",
        }
    }

    /// Looks up a language by its two-letter code.  Returns `None` for codes
    /// the application has no translation for.
    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Maps a host language onto the closest shipped translation.
    pub fn from_system(sys: SystemLanguage) -> Language {
        match sys {
            SystemLanguage::AmericanEnglish | SystemLanguage::BritishEnglish => Language::English,
            SystemLanguage::French | SystemLanguage::CanadianFrench => Language::French,
            SystemLanguage::German => Language::German,
            SystemLanguage::Italian => Language::Italian,
            SystemLanguage::Spanish | SystemLanguage::LatinAmericanSpanish => Language::Spanish,
            SystemLanguage::Dutch => Language::Dutch,
            _ => Language::English,
        }
    }
}

/// Languages the host can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemLanguage {
    Japanese,
    AmericanEnglish,
    French,
    German,
    Italian,
    Spanish,
    Chinese,
    Korean,
    Dutch,
    Portuguese,
    Russian,
    Taiwanese,
    BritishEnglish,
    CanadianFrench,
    LatinAmericanSpanish,
    SimplifiedChinese,
    TraditionalChinese,
    BrazilianPortuguese,
}

impl SystemLanguage {
    /// Every host language, in the host's own enumeration order.
    pub const ALL: [SystemLanguage; 18] = [
        SystemLanguage::Japanese,
        SystemLanguage::AmericanEnglish,
        SystemLanguage::French,
        SystemLanguage::German,
        SystemLanguage::Italian,
        SystemLanguage::Spanish,
        SystemLanguage::Chinese,
        SystemLanguage::Korean,
        SystemLanguage::Dutch,
        SystemLanguage::Portuguese,
        SystemLanguage::Russian,
        SystemLanguage::Taiwanese,
        SystemLanguage::BritishEnglish,
        SystemLanguage::CanadianFrench,
        SystemLanguage::LatinAmericanSpanish,
        SystemLanguage::SimplifiedChinese,
        SystemLanguage::TraditionalChinese,
        SystemLanguage::BrazilianPortuguese,
    ];

    /// Locale tag the host uses for this language.
    pub fn tag(self) -> &'static str {
        match self {
            SystemLanguage::Japanese => "ja",
            SystemLanguage::AmericanEnglish => "en-US",
            SystemLanguage::French => "fr",
            SystemLanguage::German => "de",
            SystemLanguage::Italian => "it",
            SystemLanguage::Spanish => "es",
            SystemLanguage::Chinese => "zh-CN",
            SystemLanguage::Korean => "ko",
            SystemLanguage::Dutch => "nl",
            SystemLanguage::Portuguese => "pt",
            SystemLanguage::Russian => "ru",
            SystemLanguage::Taiwanese => "zh-TW",
            SystemLanguage::BritishEnglish => "en-GB",
            SystemLanguage::CanadianFrench => "fr-CA",
            SystemLanguage::LatinAmericanSpanish => "es-419",
            SystemLanguage::SimplifiedChinese => "zh-Hans",
            SystemLanguage::TraditionalChinese => "zh-Hant",
            SystemLanguage::BrazilianPortuguese => "pt-BR",
        }
    }

    /// Looks up a host language by its exact locale tag.
    pub fn from_tag(tag: &str) -> Option<SystemLanguage> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }

    /// Numeric language code for this language (the packed locale tag).
    pub fn language_code(self) -> u64 {
        pack_tag(self.tag())
    }

    /// Converts the host's numeric language code into a [`SystemLanguage`].
    ///
    /// Returns `None` when the code does not unpack to a known locale tag.
    pub fn from_language_code(code: u64) -> Option<SystemLanguage> {
        let bytes = code.to_le_bytes();
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let tag = std::str::from_utf8(&bytes[..len]).ok()?;
        Self::from_tag(tag)
    }
}

/// Packs up to eight ASCII bytes of `tag` little-endian into a `u64`.
///
/// Tags longer than eight bytes are truncated; none of the host's tags are.
pub fn pack_tag(tag: &str) -> u64 {
    let mut bytes = [0u8; 8];
    for (dst, src) in bytes.iter_mut().zip(tag.bytes()) {
        *dst = src;
    }
    u64::from_le_bytes(bytes)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
