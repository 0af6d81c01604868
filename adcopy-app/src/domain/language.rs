use serde::{Deserialize, Serialize};

/// Languages the generator can be asked to write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "de-ch")]
    SwissGerman,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh-cn")]
    SimplifiedChinese,
    #[serde(rename = "zh-tw")]
    TraditionalChinese,
}

impl Language {
    pub const ALL: [Language; 14] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::SwissGerman,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Polish,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::SwissGerman => "de-ch",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Dutch => "nl",
            Self::Polish => "pl",
            Self::Russian => "ru",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::SimplifiedChinese => "zh-cn",
            Self::TraditionalChinese => "zh-tw",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::SwissGerman => "Swiss German",
            Self::Italian => "Italian",
            Self::Portuguese => "Portuguese",
            Self::Dutch => "Dutch",
            Self::Polish => "Polish",
            Self::Russian => "Russian",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::SimplifiedChinese => "Simplified Chinese",
            Self::TraditionalChinese => "Traditional Chinese",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Resolves a user-supplied code, falling back to English for anything
    /// outside the catalog.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fourteen_unique_codes() {
        let mut codes: Vec<_> = Language::ALL.iter().map(Language::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 14);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Language::from_code("ZH-TW"), Some(Language::TraditionalChinese));
        assert_eq!(Language::from_code("de-CH"), Some(Language::SwissGerman));
    }

    #[test]
    fn unknown_code_resolves_to_english() {
        assert_eq!(Language::resolve("klingon"), Language::English);
        assert_eq!(Language::resolve(""), Language::English);
        assert_eq!(Language::resolve("klingon").display_name(), "English");
    }

    #[test]
    fn serde_uses_codes() {
        let lang: Language = serde_json::from_str("\"zh-cn\"").unwrap();
        assert_eq!(lang, Language::SimplifiedChinese);
        assert_eq!(serde_json::to_string(&Language::Dutch).unwrap(), "\"nl\"");
    }
}
