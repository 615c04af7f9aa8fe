use serde::{Deserialize, Serialize};

/// Locales whose translated labels run wide enough to collide with the value column.
pub const LONG_FORM_LOCALES: &[&str] = &[
    "cn", "es", "fr", "pt-br", "ru", "uk-ua", "id", "ml", "my", "pl", "de", "nl", "zh-tw", "uz",
];

/// Locales whose text is set mostly in full-width glyphs.
pub const CJK_LOCALES: &[&str] = &["cn", "zh-tw", "ja", "kr"];

/// A normalized (trimmed, lower-cased) locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = raw.trim().to_ascii_lowercase();
        if tag.is_empty() { None } else { Some(Self(tag)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_long_form(&self) -> bool {
        LONG_FORM_LOCALES.contains(&self.0.as_str())
    }

    pub fn is_cjk(&self) -> bool {
        CJK_LOCALES.contains(&self.0.as_str())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_long_form(locale: Option<&Locale>) -> bool {
    locale.is_some_and(Locale::is_long_form)
}
