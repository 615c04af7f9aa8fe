use crate::config::CardConfig;
use crate::locale::Locale;
use crate::number::NumberFormat;
use crate::stats::leading_integer;
use crate::theme::{ColorOverrides, Theme};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// User-facing card options, already normalized.
///
/// Raw request values go through [`CardOptions::from_query`]; malformed input never fails, it
/// falls back to the documented default for that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    pub show_icons: bool,
    pub hide_title: bool,
    pub hide_border: bool,
    pub text_bold: bool,
    pub disable_animations: bool,
    /// Requested width; `None` selects the configured default.
    pub card_width: Option<f64>,
    /// Requested row height; clamped by [`CardConfig::clamp_line_height`].
    pub line_height: Option<f64>,
    pub border_radius: Option<f64>,
    pub theme: Theme,
    pub colors: ColorOverrides,
    pub custom_title: Option<String>,
    pub number_format: NumberFormat,
    pub locale: Option<Locale>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            show_icons: false,
            hide_title: false,
            hide_border: false,
            text_bold: true,
            disable_animations: false,
            card_width: None,
            line_height: None,
            border_radius: None,
            theme: Theme::Default,
            colors: ColorOverrides::default(),
            custom_title: None,
            number_format: NumberFormat::Short,
            locale: None,
        }
    }
}

/// Decodes an `application/x-www-form-urlencoded` query string. Later keys win.
pub fn parse_query(query: &str) -> IndexMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Only the literal strings `true` / `false` are booleans.
pub fn parse_bool(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_int(raw: Option<&str>) -> Option<f64> {
    raw.and_then(leading_integer).map(|v| v as f64)
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl CardOptions {
    pub fn from_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: IndexMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let get = |key: &str| map.get(key).map(String::as_str);
        let defaults = Self::default();

        Self {
            show_icons: parse_bool(get("show_icons")).unwrap_or(defaults.show_icons),
            hide_title: parse_bool(get("hide_title")).unwrap_or(defaults.hide_title),
            hide_border: parse_bool(get("hide_border")).unwrap_or(defaults.hide_border),
            text_bold: parse_bool(get("text_bold")).unwrap_or(defaults.text_bold),
            disable_animations: parse_bool(get("disable_animations"))
                .unwrap_or(defaults.disable_animations),
            card_width: parse_int(get("card_width")).filter(|w| *w > 0.0),
            line_height: parse_int(get("line_height")),
            border_radius: parse_number(get("border_radius")).filter(|r| *r >= 0.0),
            theme: get("theme").map(Theme::from_name).unwrap_or_default(),
            colors: ColorOverrides {
                title: non_empty(get("title_color")),
                text: non_empty(get("text_color")),
                icon: non_empty(get("icon_color")),
                background: non_empty(get("bg_color")),
                border: non_empty(get("border_color")),
            },
            custom_title: non_empty(get("custom_title")),
            number_format: get("number_format")
                .map(NumberFormat::parse)
                .unwrap_or_default(),
            locale: get("locale").and_then(Locale::parse),
        }
    }

    pub fn from_query_str(query: &str) -> Self {
        Self::from_query(parse_query(query))
    }

    pub fn effective_line_height(&self, config: &CardConfig) -> f64 {
        config.clamp_line_height(self.line_height)
    }

    pub fn effective_border_radius(&self, config: &CardConfig) -> f64 {
        self.border_radius.unwrap_or(config.border_radius)
    }
}
