use serde::{Deserialize, Serialize};

pub const ONE_DAY_SECONDS: u64 = 86_400;
pub const TWELVE_HOURS_SECONDS: u64 = 43_200;
pub const TWO_DAYS_SECONDS: u64 = 172_800;

/// Layout constants shared by every card kind.
///
/// All values are in SVG user units (px). The defaults give the classic card geometry:
/// a 287px wide card, 25px rows and a 45px chrome band (title + bottom padding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardConfig {
    /// Lower bound for the computed minimum width.
    pub min_width: f64,
    /// Width used when the caller does not request one. It is not a floor: a requested width may
    /// be narrower, down to the computed minimum width.
    pub default_width: f64,
    /// Horizontal padding added to twice the measured title width.
    pub title_padding: f64,
    /// Extra width reserved for the icon column (16px glyph + 1px gap).
    pub icon_allowance: f64,
    /// Height of the frame around the rows, including the title band.
    pub fixed_chrome: f64,
    /// Height allotted to the title; removed from the chrome when the title is hidden.
    pub title_height: f64,
    pub line_height: f64,
    pub min_line_height: f64,
    pub max_line_height: f64,
    pub border_radius: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    /// Font size used when estimating the title width.
    pub title_measure_font_size: f64,
    /// Base x-shift of the value column.
    pub value_shift: f64,
    /// Extra x-shift applied for long-form locales.
    pub long_locale_value_shift: f64,
    pub label_x_with_icon: f64,
    pub value_x_with_icon: f64,
    pub value_x_without_icon: f64,
    pub stagger_step_ms: u32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            min_width: 287.0,
            default_width: 287.0,
            title_padding: 50.0,
            icon_allowance: 17.0,
            fixed_chrome: 45.0,
            title_height: 30.0,
            line_height: 25.0,
            min_line_height: 10.0,
            max_line_height: 100.0,
            border_radius: 4.5,
            padding_x: 25.0,
            padding_y: 35.0,
            title_measure_font_size: 10.0,
            value_shift: 79.01,
            long_locale_value_shift: 50.0,
            label_x_with_icon: 25.0,
            value_x_with_icon: 140.0,
            value_x_without_icon: 120.0,
            stagger_step_ms: 150,
        }
    }
}

impl CardConfig {
    /// Chrome height for a card with or without its title band.
    pub fn chrome_height(&self, hide_title: bool) -> f64 {
        if hide_title {
            (self.fixed_chrome - self.title_height).max(0.0)
        } else {
            self.fixed_chrome
        }
    }

    pub fn clamp_line_height(&self, requested: Option<f64>) -> f64 {
        requested
            .filter(|v| v.is_finite())
            .unwrap_or(self.line_height)
            .max(self.min_line_height)
            .min(self.max_line_height)
    }
}

/// Cache lifetime bounds applied at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    pub default_seconds: u64,
    pub min_seconds: u64,
    pub max_seconds: u64,
    pub stale_while_revalidate: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_seconds: ONE_DAY_SECONDS,
            min_seconds: TWELVE_HOURS_SECONDS,
            max_seconds: TWO_DAYS_SECONDS,
            stale_while_revalidate: ONE_DAY_SECONDS,
        }
    }
}

impl CacheConfig {
    pub fn clamp(&self, seconds: u64) -> u64 {
        let min = self.min_seconds.min(self.max_seconds);
        seconds.clamp(min, self.max_seconds)
    }
}
