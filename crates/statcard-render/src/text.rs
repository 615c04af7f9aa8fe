use serde::{Deserialize, Serialize};
use statcard_core::Locale;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    /// Hint used to pick the fallback width of characters outside the advance table.
    pub locale: Option<Locale>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            locale: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Average advance of the table below, used for characters it does not cover.
pub const AVERAGE_ADVANCE_EM: f64 = 0.5279276315789471;

/// Advance widths (em) of printable ASCII, `' '..='~'`, calibrated against a Helvetica-like
/// sans-serif. These are tuning constants for card sizing, not real font metrics.
#[rustfmt::skip]
const ASCII_ADVANCE_EM: [f64; 95] = [
    // ' '        '!'        '"'        '#'        '$'        '%'        '&'        '\''
    0.2796875, 0.2765625, 0.3546875, 0.5546875, 0.5546875, 0.8890625, 0.665625,  0.190625,
    // '('        ')'        '*'        '+'        ','        '-'        '.'        '/'
    0.3328125, 0.3328125, 0.3890625, 0.5828125, 0.2765625, 0.3328125, 0.2765625, 0.3015625,
    // '0'..='9'
    0.5546875, 0.5546875, 0.5546875, 0.5546875, 0.5546875, 0.5546875, 0.5546875, 0.5546875,
    0.5546875, 0.5546875,
    // ':'        ';'        '<'        '='        '>'        '?'        '@'
    0.2765625, 0.2765625, 0.584375,  0.5828125, 0.584375,  0.5546875, 1.0140625,
    // 'A'..='Z'
    0.665625,  0.665625,  0.721875,  0.721875,  0.665625,  0.609375,  0.7765625, 0.721875,
    0.2765625, 0.5,       0.665625,  0.5546875, 0.8328125, 0.721875,  0.7765625, 0.665625,
    0.7765625, 0.721875,  0.665625,  0.609375,  0.721875,  0.665625,  0.94375,   0.665625,
    0.665625,  0.609375,
    // '['        '\\'       ']'        '^'        '_'        '`'
    0.2765625, 0.3546875, 0.2765625, 0.4765625, 0.5546875, 0.3328125,
    // 'a'..='z'
    0.5546875, 0.5546875, 0.5,       0.5546875, 0.5546875, 0.2765625, 0.5546875, 0.5546875,
    0.221875,  0.240625,  0.5,       0.221875,  0.8328125, 0.5546875, 0.5546875, 0.5546875,
    0.5546875, 0.3328125, 0.5,       0.2765625, 0.5546875, 0.5,       0.721875,  0.5,
    0.5,       0.5,
    // '{'        '|'        '}'        '~'
    0.3546875, 0.259375,  0.353125,  0.5890625,
];

/// Advance of a single character in em.
///
/// Control and zero-width characters take no space; East-Asian wide characters take a full em.
/// Anything else outside the ASCII table uses `fallback_em`.
pub fn char_advance_em(ch: char, fallback_em: f64) -> f64 {
    if (' '..='~').contains(&ch) {
        return ASCII_ADVANCE_EM[(ch as usize) - 0x20];
    }
    if ch.is_control() {
        return 0.0;
    }
    match ch.width() {
        None | Some(0) => 0.0,
        Some(2) => 1.0,
        _ => fallback_em,
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    /// Fallback advance for uncovered characters; `0.0` selects [`AVERAGE_ADVANCE_EM`].
    pub fallback_width_em: f64,
    pub line_height_factor: f64,
}

impl DeterministicTextMeasurer {
    fn fallback_em(&self, style: &TextStyle) -> f64 {
        if style.locale.as_ref().is_some_and(Locale::is_cjk) {
            return 1.0;
        }
        if self.fallback_width_em == 0.0 {
            AVERAGE_ADVANCE_EM
        } else {
            self.fallback_width_em
        }
    }

    pub fn line_width_px(&self, line: &str, style: &TextStyle) -> f64 {
        let fallback = self.fallback_em(style);
        let em: f64 = line.chars().map(|ch| char_advance_em(ch, fallback)).sum();
        em * style.font_size.max(0.0)
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let line_height_factor = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };

        let lines = text.split('\n').collect::<Vec<_>>();
        let width = lines
            .iter()
            .map(|line| self.line_width_px(line, style))
            .fold(0.0, f64::max);
        let height = lines.len() as f64 * style.font_size.max(0.0) * line_height_factor;
        TextMetrics {
            width,
            height,
            line_count: lines.len(),
        }
    }
}

/// Estimated single-line width in px using the default measurer.
pub fn measure_text(text: &str, font_size: f64, locale: Option<&Locale>) -> f64 {
    let style = TextStyle {
        font_size,
        locale: locale.cloned(),
    };
    DeterministicTextMeasurer::default()
        .measure(text, &style)
        .width
}

#[cfg(test)]
mod tests;
