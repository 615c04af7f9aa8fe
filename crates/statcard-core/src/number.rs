use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// `12345` -> `12.3k`
    #[default]
    Short,
    /// `12345` -> `12345`
    Long,
}

impl NumberFormat {
    /// Anything other than a case-insensitive `long` selects [`NumberFormat::Short`].
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("long") {
            Self::Long
        } else {
            Self::Short
        }
    }
}

const UNITS: [(i128, &str); 2] = [(1_000, "k"), (1_000_000, "M")];

// Tenths of `value / divisor`, rounded half up.
fn tenths(value: i128, divisor: i128) -> i128 {
    (value * 10 + divisor / 2) / divisor
}

/// Formats a metric for display. Negative values normalize to `0`.
pub fn format_number(value: i64, format: NumberFormat) -> String {
    let value = value.max(0);
    if format == NumberFormat::Long || value < 1_000 {
        return value.to_string();
    }

    let v = i128::from(value);
    let (mut divisor, mut suffix) = if v >= UNITS[1].0 { UNITS[1] } else { UNITS[0] };
    let mut t = tenths(v, divisor);
    if suffix == UNITS[0].1 && t >= 10_000 {
        // 999_950 rounds to 1000.0k; promote to the next unit instead.
        (divisor, suffix) = UNITS[1];
        t = tenths(v, divisor);
    }

    if t % 10 == 0 {
        format!("{}{suffix}", t / 10)
    } else {
        format!("{}.{}{suffix}", t / 10, t % 10)
    }
}
