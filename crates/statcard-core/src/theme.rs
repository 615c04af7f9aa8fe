use serde::{Deserialize, Serialize};

/// Built-in color palettes. Unknown names resolve to [`Theme::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Default,
    Transparent,
    Dark,
    Radical,
    Merko,
    Gruvbox,
    Tokyonight,
    Onedark,
    Cobalt,
    Synthwave,
    #[serde(rename = "highcontrast")]
    HighContrast,
    Dracula,
    Monokai,
    Vue,
    Nord,
    GithubDark,
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    title: &'static str,
    icon: &'static str,
    text: &'static str,
    bg: &'static str,
    border: Option<&'static str>,
}

impl Theme {
    pub const ALL: &'static [Theme] = &[
        Theme::Default,
        Theme::Transparent,
        Theme::Dark,
        Theme::Radical,
        Theme::Merko,
        Theme::Gruvbox,
        Theme::Tokyonight,
        Theme::Onedark,
        Theme::Cobalt,
        Theme::Synthwave,
        Theme::HighContrast,
        Theme::Dracula,
        Theme::Monokai,
        Theme::Vue,
        Theme::Nord,
        Theme::GithubDark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Transparent => "transparent",
            Self::Dark => "dark",
            Self::Radical => "radical",
            Self::Merko => "merko",
            Self::Gruvbox => "gruvbox",
            Self::Tokyonight => "tokyonight",
            Self::Onedark => "onedark",
            Self::Cobalt => "cobalt",
            Self::Synthwave => "synthwave",
            Self::HighContrast => "highcontrast",
            Self::Dracula => "dracula",
            Self::Monokai => "monokai",
            Self::Vue => "vue",
            Self::Nord => "nord",
            Self::GithubDark => "github_dark",
        }
    }

    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        match Self::ALL.iter().copied().find(|t| t.name() == name) {
            Some(theme) => theme,
            None => {
                if !name.is_empty() {
                    tracing::debug!(theme = name, "unknown theme, falling back to default");
                }
                Self::Default
            }
        }
    }

    fn palette(self) -> Palette {
        const fn p(
            title: &'static str,
            icon: &'static str,
            text: &'static str,
            bg: &'static str,
        ) -> Palette {
            Palette {
                title,
                icon,
                text,
                bg,
                border: None,
            }
        }
        match self {
            Self::Default => Palette {
                border: Some("e4e2e2"),
                ..p("2f80ed", "4c71f2", "434d58", "fffefe")
            },
            Self::Transparent => p("006AFF", "0579C3", "417E87", "ffffff00"),
            Self::Dark => p("fff", "79ff97", "9f9f9f", "151515"),
            Self::Radical => p("fe428e", "f8d847", "a9fef7", "141321"),
            Self::Merko => p("abd200", "b7d364", "68b587", "0a0f0b"),
            Self::Gruvbox => p("fabd2f", "fe8019", "8ec07c", "282828"),
            Self::Tokyonight => p("70a5fd", "bf91f3", "38bdae", "1a1b27"),
            Self::Onedark => p("e4bf7a", "8eb573", "df6d74", "282c34"),
            Self::Cobalt => p("e683d9", "0480ef", "75eeb2", "193549"),
            Self::Synthwave => p("e2e9ec", "ef8539", "e5289e", "2b213a"),
            Self::HighContrast => p("e7f216", "00ffff", "fff", "000"),
            Self::Dracula => p("ff6e96", "79dafa", "f8f8f2", "282a36"),
            Self::Monokai => p("eb1f6a", "e28905", "f1f1eb", "272822"),
            Self::Vue => p("41b883", "41b883", "273849", "fffefe"),
            Self::Nord => p("81a1c1", "88c0d0", "d8dee9", "2e3440"),
            Self::GithubDark => p("58A6FF", "1F6FEB", "C3D1D9", "0D1117"),
        }
    }
}

/// Card background: a flat color or a linear gradient (`angle` in degrees, then stops).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    Solid(String),
    Gradient { angle: String, stops: Vec<String> },
}

/// Fully resolved colors. Every color carries its leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    pub title: String,
    pub text: String,
    pub icon: String,
    pub background: Background,
    pub border: String,
}

/// Caller-supplied color overrides, as received (no `#`, unvalidated).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOverrides {
    pub title: Option<String>,
    pub text: Option<String>,
    pub icon: Option<String>,
    pub background: Option<String>,
    pub border: Option<String>,
}

pub fn is_valid_hex_color(color: &str) -> bool {
    matches!(color.len(), 3 | 4 | 6 | 8) && color.bytes().all(|b| b.is_ascii_hexdigit())
}

fn strip_hash(color: &str) -> &str {
    let color = color.trim();
    color.strip_prefix('#').unwrap_or(color)
}

fn parse_gradient(value: &str) -> Option<Background> {
    let parts = value.split(',').map(str::trim).collect::<Vec<_>>();
    if parts.len() < 3 || !parts[0].parse::<f64>().is_ok_and(f64::is_finite) {
        return None;
    }
    let stops = parts[1..].iter().map(|c| strip_hash(c)).collect::<Vec<_>>();
    if !stops.iter().all(|c| is_valid_hex_color(c)) {
        return None;
    }
    Some(Background::Gradient {
        angle: parts[0].to_string(),
        stops: stops.into_iter().map(|c| format!("#{c}")).collect(),
    })
}

fn pick(explicit: Option<&str>, themed: Option<&str>, fallback: &str) -> String {
    let c = explicit
        .map(strip_hash)
        .filter(|c| is_valid_hex_color(c))
        .or_else(|| themed.filter(|c| is_valid_hex_color(c)))
        .unwrap_or(fallback);
    format!("#{c}")
}

impl ColorSet {
    /// Resolves colors with precedence explicit > theme > built-in default.
    pub fn resolve(theme: Theme, overrides: &ColorOverrides) -> Self {
        let base = Theme::Default.palette();
        let selected = theme.palette();
        let border_fallback = base.border.unwrap_or("e4e2e2");

        let background = overrides
            .background
            .as_deref()
            .and_then(parse_gradient)
            .unwrap_or_else(|| {
                Background::Solid(pick(
                    overrides.background.as_deref(),
                    Some(selected.bg),
                    base.bg,
                ))
            });

        Self {
            title: pick(overrides.title.as_deref(), Some(selected.title), base.title),
            text: pick(overrides.text.as_deref(), Some(selected.text), base.text),
            icon: pick(overrides.icon.as_deref(), Some(selected.icon), base.icon),
            background,
            border: pick(
                overrides.border.as_deref(),
                selected.border,
                border_fallback,
            ),
        }
    }
}
