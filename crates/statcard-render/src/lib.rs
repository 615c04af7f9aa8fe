#![forbid(unsafe_code)]

pub mod card;
pub mod cards;
pub mod icons;
pub mod layout;
pub mod svg;
pub mod text;

use crate::cards::StatsCardSpec;
use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use statcard_core::{CardConfig, CardOptions, StatsSnapshot};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{card} card requires metric `{metric}`, which is missing from the stats snapshot")]
    MissingMetric {
        card: &'static str,
        metric: &'static str,
    },
    #[error("unknown card kind: {name}")]
    UnknownCard { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct RenderOptions {
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
    pub config: CardConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
            config: CardConfig::default(),
        }
    }
}

impl std::fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderOptions")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Medium,
    Traffic,
}

impl CardKind {
    pub const ALL: &'static [CardKind] = &[CardKind::Medium, CardKind::Traffic];

    pub fn spec(self) -> &'static StatsCardSpec {
        match self {
            Self::Medium => &cards::medium::MEDIUM_CARD,
            Self::Traffic => &cards::traffic::TRAFFIC_CARD,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl FromStr for CardKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == name)
            .ok_or(Error::UnknownCard { name })
    }
}

/// Renders `kind` as a complete SVG document. Pure: identical input yields identical bytes.
pub fn render_card(
    kind: CardKind,
    stats: &StatsSnapshot,
    options: &CardOptions,
    render: &RenderOptions,
) -> Result<String> {
    cards::render_stats_card(kind.spec(), stats, options, render)
}
