#![forbid(unsafe_code)]

//! `statcard` renders GitHub-readme style stats cards as standalone SVG documents.
//!
//! The pipeline is split across crates:
//! - `statcard-core`: snapshots, options, themes, number formatting
//! - `statcard-render`: text measurement, layout and SVG output
//! - this crate: stats sources, cache headers and [`respond`], which turns a query string into
//!   an HTTP-shaped [`CardResponse`]

pub mod cache;
pub mod response;
pub mod source;

pub use cache::{CachePolicy, NO_STORE};
pub use response::{CardResponse, ErrorBody, Responder, respond};
pub use source::{
    JsonFileSource, RepoRef, ReposManifest, StaticSource, StatsSource, TrafficLogSource,
    validate_repo_names,
};
pub use statcard_core::*;
pub use statcard_render::render_card;

pub mod render {
    pub use statcard_render::card::Card;
    pub use statcard_render::text::{DeterministicTextMeasurer, TextMeasurer, measure_text};
    pub use statcard_render::{CardKind, Error, RenderOptions, render_card};
}

#[derive(Debug, thiserror::Error)]
pub enum StatcardError {
    #[error(transparent)]
    Data(#[from] statcard_core::Error),
    #[error(transparent)]
    Render(#[from] statcard_render::Error),
}

pub type Result<T> = std::result::Result<T, StatcardError>;

/// Fetches a snapshot from `source` and renders it.
pub fn render_from_source(
    source: &dyn StatsSource,
    kind: render::CardKind,
    options: &CardOptions,
    render_options: &render::RenderOptions,
) -> Result<String> {
    let stats = source.fetch(kind).map_err(statcard_core::Error::from)?;
    Ok(statcard_render::render_card(
        kind,
        &stats,
        options,
        render_options,
    )?)
}

/// Parses a JSON snapshot and renders `kind` with options decoded from `query`.
pub fn render_json(kind: render::CardKind, stats_json: &str, query: &str) -> Result<String> {
    let stats = StatsSnapshot::from_json(stats_json)?;
    let options = CardOptions::from_query_str(query);
    Ok(statcard_render::render_card(
        kind,
        &stats,
        &options,
        &render::RenderOptions::default(),
    )?)
}
