//! Blogging-platform card: total views and reads.

use super::{StatDef, StatsCardSpec, render_stats_card};
use crate::{RenderOptions, Result, icons};
use statcard_core::{CardOptions, StatsSnapshot};

pub const MEDIUM_STATS: &[StatDef] = &[
    StatDef {
        id: "views",
        metric: "totalViews",
        label: "Total Views",
        icon: icons::STAR,
    },
    StatDef {
        id: "reads",
        metric: "totalReads",
        label: "Total Reads",
        icon: icons::BOOK,
    },
];

/// Default title is the neutral "Medium Stats" rather than a personal byline, so the default card
/// with icons is 304px wide (287 + 17). Pass `custom_title` for anything longer.
pub const MEDIUM_CARD: StatsCardSpec = StatsCardSpec {
    name: "medium",
    default_title: "Medium Stats",
    stats: MEDIUM_STATS,
};

pub fn render_medium_card(
    stats: &StatsSnapshot,
    options: &CardOptions,
    render: &RenderOptions,
) -> Result<String> {
    render_stats_card(&MEDIUM_CARD, stats, options, render)
}
