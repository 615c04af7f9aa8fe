//! Repository traffic card, aggregated over the tracked repositories.

use super::{StatDef, StatsCardSpec, render_stats_card};
use crate::{RenderOptions, Result, icons};
use statcard_core::{CardOptions, StatsSnapshot};

pub const TRAFFIC_STATS: &[StatDef] = &[
    StatDef {
        id: "views",
        metric: "totalViews",
        label: "Total Views",
        icon: icons::STAR,
    },
    StatDef {
        id: "clones",
        metric: "totalClones",
        label: "Total Clones",
        icon: icons::FORK,
    },
    StatDef {
        id: "repos",
        metric: "reposTracked",
        label: "Repos Tracked",
        icon: icons::HISTORY,
    },
];

pub const TRAFFIC_CARD: StatsCardSpec = StatsCardSpec {
    name: "traffic",
    default_title: "GitHub Traffic Stats",
    stats: TRAFFIC_STATS,
};

pub fn render_traffic_card(
    stats: &StatsSnapshot,
    options: &CardOptions,
    render: &RenderOptions,
) -> Result<String> {
    render_stats_card(&TRAFFIC_CARD, stats, options, render)
}
