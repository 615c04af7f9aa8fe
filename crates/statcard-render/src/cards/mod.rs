//! Stat-row cards: metric selection, row fragments, sizing and composition.

pub mod medium;
pub mod traffic;

use crate::card::Card;
use crate::layout::{Direction, flex_layout};
use crate::svg::{escape_xml, fmt};
use crate::text::TextStyle;
use crate::{Error, RenderOptions, Result};
use statcard_core::{CardOptions, ColorSet, NumberFormat, StatsSnapshot, format_number, locale};
use std::fmt::Write as _;

/// One row declared by a card kind. Declaration order is display order.
#[derive(Debug, Clone, Copy)]
pub struct StatDef {
    pub id: &'static str,
    /// Key in the [`StatsSnapshot`].
    pub metric: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// A card kind made of stat rows.
#[derive(Debug, Clone, Copy)]
pub struct StatsCardSpec {
    pub name: &'static str,
    pub default_title: &'static str,
    pub stats: &'static [StatDef],
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatItem<'a> {
    pub icon: &'a str,
    pub label: &'a str,
    pub value: i64,
    pub id: &'a str,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardDimensions {
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub line_height: f64,
}

struct RowStyle {
    show_icons: bool,
    bold: bool,
    number_format: NumberFormat,
    label_x: Option<f64>,
    value_x: f64,
    stagger_step_ms: u32,
}

pub fn select_items<'a>(spec: &'a StatsCardSpec, stats: &StatsSnapshot) -> Result<Vec<StatItem<'a>>> {
    spec.stats
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let value = stats.get(def.metric).ok_or(Error::MissingMetric {
                card: spec.name,
                metric: def.metric,
            })?;
            Ok(StatItem {
                icon: def.icon,
                label: def.label,
                value: value.max(0),
                id: def.id,
                index,
            })
        })
        .collect()
}

pub fn card_title<'a>(spec: &'a StatsCardSpec, options: &'a CardOptions) -> &'a str {
    options.custom_title.as_deref().unwrap_or(spec.default_title)
}

/// Width and height of a stats card before anything is rendered.
pub fn card_dimensions(
    spec: &StatsCardSpec,
    item_count: usize,
    options: &CardOptions,
    render: &RenderOptions,
) -> CardDimensions {
    let config = &render.config;
    let line_height = options.effective_line_height(config);

    let style = TextStyle {
        font_size: config.title_measure_font_size,
        locale: options.locale.clone(),
    };
    let title_width = render
        .text_measurer
        .measure(card_title(spec, options), &style)
        .width;

    let icon_width = if options.show_icons && item_count > 0 {
        config.icon_allowance
    } else {
        0.0
    };
    let min_width = (config.title_padding + title_width * 2.0).max(config.min_width) + icon_width;
    let requested = options
        .card_width
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(config.default_width + icon_width);
    let width = requested.max(min_width).max(0.0);

    let height =
        config.chrome_height(options.hide_title) + (item_count as f64 + 1.0) * line_height;

    CardDimensions {
        width,
        height: height.max(0.0),
        min_width,
        line_height,
    }
}

fn render_row(item: &StatItem<'_>, style: &RowStyle) -> String {
    let value = format_number(item.value, style.number_format);
    let class = if style.bold { "stat bold" } else { "stat not_bold" };
    let delay = u32::try_from(item.index)
        .unwrap_or(u32::MAX)
        .saturating_add(3)
        .saturating_mul(style.stagger_step_ms);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<g class="stagger" style="animation-delay: {delay}ms" transform="translate(25, 0)">"#
    );
    if style.show_icons {
        let _ = write!(
            &mut out,
            r#"<svg data-testid="icon" class="icon" viewBox="0 0 16 16" version="1.1" width="16" height="16">{}</svg>"#,
            item.icon
        );
    }
    let label_x = style
        .label_x
        .map(|x| format!(r#" x="{}""#, fmt(x)))
        .unwrap_or_default();
    let _ = write!(
        &mut out,
        r#"<text class="{class}"{label_x} y="12.5">{}:</text>"#,
        escape_xml(item.label)
    );
    let _ = write!(
        &mut out,
        r#"<text class="{class}" x="{}" y="12.5" data-testid="{}">{}</text>"#,
        fmt(style.value_x),
        escape_xml(item.id),
        escape_xml(&value)
    );
    out.push_str("</g>");
    out
}

fn stats_css(colors: &ColorSet, show_icons: bool) -> String {
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#".stat{{font:600 14px 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif;fill:{};}}"#,
        colors.text
    );
    out.push_str("@supports(-moz-appearance: auto){.stat{font-size:12px;}}");
    out.push_str(".stagger{opacity:0;animation:fadeInAnimation 0.3s ease-in-out forwards;}");
    out.push_str(".not_bold{font-weight:400}.bold{font-weight:700}");
    let _ = write!(
        &mut out,
        ".icon{{fill:{};display:{};}}",
        colors.icon,
        if show_icons { "block" } else { "none" }
    );
    out
}

/// `"label: value"` pairs joined with `", "`, using raw (unformatted) values.
pub fn accessibility_description(items: &[StatItem<'_>]) -> String {
    items
        .iter()
        .map(|item| format!("{}: {}", item.label, item.value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value-column x position for the given options.
pub fn value_x(options: &CardOptions, render: &RenderOptions) -> f64 {
    let config = &render.config;
    let base = if options.show_icons {
        config.value_x_with_icon
    } else {
        config.value_x_without_icon
    };
    let long_form = if locale::is_long_form(options.locale.as_ref()) {
        config.long_locale_value_shift
    } else {
        0.0
    };
    base + config.value_shift + long_form
}

pub fn render_stats_card(
    spec: &StatsCardSpec,
    stats: &StatsSnapshot,
    options: &CardOptions,
    render: &RenderOptions,
) -> Result<String> {
    let config = &render.config;
    let items = select_items(spec, stats)?;
    let colors = ColorSet::resolve(options.theme, &options.colors);

    let row_style = RowStyle {
        show_icons: options.show_icons,
        bold: options.text_bold,
        number_format: options.number_format,
        label_x: options.show_icons.then_some(config.label_x_with_icon),
        value_x: value_x(options, render),
        stagger_step_ms: config.stagger_step_ms,
    };
    let rows = items
        .iter()
        .map(|item| render_row(item, &row_style))
        .collect::<Vec<_>>();

    let dims = card_dimensions(spec, items.len(), options, render);
    let layout = flex_layout(&rows, dims.line_height, Direction::Column, &[]);

    let title = card_title(spec, options).to_string();
    let mut card = Card::new(
        config,
        dims.width,
        dims.height,
        options.effective_border_radius(config),
        colors.clone(),
        (!options.hide_title).then(|| title.clone()),
    );
    card.set_hide_border(options.hide_border);
    card.set_css(&stats_css(&colors, options.show_icons));
    if options.disable_animations {
        card.disable_animations();
    }
    card.set_accessibility_label(title, accessibility_description(&items));

    tracing::debug!(
        card = spec.name,
        width = dims.width,
        height = dims.height,
        rows = items.len(),
        "rendering stats card"
    );

    Ok(card.render(&format!(r#"<svg x="0" y="0">{}</svg>"#, layout.to_svg())))
}
