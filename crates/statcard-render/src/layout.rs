//! One-axis flex layout over pre-rendered SVG fragments.
//!
//! Fragments are opaque: the layout only decides the `translate(...)` offset of each one.

use crate::svg::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Row,
    Column,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedFragment {
    pub x: f64,
    pub y: f64,
    pub content: String,
}

impl PositionedFragment {
    pub fn to_svg(&self) -> String {
        format!(
            r#"<g transform="translate({}, {})">{}</g>"#,
            fmt(self.x),
            fmt(self.y),
            self.content
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub fragments: Vec<PositionedFragment>,
    /// Distance from the origin to the far edge of the last fragment along the main axis.
    pub extent: f64,
}

impl LayoutResult {
    pub fn to_svg(&self) -> String {
        self.fragments.iter().map(PositionedFragment::to_svg).collect()
    }
}

/// Stacks `items` along `direction`, `gap` apart, in input order.
///
/// `sizes[i]` is the main-axis size of the i-th non-empty item (missing entries count as 0).
/// Empty fragments are skipped and do not consume a slot.
pub fn flex_layout<S: AsRef<str>>(
    items: &[S],
    gap: f64,
    direction: Direction,
    sizes: &[f64],
) -> LayoutResult {
    let gap = if gap.is_finite() { gap } else { 0.0 };
    let mut offset = 0.0;
    let mut extent: f64 = 0.0;
    let mut fragments = Vec::with_capacity(items.len());

    for (i, item) in items
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .enumerate()
    {
        let size = sizes.get(i).copied().filter(|s| s.is_finite()).unwrap_or(0.0);
        let (x, y) = match direction {
            Direction::Row => (offset, 0.0),
            Direction::Column => (0.0, offset),
        };
        fragments.push(PositionedFragment {
            x,
            y,
            content: item.to_string(),
        });
        extent = extent.max(offset + size);
        offset += size + gap;
    }

    LayoutResult { fragments, extent }
}
