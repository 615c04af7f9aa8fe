//! Card shell: frame, title, stylesheet, accessibility metadata and animation toggle.
//!
//! [`Card`] is configured through `&mut self` setters and finalized by [`Card::render`], which
//! consumes it.

use crate::svg::{escape_xml, fmt};
use statcard_core::{Background, CardConfig, ColorSet};
use std::fmt::Write as _;

const KEYFRAMES: &str = "@keyframes scaleInAnimation{from{transform:translate(-5px, 5px) scale(0);}to{transform:translate(-5px, 5px) scale(1);}}@keyframes fadeInAnimation{from{opacity:0;}to{opacity:1;}}";

/// Forces every element to its final state.
const ANIMATIONS_DISABLED: &str = "*{animation:none !important;opacity:1 !important;}";

#[derive(Debug, Clone)]
pub struct Card {
    width: f64,
    height: f64,
    border_radius: f64,
    colors: ColorSet,
    title: Option<String>,
    padding_x: f64,
    padding_y: f64,
    title_height: f64,
    hide_border: bool,
    css: String,
    a11y_title: Option<String>,
    a11y_desc: String,
    animations: bool,
}

impl Card {
    /// `title: None` suppresses the title band and moves the body up by its height.
    pub fn new(
        config: &CardConfig,
        width: f64,
        height: f64,
        border_radius: f64,
        colors: ColorSet,
        title: Option<String>,
    ) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            border_radius: border_radius.max(0.0),
            colors,
            title,
            padding_x: config.padding_x,
            padding_y: config.padding_y,
            title_height: config.title_height,
            hide_border: false,
            css: String::new(),
            a11y_title: None,
            a11y_desc: String::new(),
            animations: true,
        }
    }

    /// Vertical offset of the body group.
    pub fn body_offset_y(&self) -> f64 {
        let with_title = self.padding_y + 20.0;
        if self.title.is_some() {
            with_title
        } else {
            (with_title - self.title_height).max(0.0)
        }
    }

    pub fn set_css(&mut self, extra: &str) {
        self.css.push_str(extra);
    }

    pub fn set_hide_border(&mut self, hide: bool) {
        self.hide_border = hide;
    }

    pub fn set_accessibility_label(&mut self, title: impl Into<String>, desc: impl Into<String>) {
        self.a11y_title = Some(title.into());
        self.a11y_desc = desc.into();
    }

    pub fn disable_animations(&mut self) {
        self.animations = false;
    }

    pub fn stylesheet(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            &mut out,
            ".header{{font:600 18px 'Segoe UI', Ubuntu, Sans-Serif;fill:{};animation:fadeInAnimation 0.8s ease-in-out forwards;}}",
            escape_xml(&self.colors.title)
        );
        out.push_str("@supports(-moz-appearance: auto){.header{font-size:15.5px;}}");
        out.push_str(&self.css);
        if self.animations {
            out.push_str(KEYFRAMES);
        } else {
            out.push_str(ANIMATIONS_DISABLED);
        }
        out
    }

    fn render_gradient(&self, out: &mut String) {
        let Background::Gradient { angle, stops } = &self.colors.background else {
            return;
        };
        let _ = write!(
            out,
            r#"<defs><linearGradient id="gradient" gradientTransform="rotate({})" gradientUnits="userSpaceOnUse">"#,
            escape_xml(angle)
        );
        let denom = stops.len().saturating_sub(1).max(1) as f64;
        for (i, stop) in stops.iter().enumerate() {
            let _ = write!(
                out,
                r#"<stop offset="{}%" stop-color="{}"/>"#,
                fmt(i as f64 * 100.0 / denom),
                escape_xml(stop)
            );
        }
        out.push_str("</linearGradient></defs>");
    }

    fn render_title(&self, out: &mut String, title: &str) {
        let _ = write!(
            out,
            r#"<g data-testid="card-title" transform="translate({}, {})"><text x="0" y="0" class="header" data-testid="header">{}</text></g>"#,
            fmt(self.padding_x),
            fmt(self.padding_y),
            escape_xml(title)
        );
    }

    /// Serializes the card around `body` (trusted SVG markup).
    pub fn render(self, body: &str) -> String {
        let w = fmt(self.width);
        let h = fmt(self.height);
        let a11y_title = self
            .a11y_title
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or_default();

        let mut out = String::new();
        let _ = write!(
            &mut out,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="http://www.w3.org/2000/svg" role="img" aria-labelledby="titleId" aria-describedby="descId">"#,
        );
        let _ = write!(
            &mut out,
            r#"<title id="titleId">{}</title><desc id="descId">{}</desc>"#,
            escape_xml(a11y_title),
            escape_xml(&self.a11y_desc)
        );
        let _ = write!(&mut out, "<style>{}</style>", self.stylesheet());
        self.render_gradient(&mut out);

        let fill = match &self.colors.background {
            Background::Solid(color) => escape_xml(color),
            Background::Gradient { .. } => "url(#gradient)".to_string(),
        };
        let _ = write!(
            &mut out,
            r#"<rect data-testid="card-bg" x="0.5" y="0.5" rx="{}" height="99%" stroke="{}" width="{}" fill="{}" stroke-opacity="{}"/>"#,
            fmt(self.border_radius),
            escape_xml(&self.colors.border),
            fmt((self.width - 1.0).max(0.0)),
            fill,
            if self.hide_border { 0 } else { 1 }
        );

        if let Some(title) = self.title.as_deref() {
            self.render_title(&mut out, title);
        }

        let _ = write!(
            &mut out,
            r#"<g data-testid="main-card-body" transform="translate(0, {})">{}</g>"#,
            fmt(self.body_offset_y()),
            body
        );
        out.push_str("</svg>");
        out
    }
}
