use statcard_core::{CardOptions, StatsSnapshot};
use statcard_render::{CardKind, RenderOptions, render_card};

fn testid_text(doc: &roxmltree::Document<'_>, id: &str) -> Option<String> {
    doc.descendants()
        .find(|n| n.attribute("data-testid") == Some(id))
        .and_then(|n| n.text())
        .map(str::to_string)
}

#[test]
fn traffic_card_renders_three_rows() {
    let stats = StatsSnapshot::new()
        .with("totalViews", 2_345_678)
        .with("totalClones", 1050)
        .with("reposTracked", 7);
    let svg = render_card(
        CardKind::Traffic,
        &stats,
        &CardOptions::from_query_str("show_icons=true"),
        &RenderOptions::default(),
    )
    .expect("render ok");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");

    assert_eq!(doc.root_element().attribute("height"), Some("145"));
    assert_eq!(testid_text(&doc, "views").as_deref(), Some("2.3M"));
    assert_eq!(testid_text(&doc, "clones").as_deref(), Some("1.1k"));
    assert_eq!(testid_text(&doc, "repos").as_deref(), Some("7"));
    assert_eq!(
        testid_text(&doc, "header").as_deref(),
        Some("GitHub Traffic Stats")
    );

    let delays = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("stagger"))
        .filter_map(|n| n.attribute("style"))
        .collect::<Vec<_>>();
    assert_eq!(
        delays,
        [
            "animation-delay: 450ms",
            "animation-delay: 600ms",
            "animation-delay: 750ms"
        ]
    );
}

#[test]
fn negative_values_render_as_zero() {
    let stats = StatsSnapshot::new()
        .with("totalViews", -3)
        .with("totalClones", 0)
        .with("reposTracked", 0);
    let svg = render_card(
        CardKind::Traffic,
        &stats,
        &CardOptions::default(),
        &RenderOptions::default(),
    )
    .expect("render ok");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    assert_eq!(testid_text(&doc, "views").as_deref(), Some("0"));
    let desc = doc
        .descendants()
        .find(|n| n.has_tag_name("desc"))
        .and_then(|n| n.text())
        .unwrap_or_default();
    assert_eq!(desc, "Total Views: 0, Total Clones: 0, Repos Tracked: 0");
}

#[test]
fn card_kind_parses_by_name() {
    assert_eq!("medium".parse::<CardKind>().ok(), Some(CardKind::Medium));
    assert_eq!(" Traffic ".parse::<CardKind>().ok(), Some(CardKind::Traffic));
    assert!("repo".parse::<CardKind>().is_err());
}
