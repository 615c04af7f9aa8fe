use statcard_core::{CardConfig, ColorOverrides, ColorSet, Theme};
use statcard_render::card::Card;

fn card(title: Option<&str>) -> Card {
    Card::new(
        &CardConfig::default(),
        300.0,
        120.0,
        4.5,
        ColorSet::resolve(Theme::Default, &ColorOverrides::default()),
        title.map(str::to_string),
    )
}

#[test]
fn empty_body_still_yields_well_formed_frame() {
    let svg = card(Some("Frame")).render("");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    let root = doc.root_element();
    assert_eq!(root.attribute("viewBox"), Some("0 0 300 120"));
    assert_eq!(root.attribute("role"), Some("img"));

    let bg = doc
        .descendants()
        .find(|n| n.attribute("data-testid") == Some("card-bg"))
        .expect("background rect");
    assert_eq!(bg.attribute("width"), Some("299"));
    assert_eq!(bg.attribute("rx"), Some("4.5"));
    assert_eq!(bg.attribute("stroke"), Some("#e4e2e2"));
    assert_eq!(bg.attribute("stroke-opacity"), Some("1"));
}

#[test]
fn body_moves_up_without_title() {
    let titled = card(Some("Frame"));
    let bare = card(None);
    assert_eq!(titled.body_offset_y(), 55.0);
    assert_eq!(bare.body_offset_y(), 25.0);

    let svg = bare.render("<g/>");
    assert!(!svg.contains(r#"data-testid="card-title""#));
    assert!(svg.contains(r#"<g data-testid="main-card-body" transform="translate(0, 25)"><g/></g>"#));
}

#[test]
fn accessibility_label_falls_back_to_title() {
    let svg = card(Some("Frame")).render("");
    assert!(svg.contains(r#"<title id="titleId">Frame</title><desc id="descId"></desc>"#));

    let mut labelled = card(None);
    labelled.set_accessibility_label("Hidden", "a: 1");
    let svg = labelled.render("");
    assert!(svg.contains(r#"<title id="titleId">Hidden</title><desc id="descId">a: 1</desc>"#));
}

#[test]
fn disabling_animations_is_idempotent() {
    let mut once = card(Some("Frame"));
    once.disable_animations();
    let mut twice = card(Some("Frame"));
    twice.disable_animations();
    twice.disable_animations();
    assert_eq!(once.stylesheet(), twice.stylesheet());
    assert!(!once.stylesheet().contains("@keyframes"));
}

#[test]
fn extra_css_is_appended_before_animation_rules() {
    let mut c = card(Some("Frame"));
    c.set_css(".a{fill:red;}");
    c.set_css(".b{fill:blue;}");
    let css = c.stylesheet();
    let a = css.find(".a{").expect("first rule");
    let b = css.find(".b{").expect("second rule");
    let k = css.find("@keyframes").expect("keyframes");
    assert!(css.starts_with(".header{"));
    assert!(a < b && b < k);
}

#[test]
fn title_group_sits_at_padding_offset() {
    let svg = card(Some("Frame")).render("");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    let group = doc
        .descendants()
        .find(|n| n.attribute("data-testid") == Some("card-title"))
        .expect("title group");
    assert_eq!(group.attribute("transform"), Some("translate(25, 35)"));
    let header = group
        .children()
        .find(|n| n.is_element())
        .expect("title text");
    assert_eq!(header.attribute("class"), Some("header"));
    assert_eq!(header.text(), Some("Frame"));
}

#[test]
fn negative_geometry_is_clamped() {
    let c = Card::new(
        &CardConfig::default(),
        -10.0,
        -1.0,
        -3.0,
        ColorSet::resolve(Theme::Default, &ColorOverrides::default()),
        None,
    );
    let svg = c.render("");
    assert!(svg.contains(r#"width="0" height="0""#));
    assert!(svg.contains(r#"rx="0""#));
}
