use crate::*;

#[test]
fn defaults_apply_when_query_is_empty() {
    let opts = CardOptions::from_query_str("");
    assert_eq!(opts, CardOptions::default());
    assert!(opts.text_bold);
    assert!(!opts.show_icons);
    assert_eq!(opts.effective_line_height(&CardConfig::default()), 25.0);
    assert_eq!(opts.effective_border_radius(&CardConfig::default()), 4.5);
}

#[test]
fn booleans_accept_only_literal_true_false() {
    let opts = CardOptions::from_query_str(
        "show_icons=true&hide_title=TRUE&hide_border=1&text_bold=false&disable_animations=true",
    );
    assert!(opts.show_icons);
    assert!(!opts.hide_title);
    assert!(!opts.hide_border);
    assert!(!opts.text_bold);
    assert!(opts.disable_animations);

    let opts = CardOptions::from_query_str("text_bold=yes");
    assert!(opts.text_bold);
}

#[test]
fn numerics_fall_back_on_parse_failure() {
    let config = CardConfig::default();
    let opts = CardOptions::from_query_str("card_width=abc&line_height=tall&border_radius=-3");
    assert_eq!(opts.card_width, None);
    assert_eq!(opts.effective_line_height(&config), 25.0);
    assert_eq!(opts.effective_border_radius(&config), 4.5);

    let opts = CardOptions::from_query_str("card_width=400&line_height=500&border_radius=10");
    assert_eq!(opts.card_width, Some(400.0));
    assert_eq!(opts.effective_line_height(&config), 100.0);
    assert_eq!(opts.effective_border_radius(&config), 10.0);

    let opts = CardOptions::from_query_str("card_width=-10&line_height=1");
    assert_eq!(opts.card_width, None);
    assert_eq!(opts.effective_line_height(&config), 10.0);
}

#[test]
fn strings_are_normalized() {
    let opts = CardOptions::from_query_str(
        "?theme=dark&title_color=ff0000&custom_title=%20%20&locale=%20DE%20&number_format=Long",
    );
    assert_eq!(opts.theme, Theme::Dark);
    assert_eq!(opts.colors.title.as_deref(), Some("ff0000"));
    assert_eq!(opts.custom_title, None);
    assert_eq!(opts.locale.as_ref().map(Locale::as_str), Some("de"));
    assert!(opts.locale.as_ref().is_some_and(Locale::is_long_form));
    assert_eq!(opts.number_format, NumberFormat::Long);
}

#[test]
fn unknown_locale_is_not_long_form() {
    let opts = CardOptions::from_query_str("locale=xx");
    assert!(!locale::is_long_form(opts.locale.as_ref()));
    assert!(!locale::is_long_form(None));
}

#[test]
fn parse_query_decodes_and_keeps_last_value() {
    let q = parse_query("custom_title=My+Stats%21&theme=dark&theme=radical");
    assert_eq!(q.get("custom_title").map(String::as_str), Some("My Stats!"));
    assert_eq!(q.get("theme").map(String::as_str), Some("radical"));
}

#[test]
fn widths_and_line_heights_keep_their_leading_integer() {
    let config = CardConfig::default();
    let opts = CardOptions::from_query_str("card_width=350px&line_height=30px");
    assert_eq!(opts.card_width, Some(350.0));
    assert_eq!(opts.effective_line_height(&config), 30.0);

    let opts = CardOptions::from_query_str("card_width=400.9&line_height=%2032.5");
    assert_eq!(opts.card_width, Some(400.0));
    assert_eq!(opts.effective_line_height(&config), 32.0);

    let opts = CardOptions::from_query_str("card_width=px350&line_height=-");
    assert_eq!(opts.card_width, None);
    assert_eq!(opts.effective_line_height(&config), 25.0);
}

#[test]
fn leading_integer_reads_like_parse_int() {
    assert_eq!(leading_integer("350px"), Some(350));
    assert_eq!(leading_integer(" -5"), Some(-5));
    assert_eq!(leading_integer("+12.9"), Some(12));
    assert_eq!(leading_integer("abc"), None);
    assert_eq!(leading_integer(""), None);
}
