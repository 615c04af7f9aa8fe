use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn style(font_size: f64, locale: Option<&str>) -> TextStyle {
    TextStyle {
        font_size,
        locale: locale.and_then(Locale::parse),
    }
}

#[test]
fn ascii_uses_advance_table() {
    let m = DeterministicTextMeasurer::default();
    let w = m.measure("Hello", &style(10.0, None)).width;
    assert!(approx(w, 22.75), "got {w}");

    let digits = m.measure("0123456789", &style(10.0, None)).width;
    assert!(approx(digits, 55.46875), "got {digits}");
}

#[test]
fn width_scales_with_font_size() {
    let m = DeterministicTextMeasurer::default();
    let a = m.measure("Total Views", &style(10.0, None)).width;
    let b = m.measure("Total Views", &style(20.0, None)).width;
    assert!(approx(b, a * 2.0));
}

#[test]
fn uncovered_characters_use_fallback_width() {
    let m = DeterministicTextMeasurer::default();
    let w = m.measure("é", &style(10.0, None)).width;
    assert!(approx(w, AVERAGE_ADVANCE_EM * 10.0), "got {w}");

    let custom = DeterministicTextMeasurer {
        fallback_width_em: 0.75,
        ..Default::default()
    };
    assert!(approx(custom.measure("é", &style(10.0, None)).width, 7.5));
}

#[test]
fn wide_and_zero_width_characters() {
    let m = DeterministicTextMeasurer::default();
    assert!(approx(m.measure("中文", &style(10.0, None)).width, 20.0));
    assert!(approx(m.measure("\u{0301}", &style(10.0, None)).width, 0.0));
    assert!(approx(m.measure("\u{0007}", &style(10.0, None)).width, 0.0));
}

#[test]
fn cjk_locale_widens_fallback() {
    let m = DeterministicTextMeasurer::default();
    let plain = m.measure("é", &style(10.0, Some("de"))).width;
    let cjk = m.measure("é", &style(10.0, Some("zh-tw"))).width;
    assert!(approx(plain, AVERAGE_ADVANCE_EM * 10.0));
    assert!(approx(cjk, 10.0));
    // ASCII stays table-driven regardless of locale.
    assert!(approx(
        m.measure("abc", &style(10.0, Some("ja"))).width,
        m.measure("abc", &style(10.0, None)).width
    ));
}

#[test]
fn multi_line_width_is_widest_line() {
    let m = DeterministicTextMeasurer::default();
    let metrics = m.measure("ab\nHello", &style(10.0, None));
    assert_eq!(metrics.line_count, 2);
    assert!(approx(metrics.width, 22.75));
    assert!(approx(metrics.height, 24.0));
}

#[test]
fn measurement_is_deterministic() {
    let a = measure_text("Minimal Stats Card", 10.0, None);
    let b = measure_text("Minimal Stats Card", 10.0, None);
    assert_eq!(a.to_bits(), b.to_bits());
    assert_eq!(measure_text("", 10.0, None), 0.0);
}
