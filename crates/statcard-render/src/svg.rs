use ryu_js::Buffer;

/// Stringifies a number for an SVG attribute the way JS `Number#toString()` does, without `-0`
/// and without float noise from our own arithmetic.
pub fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    } else {
        v = (v * 1e10).round() / 1e10;
    }
    let mut b = Buffer::new();
    let s = b.format_finite(v).to_string();
    if s == "-0" { "0".to_string() } else { s }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
