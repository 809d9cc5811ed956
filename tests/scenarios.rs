use palette_harmony::*;

const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

/// What a front end does: parse, echo the canonical form, generate.
fn basic(input: &str, scheme: &str) -> Result<(String, Palette), ColorFormatError> {
    let base = try_parse_color(input)?;
    Ok((rgb_to_hex(base), generate_basic_scheme(Scheme::from_name(scheme), base)))
}

#[test]
fn rgb_text_to_complementary() {
    assert_eq!(parse_color("rgb(255, 0, 0)"), Some(RED));
    let (echo, p) = basic("rgb(255, 0, 0)", "complementary").unwrap();
    assert_eq!(echo, "#ff0000");
    assert_eq!(p.into_colors(), [RED, RGB8::new(0, 255, 255)]);
}

#[test]
fn bad_input_produces_nothing() {
    assert_eq!(parse_color("bad-input"), None);
    let err = basic("bad-input", "triadic").unwrap_err();
    assert!(err.to_string().contains("expected HEX, RGB, or HSL"));
}

#[test]
fn single_point_range() {
    let p = generate_advanced_palette(RED, 0, 50, 50, 50, 50);
    assert_eq!(p.len(), 1);
}

#[test]
fn every_input_form_agrees() {
    for s in ["#336699", "#369", "336699", "369", "RGB(51,102,153)",
              "hsl(210, 50%, 40%)", " #336699 "] {
        let (echo, _) = basic(s, "analogous").unwrap();
        assert_eq!(echo, "#336699", "{s:?}");
    }
}

#[test]
fn near_white_monochromatic() {
    let (_, p) = basic("#F2F2F2", "monochromatic").unwrap();
    assert_eq!(p.len(), 4);
    assert_eq!(p[0], RGB8::new(242, 242, 242));
    assert_eq!(p.labels().last().map(String::as_str), Some("#FFFFFF"));
}

#[test]
fn scheme_sizes_for_saturated_base() {
    let base = parse_color("hsl(200, 70%, 45%)").unwrap();
    let sizes: Vec<usize> = Scheme::ALL.iter().map(|&s| base.scheme(s).len())
        .collect();
    assert_eq!(sizes, [2, 3, 3, 4, 5]);
}

#[test]
fn default_range_grid() {
    // Saturated base: 7 hues × 4 saturations × 4 lightnesses.
    let p = RED.range(&HslRange::default());
    assert!(p.len() <= 7 * 4 * 4);
    assert!(p.len() > 100);
    assert!(!p.contains(RED));
}
