use super::*;

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
    LineSegment::new((x0, y0), (x1, y1), 2, Rgb8::new(10, 20, 30))
}

#[test]
fn placeholder_is_zero_length_mid_gray_at_center() {
    let p = LineSegment::PLACEHOLDER;
    assert_eq!(p.start, Point::new(100.0, 100.0));
    assert_eq!(p.length(), 0.0);
    assert_eq!(p.width, 1);
    assert_eq!(p.color, Rgb8::new(128, 128, 128));
}

#[test]
fn segments_follow_draw_order() {
    let def = ExpressionDef::new("x", Rgb8::new(0, 0, 0))
        .with_lines(LineGroup::Mouth, vec![seg(3.0, 0.0, 0.0, 0.0)])
        .with_lines(LineGroup::Outline, vec![seg(0.0, 0.0, 0.0, 0.0)])
        .with_lines(LineGroup::Eyebrows, vec![seg(2.0, 0.0, 0.0, 0.0)])
        .with_lines(LineGroup::Eyes, vec![seg(1.0, 0.0, 0.0, 0.0)]);
    let xs: Vec<f64> = def.segments().map(|s| s.start.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(def.segment_count(), 4);
}

#[test]
fn from_swatch_builds_closed_border() {
    let swatch = Swatch {
        text_color: Rgb8::new(0, 100, 0),
        scale: 1.2,
        opacity: 1.0,
        emoji: "x".to_string(),
    };
    let def = ExpressionDef::from_swatch("Happy", Rgb8::new(144, 238, 144), swatch);
    assert_eq!(def.outline.len(), 4);
    assert!(def.eyes.is_empty() && def.eyebrows.is_empty() && def.mouth.is_empty());
    for (i, line) in def.outline.iter().enumerate() {
        let next = &def.outline[(i + 1) % 4];
        assert_eq!(line.end, next.start);
        assert_eq!(line.width, 3);
        assert_eq!(line.color, Rgb8::new(0, 50, 0));
    }
    assert_eq!(def.outline[0].start, Point::new(5.0, 5.0));
    assert!(def.swatch.is_some());
}

#[test]
fn validate_rejects_zero_width() {
    let mut bad = seg(0.0, 0.0, 1.0, 1.0);
    bad.width = 0;
    let def = ExpressionDef::new("bad", Rgb8::new(0, 0, 0)).with_lines(LineGroup::Eyes, vec![bad]);
    let err = def.validate().unwrap_err();
    assert!(err.to_string().contains("eyes[0]"));
}

#[test]
fn validate_rejects_out_of_range_opacity() {
    let def = ExpressionDef::new("bad", Rgb8::new(0, 0, 0)).with_swatch(Swatch {
        text_color: Rgb8::new(0, 0, 0),
        scale: 1.0,
        opacity: 1.5,
        emoji: String::new(),
    });
    assert!(def.validate().is_err());
}

#[test]
fn swatch_is_omitted_from_json_when_absent() {
    let def = ExpressionDef::new("plain", Rgb8::new(1, 2, 3));
    let v = serde_json::to_value(&def).unwrap();
    assert!(v.get("swatch").is_none());
    let back: ExpressionDef = serde_json::from_value(v).unwrap();
    assert_eq!(back, def);
}
