use super::*;
use crate::expression::catalog::Catalog;
use crate::foundation::core::Canvas;

fn close(px: [u8; 4], want: [u8; 4]) -> bool {
    px.iter().zip(want).all(|(a, b)| a.abs_diff(b) <= 2)
}

#[test]
fn background_and_outline_are_drawn() {
    let cat = Catalog::builtin();
    let happy = &cat.get("Happy").unwrap().expression;
    let mut r = CpuRenderer::new(RenderSettings::default()).unwrap();
    let frame = r.render(happy).unwrap();

    assert_eq!((frame.width, frame.height), (200, 200));
    assert_eq!(frame.data.len(), 200 * 200 * 4);
    assert!(close(frame.pixel(2, 2).unwrap(), [200, 255, 200, 255]));
    // Left outline stroke runs along x = 30 with width 4.
    assert!(close(frame.pixel(29, 100).unwrap(), [0, 100, 0, 255]));
}

#[test]
fn output_scales_with_canvas() {
    let cat = Catalog::builtin();
    let sad = &cat.get("Sad").unwrap().expression;
    let settings = RenderSettings {
        canvas: Canvas::new(400, 400).unwrap(),
    };
    let mut r = CpuRenderer::new(settings).unwrap();
    let frame = r.render(sad).unwrap();
    assert_eq!(frame.data.len(), 400 * 400 * 4);
    assert!(close(frame.pixel(59, 200).unwrap(), [105, 105, 105, 255]));
    assert!(close(frame.pixel(5, 5).unwrap(), [200, 200, 200, 255]));
}

#[test]
fn swatch_opacity_fades_background() {
    let cat = Catalog::builtin_swatches();
    let sad = &cat.get("Sad").unwrap().expression;
    let mut r = CpuRenderer::new(RenderSettings::default()).unwrap();
    let frame = r.render(sad).unwrap().into_straight_alpha();
    let px = frame.pixel(100, 100).unwrap();
    assert!(px[3].abs_diff(178) <= 1);
}

#[test]
fn background_alpha_truncates_opacity() {
    let cat = Catalog::builtin_swatches();
    // 0.7 * 255 truncates to 178.
    assert_eq!(background_alpha(&cat.get("Sad").unwrap().expression), 178);
    assert_eq!(background_alpha(&cat.get("Happy").unwrap().expression), 255);
    assert_eq!(background_alpha(&Catalog::builtin().get("Sad").unwrap().expression), 255);
}

#[test]
fn renderer_is_reusable_across_frames() {
    let cat = Catalog::builtin();
    let mut r = CpuRenderer::new(RenderSettings::default()).unwrap();
    let a = r.render(&cat.get("Alert").unwrap().expression).unwrap();
    let b = r.render(&cat.get("Alert").unwrap().expression).unwrap();
    assert_eq!(a.data, b.data);
}
