use super::*;

#[test]
fn straight_alpha_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![50, 100, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    let straight = frame.into_straight_alpha();
    assert!(!straight.premultiplied);
    assert_eq!(straight.pixel(0, 0), Some([100, 199, 0, 128]));
    assert_eq!(straight.pixel(1, 0), Some([10, 20, 30, 255]));
    assert_eq!(straight.pixel(2, 0), None);
}

#[test]
fn pixel_lookup_on_wide_frame_does_not_overflow() {
    let frame = FrameRGBA {
        width: 65_535,
        height: 65_535,
        data: vec![7; 8],
        premultiplied: false,
    };
    assert_eq!(frame.pixel(1, 0), Some([7; 4]));
    assert_eq!(frame.pixel(65_534, 65_534), None);
}

#[test]
fn oversized_canvas_is_rejected() {
    let settings = RenderSettings {
        canvas: Canvas {
            width: 70_000,
            height: 10,
        },
    };
    assert!(create_renderer(BackendKind::Cpu, &settings).is_err());
}
