use vello_cpu::kurbo::{Affine, BezPath, Cap, Rect, Stroke};
use vello_cpu::peniko::Color;

use crate::{
    expression::model::{ExpressionDef, LineSegment},
    foundation::core::{CANVAS_SIZE, Rgb8},
    foundation::error::MorphResult,
    render::backend::{FrameRGBA, FrameRenderer, RenderSettings},
};

/// Straight-stroke rasterizer on `vello_cpu`.
pub struct CpuRenderer {
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRenderer {
    pub fn new(settings: RenderSettings) -> MorphResult<Self> {
        let (width, height) = settings.pixel_size()?;
        Ok(Self {
            width,
            height,
            ctx: None,
        })
    }

    fn logical_to_pixels(&self) -> Affine {
        let logical = f64::from(CANVAS_SIZE);
        Affine::scale_non_uniform(
            f64::from(self.width) / logical,
            f64::from(self.height) / logical,
        )
    }
}

impl FrameRenderer for CpuRenderer {
    #[tracing::instrument(skip(self, expr), fields(label = %expr.label))]
    fn render(&mut self, expr: &ExpressionDef) -> MorphResult<FrameRGBA> {
        let (w, h) = (self.width, self.height);
        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();

        let bg_alpha = background_alpha(expr);
        ctx.set_transform(Affine::IDENTITY);
        ctx.set_paint(paint(expr.background, bg_alpha));
        ctx.fill_rect(&Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));

        ctx.set_transform(self.logical_to_pixels());
        for seg in expr.segments() {
            stroke_segment(&mut ctx, seg);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data,
            premultiplied: true,
        })
    }
}

/// Swatch opacity fades the background only; strokes stay opaque. Truncates like the color
/// blends do.
fn background_alpha(expr: &ExpressionDef) -> u8 {
    expr.swatch
        .as_ref()
        .map(|s| (s.opacity.clamp(0.0, 1.0) * 255.0) as u8)
        .unwrap_or(255)
}

fn stroke_segment(ctx: &mut vello_cpu::RenderContext, seg: &LineSegment) {
    if seg.width == 0 {
        return;
    }
    let mut path = BezPath::new();
    path.move_to((seg.start.x, seg.start.y));
    path.line_to((seg.end.x, seg.end.y));

    ctx.set_stroke(Stroke::new(f64::from(seg.width)).with_caps(Cap::Round));
    ctx.set_paint(paint(seg.color, 255));
    ctx.stroke_path(&path);
}

fn paint(c: Rgb8, a: u8) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
