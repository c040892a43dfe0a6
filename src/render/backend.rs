use crate::{
    expression::model::ExpressionDef,
    foundation::core::Canvas,
    foundation::error::{MorphError, MorphResult},
};

/// A rendered frame as RGBA8 pixels.
///
/// The CPU renderer produces **premultiplied** pixels; the `premultiplied` flag makes this
/// explicit at API boundaries. Use [`FrameRGBA::into_straight_alpha`] before encoding PNG.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn into_straight_alpha(mut self) -> Self {
        if !self.premultiplied {
            return self;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
        self
    }
}

/// Turns one resolved expression into pixels. Called once per generated frame.
pub trait FrameRenderer {
    /// Draw the background, then outline, eyes, eyebrows and mouth in that order.
    fn render(&mut self, expr: &ExpressionDef) -> MorphResult<FrameRGBA>;
}

/// Available renderer kinds.
#[derive(Clone, Copy, Debug)]
pub enum BackendKind {
    /// CPU raster renderer powered by `vello_cpu`.
    Cpu,
}

/// Renderer settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Output size; the 200x200 logical canvas is scaled to fit.
    pub canvas: Canvas,
}

impl RenderSettings {
    pub(crate) fn pixel_size(&self) -> MorphResult<(u16, u16)> {
        let width: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| MorphError::render("canvas width exceeds u16"))?;
        let height: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| MorphError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(MorphError::render("canvas must be non-empty"));
        }
        Ok((width, height))
    }
}

pub fn create_renderer(
    kind: BackendKind,
    settings: &RenderSettings,
) -> MorphResult<Box<dyn FrameRenderer>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuRenderer::new(
            settings.clone(),
        )?)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
