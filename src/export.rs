use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{MorphError, MorphResult},
    render::backend::FrameRenderer,
    sequence::generator::Sequence,
    sequence::report::{GenerationReport, frame_filename, sequence_metadata},
};

pub const METADATA_FILE: &str = "metadata.json";
pub const REPORT_FILE: &str = "generation_report.json";

/// Write one sequence to `<out_dir>/<from>_to_<to>/`.
///
/// Frames are rendered to PNG when a renderer is given; `metadata.json` is always written.
/// Returns the sequence directory.
#[tracing::instrument(skip(seq, renderer), fields(key = %seq.key()))]
pub fn write_sequence(
    out_dir: &Path,
    seq: &Sequence,
    renderer: Option<&mut dyn FrameRenderer>,
) -> MorphResult<PathBuf> {
    let dir = out_dir.join(seq.key());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create sequence dir '{}'", dir.display()))?;

    if let Some(renderer) = renderer {
        for frame in &seq.frames {
            let pixels = renderer.render(&frame.expression)?.into_straight_alpha();
            let path = dir.join(frame_filename(frame));
            image::save_buffer_with_format(
                &path,
                &pixels.data,
                pixels.width,
                pixels.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", path.display()))?;
        }
    }

    write_json(&dir.join(METADATA_FILE), &sequence_metadata(seq))?;
    tracing::info!("wrote {} -> {}: {} frames", seq.from, seq.to, seq.frames.len());
    Ok(dir)
}

/// Write `generation_report.json` into `out_dir`.
pub fn write_report(out_dir: &Path, report: &GenerationReport) -> MorphResult<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;
    let path = out_dir.join(REPORT_FILE);
    write_json(&path, report)?;
    Ok(path)
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> MorphResult<()> {
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)
        .map_err(|e| MorphError::serde(format!("write '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
