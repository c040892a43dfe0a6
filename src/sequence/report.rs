use std::collections::BTreeMap;

use crate::{
    expression::catalog::Catalog,
    expression::model::ExpressionDef,
    foundation::core::Canvas,
    sequence::generator::{AllPairs, Frame, Sequence},
};

/// Per-frame record written next to the rendered images.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameMetadata {
    pub frame: u32,
    pub t: f64,
    pub filename: String,
    pub description: String,
    pub params: ExpressionDef,
}

impl FrameMetadata {
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            frame: frame.index.0,
            t: frame.t,
            filename: frame_filename(frame),
            description: frame.description.clone(),
            params: frame.expression.clone(),
        }
    }
}

/// `frame_{index:03}_t{t:.2}.png`
pub fn frame_filename(frame: &Frame) -> String {
    format!("frame_{:03}_t{:.2}.png", frame.index.0, frame.t)
}

pub fn sequence_metadata(seq: &Sequence) -> Vec<FrameMetadata> {
    seq.frames.iter().map(FrameMetadata::from_frame).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerationInfo {
    pub total_sequences: usize,
    pub interpolation_steps: u32,
    pub image_size: [u32; 2],
    pub total_frames: usize,
}

/// Summary of an all-pairs run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationReport {
    pub generation_info: GenerationInfo,
    /// Source catalog entries, keyed by name.
    pub expressions: BTreeMap<String, ExpressionDef>,
    /// Frame count per `"{from}_to_{to}"` key.
    pub sequences: BTreeMap<String, usize>,
}

impl GenerationReport {
    pub fn new(catalog: &Catalog, pairs: &AllPairs, steps: u32, canvas: Canvas) -> Self {
        Self {
            generation_info: GenerationInfo {
                total_sequences: pairs.len(),
                interpolation_steps: steps,
                image_size: [canvas.width, canvas.height],
                total_frames: pairs.total_frames(),
            },
            expressions: catalog
                .entries()
                .iter()
                .map(|e| (e.name.clone(), e.expression.clone()))
                .collect(),
            sequences: pairs.iter().map(|s| (s.key(), s.frames.len())).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/report.rs"]
mod tests;
