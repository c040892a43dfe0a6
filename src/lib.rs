//! facemorph generates smooth in-between frames for line-drawn facial expressions.
//!
//! An expression is a background color plus four groups of colored line segments
//! (outline, eyes, eyebrows, mouth) on a 200x200 logical canvas. Given two catalog entries,
//! the engine eases progress with a smoothstep curve and blends colors, points and widths
//! group by group, so a display can animate between emotional states instead of hard-cutting.
//!
//! # Pipeline overview
//!
//! 1. **Catalog**: an immutable [`Catalog`] of named [`ExpressionDef`]s, built in or loaded
//!    from JSON.
//! 2. **Interpolate**: [`interpolate_expressions`] blends two definitions at progress `t`.
//! 3. **Sequence**: [`SequenceGenerator`] produces `steps + 1` evenly spaced [`Frame`]s per
//!    pair, or one sequence for every ordered pair of entries.
//! 4. **Render / export** (optional): a [`FrameRenderer`] rasterizes frames and [`export`]
//!    writes PNGs plus JSON metadata.
//!
//! Interpolation is pure and deterministic; nothing generated is written back to the catalog.
#![forbid(unsafe_code)]

mod animation;
mod expression;
mod foundation;
mod interpolate;
mod render;
mod sequence;

/// Writing sequences and reports to disk.
pub mod export;

pub use animation::ease::ease;
pub use animation::lerp::{Lerp, align_and_blend_lines, blend_color, blend_line, blend_point};
pub use expression::catalog::{Catalog, CatalogEntry, ExpressionName};
pub use expression::model::{ExpressionDef, LineGroup, LineSegment, Swatch};
pub use foundation::core::{CANVAS_SIZE, Canvas, FrameIndex, Point, Rgb8};
pub use foundation::error::{MorphError, MorphResult};
pub use interpolate::interpolate_expressions;
pub use render::backend::{BackendKind, FrameRGBA, FrameRenderer, RenderSettings, create_renderer};
pub use render::cpu::CpuRenderer;
pub use sequence::generator::{
    AllPairs, DEFAULT_STEPS, Frame, GeneratorConfig, PairThreading, Sequence, SequenceGenerator,
    generate_sequence, pair_key,
};
pub use sequence::report::{
    FrameMetadata, GenerationInfo, GenerationReport, frame_filename, sequence_metadata,
};
