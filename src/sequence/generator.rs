use rayon::prelude::*;

use crate::{
    expression::catalog::{Catalog, CatalogEntry},
    expression::model::ExpressionDef,
    foundation::core::FrameIndex,
    foundation::error::{MorphError, MorphResult},
    interpolate::interpolate_expressions,
};

/// Number of intervals between source and target when none is configured.
pub const DEFAULT_STEPS: u32 = 10;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Sequence generation settings.
pub struct GeneratorConfig {
    /// Intervals per sequence; every sequence has `steps + 1` frames.
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Fan-out controls for [`SequenceGenerator::generate_all_pairs`].
    #[serde(default)]
    pub threading: PairThreading,
}

fn default_steps() -> u32 {
    DEFAULT_STEPS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            threading: PairThreading::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_steps(steps: u32) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> MorphResult<()> {
        validate_steps(self.steps)?;
        if let Some(n) = self.threading.threads
            && n == 0
        {
            return Err(MorphError::validation(
                "pair threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Threading controls for all-pairs generation.
pub struct PairThreading {
    /// Generate pairs on a dedicated rayon pool when `true`.
    #[serde(default)]
    pub parallel: bool,
    /// Optional explicit worker thread count.
    #[serde(default)]
    pub threads: Option<usize>,
}

/// One generated in-between state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    pub index: FrameIndex,
    /// Raw (un-eased) progress, `index / steps`.
    pub t: f64,
    pub description: String,
    pub expression: ExpressionDef,
}

/// Evenly spaced frames from one catalog entry to another, endpoints included.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Sequence {
    pub from: String,
    pub to: String,
    pub steps: u32,
    pub frames: Vec<Frame>,
}

impl Sequence {
    /// Directory-style key, `"{from}_to_{to}"`.
    pub fn key(&self) -> String {
        pair_key(&self.from, &self.to)
    }
}

pub fn pair_key(from: &str, to: &str) -> String {
    format!("{from}_to_{to}")
}

/// Every directed pair of distinct catalog entries, source-major in catalog order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct AllPairs {
    sequences: Vec<Sequence>,
}

impl AllPairs {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn get(&self, from: &str, to: &str) -> Option<&Sequence> {
        self.sequences
            .iter()
            .find(|s| s.from == from && s.to == to)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.iter()
    }

    pub fn total_frames(&self) -> usize {
        self.sequences.iter().map(|s| s.frames.len()).sum()
    }
}

/// Builds interpolation sequences against an explicit, borrowed catalog.
#[derive(Clone, Debug)]
pub struct SequenceGenerator<'a> {
    catalog: &'a Catalog,
    config: GeneratorConfig,
}

impl<'a> SequenceGenerator<'a> {
    pub fn new(catalog: &'a Catalog, config: GeneratorConfig) -> MorphResult<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Sequence from `from` to `to` using the configured step count.
    pub fn generate(&self, from: &str, to: &str) -> MorphResult<Sequence> {
        generate_sequence(self.catalog, from, to, self.config.steps)
    }

    /// One sequence per ordered pair of distinct names: `n * (n - 1)` in total.
    #[tracing::instrument(
        skip(self),
        fields(entries = self.catalog.len(), steps = self.config.steps)
    )]
    pub fn generate_all_pairs(&self) -> MorphResult<AllPairs> {
        let entries = self.catalog.entries();
        let pairs: Vec<(&CatalogEntry, &CatalogEntry)> = entries
            .iter()
            .flat_map(|a| {
                entries
                    .iter()
                    .filter(move |b| b.name != a.name)
                    .map(move |b| (a, b))
            })
            .collect();
        let total = pairs.len();
        let steps = self.config.steps;

        let sequences = if self.config.threading.parallel {
            let pool = build_thread_pool(self.config.threading.threads)?;
            pool.install(|| {
                pairs
                    .par_iter()
                    .enumerate()
                    .map(|(i, (a, b))| {
                        let seq = sequence_between(a, b, steps);
                        tracing::info!("[{}/{}] {} -> {}", i + 1, total, a.name, b.name);
                        seq
                    })
                    .collect::<Vec<_>>()
            })
        } else {
            pairs
                .iter()
                .enumerate()
                .map(|(i, (a, b))| {
                    tracing::info!("[{}/{}] {} -> {}", i + 1, total, a.name, b.name);
                    sequence_between(a, b, steps)
                })
                .collect()
        };

        Ok(AllPairs { sequences })
    }
}

/// Interpolate `steps + 1` frames from catalog entry `from` to `to`.
///
/// Frame `i` sits at `t = i / steps`, so the first and last frames are the endpoints
/// themselves. `from == to` is allowed and yields `steps + 1` copies of the entry.
#[tracing::instrument(skip(catalog))]
pub fn generate_sequence(
    catalog: &Catalog,
    from: &str,
    to: &str,
    steps: u32,
) -> MorphResult<Sequence> {
    validate_steps(steps)?;
    let a = catalog.get(from)?;
    let b = catalog.get(to)?;
    Ok(sequence_between(a, b, steps))
}

fn sequence_between(a: &CatalogEntry, b: &CatalogEntry, steps: u32) -> Sequence {
    let frames = (0..=steps)
        .map(|i| {
            let t = f64::from(i) / f64::from(steps);
            let expression = interpolate_expressions(&a.expression, &b.expression, t);
            tracing::debug!(frame = i, t, "interpolated {}", expression.label);
            Frame {
                index: FrameIndex(i),
                t,
                description: expression.label.clone(),
                expression,
            }
        })
        .collect();

    Sequence {
        from: a.name.clone(),
        to: b.name.clone(),
        steps,
        frames,
    }
}

fn validate_steps(steps: u32) -> MorphResult<()> {
    if steps == 0 {
        return Err(MorphError::validation("steps must be >= 1"));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> MorphResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MorphError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/generator.rs"]
mod tests;
