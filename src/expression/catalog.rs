use std::{collections::HashSet, io::Read};

use crate::{
    expression::model::{ExpressionDef, LineGroup, LineSegment, Swatch},
    foundation::core::Rgb8,
    foundation::error::{MorphError, MorphResult},
};

/// The seven base expressions shipped with the built-in catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ExpressionName {
    Happy,
    Caring,
    Concerned,
    Encouraging,
    Alert,
    Sad,
    Neutral,
}

impl ExpressionName {
    /// Canonical catalog order.
    pub const ALL: [ExpressionName; 7] = [
        Self::Happy,
        Self::Caring,
        Self::Concerned,
        Self::Encouraging,
        Self::Alert,
        Self::Sad,
        Self::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Caring => "Caring",
            Self::Concerned => "Concerned",
            Self::Encouraging => "Encouraging",
            Self::Alert => "Alert",
            Self::Sad => "Sad",
            Self::Neutral => "Neutral",
        }
    }

    /// Human-readable label used in frame descriptions and reports.
    pub fn description(self) -> &'static str {
        match self {
            Self::Happy => "开心",
            Self::Caring => "关怀",
            Self::Concerned => "担忧",
            Self::Encouraging => "鼓励",
            Self::Alert => "警示",
            Self::Sad => "悲伤",
            Self::Neutral => "中性",
        }
    }
}

/// One named catalog slot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub expression: ExpressionDef,
}

/// Immutable mapping from expression name to definition, in insertion order.
///
/// Built once and handed to [`crate::SequenceGenerator`] by reference; nothing
/// generated from it is ever written back.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

#[derive(serde::Deserialize)]
struct CatalogFile {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> MorphResult<Self> {
        if entries.is_empty() {
            return Err(MorphError::validation("catalog must have at least one entry"));
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(MorphError::validation("catalog entry name must be non-empty"));
            }
            if !seen.insert(entry.name.to_ascii_lowercase()) {
                return Err(MorphError::validation(format!(
                    "duplicate catalog entry '{}'",
                    entry.name
                )));
            }
            entry.expression.validate()?;
        }
        Ok(Self { entries })
    }

    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        let file: CatalogFile =
            serde_json::from_str(s).map_err(|e| MorphError::serde(format!("catalog: {e}")))?;
        Self::new(file.entries)
    }

    pub fn from_json_reader(r: impl Read) -> MorphResult<Self> {
        let file: CatalogFile =
            serde_json::from_reader(r).map_err(|e| MorphError::serde(format!("catalog: {e}")))?;
        Self::new(file.entries)
    }

    pub fn to_json_pretty(&self) -> MorphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MorphError::serde(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by name; exact match wins, otherwise ASCII case is ignored.
    pub fn get(&self, name: &str) -> MorphResult<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
            })
            .ok_or_else(|| MorphError::unknown_expression(name))
    }

    /// Line-drawn faces for the seven base expressions.
    pub fn builtin() -> Self {
        let entries = ExpressionName::ALL
            .into_iter()
            .map(|name| CatalogEntry {
                name: name.as_str().to_string(),
                expression: line_face(name),
            })
            .collect();
        Self { entries }
    }

    /// Emoji swatches for the seven base expressions, each with a synthetic border outline.
    pub fn builtin_swatches() -> Self {
        let entries = ExpressionName::ALL
            .into_iter()
            .map(|name| CatalogEntry {
                name: name.as_str().to_string(),
                expression: swatch_face(name),
            })
            .collect();
        Self { entries }
    }
}

const OUTLINE_WIDTH: u32 = 4;
const FEATURE_WIDTH: u32 = 5;

// Eyes are one stroke each, eyebrows one stroke each, mouth a three-stroke polyline.
// Every face uses the same per-group counts so frame 0 and the last frame reproduce
// their endpoints exactly.
struct Face {
    background: Rgb8,
    ink: Rgb8,
    eyes: [(f64, f64, f64, f64); 2],
    brows: [(f64, f64, f64, f64); 2],
    mouth: [(f64, f64); 4],
    eye_width: u32,
}

fn line_face(name: ExpressionName) -> ExpressionDef {
    let face = match name {
        ExpressionName::Happy => Face {
            background: Rgb8::new(200, 255, 200),
            ink: Rgb8::new(0, 100, 0),
            eyes: [(62.0, 88.0, 78.0, 88.0), (122.0, 88.0, 138.0, 88.0)],
            brows: [(58.0, 62.0, 82.0, 58.0), (118.0, 58.0, 142.0, 62.0)],
            mouth: [(62.0, 122.0), (85.0, 142.0), (115.0, 142.0), (138.0, 122.0)],
            eye_width: FEATURE_WIDTH,
        },
        ExpressionName::Caring => Face {
            background: Rgb8::new(255, 220, 228),
            ink: Rgb8::new(139, 69, 19),
            eyes: [(64.0, 86.0, 76.0, 90.0), (124.0, 90.0, 136.0, 86.0)],
            brows: [(58.0, 64.0, 82.0, 62.0), (118.0, 62.0, 142.0, 64.0)],
            mouth: [(68.0, 128.0), (88.0, 138.0), (112.0, 138.0), (132.0, 128.0)],
            eye_width: FEATURE_WIDTH,
        },
        ExpressionName::Concerned => Face {
            background: Rgb8::new(255, 225, 180),
            ink: Rgb8::new(139, 69, 19),
            eyes: [(70.0, 82.0, 70.0, 96.0), (130.0, 82.0, 130.0, 96.0)],
            brows: [(58.0, 68.0, 82.0, 60.0), (118.0, 60.0, 142.0, 68.0)],
            mouth: [(70.0, 140.0), (88.0, 134.0), (112.0, 134.0), (130.0, 140.0)],
            eye_width: FEATURE_WIDTH,
        },
        ExpressionName::Encouraging => Face {
            background: Rgb8::new(205, 228, 245),
            ink: Rgb8::new(25, 25, 112),
            eyes: [(70.0, 80.0, 70.0, 96.0), (130.0, 80.0, 130.0, 96.0)],
            brows: [(58.0, 60.0, 82.0, 56.0), (118.0, 56.0, 142.0, 60.0)],
            mouth: [(60.0, 124.0), (84.0, 146.0), (116.0, 146.0), (140.0, 124.0)],
            eye_width: 6,
        },
        ExpressionName::Alert => Face {
            background: Rgb8::new(255, 200, 190),
            ink: Rgb8::new(139, 0, 0),
            eyes: [(70.0, 74.0, 70.0, 100.0), (130.0, 74.0, 130.0, 100.0)],
            brows: [(56.0, 56.0, 82.0, 66.0), (118.0, 66.0, 144.0, 56.0)],
            mouth: [(80.0, 130.0), (120.0, 130.0), (120.0, 148.0), (80.0, 148.0)],
            eye_width: 7,
        },
        ExpressionName::Sad => Face {
            background: Rgb8::new(200, 200, 200),
            ink: Rgb8::new(105, 105, 105),
            eyes: [(70.0, 86.0, 70.0, 96.0), (130.0, 86.0, 130.0, 96.0)],
            brows: [(58.0, 70.0, 82.0, 60.0), (118.0, 60.0, 142.0, 70.0)],
            mouth: [(64.0, 146.0), (86.0, 132.0), (114.0, 132.0), (136.0, 146.0)],
            eye_width: 4,
        },
        ExpressionName::Neutral => Face {
            background: Rgb8::new(225, 225, 225),
            ink: Rgb8::new(105, 105, 105),
            eyes: [(70.0, 82.0, 70.0, 96.0), (130.0, 82.0, 130.0, 96.0)],
            brows: [(58.0, 64.0, 82.0, 64.0), (118.0, 64.0, 142.0, 64.0)],
            mouth: [(66.0, 136.0), (86.0, 136.0), (114.0, 136.0), (134.0, 136.0)],
            eye_width: FEATURE_WIDTH,
        },
    };

    let ink = face.ink;
    let stroke = |(x0, y0, x1, y1): (f64, f64, f64, f64), width: u32| {
        LineSegment::new((x0, y0), (x1, y1), width, ink)
    };

    let outline = [
        (30.0, 30.0, 170.0, 30.0),
        (170.0, 30.0, 170.0, 170.0),
        (170.0, 170.0, 30.0, 170.0),
        (30.0, 170.0, 30.0, 30.0),
    ]
    .into_iter()
    .map(|l| stroke(l, OUTLINE_WIDTH))
    .collect();
    let eyes = face.eyes.into_iter().map(|l| stroke(l, face.eye_width)).collect();
    let brows = face.brows.into_iter().map(|l| stroke(l, 3)).collect();
    let mouth = face
        .mouth
        .windows(2)
        .map(|w| stroke((w[0].0, w[0].1, w[1].0, w[1].1), FEATURE_WIDTH))
        .collect();

    ExpressionDef::new(name.description(), face.background)
        .with_lines(LineGroup::Outline, outline)
        .with_lines(LineGroup::Eyes, eyes)
        .with_lines(LineGroup::Eyebrows, brows)
        .with_lines(LineGroup::Mouth, mouth)
}

fn swatch_face(name: ExpressionName) -> ExpressionDef {
    let (background, text_color, scale, opacity, emoji) = match name {
        ExpressionName::Happy => ((144, 238, 144), (0, 100, 0), 1.2, 1.0, "😊"),
        ExpressionName::Caring => ((255, 182, 193), (139, 69, 19), 1.1, 0.9, "🤗"),
        ExpressionName::Concerned => ((255, 165, 0), (139, 69, 19), 0.9, 0.8, "😟"),
        ExpressionName::Encouraging => ((173, 216, 230), (25, 25, 112), 1.3, 1.0, "💪"),
        ExpressionName::Alert => ((255, 99, 71), (139, 0, 0), 1.1, 1.0, "⚠️"),
        ExpressionName::Sad => ((169, 169, 169), (105, 105, 105), 0.8, 0.7, "😢"),
        ExpressionName::Neutral => ((211, 211, 211), (105, 105, 105), 1.0, 0.8, "😐"),
    };
    let rgb = |(r, g, b): (u8, u8, u8)| Rgb8::new(r, g, b);

    ExpressionDef::from_swatch(
        name.description(),
        rgb(background),
        Swatch {
            text_color: rgb(text_color),
            scale,
            opacity,
            emoji: emoji.to_string(),
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/expression/catalog.rs"]
mod tests;
