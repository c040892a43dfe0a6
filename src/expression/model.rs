use crate::foundation::core::{CANVAS_SIZE, Point, Rgb8};
use crate::foundation::error::{MorphError, MorphResult};

/// A single straight stroke on the logical 200x200 canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub width: u32,
    pub color: Rgb8,
}

impl LineSegment {
    /// Zero-length mid-gray stroke at the canvas center, used to pad an empty group.
    pub const PLACEHOLDER: Self = Self {
        start: Point::new(CANVAS_SIZE as f64 / 2.0, CANVAS_SIZE as f64 / 2.0),
        end: Point::new(CANVAS_SIZE as f64 / 2.0, CANVAS_SIZE as f64 / 2.0),
        width: 1,
        color: Rgb8::MID_GRAY,
    };

    pub fn new(start: impl Into<Point>, end: impl Into<Point>, width: u32, color: Rgb8) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            width,
            color,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// The four anatomical stroke categories, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineGroup {
    Outline,
    Eyes,
    Eyebrows,
    Mouth,
}

impl LineGroup {
    pub const ALL: [LineGroup; 4] = [Self::Outline, Self::Eyes, Self::Eyebrows, Self::Mouth];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Eyes => "eyes",
            Self::Eyebrows => "eyebrows",
            Self::Mouth => "mouth",
        }
    }
}

/// Font-glyph presentation of an expression: an emoji drawn in `text_color`
/// at `scale` over a background faded to `opacity`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Swatch {
    pub text_color: Rgb8,
    pub scale: f64,
    pub opacity: f64,
    pub emoji: String,
}

/// A fully resolved facial expression: background fill plus four line groups.
///
/// Catalog entries and interpolated frames share this type. Groups are kept apart
/// because each one is aligned independently when blending.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExpressionDef {
    pub label: String,
    pub background: Rgb8,
    #[serde(default)]
    pub outline: Vec<LineSegment>,
    #[serde(default)]
    pub eyes: Vec<LineSegment>,
    #[serde(default)]
    pub eyebrows: Vec<LineSegment>,
    #[serde(default)]
    pub mouth: Vec<LineSegment>,
    /// Optional glyph presentation carried alongside the line drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swatch: Option<Swatch>,
}

impl ExpressionDef {
    pub fn new(label: impl Into<String>, background: Rgb8) -> Self {
        Self {
            label: label.into(),
            background,
            outline: Vec::new(),
            eyes: Vec::new(),
            eyebrows: Vec::new(),
            mouth: Vec::new(),
            swatch: None,
        }
    }

    pub fn with_lines(mut self, group: LineGroup, lines: Vec<LineSegment>) -> Self {
        *self.group_mut(group) = lines;
        self
    }

    pub fn with_swatch(mut self, swatch: Swatch) -> Self {
        self.swatch = Some(swatch);
        self
    }

    /// Swatch-only expression: the background plus a synthetic body border as its outline.
    ///
    /// The border is the canvas inset by 5px, stroked 3px wide in the text color
    /// darkened by 50 per channel.
    pub fn from_swatch(label: impl Into<String>, background: Rgb8, swatch: Swatch) -> Self {
        const INSET: f64 = 5.0;
        const FAR: f64 = CANVAS_SIZE as f64 - INSET;

        let color = border_color(swatch.text_color);
        let corners = [
            Point::new(INSET, INSET),
            Point::new(FAR, INSET),
            Point::new(FAR, FAR),
            Point::new(INSET, FAR),
        ];
        let border = (0..corners.len())
            .map(|i| LineSegment::new(corners[i], corners[(i + 1) % corners.len()], 3, color))
            .collect();

        Self::new(label, background)
            .with_lines(LineGroup::Outline, border)
            .with_swatch(swatch)
    }

    pub fn group(&self, group: LineGroup) -> &[LineSegment] {
        match group {
            LineGroup::Outline => &self.outline,
            LineGroup::Eyes => &self.eyes,
            LineGroup::Eyebrows => &self.eyebrows,
            LineGroup::Mouth => &self.mouth,
        }
    }

    pub fn group_mut(&mut self, group: LineGroup) -> &mut Vec<LineSegment> {
        match group {
            LineGroup::Outline => &mut self.outline,
            LineGroup::Eyes => &mut self.eyes,
            LineGroup::Eyebrows => &mut self.eyebrows,
            LineGroup::Mouth => &mut self.mouth,
        }
    }

    /// All segments in draw order (outline, eyes, eyebrows, mouth).
    pub fn segments(&self) -> impl Iterator<Item = &LineSegment> {
        LineGroup::ALL.into_iter().flat_map(|g| self.group(g).iter())
    }

    pub fn segment_count(&self) -> usize {
        LineGroup::ALL.iter().map(|&g| self.group(g).len()).sum()
    }

    /// Check the invariants catalog entries must satisfy.
    ///
    /// Interpolated frames are never validated; blending preserves these whenever
    /// both inputs satisfy them.
    pub fn validate(&self) -> MorphResult<()> {
        for group in LineGroup::ALL {
            for (i, seg) in self.group(group).iter().enumerate() {
                if seg.width == 0 {
                    return Err(MorphError::validation(format!(
                        "expression '{}' {}[{i}] width must be >= 1",
                        self.label,
                        group.as_str()
                    )));
                }
                let coords = [seg.start.x, seg.start.y, seg.end.x, seg.end.y];
                if !coords.iter().all(|c| c.is_finite()) {
                    return Err(MorphError::validation(format!(
                        "expression '{}' {}[{i}] has non-finite coordinates",
                        self.label,
                        group.as_str()
                    )));
                }
            }
        }
        if let Some(sw) = &self.swatch {
            if !sw.scale.is_finite() || sw.scale <= 0.0 {
                return Err(MorphError::validation(format!(
                    "expression '{}' swatch scale must be finite and > 0",
                    self.label
                )));
            }
            if !(0.0..=1.0).contains(&sw.opacity) {
                return Err(MorphError::validation(format!(
                    "expression '{}' swatch opacity must be in [0, 1]",
                    self.label
                )));
            }
        }
        Ok(())
    }
}

/// Border stroke color for a swatch with the given text color.
pub(crate) fn border_color(text_color: Rgb8) -> Rgb8 {
    text_color.darken(50)
}

#[cfg(test)]
#[path = "../../tests/unit/expression/model.rs"]
mod tests;
