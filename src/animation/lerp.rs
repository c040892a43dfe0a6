use crate::{
    expression::model::LineSegment,
    foundation::core::{Point, Rgb8},
};

/// Linear blend between two values of the same type.
///
/// `t` is expected to already be eased and clamped to `[0, 1]`.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgb8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Truncates toward zero; a convex combination of in-range channels stays in range.
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + t * (b - a)) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
    }
}

impl Lerp for LineSegment {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let width = f64::from(a.width) + t * (f64::from(b.width) - f64::from(a.width));
        Self {
            start: <Point as Lerp>::lerp(&a.start, &b.start, t),
            end: <Point as Lerp>::lerp(&a.end, &b.end, t),
            width: width as u32,
            color: <Rgb8 as Lerp>::lerp(&a.color, &b.color, t),
        }
    }
}

pub fn blend_color(c1: Rgb8, c2: Rgb8, t: f64) -> Rgb8 {
    Rgb8::lerp(&c1, &c2, t)
}

pub fn blend_point(p1: Point, p2: Point, t: f64) -> Point {
    <Point as Lerp>::lerp(&p1, &p2, t)
}

pub fn blend_line(l1: &LineSegment, l2: &LineSegment, t: f64) -> LineSegment {
    LineSegment::lerp(l1, l2, t)
}

/// Blend two line lists pairwise by index after padding them to equal length.
///
/// The shorter list is extended by repeating its last segment; an empty list is
/// filled with [`LineSegment::PLACEHOLDER`]. Correspondence is purely positional:
/// index `i` of one list is assumed to draw the same feature as index `i` of the
/// other. Lists whose strokes are ordered differently will blend unrelated strokes
/// into each other and may visibly cross or snap mid-transition.
pub fn align_and_blend_lines(
    list1: &[LineSegment],
    list2: &[LineSegment],
    t: f64,
) -> Vec<LineSegment> {
    let len = list1.len().max(list2.len());
    (0..len)
        .map(|i| blend_line(padded(list1, i), padded(list2, i), t))
        .collect()
}

fn padded(list: &[LineSegment], i: usize) -> &LineSegment {
    list.get(i)
        .or_else(|| list.last())
        .unwrap_or(&LineSegment::PLACEHOLDER)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
