use crate::{
    animation::ease::ease,
    animation::lerp::{Lerp, align_and_blend_lines, blend_color},
    expression::model::{ExpressionDef, LineGroup, Swatch, border_color},
};

/// Blend two expressions at progress `t`.
///
/// `t` is clamped to `[0, 1]` and eased once with [`ease`]; the eased value drives every
/// sub-blend (background, all four line groups, the optional swatch). The label is
/// `"{from}→{to}"` for every `t`.
///
/// When both sides carry a swatch, the outline is their border and is recolored from the
/// blended text color rather than blended stroke by stroke.
///
/// Never fails: mismatched group lengths are padded (see [`align_and_blend_lines`]).
pub fn interpolate_expressions(from: &ExpressionDef, to: &ExpressionDef, t: f64) -> ExpressionDef {
    let smooth_t = ease(t);

    let mut out = ExpressionDef::new(
        format!("{}→{}", from.label, to.label),
        blend_color(from.background, to.background, smooth_t),
    );
    for group in LineGroup::ALL {
        *out.group_mut(group) = align_and_blend_lines(from.group(group), to.group(group), smooth_t);
    }
    out.swatch = blend_swatch(from.swatch.as_ref(), to.swatch.as_ref(), smooth_t);
    if from.swatch.is_some()
        && to.swatch.is_some()
        && let Some(swatch) = &out.swatch
    {
        let color = border_color(swatch.text_color);
        for seg in &mut out.outline {
            seg.color = color;
        }
    }
    out
}

fn blend_swatch(from: Option<&Swatch>, to: Option<&Swatch>, smooth_t: f64) -> Option<Swatch> {
    match (from, to) {
        (Some(a), Some(b)) => Some(Swatch {
            text_color: blend_color(a.text_color, b.text_color, smooth_t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, smooth_t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, smooth_t),
            // Glyphs cannot blend; swap at the eased midpoint.
            emoji: if smooth_t < 0.5 {
                a.emoji.clone()
            } else {
                b.emoji.clone()
            },
        }),
        (Some(only), None) | (None, Some(only)) => Some(only.clone()),
        (None, None) => None,
    }
}

#[cfg(test)]
#[path = "../tests/unit/interpolate.rs"]
mod tests;
