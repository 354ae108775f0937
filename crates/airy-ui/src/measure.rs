//! Text measurement hook.
//!
//! Components that place overlays relative to text (carets, selections) need
//! glyph metrics. The core never shapes text; a backend implements
//! [`ContentMeasurer`] and hands it to the [`UiContext`](crate::UiContext).

use crate::content::Font;

/// Request to measure a single line of text.
#[derive(Debug, Clone, Copy)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font: &'a Font,
}

/// Intrinsic size measurement result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Backend-agnostic content measurement.
pub trait ContentMeasurer {
    /// Measure the bounding box of a single line of shaped text.
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize;
}

/// Fixed-advance estimate used when no backend measurer is installed
///
/// Every character advances by 0.6 em, which is close enough for caret
/// placement in proportional UI fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceEstimate;

impl ContentMeasurer for MonospaceEstimate {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        let advance = request.font.size * 0.6;
        IntrinsicSize::new(
            request.text.chars().count() as f32 * advance,
            request.font.size * 1.2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_counts_chars_not_bytes() {
        let font = Font::default().with_size(10.0);
        let size = MonospaceEstimate.measure_text(MeasureTextRequest {
            text: "héllo",
            font: &font,
        });
        assert!((size.width - 30.0).abs() < 1e-4);
        assert!((size.height - 12.0).abs() < 1e-4);
    }
}
