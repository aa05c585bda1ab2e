//! Fixed default palettes.
//!
//! Colors are assigned by position only, so synthesizing the same series
//! twice always yields the same colors.

use ordered_float::OrderedFloat;

use crate::core::Color;

pub const PALETTE_SIZE: usize = 10;

/// Base palette, cycled per dataset (or per slice for pies).
pub const BASE_PALETTE: [Color; PALETTE_SIZE] = [
    Color::from_rgb8(0x3B, 0x82, 0xF6),
    Color::from_rgb8(0xEF, 0x44, 0x44),
    Color::from_rgb8(0x10, 0xB9, 0x81),
    Color::from_rgb8(0xF5, 0x9E, 0x0B),
    Color::from_rgb8(0x8B, 0x5C, 0xF6),
    Color::from_rgb8(0xF9, 0x73, 0x16),
    Color::from_rgb8(0x06, 0xB6, 0xD4),
    Color::from_rgb8(0x84, 0xCC, 0x16),
    Color::from_rgb8(0xEC, 0x48, 0x99),
    Color::from_rgb8(0x63, 0x66, 0xF1),
];

/// Darker variants, index-aligned with [`BASE_PALETTE`].
pub const HOVER_PALETTE: [Color; PALETTE_SIZE] = [
    Color::from_rgb8(0x25, 0x63, 0xEB),
    Color::from_rgb8(0xDC, 0x26, 0x26),
    Color::from_rgb8(0x05, 0x96, 0x69),
    Color::from_rgb8(0xD9, 0x77, 0x06),
    Color::from_rgb8(0x7C, 0x3A, 0xED),
    Color::from_rgb8(0xEA, 0x58, 0x0C),
    Color::from_rgb8(0x08, 0x91, 0xB2),
    Color::from_rgb8(0x65, 0xA3, 0x0D),
    Color::from_rgb8(0xDB, 0x27, 0x77),
    Color::from_rgb8(0x4F, 0x46, 0xE5),
];

/// Heatmap color stops from lightest to darkest.
pub const MATRIX_STOPS: [Color; 5] = [
    Color::from_rgba8(219, 234, 254, 0.8),
    Color::from_rgba8(147, 197, 253, 0.9),
    Color::from_rgba8(59, 130, 246, 0.8),
    Color::from_rgba8(37, 99, 235, 0.9),
    Color::from_rgba8(29, 78, 216, 1.0),
];

/// Upper bounds (exclusive) of the first four heatmap buckets.
pub const MATRIX_THRESHOLDS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

#[must_use]
pub fn palette_color(index: usize) -> Color {
    BASE_PALETTE[index % PALETTE_SIZE]
}

#[must_use]
pub fn hover_palette_color(index: usize) -> Color {
    HOVER_PALETTE[index % PALETTE_SIZE]
}

/// Observed value range of a set of cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl ValueRange {
    /// Range over the finite values; `None` when there are none.
    pub fn observe(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let finite: Vec<OrderedFloat<f64>> = values
            .into_iter()
            .filter(|value| value.is_finite())
            .map(OrderedFloat)
            .collect();
        let min = finite.iter().min()?.into_inner();
        let max = finite.iter().max()?.into_inner();
        Some(Self {
            min,
            max,
            count: finite.len(),
        })
    }

    /// Position of `value` inside the range in `[0, 1]`.
    ///
    /// A single observation or a degenerate range sits in the middle.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.max - self.min;
        if self.count < 2 || span <= 0.0 || !value.is_finite() {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Bucket index (0 = lightest, 4 = darkest) for a normalized value.
#[must_use]
pub fn matrix_bucket(normalized: f64) -> usize {
    MATRIX_THRESHOLDS
        .iter()
        .position(|threshold| normalized < *threshold)
        .unwrap_or(MATRIX_STOPS.len() - 1)
}

#[must_use]
pub fn matrix_color(value: f64, range: ValueRange) -> Color {
    MATRIX_STOPS[matrix_bucket(range.normalize(value))]
}
