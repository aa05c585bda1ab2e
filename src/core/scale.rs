use crate::error::{ChartError, ChartResult};

/// Pixel interval a scale maps onto. `end` may be smaller than `start` for
/// axes that grow upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(self) -> f64 {
        (self.end - self.start).abs()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0.0
    }
}

/// Largest domain bound magnitude a scale keeps.
const DOMAIN_LIMIT: f64 = f64::MAX / 4.0;
/// Relative widening of a single-value extent.
const DEGENERATE_PAD_RATIO: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale covering the observed `[min, max]` extent, honouring
    /// explicit bounds and the begin-at-zero rule.
    ///
    /// Empty or degenerate extents are widened so the result is always a
    /// valid scale.
    #[must_use]
    pub fn from_extent(
        extent: Option<(f64, f64)>,
        begin_at_zero: bool,
        min_override: Option<f64>,
        max_override: Option<f64>,
    ) -> Self {
        let (mut min, mut max) = extent.unwrap_or((0.0, 1.0));
        if begin_at_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        if let Some(value) = min_override.filter(|value| value.is_finite()) {
            min = value;
        }
        if let Some(value) = max_override.filter(|value| value.is_finite()) {
            max = value;
        }
        if !min.is_finite() || !max.is_finite() {
            min = 0.0;
            max = 1.0;
        }
        if max < min {
            std::mem::swap(&mut min, &mut max);
        }
        // Keeps `max - min` finite.
        min = min.clamp(-DOMAIN_LIMIT, DOMAIN_LIMIT);
        max = max.clamp(-DOMAIN_LIMIT, DOMAIN_LIMIT);
        if max - min <= 0.0 {
            let pad = (min.abs().max(max.abs()) * DEGENERATE_PAD_RATIO).max(1.0);
            min -= pad;
            max += pad;
        }
        Self {
            domain_start: min,
            domain_end: max,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, range: PixelRange) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let mut normalized = (value - self.domain_start) / span;
        if !normalized.is_finite() {
            // `value - start` overflowed; values this far out pin to the
            // domain edge they lie beyond.
            normalized = (value / span - self.domain_start / span).clamp(-1.0, 2.0);
        }
        Ok(range.start + normalized * (range.end - range.start))
    }

    pub fn pixel_to_domain(self, pixel: f64, range: PixelRange) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        if range.is_empty() {
            return Err(ChartError::InvalidData(
                "pixel range must be non-empty".to_owned(),
            ));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - range.start) / (range.end - range.start);
        Ok(self.domain_start + normalized * span)
    }

    /// `count` evenly spaced tick values across the domain, or ticks every
    /// `step` when a step is given.
    #[must_use]
    pub fn ticks(self, count: usize, step: Option<f64>) -> Vec<f64> {
        if let Some(step) = step.filter(|step| step.is_finite() && *step > 0.0) {
            let first = (self.domain_start / step).ceil() * step;
            let mut ticks = Vec::new();
            let mut tick = first;
            while tick <= self.domain_end + step * 1e-9 && ticks.len() < 1_000 {
                ticks.push(tick);
                let next = tick + step;
                if next <= tick {
                    break;
                }
                tick = next;
            }
            return ticks;
        }
        if count < 2 {
            return vec![self.domain_start];
        }
        let span = self.domain_end - self.domain_start;
        (0..count)
            .map(|i| self.domain_start + span * i as f64 / (count - 1) as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_maps_larger_values_higher() {
        let scale = LinearScale::new(0.0, 100.0).expect("scale");
        let range = PixelRange::new(200.0, 0.0);
        assert_eq!(scale.domain_to_pixel(0.0, range).expect("px"), 200.0);
        assert_eq!(scale.domain_to_pixel(100.0, range).expect("px"), 0.0);
        let back = scale.pixel_to_domain(50.0, range).expect("domain");
        assert!((back - 75.0).abs() <= 1e-9);
    }

    #[test]
    fn degenerate_extent_is_widened() {
        let scale = LinearScale::from_extent(Some((5.0, 5.0)), false, None, None);
        assert_eq!(scale.domain(), (4.0, 6.0));
        let zero_based = LinearScale::from_extent(Some((5.0, 9.0)), true, None, None);
        assert_eq!(zero_based.domain(), (0.0, 9.0));
    }

    #[test]
    fn explicit_bounds_win() {
        let scale = LinearScale::from_extent(Some((10.0, 20.0)), true, Some(-0.5), Some(4.5));
        assert_eq!(scale.domain(), (-0.5, 4.5));
    }

    #[test]
    fn stepped_ticks_cover_domain() {
        let scale = LinearScale::new(-0.5, 4.5).expect("scale");
        assert_eq!(scale.ticks(5, Some(1.0)), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn degenerate_extent_widens_relative_to_magnitude() {
        let scale = LinearScale::from_extent(Some((1e17, 1e17)), false, None, None);
        let (min, max) = scale.domain();
        assert!(min < 1e17 && max > 1e17);
        let px = scale
            .domain_to_pixel(1e17, PixelRange::new(0.0, 100.0))
            .expect("px");
        assert!((px - 50.0).abs() <= 1e-6);
    }

    #[test]
    fn extreme_extent_keeps_finite_span() {
        let scale = LinearScale::from_extent(Some((-f64::MAX, f64::MAX)), true, None, None);
        let (min, max) = scale.domain();
        assert!((max - min).is_finite());
        let range = PixelRange::new(400.0, 0.0);
        for value in [f64::MAX, -f64::MAX, 0.0] {
            assert!(scale.domain_to_pixel(value, range).expect("px").is_finite());
        }
        assert!((scale.domain_to_pixel(0.0, range).expect("px") - 200.0).abs() <= 1e-9);
    }
}
