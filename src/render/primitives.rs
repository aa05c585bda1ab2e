use crate::core::Color;
use crate::error::{ChartError, ChartResult};

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_non_negative(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and >= 0"
        )))
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle, optionally outlined and rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_color: Color, border_width: f64) -> Self {
        self.border_color = border_color;
        self.border_width = border_width;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x, self.y], "rect origin")?;
        ensure_non_negative(self.width, "rect width")?;
        ensure_non_negative(self.height, "rect height")?;
        ensure_non_negative(self.border_width, "rect border width")?;
        ensure_non_negative(self.corner_radius, "rect corner radius")?;
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Annular sector used for pie slices.
///
/// Angles are radians measured clockwise from the positive x axis in screen
/// space; `end_angle >= start_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl WedgePrimitive {
    #[must_use]
    pub fn mid_angle(self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(
            &[self.cx, self.cy, self.start_angle, self.end_angle],
            "wedge geometry",
        )?;
        ensure_non_negative(self.inner_radius, "wedge inner radius")?;
        ensure_non_negative(self.outer_radius, "wedge outer radius")?;
        ensure_non_negative(self.border_width, "wedge border width")?;
        if self.outer_radius < self.inner_radius || self.end_angle < self.start_angle {
            return Err(ChartError::InvalidData(
                "wedge must have outer >= inner radius and end >= start angle".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// One cubic Bezier segment: start, two control points, end.
pub type CubicSegment = [(f64, f64); 4];

/// Cubic segments through `points`, bent by `tension` (0 = straight).
///
/// Control points follow the neighbouring points, so a tension of `0.4`
/// gives the soft monotone-looking curves dashboards use for trends.
#[must_use]
pub fn smooth_segments(points: &[(f64, f64)], tension: f64) -> Vec<CubicSegment> {
    let tension = if tension.is_finite() {
        tension.clamp(0.0, 1.0)
    } else {
        0.0
    };
    points
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (p1, p2) = (pair[0], pair[1]);
            let p0 = if index == 0 { p1 } else { points[index - 1] };
            let p3 = points.get(index + 2).copied().unwrap_or(p2);
            let c1 = (
                p1.0 + (p2.0 - p0.0) * tension / 2.0,
                p1.1 + (p2.1 - p0.1) * tension / 2.0,
            );
            let c2 = (
                p2.0 - (p3.0 - p1.0) * tension / 2.0,
                p2.1 - (p3.1 - p1.1) * tension / 2.0,
            );
            [p1, c1, c2, p2]
        })
        .collect()
}

/// Stroked polyline, optionally smoothed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
    pub tension: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn segments(&self) -> Vec<CubicSegment> {
        smooth_segments(&self.points, self.tension)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (x, y) in &self.points {
            ensure_finite(&[*x, *y], "path points")?;
        }
        ensure_finite(&[self.tension], "path tension")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Region between a (smoothed) polyline and a horizontal baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPrimitive {
    pub points: Vec<(f64, f64)>,
    pub baseline_y: f64,
    pub fill_color: Color,
    pub tension: f64,
}

impl AreaPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        for (x, y) in &self.points {
            ensure_finite(&[*x, *y], "area points")?;
        }
        ensure_finite(&[self.baseline_y, self.tension], "area baseline")?;
        self.fill_color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.cx, self.cy], "circle center")?;
        ensure_non_negative(self.radius, "circle radius")?;
        ensure_non_negative(self.border_width, "circle border width")?;
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub bold: bool,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            bold: false,
            color,
            h_align,
        }
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y], "text coordinates")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tension_keeps_control_points_on_endpoints() {
        let segments = smooth_segments(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)], 0.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], [(0.0, 0.0), (0.0, 0.0), (10.0, 10.0), (10.0, 10.0)]);
    }

    #[test]
    fn inverted_wedge_is_rejected() {
        let wedge = WedgePrimitive {
            cx: 0.0,
            cy: 0.0,
            inner_radius: 10.0,
            outer_radius: 5.0,
            start_angle: 0.0,
            end_angle: 1.0,
            fill_color: Color::BLACK,
            border_color: Color::WHITE,
            border_width: 1.0,
        };
        assert!(wedge.validate().is_err());
    }
}
