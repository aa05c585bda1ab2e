use std::f64::consts::TAU;

use tracing::trace;

use crate::core::{HitMode, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ActiveElements, ElementHit};
use crate::render::{
    AreaPrimitive, CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
    WedgePrimitive,
};

/// Pointer-sensitive shape of one data element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitShape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    Wedge {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

impl HitShape {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        match self {
            Self::Rect {
                x: left,
                y: top,
                width,
                height,
            } => x >= left && x <= left + width && y >= top && y <= top + height,
            Self::Circle { cx, cy, radius } => (x - cx).hypot(y - cy) <= radius,
            Self::Wedge {
                cx,
                cy,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
            } => {
                let distance = (x - cx).hypot(y - cy);
                if distance < inner_radius || distance > outer_radius {
                    return false;
                }
                let angle = (y - cy).atan2(x - cx);
                let offset = (angle - start_angle).rem_euclid(TAU);
                offset <= end_angle - start_angle
            }
        }
    }
}

/// Hit-testable element together with its anchor point (bar top, point
/// center, slice centroid) used to rank candidates by distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub hit: ElementHit,
    pub shape: HitShape,
    pub anchor: (f64, f64),
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are painted in field order: areas, grid and axis lines, rects,
/// wedges, paths, circles, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub hit_mode: HitMode,
    pub intersect: bool,
    pub areas: Vec<AreaPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub wedges: Vec<WedgePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub hit_regions: Vec<HitRegion>,
}

impl ChartScene {
    #[must_use]
    pub fn new(viewport: Viewport, plot_area: PlotArea) -> Self {
        Self {
            viewport,
            plot_area,
            hit_mode: HitMode::Nearest,
            intersect: true,
            areas: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            wedges: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            hit_regions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hit_mode(mut self, mode: HitMode, intersect: bool) -> Self {
        self.hit_mode = mode;
        self.intersect = intersect;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn push_hit_region(&mut self, hit: ElementHit, shape: HitShape, anchor: (f64, f64)) {
        self.hit_regions.push(HitRegion { hit, shape, anchor });
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for area in &self.areas {
            area.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.wedges.is_empty()
            && self.paths.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    /// Number of drawn data elements (one per hit region).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.hit_regions.len()
    }

    /// Elements under the pointer at `(x, y)`, closest first.
    ///
    /// `Index` mode without intersection snaps to the category column nearest
    /// the pointer and reports every dataset's element in it, as long as the
    /// pointer is inside the plot area.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> ActiveElements {
        let mut active = ActiveElements::new();
        if !x.is_finite() || !y.is_finite() {
            return active;
        }

        match self.hit_mode {
            HitMode::Index if !self.intersect => {
                if !self.plot_area.contains(x, y) {
                    return active;
                }
                if let Some(nearest) = self.nearest_by(|region| (region.anchor.0 - x).abs()) {
                    let column = nearest.hit.element_index;
                    active.extend(
                        self.hit_regions
                            .iter()
                            .filter(|region| region.hit.element_index == column)
                            .map(|region| region.hit),
                    );
                    active.sort_by_key(|hit| hit.dataset_index);
                }
            }
            HitMode::Index => {
                if let Some(column) = self.containing(x, y).next().map(|r| r.hit.element_index) {
                    active.extend(
                        self.hit_regions
                            .iter()
                            .filter(|region| region.hit.element_index == column)
                            .map(|region| region.hit),
                    );
                }
            }
            HitMode::Nearest => {
                let candidate = if self.intersect {
                    self.containing(x, y)
                        .min_by(|a, b| distance(a, x, y).total_cmp(&distance(b, x, y)))
                } else if self.plot_area.contains(x, y) {
                    self.nearest_by(|region| distance(region, x, y))
                } else {
                    None
                };
                active.extend(candidate.map(|region| region.hit));
            }
            HitMode::Point => {
                active.extend(self.containing(x, y).map(|region| region.hit));
            }
        }

        trace!(x, y, hits = active.len(), "scene hit test");
        active
    }

    fn containing(&self, x: f64, y: f64) -> impl Iterator<Item = &HitRegion> {
        self.hit_regions
            .iter()
            .filter(move |region| region.shape.contains(x, y))
    }

    fn nearest_by(&self, metric: impl Fn(&HitRegion) -> f64) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .min_by(|a, b| metric(a).total_cmp(&metric(b)))
    }
}

fn distance(region: &HitRegion, x: f64, y: f64) -> f64 {
    (region.anchor.0 - x).hypot(region.anchor.1 - y)
}
