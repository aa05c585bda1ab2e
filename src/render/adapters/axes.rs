use crate::api::AxisOptions;
use crate::core::{Color, LinearScale, PixelRange, PlotArea, ValueRange};
use crate::error::ChartResult;
use crate::render::{ChartScene, LinePrimitive, TextHAlign, TextPrimitive};

const DEFAULT_TICK_COUNT: usize = 6;

/// Evenly sized category slots along the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CategoryBand {
    start: f64,
    step: f64,
}

impl CategoryBand {
    pub(super) fn new(area: PlotArea, count: usize) -> Self {
        let step = if count == 0 {
            area.width
        } else {
            area.width / count as f64
        };
        Self {
            start: area.x,
            step,
        }
    }

    pub(super) fn center(self, index: usize) -> f64 {
        self.start + self.step * (index as f64 + 0.5)
    }

    pub(super) fn step(self) -> f64 {
        self.step
    }
}

/// Finite `(min, max)` of `values`.
pub(super) fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    ValueRange::observe(values).map(|range| (range.min, range.max))
}

/// Widens an extent by `margin` on both sides.
pub(super) fn pad_extent(extent: Option<(f64, f64)>, margin: f64) -> Option<(f64, f64)> {
    extent.map(|(min, max)| (min - margin, max + margin))
}

pub(super) fn value_scale(axis: Option<&AxisOptions>, extent: Option<(f64, f64)>) -> LinearScale {
    match axis {
        Some(axis) => LinearScale::from_extent(extent, axis.begin_at_zero, axis.min, axis.max),
        None => LinearScale::from_extent(extent, false, None, None),
    }
}

pub(super) fn x_range(area: PlotArea) -> PixelRange {
    PixelRange::new(area.x, area.right())
}

pub(super) fn y_range(area: PlotArea) -> PixelRange {
    PixelRange::new(area.bottom(), area.y)
}

/// Pixel position of the value axis origin, clamped into the domain.
pub(super) fn baseline(scale: LinearScale, range: PixelRange) -> ChartResult<f64> {
    let (start, end) = scale.domain();
    let origin = 0.0_f64.max(start.min(end)).min(start.max(end));
    scale.domain_to_pixel(origin, range)
}

fn tick_values(scale: LinearScale, axis: &AxisOptions) -> Vec<f64> {
    scale.ticks(DEFAULT_TICK_COUNT, axis.ticks.step_size)
}

fn tick_text(
    axis: &AxisOptions,
    text: String,
    x: f64,
    y: f64,
    h_align: TextHAlign,
) -> Option<TextPrimitive> {
    if text.is_empty() {
        return None;
    }
    Some(
        TextPrimitive::new(text, x, y, axis.ticks.font.size, axis.ticks.color, h_align)
            .bold(axis.ticks.font.weight.is_bold()),
    )
}

fn grid_line(x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, 1.0, color)
}

pub(super) fn draw_category_x_axis(
    scene: &mut ChartScene,
    axis: &AxisOptions,
    labels: &[String],
    band: CategoryBand,
    count: usize,
) {
    let area = scene.plot_area;
    for index in 0..count {
        let x = band.center(index);
        if axis.grid.display {
            scene
                .lines
                .push(grid_line(x, area.y, x, area.bottom(), axis.grid.color));
        }
        let text = match &axis.ticks.labels {
            Some(table) => table.get(index).cloned().unwrap_or_default(),
            None => labels.get(index).cloned().unwrap_or_default(),
        };
        let y = area.bottom() + axis.ticks.padding;
        if let Some(text) = tick_text(axis, text, x, y, TextHAlign::Center) {
            scene.texts.push(text);
        }
    }
    finish_x_axis(scene, axis);
}

pub(super) fn draw_linear_x_axis(
    scene: &mut ChartScene,
    axis: &AxisOptions,
    scale: LinearScale,
) -> ChartResult<()> {
    let area = scene.plot_area;
    let range = x_range(area);
    for value in tick_values(scale, axis) {
        let x = scale.domain_to_pixel(value, range)?;
        if axis.grid.display {
            scene
                .lines
                .push(grid_line(x, area.y, x, area.bottom(), axis.grid.color));
        }
        let y = area.bottom() + axis.ticks.padding;
        let label = axis.ticks.label_for(value);
        if let Some(text) = tick_text(axis, label, x, y, TextHAlign::Center) {
            scene.texts.push(text);
        }
    }
    finish_x_axis(scene, axis);
    Ok(())
}

pub(super) fn draw_linear_y_axis(
    scene: &mut ChartScene,
    axis: &AxisOptions,
    scale: LinearScale,
) -> ChartResult<()> {
    let area = scene.plot_area;
    let range = y_range(area);
    for value in tick_values(scale, axis) {
        let y = scale.domain_to_pixel(value, range)?;
        if axis.grid.display {
            scene
                .lines
                .push(grid_line(area.x, y, area.right(), y, axis.grid.color));
        }
        let x = area.x - axis.ticks.padding;
        let top = y - axis.ticks.font.size / 2.0;
        let label = axis.ticks.label_for(value);
        if let Some(text) = tick_text(axis, label, x, top, TextHAlign::Right) {
            scene.texts.push(text);
        }
    }

    if axis.border.display {
        scene.lines.push(grid_line(
            area.x,
            area.y,
            area.x,
            area.bottom(),
            axis.ticks.color,
        ));
    }
    if axis.title.display && !axis.title.text.is_empty() {
        let (_, cy) = area.center();
        let x = (area.x - axis.ticks.padding - super::AXIS_TITLE_BAND_PX * 2.0).max(0.0);
        scene.texts.push(
            TextPrimitive::new(
                axis.title.text.clone(),
                x,
                cy,
                axis.title.font.size,
                axis.title.color,
                TextHAlign::Left,
            )
            .bold(axis.title.font.weight.is_bold()),
        );
    }
    Ok(())
}

fn finish_x_axis(scene: &mut ChartScene, axis: &AxisOptions) {
    let area = scene.plot_area;
    if axis.border.display {
        scene.lines.push(grid_line(
            area.x,
            area.bottom(),
            area.right(),
            area.bottom(),
            axis.ticks.color,
        ));
    }
    if axis.title.display && !axis.title.text.is_empty() {
        let (cx, _) = area.center();
        let y = area.bottom() + axis.ticks.padding + axis.ticks.font.size + 6.0;
        scene.texts.push(
            TextPrimitive::new(
                axis.title.text.clone(),
                cx,
                y,
                axis.title.font.size,
                axis.title.color,
                TextHAlign::Center,
            )
            .bold(axis.title.font.weight.is_bold()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_slots_are_centered() {
        let band = CategoryBand::new(PlotArea::new(10.0, 0.0, 300.0, 100.0), 3);
        assert_eq!(band.step(), 100.0);
        assert_eq!(band.center(0), 60.0);
        assert_eq!(band.center(2), 260.0);
    }

    #[test]
    fn baseline_clamps_into_domain() {
        let scale = LinearScale::new(5.0, 15.0).expect("scale");
        let range = PixelRange::new(100.0, 0.0);
        assert_eq!(baseline(scale, range).expect("baseline"), 100.0);
    }
}
