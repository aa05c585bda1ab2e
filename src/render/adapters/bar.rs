use crate::api::{AxisOptions, DatasetStyle, RenderConfiguration, X_AXIS_ID, Y_AXIS_ID};
use crate::core::ChartKind;
use crate::error::ChartResult;
use crate::interaction::ElementHit;
use crate::render::{ChartScene, HitShape, RectPrimitive};

use super::axes::{self, CategoryBand};
use super::{SceneAdapter, style_mismatch};

/// Share of a category slot covered by its group of bars.
const CATEGORY_PERCENTAGE: f64 = 0.8;
/// Share of a bar's sub-slot covered by the bar itself.
const BAR_PERCENTAGE: f64 = 0.9;

/// Grouped vertical bars, one group per category.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarAdapter;

impl SceneAdapter for BarAdapter {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn draw(&self, config: &RenderConfiguration, scene: &mut ChartScene) -> ChartResult<()> {
        let area = scene.plot_area;
        let count = config.category_count();
        let band = CategoryBand::new(area, count);
        let x_axis = config
            .axis(X_AXIS_ID)
            .cloned()
            .unwrap_or_else(AxisOptions::category);
        let y_axis = config
            .axis(Y_AXIS_ID)
            .cloned()
            .unwrap_or_else(AxisOptions::linear);

        let extent = axes::extent(
            config
                .data
                .datasets
                .iter()
                .flat_map(|dataset| dataset.values.iter().take(count))
                .map(|value| value.magnitude()),
        );
        let y_scale = axes::value_scale(Some(&y_axis), extent);
        let y_range = axes::y_range(area);

        axes::draw_linear_y_axis(scene, &y_axis, y_scale)?;
        axes::draw_category_x_axis(scene, &x_axis, &config.data.labels, band, count);

        let dataset_count = config.data.datasets.len().max(1);
        let group_width = band.step() * CATEGORY_PERCENTAGE;
        let slot_width = group_width / dataset_count as f64;
        let bar_width = slot_width * BAR_PERCENTAGE;
        let baseline = axes::baseline(y_scale, y_range)?;
        let radius = config.options.elements.bar.border_radius;

        for (dataset_index, dataset) in config.data.datasets.iter().enumerate() {
            let DatasetStyle::Bar(style) = &dataset.style else {
                return Err(style_mismatch(ChartKind::Bar, dataset_index));
            };
            for (index, value) in dataset.values.iter().take(count).enumerate() {
                let magnitude = value.magnitude();
                if !magnitude.is_finite() {
                    continue;
                }
                let top = y_scale.domain_to_pixel(magnitude, y_range)?;
                let group_left = band.center(index) - group_width / 2.0;
                let x = group_left
                    + slot_width * dataset_index as f64
                    + (slot_width - bar_width) / 2.0;
                let y = top.min(baseline);
                let height = (top - baseline).abs();

                scene.rects.push(
                    RectPrimitive::new(x, y, bar_width, height, style.background)
                        .with_border(style.border_color, style.border_width)
                        .with_corner_radius(radius),
                );
                scene.push_hit_region(
                    ElementHit::new(dataset_index, index),
                    HitShape::Rect {
                        x,
                        y,
                        width: bar_width,
                        height,
                    },
                    (x + bar_width / 2.0, top),
                );
            }
        }
        Ok(())
    }
}
