use crate::api::{AxisOptions, DatasetStyle, RenderConfiguration, X_AXIS_ID, Y_AXIS_ID};
use crate::core::ChartKind;
use crate::error::ChartResult;
use crate::interaction::ElementHit;
use crate::render::{AreaPrimitive, ChartScene, CirclePrimitive, HitShape, PathPrimitive};

use super::{SceneAdapter, style_mismatch};
use super::axes::{self, CategoryBand};

/// Filled trend lines over category slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineAdapter;

impl SceneAdapter for LineAdapter {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn draw(&self, config: &RenderConfiguration, scene: &mut ChartScene) -> ChartResult<()> {
        let area = scene.plot_area;
        let count = config.category_count();
        let band = CategoryBand::new(area, count);
        let x_axis = config.axis(X_AXIS_ID).cloned().unwrap_or_else(AxisOptions::category);
        let y_axis = config.axis(Y_AXIS_ID).cloned().unwrap_or_else(AxisOptions::linear);

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

        let baseline = axes::baseline(y_scale, y_range)?;
        for (dataset_index, dataset) in config.data.datasets.iter().enumerate() {
            let DatasetStyle::Line(style) = &dataset.style else {
                return Err(style_mismatch(ChartKind::Line, dataset_index));
            };
            let points = dataset
                .values
                .iter()
                .take(count)
                .enumerate()
                .map(|(index, value)| {
                    let y = y_scale.domain_to_pixel(finite_or_zero(value.magnitude()), y_range)?;
                    Ok((band.center(index), y))
                })
                .collect::<ChartResult<Vec<_>>>()?;
            if points.is_empty() {
                continue;
            }

            if style.fill {
                scene.areas.push(AreaPrimitive {
                    points: points.clone(),
                    baseline_y: baseline,
                    fill_color: style.background,
                    tension: style.tension,
                });
            }
            if style.border_width > 0.0 {
                scene.paths.push(PathPrimitive {
                    points: points.clone(),
                    stroke_width: style.border_width,
                    color: style.border_color,
                    tension: style.tension,
                });
            }

            for (index, &(x, y)) in points.iter().enumerate() {
                if style.point_radius > 0.0 {
                    scene.circles.push(CirclePrimitive {
                        cx: x,
                        cy: y,
                        radius: style.point_radius,
                        fill_color: style.point_background,
                        border_color: config.options.elements.point.border_color,
                        border_width: config.options.elements.point.border_width,
                    });
                }
                let half = band.step() / 2.0;
                let hit_radius = style.point_hover_radius.max(style.point_radius) + 1.0;
                let shape = if scene.intersect {
                    HitShape::Circle {
                        cx: x,
                        cy: y,
                        radius: hit_radius,
                    }
                } else {
                    HitShape::Rect {
                        x: x - half,
                        y: area.y,
                        width: half * 2.0,
                        height: area.height,
                    }
                };
                scene.push_hit_region(ElementHit::new(dataset_index, index), shape, (x, y));
            }
        }
        Ok(())
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
