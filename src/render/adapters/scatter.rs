use crate::api::{AxisOptions, DatasetStyle, RenderConfiguration, X_AXIS_ID, Y_AXIS_ID};
use crate::core::ChartKind;
use crate::error::ChartResult;
use crate::interaction::ElementHit;
use crate::render::{ChartScene, CirclePrimitive, HitShape};

use super::axes;
use super::{SceneAdapter, style_mismatch};

/// Extra pointer slack around each point.
const HIT_SLACK_PX: f64 = 1.0;

/// Points on two linear axes. Entries without coordinates are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterAdapter;

impl SceneAdapter for ScatterAdapter {
    fn kind(&self) -> ChartKind {
        ChartKind::Scatter
    }

    fn draw(&self, config: &RenderConfiguration, scene: &mut ChartScene) -> ChartResult<()> {
        let area = scene.plot_area;
        let x_axis = config
            .axis(X_AXIS_ID)
            .cloned()
            .unwrap_or_else(AxisOptions::linear);
        let y_axis = config
            .axis(Y_AXIS_ID)
            .cloned()
            .unwrap_or_else(AxisOptions::linear);

        let points = || {
            config
                .data
                .datasets
                .iter()
                .flat_map(|dataset| dataset.values.iter().filter_map(|value| value.point()))
        };
        let x_scale = axes::value_scale(Some(&x_axis), axes::extent(points().map(|(x, _)| x)));
        let y_scale = axes::value_scale(Some(&y_axis), axes::extent(points().map(|(_, y)| y)));
        let x_range = axes::x_range(area);
        let y_range = axes::y_range(area);

        axes::draw_linear_y_axis(scene, &y_axis, y_scale)?;
        axes::draw_linear_x_axis(scene, &x_axis, x_scale)?;

        let point_options = &config.options.elements.point;
        for (dataset_index, dataset) in config.data.datasets.iter().enumerate() {
            let DatasetStyle::Scatter(style) = &dataset.style else {
                return Err(style_mismatch(ChartKind::Scatter, dataset_index));
            };
            for (index, value) in dataset.values.iter().enumerate() {
                let Some((x, y)) = value.point() else {
                    continue;
                };
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                let cx = x_scale.domain_to_pixel(x, x_range)?;
                let cy = y_scale.domain_to_pixel(y, y_range)?;
                scene.circles.push(CirclePrimitive {
                    cx,
                    cy,
                    radius: point_options.radius,
                    fill_color: style.point_background,
                    border_color: point_options.border_color,
                    border_width: point_options.border_width,
                });
                scene.push_hit_region(
                    ElementHit::new(dataset_index, index),
                    HitShape::Circle {
                        cx,
                        cy,
                        radius: point_options.radius + HIT_SLACK_PX,
                    },
                    (cx, cy),
                );
            }
        }
        Ok(())
    }
}
