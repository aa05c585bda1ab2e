use crate::api::{AxisOptions, DatasetStyle, RenderConfiguration, X_AXIS_ID, Y_AXIS_ID};
use crate::core::ChartKind;
use crate::error::ChartResult;
use crate::interaction::ElementHit;
use crate::render::{ChartScene, HitShape, RectPrimitive};

use super::axes;
use super::{SceneAdapter, style_mismatch};

/// Half a grid step of room around the outermost cells.
const EDGE_MARGIN: f64 = 0.5;

/// Heatmap cells centered on their `(x, y)` grid coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixAdapter;

impl SceneAdapter for MatrixAdapter {
    fn kind(&self) -> ChartKind {
        ChartKind::Matrix
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

        let cells = || {
            config
                .data
                .datasets
                .iter()
                .flat_map(|dataset| dataset.values.iter().filter_map(|value| value.point()))
        };
        let x_extent = axes::pad_extent(axes::extent(cells().map(|(x, _)| x)), EDGE_MARGIN);
        let y_extent = axes::pad_extent(axes::extent(cells().map(|(_, y)| y)), EDGE_MARGIN);
        let x_scale = axes::value_scale(Some(&x_axis), x_extent);
        let y_scale = axes::value_scale(Some(&y_axis), y_extent);
        let x_range = axes::x_range(area);
        let y_range = axes::y_range(area);

        axes::draw_linear_y_axis(scene, &y_axis, y_scale)?;
        axes::draw_linear_x_axis(scene, &x_axis, x_scale)?;

        for (dataset_index, dataset) in config.data.datasets.iter().enumerate() {
            let DatasetStyle::Matrix(style) = &dataset.style else {
                return Err(style_mismatch(ChartKind::Matrix, dataset_index));
            };
            let width = style.width.resolve(area.width);
            let height = style.height.resolve(area.height);
            for (index, value) in dataset.values.iter().enumerate() {
                let Some((x, y)) = value.point() else {
                    continue;
                };
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                let cx = x_scale.domain_to_pixel(x, x_range)?;
                let cy = y_scale.domain_to_pixel(y, y_range)?;
                let left = cx - width / 2.0;
                let top = cy - height / 2.0;

                scene.rects.push(
                    RectPrimitive::new(left, top, width, height, style.cell_fill(index))
                        .with_border(style.border_color, style.border_width),
                );
                scene.push_hit_region(
                    ElementHit::new(dataset_index, index),
                    HitShape::Rect {
                        x: left,
                        y: top,
                        width,
                        height,
                    },
                    (cx, cy),
                );
            }
        }
        Ok(())
    }
}
