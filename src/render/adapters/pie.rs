use std::f64::consts::{FRAC_PI_2, TAU};

use crate::api::{DatasetStyle, RenderConfiguration};
use crate::core::ChartKind;
use crate::error::ChartResult;
use crate::interaction::ElementHit;
use crate::render::{ChartScene, HitShape, WedgePrimitive};

use super::{SceneAdapter, style_mismatch};

/// First slice starts at twelve o'clock.
const START_ANGLE: f64 = -FRAC_PI_2;

/// Slices as concentric rings, one ring per dataset, outermost first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieAdapter;

impl SceneAdapter for PieAdapter {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn draw(&self, config: &RenderConfiguration, scene: &mut ChartScene) -> ChartResult<()> {
        let area = scene.plot_area;
        let ring_count = config.data.datasets.len();
        if ring_count == 0 || area.is_empty() {
            return Ok(());
        }

        let hover_room = config
            .data
            .datasets
            .iter()
            .filter_map(|dataset| match &dataset.style {
                DatasetStyle::Pie(style) => Some(style.hover_offset),
                _ => None,
            })
            .fold(0.0_f64, f64::max);
        let (cx, cy) = area.center();
        let outer = (area.width.min(area.height) / 2.0 - hover_room).max(0.0);
        let ring_width = outer / ring_count as f64;

        for (dataset_index, dataset) in config.data.datasets.iter().enumerate() {
            let total: f64 = dataset
                .values
                .iter()
                .map(|value| slice_magnitude(value.magnitude()))
                .sum();
            if total <= 0.0 {
                continue;
            }
            let DatasetStyle::Pie(style) = &dataset.style else {
                return Err(style_mismatch(ChartKind::Pie, dataset_index));
            };
            let outer_radius = outer - ring_width * dataset_index as f64;
            let inner_radius = (outer_radius - ring_width).max(0.0);

            let mut angle = START_ANGLE;
            for (index, value) in dataset.values.iter().enumerate() {
                let sweep = slice_magnitude(value.magnitude()) / total * TAU;
                if sweep <= 0.0 {
                    continue;
                }
                let wedge = WedgePrimitive {
                    cx,
                    cy,
                    inner_radius,
                    outer_radius,
                    start_angle: angle,
                    end_angle: angle + sweep,
                    fill_color: style.slice_color(index),
                    border_color: style.border_color,
                    border_width: style.border_width,
                };
                let mid = wedge.mid_angle();
                let mid_radius = (inner_radius + outer_radius) / 2.0;
                scene.wedges.push(wedge);
                scene.push_hit_region(
                    ElementHit::new(dataset_index, index),
                    HitShape::Wedge {
                        cx,
                        cy,
                        inner_radius,
                        outer_radius,
                        start_angle: wedge.start_angle,
                        end_angle: wedge.end_angle,
                    },
                    (cx + mid.cos() * mid_radius, cy + mid.sin() * mid_radius),
                );
                angle += sweep;
            }
        }
        Ok(())
    }
}

/// Negative and non-finite values take no room.
fn slice_magnitude(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
