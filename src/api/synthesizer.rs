//! Per-kind default encodings merged with caller overrides.

use tracing::debug;

use crate::core::overrides::DatasetOverrides;
use crate::core::palette::MATRIX_STOPS;
use crate::core::{
    AxisPosition, ChartKind, ChartSeries, Color, DataValue, FontWeight, HitMode, LegendPosition,
    ValueRange, hover_palette_color, matrix_color, palette_color, resolve,
};

use super::config::{
    AxisOptions, BarStyle, CellSize, CellStyle, ChartData, ChartOptions, DatasetConfig,
    DatasetStyle, FontSpec, LegendOptions, LineStyle, RenderConfiguration, ScatterStyle,
    SliceStyle, TooltipFormat, TooltipOptions, X_AXIS_ID, Y_AXIS_ID,
};
use super::merge::{ApplyOverrides, parse_override_color};

const LINE_FILL_ALPHA: f64 = 0.1;
const BAR_FILL_ALPHA: f64 = 0.8;
const BAR_HOVER_ALPHA: f64 = 0.9;
const CELL_BORDER: Color = Color::from_rgba8(255, 255, 255, 0.3);
const DARK_TOOLTIP: Color = Color::from_rgba8(0, 0, 0, 0.8);

/// Builds the render configuration of `series` drawn as `kind`.
///
/// Deterministic: the same series always yields an equal configuration.
#[must_use]
pub fn synthesize(kind: ChartKind, series: &ChartSeries) -> RenderConfiguration {
    let datasets = series
        .datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            let mut style = default_style(kind, index, &dataset.values, &dataset.overrides);
            style.apply_overrides(&dataset.overrides);
            DatasetConfig {
                label: dataset.label.clone(),
                values: dataset.values.clone(),
                style,
            }
        })
        .collect::<Vec<_>>();

    let mut options = default_options(kind);
    if let Some(overrides) = &series.options {
        options.apply_overrides(overrides);
    }

    debug!(
        kind = kind.as_str(),
        datasets = datasets.len(),
        labels = series.labels.len(),
        "synthesized render configuration"
    );

    RenderConfiguration {
        kind,
        title: series.title.clone(),
        data: ChartData {
            labels: series.labels.clone(),
            datasets,
        },
        options,
    }
}

/// Resolves the series' own type label and synthesizes it; `None` for
/// unsupported kinds.
#[must_use]
pub fn synthesize_series(series: &ChartSeries) -> Option<RenderConfiguration> {
    resolve(&series.kind)
        .supported()
        .map(|kind| synthesize(kind, series))
}

/// Color the dataset asks for itself, if any.
fn own_color(kind: ChartKind, overrides: &DatasetOverrides) -> Option<Color> {
    let (primary, secondary) = match kind {
        ChartKind::Line => (&overrides.border_color, &overrides.background_color),
        _ => (&overrides.background_color, &overrides.border_color),
    };
    primary
        .as_ref()
        .or(secondary.as_ref())
        .and_then(|spec| spec.first())
        .and_then(|raw| parse_override_color(raw, "datasetColor"))
}

fn default_style(
    kind: ChartKind,
    index: usize,
    values: &[DataValue],
    overrides: &DatasetOverrides,
) -> DatasetStyle {
    let own = own_color(kind, overrides);
    let base = own.unwrap_or_else(|| palette_color(index));
    let hover = own.unwrap_or_else(|| hover_palette_color(index));

    match kind {
        ChartKind::Pie => DatasetStyle::Pie(SliceStyle {
            background: (0..values.len()).map(palette_color).collect(),
            hover_background: (0..values.len()).map(hover_palette_color).collect(),
            border_color: Color::WHITE,
            border_width: 2.0,
            hover_border_width: 3.0,
            hover_offset: 8.0,
        }),
        ChartKind::Line => DatasetStyle::Line(LineStyle {
            border_color: base,
            border_width: 2.0,
            background: base.with_alpha(LINE_FILL_ALPHA),
            fill: true,
            tension: 0.4,
            point_radius: 0.0,
            point_hover_radius: 4.0,
            point_background: base,
            point_hover_background: hover,
            point_hover_border_color: Color::WHITE,
            point_hover_border_width: 2.0,
        }),
        ChartKind::Scatter => DatasetStyle::Scatter(ScatterStyle {
            background: base,
            border_color: base,
            point_background: base,
            point_hover_background: base,
        }),
        ChartKind::Bar => DatasetStyle::Bar(BarStyle {
            background: base.with_alpha(BAR_FILL_ALPHA),
            border_color: hover,
            border_width: 1.0,
            hover_background: hover.with_alpha(BAR_HOVER_ALPHA),
            hover_border_color: hover,
            hover_border_width: 2.0,
        }),
        ChartKind::Matrix => {
            let heats = values.iter().map(|value| value.heat());
            let fills = match ValueRange::observe(heats) {
                Some(range) => values
                    .iter()
                    .map(|value| matrix_color(value.heat(), range))
                    .collect(),
                None => vec![MATRIX_STOPS[2]; values.len()],
            };
            DatasetStyle::Matrix(CellStyle {
                fills,
                border_color: CELL_BORDER,
                border_width: 1.0,
                width: CellSize::DEFAULT_AUTO,
                height: CellSize::DEFAULT_AUTO,
            })
        }
    }
}

fn default_options(kind: ChartKind) -> ChartOptions {
    let mut options = ChartOptions::default();
    match kind {
        ChartKind::Pie => {
            options.plugins.legend = LegendOptions {
                display: false,
                position: LegendPosition::Bottom,
                ..LegendOptions::default()
            };
            options.plugins.legend.labels.color = Color::from_rgb8(0x4A, 0x55, 0x68);
            options.plugins.legend.labels.font = FontSpec::new(14.0, FontWeight::Numeric(500));
            options.plugins.tooltip = dark_tooltip(Color::WHITE, 1.0);
            options.plugins.tooltip.format = TooltipFormat::ShareOfTotal;
        }
        ChartKind::Line => {
            options.interaction.mode = HitMode::Index;
            options.interaction.intersect = false;

            let mut x = category_axis();
            x.ticks.font.size = 10.0;
            let mut y = value_axis();
            y.grid.color = Color::from_rgba8(0, 0, 0, 0.1);
            y.ticks.font.size = 10.0;
            y.ticks.padding = 3.0;
            options.scales.insert(X_AXIS_ID.to_owned(), x);
            options.scales.insert(Y_AXIS_ID.to_owned(), y);

            options.plugins.tooltip = dark_tooltip(palette_color(0), 2.0);
        }
        ChartKind::Bar => {
            options.scales.insert(X_AXIS_ID.to_owned(), category_axis());
            options.scales.insert(Y_AXIS_ID.to_owned(), value_axis());
            options.elements.bar.border_radius = 4.0;
            options.elements.bar.border_skipped = false;
        }
        ChartKind::Scatter => {
            let mut x = AxisOptions::linear();
            x.position = Some(AxisPosition::Bottom);
            options.scales.insert(X_AXIS_ID.to_owned(), x);
            options
                .scales
                .insert(Y_AXIS_ID.to_owned(), AxisOptions::linear());

            let point = &mut options.elements.point;
            point.radius = 5.0;
            point.hover_radius = 8.0;
            point.border_width = 2.0;
            point.hover_border_width = 3.0;

            options.plugins.legend.display = true;
            options.plugins.legend.position = LegendPosition::Top;
            options.plugins.legend.labels.padding = 15.0;
            options.plugins.tooltip.format = TooltipFormat::Point;
        }
        ChartKind::Matrix => {
            for id in [X_AXIS_ID, Y_AXIS_ID] {
                let mut axis = AxisOptions::linear();
                axis.grid.display = false;
                options.scales.insert(id.to_owned(), axis);
            }
            options.plugins.tooltip.format = TooltipFormat::CellValue;
            options.plugins.color_scale.display = true;
        }
    }
    options
}

fn category_axis() -> AxisOptions {
    let mut axis = AxisOptions::category();
    axis.grid.display = false;
    axis
}

fn value_axis() -> AxisOptions {
    let mut axis = AxisOptions::linear();
    axis.begin_at_zero = true;
    axis.ticks.padding = 8.0;
    axis
}

fn dark_tooltip(border_color: Color, border_width: f64) -> TooltipOptions {
    TooltipOptions {
        background_color: DARK_TOOLTIP,
        title_color: Color::WHITE,
        body_color: Color::WHITE,
        border_color,
        border_width,
        ..TooltipOptions::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;

    #[test]
    fn line_fill_is_translucent_stroke() {
        let series = ChartSeries::new("line")
            .with_labels(["a", "b"])
            .with_dataset(Dataset::numbers("s", [1.0, 2.0]));
        let config = synthesize(ChartKind::Line, &series);
        let DatasetStyle::Line(style) = &config.data.datasets[0].style else {
            panic!("expected line style");
        };
        assert_eq!(style.border_color, palette_color(0));
        assert_eq!(style.background, palette_color(0).with_alpha(0.1));
        assert!(style.fill);
    }

    #[test]
    fn own_dataset_color_replaces_palette_slot() {
        let overrides = DatasetOverrides {
            background_color: Some(crate::core::ColorSpec::Single("#112233".to_owned())),
            ..DatasetOverrides::default()
        };
        let series = ChartSeries::new("scatter")
            .with_dataset(Dataset::points("s", [(1.0, 2.0)]).with_overrides(overrides));
        let config = synthesize(ChartKind::Scatter, &series);
        assert_eq!(
            config.data.datasets[0].style.swatch(),
            Color::from_rgb8(0x11, 0x22, 0x33)
        );
        assert_eq!(
            config.data.datasets[0].style.element_fill(0),
            Color::from_rgb8(0x11, 0x22, 0x33)
        );
    }

    #[test]
    fn unsupported_series_has_no_configuration() {
        assert!(synthesize_series(&ChartSeries::new("sankey")).is_none());
        assert!(synthesize_series(&ChartSeries::new("Column")).is_some());
    }
}
