use dashchart::api::{
    CellSize, DatasetStyle, RenderConfiguration, TooltipFormat, X_AXIS_ID, Y_AXIS_ID, synthesize,
    synthesize_series,
};
use dashchart::core::palette::MATRIX_STOPS;
use dashchart::core::{
    AxisKind, ChartKind, ChartSeries, Color, Dataset, HitMode, LegendPosition, hover_palette_color,
    palette_color,
};
use dashchart::interaction::ElementHit;

fn category_series(kind: &str) -> ChartSeries {
    ChartSeries::new(kind)
        .with_title("Quarterly")
        .with_labels(["A", "B", "C"])
        .with_dataset(Dataset::numbers("Sales", [10.0, 20.0, 30.0]))
        .with_dataset(Dataset::numbers("Costs", [5.0, 6.0, 7.0]))
}

fn line_text(config: &RenderConfiguration, hit: ElementHit) -> String {
    config
        .tooltip_text(hit)
        .expect("tooltip")
        .lines
        .first()
        .cloned()
        .expect("one line")
}

#[test]
fn pie_defaults_hide_legend_and_report_share_of_total() {
    let series = ChartSeries::new("pie")
        .with_labels(["Chrome", "Safari"])
        .with_dataset(Dataset::numbers("Usage", [75.0, 25.0]));
    let config = synthesize(ChartKind::Pie, &series);

    assert!(!config.options.plugins.legend.display);
    assert_eq!(config.options.plugins.legend.position, LegendPosition::Bottom);
    assert_eq!(config.options.plugins.tooltip.format, TooltipFormat::ShareOfTotal);
    assert!(config.options.scales.is_empty());

    let DatasetStyle::Pie(style) = &config.data.datasets[0].style else {
        panic!("expected pie style");
    };
    assert_eq!(style.background, vec![palette_color(0), palette_color(1)]);
    assert_eq!(
        style.hover_background,
        vec![hover_palette_color(0), hover_palette_color(1)]
    );
    assert_eq!(line_text(&config, ElementHit::new(0, 1)), "Safari: 25 (25% of total)");
}

#[test]
fn all_zero_pie_reports_zero_percent() {
    let series = ChartSeries::new("pie")
        .with_labels(["A", "B", "C"])
        .with_dataset(Dataset::numbers("", [0.0, 0.0, 0.0]));
    let config = synthesize(ChartKind::Pie, &series);
    assert_eq!(line_text(&config, ElementHit::new(0, 0)), "A: 0 (0% of total)");
}

#[test]
fn line_defaults_use_index_mode_and_translucent_area() {
    let config = synthesize(ChartKind::Line, &category_series("area"));
    assert_eq!(config.options.interaction.mode, HitMode::Index);
    assert!(!config.options.interaction.intersect);

    let x = config.axis(X_AXIS_ID).expect("x axis");
    let y = config.axis(Y_AXIS_ID).expect("y axis");
    assert_eq!(x.kind, AxisKind::Category);
    assert!(!x.grid.display);
    assert_eq!(y.kind, AxisKind::Linear);
    assert!(y.begin_at_zero);

    for (index, dataset) in config.data.datasets.iter().enumerate() {
        let DatasetStyle::Line(style) = &dataset.style else {
            panic!("expected line style");
        };
        assert_eq!(style.border_color, palette_color(index));
        assert!(style.fill);
        assert_eq!(style.point_radius, 0.0);
    }
}

#[test]
fn bar_defaults_round_corners_and_begin_at_zero() {
    let config = synthesize(ChartKind::Bar, &category_series("column"));
    assert_eq!(config.options.elements.bar.border_radius, 4.0);
    assert!(!config.options.elements.bar.border_skipped);
    assert!(config.axis(Y_AXIS_ID).expect("y axis").begin_at_zero);

    let DatasetStyle::Bar(style) = &config.data.datasets[1].style else {
        panic!("expected bar style");
    };
    assert_eq!(style.background, palette_color(1).with_alpha(0.8));
    assert_eq!(style.border_color, hover_palette_color(1));
    assert_eq!(line_text(&config, ElementHit::new(1, 2)), "Costs: 7");
}

#[test]
fn scatter_defaults_show_legend_and_point_tooltip() {
    let series = ChartSeries::new("scatter")
        .with_dataset(Dataset::points("Dataset 1", [(10.0, 20.0), (15.0, 25.0)]));
    let config = synthesize(ChartKind::Scatter, &series);

    assert!(config.options.plugins.legend.display);
    assert_eq!(config.options.plugins.legend.position, LegendPosition::Top);
    assert_eq!(config.options.elements.point.radius, 5.0);
    assert_eq!(config.options.elements.point.hover_radius, 8.0);
    assert_eq!(
        config.axis(X_AXIS_ID).expect("x axis").kind,
        AxisKind::Linear
    );
    assert_eq!(line_text(&config, ElementHit::new(0, 1)), "Dataset 1: (15, 25)");
}

#[test]
fn matrix_cells_fall_into_five_buckets() {
    let series = ChartSeries::new("heatmap").with_dataset(Dataset::cells(
        "Activity",
        [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 25.0),
            (2.0, 0.0, 50.0),
            (3.0, 0.0, 75.0),
            (4.0, 0.0, 100.0),
        ],
    ));
    let config = synthesize(ChartKind::Matrix, &series);
    let DatasetStyle::Matrix(style) = &config.data.datasets[0].style else {
        panic!("expected matrix style");
    };
    assert_eq!(style.fills, MATRIX_STOPS.to_vec());
    assert_eq!(style.width, CellSize::DEFAULT_AUTO);
    assert_eq!(line_text(&config, ElementHit::new(0, 3)), "Value: 75");
}

#[test]
fn single_matrix_cell_uses_middle_bucket() {
    let series =
        ChartSeries::new("matrix").with_dataset(Dataset::cells("One", [(0.0, 0.0, 42.0)]));
    let config = synthesize(ChartKind::Matrix, &series);
    assert_eq!(config.data.datasets[0].style.element_fill(0), MATRIX_STOPS[2]);
}

#[test]
fn misaligned_dataset_reads_missing_values_as_zero() {
    let series = ChartSeries::new("bar")
        .with_labels(["A", "B", "C"])
        .with_dataset(Dataset::numbers("Short", [4.0, 8.0]));
    let config = synthesize(ChartKind::Bar, &series);
    assert_eq!(config.value_at(0, 2), 0.0);
    assert_eq!(config.category_count(), 3);
    assert_eq!(line_text(&config, ElementHit::new(0, 2)), "Short: 0");
}

#[test]
fn synthesis_is_deterministic() {
    let series = category_series("line");
    assert_eq!(
        synthesize(ChartKind::Line, &series),
        synthesize(ChartKind::Line, &series)
    );
    assert_eq!(
        synthesize_series(&series),
        Some(synthesize(ChartKind::Line, &series))
    );
}

#[test]
fn empty_series_still_synthesizes() {
    for kind in ChartKind::ALL {
        let config = synthesize(kind, &ChartSeries::new(kind.as_str()));
        assert!(config.is_empty());
        assert_eq!(config.kind, kind);
    }
}

#[test]
fn palette_cycles_past_ten_datasets() {
    let mut series = ChartSeries::new("line").with_labels(["a"]);
    for index in 0..12 {
        series = series.with_dataset(Dataset::numbers(format!("s{index}"), [1.0]));
    }
    let config = synthesize(ChartKind::Line, &series);
    assert_eq!(
        config.data.datasets[10].style.swatch(),
        config.data.datasets[0].style.swatch()
    );
    assert_ne!(
        config.data.datasets[1].style.swatch(),
        Color::from_rgb8(0x3B, 0x82, 0xF6)
    );
}
