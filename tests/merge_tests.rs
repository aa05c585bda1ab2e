use dashchart::api::{
    ApplyOverrides, AxisOptions, CellSize, DatasetStyle, X_AXIS_ID, Y_AXIS_ID, synthesize,
};
use dashchart::core::overrides::{AxisOverrides, AxisTitleOverrides, TooltipOverrides};
use dashchart::core::{
    AxisKind, ChartKind, ChartSeries, Color, ColorSpec, Dataset, DatasetOverrides,
    OptionOverrides, hover_palette_color, palette_color,
};
use dashchart::interaction::ElementHit;

fn bar_series(options: OptionOverrides) -> ChartSeries {
    ChartSeries::new("bar")
        .with_labels(["A", "B"])
        .with_dataset(Dataset::numbers("Units", [3.0, 4.0]))
        .with_options(options)
}

#[test]
fn axis_override_keeps_untouched_defaults() {
    let mut options = OptionOverrides::default();
    options.scales.insert(
        Y_AXIS_ID.to_owned(),
        AxisOverrides {
            max: Some(2500.0),
            title: Some(AxisTitleOverrides {
                display: Some(true),
                text: Some("Sales ($)".to_owned()),
                ..AxisTitleOverrides::default()
            }),
            ..AxisOverrides::default()
        },
    );
    let config = synthesize(ChartKind::Bar, &bar_series(options));
    let y = config.axis(Y_AXIS_ID).expect("y axis");

    assert_eq!(y.max, Some(2500.0));
    assert!(y.title.display);
    assert_eq!(y.title.text, "Sales ($)");
    assert!(y.begin_at_zero);
    assert_eq!(y.kind, AxisKind::Linear);
    assert_eq!(y.ticks.padding, 8.0);
}

#[test]
fn override_of_unknown_axis_starts_from_axis_defaults() {
    let mut options = OptionOverrides::default();
    options.scales.insert(
        "y2".to_owned(),
        AxisOverrides {
            min: Some(-1.0),
            ..AxisOverrides::default()
        },
    );
    let config = synthesize(ChartKind::Bar, &bar_series(options));
    let extra = config.axis("y2").expect("extra axis");
    assert_eq!(extra.min, Some(-1.0));
    assert_eq!(extra.grid, AxisOptions::default().grid);
    assert!(config.axis(X_AXIS_ID).is_some());
}

#[test]
fn unparseable_color_keeps_default() {
    let series = ChartSeries::new("bar")
        .with_labels(["A"])
        .with_dataset(Dataset::numbers("Units", [1.0]).with_overrides(DatasetOverrides {
            hover_border_color: Some(ColorSpec::Single("not-a-color".to_owned())),
            border_width: Some(3.0),
            ..DatasetOverrides::default()
        }));
    let config = synthesize(ChartKind::Bar, &series);
    let DatasetStyle::Bar(style) = &config.data.datasets[0].style else {
        panic!("expected bar style");
    };
    assert_eq!(style.hover_border_color, hover_palette_color(0));
    assert_eq!(style.border_width, 3.0);
}

#[test]
fn short_color_list_only_replaces_leading_slices() {
    let series = ChartSeries::new("pie")
        .with_labels(["A", "B", "C"])
        .with_dataset(Dataset::numbers("", [1.0, 2.0, 3.0]).with_overrides(DatasetOverrides {
            background_color: Some(ColorSpec::PerValue(vec!["#000000".to_owned()])),
            ..DatasetOverrides::default()
        }));
    let config = synthesize(ChartKind::Pie, &series);
    let style = &config.data.datasets[0].style;
    assert_eq!(style.element_fill(0), Color::BLACK);
    assert_eq!(style.element_fill(1), palette_color(1));
    assert_eq!(style.element_fill(2), palette_color(2));
}

#[test]
fn single_pie_color_applies_to_every_slice() {
    let series = ChartSeries::new("pie")
        .with_labels(["A", "B"])
        .with_dataset(Dataset::numbers("", [1.0, 2.0]).with_overrides(DatasetOverrides {
            background_color: Some(ColorSpec::Single("white".to_owned())),
            ..DatasetOverrides::default()
        }));
    let config = synthesize(ChartKind::Pie, &series);
    let style = &config.data.datasets[0].style;
    assert_eq!(style.element_fill(0), Color::WHITE);
    assert_eq!(style.element_fill(1), Color::WHITE);
}

#[test]
fn matrix_cell_size_override_is_fixed() {
    let series = ChartSeries::new("matrix").with_dataset(
        Dataset::cells("m", [(0.0, 0.0, 1.0)]).with_overrides(DatasetOverrides {
            width: Some(30.0),
            ..DatasetOverrides::default()
        }),
    );
    let config = synthesize(ChartKind::Matrix, &series);
    let DatasetStyle::Matrix(style) = &config.data.datasets[0].style else {
        panic!("expected matrix style");
    };
    assert_eq!(style.width, CellSize::Fixed { px: 30.0 });
    assert_eq!(style.height, CellSize::DEFAULT_AUTO);
}

#[test]
fn value_suffix_extends_series_tooltips() {
    let options = OptionOverrides {
        plugins: Some(dashchart::core::overrides::PluginOverrides {
            tooltip: Some(TooltipOverrides {
                value_suffix: Some("units".to_owned()),
                ..TooltipOverrides::default()
            }),
            ..Default::default()
        }),
        ..OptionOverrides::default()
    };
    let config = synthesize(ChartKind::Bar, &bar_series(options));
    let text = config.tooltip_text(ElementHit::new(0, 1)).expect("tooltip");
    assert_eq!(text.title, "B");
    assert_eq!(text.lines, vec!["Units: 4 units".to_owned()]);
}

#[test]
fn applying_same_overrides_twice_is_stable() {
    let mut options = OptionOverrides::default();
    options.scales.insert(
        X_AXIS_ID.to_owned(),
        AxisOverrides {
            begin_at_zero: Some(true),
            ..AxisOverrides::default()
        },
    );
    let mut once = synthesize(ChartKind::Line, &ChartSeries::new("line")).options;
    once.apply_overrides(&options);
    let mut twice = once.clone();
    twice.apply_overrides(&options);
    assert_eq!(once, twice);
}
