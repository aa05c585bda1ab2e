//! Built-in demo charts shown to visitors without a session.

use crate::core::overrides::{AxisOverrides, AxisTitleOverrides, TickOverrides};
use crate::core::{ChartSeries, ColorSpec, Dataset, DatasetOverrides, OptionOverrides};
use crate::interaction::InteractionEvent;

use super::{X_AXIS_ID, Y_AXIS_ID};

/// Named rows and columns of the activity heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapAxisLabels {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
}

impl HeatmapAxisLabels {
    #[must_use]
    pub fn weekday_activity() -> Self {
        Self {
            x_labels: strings(&["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]),
            y_labels: strings(&["Morning", "Afternoon", "Evening"]),
        }
    }

    fn x_label(&self, index: usize) -> Option<&str> {
        self.x_labels.get(index).map(String::as_str)
    }

    fn y_label(&self, index: usize) -> Option<&str> {
        self.y_labels.get(index).map(String::as_str)
    }
}

impl Default for HeatmapAxisLabels {
    fn default() -> Self {
        Self::weekday_activity()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn titled_axis(text: &str) -> AxisOverrides {
    AxisOverrides {
        title: Some(AxisTitleOverrides {
            display: Some(true),
            text: Some(text.to_owned()),
            ..AxisTitleOverrides::default()
        }),
        ..AxisOverrides::default()
    }
}

fn axis_titles(x: &str, y: AxisOverrides) -> OptionOverrides {
    let mut options = OptionOverrides::default();
    options.scales.insert(X_AXIS_ID.to_owned(), titled_axis(x));
    options.scales.insert(Y_AXIS_ID.to_owned(), y);
    options
}

fn per_value(colors: &[&str]) -> Option<ColorSpec> {
    Some(ColorSpec::PerValue(strings(colors)))
}

#[must_use]
pub fn browser_usage() -> ChartSeries {
    ChartSeries::new("pie")
        .with_title("Browser Usage Statistics")
        .with_labels(["Chrome", "Safari", "Firefox", "Edge", "Other"])
        .with_dataset(
            Dataset::numbers("", [65.0, 20.0, 8.0, 5.0, 2.0]).with_overrides(DatasetOverrides {
                background_color: per_value(&["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"]),
                hover_background_color: per_value(&[
                    "#2563EB", "#059669", "#D97706", "#DC2626", "#7C3AED",
                ]),
                ..DatasetOverrides::default()
            }),
        )
}

#[must_use]
pub fn sales_performance() -> ChartSeries {
    let y = AxisOverrides {
        max: Some(2500.0),
        ..titled_axis("Sales ($)")
    };
    ChartSeries::new("line")
        .with_title("Sales Performance")
        .with_labels(["Jan", "Feb", "Mar", "Apr", "May", "Jun"])
        .with_dataset(Dataset::numbers(
            "Monthly Sales",
            [1200.0, 1900.0, 800.0, 1400.0, 1700.0, 2100.0],
        ))
        .with_options(axis_titles("Month", y))
}

#[must_use]
pub fn data_correlation() -> ChartSeries {
    ChartSeries::new("scatter")
        .with_title("Data Correlation")
        .with_dataset(Dataset::points(
            "Dataset 1",
            [
                (10.0, 20.0),
                (15.0, 25.0),
                (20.0, 30.0),
                (25.0, 35.0),
                (30.0, 28.0),
                (35.0, 45.0),
            ],
        ))
        .with_dataset(Dataset::points(
            "Dataset 2",
            [
                (12.0, 15.0),
                (18.0, 22.0),
                (22.0, 18.0),
                (28.0, 32.0),
                (32.0, 40.0),
                (38.0, 38.0),
            ],
        ))
        .with_options(axis_titles("X Values", titled_axis("Y Values")))
}

#[must_use]
pub fn value_distribution() -> ChartSeries {
    ChartSeries::new("bar")
        .with_title("Value Distribution")
        .with_labels(["0-10", "10-20", "20-30", "30-40", "40-50", "50-60"])
        .with_dataset(Dataset::numbers(
            "Frequency Distribution",
            [5.0, 12.0, 18.0, 25.0, 15.0, 8.0],
        ))
        .with_options(axis_titles("Value Ranges", titled_axis("Frequency")))
}

/// Weekday by time-of-day activity; tick text comes from short day and
/// period names.
#[must_use]
pub fn activity_heatmap() -> ChartSeries {
    let activity = [
        [5.0, 12.0, 3.0],
        [18.0, 25.0, 8.0],
        [22.0, 35.0, 15.0],
        [10.0, 28.0, 20.0],
        [30.0, 40.0, 25.0],
    ];
    let cells = activity.iter().enumerate().flat_map(|(day, periods)| {
        periods
            .iter()
            .enumerate()
            .map(move |(period, &v)| (day as f64, period as f64, v))
    });

    let tick_axis = |max: f64, labels: &[&str]| AxisOverrides {
        min: Some(-0.5),
        max: Some(max),
        ticks: Some(TickOverrides {
            step_size: Some(1.0),
            labels: Some(strings(labels)),
            ..TickOverrides::default()
        }),
        ..AxisOverrides::default()
    };
    let mut options = OptionOverrides::default();
    options.scales.insert(
        X_AXIS_ID.to_owned(),
        tick_axis(4.5, &["Mon", "Tue", "Wed", "Thu", "Fri"]),
    );
    options.scales.insert(
        Y_AXIS_ID.to_owned(),
        tick_axis(2.5, &["Morning", "Afternoon", "Evening"]),
    );

    ChartSeries::new("matrix")
        .with_title("Activity Heatmap")
        .with_dataset(Dataset::cells("Activity Heatmap", cells))
        .with_options(options)
}

/// Every showcase chart in display order.
#[must_use]
pub fn showcase_charts() -> Vec<ChartSeries> {
    vec![
        browser_usage(),
        sales_performance(),
        data_correlation(),
        value_distribution(),
        activity_heatmap(),
    ]
}

/// Landing page charts: two product share pies and an inventory line.
#[must_use]
pub fn landing_charts() -> Vec<ChartSeries> {
    let products = ["Product A", "Product B", "Product C", "Product D"];
    let shares = [35.0, 25.0, 25.0, 15.0];
    let pie = |base: &[&str], hover: &[&str]| {
        ChartSeries::new("pie")
            .with_title("Sales Distribution")
            .with_labels(products)
            .with_dataset(Dataset::numbers("", shares).with_overrides(DatasetOverrides {
                background_color: per_value(base),
                hover_background_color: per_value(hover),
                ..DatasetOverrides::default()
            }))
    };
    let y = AxisOverrides {
        max: Some(2000.0),
        ..titled_axis("Units")
    };

    vec![
        pie(
            &["#3B82F6", "#10B981", "#F59E0B", "#8B5CF6"],
            &["#2563EB", "#059669", "#D97706", "#7C3AED"],
        ),
        pie(
            &["#10B981", "#3B82F6", "#F59E0B", "#8B5CF6"],
            &["#059669", "#2563EB", "#D97706", "#7C3AED"],
        ),
        ChartSeries::new("line")
            .with_title("Inventory Levels")
            .with_labels(products)
            .with_dataset(Dataset::numbers(
                "Inventory Levels",
                [1100.0, 800.0, 1400.0, 400.0],
            ))
            .with_options(axis_titles("Products", y)),
    ]
}

/// "Last interaction" line shown under the showcase.
///
/// Heatmap cells on whole, non-negative coordinates are named through
/// `labels` (`"heatmap: Afternoon on Tuesday - 25"`); everything else reads
/// `"{kind}: {label} - {value}"`.
#[must_use]
pub fn describe_interaction(event: &InteractionEvent, labels: &HeatmapAxisLabels) -> String {
    let kind = event.kind_name();
    if kind == "heatmap" {
        if let (Some((x, y)), Some(value)) = (grid_cell(event), event.value.as_number()) {
            let x_label = labels
                .x_label(x)
                .map_or_else(|| x.to_string(), str::to_owned);
            let y_label = labels
                .y_label(y)
                .map_or_else(|| y.to_string(), str::to_owned);
            return format!(
                "{kind}: {y_label} on {x_label} - {}",
                crate::core::format_number(value)
            );
        }
    }
    format!("{kind}: {} - {}", event.label, event.value)
}

fn grid_cell(event: &InteractionEvent) -> Option<(usize, usize)> {
    let (x, y) = event.coordinate?;
    let whole = |value: f64| {
        (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as usize)
    };
    Some((whole(x)?, whole(y)?))
}
