use approx::relative_eq;
use dashchart::api::{DatasetStyle, synthesize};
use dashchart::core::{
    ChartKind, ChartSeries, Dataset, ValueRange, matrix_color, palette_color, resolve,
    share_percent,
};
use dashchart::core::palette::MATRIX_STOPS;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ChartKind> {
    prop::sample::select(ChartKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn resolve_ignores_case_and_padding(
        kind in prop::sample::select(vec!["pie", "doughnut", "line", "area", "bar", "column", "histogram", "scatter", "heatmap", "matrix"]),
        upper in any::<bool>(),
        pad in 0usize..3
    ) {
        let raw = if upper { kind.to_ascii_uppercase() } else { kind.to_owned() };
        let padded = format!("{}{raw}{}", " ".repeat(pad), "\t".repeat(pad));
        prop_assert_eq!(resolve(&padded), resolve(kind));
        prop_assert!(resolve(&padded).is_supported());
    }

    #[test]
    fn synthesis_is_deterministic_and_keeps_shape(
        kind in kind_strategy(),
        values in prop::collection::vec(-1_000.0f64..1_000.0, 0..24),
        dataset_count in 1usize..4
    ) {
        let labels: Vec<String> = (0..values.len()).map(|i| format!("L{i}")).collect();
        let mut series = ChartSeries::new(kind.as_str()).with_labels(labels.clone());
        for d in 0..dataset_count {
            series = series.with_dataset(Dataset::numbers(format!("D{d}"), values.iter().copied()));
        }

        let first = synthesize(kind, &series);
        let second = synthesize(kind, &series);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.kind, kind);
        prop_assert_eq!(&first.data.labels, &labels);
        prop_assert_eq!(first.data.datasets.len(), dataset_count);
    }

    #[test]
    fn default_colors_cycle_through_palette(dataset_count in 1usize..25) {
        let mut series = ChartSeries::new("bar").with_labels(["A"]);
        for d in 0..dataset_count {
            series = series.with_dataset(Dataset::numbers(format!("D{d}"), [1.0]));
        }
        let config = synthesize(ChartKind::Bar, &series);
        for (index, dataset) in config.data.datasets.iter().enumerate() {
            let DatasetStyle::Bar(style) = &dataset.style else {
                return Err(TestCaseError::fail("bar style expected"));
            };
            prop_assert_eq!(style.background, palette_color(index));
        }
    }

    #[test]
    fn shares_of_positive_values_add_up_to_hundred(
        values in prop::collection::vec(0.001f64..10_000.0, 1..16)
    ) {
        let total: f64 = values.iter().sum();
        let sum: f64 = values.iter().map(|value| share_percent(*value, total)).sum();
        prop_assert!(relative_eq!(sum, 100.0, epsilon = 1e-6));
    }

    #[test]
    fn matrix_colors_stay_on_the_ramp(
        values in prop::collection::vec(-500.0f64..500.0, 1..32)
    ) {
        let range = ValueRange::observe(values.iter().copied()).expect("finite values");
        for value in &values {
            let normalized = range.normalize(*value);
            prop_assert!((0.0..=1.0).contains(&normalized));
            prop_assert!(MATRIX_STOPS.contains(&matrix_color(*value, range)));
        }
    }
}
