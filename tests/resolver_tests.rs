use dashchart::core::{ChartKind, ResolvedChartKind, resolve};

#[test]
fn aliases_map_onto_rendering_kinds() {
    let cases = [
        ("pie", ResolvedChartKind::Pie),
        ("doughnut", ResolvedChartKind::Pie),
        ("line", ResolvedChartKind::Line),
        ("area", ResolvedChartKind::Line),
        ("scatter", ResolvedChartKind::Scatter),
        ("bar", ResolvedChartKind::Bar),
        ("histogram", ResolvedChartKind::Bar),
        ("column", ResolvedChartKind::Bar),
        ("heatmap", ResolvedChartKind::Matrix),
        ("matrix", ResolvedChartKind::Matrix),
    ];
    for (label, expected) in cases {
        assert_eq!(resolve(label), expected, "label `{label}`");
    }
}

#[test]
fn matching_ignores_case_and_surrounding_whitespace() {
    assert_eq!(resolve("Column"), ResolvedChartKind::Bar);
    assert_eq!(resolve("  HeatMap "), ResolvedChartKind::Matrix);
    assert_eq!(resolve("AREA"), ResolvedChartKind::Line);
}

#[test]
fn unknown_labels_are_kept_verbatim() {
    assert_eq!(
        resolve("unknown_widget"),
        ResolvedChartKind::Unsupported("unknown_widget".to_owned())
    );
    assert_eq!(resolve(""), ResolvedChartKind::Unsupported(String::new()));
    assert!(!resolve("radar").is_supported());
}

#[test]
fn every_rendering_kind_resolves_from_its_own_name() {
    for kind in ChartKind::ALL {
        assert_eq!(resolve(kind.as_str()).supported(), Some(kind));
        assert_eq!(ResolvedChartKind::from(kind).supported(), Some(kind));
    }
}

#[test]
fn interaction_names_follow_dashboard_vocabulary() {
    let names: Vec<&str> = ChartKind::ALL
        .iter()
        .map(|kind| kind.interaction_name())
        .collect();
    assert_eq!(names, ["pie", "area", "scatter", "bar", "heatmap"]);
}
