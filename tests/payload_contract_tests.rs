use dashchart::api::{
    ChartHostConfig, DispatchMode, RENDER_CONFIGURATION_JSON_SCHEMA_V1, RenderConfiguration,
    Y_AXIS_ID, synthesize_series,
};
use dashchart::core::{AxisKind, ChartSeries, ColorSpec, DataValue, HitMode, LegendPosition, Viewport};
use dashchart::error::ChartError;

const BAR_PAYLOAD: &str = r##"{
    "type": "column",
    "title": "Revenue",
    "data": {
        "labels": ["A", "B", "C"],
        "datasets": [
            {
                "label": "2024",
                "data": [10, "20", null],
                "backgroundColor": ["#3B82F6", "#EF4444"],
                "borderColor": "#1F2937",
                "borderWidth": 1,
                "somethingElse": {"ignored": true}
            }
        ]
    },
    "options": {
        "scales": {"y": {"max": 50, "title": {"display": true, "text": "USD"}}},
        "plugins": {"tooltip": {"valueSuffix": "USD"}},
        "animation": false
    },
    "extra": 1
}"##;

#[test]
fn payload_parses_leniently() {
    let series = ChartSeries::from_json_str(BAR_PAYLOAD).expect("payload");
    assert_eq!(series.kind, "column");
    assert_eq!(series.title.as_deref(), Some("Revenue"));
    assert_eq!(series.labels, ["A", "B", "C"]);

    let dataset = &series.datasets[0];
    assert_eq!(
        dataset.values,
        vec![
            DataValue::Number(10.0),
            DataValue::Number(20.0),
            DataValue::Missing
        ]
    );
    assert!(matches!(
        dataset.overrides.background_color,
        Some(ColorSpec::PerValue(ref colors)) if colors.len() == 2
    ));
    assert_eq!(
        dataset.overrides.border_color,
        Some(ColorSpec::Single("#1F2937".to_owned()))
    );
}

#[test]
fn missing_sections_default_to_empty() {
    let series = ChartSeries::from_json_str(r#"{"type": "pie"}"#).expect("payload");
    assert!(series.labels.is_empty());
    assert!(series.datasets.is_empty());
    assert!(series.options.is_none());

    let series = ChartSeries::from_json_str(r#"{"data": {"datasets": [{}]}}"#).expect("payload");
    assert_eq!(series.kind, "");
    assert_eq!(series.datasets[0].label, "");
    assert!(series.datasets[0].values.is_empty());
}

#[test]
fn object_entries_become_points_and_cells() {
    let series = ChartSeries::from_json_str(
        r#"{"type": "matrix", "data": {"datasets": [{"data": [
            {"x": 1, "y": 2, "v": 3}, {"x": 4, "y": 5}, [6, 7], {"y": 1}
        ]}]}}"#,
    )
    .expect("payload");
    assert_eq!(
        series.datasets[0].values,
        vec![
            DataValue::Cell {
                x: 1.0,
                y: 2.0,
                v: 3.0
            },
            DataValue::Point { x: 4.0, y: 5.0 },
            DataValue::Point { x: 6.0, y: 7.0 },
            DataValue::Missing,
        ]
    );
}

#[test]
fn malformed_json_is_the_only_parse_failure() {
    let err = ChartSeries::from_json_str("{not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidPayload(_)));
    let err = ChartSeries::from_json_str("[1, 2]").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidPayload(_)));
}

#[test]
fn configuration_contract_v1_round_trips() {
    let series = ChartSeries::from_json_str(BAR_PAYLOAD).expect("payload");
    let config = synthesize_series(&series).expect("supported");

    let contract = config.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&contract).expect("json");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(RENDER_CONFIGURATION_JSON_SCHEMA_V1))
    );
    assert_eq!(value["configuration"]["kind"], "bar");

    let restored = RenderConfiguration::from_json_compat_str(&contract).expect("restore");
    assert_eq!(restored, config);

    let bare = config.to_json_pretty().expect("serialize");
    assert_eq!(
        RenderConfiguration::from_json_compat_str(&bare).expect("restore bare"),
        config
    );
}

#[test]
fn unknown_contract_version_is_rejected() {
    let series = ChartSeries::from_json_str(BAR_PAYLOAD).expect("payload");
    let config = synthesize_series(&series).expect("supported");
    let mut value: serde_json::Value =
        serde_json::from_str(&config.to_json_contract_v1_pretty().expect("serialize"))
            .expect("json");
    value["schema_version"] = serde_json::json!(7);
    let err = RenderConfiguration::from_json_compat_str(&value.to_string())
        .expect_err("must reject");
    assert!(matches!(err, ChartError::InvalidPayload(_)));
}

#[test]
fn series_payload_round_trips() {
    let series = ChartSeries::from_json_str(BAR_PAYLOAD).expect("payload");
    let json = series.to_payload_json_pretty().expect("serialize");
    assert_eq!(ChartSeries::from_json_str(&json).expect("reparse"), series);
}

#[test]
fn host_config_defaults_fill_missing_fields() {
    let config = ChartHostConfig::from_json_str(
        r#"{"viewport": {"width": 640, "height": 320}, "mode": "showcase"}"#,
    )
    .expect("config");
    assert_eq!(config.viewport, Viewport::new(640, 320));
    assert_eq!(config.mode, DispatchMode::Showcase);
    assert_eq!(config.padding_px, 12.0);

    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(ChartHostConfig::from_json_str(&json).expect("reparse"), config);
}

#[test]
fn host_config_rejects_invalid_geometry() {
    assert!(ChartHostConfig::new(Viewport::new(0, 100)).validate().is_err());
    assert!(
        ChartHostConfig::new(Viewport::new(100, 100))
            .with_padding_px(-1.0)
            .validate()
            .is_err()
    );
}

#[test]
fn unknown_override_enums_fall_back_to_defaults() {
    let series = ChartSeries::from_json_str(
        r#"{"type": "line", "data": {"labels": ["A"], "datasets": [{"data": [1]}]},
            "options": {
                "scales": {"y": {"type": "logarithmic", "max": 9}},
                "plugins": {"legend": {"position": "chartArea", "display": true}},
                "interaction": {"mode": "x", "intersect": true}
            }}"#,
    )
    .expect("payload");
    let options = series.options.as_ref().expect("options");
    let y = &options.scales[Y_AXIS_ID];
    assert_eq!(y.kind, None);
    assert_eq!(y.max, Some(9.0));
    let legend = options
        .plugins
        .as_ref()
        .and_then(|plugins| plugins.legend.as_ref())
        .expect("legend");
    assert_eq!(legend.position, None);
    assert_eq!(legend.display, Some(true));
    let interaction = options.interaction.as_ref().expect("interaction");
    assert_eq!(interaction.mode, None);
    assert_eq!(interaction.intersect, Some(true));

    let config = synthesize_series(&series).expect("line is supported");
    assert_eq!(config.axis(Y_AXIS_ID).map(|axis| axis.kind), Some(AxisKind::Linear));
    assert_eq!(config.axis(Y_AXIS_ID).and_then(|axis| axis.max), Some(9.0));
    assert_eq!(config.options.plugins.legend.position, LegendPosition::Top);
    assert!(config.options.plugins.legend.display);
    assert_eq!(config.options.interaction.mode, HitMode::Index);
    assert!(config.options.interaction.intersect);
}

#[test]
fn null_data_sections_read_as_empty() {
    let series =
        ChartSeries::from_json_str(r#"{"type": "bar", "data": {"labels": ["A"], "datasets": null}}"#)
            .expect("payload");
    assert_eq!(series.labels, ["A"]);
    assert!(series.datasets.is_empty());

    let series = ChartSeries::from_json_str(r#"{"type": "bar", "title": "T", "data": null}"#)
        .expect("payload");
    assert_eq!(series.title.as_deref(), Some("T"));
    assert!(series.labels.is_empty());
    assert!(series.datasets.is_empty());
    let config = synthesize_series(&series).expect("bar is supported");
    assert!(config.data.datasets.is_empty());
}

#[test]
fn non_object_dataset_entries_are_dropped() {
    let series = ChartSeries::from_json_str(
        r#"{"type": "bar", "data": {"datasets": [7, {"label": "kept", "data": [1]}, "x"]}}"#,
    )
    .expect("payload");
    assert_eq!(series.datasets.len(), 1);
    assert_eq!(series.datasets[0].label, "kept");
}

#[test]
fn numeric_strings_are_accepted_for_scalar_overrides() {
    let series = ChartSeries::from_json_str(
        r#"{"type": "bar", "data": {"labels": ["A"], "datasets": [
            {"data": [1], "borderWidth": "2", "hoverOffset": "wide", "tension": " 0.4 "}
        ]}}"#,
    )
    .expect("payload");
    let overrides = &series.datasets[0].overrides;
    assert_eq!(overrides.border_width, Some(2.0));
    assert_eq!(overrides.hover_offset, None);
    assert_eq!(overrides.tension, Some(0.4));
    assert!(synthesize_series(&series).is_some());
}

#[test]
fn non_object_payloads_are_rejected() {
    for input in ["null", "\"bar\"", "3"] {
        let err = ChartSeries::from_json_str(input).expect_err(input);
        assert!(matches!(err, ChartError::InvalidPayload(_)), "{input}");
    }
}
