use dashchart::api::{ChartHost, ChartHostConfig, DatasetStyle, DispatchMode, synthesize};
use dashchart::core::palette::MATRIX_STOPS;
use dashchart::core::{ChartKind, ChartSeries, DataValue, Dataset, Viewport};
use dashchart::interaction::{
    CursorStyle, ElementHit, InteractionEvent, InteractionValue, relay_event,
};
use dashchart::render::NullBackend;
use std::cell::RefCell;
use std::rc::Rc;

fn host() -> ChartHost<NullBackend> {
    let config = ChartHostConfig::new(Viewport::new(800, 400)).with_mode(DispatchMode::Live);
    ChartHost::new(NullBackend::new(), config).expect("host init")
}

fn anchor_of(host: &ChartHost<NullBackend>, hit: ElementHit) -> (f64, f64) {
    host.scene()
        .expect("mounted scene")
        .hit_regions
        .iter()
        .find(|region| region.hit == hit)
        .map(|region| region.anchor)
        .expect("hit region")
}

fn recorder(host: &mut ChartHost<NullBackend>) -> Rc<RefCell<Vec<InteractionEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    host.set_interaction_handler(move |event| sink.borrow_mut().push(event.clone()));
    events
}

#[test]
fn clicking_second_bar_reports_its_label_and_value() {
    let mut host = host();
    let events = recorder(&mut host);
    host.present(
        &ChartSeries::new("column")
            .with_labels(["A", "B", "C"])
            .with_dataset(Dataset::numbers("Sales", [10.0, 20.0, 30.0])),
    );

    let (x, y) = anchor_of(&host, ElementHit::new(0, 1));
    let event = host.click(x, y).expect("event");

    assert_eq!(event.kind_name(), "bar");
    assert_eq!(event.label, "B");
    assert_eq!(event.value, InteractionValue::Number(20.0));
    assert_eq!(event.dataset_index, Some(0));
    assert_eq!(events.borrow().as_slice(), &[event]);
}

#[test]
fn hover_changes_cursor_without_callback() {
    let mut host = host();
    let events = recorder(&mut host);
    host.present(
        &ChartSeries::new("bar")
            .with_labels(["A", "B"])
            .with_dataset(Dataset::numbers("Sales", [10.0, 20.0])),
    );

    let (x, y) = anchor_of(&host, ElementHit::new(0, 0));
    assert_eq!(host.pointer_move(x, y), CursorStyle::Pointer);
    assert_eq!(host.relay().hovered(), Some(ElementHit::new(0, 0)));
    assert_eq!(host.pointer_move(1.0, 1.0), CursorStyle::Default);
    host.pointer_leave();
    assert_eq!(host.relay().cursor(), CursorStyle::Default);
    assert!(events.borrow().is_empty());
}

#[test]
fn click_on_empty_space_fires_nothing() {
    let mut host = host();
    let events = recorder(&mut host);
    host.present(
        &ChartSeries::new("pie")
            .with_labels(["A", "B"])
            .with_dataset(Dataset::numbers("", [1.0, 1.0])),
    );
    assert!(host.click(2.0, 2.0).is_none());
    assert!(events.borrow().is_empty());
}

#[test]
fn pie_slice_click_uses_interaction_vocabulary() {
    let mut host = host();
    host.present(
        &ChartSeries::new("doughnut")
            .with_labels(["Chrome", "Safari", "Firefox"])
            .with_dataset(Dataset::numbers("", [65.0, 20.0, 15.0])),
    );
    let (x, y) = anchor_of(&host, ElementHit::new(0, 2));
    let event = host.click(x, y).expect("event");
    assert_eq!(event.kind_name(), "pie");
    assert_eq!(event.label, "Firefox");
    assert_eq!(event.value.as_number(), Some(15.0));
}

#[test]
fn line_click_snaps_to_column_and_reports_area() {
    let mut host = host();
    host.present(
        &ChartSeries::new("line")
            .with_labels(["Jan", "Feb", "Mar"])
            .with_dataset(Dataset::numbers("Monthly", [1.0, 5.0, 2.0]))
            .with_dataset(Dataset::numbers("Target", [2.0, 2.0, 2.0])),
    );
    let (x, _) = anchor_of(&host, ElementHit::new(1, 1));
    let plot = host.scene().expect("scene").plot_area;
    let event = host.click(x + 1.0, plot.y + 2.0).expect("event");
    assert_eq!(event.kind_name(), "area");
    assert_eq!(event.label, "Feb");
    assert_eq!(event.dataset_index, Some(0));
    assert_eq!(event.value.as_number(), Some(5.0));
}

#[test]
fn scatter_click_reports_point_under_dataset_label() {
    let mut host = host();
    host.present(
        &ChartSeries::new("scatter")
            .with_dataset(Dataset::points("Dataset 1", [(10.0, 20.0), (15.0, 25.0)]))
            .with_dataset(Dataset::points("Dataset 2", [(12.0, 15.0)])),
    );
    let (x, y) = anchor_of(&host, ElementHit::new(1, 0));
    let event = host.click(x, y).expect("event");
    assert_eq!(event.kind_name(), "scatter");
    assert_eq!(event.label, "Dataset 2");
    assert_eq!(event.value, InteractionValue::Point { x: 12.0, y: 15.0 });
    assert_eq!(event.coordinate, Some((12.0, 15.0)));
}

#[test]
fn heatmap_click_reports_cell_coordinates() {
    let mut host = host();
    host.present(&ChartSeries::new("heatmap").with_dataset(Dataset::cells(
        "Activity",
        [(0.0, 0.0, 5.0), (1.0, 2.0, 8.0)],
    )));
    let (x, y) = anchor_of(&host, ElementHit::new(0, 1));
    let event = host.click(x, y).expect("event");
    assert_eq!(event.kind_name(), "heatmap");
    assert_eq!(event.label, "(1, 2)");
    assert_eq!(event.value.as_number(), Some(8.0));
}

#[test]
fn matrix_points_without_heat_read_as_zero() {
    let series = ChartSeries::new("heatmap").with_dataset(Dataset::new(
        "Mixed",
        vec![
            DataValue::Cell {
                x: 0.0,
                y: 0.0,
                v: 10.0,
            },
            DataValue::Point { x: 1.0, y: 99.0 },
        ],
    ));
    let config = synthesize(ChartKind::Matrix, &series);
    assert_eq!(config.value_at(0, 0), 10.0);
    assert_eq!(config.value_at(0, 1), 0.0);

    let event = relay_event(&config, Some(ElementHit::new(0, 1))).expect("event");
    assert_eq!(event.label, "(1, 99)");
    assert_eq!(event.value, InteractionValue::Number(0.0));

    let tooltip = config.tooltip_text(ElementHit::new(0, 1)).expect("tooltip");
    assert_eq!(tooltip.lines, ["Value: 0"]);

    let DatasetStyle::Matrix(style) = &config.data.datasets[0].style else {
        panic!("matrix style expected");
    };
    assert_eq!(style.cell_fill(1), MATRIX_STOPS[0]);
    assert_ne!(style.cell_fill(0), style.cell_fill(1));
}

#[test]
fn relay_drops_hits_without_label() {
    let config = synthesize(
        ChartKind::Bar,
        &ChartSeries::new("bar")
            .with_labels(["A", ""])
            .with_dataset(Dataset::numbers("Sales", [1.0, 2.0, 3.0])),
    );
    assert!(relay_event(&config, Some(ElementHit::new(0, 1))).is_none());
    assert!(relay_event(&config, Some(ElementHit::new(0, 2))).is_none());
    assert!(relay_event(&config, Some(ElementHit::new(5, 0))).is_none());
    assert!(relay_event(&config, None).is_none());
}

#[test]
fn relay_reads_missing_value_as_zero() {
    let config = synthesize(
        ChartKind::Bar,
        &ChartSeries::new("bar")
            .with_labels(["A", "B", "C"])
            .with_dataset(Dataset::numbers("Short", [1.0])),
    );
    let event = relay_event(&config, Some(ElementHit::new(0, 2))).expect("event");
    assert_eq!(event.label, "C");
    assert_eq!(event.value, InteractionValue::Number(0.0));
}

#[test]
fn engine_reported_hit_is_relayed_once() {
    let mut host = host();
    let events = recorder(&mut host);
    host.present(
        &ChartSeries::new("bar")
            .with_labels(["A", "B"])
            .with_dataset(Dataset::numbers("Sales", [10.0, 20.0])),
    );
    let event = host.click_element(ElementHit::new(0, 0)).expect("event");
    assert_eq!(event.label, "A");
    assert_eq!(events.borrow().len(), 1);
    assert_eq!(host.relay().delivered_events(), 1);
}

#[test]
fn tooltip_follows_pointer() {
    let mut host = host();
    host.present(
        &ChartSeries::new("pie")
            .with_labels(["A", "B"])
            .with_dataset(Dataset::numbers("", [3.0, 1.0])),
    );
    let (x, y) = anchor_of(&host, ElementHit::new(0, 0));
    let tooltip = host.tooltip_at(x, y).expect("tooltip");
    assert_eq!(tooltip.lines, vec!["A: 3 (75% of total)".to_owned()]);
}

#[test]
fn replacing_chart_resets_hover_state() {
    let mut host = host();
    let series = ChartSeries::new("bar")
        .with_labels(["A"])
        .with_dataset(Dataset::numbers("Sales", [1.0]));
    host.present(&series);
    let (x, y) = anchor_of(&host, ElementHit::new(0, 0));
    host.pointer_move(x, y);
    host.present(&ChartSeries::new("line").with_labels(["A"]));
    assert_eq!(host.relay().cursor(), CursorStyle::Default);
    assert!(host.relay().hovered().is_none());
}
