#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use dashchart::api::{ChartHost, ChartHostConfig, DispatchOutcome, showcase, synthesize};
use dashchart::core::{ChartKind, Color, Viewport};
use dashchart::render::{
    CairoBackend, CairoContextPainter, SceneLayout, WidgetBackend, build_scene,
};

#[test]
fn cairo_backend_rejects_invalid_clear_color() {
    let mut backend = CairoBackend::new();
    let err = backend
        .set_clear_color(Color::rgba(1.5, 0.0, 0.0, 1.0))
        .expect_err("out of range color");
    assert!(matches!(err, dashchart::ChartError::InvalidData(_)));
}

#[test]
fn cairo_widget_paints_pie_wedges_and_title() {
    let config = synthesize(ChartKind::Pie, &showcase::browser_usage());
    let scene = build_scene(&config, &SceneLayout::new(Viewport::new(640, 360))).expect("scene");

    let mut backend = CairoBackend::new();
    let widget = backend.create_widget(&scene).expect("widget");
    assert_eq!(widget.stats().wedges_drawn, 5);
    assert!(widget.stats().texts_drawn >= 1);
    assert_eq!(widget.surface().width(), 640);
    assert_eq!(backend.live_widgets(), 1);

    backend.destroy_widget(widget);
    assert_eq!(backend.live_widgets(), 0);
}

#[test]
fn cairo_backend_can_draw_on_external_context() {
    let config = synthesize(ChartKind::Line, &showcase::sales_performance());
    let scene = build_scene(&config, &SceneLayout::new(Viewport::new(600, 320))).expect("scene");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut backend = CairoBackend::new();
    let stats = backend
        .paint_on_cairo_context(&context, &scene)
        .expect("paint");
    assert_eq!(stats.areas_drawn, 1);
    assert_eq!(stats.paths_drawn, 1);
    assert_eq!(backend.live_widgets(), 0);
}

#[test]
fn host_releases_cairo_widget_on_replace() {
    let mut host =
        ChartHost::new(CairoBackend::new(), ChartHostConfig::new(Viewport::new(480, 320)))
            .expect("host");
    assert_eq!(host.present(&showcase::value_distribution()), DispatchOutcome::Mounted);
    assert_eq!(host.present(&showcase::activity_heatmap()), DispatchOutcome::Mounted);
    assert_eq!(host.backend().live_widgets(), 1);
    host.unmount();
    assert_eq!(host.backend().live_widgets(), 0);
}
