mod adapters;
mod null_backend;
mod primitives;
mod scene;

pub use adapters::{
    BarAdapter, LineAdapter, MatrixAdapter, PieAdapter, ScatterAdapter, SceneAdapter, SceneLayout,
    adapter_for, build_scene, placeholder_scene,
};
pub use null_backend::{NullBackend, NullWidget};
pub use primitives::{
    AreaPrimitive, CirclePrimitive, CubicSegment, LinePrimitive, PathPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive, WedgePrimitive, smooth_segments,
};
pub use scene::{ChartScene, HitRegion, HitShape};

use crate::error::ChartResult;

/// Contract implemented by any widget backend.
///
/// A backend turns a fully materialized scene into a live widget and owns
/// nothing after `destroy_widget` returns. The host holds at most one handle
/// per chart slot and always destroys it before creating its replacement.
pub trait WidgetBackend {
    type Handle;

    fn create_widget(&mut self, scene: &ChartScene) -> ChartResult<Self::Handle>;

    fn destroy_widget(&mut self, handle: Self::Handle);
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoBackend, CairoContextPainter, CairoPaintStats, CairoWidget};
