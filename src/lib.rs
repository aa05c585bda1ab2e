//! dashchart: chart adaptation and rendering dispatch for analytics
//! dashboards.
//!
//! Upstream chart payloads are resolved to a rendering kind, synthesized into
//! a typed [`api::RenderConfiguration`], laid out as a backend-agnostic
//! [`render::ChartScene`] and mounted through a [`render::WidgetBackend`].
//! Clicks on mounted charts come back as [`interaction::InteractionEvent`]s.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartHost, ChartHostConfig, DispatchOutcome, RenderConfiguration, synthesize};
pub use core::{ChartKind, ChartSeries, ResolvedChartKind, resolve};
pub use error::{ChartError, ChartResult};
