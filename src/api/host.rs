use tracing::{debug, warn};

use crate::core::{ChartSeries, ResolvedChartKind, Viewport, resolve};
use crate::error::ChartResult;
use crate::interaction::{CursorStyle, ElementHit, InteractionEvent, InteractionRelay};
use crate::render::{ChartScene, WidgetBackend, build_scene, placeholder_scene};

use super::{ChartHostConfig, DispatchMode, RenderConfiguration, TooltipText, synthesize};

/// Result of one dispatch pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A new widget replaced whatever was mounted before.
    Mounted,
    /// The configuration was identical; the live widget stays.
    Kept,
    /// Nothing is shown (unsupported kind in live mode).
    Nothing,
    /// An "unsupported chart type" placeholder is shown.
    Placeholder { message: String },
    /// Building or mounting the widget failed; nothing is shown.
    Failed { reason: String },
}

impl DispatchOutcome {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Mounted | Self::Kept | Self::Placeholder { .. })
    }
}

#[derive(Debug)]
enum MountedContent {
    Chart {
        config: RenderConfiguration,
        scene: ChartScene,
    },
    Placeholder {
        message: String,
        scene: ChartScene,
    },
}

impl MountedContent {
    fn scene(&self) -> &ChartScene {
        match self {
            Self::Chart { scene, .. } | Self::Placeholder { scene, .. } => scene,
        }
    }
}

#[derive(Debug)]
struct MountedWidget<H> {
    handle: H,
    content: MountedContent,
}

/// One chart slot of a dashboard: resolves, synthesizes and mounts charts
/// through a widget backend, and relays pointer input back to the caller.
///
/// The host owns at most one widget. A new widget is only created after the
/// previous one has been destroyed, and dropping the host destroys the
/// current one.
pub struct ChartHost<B: WidgetBackend> {
    backend: B,
    config: ChartHostConfig,
    mounted: Option<MountedWidget<B::Handle>>,
    relay: InteractionRelay,
}

impl<B> std::fmt::Debug for ChartHost<B>
where
    B: WidgetBackend + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartHost")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .field("mounted", &self.mounted.is_some())
            .field("relay", &self.relay)
            .finish()
    }
}

impl<B: WidgetBackend> ChartHost<B> {
    pub fn new(backend: B, config: ChartHostConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            config,
            mounted: None,
            relay: InteractionRelay::new(),
        })
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn config(&self) -> ChartHostConfig {
        self.config
    }

    #[must_use]
    pub fn mode(&self) -> DispatchMode {
        self.config.mode
    }

    pub fn set_mode(&mut self, mode: DispatchMode) {
        self.config.mode = mode;
    }

    #[must_use]
    pub fn relay(&self) -> &InteractionRelay {
        &self.relay
    }

    pub fn set_interaction_handler(&mut self, handler: impl FnMut(&InteractionEvent) + 'static) {
        self.relay.set_handler(handler);
    }

    pub fn clear_interaction_handler(&mut self) {
        self.relay.clear_handler();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Configuration of the mounted chart, if a chart (not a placeholder) is
    /// shown.
    #[must_use]
    pub fn configuration(&self) -> Option<&RenderConfiguration> {
        match &self.mounted.as_ref()?.content {
            MountedContent::Chart { config, .. } => Some(config),
            MountedContent::Placeholder { .. } => None,
        }
    }

    #[must_use]
    pub fn scene(&self) -> Option<&ChartScene> {
        self.mounted.as_ref().map(|mounted| mounted.content.scene())
    }

    #[must_use]
    pub fn placeholder_message(&self) -> Option<&str> {
        match &self.mounted.as_ref()?.content {
            MountedContent::Placeholder { message, .. } => Some(message),
            MountedContent::Chart { .. } => None,
        }
    }

    /// Resolves, synthesizes and dispatches one upstream chart.
    pub fn present(&mut self, series: &ChartSeries) -> DispatchOutcome {
        let kind = resolve(&series.kind);
        let configuration = kind.supported().map(|kind| synthesize(kind, series));
        self.dispatch(&kind, configuration.as_ref())
    }

    /// Mounts the adapter for `kind`.
    ///
    /// A supported kind without a configuration mounts an empty chart of
    /// that kind.
    pub fn dispatch(
        &mut self,
        kind: &ResolvedChartKind,
        configuration: Option<&RenderConfiguration>,
    ) -> DispatchOutcome {
        let Some(chart_kind) = kind.supported() else {
            let ResolvedChartKind::Unsupported(label) = kind else {
                return DispatchOutcome::Nothing;
            };
            return self.show_unsupported(label);
        };

        let configuration = match configuration {
            Some(configuration) if configuration.kind == chart_kind => configuration.clone(),
            Some(configuration) => {
                warn!(
                    requested = chart_kind.as_str(),
                    configured = configuration.kind.as_str(),
                    "configuration kind does not match dispatched kind"
                );
                self.unmount();
                return DispatchOutcome::Failed {
                    reason: format!(
                        "configuration for {} dispatched as {chart_kind}",
                        configuration.kind
                    ),
                };
            }
            None => synthesize(chart_kind, &ChartSeries::new(chart_kind.as_str())),
        };

        if let Some(MountedWidget {
            content: MountedContent::Chart { config, .. },
            ..
        }) = &self.mounted
        {
            if *config == configuration {
                debug!(kind = chart_kind.as_str(), "configuration unchanged, keeping widget");
                return DispatchOutcome::Kept;
            }
        }

        self.mount_chart(configuration)
    }

    /// Re-lays out the current content for a new viewport.
    pub fn resize(&mut self, viewport: Viewport) -> DispatchOutcome {
        self.config.viewport = viewport;
        let Some(mounted) = self.mounted.as_ref() else {
            return DispatchOutcome::Nothing;
        };
        match &mounted.content {
            MountedContent::Chart { config, .. } => {
                let config = config.clone();
                self.mount_chart(config)
            }
            MountedContent::Placeholder { message, .. } => {
                let message = message.clone();
                self.mount_placeholder(message)
            }
        }
    }

    /// Destroys the mounted widget, if any.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            self.backend.destroy_widget(mounted.handle);
            self.relay.reset_pointer();
            debug!("chart widget destroyed");
        }
    }

    /// Pointer moved over the widget; updates the cursor only.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> CursorStyle {
        let active = match self.mounted.as_ref().map(|mounted| &mounted.content) {
            Some(MountedContent::Chart { scene, .. }) => scene.hit_test(x, y),
            _ => Default::default(),
        };
        self.relay.on_hover(x, y, &active)
    }

    pub fn pointer_leave(&mut self) {
        self.relay.on_leave();
    }

    /// Click at `(x, y)`; fires the interaction handler at most once.
    pub fn click(&mut self, x: f64, y: f64) -> Option<InteractionEvent> {
        let Some(MountedContent::Chart { config, scene }) =
            self.mounted.as_ref().map(|mounted| &mounted.content)
        else {
            return None;
        };
        let active = scene.hit_test(x, y);
        self.relay.on_click(config, &active)
    }

    /// Relays an element hit reported directly by the rendering engine.
    pub fn click_element(&mut self, hit: ElementHit) -> Option<InteractionEvent> {
        let Some(MountedContent::Chart { config, .. }) =
            self.mounted.as_ref().map(|mounted| &mounted.content)
        else {
            return None;
        };
        self.relay.on_click(config, &[hit])
    }

    /// Tooltip of the element under `(x, y)`.
    #[must_use]
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<TooltipText> {
        let Some(MountedContent::Chart { config, scene }) =
            self.mounted.as_ref().map(|mounted| &mounted.content)
        else {
            return None;
        };
        let hit = scene.hit_test(x, y).first().copied()?;
        config.tooltip_text(hit)
    }

    fn show_unsupported(&mut self, label: &str) -> DispatchOutcome {
        warn!(kind = label, mode = ?self.config.mode, "unsupported chart type");
        match self.config.mode {
            DispatchMode::Live => {
                self.unmount();
                DispatchOutcome::Nothing
            }
            DispatchMode::Showcase => {
                let message = format!("Unsupported chart type: {label}");
                if self.placeholder_message() == Some(message.as_str()) {
                    return DispatchOutcome::Kept;
                }
                self.mount_placeholder(message)
            }
        }
    }

    fn mount_chart(&mut self, config: RenderConfiguration) -> DispatchOutcome {
        self.unmount();
        let layout = self.config.scene_layout();
        let mounted = build_scene(&config, &layout).and_then(|scene| {
            let handle = self.backend.create_widget(&scene)?;
            Ok(MountedWidget {
                handle,
                content: MountedContent::Chart { config, scene },
            })
        });
        self.finish_mount(mounted, DispatchOutcome::Mounted)
    }

    fn mount_placeholder(&mut self, message: String) -> DispatchOutcome {
        self.unmount();
        let layout = self.config.scene_layout();
        let mounted = placeholder_scene(&message, &layout).and_then(|scene| {
            let handle = self.backend.create_widget(&scene)?;
            Ok(MountedWidget {
                handle,
                content: MountedContent::Placeholder {
                    message: message.clone(),
                    scene,
                },
            })
        });
        self.finish_mount(mounted, DispatchOutcome::Placeholder { message })
    }

    fn finish_mount(
        &mut self,
        mounted: ChartResult<MountedWidget<B::Handle>>,
        success: DispatchOutcome,
    ) -> DispatchOutcome {
        match mounted {
            Ok(mounted) => {
                debug!(elements = mounted.content.scene().element_count(), "chart widget mounted");
                self.mounted = Some(mounted);
                success
            }
            Err(err) => {
                warn!(error = %err, "chart widget mount failed");
                DispatchOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

impl<B: WidgetBackend> Drop for ChartHost<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}
