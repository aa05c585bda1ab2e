use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::api::RenderConfiguration;
use crate::core::{ChartKind, format_number};

/// Element of a mounted chart, addressed by dataset and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHit {
    pub dataset_index: usize,
    pub element_index: usize,
}

impl ElementHit {
    #[must_use]
    pub const fn new(dataset_index: usize, element_index: usize) -> Self {
        Self {
            dataset_index,
            element_index,
        }
    }
}

/// Elements under the pointer, closest first.
///
/// Index-mode charts report one element per dataset, which rarely exceeds a
/// handful.
pub type ActiveElements = SmallVec<[ElementHit; 4]>;

/// Payload of an interaction: a scalar, or a point for scatter charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InteractionValue {
    Number(f64),
    Point { x: f64, y: f64 },
}

impl InteractionValue {
    #[must_use]
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Point { .. } => None,
        }
    }

    #[must_use]
    pub fn as_point(self) -> Option<(f64, f64)> {
        match self {
            Self::Point { x, y } => Some((x, y)),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for InteractionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Point { x, y } => write!(f, "({}, {})", format_number(*x), format_number(*y)),
        }
    }
}

/// Semantic description of a click on a chart element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub kind: ChartKind,
    pub label: String,
    pub value: InteractionValue,
    pub dataset_index: Option<usize>,
    /// Raw `(x, y)` position for scatter points and matrix cells.
    pub coordinate: Option<(f64, f64)>,
}

impl InteractionEvent {
    /// Kind name in the dashboard's vocabulary (`area`, `heatmap`, ...).
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.kind.interaction_name()
    }
}

/// Translates an element hit into an interaction event.
///
/// Returns `None` when nothing was hit, when the dataset does not exist, and
/// when a category chart has no (or an empty) label at the hit position. A
/// value missing from a short dataset reads as `0`.
#[must_use]
pub fn relay_event(config: &RenderConfiguration, hit: Option<ElementHit>) -> Option<InteractionEvent> {
    let hit = hit?;
    let dataset = config.dataset(hit.dataset_index)?;
    let kind = config.kind;

    let event = match kind {
        ChartKind::Pie | ChartKind::Line | ChartKind::Bar => {
            let label = config
                .label_at(hit.element_index)
                .filter(|label| !label.is_empty())?;
            InteractionEvent {
                kind,
                label: label.to_owned(),
                value: InteractionValue::Number(
                    config.value_at(hit.dataset_index, hit.element_index),
                ),
                dataset_index: Some(hit.dataset_index),
                coordinate: None,
            }
        }
        ChartKind::Scatter => {
            let (x, y) = dataset.values.get(hit.element_index)?.point()?;
            InteractionEvent {
                kind,
                label: dataset.label.clone(),
                value: InteractionValue::Point { x, y },
                dataset_index: Some(hit.dataset_index),
                coordinate: Some((x, y)),
            }
        }
        ChartKind::Matrix => {
            let value = *dataset.values.get(hit.element_index)?;
            let (x, y) = value.point()?;
            InteractionEvent {
                kind,
                label: format!("({}, {})", format_number(x), format_number(y)),
                value: InteractionValue::Number(value.heat()),
                dataset_index: Some(hit.dataset_index),
                coordinate: Some((x, y)),
            }
        }
    };
    Some(event)
}

/// Pointer cursor requested while hovering a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}

pub type InteractionHandler = Box<dyn FnMut(&InteractionEvent)>;

/// Pointer state of one mounted chart plus the caller's click callback.
///
/// Hovering only changes the cursor; the callback fires on clicks alone.
#[derive(Default)]
pub struct InteractionRelay {
    handler: Option<InteractionHandler>,
    cursor: CursorStyle,
    pointer: Option<(f64, f64)>,
    hovered: Option<ElementHit>,
    delivered_events: usize,
}

impl fmt::Debug for InteractionRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionRelay")
            .field("has_handler", &self.handler.is_some())
            .field("cursor", &self.cursor)
            .field("pointer", &self.pointer)
            .field("hovered", &self.hovered)
            .field("delivered_events", &self.delivered_events)
            .finish()
    }
}

impl InteractionRelay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_handler(mut self, handler: impl FnMut(&InteractionEvent) + 'static) -> Self {
        self.set_handler(handler);
        self
    }

    pub fn set_handler(&mut self, handler: impl FnMut(&InteractionEvent) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    #[must_use]
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    #[must_use]
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ElementHit> {
        self.hovered
    }

    /// Number of events handed to the callback so far.
    #[must_use]
    pub fn delivered_events(&self) -> usize {
        self.delivered_events
    }

    pub fn on_hover(&mut self, x: f64, y: f64, active: &[ElementHit]) -> CursorStyle {
        self.pointer = Some((x, y));
        self.hovered = active.first().copied();
        self.cursor = if active.is_empty() {
            CursorStyle::Default
        } else {
            CursorStyle::Pointer
        };
        trace!(x, y, active = active.len(), cursor = ?self.cursor, "pointer hover");
        self.cursor
    }

    pub fn on_leave(&mut self) {
        self.pointer = None;
        self.hovered = None;
        self.cursor = CursorStyle::Default;
    }

    /// Relays a click on the first active element.
    ///
    /// The event is returned even when no callback is registered.
    pub fn on_click(
        &mut self,
        config: &RenderConfiguration,
        active: &[ElementHit],
    ) -> Option<InteractionEvent> {
        let event = relay_event(config, active.first().copied())?;
        if let Some(handler) = self.handler.as_mut() {
            handler(&event);
            self.delivered_events += 1;
        }
        debug!(
            kind = event.kind_name(),
            label = %event.label,
            value = %event.value,
            dataset = ?event.dataset_index,
            "relayed chart interaction"
        );
        Some(event)
    }

    /// Drops hover state that referred to a replaced chart.
    pub(crate) fn reset_pointer(&mut self) {
        self.on_leave();
    }
}
