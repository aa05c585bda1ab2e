use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartScene, WidgetBackend};

/// Opaque handle of a headless widget.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct NullWidget {
    id: u64,
}

impl NullWidget {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Headless backend used by tests and server-side rendering checks.
///
/// It still validates every scene and keeps handle counters, so tests can
/// assert the release-before-replace contract without a display.
#[derive(Debug, Default)]
pub struct NullBackend {
    next_id: u64,
    pub created: usize,
    pub destroyed: usize,
    pub last_element_count: usize,
    pub last_text_count: usize,
    pub last_texts: Vec<String>,
    /// Widget ids in creation order with their destruction state.
    pub history: Vec<(u64, bool)>,
    fail_next: Option<String>,
}

impl NullBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Widgets created and not yet destroyed.
    #[must_use]
    pub fn live(&self) -> usize {
        self.created - self.destroyed
    }

    /// Makes the next `create_widget` call fail with `reason`.
    pub fn fail_next_mount(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }
}

impl WidgetBackend for NullBackend {
    type Handle = NullWidget;

    fn create_widget(&mut self, scene: &ChartScene) -> ChartResult<NullWidget> {
        if let Some(reason) = self.fail_next.take() {
            return Err(ChartError::Backend(reason));
        }
        scene.validate()?;

        self.next_id += 1;
        let id = self.next_id;
        self.created += 1;
        self.last_element_count = scene.element_count();
        self.last_text_count = scene.texts.len();
        self.last_texts = scene.texts.iter().map(|text| text.text.clone()).collect();
        self.history.push((id, false));
        trace!(id, elements = self.last_element_count, "null widget created");
        Ok(NullWidget { id })
    }

    fn destroy_widget(&mut self, widget: NullWidget) {
        self.destroyed += 1;
        if let Some(entry) = self.history.iter_mut().find(|(id, _)| *id == widget.id) {
            entry.1 = true;
        }
        trace!(id = widget.id, "null widget destroyed");
    }
}
