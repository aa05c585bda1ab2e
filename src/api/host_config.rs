use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::SceneLayout;

/// What the dispatcher shows for a chart kind it cannot render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Analysis results: unsupported charts render nothing.
    #[default]
    Live,
    /// Demo gallery: unsupported charts render an explanatory placeholder.
    Showcase,
}

/// Host bootstrap configuration.
///
/// Serializable so dashboards can persist chart slot setup alongside their
/// own layout files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartHostConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub mode: DispatchMode,
    /// Outer padding between the widget edge and the plot.
    #[serde(default = "default_padding_px")]
    pub padding_px: f64,
    /// Height reserved for the chart title when one is set.
    #[serde(default = "default_title_band_px")]
    pub title_band_px: f64,
    /// Room reserved for tick labels along each cartesian axis.
    #[serde(default = "default_axis_band_px")]
    pub axis_band_px: f64,
    /// Height reserved for a visible legend.
    #[serde(default = "default_legend_band_px")]
    pub legend_band_px: f64,
}

impl ChartHostConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            mode: DispatchMode::default(),
            padding_px: default_padding_px(),
            title_band_px: default_title_band_px(),
            axis_band_px: default_axis_band_px(),
            legend_band_px: default_legend_band_px(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_padding_px(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_title_band_px(mut self, title_band_px: f64) -> Self {
        self.title_band_px = title_band_px;
        self
    }

    #[must_use]
    pub fn with_axis_band_px(mut self, axis_band_px: f64) -> Self {
        self.axis_band_px = axis_band_px;
        self
    }

    #[must_use]
    pub fn with_legend_band_px(mut self, legend_band_px: f64) -> Self {
        self.legend_band_px = legend_band_px;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        self.viewport.ensure_valid()?;
        for (name, value) in [
            ("padding_px", self.padding_px),
            ("title_band_px", self.title_band_px),
            ("axis_band_px", self.axis_band_px),
            ("legend_band_px", self.legend_band_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn scene_layout(self) -> SceneLayout {
        SceneLayout {
            viewport: self.viewport,
            padding_px: self.padding_px,
            title_band_px: self.title_band_px,
            axis_band_px: self.axis_band_px,
            legend_band_px: self.legend_band_px,
        }
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_padding_px() -> f64 {
    12.0
}

fn default_title_band_px() -> f64 {
    28.0
}

fn default_axis_band_px() -> f64 {
    36.0
}

fn default_legend_band_px() -> f64 {
    24.0
}
