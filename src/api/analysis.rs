//! Charts returned by the dataset analysis service.
//!
//! The service describes each chart as parallel numeric columns plus axis
//! titles. This module turns them into [`ChartSeries`] so they flow through
//! the same resolve/synthesize/dispatch path as hand-written payloads.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::overrides::{AxisOverrides, AxisTitleOverrides};
use crate::core::{ChartSeries, ColorSpec, Dataset, DatasetOverrides, OptionOverrides, resolve};
use crate::error::{ChartError, ChartResult};

use super::{X_AXIS_ID, Y_AXIS_ID};

const SERIES_COLOR: &str = "#3B82F6";
const SERIES_FILL: &str = "rgba(59, 130, 246, 0.1)";
const SERIES_OUTLINE: &str = "#1F2937";
const AREA_TENSION: f64 = 0.4;

/// One chart of an analysis response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisChart {
    pub chart_id: String,
    /// `chart_line`, `chart_bar`, `chart_pie`, `chart_histogram`,
    /// `chart_scatter` or `chart_heatmap`.
    pub chart_name: String,
    pub chart_title: String,
    pub description: String,
    pub x_axis_data: Vec<f64>,
    pub x_axis_title: String,
    pub y_axis_data: Vec<f64>,
    pub y_axis_title: String,
    pub z_axis_data: Option<Vec<f64>>,
}

impl AnalysisChart {
    /// Upstream type label understood by the resolver.
    ///
    /// Known `chart_*` names lose their prefix; anything else is kept as is
    /// so the placeholder can name it.
    #[must_use]
    pub fn kind_label(&self) -> &str {
        self.chart_name
            .strip_prefix("chart_")
            .filter(|kind| resolve(kind).is_supported())
            .unwrap_or(self.chart_name.as_str())
    }

    /// Category labels: `"{x title} {n}"`, counting from one.
    #[must_use]
    pub fn category_labels(&self) -> Vec<String> {
        (1..=self.x_axis_data.len())
            .map(|n| format!("{} {n}", self.x_axis_title))
            .collect()
    }

    #[must_use]
    pub fn to_series(&self) -> ChartSeries {
        let kind = self.kind_label().to_owned();
        let mut series = ChartSeries::new(kind.as_str()).with_title(self.chart_title.clone());

        match self.chart_name.as_str() {
            "chart_pie" => {
                series = series
                    .with_labels(self.category_labels())
                    .with_dataset(Dataset::numbers(
                        self.y_axis_title.clone(),
                        self.y_axis_data.iter().copied(),
                    ));
            }
            "chart_line" => {
                let overrides = DatasetOverrides {
                    border_color: Some(ColorSpec::Single(SERIES_COLOR.to_owned())),
                    background_color: Some(ColorSpec::Single(SERIES_FILL.to_owned())),
                    fill: Some(true),
                    tension: Some(AREA_TENSION),
                    ..DatasetOverrides::default()
                };
                series = series
                    .with_labels(self.category_labels())
                    .with_dataset(
                        Dataset::numbers(self.y_axis_title.clone(), self.y_axis_data.iter().copied())
                            .with_overrides(overrides),
                    )
                    .with_options(self.axis_title_options());
            }
            "chart_bar" | "chart_histogram" => {
                let overrides = DatasetOverrides {
                    background_color: Some(ColorSpec::Single(SERIES_COLOR.to_owned())),
                    border_color: Some(ColorSpec::Single(SERIES_OUTLINE.to_owned())),
                    border_width: Some(1.0),
                    ..DatasetOverrides::default()
                };
                series = series
                    .with_labels(self.category_labels())
                    .with_dataset(
                        Dataset::numbers(self.y_axis_title.clone(), self.y_axis_data.iter().copied())
                            .with_overrides(overrides),
                    )
                    .with_options(self.axis_title_options());
            }
            "chart_scatter" => {
                let overrides = DatasetOverrides {
                    background_color: Some(ColorSpec::Single(SERIES_COLOR.to_owned())),
                    border_color: Some(ColorSpec::Single(SERIES_OUTLINE.to_owned())),
                    ..DatasetOverrides::default()
                };
                let points = self
                    .x_axis_data
                    .iter()
                    .enumerate()
                    .map(|(index, &x)| (x, self.y_at(index)));
                series = series
                    .with_dataset(
                        Dataset::points(self.chart_title.clone(), points).with_overrides(overrides),
                    )
                    .with_options(self.axis_title_options());
            }
            "chart_heatmap" => {
                let cells = self.x_axis_data.iter().enumerate().map(|(index, &x)| {
                    let y = self.y_at(index);
                    let v = self
                        .z_axis_data
                        .as_ref()
                        .and_then(|z| z.get(index).copied())
                        .or_else(|| self.y_axis_data.get(index).copied())
                        .unwrap_or(0.0);
                    (x, y, v)
                });
                series = series
                    .with_dataset(Dataset::cells(self.chart_title.clone(), cells))
                    .with_options(self.axis_title_options());
            }
            other => {
                debug!(chart_name = other, "analysis chart has no known layout");
            }
        }

        if self.y_axis_data.len() < self.x_axis_data.len() && !series.datasets.is_empty() {
            warn!(
                chart_id = %self.chart_id,
                x = self.x_axis_data.len(),
                y = self.y_axis_data.len(),
                "analysis chart has fewer y values than x values"
            );
        }
        series
    }

    fn y_at(&self, index: usize) -> f64 {
        self.y_axis_data.get(index).copied().unwrap_or(0.0)
    }

    fn axis_title_options(&self) -> OptionOverrides {
        let mut options = OptionOverrides::default();
        for (axis_id, text) in [
            (X_AXIS_ID, &self.x_axis_title),
            (Y_AXIS_ID, &self.y_axis_title),
        ] {
            if text.is_empty() {
                continue;
            }
            options.scales.insert(
                axis_id.to_owned(),
                AxisOverrides {
                    title: Some(AxisTitleOverrides {
                        display: Some(true),
                        text: Some(text.clone()),
                        ..AxisTitleOverrides::default()
                    }),
                    ..AxisOverrides::default()
                },
            );
        }
        options
    }
}

impl From<&AnalysisChart> for ChartSeries {
    fn from(chart: &AnalysisChart) -> Self {
        chart.to_series()
    }
}

/// A chart group as sent by the service: either wrapped in a keyed object
/// or a bare list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartGroup {
    Exploration {
        exploration_charts: Vec<AnalysisChart>,
    },
    Feature {
        #[serde(rename = "Feature_charts", alias = "feature_charts")]
        feature_charts: Vec<AnalysisChart>,
    },
    List(Vec<AnalysisChart>),
}

impl ChartGroup {
    #[must_use]
    pub fn charts(&self) -> &[AnalysisChart] {
        match self {
            Self::Exploration { exploration_charts } => exploration_charts,
            Self::Feature { feature_charts } => feature_charts,
            Self::List(charts) => charts,
        }
    }

    #[must_use]
    pub fn into_charts(self) -> Vec<AnalysisChart> {
        match self {
            Self::Exploration { exploration_charts } => exploration_charts,
            Self::Feature { feature_charts } => feature_charts,
            Self::List(charts) => charts,
        }
    }
}

impl Default for ChartGroup {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisData {
    pub exploration_charts: ChartGroup,
    pub feature_charts: ChartGroup,
}

/// Envelope returned by the analyze action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    pub data: AnalysisData,
}

impl AnalysisResponse {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidPayload(format!("failed to parse analysis response: {e}"))
        })
    }

    #[must_use]
    pub fn exploration_charts(&self) -> &[AnalysisChart] {
        self.data.exploration_charts.charts()
    }

    #[must_use]
    pub fn feature_charts(&self) -> &[AnalysisChart] {
        self.data.feature_charts.charts()
    }

    /// Exploration charts first, then feature charts.
    pub fn charts(&self) -> impl Iterator<Item = &AnalysisChart> {
        self.exploration_charts()
            .iter()
            .chain(self.feature_charts())
    }

    pub fn into_result(
        self,
        id: impl Into<String>,
        file_name: impl Into<String>,
        domain: impl Into<String>,
    ) -> AnalysisResult {
        let file_name = file_name.into();
        let file_extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        AnalysisResult {
            id: id.into(),
            file_name,
            file_extension,
            domain: domain.into(),
            exploration_charts: self.data.exploration_charts.into_charts(),
            feature_charts: self.data.feature_charts.into_charts(),
        }
    }
}

/// A completed analysis kept for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub id: String,
    pub file_name: String,
    pub file_extension: String,
    pub domain: String,
    pub exploration_charts: Vec<AnalysisChart>,
    pub feature_charts: Vec<AnalysisChart>,
}

impl AnalysisResult {
    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.exploration_charts.len() + self.feature_charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chart_count() == 0
    }

    /// Every chart converted for dispatch, exploration charts first.
    #[must_use]
    pub fn series(&self) -> Vec<ChartSeries> {
        self.exploration_charts
            .iter()
            .chain(&self.feature_charts)
            .map(AnalysisChart::to_series)
            .collect()
    }
}
