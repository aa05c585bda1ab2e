use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendering kinds the dispatcher has an adapter for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
    Scatter,
    Bar,
    Matrix,
}

impl ChartKind {
    pub const ALL: [Self; 5] = [Self::Pie, Self::Line, Self::Scatter, Self::Bar, Self::Matrix];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Matrix => "matrix",
        }
    }

    /// Name reported to interaction callbacks.
    ///
    /// The dashboard talks about area and heatmap charts, so those two kinds
    /// differ from their rendering names.
    #[must_use]
    pub fn interaction_name(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Line => "area",
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Matrix => "heatmap",
        }
    }

    /// Whether the kind draws on cartesian axes.
    #[must_use]
    pub fn has_axes(self) -> bool {
        !matches!(self, Self::Pie)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of mapping an upstream chart label onto a rendering kind.
///
/// `Unsupported` is a regular outcome rather than an error and keeps the
/// upstream label for diagnostics and placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedChartKind {
    Pie,
    Line,
    Scatter,
    Bar,
    Matrix,
    Unsupported(String),
}

impl ResolvedChartKind {
    #[must_use]
    pub fn supported(&self) -> Option<ChartKind> {
        match self {
            Self::Pie => Some(ChartKind::Pie),
            Self::Line => Some(ChartKind::Line),
            Self::Scatter => Some(ChartKind::Scatter),
            Self::Bar => Some(ChartKind::Bar),
            Self::Matrix => Some(ChartKind::Matrix),
            Self::Unsupported(_) => None,
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.supported().is_some()
    }
}

impl From<ChartKind> for ResolvedChartKind {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Pie => Self::Pie,
            ChartKind::Line => Self::Line,
            ChartKind::Scatter => Self::Scatter,
            ChartKind::Bar => Self::Bar,
            ChartKind::Matrix => Self::Matrix,
        }
    }
}

/// Maps an upstream chart label onto a rendering kind.
///
/// Matching ignores ASCII case and surrounding whitespace.
#[must_use]
pub fn resolve(upstream: &str) -> ResolvedChartKind {
    let key = upstream.trim().to_ascii_lowercase();
    match key.as_str() {
        "pie" | "doughnut" => ResolvedChartKind::Pie,
        "line" | "area" => ResolvedChartKind::Line,
        "scatter" => ResolvedChartKind::Scatter,
        "bar" | "histogram" | "column" => ResolvedChartKind::Bar,
        "heatmap" | "matrix" => ResolvedChartKind::Matrix,
        _ => ResolvedChartKind::Unsupported(upstream.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aliases_collapse_onto_kinds() {
        assert_eq!(resolve("doughnut"), ResolvedChartKind::Pie);
        assert_eq!(resolve("AREA"), ResolvedChartKind::Line);
        assert_eq!(resolve(" Column "), ResolvedChartKind::Bar);
        assert_eq!(resolve("heatmap"), ResolvedChartKind::Matrix);
    }

    #[test]
    fn unknown_labels_keep_their_text() {
        assert_eq!(
            resolve("radar"),
            ResolvedChartKind::Unsupported("radar".to_owned())
        );
        assert!(!resolve("").is_supported());
    }
}
