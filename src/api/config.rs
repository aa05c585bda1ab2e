use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    AxisKind, AxisPosition, ChartKind, Color, DataValue, FontWeight, HitMode, LegendPosition,
    ValueRange, format_number, hover_palette_color, palette_color,
};

pub const X_AXIS_ID: &str = "x";
pub const Y_AXIS_ID: &str = "y";

/// Fully merged configuration handed to a rendering adapter.
///
/// A pure value: it is derived from scratch for every input series and is
/// never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfiguration {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl RenderConfiguration {
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.data.labels.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn dataset(&self, index: usize) -> Option<&DatasetConfig> {
        self.data.datasets.get(index)
    }

    #[must_use]
    pub fn data_value(&self, dataset_index: usize, element_index: usize) -> Option<DataValue> {
        self.dataset(dataset_index)?
            .values
            .get(element_index)
            .copied()
    }

    /// Value at a position; absent datasets or values read as `0`.
    ///
    /// Matrix charts read the cell heat, every other kind the magnitude.
    #[must_use]
    pub fn value_at(&self, dataset_index: usize, element_index: usize) -> f64 {
        let read: fn(DataValue) -> f64 = match self.kind {
            ChartKind::Matrix => DataValue::heat,
            _ => DataValue::magnitude,
        };
        self.data_value(dataset_index, element_index)
            .map_or(0.0, read)
    }

    /// Range of the `v` of every matrix cell across all datasets.
    #[must_use]
    pub fn heat_range(&self) -> Option<ValueRange> {
        ValueRange::observe(
            self.data
                .datasets
                .iter()
                .flat_map(|dataset| dataset.values.iter())
                .filter_map(|value| match value {
                    DataValue::Cell { v, .. } => Some(*v),
                    _ => None,
                }),
        )
    }

    #[must_use]
    pub fn axis(&self, id: &str) -> Option<&AxisOptions> {
        self.options.scales.get(id)
    }

    /// Number of category slots: the label count, or the longest dataset when
    /// no labels were given.
    #[must_use]
    pub fn category_count(&self) -> usize {
        if !self.data.labels.is_empty() {
            return self.data.labels.len();
        }
        self.data
            .datasets
            .iter()
            .map(|dataset| dataset.values.len())
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data
            .datasets
            .iter()
            .all(|dataset| dataset.values.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub label: String,
    pub values: Vec<DataValue>,
    pub style: DatasetStyle,
}

impl DatasetConfig {
    /// Sum of finite magnitudes.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values
            .iter()
            .map(|value| value.magnitude())
            .filter(|value| value.is_finite())
            .sum()
    }
}

/// Resolved visual encoding of one dataset, shaped per chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DatasetStyle {
    Pie(SliceStyle),
    Line(LineStyle),
    Scatter(ScatterStyle),
    Bar(BarStyle),
    Matrix(CellStyle),
}

impl DatasetStyle {
    /// Legend swatch color.
    #[must_use]
    pub fn swatch(&self) -> Color {
        match self {
            Self::Pie(style) => style.slice_color(0),
            Self::Line(style) => style.border_color,
            Self::Scatter(style) => style.background,
            Self::Bar(style) => style.background,
            Self::Matrix(style) => style.fills.last().copied().unwrap_or(style.border_color),
        }
    }

    /// Fill of element `index` in its resting state.
    #[must_use]
    pub fn element_fill(&self, index: usize) -> Color {
        match self {
            Self::Pie(style) => style.slice_color(index),
            Self::Line(style) => style.point_background,
            Self::Scatter(style) => style.point_background,
            Self::Bar(style) => style.background,
            Self::Matrix(style) => style.cell_fill(index),
        }
    }

    /// Fill of element `index` while hovered.
    #[must_use]
    pub fn element_hover_fill(&self, index: usize) -> Color {
        match self {
            Self::Pie(style) => style.slice_hover_color(index),
            Self::Line(style) => style.point_hover_background,
            Self::Scatter(style) => style.point_hover_background,
            Self::Bar(style) => style.hover_background,
            Self::Matrix(style) => style.cell_fill(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceStyle {
    /// One color per slice, index-aligned with the values.
    pub background: Vec<Color>,
    pub hover_background: Vec<Color>,
    pub border_color: Color,
    pub border_width: f64,
    pub hover_border_width: f64,
    pub hover_offset: f64,
}

impl SliceStyle {
    #[must_use]
    pub fn slice_color(&self, index: usize) -> Color {
        self.background
            .get(index)
            .copied()
            .unwrap_or_else(|| palette_color(index))
    }

    #[must_use]
    pub fn slice_hover_color(&self, index: usize) -> Color {
        self.hover_background
            .get(index)
            .copied()
            .unwrap_or_else(|| hover_palette_color(index))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub border_color: Color,
    pub border_width: f64,
    /// Area fill under the line.
    pub background: Color,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: f64,
    pub point_hover_radius: f64,
    pub point_background: Color,
    pub point_hover_background: Color,
    pub point_hover_border_color: Color,
    pub point_hover_border_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterStyle {
    pub background: Color,
    pub border_color: Color,
    pub point_background: Color,
    pub point_hover_background: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    pub background: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub hover_background: Color,
    pub hover_border_color: Color,
    pub hover_border_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    /// One fill per cell, index-aligned with the values.
    pub fills: Vec<Color>,
    pub border_color: Color,
    pub border_width: f64,
    pub width: CellSize,
    pub height: CellSize,
}

impl CellStyle {
    #[must_use]
    pub fn cell_fill(&self, index: usize) -> Color {
        self.fills
            .get(index)
            .copied()
            .unwrap_or(crate::core::palette::MATRIX_STOPS[2])
    }
}

/// Matrix cell extent along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CellSize {
    Fixed { px: f64 },
    /// Fraction of the plotted area, never below `min_px`.
    Auto { fraction: f64, min_px: f64 },
}

impl CellSize {
    pub const DEFAULT_AUTO: Self = Self::Auto {
        fraction: 0.1,
        min_px: 20.0,
    };

    #[must_use]
    pub fn resolve(self, area_extent_px: f64) -> f64 {
        match self {
            Self::Fixed { px } => px.max(0.0),
            Self::Auto { fraction, min_px } => (area_extent_px.max(0.0) * fraction).max(min_px),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub interaction: InteractionOptions,
    /// Cartesian axes keyed by axis id; empty for pies.
    pub scales: IndexMap<String, AxisOptions>,
    pub elements: ElementOptions,
    pub plugins: PluginOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            interaction: InteractionOptions::default(),
            scales: IndexMap::new(),
            elements: ElementOptions::default(),
            plugins: PluginOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOptions {
    pub mode: HitMode,
    pub intersect: bool,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            mode: HitMode::Nearest,
            intersect: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f64,
    pub weight: FontWeight,
}

impl FontSpec {
    #[must_use]
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(11.0, FontWeight::NORMAL)
    }
}

pub(crate) const AXIS_TEXT_COLOR: Color = Color::from_rgb8(0x6B, 0x72, 0x80);
pub(crate) const AXIS_TITLE_COLOR: Color = Color::from_rgb8(0x37, 0x41, 0x51);
pub(crate) const GRID_COLOR: Color = Color::from_rgba8(107, 114, 128, 0.1);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub kind: AxisKind,
    pub position: Option<AxisPosition>,
    pub begin_at_zero: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub grid: GridOptions,
    pub ticks: TickOptions,
    pub border: AxisBorder,
    pub title: AxisTitle,
}

impl AxisOptions {
    #[must_use]
    pub fn category() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn linear() -> Self {
        Self {
            kind: AxisKind::Linear,
            ..Self::default()
        }
    }
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            kind: AxisKind::Category,
            position: None,
            begin_at_zero: false,
            min: None,
            max: None,
            grid: GridOptions::default(),
            ticks: TickOptions::default(),
            border: AxisBorder { display: false },
            title: AxisTitle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    pub display: bool,
    pub color: Color,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            display: true,
            color: GRID_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOptions {
    pub color: Color,
    pub font: FontSpec,
    pub padding: f64,
    pub step_size: Option<f64>,
    /// Lookup table replacing numeric tick text.
    pub labels: Option<Vec<String>>,
}

impl TickOptions {
    /// Text shown for a tick at `value`.
    #[must_use]
    pub fn label_for(&self, value: f64) -> String {
        match &self.labels {
            Some(labels) => {
                let rounded = value.round();
                if rounded < 0.0 || !rounded.is_finite() {
                    return String::new();
                }
                labels.get(rounded as usize).cloned().unwrap_or_default()
            }
            None => format_number(value),
        }
    }
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            color: AXIS_TEXT_COLOR,
            font: FontSpec::default(),
            padding: 3.0,
            step_size: None,
            labels: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBorder {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
}

impl Default for AxisTitle {
    fn default() -> Self {
        Self {
            display: false,
            text: String::new(),
            font: FontSpec::new(12.0, FontWeight::BOLD),
            color: AXIS_TITLE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementOptions {
    pub bar: BarElementOptions,
    pub point: PointElementOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarElementOptions {
    pub border_radius: f64,
    pub border_skipped: bool,
}

impl Default for BarElementOptions {
    fn default() -> Self {
        Self {
            border_radius: 0.0,
            border_skipped: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointElementOptions {
    pub radius: f64,
    pub hover_radius: f64,
    pub border_width: f64,
    pub hover_border_width: f64,
    pub border_color: Color,
    pub hover_border_color: Color,
}

impl Default for PointElementOptions {
    fn default() -> Self {
        Self {
            radius: 3.0,
            hover_radius: 4.0,
            border_width: 1.0,
            hover_border_width: 1.0,
            border_color: Color::WHITE,
            hover_border_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
    #[serde(default)]
    pub color_scale: ColorScaleOptions,
}

/// Low to High swatch strip under a heatmap, labelled with the cell range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorScaleOptions {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
    pub labels: LegendLabels,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: false,
            position: LegendPosition::Top,
            labels: LegendLabels::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: Color,
    pub font: FontSpec,
    pub use_point_style: bool,
    pub padding: f64,
}

impl Default for LegendLabels {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x4B, 0x55, 0x63),
            font: FontSpec::new(12.0, FontWeight::NORMAL),
            use_point_style: true,
            padding: 10.0,
        }
    }
}

/// Text rule used to describe a hovered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum TooltipFormat {
    /// `"{label}: {value} ({pct}% of total)"`.
    ShareOfTotal,
    /// `"{dataset}: {value}"`, optionally followed by a unit.
    SeriesValue { suffix: Option<String> },
    /// `"{dataset}: ({x}, {y})"`.
    Point,
    /// `"Value: {v}"` with an empty title.
    CellValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub enabled: bool,
    pub background_color: Color,
    pub title_color: Color,
    pub body_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
    pub padding: f64,
    pub display_colors: bool,
    pub format: TooltipFormat,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            background_color: Color::from_rgba8(17, 24, 39, 0.95),
            title_color: Color::from_rgb8(0xF9, 0xFA, 0xFB),
            body_color: Color::from_rgb8(0xF9, 0xFA, 0xFB),
            border_color: Color::from_rgba8(59, 130, 246, 0.5),
            border_width: 1.0,
            corner_radius: 8.0,
            padding: 12.0,
            display_colors: true,
            format: TooltipFormat::SeriesValue { suffix: None },
        }
    }
}
