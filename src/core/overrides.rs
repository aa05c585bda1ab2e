//! Partial visual encodings supplied by callers.
//!
//! Every field is optional; `None` means "keep the synthesized default".
//! Field names follow the camelCase keys dashboards already send in chart
//! payloads. Colors stay raw strings here and are parsed while merging, so a
//! bad color degrades to the default instead of rejecting the payload.
//! Every other field is read leniently too: an unknown enum value, a value of
//! the wrong type or a `null` reads as `None` (logged at `warn`), and numbers
//! sent as strings are accepted.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::encoding::{AxisKind, AxisPosition, FontWeight, HitMode, LegendPosition};

/// One color for the whole dataset, or one per element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerValue(Vec<String>),
}

impl ColorSpec {
    /// Raw color for element `index`; a single color applies to all elements
    /// and a list falls back to `None` past its end.
    #[must_use]
    pub fn for_element(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(color) => Some(color),
            Self::PerValue(colors) => colors.get(index).map(String::as_str),
        }
    }

    /// Raw color used where only one color makes sense.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.for_element(0)
    }
}

/// Per-dataset style overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetOverrides {
    #[serde(deserialize_with = "lenient")]
    pub background_color: Option<ColorSpec>,
    #[serde(deserialize_with = "lenient")]
    pub border_color: Option<ColorSpec>,
    #[serde(deserialize_with = "lenient_f64")]
    pub border_width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub hover_background_color: Option<ColorSpec>,
    #[serde(deserialize_with = "lenient")]
    pub hover_border_color: Option<ColorSpec>,
    #[serde(deserialize_with = "lenient_f64")]
    pub hover_border_width: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub hover_offset: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub fill: Option<bool>,
    #[serde(deserialize_with = "lenient_f64")]
    pub tension: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub point_radius: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub point_hover_radius: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub point_background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub point_hover_background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub point_hover_border_color: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub point_hover_border_width: Option<f64>,
    /// Fixed matrix cell width in pixels.
    #[serde(deserialize_with = "lenient_f64")]
    pub width: Option<f64>,
    /// Fixed matrix cell height in pixels.
    #[serde(deserialize_with = "lenient_f64")]
    pub height: Option<f64>,
}

/// Partial chart options, merged field by field over the synthesized ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionOverrides {
    #[serde(deserialize_with = "lenient")]
    pub responsive: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub interaction: Option<InteractionOverrides>,
    /// Axis overrides keyed by axis id (`x`, `y`, ...).
    #[serde(deserialize_with = "lenient_or_default")]
    pub scales: IndexMap<String, AxisOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub elements: Option<ElementOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub plugins: Option<PluginOverrides>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionOverrides {
    #[serde(deserialize_with = "lenient")]
    pub mode: Option<HitMode>,
    #[serde(deserialize_with = "lenient")]
    pub intersect: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOverrides {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<AxisKind>,
    #[serde(deserialize_with = "lenient")]
    pub position: Option<AxisPosition>,
    #[serde(deserialize_with = "lenient")]
    pub begin_at_zero: Option<bool>,
    #[serde(deserialize_with = "lenient_f64")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub max: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub grid: Option<GridOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub ticks: Option<TickOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub border: Option<AxisBorderOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<AxisTitleOverrides>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOverrides {
    #[serde(deserialize_with = "lenient")]
    pub display: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontOverrides {
    #[serde(deserialize_with = "lenient_f64")]
    pub size: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub weight: Option<FontWeight>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TickOverrides {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub font: Option<FontOverrides>,
    #[serde(deserialize_with = "lenient_f64")]
    pub padding: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub step_size: Option<f64>,
    /// Replaces numeric tick text: tick value `n` shows `labels[round(n)]`.
    #[serde(deserialize_with = "lenient")]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisBorderOverrides {
    #[serde(deserialize_with = "lenient")]
    pub display: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisTitleOverrides {
    #[serde(deserialize_with = "lenient")]
    pub display: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub font: Option<FontOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementOverrides {
    #[serde(deserialize_with = "lenient")]
    pub bar: Option<BarElementOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub point: Option<PointElementOverrides>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarElementOverrides {
    #[serde(deserialize_with = "lenient_f64")]
    pub border_radius: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub border_skipped: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointElementOverrides {
    #[serde(deserialize_with = "lenient_f64")]
    pub radius: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub hover_radius: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub border_width: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub hover_border_width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub border_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hover_border_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginOverrides {
    #[serde(deserialize_with = "lenient")]
    pub legend: Option<LegendOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub tooltip: Option<TooltipOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub color_scale: Option<ColorScaleOverrides>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorScaleOverrides {
    #[serde(deserialize_with = "lenient")]
    pub display: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendOverrides {
    #[serde(deserialize_with = "lenient")]
    pub display: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub position: Option<LegendPosition>,
    #[serde(deserialize_with = "lenient")]
    pub labels: Option<LegendLabelOverrides>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendLabelOverrides {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub font: Option<FontOverrides>,
    #[serde(deserialize_with = "lenient")]
    pub use_point_style: Option<bool>,
    #[serde(deserialize_with = "lenient_f64")]
    pub padding: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipOverrides {
    #[serde(deserialize_with = "lenient")]
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub body_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub border_color: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub border_width: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub corner_radius: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub padding: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub display_colors: Option<bool>,
    /// Unit appended to series values, e.g. `units`.
    #[serde(deserialize_with = "lenient")]
    pub value_suffix: Option<String>,
}

/// Reads an optional field, turning `null` and unreadable values into `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(raw.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(value = %raw, error = %err, "ignoring unreadable override");
            Ok(None)
        }
    }
}

/// Like [`lenient`], falling back to the type's default.
pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Reads a number given either as a JSON number or as numeric text.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let number = match &raw {
        Value::Null => return Ok(None),
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    let number = number.filter(|value| value.is_finite());
    if number.is_none() {
        warn!(value = %raw, "ignoring non-numeric override");
    }
    Ok(number)
}
