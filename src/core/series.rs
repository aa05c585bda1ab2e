use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::overrides::{DatasetOverrides, OptionOverrides, lenient, lenient_or_default};
use crate::error::{ChartError, ChartResult};

/// One entry of a dataset: a plain magnitude, a scatter point or a matrix
/// cell.
///
/// `Missing` keeps positional alignment for entries the payload left empty
/// or malformed; it reads as `0` wherever a magnitude is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Cell { x: f64, y: f64, v: f64 },
    Point { x: f64, y: f64 },
    Number(f64),
    Missing,
}

impl DataValue {
    /// Scalar used for pie shares, line heights and bar lengths.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::Point { y, .. } => y,
            Self::Cell { v, .. } => v,
            Self::Missing => 0.0,
        }
    }

    /// Heat of a matrix entry: the cell's `v`, `0` for anything else.
    #[must_use]
    pub fn heat(self) -> f64 {
        match self {
            Self::Cell { v, .. } => v,
            Self::Number(_) | Self::Point { .. } | Self::Missing => 0.0,
        }
    }

    #[must_use]
    pub fn point(self) -> Option<(f64, f64)> {
        match self {
            Self::Point { x, y } | Self::Cell { x, y, .. } => Some((x, y)),
            Self::Number(_) | Self::Missing => None,
        }
    }

    #[must_use]
    pub fn cell(self) -> Option<(f64, f64, f64)> {
        match self {
            Self::Cell { x, y, v } => Some((x, y, v)),
            _ => None,
        }
    }

    /// Lenient conversion from an arbitrary JSON entry.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(text) => text
                .trim()
                .parse::<f64>()
                .map_or(Self::Missing, Self::Number),
            Value::Array(pair) if pair.len() == 2 => match (json_f64(&pair[0]), json_f64(&pair[1]))
            {
                (Some(x), Some(y)) => Self::Point { x, y },
                _ => Self::Missing,
            },
            Value::Object(fields) => {
                let x = fields.get("x").and_then(json_f64);
                let y = fields.get("y").and_then(json_f64);
                let v = fields.get("v").and_then(json_f64);
                match (x, y, v) {
                    (Some(x), Some(y), Some(v)) => Self::Cell { x, y, v },
                    (Some(x), Some(y), None) => Self::Point { x, y },
                    _ => Self::Missing,
                }
            }
            _ => Self::Missing,
        }
    }
}

fn json_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<DataValue>,
    pub overrides: DatasetOverrides,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<DataValue>) -> Self {
        Self {
            label: label.into(),
            values,
            overrides: DatasetOverrides::default(),
        }
    }

    #[must_use]
    pub fn numbers(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(label, values.into_iter().map(DataValue::Number).collect())
    }

    #[must_use]
    pub fn points(label: impl Into<String>, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::new(
            label,
            points
                .into_iter()
                .map(|(x, y)| DataValue::Point { x, y })
                .collect(),
        )
    }

    #[must_use]
    pub fn cells(
        label: impl Into<String>,
        cells: impl IntoIterator<Item = (f64, f64, f64)>,
    ) -> Self {
        Self::new(
            label,
            cells
                .into_iter()
                .map(|(x, y, v)| DataValue::Cell { x, y, v })
                .collect(),
        )
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: DatasetOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Canonical chart input: one upstream chart, consumed once per render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    /// Raw upstream type label, resolved later.
    pub kind: String,
    pub title: Option<String>,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: Option<OptionOverrides>,
}

impl ChartSeries {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: OptionOverrides) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|dataset| dataset.values.is_empty())
    }

    /// Parses the upstream JSON chart contract.
    ///
    /// Only text that is not JSON, or whose shape is not an object, fails.
    /// Missing fields default and unknown fields are ignored.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidPayload(format!("failed to parse chart payload: {e}")))?;
        Self::from_json_value(value)
    }

    /// Only a JSON object is a chart; every field inside it is read leniently.
    pub fn from_json_value(value: Value) -> ChartResult<Self> {
        if !value.is_object() {
            return Err(ChartError::InvalidPayload(
                "chart payload must be a JSON object".to_owned(),
            ));
        }
        let payload: ChartPayload = serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidPayload(format!("failed to parse chart payload: {e}")))?;
        Ok(payload.into())
    }

    pub fn to_payload_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&ChartPayload::from(self.clone())).map_err(|e| {
            ChartError::InvalidPayload(format!("failed to serialize chart payload: {e}"))
        })
    }
}

/// Wire shape of one upstream chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPayload {
    #[serde(rename = "type", deserialize_with = "lenient_or_default")]
    pub kind: String,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub data: PayloadData,
    #[serde(deserialize_with = "lenient")]
    pub options: Option<OptionOverrides>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadData {
    #[serde(deserialize_with = "lenient_labels")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "lenient_datasets")]
    pub datasets: Vec<PayloadDataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PayloadDataset {
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_values")]
    pub data: Vec<DataValue>,
    #[serde(flatten)]
    pub overrides: DatasetOverrides,
}

impl From<ChartPayload> for ChartSeries {
    fn from(payload: ChartPayload) -> Self {
        let datasets: Vec<Dataset> = payload
            .data
            .datasets
            .into_iter()
            .map(|dataset| Dataset {
                label: dataset.label.unwrap_or_default(),
                values: dataset.data,
                overrides: dataset.overrides,
            })
            .collect();
        debug!(
            kind = %payload.kind,
            labels = payload.data.labels.len(),
            datasets = datasets.len(),
            "parsed chart payload"
        );
        Self {
            kind: payload.kind,
            title: payload.title,
            labels: payload.data.labels,
            datasets,
            options: payload.options,
        }
    }
}

impl From<ChartSeries> for ChartPayload {
    fn from(series: ChartSeries) -> Self {
        Self {
            kind: series.kind,
            title: series.title,
            data: PayloadData {
                labels: series.labels,
                datasets: series
                    .datasets
                    .into_iter()
                    .map(|dataset| PayloadDataset {
                        label: Some(dataset.label),
                        data: dataset.values,
                        overrides: dataset.overrides,
                    })
                    .collect(),
            },
            options: series.options,
        }
    }
}

fn lenient_values<'de, D>(deserializer: D) -> Result<Vec<DataValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let values: Vec<DataValue> = raw.iter().map(DataValue::from_json).collect();
    let missing = values
        .iter()
        .filter(|value| matches!(value, DataValue::Missing))
        .count();
    if missing > 0 {
        warn!(missing, total = values.len(), "dataset has unreadable entries; treating them as 0");
    }
    Ok(values)
}

fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|label| match label {
            Value::String(text) => text,
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect())
}

/// `null` reads as no datasets; an entry that is not an object is dropped.
fn lenient_datasets<'de, D>(deserializer: D) -> Result<Vec<PayloadDataset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = raw.len();
    let datasets: Vec<PayloadDataset> = raw
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    if datasets.len() < total {
        warn!(dropped = total - datasets.len(), total, "dataset entries are not objects; dropping them");
    }
    Ok(datasets)
}
