use serde::{Deserialize, Serialize};

/// Scale type of one cartesian axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// Positions follow the chart's category labels.
    #[default]
    Category,
    /// Positions follow numeric values.
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// How the engine picks the element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitMode {
    /// Closest element whose shape contains the pointer.
    #[default]
    Nearest,
    /// Closest category column along the x axis.
    Index,
    /// Only elements directly under the pointer.
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedFontWeight {
    Normal,
    Bold,
    Lighter,
    Bolder,
}

/// CSS font weight, either named or numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Numeric(u16),
    Named(NamedFontWeight),
}

impl FontWeight {
    pub const NORMAL: Self = Self::Named(NamedFontWeight::Normal);
    pub const BOLD: Self = Self::Named(NamedFontWeight::Bold);

    #[must_use]
    pub fn is_bold(self) -> bool {
        match self {
            Self::Numeric(weight) => weight >= 600,
            Self::Named(NamedFontWeight::Bold | NamedFontWeight::Bolder) => true,
            Self::Named(_) => false,
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}
