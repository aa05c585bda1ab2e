pub mod color;
pub mod encoding;
pub mod format;
pub mod kind;
pub mod overrides;
pub mod palette;
pub mod scale;
pub mod series;
pub mod types;

pub use color::Color;
pub use encoding::{AxisKind, AxisPosition, FontWeight, HitMode, LegendPosition, NamedFontWeight};
pub use format::{format_number, format_percent, share_percent};
pub use kind::{ChartKind, ResolvedChartKind, resolve};
pub use overrides::{ColorSpec, DatasetOverrides, OptionOverrides};
pub use palette::{ValueRange, hover_palette_color, matrix_color, palette_color};
pub use scale::{LinearScale, PixelRange};
pub use series::{ChartPayload, ChartSeries, DataValue, Dataset};
pub use types::{PlotArea, Viewport};
