mod analysis;
mod config;
mod host;
mod host_config;
mod json_contract;
mod merge;
mod session;
pub mod showcase;
mod synthesizer;
mod tooltip;

pub use analysis::{AnalysisChart, AnalysisData, AnalysisResponse, AnalysisResult, ChartGroup};
pub use config::{
    AxisBorder, AxisOptions, AxisTitle, BarElementOptions, BarStyle, CellSize, CellStyle,
    ChartData, ChartOptions, ColorScaleOptions, DatasetConfig, DatasetStyle, ElementOptions, FontSpec, GridOptions,
    InteractionOptions, LegendLabels, LegendOptions, LineStyle, PluginOptions,
    PointElementOptions, RenderConfiguration, ScatterStyle, SliceStyle, TickOptions,
    TooltipFormat, TooltipOptions, X_AXIS_ID, Y_AXIS_ID,
};
pub use host::{ChartHost, DispatchOutcome};
pub use host_config::{ChartHostConfig, DispatchMode};
pub use json_contract::{RENDER_CONFIGURATION_JSON_SCHEMA_V1, RenderConfigurationJsonContractV1};
pub use merge::ApplyOverrides;
pub use session::{ChartSource, SessionContext, UserProfile};
pub use showcase::{HeatmapAxisLabels, describe_interaction};
pub use synthesizer::{synthesize, synthesize_series};
pub use tooltip::TooltipText;
