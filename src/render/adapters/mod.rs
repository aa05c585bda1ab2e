//! One scene adapter per chart kind.
//!
//! Adapters turn a merged [`RenderConfiguration`] into a [`ChartScene`]; the
//! chrome every chart shares (title, legend, plot insets) is laid out here.

mod axes;
mod bar;
mod line;
mod matrix;
mod pie;
mod scatter;

use tracing::debug;

use crate::api::{ChartHostConfig, RenderConfiguration, X_AXIS_ID, Y_AXIS_ID};
use crate::core::palette::MATRIX_STOPS;
use crate::core::{
    ChartKind, Color, LegendPosition, PlotArea, ValueRange, Viewport, format_number, palette_color,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartScene, RectPrimitive, TextHAlign, TextPrimitive};

pub use bar::BarAdapter;
pub use line::LineAdapter;
pub use matrix::MatrixAdapter;
pub use pie::PieAdapter;
pub use scatter::ScatterAdapter;

const TITLE_FONT_PX: f64 = 16.0;
const TITLE_COLOR: Color = Color::from_rgb8(0x1F, 0x29, 0x37);
const PLACEHOLDER_COLOR: Color = Color::from_rgb8(0x6B, 0x72, 0x80);
const LEGEND_SWATCH_PX: f64 = 10.0;
const AXIS_TITLE_BAND_PX: f64 = 18.0;
const COLOR_SCALE_BAND_PX: f64 = 40.0;
const COLOR_SCALE_SWATCH_PX: (f64, f64) = (16.0, 12.0);
const COLOR_SCALE_GAP_PX: f64 = 4.0;
const COLOR_SCALE_FONT_PX: f64 = 12.0;
const COLOR_SCALE_TEXT_COLOR: Color = Color::from_rgb8(0x4B, 0x55, 0x63);

/// Pixel budget of the chrome around the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub viewport: Viewport,
    pub padding_px: f64,
    pub title_band_px: f64,
    pub axis_band_px: f64,
    pub legend_band_px: f64,
}

impl SceneLayout {
    /// Default bands of a host showing `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        ChartHostConfig::new(viewport).scene_layout()
    }

    /// Plot rectangle left after title, legend and axis bands.
    pub fn plot_area(&self, config: &RenderConfiguration) -> ChartResult<PlotArea> {
        let pad = self.padding_px;
        let mut area = PlotArea::from_viewport(self.viewport)?.inset(pad, pad, pad, pad);

        if config.title.is_some() {
            area = area.inset(0.0, self.title_band_px, 0.0, 0.0);
        }

        let legend = &config.options.plugins.legend;
        if legend.display {
            let band = self.legend_band_px;
            area = match legend.position {
                LegendPosition::Top => area.inset(0.0, band, 0.0, 0.0),
                LegendPosition::Bottom => area.inset(0.0, 0.0, 0.0, band),
                LegendPosition::Left => area.inset(band * 4.0, 0.0, 0.0, 0.0),
                LegendPosition::Right => area.inset(0.0, 0.0, band * 4.0, 0.0),
            };
        }

        if color_scale_range(config).is_some() {
            area = area.inset(0.0, 0.0, 0.0, COLOR_SCALE_BAND_PX);
        }

        if config.kind.has_axes() {
            let y_title = config
                .axis(Y_AXIS_ID)
                .is_some_and(|axis| axis.title.display);
            let x_title = config
                .axis(X_AXIS_ID)
                .is_some_and(|axis| axis.title.display);
            let left = self.axis_band_px + if y_title { AXIS_TITLE_BAND_PX } else { 0.0 };
            let bottom =
                self.axis_band_px * 0.75 + if x_title { AXIS_TITLE_BAND_PX } else { 0.0 };
            area = area.inset(left, 0.0, 0.0, bottom);
        }

        Ok(area)
    }
}

/// Draws the data of one chart kind into a prepared scene.
pub trait SceneAdapter {
    fn kind(&self) -> ChartKind;

    fn draw(&self, config: &RenderConfiguration, scene: &mut ChartScene) -> ChartResult<()>;
}

/// The adapter drawing `kind`.
#[must_use]
pub fn adapter_for(kind: ChartKind) -> &'static dyn SceneAdapter {
    match kind {
        ChartKind::Pie => &PieAdapter,
        ChartKind::Line => &LineAdapter,
        ChartKind::Scatter => &ScatterAdapter,
        ChartKind::Bar => &BarAdapter,
        ChartKind::Matrix => &MatrixAdapter,
    }
}

/// Builds the full scene of `config`: chrome plus the kind's data adapter.
pub fn build_scene(config: &RenderConfiguration, layout: &SceneLayout) -> ChartResult<ChartScene> {
    let plot_area = layout.plot_area(config)?;
    let interaction = config.options.interaction;
    let mut scene = ChartScene::new(layout.viewport, plot_area)
        .with_hit_mode(interaction.mode, interaction.intersect);

    if let Some(title) = config.title.as_deref().filter(|title| !title.is_empty()) {
        let x = f64::from(layout.viewport.width) / 2.0;
        scene.texts.push(
            TextPrimitive::new(
                title,
                x,
                layout.padding_px,
                TITLE_FONT_PX,
                TITLE_COLOR,
                TextHAlign::Center,
            )
            .bold(true),
        );
    }

    if config.options.plugins.legend.display {
        draw_legend(config, layout, &mut scene);
    }
    if let Some(range) = color_scale_range(config) {
        draw_color_scale(range, layout, &mut scene);
    }

    adapter_for(config.kind).draw(config, &mut scene)?;
    scene.validate()?;

    debug!(
        kind = config.kind.as_str(),
        elements = scene.element_count(),
        texts = scene.texts.len(),
        "built chart scene"
    );
    Ok(scene)
}

/// Scene standing in for a chart kind nobody can draw.
pub fn placeholder_scene(message: &str, layout: &SceneLayout) -> ChartResult<ChartScene> {
    let area = PlotArea::from_viewport(layout.viewport)?;
    let (cx, cy) = area.center();
    let scene = ChartScene::new(layout.viewport, area).with_text(TextPrimitive::new(
        message,
        cx,
        cy,
        14.0,
        PLACEHOLDER_COLOR,
        TextHAlign::Center,
    ));
    scene.validate()?;
    Ok(scene)
}

fn legend_entries(config: &RenderConfiguration) -> Vec<(String, Color)> {
    match config.kind {
        ChartKind::Pie => config
            .data
            .labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let color = config.dataset(0).map_or_else(
                    || palette_color(index),
                    |dataset| dataset.style.element_fill(index),
                );
                (label.clone(), color)
            })
            .collect(),
        _ => config
            .data
            .datasets
            .iter()
            .map(|dataset| (dataset.label.clone(), dataset.style.swatch()))
            .collect(),
    }
}

fn draw_legend(config: &RenderConfiguration, layout: &SceneLayout, scene: &mut ChartScene) {
    let legend = &config.options.plugins.legend;
    let labels = &legend.labels;
    let pad = layout.padding_px;
    let title_offset = if config.title.is_some() {
        layout.title_band_px
    } else {
        0.0
    };
    let viewport_height = f64::from(layout.viewport.height);
    let (mut x, y) = match legend.position {
        LegendPosition::Bottom => (pad, viewport_height - pad - layout.legend_band_px / 2.0),
        LegendPosition::Top | LegendPosition::Left | LegendPosition::Right => {
            (pad, pad + title_offset + layout.legend_band_px / 2.0)
        }
    };

    for (label, color) in legend_entries(config) {
        if label.is_empty() {
            continue;
        }
        scene.rects.push(RectPrimitive::new(
            x,
            y - LEGEND_SWATCH_PX / 2.0,
            LEGEND_SWATCH_PX,
            LEGEND_SWATCH_PX,
            color,
        ));
        x += LEGEND_SWATCH_PX + 4.0;
        let width = estimate_text_width(&label, labels.font.size);
        scene.texts.push(
            TextPrimitive::new(
                label,
                x,
                y - labels.font.size / 2.0,
                labels.font.size,
                labels.color,
                TextHAlign::Left,
            )
            .bold(labels.font.weight.is_bold()),
        );
        x += width + labels.padding;
    }
}

/// Cell range of a heatmap showing its color scale; `None` without cells.
fn color_scale_range(config: &RenderConfiguration) -> Option<ValueRange> {
    if config.kind != ChartKind::Matrix || !config.options.plugins.color_scale.display {
        return None;
    }
    config.heat_range()
}

/// Two centered rows along the bottom edge: `Low [stops] High`, then
/// `min  Range: min - max  max`.
fn draw_color_scale(range: ValueRange, layout: &SceneLayout, scene: &mut ChartScene) {
    let center = f64::from(layout.viewport.width) / 2.0;
    let top = f64::from(layout.viewport.height) - layout.padding_px - COLOR_SCALE_BAND_PX;
    let (swatch_width, swatch_height) = COLOR_SCALE_SWATCH_PX;
    let stops = MATRIX_STOPS.len() as f64;
    let strip_width = stops * swatch_width + (stops - 1.0) * COLOR_SCALE_GAP_PX;
    let strip_left = center - strip_width / 2.0;
    let swatch_top = top + COLOR_SCALE_GAP_PX;

    for (index, color) in MATRIX_STOPS.iter().enumerate() {
        let x = strip_left + index as f64 * (swatch_width + COLOR_SCALE_GAP_PX);
        scene.rects.push(
            RectPrimitive::new(x, swatch_top, swatch_width, swatch_height, *color)
                .with_corner_radius(2.0),
        );
    }

    let label_y = swatch_top + (swatch_height - COLOR_SCALE_FONT_PX) / 2.0;
    let gap = 2.0 * COLOR_SCALE_GAP_PX;
    let text = |text: String, x: f64, y: f64, align: TextHAlign| {
        TextPrimitive::new(text, x, y, COLOR_SCALE_FONT_PX, COLOR_SCALE_TEXT_COLOR, align)
    };
    scene.texts.push(text("Low".to_owned(), strip_left - gap, label_y, TextHAlign::Right));
    scene.texts.push(text(
        "High".to_owned(),
        strip_left + strip_width + gap,
        label_y,
        TextHAlign::Left,
    ));

    let (min, max) = (format_number(range.min), format_number(range.max));
    let summary = format!("Range: {min} - {max}");
    let half = estimate_text_width(&summary, COLOR_SCALE_FONT_PX) / 2.0;
    let range_y = swatch_top + swatch_height + COLOR_SCALE_GAP_PX * 2.0;
    scene.texts.push(text(min, center - half - gap * 2.0, range_y, TextHAlign::Right));
    scene.texts.push(text(summary, center, range_y, TextHAlign::Center));
    scene.texts.push(text(max, center + half + gap * 2.0, range_y, TextHAlign::Left));
}

pub(crate) fn style_mismatch(kind: ChartKind, dataset_index: usize) -> ChartError {
    ChartError::InvalidData(format!(
        "dataset {dataset_index} is not styled for a {kind} chart"
    ))
}

/// Rough advance width; real glyph metrics belong to the backend.
pub(crate) fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}
