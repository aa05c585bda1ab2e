//! Typed deep merge of caller overrides over synthesized defaults.
//!
//! Each level only touches the fields the override actually sets, so
//! overriding one axis option leaves every other defaulted option in place.

use tracing::warn;

use crate::core::overrides::{
    AxisBorderOverrides, AxisOverrides, AxisTitleOverrides, BarElementOverrides,
    ColorScaleOverrides, ColorSpec,
    DatasetOverrides, ElementOverrides, FontOverrides, GridOverrides, InteractionOverrides,
    LegendLabelOverrides, LegendOverrides, OptionOverrides, PluginOverrides,
    PointElementOverrides, TickOverrides, TooltipOverrides,
};
use crate::core::Color;

use super::config::{
    AxisBorder, AxisOptions, AxisTitle, BarElementOptions, BarStyle, CellSize, CellStyle,
    ChartOptions, ColorScaleOptions, DatasetStyle, ElementOptions, FontSpec, GridOptions, InteractionOptions,
    LegendLabels, LegendOptions, LineStyle, PluginOptions, PointElementOptions, ScatterStyle,
    SliceStyle, TickOptions, TooltipFormat, TooltipOptions,
};

/// Applies a partial override onto a fully populated value.
pub trait ApplyOverrides<O> {
    fn apply_overrides(&mut self, overrides: &O);
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

fn set_some<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}

/// Parses an override color, logging and discarding unreadable values.
pub(crate) fn parse_override_color(raw: &str, field: &'static str) -> Option<Color> {
    match Color::parse_css(raw) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!(field, value = raw, error = %err, "ignoring unparseable color override");
            None
        }
    }
}

fn set_color(target: &mut Color, raw: Option<&str>, field: &'static str) {
    if let Some(color) = raw.and_then(|raw| parse_override_color(raw, field)) {
        *target = color;
    }
}

fn set_color_list(targets: &mut [Color], spec: &ColorSpec, field: &'static str) {
    match spec {
        ColorSpec::Single(raw) => {
            if let Some(color) = parse_override_color(raw, field) {
                targets.iter_mut().for_each(|target| *target = color);
            }
        }
        ColorSpec::PerValue(list) => {
            for (target, raw) in targets.iter_mut().zip(list) {
                if let Some(color) = parse_override_color(raw, field) {
                    *target = color;
                }
            }
        }
    }
}

fn merge<T, O>(target: &mut T, overrides: &Option<O>)
where
    T: ApplyOverrides<O>,
{
    if let Some(overrides) = overrides {
        target.apply_overrides(overrides);
    }
}

impl ApplyOverrides<OptionOverrides> for ChartOptions {
    fn apply_overrides(&mut self, overrides: &OptionOverrides) {
        set(&mut self.responsive, &overrides.responsive);
        set(
            &mut self.maintain_aspect_ratio,
            &overrides.maintain_aspect_ratio,
        );
        merge(&mut self.interaction, &overrides.interaction);
        for (axis_id, axis_overrides) in &overrides.scales {
            self.scales
                .entry(axis_id.clone())
                .or_default()
                .apply_overrides(axis_overrides);
        }
        merge(&mut self.elements, &overrides.elements);
        merge(&mut self.plugins, &overrides.plugins);
    }
}

impl ApplyOverrides<InteractionOverrides> for InteractionOptions {
    fn apply_overrides(&mut self, overrides: &InteractionOverrides) {
        set(&mut self.mode, &overrides.mode);
        set(&mut self.intersect, &overrides.intersect);
    }
}

impl ApplyOverrides<AxisOverrides> for AxisOptions {
    fn apply_overrides(&mut self, overrides: &AxisOverrides) {
        set(&mut self.kind, &overrides.kind);
        set_some(&mut self.position, &overrides.position);
        set(&mut self.begin_at_zero, &overrides.begin_at_zero);
        set_some(&mut self.min, &overrides.min);
        set_some(&mut self.max, &overrides.max);
        merge(&mut self.grid, &overrides.grid);
        merge(&mut self.ticks, &overrides.ticks);
        merge(&mut self.border, &overrides.border);
        merge(&mut self.title, &overrides.title);
    }
}

impl ApplyOverrides<GridOverrides> for GridOptions {
    fn apply_overrides(&mut self, overrides: &GridOverrides) {
        set(&mut self.display, &overrides.display);
        set_color(&mut self.color, overrides.color.as_deref(), "grid.color");
    }
}

impl ApplyOverrides<FontOverrides> for FontSpec {
    fn apply_overrides(&mut self, overrides: &FontOverrides) {
        set(&mut self.size, &overrides.size);
        set(&mut self.weight, &overrides.weight);
    }
}

impl ApplyOverrides<TickOverrides> for TickOptions {
    fn apply_overrides(&mut self, overrides: &TickOverrides) {
        set_color(&mut self.color, overrides.color.as_deref(), "ticks.color");
        merge(&mut self.font, &overrides.font);
        set(&mut self.padding, &overrides.padding);
        set_some(&mut self.step_size, &overrides.step_size);
        set_some(&mut self.labels, &overrides.labels);
    }
}

impl ApplyOverrides<AxisBorderOverrides> for AxisBorder {
    fn apply_overrides(&mut self, overrides: &AxisBorderOverrides) {
        set(&mut self.display, &overrides.display);
    }
}

impl ApplyOverrides<AxisTitleOverrides> for AxisTitle {
    fn apply_overrides(&mut self, overrides: &AxisTitleOverrides) {
        set(&mut self.display, &overrides.display);
        set(&mut self.text, &overrides.text);
        merge(&mut self.font, &overrides.font);
        set_color(&mut self.color, overrides.color.as_deref(), "title.color");
    }
}

impl ApplyOverrides<ElementOverrides> for ElementOptions {
    fn apply_overrides(&mut self, overrides: &ElementOverrides) {
        merge(&mut self.bar, &overrides.bar);
        merge(&mut self.point, &overrides.point);
    }
}

impl ApplyOverrides<BarElementOverrides> for BarElementOptions {
    fn apply_overrides(&mut self, overrides: &BarElementOverrides) {
        set(&mut self.border_radius, &overrides.border_radius);
        set(&mut self.border_skipped, &overrides.border_skipped);
    }
}

impl ApplyOverrides<PointElementOverrides> for PointElementOptions {
    fn apply_overrides(&mut self, overrides: &PointElementOverrides) {
        set(&mut self.radius, &overrides.radius);
        set(&mut self.hover_radius, &overrides.hover_radius);
        set(&mut self.border_width, &overrides.border_width);
        set(&mut self.hover_border_width, &overrides.hover_border_width);
        set_color(
            &mut self.border_color,
            overrides.border_color.as_deref(),
            "elements.point.borderColor",
        );
        set_color(
            &mut self.hover_border_color,
            overrides.hover_border_color.as_deref(),
            "elements.point.hoverBorderColor",
        );
    }
}

impl ApplyOverrides<PluginOverrides> for PluginOptions {
    fn apply_overrides(&mut self, overrides: &PluginOverrides) {
        merge(&mut self.legend, &overrides.legend);
        merge(&mut self.tooltip, &overrides.tooltip);
        merge(&mut self.color_scale, &overrides.color_scale);
    }
}

impl ApplyOverrides<ColorScaleOverrides> for ColorScaleOptions {
    fn apply_overrides(&mut self, overrides: &ColorScaleOverrides) {
        set(&mut self.display, &overrides.display);
    }
}

impl ApplyOverrides<LegendOverrides> for LegendOptions {
    fn apply_overrides(&mut self, overrides: &LegendOverrides) {
        set(&mut self.display, &overrides.display);
        set(&mut self.position, &overrides.position);
        merge(&mut self.labels, &overrides.labels);
    }
}

impl ApplyOverrides<LegendLabelOverrides> for LegendLabels {
    fn apply_overrides(&mut self, overrides: &LegendLabelOverrides) {
        set_color(
            &mut self.color,
            overrides.color.as_deref(),
            "legend.labels.color",
        );
        merge(&mut self.font, &overrides.font);
        set(&mut self.use_point_style, &overrides.use_point_style);
        set(&mut self.padding, &overrides.padding);
    }
}

impl ApplyOverrides<TooltipOverrides> for TooltipOptions {
    fn apply_overrides(&mut self, overrides: &TooltipOverrides) {
        set(&mut self.enabled, &overrides.enabled);
        set_color(
            &mut self.background_color,
            overrides.background_color.as_deref(),
            "tooltip.backgroundColor",
        );
        set_color(
            &mut self.title_color,
            overrides.title_color.as_deref(),
            "tooltip.titleColor",
        );
        set_color(
            &mut self.body_color,
            overrides.body_color.as_deref(),
            "tooltip.bodyColor",
        );
        set_color(
            &mut self.border_color,
            overrides.border_color.as_deref(),
            "tooltip.borderColor",
        );
        set(&mut self.border_width, &overrides.border_width);
        set(&mut self.corner_radius, &overrides.corner_radius);
        set(&mut self.padding, &overrides.padding);
        set(&mut self.display_colors, &overrides.display_colors);
        if let (TooltipFormat::SeriesValue { suffix }, Some(value_suffix)) =
            (&mut self.format, &overrides.value_suffix)
        {
            *suffix = Some(value_suffix.clone());
        }
    }
}

impl ApplyOverrides<DatasetOverrides> for DatasetStyle {
    fn apply_overrides(&mut self, overrides: &DatasetOverrides) {
        match self {
            Self::Pie(style) => style.apply_overrides(overrides),
            Self::Line(style) => style.apply_overrides(overrides),
            Self::Scatter(style) => style.apply_overrides(overrides),
            Self::Bar(style) => style.apply_overrides(overrides),
            Self::Matrix(style) => style.apply_overrides(overrides),
        }
    }
}

fn first_of(spec: &Option<ColorSpec>) -> Option<&str> {
    spec.as_ref().and_then(ColorSpec::first)
}

impl ApplyOverrides<DatasetOverrides> for SliceStyle {
    fn apply_overrides(&mut self, overrides: &DatasetOverrides) {
        if let Some(spec) = &overrides.background_color {
            set_color_list(&mut self.background, spec, "backgroundColor");
        }
        if let Some(spec) = &overrides.hover_background_color {
            set_color_list(&mut self.hover_background, spec, "hoverBackgroundColor");
        }
        set_color(
            &mut self.border_color,
            first_of(&overrides.border_color),
            "borderColor",
        );
        set(&mut self.border_width, &overrides.border_width);
        set(&mut self.hover_border_width, &overrides.hover_border_width);
        set(&mut self.hover_offset, &overrides.hover_offset);
    }
}

impl ApplyOverrides<DatasetOverrides> for LineStyle {
    fn apply_overrides(&mut self, overrides: &DatasetOverrides) {
        set_color(
            &mut self.border_color,
            first_of(&overrides.border_color),
            "borderColor",
        );
        set(&mut self.border_width, &overrides.border_width);
        set_color(
            &mut self.background,
            first_of(&overrides.background_color),
            "backgroundColor",
        );
        set(&mut self.fill, &overrides.fill);
        set(&mut self.tension, &overrides.tension);
        set(&mut self.point_radius, &overrides.point_radius);
        set(&mut self.point_hover_radius, &overrides.point_hover_radius);
        set_color(
            &mut self.point_background,
            overrides.point_background_color.as_deref(),
            "pointBackgroundColor",
        );
        set_color(
            &mut self.point_hover_background,
            overrides
                .point_hover_background_color
                .as_deref()
                .or_else(|| first_of(&overrides.hover_background_color)),
            "pointHoverBackgroundColor",
        );
        set_color(
            &mut self.point_hover_border_color,
            overrides.point_hover_border_color.as_deref(),
            "pointHoverBorderColor",
        );
        set(
            &mut self.point_hover_border_width,
            &overrides.point_hover_border_width,
        );
    }
}

impl ApplyOverrides<DatasetOverrides> for ScatterStyle {
    fn apply_overrides(&mut self, overrides: &DatasetOverrides) {
        set_color(
            &mut self.background,
            first_of(&overrides.background_color),
            "backgroundColor",
        );
        set_color(
            &mut self.border_color,
            first_of(&overrides.border_color),
            "borderColor",
        );
        set_color(
            &mut self.point_background,
            overrides.point_background_color.as_deref(),
            "pointBackgroundColor",
        );
        set_color(
            &mut self.point_hover_background,
            overrides.point_hover_background_color.as_deref(),
            "pointHoverBackgroundColor",
        );
    }
}

impl ApplyOverrides<DatasetOverrides> for BarStyle {
    fn apply_overrides(&mut self, overrides: &DatasetOverrides) {
        set_color(
            &mut self.background,
            first_of(&overrides.background_color),
            "backgroundColor",
        );
        set_color(
            &mut self.border_color,
            first_of(&overrides.border_color),
            "borderColor",
        );
        set(&mut self.border_width, &overrides.border_width);
        set_color(
            &mut self.hover_background,
            first_of(&overrides.hover_background_color),
            "hoverBackgroundColor",
        );
        set_color(
            &mut self.hover_border_color,
            first_of(&overrides.hover_border_color),
            "hoverBorderColor",
        );
        set(&mut self.hover_border_width, &overrides.hover_border_width);
    }
}

impl ApplyOverrides<DatasetOverrides> for CellStyle {
    fn apply_overrides(&mut self, overrides: &DatasetOverrides) {
        if let Some(spec) = &overrides.background_color {
            set_color_list(&mut self.fills, spec, "backgroundColor");
        }
        set_color(
            &mut self.border_color,
            first_of(&overrides.border_color),
            "borderColor",
        );
        set(&mut self.border_width, &overrides.border_width);
        if let Some(px) = overrides.width {
            self.width = CellSize::Fixed { px };
        }
        if let Some(px) = overrides.height {
            self.height = CellSize::Fixed { px };
        }
    }
}
