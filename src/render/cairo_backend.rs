use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::Color;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartScene, CubicSegment, RectPrimitive, TextHAlign, WidgetBackend, smooth_segments,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoPaintStats {
    pub areas_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub wedges_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Paints scenes onto an external Cairo context (for example a GTK
/// `DrawingArea` draw callback).
pub trait CairoContextPainter {
    fn paint_on_cairo_context(
        &mut self,
        context: &Context,
        scene: &ChartScene,
    ) -> ChartResult<CairoPaintStats>;
}

/// Offscreen widget: the scene rendered into its own image surface.
#[derive(Debug)]
pub struct CairoWidget {
    surface: ImageSurface,
    stats: CairoPaintStats,
}

impl CairoWidget {
    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn stats(&self) -> CairoPaintStats {
        self.stats
    }
}

/// Cairo + Pango + PangoCairo widget backend.
#[derive(Debug)]
pub struct CairoBackend {
    clear_color: Color,
    live_widgets: usize,
}

impl Default for CairoBackend {
    fn default() -> Self {
        Self {
            clear_color: Color::WHITE,
            live_widgets: 0,
        }
    }
}

impl CairoBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn live_widgets(&self) -> usize {
        self.live_widgets
    }

    fn paint(&self, context: &Context, scene: &ChartScene) -> ChartResult<CairoPaintStats> {
        scene.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoPaintStats::default();

        for area in &scene.areas {
            let Some(first) = area.points.first() else {
                continue;
            };
            let last = area.points.last().copied().unwrap_or(*first);
            context.move_to(first.0, area.baseline_y);
            context.line_to(first.0, first.1);
            append_segments(context, &smooth_segments(&area.points, area.tension));
            context.line_to(last.0, area.baseline_y);
            context.close_path();
            apply_color(context, area.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill area", err))?;
            stats.areas_drawn += 1;
        }

        for line in &scene.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for rect in &scene.rects {
            append_rect_path(context, *rect);
            fill_and_stroke(context, rect.fill_color, rect.border_color, rect.border_width)?;
            stats.rects_drawn += 1;
        }

        for wedge in &scene.wedges {
            context.new_sub_path();
            context.arc(
                wedge.cx,
                wedge.cy,
                wedge.outer_radius,
                wedge.start_angle,
                wedge.end_angle,
            );
            if wedge.inner_radius > 0.0 {
                context.arc_negative(
                    wedge.cx,
                    wedge.cy,
                    wedge.inner_radius,
                    wedge.end_angle,
                    wedge.start_angle,
                );
            } else {
                context.line_to(wedge.cx, wedge.cy);
            }
            context.close_path();
            fill_and_stroke(context, wedge.fill_color, wedge.border_color, wedge.border_width)?;
            stats.wedges_drawn += 1;
        }

        for path in &scene.paths {
            let Some(first) = path.points.first() else {
                continue;
            };
            context.move_to(first.0, first.1);
            append_segments(context, &path.segments());
            apply_color(context, path.color);
            context.set_line_width(path.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))?;
            stats.paths_drawn += 1;
        }

        for circle in &scene.circles {
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, 2.0 * PI);
            fill_and_stroke(
                context,
                circle.fill_color,
                circle.border_color,
                circle.border_width,
            )?;
            stats.circles_drawn += 1;
        }

        for text in &scene.texts {
            let layout = pangocairo::functions::create_layout(context);
            let weight = if text.bold { " Bold" } else { "" };
            let font_description =
                FontDescription::from_string(&format!("Sans{weight} {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        Ok(stats)
    }
}

impl WidgetBackend for CairoBackend {
    type Handle = CairoWidget;

    fn create_widget(&mut self, scene: &ChartScene) -> ChartResult<CairoWidget> {
        let width = i32::try_from(scene.viewport.width)
            .map_err(|_| ChartError::Backend("surface width out of range".to_owned()))?;
        let height = i32::try_from(scene.viewport.height)
            .map_err(|_| ChartError::Backend("surface height out of range".to_owned()))?;
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let stats = {
            let context = Context::new(&surface)
                .map_err(|err| map_backend_error("failed to create cairo context", err))?;
            self.paint(&context, scene)?
        };
        self.live_widgets += 1;
        Ok(CairoWidget { surface, stats })
    }

    fn destroy_widget(&mut self, widget: CairoWidget) {
        self.live_widgets = self.live_widgets.saturating_sub(1);
        drop(widget);
    }
}

impl CairoContextPainter for CairoBackend {
    fn paint_on_cairo_context(
        &mut self,
        context: &Context,
        scene: &ChartScene,
    ) -> ChartResult<CairoPaintStats> {
        self.paint(context, scene)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_segments(context: &Context, segments: &[CubicSegment]) {
    for [_, c1, c2, end] in segments {
        context.curve_to(c1.0, c1.1, c2.0, c2.1, end.0, end.1);
    }
}

fn fill_and_stroke(
    context: &Context,
    fill: Color,
    border: Color,
    border_width: f64,
) -> ChartResult<()> {
    apply_color(context, fill);
    if border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill shape", err))?;
        apply_color(context, border);
        context.set_line_width(border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke shape border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill shape", err))
    }
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
