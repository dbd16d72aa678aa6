//! Cairo/Pango painter for slider frames.
//!
//! A slider hands over two kinds of [`RenderFrame`]: the transparent range
//! overlay (frame border, filler, handles and their labels) and the
//! background mini-chart drawn underneath it (area fills and series strokes).
//! Layers are painted back to front, so chart fills end up under chart
//! strokes and handle labels sit above everything else.

use cairo::{Context, Format, ImageSurface, LineCap, LineJoin, Operator};
use pango::FontDescription;
use tracing::trace;

use crate::core::Viewport;
use crate::error::{SliderError, SliderResult};
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

const LABEL_FONT_FAMILY: &str = "Sans";

/// Primitive counts of the last painted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can paint into a Cairo context owned by the host, such as
/// the draw callback of the widget embedding the slider.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> SliderResult<()>;
}

/// Paints slider and background-chart frames into an ARGB32 image surface.
///
/// The clear color starts fully transparent so an overlay composes over its
/// background chart. A renderer for the background chart usually sets an
/// opaque one with [`CairoRenderer::set_clear_color`].
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> SliderResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SliderError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Sized to a slider surface viewport, e.g. `dom_width` by the slider height.
    pub fn for_viewport(viewport: Viewport) -> SliderResult<Self> {
        let (width, height) = surface_size(viewport)?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> SliderResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Follows the frame viewport, which changes after a force-fit.
    fn ensure_size(&mut self, viewport: Viewport) -> SliderResult<()> {
        let (width, height) = surface_size(viewport)?;
        if self.surface.width() != width || self.surface.height() != height {
            trace!(width, height, "resizing cairo surface");
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }

    fn paint(&mut self, context: &Context, frame: &RenderFrame) -> SliderResult<()> {
        frame.validate()?;
        clear(context, self.clear_color)?;

        let stats = CairoRenderStats {
            polygons_drawn: fill_chart_areas(context, &frame.polygons)?,
            lines_drawn: stroke_chart_lines(context, &frame.lines)?,
            rects_drawn: paint_slider_rects(context, &frame.rects)?,
            texts_drawn: draw_handle_labels(context, &frame.texts),
        };
        trace!(?stats, "cairo frame painted");
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SliderResult<()> {
        self.ensure_size(frame.viewport)?;
        let context = Context::new(&self.surface)
            .map_err(|err| backend_error("failed to create cairo context", err))?;
        self.paint(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> SliderResult<()> {
        self.paint(context, frame)
    }
}

fn surface_size(viewport: Viewport) -> SliderResult<(i32, i32)> {
    let width = i32::try_from(viewport.width)
        .map_err(|_| SliderError::InvalidData("viewport width exceeds i32".to_owned()))?;
    let height = i32::try_from(viewport.height)
        .map_err(|_| SliderError::InvalidData("viewport height exceeds i32".to_owned()))?;
    Ok((width, height))
}

fn create_surface(width: i32, height: i32) -> SliderResult<ImageSurface> {
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| backend_error("failed to create cairo surface", err))
}

fn clear(context: &Context, color: Color) -> SliderResult<()> {
    set_color(context, color);
    context.set_operator(Operator::Source);
    context
        .paint()
        .map_err(|err| backend_error("failed to clear surface", err))?;
    context.set_operator(Operator::Over);
    Ok(())
}

fn fill_chart_areas(context: &Context, polygons: &[PolygonPrimitive]) -> SliderResult<usize> {
    for polygon in polygons {
        let Some(((x, y), rest)) = polygon.points.split_first() else {
            continue;
        };
        context.move_to(*x, *y);
        for (x, y) in rest {
            context.line_to(*x, *y);
        }
        context.close_path();
        set_color(context, polygon.fill_color);
        context
            .fill()
            .map_err(|err| backend_error("failed to fill chart area", err))?;
    }
    Ok(polygons.len())
}

/// Series strokes arrive as consecutive segments; round joins hide the seams.
fn stroke_chart_lines(context: &Context, lines: &[LinePrimitive]) -> SliderResult<usize> {
    context.set_line_cap(LineCap::Round);
    context.set_line_join(LineJoin::Round);
    for line in lines {
        set_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| backend_error("failed to stroke chart line", err))?;
    }
    context.set_line_cap(LineCap::Butt);
    context.set_line_join(LineJoin::Miter);
    Ok(lines.len())
}

/// Slider rects in frame order: the bordered frame, then the filler, then the
/// two handles on top of it.
fn paint_slider_rects(context: &Context, rects: &[RectPrimitive]) -> SliderResult<usize> {
    for rect in rects {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        set_color(context, rect.fill_color);
        if rect.border_width <= 0.0 {
            context
                .fill()
                .map_err(|err| backend_error("failed to fill slider rect", err))?;
            continue;
        }
        context
            .fill_preserve()
            .map_err(|err| backend_error("failed to fill slider rect", err))?;
        set_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| backend_error("failed to stroke slider border", err))?;
    }
    Ok(rects.len())
}

/// Label `x` is the anchor named by `h_align`; `y` is the top of the text box.
fn draw_handle_labels(context: &Context, texts: &[TextPrimitive]) -> usize {
    for text in texts {
        let layout = pangocairo::functions::create_layout(context);
        let mut font = FontDescription::new();
        font.set_family(LABEL_FONT_FAMILY);
        font.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&font));
        layout.set_text(&text.text);

        let (text_width, _) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        set_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
    }
    texts.len()
}

fn set_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_error(prefix: &str, err: cairo::Error) -> SliderError {
    SliderError::InvalidData(format!("{prefix}: {err}"))
}
