use smallvec::SmallVec;
use tracing::trace;

use crate::core::{SliderLayout, SliderRange};
use crate::error::{SliderError, SliderResult};
use crate::render::{PrimitiveGroup, RectPrimitive, TextHAlign, TextPrimitive};

use super::{
    DragTarget, OverlayEvent, OverlayEventKind, OverlayFactory, OverlayOptions, OverlayStyle,
    RangeOverlay,
};

const TEXT_GAP_PX: f64 = 2.0;

/// Default overlay: background track, filler, two handles and their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeElement {
    range: SliderRange,
    layout: SliderLayout,
    width: f64,
    height: f64,
    style: OverlayStyle,
    min_text: String,
    max_text: String,
    dx: f64,
    dy: f64,
    listeners: SmallVec<[OverlayEventKind; 1]>,
}

impl RangeElement {
    pub fn new(options: OverlayOptions) -> SliderResult<Self> {
        if !options.width.is_finite()
            || !options.height.is_finite()
            || options.width < 0.0
            || options.height < 0.0
        {
            return Err(SliderError::InvalidData(format!(
                "overlay size must be finite and >= 0, got {}x{}",
                options.width, options.height
            )));
        }
        Ok(Self {
            range: options.range,
            layout: options.layout,
            width: options.width,
            height: options.height,
            style: options.style,
            min_text: options.min_text,
            max_text: options.max_text,
            dx: 0.0,
            dy: 0.0,
            listeners: SmallVec::new(),
        })
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Length of the main axis in pixels.
    fn span_px(&self) -> f64 {
        match self.layout {
            SliderLayout::Horizontal => self.width,
            SliderLayout::Vertical => self.height,
        }
    }

    /// Pixel offset of `percent` along the main axis.
    #[must_use]
    pub fn offset_of(&self, percent: f64) -> f64 {
        percent / 100.0 * self.span_px()
    }

    fn moved_range(&self, target: DragTarget, delta: f64) -> SliderRange {
        let (min, max) = (self.range.min(), self.range.max());
        let (min, max) = match target {
            DragTarget::MinHandle => ((min + delta).clamp(0.0, max), max),
            DragTarget::MaxHandle => (min, (max + delta).clamp(min, 100.0)),
            DragTarget::Filler => {
                let shift = delta.clamp(-min, 100.0 - max);
                ((min + shift).max(0.0), (max + shift).min(100.0))
            }
        };
        SliderRange::new(min, max).unwrap_or(self.range)
    }

    fn push_texts(&self, group: &mut PrimitiveGroup, min_px: f64, max_px: f64) {
        let font = self.style.font_size_px;
        let color = self.style.text_color;
        let half_handle = self.style.handle_width / 2.0;
        let labels = match self.layout {
            SliderLayout::Horizontal => {
                let y = self.height / 2.0 - font / 2.0;
                [
                    (
                        &self.min_text,
                        min_px - half_handle - TEXT_GAP_PX,
                        y,
                        TextHAlign::Right,
                    ),
                    (
                        &self.max_text,
                        max_px + half_handle + TEXT_GAP_PX,
                        y,
                        TextHAlign::Left,
                    ),
                ]
            }
            SliderLayout::Vertical => {
                let x = self.width / 2.0;
                let half_handle = self.style.handle_height / 2.0;
                [
                    (
                        &self.min_text,
                        x,
                        min_px - half_handle - TEXT_GAP_PX - font,
                        TextHAlign::Center,
                    ),
                    (
                        &self.max_text,
                        x,
                        max_px + half_handle + TEXT_GAP_PX,
                        TextHAlign::Center,
                    ),
                ]
            }
        };

        for (text, x, y, align) in labels {
            if text.is_empty() {
                continue;
            }
            group
                .texts
                .push(TextPrimitive::new(text.as_str(), x, y, font, color, align));
        }
    }
}

impl RangeOverlay for RangeElement {
    fn range(&self) -> SliderRange {
        self.range
    }

    fn layout(&self) -> SliderLayout {
        self.layout
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.dx += dx;
        self.dy += dy;
    }

    fn translation(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    fn set_display_text(&mut self, min_text: &str, max_text: &str) {
        min_text.clone_into(&mut self.min_text);
        max_text.clone_into(&mut self.max_text);
    }

    fn display_text(&self) -> (String, String) {
        (self.min_text.clone(), self.max_text.clone())
    }

    fn on(&mut self, kind: OverlayEventKind) {
        if !self.listeners.contains(&kind) {
            self.listeners.push(kind);
        }
    }

    fn off(&mut self, kind: OverlayEventKind) {
        self.listeners.retain(|listener| *listener != kind);
    }

    fn is_listening(&self, kind: OverlayEventKind) -> bool {
        self.listeners.contains(&kind)
    }

    fn drag(&mut self, target: DragTarget, delta_percent: f64) -> Option<OverlayEvent> {
        if !delta_percent.is_finite() {
            return None;
        }
        let next = self.moved_range(target, delta_percent);
        if next == self.range {
            return None;
        }
        self.range = next;
        trace!(?target, min = next.min(), max = next.max(), "overlay drag");

        let event = OverlayEvent::SliderChange { range: next };
        self.is_listening(event.kind()).then_some(event)
    }

    fn to_group(&self) -> PrimitiveGroup {
        let mut group = PrimitiveGroup::new("range");
        let style = &self.style;
        let min_px = self.offset_of(self.range.min());
        let max_px = self.offset_of(self.range.max());

        group.rects.push(
            RectPrimitive::new(0.0, 0.0, self.width, self.height, style.background_fill)
                .with_border(style.background_line_width, style.background_stroke),
        );

        let (handle_w, handle_h) = (style.handle_width, style.handle_height);
        match self.layout {
            SliderLayout::Horizontal => {
                group.rects.push(RectPrimitive::new(
                    min_px,
                    0.0,
                    max_px - min_px,
                    self.height,
                    style.filler_color,
                ));
                let top = (self.height - handle_h) / 2.0;
                for center in [min_px, max_px] {
                    group.rects.push(RectPrimitive::new(
                        center - handle_w / 2.0,
                        top,
                        handle_w,
                        handle_h,
                        style.handle_color,
                    ));
                }
            }
            SliderLayout::Vertical => {
                group.rects.push(RectPrimitive::new(
                    0.0,
                    min_px,
                    self.width,
                    max_px - min_px,
                    style.filler_color,
                ));
                let left = (self.width - handle_w) / 2.0;
                for center in [min_px, max_px] {
                    group.rects.push(RectPrimitive::new(
                        left,
                        center - handle_h / 2.0,
                        handle_w,
                        handle_h,
                        style.handle_color,
                    ));
                }
            }
        }

        self.push_texts(&mut group, min_px, max_px);
        group.translate(self.dx, self.dy);
        group
    }
}

/// Factory for the default `RangeElement` overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeElementFactory;

impl OverlayFactory for RangeElementFactory {
    fn create_overlay(&mut self, options: OverlayOptions) -> SliderResult<Box<dyn RangeOverlay>> {
        Ok(Box::new(RangeElement::new(options)?))
    }
}
