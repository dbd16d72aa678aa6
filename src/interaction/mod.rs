//! Range overlay contract and the default overlay model.
//!
//! The overlay owns the two handles and the filler between them. Gesture
//! recognition stays with the host: it translates pointer input into `drag`
//! calls and forwards the resulting events to the slider.

mod range_element;

use serde::{Deserialize, Serialize};

use crate::core::{SliderLayout, SliderRange};
use crate::error::SliderResult;
use crate::render::{Color, PrimitiveGroup};

pub use range_element::{RangeElement, RangeElementFactory};

/// Event names an overlay can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayEventKind {
    #[serde(rename = "sliderchange")]
    SliderChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OverlayEvent {
    /// The user moved a handle or the filler; `range` is in percent.
    SliderChange { range: SliderRange },
}

impl OverlayEvent {
    #[must_use]
    pub fn kind(self) -> OverlayEventKind {
        match self {
            Self::SliderChange { .. } => OverlayEventKind::SliderChange,
        }
    }
}

/// Part of the overlay a drag acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    MinHandle,
    MaxHandle,
    Filler,
}

/// Resolved colors and sizes for every overlay part.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub filler_color: Color,
    pub background_fill: Color,
    pub background_stroke: Color,
    pub background_line_width: f64,
    pub text_color: Color,
    pub font_size_px: f64,
    pub handle_width: f64,
    pub handle_height: f64,
    pub handle_color: Color,
    pub handle_image: Option<String>,
}

/// Everything an overlay needs at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayOptions {
    pub range: SliderRange,
    pub layout: SliderLayout,
    pub width: f64,
    pub height: f64,
    pub style: OverlayStyle,
    pub min_text: String,
    pub max_text: String,
}

/// Interactive selection component drawn on the slider surface.
pub trait RangeOverlay {
    fn range(&self) -> SliderRange;

    fn layout(&self) -> SliderLayout;

    /// Offsets the overlay along both axes; offsets accumulate.
    fn translate(&mut self, dx: f64, dy: f64);

    fn translation(&self) -> (f64, f64);

    /// Replaces the text shown next to the min and max handles.
    fn set_display_text(&mut self, min_text: &str, max_text: &str);

    fn display_text(&self) -> (String, String);

    fn on(&mut self, kind: OverlayEventKind);

    fn off(&mut self, kind: OverlayEventKind);

    fn is_listening(&self, kind: OverlayEventKind) -> bool;

    /// Moves `target` by `delta_percent` of the span.
    ///
    /// Returns the change event when the range moved and a listener is bound.
    fn drag(&mut self, target: DragTarget, delta_percent: f64) -> Option<OverlayEvent>;

    /// Primitives for the current state, translation included.
    fn to_group(&self) -> PrimitiveGroup;
}

/// Builds overlays for each layout pass.
pub trait OverlayFactory {
    fn create_overlay(&mut self, options: OverlayOptions) -> SliderResult<Box<dyn RangeOverlay>>;
}
