mod frame;
mod group;
mod null_renderer;
mod primitives;
mod surface;

pub use frame::RenderFrame;
pub use group::PrimitiveGroup;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use surface::{DrawingSurface, FrameSurface, FrameSurfaceFactory, SurfaceFactory};

use crate::error::SliderResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from slider and scale logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SliderResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
