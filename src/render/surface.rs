use tracing::trace;

use crate::core::Viewport;
use crate::error::{SliderError, SliderResult};
use crate::render::{PrimitiveGroup, RenderFrame, Renderer};

/// Retained drawing surface the slider overlay is added to.
///
/// Mirrors a host canvas: sized creation, resize, group addition, clear,
/// explicit flush and terminal destroy.
pub trait DrawingSurface {
    fn viewport(&self) -> Viewport;

    fn change_size(&mut self, viewport: Viewport) -> SliderResult<()>;

    fn add_group(&mut self, group: PrimitiveGroup);

    fn groups(&self) -> &[PrimitiveGroup];

    /// Drops every group; the surface stays usable.
    fn clear(&mut self);

    /// Flushes the current groups to the backend.
    fn draw(&mut self) -> SliderResult<()>;

    fn destroy(&mut self);

    fn is_destroyed(&self) -> bool;

    /// Frame produced by the latest `draw`.
    fn last_frame(&self) -> Option<&RenderFrame>;

    fn draw_count(&self) -> usize;
}

/// Creates drawing surfaces for a slider.
pub trait SurfaceFactory {
    fn create_surface(&mut self, viewport: Viewport) -> SliderResult<Box<dyn DrawingSurface>>;
}

/// Surface that composes its groups into a `RenderFrame` for a `Renderer`.
#[derive(Debug)]
pub struct FrameSurface<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    groups: Vec<PrimitiveGroup>,
    last_frame: Option<RenderFrame>,
    draw_count: usize,
    destroyed: bool,
}

impl<R: Renderer> FrameSurface<R> {
    pub fn new(renderer: R, viewport: Viewport) -> SliderResult<Self> {
        validate_viewport(viewport)?;
        Ok(Self {
            renderer,
            viewport,
            groups: Vec::new(),
            last_frame: None,
            draw_count: 0,
            destroyed: false,
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn compose(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for group in &self.groups {
            frame.push_group(group);
        }
        frame
    }
}

impl<R: Renderer> DrawingSurface for FrameSurface<R> {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn change_size(&mut self, viewport: Viewport) -> SliderResult<()> {
        if self.destroyed {
            return Err(SliderError::Destroyed);
        }
        validate_viewport(viewport)?;
        self.viewport = viewport;
        Ok(())
    }

    fn add_group(&mut self, group: PrimitiveGroup) {
        self.groups.push(group);
    }

    fn groups(&self) -> &[PrimitiveGroup] {
        &self.groups
    }

    fn clear(&mut self) {
        self.groups.clear();
    }

    fn draw(&mut self) -> SliderResult<()> {
        if self.destroyed {
            return Err(SliderError::Destroyed);
        }
        let frame = self.compose();
        self.renderer.render(&frame)?;
        self.draw_count += 1;
        trace!(
            groups = self.groups.len(),
            draw_count = self.draw_count,
            "surface draw"
        );
        self.last_frame = Some(frame);
        Ok(())
    }

    fn destroy(&mut self) {
        self.groups.clear();
        self.last_frame = None;
        self.destroyed = true;
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    fn draw_count(&self) -> usize {
        self.draw_count
    }
}

/// Factory creating a `FrameSurface` around a freshly built renderer.
pub struct FrameSurfaceFactory<F> {
    make_renderer: F,
}

impl<F> FrameSurfaceFactory<F> {
    #[must_use]
    pub fn new(make_renderer: F) -> Self {
        Self { make_renderer }
    }
}

impl<F, R> SurfaceFactory for FrameSurfaceFactory<F>
where
    F: FnMut() -> R,
    R: Renderer + 'static,
{
    fn create_surface(&mut self, viewport: Viewport) -> SliderResult<Box<dyn DrawingSurface>> {
        let renderer = (self.make_renderer)();
        Ok(Box::new(FrameSurface::new(renderer, viewport)?))
    }
}

fn validate_viewport(viewport: Viewport) -> SliderResult<()> {
    if !viewport.is_valid() {
        return Err(SliderError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
