use std::rc::Rc;

use tracing::debug;

use crate::core::{Dataset, Scale, Selection, SliderGeometry, SliderLayout, SliderRange};
use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderLifecycle;
use crate::interaction::RangeOverlay;
use crate::render::DrawingSurface;

use super::validation::validate_slider_config;
use super::{
    BackgroundChart, Container, ResolvedHandleStyle, SliderCollaborators, SliderConfig,
    slider_runtime::SliderRuntime,
};

/// Range slider ("data zoom") bound to one container.
///
/// `SliderController` owns the immutable configuration, the injected host
/// collaborators, and the runtime state they produce: surface, background
/// chart, scale, overlay and the resize debounce timer.
pub struct SliderController {
    pub(super) config: SliderConfig,
    pub(super) collaborators: SliderCollaborators,
    pub(super) runtime: SliderRuntime,
}

impl SliderController {
    /// Validates and stores the configuration.
    ///
    /// The container is not touched until `render`. Auto-width sliders start
    /// listening for window resizes right away.
    pub fn new(config: SliderConfig, collaborators: SliderCollaborators) -> SliderResult<Self> {
        validate_slider_config(&config)?;
        let mut config = config;
        let data = config.data.take();
        let selection = Selection::new(config.start.clone(), config.end.clone());

        let mut runtime = SliderRuntime::new(data, selection);
        if config.width.is_auto() {
            runtime.resize.listen();
        }
        debug!(
            container = %config.container,
            layout = ?config.layout,
            auto_width = config.width.is_auto(),
            "slider constructed"
        );
        Ok(Self {
            config,
            collaborators,
            runtime,
        })
    }

    /// Configuration as constructed; the dataset lives in `data()`.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> SliderLayout {
        self.config.layout
    }

    #[must_use]
    pub fn lifecycle(&self) -> SliderLifecycle {
        self.runtime.lifecycle
    }

    #[must_use]
    pub fn data(&self) -> Option<&Dataset> {
        self.runtime.data.as_ref()
    }

    /// Current `start`/`end`; formatted texts once the user changed the range.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.runtime.selection
    }

    #[must_use]
    pub fn geometry(&self) -> Option<SliderGeometry> {
        self.runtime.geometry
    }

    #[must_use]
    pub fn dom_width(&self) -> Option<u32> {
        self.runtime.geometry.map(|geometry| geometry.dom_width)
    }

    /// Overlay range in percent.
    #[must_use]
    pub fn range(&self) -> Option<SliderRange> {
        self.runtime.range
    }

    #[must_use]
    pub fn scale(&self) -> Option<Rc<dyn Scale>> {
        self.runtime.scale.clone()
    }

    #[must_use]
    pub fn handle_style(&self) -> ResolvedHandleStyle {
        self.config.handle_style.resolve(self.config.height)
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&dyn RangeOverlay> {
        self.runtime.overlay.as_deref()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&dyn DrawingSurface> {
        self.runtime.surface.as_deref()
    }

    #[must_use]
    pub fn background_chart(&self) -> Option<&dyn BackgroundChart> {
        self.runtime
            .background
            .as_ref()
            .map(|mounted| mounted.chart.as_ref())
    }

    #[must_use]
    pub fn container(&self) -> &dyn Container {
        self.collaborators.container.as_ref()
    }

    #[must_use]
    pub fn is_listening_for_resize(&self) -> bool {
        self.runtime.resize.is_listening()
    }

    #[must_use]
    pub fn has_pending_force_fit(&self) -> bool {
        self.runtime.resize.pending().is_some()
    }

    /// Sets the callback invoked with `(start_text, end_text)` on every change.
    pub fn set_on_change(&mut self, callback: impl FnMut(&str, &str) + 'static) {
        self.runtime.on_change = Some(Box::new(callback));
    }

    pub fn clear_on_change(&mut self) {
        self.runtime.on_change = None;
    }

    pub(super) fn ensure_alive(&self) -> SliderResult<()> {
        if self.runtime.lifecycle == SliderLifecycle::Destroyed {
            return Err(SliderError::Destroyed);
        }
        Ok(())
    }
}
