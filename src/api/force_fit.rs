use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::Viewport;
use crate::error::SliderResult;
use crate::extensions::{SliderEvent, SliderLifecycle};

use super::SliderController;
use super::slider_runtime::SliderRuntime;

impl SliderController {
    /// Re-fits the slider to the container width.
    ///
    /// Returns `false` without touching anything when the resolved width is
    /// unchanged or the slider is not rendered. On error the previous layout
    /// stays committed. Only the width of the background chart changes; it
    /// is never rebuilt here.
    pub fn force_fit(&mut self) -> SliderResult<bool> {
        self.ensure_alive()?;
        if self.runtime.lifecycle != SliderLifecycle::Rendered {
            debug!(lifecycle = ?self.runtime.lifecycle, "force fit skipped, slider not rendered");
            return Ok(false);
        }

        let geometry =
            SliderRuntime::resolve_geometry(&self.config, self.collaborators.container.as_ref())?;
        if self.dom_width() == Some(geometry.dom_width) {
            trace!(width = geometry.dom_width, "force fit skipped, width unchanged");
            return Ok(false);
        }

        // Nothing is committed before the new width has been accepted.
        let (overlay, range) = self.build_overlay(geometry)?;
        if let Some(surface) = self.runtime.surface.as_mut() {
            surface.change_size(Viewport::new(geometry.dom_width, self.config.height))?;
        }
        if let Some(mounted) = self.runtime.background.as_mut() {
            mounted.chart.change_width(geometry.dom_width)?;
        }

        self.runtime.geometry = Some(geometry);
        self.runtime.range = Some(range);
        self.runtime.overlay = Some(overlay);
        self.bind_overlay_events();
        self.flush()?;

        debug!(dom_width = geometry.dom_width, "slider re-fitted");
        self.emit_slider_event(SliderEvent::ForceFitted {
            dom_width: geometry.dom_width,
        });
        Ok(true)
    }

    /// Records a window resize at `now`; the re-fit runs from `poll_timers`.
    ///
    /// Returns `true` when a re-fit was scheduled.
    pub fn window_resized(&mut self, now: Instant) -> bool {
        if self.runtime.lifecycle == SliderLifecycle::Destroyed {
            warn!("resize event after destroy ignored");
            return false;
        }
        self.runtime.resize.schedule(now)
    }

    /// Runs the debounced re-fit when its deadline passed at `now`.
    ///
    /// Returns whether a re-fit changed the layout.
    pub fn poll_timers(&mut self, now: Instant) -> SliderResult<bool> {
        if !self.runtime.resize.take_due(now) {
            return Ok(false);
        }
        self.force_fit()
    }
}
