use tracing::trace;

use crate::core::{SliderRange, range_texts};
use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderEvent;
use crate::interaction::{DragTarget, OverlayEvent};

use super::SliderController;

impl SliderController {
    /// Drags part of the overlay by `delta_percent` of the slider span.
    ///
    /// Returns `true` when the drag produced a delivered change.
    pub fn drag(&mut self, target: DragTarget, delta_percent: f64) -> SliderResult<bool> {
        self.ensure_alive()?;
        let overlay = self
            .runtime
            .overlay
            .as_mut()
            .ok_or(SliderError::NotRendered)?;
        match overlay.drag(target, delta_percent) {
            Some(event) => self.deliver_overlay_event(event),
            None => {
                self.flush()?;
                Ok(false)
            }
        }
    }

    /// Entry point for events raised by a host-driven overlay.
    ///
    /// Events are dropped while no overlay listens for them.
    pub fn deliver_overlay_event(&mut self, event: OverlayEvent) -> SliderResult<bool> {
        self.ensure_alive()?;
        let listening = self
            .runtime
            .overlay
            .as_ref()
            .is_some_and(|overlay| overlay.is_listening(event.kind()));
        if !listening {
            trace!(kind = ?event.kind(), "overlay event dropped, no listener");
            return Ok(false);
        }

        match event {
            OverlayEvent::SliderChange { range } => self.on_slider_change(range)?,
        }
        Ok(true)
    }

    fn on_slider_change(&mut self, range: SliderRange) -> SliderResult<()> {
        let scale = self.runtime.scale.clone().ok_or(SliderError::NotRendered)?;
        let (start_text, end_text) = range_texts(scale.as_ref(), range)?;

        if let Some(overlay) = self.runtime.overlay.as_mut() {
            overlay.set_display_text(&start_text, &end_text);
        }
        self.runtime.apply_selection(range, &start_text, &end_text);
        self.flush()?;

        trace!(
            min = range.min(),
            max = range.max(),
            start = %start_text,
            end = %end_text,
            "slider change"
        );
        if let Some(on_change) = self.runtime.on_change.as_mut() {
            on_change(&start_text, &end_text);
        }
        self.emit_slider_event(SliderEvent::SelectionChanged {
            range,
            start_text,
            end_text,
        });
        Ok(())
    }
}
