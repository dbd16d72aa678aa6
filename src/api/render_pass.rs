use tracing::debug;

use crate::core::{
    Dataset, SliderGeometry, SliderLayout, SliderRange, Viewport, handle_texts, initial_range,
};
use crate::error::{SliderError, SliderResult};
use crate::extensions::{SliderEvent, SliderLifecycle};
use crate::interaction::{OverlayEventKind, OverlayOptions, RangeOverlay};

use super::{BackgroundChartAdapter, NodeKind, SliderController};

impl SliderController {
    /// Lays out and draws the slider.
    ///
    /// Fails with `AlreadyRendered` when called twice without `clear`, and
    /// with `MissingData`/`MissingAxisField` when the background chart
    /// cannot be built.
    pub fn render(&mut self) -> SliderResult<()> {
        self.ensure_alive()?;
        if self.runtime.lifecycle == SliderLifecycle::Rendered {
            return Err(SliderError::AlreadyRendered);
        }

        let geometry = self
            .runtime
            .compute_geometry(&self.config, self.collaborators.container.as_ref())?;
        self.init_surface(geometry)?;
        self.init_background(geometry)?;
        self.init_overlay(geometry)?;
        self.bind_overlay_events();
        self.flush()?;

        self.runtime.lifecycle = SliderLifecycle::Rendered;
        debug!(
            dom_width = geometry.dom_width,
            plot_width = geometry.plot_width,
            plot_height = geometry.plot_height,
            "slider rendered"
        );
        self.emit_slider_event(SliderEvent::Rendered);
        Ok(())
    }

    /// Drops the background chart, the scale and the overlay.
    ///
    /// Configuration, selection and the drawing surface survive.
    pub fn clear(&mut self) -> SliderResult<()> {
        self.ensure_alive()?;
        self.discard_background();
        self.runtime.scale = None;
        self.runtime.overlay = None;
        self.runtime.range = None;
        if let Some(surface) = self.runtime.surface.as_mut() {
            surface.clear();
            surface.draw()?;
        }
        self.runtime.lifecycle = SliderLifecycle::Cleared;
        debug!("slider cleared");
        self.emit_slider_event(SliderEvent::Cleared);
        Ok(())
    }

    pub fn repaint(&mut self) -> SliderResult<()> {
        self.clear()?;
        self.render()
    }

    /// Replaces the dataset and repaints.
    pub fn change_data(&mut self, data: Dataset) -> SliderResult<()> {
        self.ensure_alive()?;
        let records_len = data.len();
        self.runtime.data = Some(data);
        self.emit_slider_event(SliderEvent::DataChanged { records_len });
        self.repaint()
    }

    /// Tears everything down. The controller is unusable afterwards.
    pub fn destroy(&mut self) -> SliderResult<()> {
        self.ensure_alive()?;
        self.runtime.resize.unlisten();
        if let Some(overlay) = self.runtime.overlay.as_mut() {
            overlay.off(OverlayEventKind::SliderChange);
        }
        self.discard_background();
        if let Some(surface) = self.runtime.surface.as_mut() {
            surface.destroy();
        }
        self.runtime.surface_node = None;
        self.collaborators.container.remove_all_children();
        self.runtime.scale = None;
        self.runtime.range = None;

        self.runtime.lifecycle = SliderLifecycle::Destroyed;
        debug!(container = %self.config.container, "slider destroyed");
        self.emit_slider_event(SliderEvent::Destroyed);
        Ok(())
    }

    /// Reuses the kept surface after `clear`, otherwise creates and mounts one.
    fn init_surface(&mut self, geometry: SliderGeometry) -> SliderResult<()> {
        let viewport = Viewport::new(geometry.dom_width, self.config.height);
        if let Some(surface) = self.runtime.surface.as_mut() {
            surface.change_size(viewport)?;
            surface.clear();
            return Ok(());
        }

        let surface = self.collaborators.surfaces.create_surface(viewport)?;
        let node = self
            .collaborators
            .container
            .append_node(NodeKind::SliderSurface)?;
        self.runtime.surface = Some(surface);
        self.runtime.surface_node = Some(node);
        Ok(())
    }

    fn init_background(&mut self, geometry: SliderGeometry) -> SliderResult<()> {
        self.discard_background();
        let init = BackgroundChartAdapter::init(
            &self.config,
            self.runtime.data.as_ref(),
            geometry,
            self.collaborators.charts.as_mut(),
            self.collaborators.container.as_mut(),
        )?;
        self.runtime.background = init.mounted;
        self.runtime.scale = Some(init.scale);
        Ok(())
    }

    /// Builds a fresh overlay from the scale and the stored selection.
    pub(super) fn init_overlay(&mut self, geometry: SliderGeometry) -> SliderResult<()> {
        let (overlay, range) = self.build_overlay(geometry)?;
        self.runtime.range = Some(range);
        self.runtime.overlay = Some(overlay);
        Ok(())
    }

    /// Overlay and initial range for `geometry`; runtime state is untouched.
    pub(super) fn build_overlay(
        &mut self,
        geometry: SliderGeometry,
    ) -> SliderResult<(Box<dyn RangeOverlay>, SliderRange)> {
        let scale = self.runtime.scale.clone().ok_or(SliderError::NotRendered)?;
        let range = initial_range(scale.as_ref(), &self.runtime.selection)?;
        let (min_text, max_text) = handle_texts(scale.as_ref(), &self.runtime.selection, range)?;

        let mut overlay = self
            .collaborators
            .overlays
            .create_overlay(OverlayOptions {
                range,
                layout: self.config.layout,
                width: geometry.plot_width,
                height: geometry.plot_height,
                style: self.config.overlay_style()?,
                min_text,
                max_text,
            })?;
        match self.config.layout {
            SliderLayout::Horizontal => overlay.translate(geometry.plot_padding, 0.0),
            SliderLayout::Vertical => overlay.translate(0.0, geometry.plot_padding),
        }
        Ok((overlay, range))
    }

    pub(super) fn bind_overlay_events(&mut self) {
        if let Some(overlay) = self.runtime.overlay.as_mut() {
            overlay.on(OverlayEventKind::SliderChange);
        }
    }

    /// Redraws the surface from the current overlay.
    pub(super) fn flush(&mut self) -> SliderResult<()> {
        let Some(surface) = self.runtime.surface.as_mut() else {
            return Ok(());
        };
        surface.clear();
        if let Some(overlay) = self.runtime.overlay.as_ref() {
            surface.add_group(overlay.to_group());
        }
        surface.draw()
    }

    fn discard_background(&mut self) {
        if let Some(mut mounted) = self.runtime.background.take() {
            mounted.chart.destroy();
            self.collaborators.container.remove_node(mounted.node);
        }
    }
}
