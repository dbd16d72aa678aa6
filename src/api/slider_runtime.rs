use std::rc::Rc;

use crate::core::{
    Dataset, DomainValue, Scale, Selection, SliderGeometry, SliderRange, compute_geometry,
};
use crate::error::SliderResult;
use crate::extensions::{SliderLifecycle, SliderPlugin};
use crate::interaction::RangeOverlay;
use crate::render::DrawingSurface;

use super::background_adapter::MountedBackground;
use super::{Container, NodeId, ResizeDebouncer, SliderConfig};

pub(super) type ChangeCallback = Box<dyn FnMut(&str, &str)>;

/// Mutable state of one slider, changed only through the transitions below
/// and the controller passes.
pub(super) struct SliderRuntime {
    pub(super) lifecycle: SliderLifecycle,
    pub(super) data: Option<Dataset>,
    pub(super) selection: Selection,
    pub(super) geometry: Option<SliderGeometry>,
    pub(super) scale: Option<Rc<dyn Scale>>,
    pub(super) range: Option<SliderRange>,
    pub(super) surface: Option<Box<dyn DrawingSurface>>,
    pub(super) surface_node: Option<NodeId>,
    pub(super) background: Option<MountedBackground>,
    pub(super) overlay: Option<Box<dyn RangeOverlay>>,
    pub(super) resize: ResizeDebouncer,
    pub(super) on_change: Option<ChangeCallback>,
    pub(super) plugins: Vec<Box<dyn SliderPlugin>>,
}

impl SliderRuntime {
    pub(super) fn new(data: Option<Dataset>, selection: Selection) -> Self {
        Self {
            lifecycle: SliderLifecycle::Constructed,
            data,
            selection,
            geometry: None,
            scale: None,
            range: None,
            surface: None,
            surface_node: None,
            background: None,
            overlay: None,
            resize: ResizeDebouncer::default(),
            on_change: None,
            plugins: Vec::new(),
        }
    }

    /// Resolves and stores the geometry for the next layout pass.
    pub(super) fn compute_geometry(
        &mut self,
        config: &SliderConfig,
        container: &dyn Container,
    ) -> SliderResult<SliderGeometry> {
        let geometry = Self::resolve_geometry(config, container)?;
        self.geometry = Some(geometry);
        Ok(geometry)
    }

    /// Geometry for the current container width, without storing it.
    pub(super) fn resolve_geometry(
        config: &SliderConfig,
        container: &dyn Container,
    ) -> SliderResult<SliderGeometry> {
        compute_geometry(
            config.layout,
            config.width,
            || container.measure_width(),
            config.height,
            config.padding,
        )
    }

    /// Records an overlay change: the new range plus the formatted bounds.
    pub(super) fn apply_selection(&mut self, range: SliderRange, start: &str, end: &str) {
        self.range = Some(range);
        self.selection = Selection::new(
            Some(DomainValue::Text(start.to_owned())),
            Some(DomainValue::Text(end.to_owned())),
        );
    }

    pub(super) fn records_len(&self) -> usize {
        self.data.as_ref().map_or(0, Dataset::len)
    }
}
