use serde::{Deserialize, Serialize};

use crate::core::{DomainValue, SliderGeometry, SliderLayout, SliderRange};
use crate::extensions::SliderLifecycle;

use super::SliderController;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub container: String,
    pub layout: SliderLayout,
    pub lifecycle: SliderLifecycle,
    pub geometry: Option<SliderGeometry>,
    pub range: Option<SliderRange>,
    pub start: Option<DomainValue>,
    pub end: Option<DomainValue>,
    /// Min/max handle text as shown by the overlay.
    pub display_text: Option<(String, String)>,
    pub surface_mounted: bool,
    pub background_mounted: bool,
    pub listening_for_resize: bool,
    pub pending_force_fit: bool,
    pub records_len: usize,
}

impl SliderController {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            container: self.config.container.clone(),
            layout: self.config.layout,
            lifecycle: self.runtime.lifecycle,
            geometry: self.runtime.geometry,
            range: self.runtime.range,
            start: self.runtime.selection.start.clone(),
            end: self.runtime.selection.end.clone(),
            display_text: self
                .runtime
                .overlay
                .as_ref()
                .map(|overlay| overlay.display_text()),
            surface_mounted: self.runtime.surface_node.is_some(),
            background_mounted: self.runtime.background.is_some(),
            listening_for_resize: self.runtime.resize.is_listening(),
            pending_force_fit: self.runtime.resize.pending().is_some(),
            records_len: self.runtime.records_len(),
        }
    }
}
