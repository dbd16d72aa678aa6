use serde::{Deserialize, Serialize};

use crate::core::{SliderGeometry, SliderLayout, SliderRange};

/// Lifecycle phase of a slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderLifecycle {
    Constructed,
    Rendered,
    Cleared,
    Destroyed,
}

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub layout: SliderLayout,
    pub lifecycle: SliderLifecycle,
    pub geometry: Option<SliderGeometry>,
    pub range: Option<SliderRange>,
    pub records_len: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    Rendered,
    Cleared,
    DataChanged {
        records_len: usize,
    },
    ForceFitted {
        dom_width: u32,
    },
    SelectionChanged {
        range: SliderRange,
        start_text: String,
        end_text: String,
    },
    Destroyed,
}

/// Extension hook interface for host charts following the slider.
///
/// Plugins observe events and read slider context without mutating slider
/// internals directly.
pub trait SliderPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &SliderEvent, context: PluginContext);
}
