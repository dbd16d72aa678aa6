//! Optional hooks for hosts that follow the slider selection.

pub mod plugins;

pub use plugins::{PluginContext, SliderEvent, SliderLifecycle, SliderPlugin};
