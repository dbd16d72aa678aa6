use crate::extensions::{PluginContext, SliderEvent};

use super::SliderController;

impl SliderController {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            layout: self.config.layout,
            lifecycle: self.runtime.lifecycle,
            geometry: self.runtime.geometry,
            range: self.runtime.range,
            records_len: self.runtime.records_len(),
        }
    }

    pub(super) fn emit_slider_event(&mut self, event: SliderEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.runtime.plugins {
            plugin.on_event(&event, context);
        }
    }
}
