use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderPlugin;

use super::SliderController;

impl SliderController {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn SliderPlugin>) -> SliderResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(SliderError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(SliderError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .runtime
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.runtime.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.runtime
            .plugins
            .iter()
            .any(|plugin| plugin.id() == plugin_id)
    }
}
