use log::debug;

use super::report;
use crate::config::LandingConfig;
use crate::dom::Node;

/// Expands the text box and flips the plus icon together.
pub struct PanelToggle<N: Node> {
    trigger: N,
    panel: N,
    panel_class: String,
    trigger_class: String,
}

impl<N: Node> PanelToggle<N> {
    pub fn new(trigger: N, panel: N, config: &LandingConfig) -> Self {
        Self {
            trigger,
            panel,
            panel_class: config.active_class.clone(),
            trigger_class: config.icon_active_class.clone(),
        }
    }

    pub fn click(&self) {
        let open = report("toggling text panel", self.panel.toggle_class(&self.panel_class));
        report("toggling panel icon", self.trigger.toggle_class(&self.trigger_class));
        if let Some(open) = open {
            debug!("text panel open: {}", open);
        }
    }
}
