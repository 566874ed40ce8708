use log::debug;

use super::report;
use crate::config::LandingConfig;
use crate::dom::Node;

/// Slides the navigation drawer in and out from the right edge.
pub struct NavToggle<N: Node> {
    trigger: N,
    panel: N,
    visible: String,
    hidden: String,
    icon_bars: String,
    icon_close: String,
}

impl<N: Node> NavToggle<N> {
    pub fn new(trigger: N, panel: N, config: &LandingConfig) -> Self {
        Self {
            trigger,
            panel,
            visible: config.nav_visible.clone(),
            hidden: config.nav_hidden.clone(),
            icon_bars: config.icon_bars.clone(),
            icon_close: config.icon_close.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        report("reading nav panel position", self.panel.style_property("right"))
            .map(|right| right == self.visible)
            .unwrap_or(false)
    }

    pub fn click(&self) {
        let open = self.is_open();
        let (right, show, hide) = if open {
            (&self.hidden, &self.icon_bars, &self.icon_close)
        } else {
            (&self.visible, &self.icon_close, &self.icon_bars)
        };

        report("moving nav panel", self.panel.set_style_property("right", right));
        report("swapping nav icon", self.trigger.remove_class(hide));
        report("swapping nav icon", self.trigger.add_class(show));
        debug!("navigation {}", if open { "closed" } else { "opened" });
    }
}
