use log::debug;

use super::report;
use crate::config::LandingConfig;
use crate::dom::{Node, Viewport};

/// "Back to top" button shown once the page is scrolled far enough.
pub struct ScrollToTop<N: Node, V: Viewport> {
    button: N,
    viewport: V,
    threshold: f64,
}

impl<N: Node, V: Viewport> ScrollToTop<N, V> {
    pub fn new(button: N, viewport: V, config: &LandingConfig) -> Self {
        Self {
            button,
            viewport,
            threshold: config.scroll_top_threshold,
        }
    }

    pub fn scroll(&self, offset: f64) {
        let display = if offset > self.threshold { "block" } else { "none" };
        report("showing back-to-top button", self.button.set_style_property("display", display));
    }

    pub fn click(&self) {
        self.viewport.scroll_to(0.0, 0.0);
        debug!("scrolled back to top");
    }
}
