use log::debug;

use super::report;
use crate::config::LandingConfig;
use crate::dom::Node;

/// Highlights the header once the page leaves the top.
pub struct HeaderScrollStyler<N: Node> {
    header: N,
    logo: N,
    active_class: String,
    logo_src: String,
    threshold: f64,
}

impl<N: Node> HeaderScrollStyler<N> {
    pub fn new(header: N, logo: N, config: &LandingConfig) -> Self {
        Self {
            header,
            logo,
            active_class: config.active_class.clone(),
            logo_src: config.logo_src.clone(),
            threshold: config.header_threshold,
        }
    }

    pub fn scroll(&self, offset: f64) {
        let was_active = self.header.has_class(&self.active_class);
        let active = offset > self.threshold;
        if active {
            report("activating header", self.header.add_class(&self.active_class));
        } else {
            report("deactivating header", self.header.remove_class(&self.active_class));
        }
        // Same image in both states.
        report("setting logo", self.logo.set_attribute("src", &self.logo_src));

        if active != was_active {
            debug!("header active: {}", active);
        }
    }
}
