pub mod header;
pub mod nav_toggle;
pub mod panel_toggle;
pub mod scroll_top;
pub mod video_overlay;

use log::warn;

use crate::dom::Viewport;
use crate::error::HostError;

pub use header::HeaderScrollStyler;
pub use nav_toggle::NavToggle;
pub use panel_toggle::PanelToggle;
pub use scroll_top::ScrollToTop;
pub use video_overlay::VideoOverlay;

/// Logs a failed host call and lets the handler carry on.
pub(crate) fn report<T>(what: &str, result: Result<T, HostError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{}: {}", what, e);
            None
        }
    }
}

/// Vertical scroll offset, treating an unreadable offset as the top.
pub fn scroll_offset<V: Viewport>(viewport: &V) -> f64 {
    report("reading scroll offset", viewport.scroll_y()).unwrap_or(0.0)
}
