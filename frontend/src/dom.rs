//! Host capabilities the controllers rely on.
//!
//! The browser implementations live in `web`; `fake` provides in-memory
//! versions for unit tests.

use crate::error::HostError;

/// Inline style, class list and attribute access on one element.
pub trait Node {
    fn style_property(&self, name: &str) -> Result<String, HostError>;
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), HostError>;
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<(), HostError>;
    fn remove_class(&self, class: &str) -> Result<(), HostError>;
    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, class: &str) -> Result<bool, HostError>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError>;
}

/// Playback control of a media element.
pub trait Media {
    fn paused(&self) -> bool;
    fn play(&self) -> Result<(), HostError>;
    fn pause(&self) -> Result<(), HostError>;
}

pub trait Viewport {
    fn scroll_y(&self) -> Result<f64, HostError>;
    fn scroll_to(&self, x: f64, y: f64);
}

/// An event whose default action can be suppressed.
pub trait Cancelable {
    fn prevent_default(&self);
}
