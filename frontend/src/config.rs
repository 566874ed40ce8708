use log::Level;
use serde::Deserialize;

use crate::error::SetupError;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Selectors, class names and thresholds used by the controllers.
///
/// Every field has a default matching the shipped landing page, so an
/// override document only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub nav_trigger: String,
    pub nav_panel: String,
    pub header: String,
    pub logo: String,
    pub panel_trigger: String,
    pub text_panel: String,
    pub video_link: String,
    pub video_overlay: String,
    pub video_exit: String,
    pub video_player: String,
    pub video: String,
    pub scroll_top: String,

    pub nav_visible: String,
    pub nav_hidden: String,
    pub icon_bars: String,
    pub icon_close: String,
    pub logo_src: String,
    pub active_class: String,
    pub icon_active_class: String,
    pub header_threshold: f64,
    pub scroll_top_threshold: f64,
    /// Shown on the player control while the video is paused.
    pub play_icon: Option<String>,
    /// Shown on the player control while the video is playing.
    pub pause_icon: Option<String>,
    pub sync_on_install: bool,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            nav_trigger: "#bar".to_string(),
            nav_panel: ".navigation".to_string(),
            header: "#header".to_string(),
            logo: "#lamp".to_string(),
            panel_trigger: ".plus".to_string(),
            text_panel: ".text-box".to_string(),
            video_link: ".link_a".to_string(),
            video_overlay: ".bg-show .over".to_string(),
            video_exit: ".cancel".to_string(),
            video_player: ".player".to_string(),
            video: "#video".to_string(),
            scroll_top: ".top".to_string(),

            nav_visible: "0%".to_string(),
            nav_hidden: "-50%".to_string(),
            icon_bars: "fa-bars".to_string(),
            icon_close: "fa-xmark".to_string(),
            logo_src: "logo2.png".to_string(),
            active_class: "active".to_string(),
            icon_active_class: "img_active".to_string(),
            header_threshold: 0.0,
            scroll_top_threshold: 100.0,
            play_icon: None,
            pause_icon: None,
            sync_on_install: false,
        }
    }
}

impl LandingConfig {
    pub fn from_json(text: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(text)?)
    }
}
