use log::debug;

use super::report;
use crate::config::LandingConfig;
use crate::dom::{Cancelable, Media, Node};

/// Modal video: opened from a link, closed from the exit control, with a
/// play/pause control inside.
pub struct VideoOverlay<N: Node, M: Media> {
    overlay: N,
    player: N,
    video: M,
    play_icon: Option<String>,
    pause_icon: Option<String>,
}

impl<N: Node, M: Media> VideoOverlay<N, M> {
    pub fn new(overlay: N, player: N, video: M, config: &LandingConfig) -> Self {
        Self {
            overlay,
            player,
            video,
            play_icon: config.play_icon.clone(),
            pause_icon: config.pause_icon.clone(),
        }
    }

    pub fn open(&self, event: &impl Cancelable) {
        event.prevent_default();
        report("showing overlay", self.overlay.set_style_property("display", "block"));
        debug!("video overlay opened");
    }

    pub fn close(&self) {
        report("hiding overlay", self.overlay.set_style_property("display", "none"));
        debug!("video overlay closed");
    }

    pub fn toggle_playback(&self) {
        let icon = if self.video.paused() {
            report("starting video", self.video.play());
            &self.pause_icon
        } else {
            report("pausing video", self.video.pause());
            &self.play_icon
        };
        if let Some(src) = icon {
            report("swapping player icon", self.player.set_attribute("src", src));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeEvent, FakeMedia, FakeNode};

    fn setup(config: &LandingConfig) -> (VideoOverlay<FakeNode, FakeMedia>, FakeNode, FakeNode, FakeMedia) {
        let overlay = FakeNode::default();
        let player = FakeNode::default();
        let video = FakeMedia::new();
        let controller = VideoOverlay::new(overlay.clone(), player.clone(), video.clone(), config);
        (controller, overlay, player, video)
    }

    #[test]
    fn link_click_shows_overlay_without_navigating() {
        let (controller, overlay, _, _) = setup(&LandingConfig::default());
        let event = FakeEvent::default();

        controller.open(&event);

        assert!(event.prevented.get());
        assert_eq!(overlay.style("display"), "block");
    }

    #[test]
    fn exit_always_hides() {
        let (controller, overlay, _, _) = setup(&LandingConfig::default());
        controller.close();
        assert_eq!(overlay.style("display"), "none");

        controller.open(&FakeEvent::default());
        controller.close();
        controller.close();
        assert_eq!(overlay.style("display"), "none");
    }

    #[test]
    fn player_alternates_play_and_pause() {
        let (controller, _, _, video) = setup(&LandingConfig::default());
        assert!(video.paused());

        for round in 1..=6 {
            controller.toggle_playback();
            assert_eq!(video.paused(), round % 2 == 0, "round {}", round);
        }
        assert_eq!(video.plays.get(), 3);
    }

    #[test]
    fn player_icon_untouched_without_configured_icons() {
        let (controller, _, player, _) = setup(&LandingConfig::default());
        controller.toggle_playback();
        assert_eq!(player.attribute("src"), None);
    }

    #[test]
    fn player_icon_follows_playback_when_configured() {
        let config = LandingConfig {
            play_icon: Some("play.svg".to_string()),
            pause_icon: Some("pause.svg".to_string()),
            ..LandingConfig::default()
        };
        let (controller, _, player, _) = setup(&config);

        controller.toggle_playback();
        assert_eq!(player.attribute("src").as_deref(), Some("pause.svg"));
        controller.toggle_playback();
        assert_eq!(player.attribute("src").as_deref(), Some("play.svg"));
    }
}
