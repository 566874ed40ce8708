//! Browser bindings: `web-sys` implementations of the host traits, element
//! lookup and listener installation.

use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::Promise;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlMediaElement, Window};

use crate::config::{LandingConfig, CONFIG_ELEMENT_ID};
use crate::controllers::{
    scroll_offset, HeaderScrollStyler, NavToggle, PanelToggle, ScrollToTop, VideoOverlay,
};
use crate::dom::{Cancelable, Media, Node, Viewport};
use crate::error::{describe, HostError, SetupError};

impl Node for HtmlElement {
    fn style_property(&self, name: &str) -> Result<String, HostError> {
        Ok(HtmlElement::style(self).get_property_value(name)?)
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), HostError> {
        Ok(HtmlElement::style(self).set_property(name, value)?)
    }

    fn has_class(&self, class: &str) -> bool {
        Element::class_list(self).contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), HostError> {
        Ok(Element::class_list(self).add_1(class)?)
    }

    fn remove_class(&self, class: &str) -> Result<(), HostError> {
        Ok(Element::class_list(self).remove_1(class)?)
    }

    fn toggle_class(&self, class: &str) -> Result<bool, HostError> {
        Ok(Element::class_list(self).toggle(class)?)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        Ok(Element::set_attribute(self, name, value)?)
    }
}

impl Media for HtmlMediaElement {
    fn paused(&self) -> bool {
        HtmlMediaElement::paused(self)
    }

    fn play(&self) -> Result<(), HostError> {
        let promise = HtmlMediaElement::play(self)?;
        spawn_local(async move {
            let _ = watch_playback(promise).await;
        });
        Ok(())
    }

    fn pause(&self) -> Result<(), HostError> {
        Ok(HtmlMediaElement::pause(self)?)
    }
}

/// Waits on a `play()` promise; autoplay blocks and unplayable sources land here.
async fn watch_playback(promise: Promise) -> Result<(), HostError> {
    JsFuture::from(promise).await.map(|_| ()).map_err(|e| {
        warn!("video playback rejected: {}", describe(&e));
        HostError::from(e)
    })
}

impl Viewport for Window {
    fn scroll_y(&self) -> Result<f64, HostError> {
        Ok(Window::scroll_y(self)?)
    }

    fn scroll_to(&self, x: f64, y: f64) {
        self.scroll_to_with_x_and_y(x, y);
    }
}

impl Cancelable for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// The current window and document.
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn current() -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn element(&self, selector: &str) -> Result<HtmlElement, SetupError> {
        self.query(selector, "html element")
    }

    pub fn media(&self, selector: &str) -> Result<HtmlMediaElement, SetupError> {
        self.query(selector, "media element")
    }

    fn query<T: JsCast>(&self, selector: &str, expected: &'static str) -> Result<T, SetupError> {
        let element = self
            .document
            .query_selector(selector)
            .map_err(|e| SetupError::Lookup {
                selector: selector.to_string(),
                reason: describe(&e),
            })?
            .ok_or_else(|| SetupError::MissingElement {
                selector: selector.to_string(),
            })?;
        element
            .dyn_into::<T>()
            .map_err(|_| SetupError::WrongElementType {
                selector: selector.to_string(),
                expected,
            })
    }

    /// Defaults, overridden by the page's embedded JSON config when present.
    pub fn landing_config(&self) -> LandingConfig {
        let text = self
            .document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        match text {
            None => LandingConfig::default(),
            Some(text) => match LandingConfig::from_json(&text) {
                Ok(config) => {
                    info!("Loaded landing config overrides");
                    config
                }
                Err(e) => {
                    error!("{}, falling back to defaults", e);
                    LandingConfig::default()
                }
            },
        }
    }
}

type Callback = Closure<dyn FnMut(Event)>;

/// Listeners attached for one controller. Dropping without [`Listeners::commit`]
/// detaches them again, so a controller is either fully wired or not at all.
struct Listeners {
    attached: Vec<(EventTarget, &'static str, Callback)>,
}

impl Listeners {
    fn new() -> Self {
        Self { attached: Vec::new() }
    }

    fn listen<F>(&mut self, target: &EventTarget, name: &str, event: &'static str, handler: F) -> Result<(), SetupError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback: Callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| SetupError::Listener {
                event,
                target: name.to_string(),
                reason: describe(&e),
            })?;
        self.attached.push((target.clone(), event, callback));
        Ok(())
    }

    /// Keeps every listener for the lifetime of the page.
    fn commit(mut self) {
        for (_, _, callback) in std::mem::take(&mut self.attached) {
            callback.forget();
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (target, event, callback) in self.attached.drain(..) {
            let _ = target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    }
}

fn install_nav(page: &Page, config: &LandingConfig) -> Result<(), SetupError> {
    let trigger = page.element(&config.nav_trigger)?;
    let panel = page.element(&config.nav_panel)?;
    let nav = NavToggle::new(trigger.clone(), panel, config);

    let mut listeners = Listeners::new();
    listeners.listen(&trigger, &config.nav_trigger, "click", move |_| nav.click())?;
    listeners.commit();
    Ok(())
}

fn install_header(page: &Page, config: &LandingConfig) -> Result<(), SetupError> {
    let header = page.element(&config.header)?;
    let logo = page.element(&config.logo)?;
    let styler = HeaderScrollStyler::new(header, logo, config);
    if config.sync_on_install {
        styler.scroll(scroll_offset(&page.window));
    }

    let window = page.window.clone();
    let mut listeners = Listeners::new();
    listeners.listen(&page.window, "window", "scroll", move |_| {
        styler.scroll(scroll_offset(&window))
    })?;
    listeners.commit();
    Ok(())
}

fn install_panel(page: &Page, config: &LandingConfig) -> Result<(), SetupError> {
    let trigger = page.element(&config.panel_trigger)?;
    let panel = page.element(&config.text_panel)?;
    let toggle = PanelToggle::new(trigger.clone(), panel, config);

    let mut listeners = Listeners::new();
    listeners.listen(&trigger, &config.panel_trigger, "click", move |_| toggle.click())?;
    listeners.commit();
    Ok(())
}

fn install_video(page: &Page, config: &LandingConfig) -> Result<(), SetupError> {
    let link = page.element(&config.video_link)?;
    let overlay = page.element(&config.video_overlay)?;
    let exit = page.element(&config.video_exit)?;
    let player = page.element(&config.video_player)?;
    let video = page.media(&config.video)?;
    let controller = Rc::new(VideoOverlay::new(overlay, player.clone(), video, config));

    let mut listeners = Listeners::new();
    let on_link = controller.clone();
    listeners.listen(&link, &config.video_link, "click", move |event| on_link.open(&event))?;
    let on_exit = controller.clone();
    listeners.listen(&exit, &config.video_exit, "click", move |_| on_exit.close())?;
    listeners.listen(&player, &config.video_player, "click", move |_| controller.toggle_playback())?;
    listeners.commit();
    Ok(())
}

fn install_scroll_top(page: &Page, config: &LandingConfig) -> Result<(), SetupError> {
    let button = page.element(&config.scroll_top)?;
    let controller = Rc::new(ScrollToTop::new(button.clone(), page.window.clone(), config));
    if config.sync_on_install {
        controller.scroll(scroll_offset(&page.window));
    }

    let window = page.window.clone();
    let on_scroll = controller.clone();
    let mut listeners = Listeners::new();
    listeners.listen(&page.window, "window", "scroll", move |_| {
        on_scroll.scroll(scroll_offset(&window))
    })?;
    listeners.listen(&button, &config.scroll_top, "click", move |_| controller.click())?;
    listeners.commit();
    Ok(())
}

type Installer = fn(&Page, &LandingConfig) -> Result<(), SetupError>;

/// Outcome of [`install_all`].
#[derive(Debug, Default)]
pub struct Installed {
    pub controllers: Vec<&'static str>,
    pub failures: Vec<(&'static str, SetupError)>,
}

/// Installs every controller independently; one failing does not stop the rest.
pub fn install_all(page: &Page, config: &LandingConfig) -> Installed {
    let installers: [(&'static str, Installer); 5] = [
        ("nav toggle", install_nav),
        ("header scroll styler", install_header),
        ("panel toggle", install_panel),
        ("video overlay", install_video),
        ("scroll to top", install_scroll_top),
    ];

    let mut installed = Installed::default();
    for (name, install) in installers {
        match install(page, config) {
            Ok(()) => {
                info!("Installed {}", name);
                installed.controllers.push(name);
            }
            Err(e) => {
                error!("Skipping {}: {}", name, e);
                installed.failures.push((name, e));
            }
        }
    }
    installed
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;

    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(html);
        document.body().unwrap().append_child(&host).unwrap();
    }

    #[wasm_bindgen_test]
    fn missing_element_is_reported_with_its_selector() {
        let page = Page::current().unwrap();
        match page.element("#nothing-here") {
            Err(SetupError::MissingElement { selector }) => assert_eq!(selector, "#nothing-here"),
            other => panic!("unexpected lookup result: {:?}", other.map(|_| ())),
        }
    }

    #[wasm_bindgen_test]
    fn non_media_element_is_rejected_as_video() {
        mount(r#"<div id="not-a-video"></div>"#);
        let page = Page::current().unwrap();
        let err = page.media("#not-a-video").unwrap_err();
        assert!(matches!(err, SetupError::WrongElementType { .. }));
    }

    #[wasm_bindgen_test]
    fn nav_click_slides_panel_in() {
        mount(r#"<i id="t-bar" class="fa-light fa-bars"></i><div class="t-navigation"></div>"#);
        let page = Page::current().unwrap();
        let config = LandingConfig {
            nav_trigger: "#t-bar".to_string(),
            nav_panel: ".t-navigation".to_string(),
            ..LandingConfig::default()
        };
        install_nav(&page, &config).unwrap();

        let trigger = page.element("#t-bar").unwrap();
        let panel = page.element(".t-navigation").unwrap();
        trigger.click();

        assert_eq!(panel.style().get_property_value("right").unwrap(), "0%");
        assert!(trigger.class_list().contains("fa-xmark"));
    }

    #[wasm_bindgen_test]
    fn install_all_reports_each_missing_controller() {
        let page = Page::current().unwrap();
        let config = LandingConfig {
            nav_trigger: "#absent-bar".to_string(),
            header: "#absent-header".to_string(),
            panel_trigger: ".absent-plus".to_string(),
            video_link: ".absent-link".to_string(),
            scroll_top: ".absent-top".to_string(),
            ..LandingConfig::default()
        };
        let installed = install_all(&page, &config);
        assert!(installed.controllers.is_empty());
        assert_eq!(installed.failures.len(), 5);
    }

    #[wasm_bindgen_test]
    fn sync_on_install_applies_current_offset() {
        mount(r#"<header id="t-header" class="active"></header><img id="t-lamp">"#);
        let page = Page::current().unwrap();
        page.window.scroll_to_with_x_and_y(0.0, 0.0);
        let config = LandingConfig {
            header: "#t-header".to_string(),
            logo: "#t-lamp".to_string(),
            sync_on_install: true,
            ..LandingConfig::default()
        };
        install_header(&page, &config).unwrap();

        let header = page.element("#t-header").unwrap();
        assert!(!header.class_list().contains("active"));
        let logo = page.element("#t-lamp").unwrap();
        assert_eq!(logo.get_attribute("src").as_deref(), Some("logo2.png"));
    }

    #[wasm_bindgen_test]
    fn sync_on_install_hides_back_to_top_at_origin() {
        mount(r#"<a class="t-top" style="display: block"></a>"#);
        let page = Page::current().unwrap();
        page.window.scroll_to_with_x_and_y(0.0, 0.0);
        let config = LandingConfig {
            scroll_top: ".t-top".to_string(),
            sync_on_install: true,
            ..LandingConfig::default()
        };
        install_scroll_top(&page, &config).unwrap();

        let button = page.element(".t-top").unwrap();
        assert_eq!(button.style().get_property_value("display").unwrap(), "none");
    }

    #[wasm_bindgen_test]
    fn uncommitted_listeners_are_detached() {
        mount(r#"<button id="t-detach"></button>"#);
        let page = Page::current().unwrap();
        let button = page.element("#t-detach").unwrap();
        let clicks = Rc::new(Cell::new(0));
        {
            let mut listeners = Listeners::new();
            let counter = clicks.clone();
            listeners
                .listen(&button, "#t-detach", "click", move |_| counter.set(counter.get() + 1))
                .unwrap();
            button.click();
        }
        button.click();
        assert_eq!(clicks.get(), 1);
    }

    #[wasm_bindgen_test]
    fn committed_listeners_stay_attached() {
        mount(r#"<button id="t-commit"></button>"#);
        let page = Page::current().unwrap();
        let button = page.element("#t-commit").unwrap();
        let clicks = Rc::new(Cell::new(0));
        let mut listeners = Listeners::new();
        let counter = clicks.clone();
        listeners
            .listen(&button, "#t-commit", "click", move |_| counter.set(counter.get() + 1))
            .unwrap();
        listeners.commit();

        button.click();
        button.click();
        assert_eq!(clicks.get(), 2);
    }

    #[wasm_bindgen_test]
    async fn rejected_playback_is_reported() {
        let err = watch_playback(Promise::reject(&JsValue::from_str("NotAllowedError")))
            .await
            .unwrap_err();
        assert!(err.0.contains("NotAllowedError"));
    }

    #[wasm_bindgen_test]
    async fn started_playback_is_quiet() {
        assert!(watch_playback(Promise::resolve(&JsValue::UNDEFINED)).await.is_ok());
    }

    #[wasm_bindgen_test]
    fn embedded_config_overrides_defaults() {
        mount(r#"<script type="application/json" id="landing-config">{"scroll_top_threshold": 40}</script>"#);
        let page = Page::current().unwrap();
        assert_eq!(page.landing_config().scroll_top_threshold, 40.0);
    }
}
