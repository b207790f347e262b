/// Storage key holding the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "levelCraftTheme";

/// Counter animations run for this long overall.
pub const COUNTER_DURATION_MS: f64 = 2000.0;
/// Approximate length of one animation frame (60fps).
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Notifications remove themselves after this many milliseconds.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// Reveal animations trigger once this fraction of an element is visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so reveals trigger slightly before full entry.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Hero section scrolls at this rate relative to the page.
pub const PARALLAX_RATE: f64 = -0.5;

/// Selectors, class names and copy the behavior layer expects from the page.
///
/// The page is static markup, so none of this is loaded at runtime; `start()`
/// uses the defaults and tests build variants.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub theme_toggle_selector: &'static str,
    pub sun_icon_selector: &'static str,
    pub moon_icon_selector: &'static str,
    pub light_class: &'static str,
    pub dark_class: &'static str,

    pub nav_selector: &'static str,
    pub menu_selectors: &'static [&'static str],
    pub menu_toggle_selector: &'static str,
    pub menu_link_selector: &'static str,
    pub nav_open_class: &'static str,
    pub mobile_menu_id: &'static str,

    pub reveal_selector: &'static str,
    pub revealed_class: &'static str,
    pub counter_selector: &'static str,
    pub counter_attribute: &'static str,

    pub contact_form_id: &'static str,
    pub submit_button_id: &'static str,
    pub form_messages_id: &'static str,
    pub success_message_id: &'static str,
    pub error_message_id: &'static str,
    pub hidden_class: &'static str,
    pub pending_label: &'static str,
    pub success_text: &'static str,
    pub failure_text: &'static str,

    pub hero_id: &'static str,
    pub anchor_selector: &'static str,

    pub notification_timeout_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_toggle_selector: "[data-theme-toggle]",
            sun_icon_selector: ".sun-icon",
            moon_icon_selector: ".moon-icon",
            light_class: "light-mode",
            dark_class: "dark-mode",

            nav_selector: "nav",
            menu_selectors: &["#menu", ".nav__menu"],
            menu_toggle_selector: ".nav__toggle",
            menu_link_selector: ".nav__link",
            nav_open_class: "nav--open",
            mobile_menu_id: "mobile-menu",

            reveal_selector: ".loading",
            revealed_class: "loaded",
            counter_selector: "[data-target]",
            counter_attribute: "data-target",

            contact_form_id: "contact-form",
            submit_button_id: "submit-btn",
            form_messages_id: "form-messages",
            success_message_id: "success-message",
            error_message_id: "error-message",
            hidden_class: "hidden",
            pending_label: "Sending...",
            success_text: "Thank you! Your message has been sent successfully. We'll get back to you soon.",
            failure_text: "Sorry, there was an error sending your message. Please try again or contact us directly.",

            hero_id: "home",
            anchor_selector: "a[href^=\"#\"]",

            notification_timeout_ms: NOTIFICATION_TIMEOUT_MS,
        }
    }
}

/// Log level for the console logger.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
