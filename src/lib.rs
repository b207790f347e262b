//! Client-side behavior for the Level Craft marketing site: theme switching,
//! the mobile navigation menu, scroll reveals, animated counters, the contact
//! form and toast notifications.
//!
//! Everything is wired once on start-up from a single [`dom::bind::BoundElements`]
//! lookup. Components whose markup is missing are skipped, never fatal.

pub mod config;
pub mod contact;
pub mod counter;
pub mod dom;
pub mod effects;
pub mod error;
pub mod menu;
pub mod notification;
pub mod reveal;
pub mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;

use config::{SiteConfig, THEME_STORAGE_KEY};
use contact::view::ContactBinding;
use counter::{ArmedCounter, CounterAnimator};
use dom::bind::BoundElements;
use dom::listener::EventListener;
use menu::view::MenuBinding;
use notification::{NotificationEmitter, NotificationKind};
use reveal::RevealObserver;
use theme::storage::LocalPreferenceStore;
use theme::view::DomThemeView;
use theme::ThemeController;

pub use error::SiteError;

pub type DomThemeController = ThemeController<LocalPreferenceStore, DomThemeView>;

/// Every live component of the page. Dropping it removes all listeners and
/// disconnects all observers.
pub struct Site {
    pub config: SiteConfig,
    pub theme: Option<Rc<DomThemeController>>,
    pub menu: Option<MenuBinding>,
    pub reveal: Option<RevealObserver>,
    pub counters: Vec<ArmedCounter>,
    pub contact: Option<ContactBinding>,
    pub notifier: Rc<NotificationEmitter>,
    listeners: Vec<EventListener>,
}

impl Site {
    pub fn mount(config: SiteConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let bound = BoundElements::bind(&document, &config);
        let mut listeners = Vec::new();

        let notifier = Rc::new(NotificationEmitter::new(
            document.clone(),
            bound.body.clone(),
            config.notification_timeout_ms,
        ));

        let theme = bound.theme.map(|elements| {
            let toggles = elements.toggles.clone();
            let controller = Rc::new(ThemeController::new(
                LocalPreferenceStore::new(),
                DomThemeView::new(elements, &config),
            ));
            controller.initialize();
            for toggle in &toggles {
                let controller = controller.clone();
                match EventListener::new(toggle, "click", move |_| {
                    controller.toggle();
                }) {
                    Ok(listener) => listeners.push(listener),
                    Err(e) => log::warn!("Failed to bind theme toggle: {}", e),
                }
            }
            controller
        });

        let menu = bound.menu.and_then(|elements| {
            log_failure("menu", MenuBinding::attach(&document, elements, &config))
        });

        let reveal = if bound.reveal_targets.is_empty() {
            None
        } else {
            log_failure("reveal", RevealObserver::observe(bound.reveal_targets, &config))
        };

        let counters = CounterAnimator::arm_all(&bound.counters, &config);

        let contact = bound.contact.and_then(|elements| {
            log_failure(
                "contact form",
                ContactBinding::attach(elements, &config, notifier.clone()),
            )
        });

        if let Some(hero) = bound.hero {
            if let Some(listener) = log_failure("parallax", effects::parallax(&window, hero)) {
                listeners.push(listener);
            }
        }
        if let Some(anchors) =
            log_failure("anchors", effects::smooth_anchors(&document, &bound.anchors))
        {
            listeners.extend(anchors);
        }

        log::info!(
            "Site ready ({} counters, storage key {})",
            counters.len(),
            THEME_STORAGE_KEY
        );

        Ok(Self {
            config,
            theme,
            menu,
            reveal,
            counters,
            contact,
            notifier,
            listeners,
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn log_failure<T>(component: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Skipping {}: {}", component, e);
            None
        }
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

fn with_site<R>(f: impl FnOnce(&Site) -> R) -> Option<R> {
    SITE.with(|site| site.borrow().as_ref().map(f))
}

/// Mounts the site and makes it the one the global exports act on. A site
/// mounted earlier is dropped first.
pub fn launch(config: SiteConfig) -> Result<(), SiteError> {
    teardown();
    let site = Site::mount(config)?;
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    Ok(())
}

/// Inline handlers such as `onclick="toggleTheme()"` resolve names on `window`,
/// not on the wasm module's exports.
pub fn expose_globals() -> Result<(), SiteError> {
    let window = dom::window()?;
    let globals = [
        ("toggleTheme", Closure::<dyn Fn()>::new(toggle_theme).into_js_value()),
        ("toggleMobileMenu", Closure::<dyn Fn()>::new(toggle_mobile_menu).into_js_value()),
        (
            "showNotification",
            Closure::<dyn Fn(JsValue, JsValue)>::new(|message: JsValue, kind: JsValue| {
                show_notification(&message.as_string().unwrap_or_default(), kind.as_string())
            })
            .into_js_value(),
        ),
    ];
    for (name, function) in globals {
        Reflect::set(&window, &JsValue::from_str(name), &function)?;
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    if let Err(e) = expose_globals() {
        log::warn!("Global functions not exposed: {}", e);
    }
    let scheduled = dom::document().and_then(|document| {
        dom::when_ready(&document, || {
            if let Err(e) = launch(SiteConfig::default()) {
                log::error!("Site behavior not started: {}", e);
            }
        })
    });
    if let Err(e) = scheduled {
        log::error!("Site behavior not started: {}", e);
    }
}

/// Drops every listener and observer, e.g. before a client-side navigation.
#[wasm_bindgen]
pub fn teardown() {
    let site = SITE.with(|slot| slot.borrow_mut().take());
    if site.is_some() {
        log::info!("Site behavior torn down");
    }
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    with_site(|site| {
        if let Some(theme) = &site.theme {
            theme.toggle();
        }
    });
}

/// Older markup uses a plain `#mobile-menu` block toggled by class.
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    let Ok(document) = dom::document() else {
        return;
    };
    let config = with_site(|site| site.config.clone()).unwrap_or_default();
    if let Some(menu) = document.get_element_by_id(config.mobile_menu_id) {
        let _ = menu.class_list().toggle(config.hidden_class);
    }
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = kind
        .as_deref()
        .map(NotificationKind::parse)
        .unwrap_or_default();
    let shown = with_site(|site| site.notifier.notify(message, kind));
    if shown.is_none() {
        log::debug!("showNotification called before start: {}", message);
    }
}
