#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use levelcraft_site::config::{SiteConfig, THEME_STORAGE_KEY};
use levelcraft_site::contact::SubmissionOutcome;
use levelcraft_site::notification::NotificationKind;
use levelcraft_site::theme::ThemePreference;
use levelcraft_site::{dom, Site};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::js_sys::{Function, Reflect};
use web_sys::{Document, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn page(markup: &str) -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(markup);
    document
}

fn html(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

const NAV: &str = r##"
    <nav>
      <button class="nav__toggle" aria-expanded="false">Menu</button>
      <ul id="menu" hidden>
        <li><a class="nav__link" href="#about">About</a></li>
        <li><a class="nav__link" href="#contact">Contact</a></li>
      </ul>
    </nav>
    <main id="outside">Content</main>
"##;

#[wasm_bindgen_test]
fn menu_opens_and_closes_on_outside_click() {
    let document = page(NAV);
    let site = Site::mount(SiteConfig::default()).unwrap();
    let toggle = html(&document, ".nav__toggle");
    let panel = html(&document, "#menu");
    let nav = html(&document, "nav");

    toggle.click();
    assert!(site.menu.as_ref().unwrap().is_open());
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(!panel.hidden());
    assert!(nav.class_list().contains("nav--open"));

    html(&document, "#outside").click();
    assert!(!site.menu.as_ref().unwrap().is_open());
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(panel.hidden());
    assert!(!nav.class_list().contains("nav--open"));
}

#[wasm_bindgen_test]
fn menu_link_closes_menu() {
    let document = page(NAV);
    let site = Site::mount(SiteConfig::default()).unwrap();

    html(&document, ".nav__toggle").click();
    html(&document, ".nav__link").click();

    assert!(!site.menu.as_ref().unwrap().is_open());
    assert!(html(&document, "#menu").hidden());
}

#[wasm_bindgen_test]
fn theme_toggle_updates_body_and_storage() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
    let document = page(
        r#"<button data-theme-toggle><span class="sun-icon"></span><span class="moon-icon"></span></button>"#,
    );
    let site = Site::mount(SiteConfig::default()).unwrap();
    let body = document.body().unwrap();
    assert!(body.class_list().contains("dark-mode"));
    assert_eq!(html(&document, ".moon-icon").style().get_property_value("display").unwrap(), "none");

    html(&document, "[data-theme-toggle]").click();

    assert_eq!(site.theme.as_ref().unwrap().current(), ThemePreference::Light);
    assert!(body.class_list().contains("light-mode"));
    assert!(!body.class_list().contains("dark-mode"));
    assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn only_one_notification_at_a_time() {
    let document = page("");
    let site = Site::mount(SiteConfig::default()).unwrap();

    site.notifier.notify("first", NotificationKind::Info);
    site.notifier.notify("second <b>not bold</b>", NotificationKind::Error);

    let shown = document.query_selector_all(".notification").unwrap();
    assert_eq!(shown.length(), 1);
    let toast = html(&document, ".notification");
    assert!(toast.class_list().contains("notification-error"));
    assert!(toast.text_content().unwrap().contains("<b>not bold</b>"));

    html(&document, ".notification-close").click();
    assert_eq!(document.query_selector_all(".notification").unwrap().length(), 0);
}

#[wasm_bindgen_test]
async fn notification_removes_itself_after_timeout() {
    let document = page("");
    let config = SiteConfig {
        notification_timeout_ms: 20,
        ..SiteConfig::default()
    };
    let site = Site::mount(config).unwrap();

    site.notifier.notify("short lived", NotificationKind::Success);
    let close = html(&document, ".notification-close");
    assert_eq!(document.query_selector_all(".notification").unwrap().length(), 1);

    TimeoutFuture::new(80).await;
    assert_eq!(document.query_selector_all(".notification").unwrap().length(), 0);

    // Closing an already dismissed notification does nothing.
    close.click();
    site.notifier.notify("next", NotificationKind::Info);
    assert_eq!(document.query_selector_all(".notification").unwrap().length(), 1);
    site.notifier.clear();
}

#[wasm_bindgen_test]
async fn closed_notification_survives_its_timeout() {
    let document = page("");
    let config = SiteConfig {
        notification_timeout_ms: 20,
        ..SiteConfig::default()
    };
    let site = Site::mount(config).unwrap();

    site.notifier.notify("closed early", NotificationKind::Warning);
    html(&document, ".notification-close").click();
    assert_eq!(document.query_selector_all(".notification").unwrap().length(), 0);

    TimeoutFuture::new(80).await;
    assert_eq!(document.query_selector_all(".notification").unwrap().length(), 0);
}

fn global(name: &str) -> Function {
    let window = web_sys::window().unwrap();
    Reflect::get(&window, &JsValue::from_str(name))
        .unwrap()
        .dyn_into::<Function>()
        .unwrap()
}

#[wasm_bindgen_test]
fn window_globals_drive_the_launched_site() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
    let document = page(
        r#"<button onclick="toggleTheme()">Theme</button><div id="mobile-menu" class="hidden"></div>"#,
    );
    levelcraft_site::launch(SiteConfig::default()).unwrap();
    levelcraft_site::expose_globals().unwrap();
    let body = document.body().unwrap();
    assert!(body.class_list().contains("dark-mode"));

    global("toggleTheme").call0(&JsValue::NULL).unwrap();
    assert!(body.class_list().contains("light-mode"));
    assert!(!body.class_list().contains("dark-mode"));

    html(&document, "button").click();
    assert!(body.class_list().contains("dark-mode"));

    global("toggleMobileMenu").call0(&JsValue::NULL).unwrap();
    assert!(!html(&document, "#mobile-menu").class_list().contains("hidden"));

    global("showNotification")
        .call2(&JsValue::NULL, &JsValue::from_str("hello"), &JsValue::from_str("success"))
        .unwrap();
    assert!(html(&document, ".notification")
        .class_list()
        .contains("notification-success"));

    levelcraft_site::teardown();
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
    document
        .query_selector(".notification")
        .unwrap()
        .unwrap()
        .remove();
}

#[wasm_bindgen_test]
fn setup_waits_for_dom_content_loaded_while_parsing() {
    let document = page("");
    let ran = Rc::new(Cell::new(false));

    dom::defer_while_parsing(&document, "loading", {
        let ran = ran.clone();
        move || ran.set(true)
    })
    .unwrap();
    assert!(!ran.get());

    document
        .dispatch_event(&Event::new("DOMContentLoaded").unwrap())
        .unwrap();
    assert!(ran.get());
}

#[wasm_bindgen_test]
fn setup_runs_at_once_when_document_is_parsed() {
    let document = page("");
    let ran = Rc::new(Cell::new(false));

    dom::when_ready(&document, {
        let ran = ran.clone();
        move || ran.set(true)
    })
    .unwrap();
    assert!(ran.get());
}

const FORM: &str = r#"
    <form id="contact-form" action="https://forms.invalid/f/test">
      <input name="name" value="Jane">
      <input name="email" value="not-an-email">
      <textarea name="message">Hello</textarea>
      <button id="submit-btn" type="submit">Schedule Free Consultation</button>
    </form>
    <div id="form-messages" class="hidden">
      <div id="success-message" class="hidden"><strong>Success!</strong> <span></span></div>
      <div id="error-message" class="hidden"><strong>Error!</strong> <span></span></div>
    </div>
"#;

#[wasm_bindgen_test]
async fn invalid_email_shows_error_without_posting() {
    let document = page(FORM);
    let site = Site::mount(SiteConfig::default()).unwrap();
    let contact = site.contact.as_ref().unwrap();

    let outcome = contact.submitter().submit().await;

    assert_eq!(outcome, SubmissionOutcome::NotSubmitted);
    let error = html(&document, "#error-message");
    assert!(!error.class_list().contains("hidden"));
    assert!(error
        .text_content()
        .unwrap()
        .contains("Please enter a valid email address."));
    assert!(!html(&document, "#form-messages").class_list().contains("hidden"));
    let button = html(&document, "#submit-btn");
    assert_eq!(button.text_content().as_deref(), Some("Schedule Free Consultation"));
    assert_eq!(
        html(&document, "[name=email]").get_attribute("aria-invalid").as_deref(),
        Some("true")
    );
}

#[wasm_bindgen_test]
fn unparseable_counters_are_skipped() {
    page(r#"<span data-target="100">0</span><span data-target="soon">?</span>"#);
    let site = Site::mount(SiteConfig::default()).unwrap();

    assert_eq!(site.counters.len(), 1);
}

#[wasm_bindgen_test]
fn missing_markup_is_not_fatal() {
    page("<p>Nothing to bind here</p>");
    let site = Site::mount(SiteConfig::default()).unwrap();

    assert!(site.menu.is_none());
    assert!(site.contact.is_none());
    assert!(site.reveal.is_none());
    assert!(site.counters.is_empty());
    assert_eq!(site.listener_count(), 0);
}
