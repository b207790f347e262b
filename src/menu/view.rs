use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Node};

use super::{wrap_focus, DisclosureMenu, FocusSlot, MenuEvent, MenuView};
use crate::config::SiteConfig;
use crate::dom::bind::MenuElements;
use crate::dom::listener::EventListener;
use crate::error::SiteError;

pub struct DomMenuView {
    elements: MenuElements,
    open_class: &'static str,
}

impl DomMenuView {
    pub fn new(elements: MenuElements, config: &SiteConfig) -> Self {
        Self {
            elements,
            open_class: config.nav_open_class,
        }
    }

    fn slot_of(&self, active: &Element) -> Option<FocusSlot> {
        let toggle: &Element = self.elements.toggle.as_ref();
        if toggle == active {
            return Some(FocusSlot::Toggle);
        }
        self.elements
            .links
            .iter()
            .position(|link| AsRef::<Element>::as_ref(link) == active)
            .map(FocusSlot::Link)
    }

    fn focus(&self, slot: FocusSlot) {
        let target = match slot {
            FocusSlot::Toggle => Some(&self.elements.toggle),
            FocusSlot::Link(index) => self.elements.links.get(index),
        };
        if let Some(target) = target {
            let _ = target.focus();
        }
    }
}

impl MenuView for DomMenuView {
    fn render(&self, open: bool) {
        let _ = self
            .elements
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        self.elements.panel.set_hidden(!open);
        let _ = self
            .elements
            .nav
            .class_list()
            .toggle_with_force(self.open_class, open);

        if open {
            let focused = match self.elements.links.first() {
                Some(link) => link.focus(),
                None => self.elements.panel.focus(),
            };
            if focused.is_err() {
                log::debug!("Could not move focus into the menu");
            }
        }
    }
}

type SharedMenu = Rc<RefCell<DisclosureMenu<DomMenuView>>>;

/// The menu state machine plus every listener feeding it events.
pub struct MenuBinding {
    menu: SharedMenu,
    _listeners: Vec<EventListener>,
}

impl MenuBinding {
    pub fn attach(
        document: &Document,
        elements: MenuElements,
        config: &SiteConfig,
    ) -> Result<Self, SiteError> {
        let menu: SharedMenu = Rc::new(RefCell::new(DisclosureMenu::new(DomMenuView::new(
            elements.clone(),
            config,
        ))));
        let mut listeners = Vec::with_capacity(elements.links.len() + 3);

        listeners.push(EventListener::new(&elements.toggle, "click", {
            let menu = menu.clone();
            move |event: Event| {
                event.prevent_default();
                dispatch(&menu, MenuEvent::ToggleActivated);
            }
        })?);

        for link in &elements.links {
            listeners.push(EventListener::new(link, "click", {
                let menu = menu.clone();
                move |_: Event| dispatch(&menu, MenuEvent::LinkActivated)
            })?);
        }

        listeners.push(EventListener::new(document, "click", {
            let menu = menu.clone();
            let nav = elements.nav.clone();
            move |event: Event| {
                let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                if target.is_some() && !nav.contains(target.as_ref()) {
                    dispatch(&menu, MenuEvent::OutsideClick);
                }
            }
        })?);

        listeners.push(EventListener::new(document, "keydown", {
            let menu = menu.clone();
            let document = document.clone();
            move |event: Event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    on_keydown(&menu, &document, event);
                }
            }
        })?);

        Ok(Self {
            menu,
            _listeners: listeners,
        })
    }

    pub fn is_open(&self) -> bool {
        self.menu.borrow().state().is_open()
    }
}

fn dispatch(menu: &SharedMenu, event: MenuEvent) {
    match menu.try_borrow_mut() {
        Ok(mut menu) => {
            menu.handle(event);
        }
        Err(_) => log::debug!("Menu busy, dropping {:?}", event),
    }
}

fn on_keydown(menu: &SharedMenu, document: &Document, event: &KeyboardEvent) {
    if !menu.borrow().state().is_open() {
        return;
    }
    match event.key().as_str() {
        "Escape" => dispatch(menu, MenuEvent::Escape),
        "Tab" => {
            if event.ctrl_key() || event.meta_key() || event.alt_key() {
                return;
            }
            let menu = menu.borrow();
            let view = menu.view();
            let next = document
                .active_element()
                .and_then(|active| view.slot_of(&active))
                .and_then(|slot| wrap_focus(slot, event.shift_key(), view.elements.links.len()));
            if let Some(next) = next {
                event.prevent_default();
                view.focus(next);
            }
        }
        _ => {}
    }
}
