use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::config::SiteConfig;

/// Elements the theme controller works on.
#[derive(Clone)]
pub struct ThemeElements {
    pub body: HtmlElement,
    pub sun_icon: Option<HtmlElement>,
    pub moon_icon: Option<HtmlElement>,
    pub toggles: Vec<Element>,
}

/// The navigation disclosure: container, toggle button, panel and its links.
#[derive(Clone)]
pub struct MenuElements {
    pub nav: Element,
    pub toggle: HtmlElement,
    pub panel: HtmlElement,
    pub links: Vec<HtmlElement>,
}

/// A text control of the contact form.
#[derive(Clone)]
pub enum FieldElement {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldElement {
    fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(FieldElement::Input(input)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlTextAreaElement>().ok().map(FieldElement::TextArea)
    }

    pub fn value(&self) -> String {
        match self {
            FieldElement::Input(input) => input.value(),
            FieldElement::TextArea(area) => area.value(),
        }
    }

    pub fn as_element(&self) -> &Element {
        match self {
            FieldElement::Input(input) => input.as_ref(),
            FieldElement::TextArea(area) => area.as_ref(),
        }
    }
}

/// Success/error containers shown after a submission attempt.
#[derive(Clone)]
pub struct MessagePanel {
    pub container: HtmlElement,
    pub success: HtmlElement,
    pub error: HtmlElement,
}

#[derive(Clone)]
pub struct ContactElements {
    pub form: HtmlFormElement,
    pub name: FieldElement,
    pub email: FieldElement,
    pub message: FieldElement,
    pub submit: Option<HtmlButtonElement>,
    pub messages: Option<MessagePanel>,
}

/// Every element the behavior layer touches, looked up once at startup.
///
/// Groups whose required markup is missing are `None` (or empty) and the
/// matching component is simply not built.
pub struct BoundElements {
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub theme: Option<ThemeElements>,
    pub menu: Option<MenuElements>,
    pub reveal_targets: Vec<Element>,
    pub counters: Vec<Element>,
    pub contact: Option<ContactElements>,
    pub hero: Option<HtmlElement>,
    pub anchors: Vec<Element>,
}

impl BoundElements {
    pub fn bind(document: &Document, config: &SiteConfig) -> Self {
        let body = document.body();
        let bound = Self {
            document: document.clone(),
            theme: body.clone().map(|body| bind_theme(document, body, config)),
            menu: bind_menu(document, config),
            reveal_targets: query_all(document, config.reveal_selector),
            counters: query_all(document, config.counter_selector),
            contact: bind_contact(document, config),
            hero: by_id(document, config.hero_id),
            anchors: query_all(document, config.anchor_selector),
            body,
        };

        log::debug!(
            "Bound page: theme={} menu={} reveal={} counters={} contact={} hero={} anchors={}",
            bound.theme.is_some(),
            bound.menu.is_some(),
            bound.reveal_targets.len(),
            bound.counters.len(),
            bound.contact.is_some(),
            bound.hero.is_some(),
            bound.anchors.len(),
        );
        bound
    }
}

fn bind_theme(document: &Document, body: HtmlElement, config: &SiteConfig) -> ThemeElements {
    ThemeElements {
        body,
        sun_icon: query_html(document, config.sun_icon_selector),
        moon_icon: query_html(document, config.moon_icon_selector),
        toggles: query_all(document, config.theme_toggle_selector),
    }
}

fn bind_menu(document: &Document, config: &SiteConfig) -> Option<MenuElements> {
    let nav = query(document, config.nav_selector);
    let toggle = query_html(document, config.menu_toggle_selector);
    let panel = config
        .menu_selectors
        .iter()
        .find_map(|selector| query_html(document, selector));

    let (Some(nav), Some(toggle), Some(panel)) = (nav, toggle, panel) else {
        log::debug!("Navigation menu markup not found, menu disabled");
        return None;
    };

    let links = query_all(&panel, config.menu_link_selector)
        .into_iter()
        .filter_map(|link| link.dyn_into::<HtmlElement>().ok())
        .collect();

    Some(MenuElements {
        nav,
        toggle,
        panel,
        links,
    })
}

fn bind_contact(document: &Document, config: &SiteConfig) -> Option<ContactElements> {
    let form = by_id(document, config.contact_form_id)
        .and_then(|form| form.dyn_into::<HtmlFormElement>().ok());
    let Some(form) = form else {
        log::debug!("Contact form not found");
        return None;
    };

    let field = |name: &str| {
        query(&form, &format!("[name=\"{}\"]", name)).and_then(FieldElement::from_element)
    };
    let (Some(name), Some(email), Some(message)) = (field("name"), field("email"), field("message"))
    else {
        log::debug!("Contact form is missing a name, email or message field");
        return None;
    };

    let submit = by_id(document, config.submit_button_id)
        .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok());

    let messages = match (
        by_id(document, config.form_messages_id),
        by_id(document, config.success_message_id),
        by_id(document, config.error_message_id),
    ) {
        (Some(container), Some(success), Some(error)) => Some(MessagePanel {
            container,
            success,
            error,
        }),
        _ => None,
    };

    Some(ContactElements {
        form,
        name,
        email,
        message,
        submit,
        messages,
    })
}

/// Anything `querySelector` can be called on.
pub trait Queryable {
    fn select(&self, selector: &str) -> Option<Element>;
    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList>;
}

impl Queryable for Document {
    fn select(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }

    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList> {
        self.query_selector_all(selector).ok()
    }
}

impl Queryable for Element {
    fn select(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }

    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList> {
        self.query_selector_all(selector).ok()
    }
}

impl Queryable for HtmlElement {
    fn select(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }

    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList> {
        self.query_selector_all(selector).ok()
    }
}

impl Queryable for HtmlFormElement {
    fn select(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }

    fn select_all(&self, selector: &str) -> Option<web_sys::NodeList> {
        self.query_selector_all(selector).ok()
    }
}

pub fn query(root: &impl Queryable, selector: &str) -> Option<Element> {
    root.select(selector)
}

pub fn query_html(root: &impl Queryable, selector: &str) -> Option<HtmlElement> {
    query(root, selector).and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(root: &impl Queryable, selector: &str) -> Vec<Element> {
    let Some(list) = root.select_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}
