use web_sys::HtmlElement;

use super::{ThemePreference, ThemeView};
use crate::config::SiteConfig;
use crate::dom::bind::ThemeElements;

/// Applies themes to `<body>` and swaps the sun/moon toggle icons.
pub struct DomThemeView {
    elements: ThemeElements,
    light_class: &'static str,
    dark_class: &'static str,
}

impl DomThemeView {
    pub fn new(elements: ThemeElements, config: &SiteConfig) -> Self {
        Self {
            elements,
            light_class: config.light_class,
            dark_class: config.dark_class,
        }
    }
}

impl ThemeView for DomThemeView {
    fn apply(&self, theme: ThemePreference) {
        let classes = self.elements.body.class_list();
        let _ = classes.remove_2(self.light_class, self.dark_class);
        let class = match theme {
            ThemePreference::Light => self.light_class,
            ThemePreference::Dark => self.dark_class,
        };
        let _ = classes.add_1(class);
    }

    fn show_toggle_for(&self, theme: ThemePreference) {
        let (Some(sun), Some(moon)) = (&self.elements.sun_icon, &self.elements.moon_icon) else {
            return;
        };
        // Sun offers the switch to light, moon the switch to dark.
        let dark = theme == ThemePreference::Dark;
        set_display(sun, dark);
        set_display(moon, !dark);
    }
}

fn set_display(element: &HtmlElement, visible: bool) {
    let value = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", value);
}
