//! Small page effects: hero parallax and smooth in-page scrolling.

use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::config::PARALLAX_RATE;
use crate::dom::listener::EventListener;
use crate::error::SiteError;

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y))
}

/// Moves the hero at half the scroll speed.
pub fn parallax(window: &Window, hero: HtmlElement) -> Result<EventListener, SiteError> {
    EventListener::new(window, "scroll", {
        let window = window.clone();
        move |_: Event| {
            let Ok(scroll_y) = window.scroll_y() else {
                return;
            };
            let _ = hero
                .style()
                .set_property("transform", &parallax_transform(scroll_y));
        }
    })
}

/// Fragment links scroll smoothly to their target when it exists.
pub fn smooth_anchors(
    document: &Document,
    anchors: &[Element],
) -> Result<Vec<EventListener>, SiteError> {
    anchors
        .iter()
        .map(|anchor| {
            let document = document.clone();
            let link = anchor.clone();
            EventListener::new(anchor, "click", move |event: Event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                // A bare "#" is not a valid selector; leave it to the browser.
                let Some(target) = document.query_selector(&href).ok().flatten() else {
                    return;
                };
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_moves_up_at_half_speed() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(300.0), -150.0);
        assert_eq!(parallax_transform(120.0), "translateY(-60px)");
    }
}
