//! Mobile navigation disclosure: open/closed state, focus trap, DOM wiring.

pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleActivated,
    OutsideClick,
    Escape,
    LinkActivated,
}

impl MenuState {
    pub fn on(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::ToggleActivated) => MenuState::Open,
            (MenuState::Open, MenuEvent::ToggleActivated)
            | (MenuState::Open, MenuEvent::OutsideClick)
            | (MenuState::Open, MenuEvent::Escape)
            | (MenuState::Open, MenuEvent::LinkActivated) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Focusable positions inside the open disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSlot {
    Toggle,
    Link(usize),
}

/// Where Tab (or Shift+Tab when `backwards`) must move focus so it stays
/// inside the open menu. `None` leaves the browser default alone.
pub fn wrap_focus(current: FocusSlot, backwards: bool, link_count: usize) -> Option<FocusSlot> {
    let last = link_count.checked_sub(1)?;
    match (current, backwards) {
        (FocusSlot::Toggle, false) => Some(FocusSlot::Link(0)),
        (FocusSlot::Toggle, true) => Some(FocusSlot::Link(last)),
        (FocusSlot::Link(index), false) if index == last => Some(FocusSlot::Toggle),
        (FocusSlot::Link(0), true) => Some(FocusSlot::Toggle),
        (FocusSlot::Link(_), _) => None,
    }
}

/// Renders the menu state: expanded attribute, panel visibility, focus.
#[cfg_attr(test, mockall::automock)]
pub trait MenuView {
    fn render(&self, open: bool);
}

pub struct DisclosureMenu<V: MenuView> {
    state: MenuState,
    view: V,
}

impl<V: MenuView> DisclosureMenu<V> {
    /// The page is expected to ship the menu collapsed.
    pub fn new(view: V) -> Self {
        Self {
            state: MenuState::Closed,
            view,
        }
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuState {
        let next = self.state.on(event);
        if next != self.state {
            log::debug!("Menu {:?} -> {:?} on {:?}", self.state, next, event);
            self.state = next;
            self.view.render(next.is_open());
        }
        next
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
