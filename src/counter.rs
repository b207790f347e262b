//! Animated statistics counters (`data-target`), started on first visibility.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::{SiteConfig, COUNTER_DURATION_MS, FRAME_INTERVAL_MS};
use crate::dom::visibility::{VisibilityWatch, WatchOptions};
use crate::error::SiteError;

/// Parse a counter target the way `parseInt` reads attribute text: optional
/// leading whitespace and sign, then as many digits as are present.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    // Only overflow can fail here; oversized targets saturate.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// What a single animation frame renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub display: i64,
    pub done: bool,
}

/// Linear count-up from 0 to `target` over roughly `COUNTER_DURATION_MS`.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            increment: target as f64 / (COUNTER_DURATION_MS / FRAME_INTERVAL_MS),
            current: 0.0,
            finished: false,
        }
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn tick(&mut self) -> CounterFrame {
        if !self.finished {
            self.current += self.increment;
            if self.current < self.target as f64 {
                return CounterFrame {
                    display: self.current.floor() as i64,
                    done: false,
                };
            }
            self.finished = true;
        }
        CounterFrame {
            display: self.target,
            done: true,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// A counter element's target plus the guard against starting twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTarget {
    target: i64,
    started: bool,
}

impl CounterTarget {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            started: false,
        }
    }

    /// Hands out the animation the first time only.
    pub fn start(&mut self) -> Option<CounterAnimation> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(CounterAnimation::new(self.target))
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

/// One counter element with its own visibility watch.
pub struct ArmedCounter {
    _watch: VisibilityWatch,
}

pub struct CounterAnimator;

impl CounterAnimator {
    /// Arm every element carrying a parseable target. Others are skipped.
    pub fn arm_all(elements: &[Element], config: &SiteConfig) -> Vec<ArmedCounter> {
        elements
            .iter()
            .filter_map(|element| match Self::arm(element, config) {
                Ok(armed) => armed,
                Err(e) => {
                    log::warn!("Failed to arm counter: {}", e);
                    None
                }
            })
            .collect()
    }

    pub fn arm(element: &Element, config: &SiteConfig) -> Result<Option<ArmedCounter>, SiteError> {
        let raw = element.get_attribute(config.counter_attribute).unwrap_or_default();
        let Some(value) = parse_target(&raw) else {
            log::debug!("Skipping counter with unreadable target {:?}", raw);
            return Ok(None);
        };

        let mut target = CounterTarget::new(value);
        let watch = VisibilityWatch::new(WatchOptions::default(), move |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let element = entry.target();
            observer.unobserve(&element);
            if let Some(animation) = target.start() {
                run(element, animation);
            }
        })?;
        watch.observe(element);

        Ok(Some(ArmedCounter { _watch: watch }))
    }
}

/// Render the first frame now and the rest on `requestAnimationFrame`.
fn run(element: Element, mut animation: CounterAnimation) {
    let first = animation.tick();
    element.set_text_content(Some(&first.display.to_string()));
    if first.done {
        return;
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    // The closure owns the animation and clears its own slot when done.
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame = {
        let slot = slot.clone();
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let step = animation.tick();
            element.set_text_content(Some(&step.display.to_string()));
            if step.done {
                let _ = slot.borrow_mut().take();
                return;
            }
            if let Some(frame) = slot.borrow().as_ref() {
                let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
            }
        })
    };
    let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
    *slot.borrow_mut() = Some(frame);
}
