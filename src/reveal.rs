//! One-shot scroll reveal for `.loading` elements.

use web_sys::Element;

use crate::config::{SiteConfig, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom::visibility::{VisibilityWatch, WatchOptions};
use crate::error::SiteError;

/// Revealed state of a single element. Flips to true once and stays there.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealTarget {
    revealed: bool,
}

impl RevealTarget {
    /// Returns true only for the call that actually revealed the target.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Elements being watched and whether each has been revealed.
pub struct RevealSet<E> {
    targets: Vec<(E, RevealTarget)>,
}

impl<E: PartialEq> RevealSet<E> {
    pub fn new(elements: impl IntoIterator<Item = E>) -> Self {
        Self {
            targets: elements
                .into_iter()
                .map(|element| (element, RevealTarget::default()))
                .collect(),
        }
    }

    /// Record that `element` intersected. True when it must be revealed now.
    pub fn intersected(&mut self, element: &E) -> bool {
        self.targets
            .iter_mut()
            .find(|(candidate, _)| candidate == element)
            .map(|(_, target)| target.reveal())
            .unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|(_, target)| target.is_revealed())
            .count()
    }
}

pub struct RevealObserver {
    _watch: VisibilityWatch,
}

impl RevealObserver {
    pub fn observe(elements: Vec<Element>, config: &SiteConfig) -> Result<Self, SiteError> {
        let mut targets = RevealSet::new(elements.iter().cloned());
        let revealed_class = config.revealed_class;

        let watch = VisibilityWatch::new(
            WatchOptions {
                threshold: Some(REVEAL_THRESHOLD),
                root_margin: Some(REVEAL_ROOT_MARGIN),
            },
            move |entry, observer| {
                if !entry.is_intersecting() {
                    return;
                }
                let element = entry.target();
                if targets.intersected(&element) {
                    let _ = element.class_list().add_1(revealed_class);
                    observer.unobserve(&element);
                }
            },
        )?;

        for element in &elements {
            watch.observe(element);
        }
        log::debug!("Watching {} elements for reveal", elements.len());

        Ok(Self { _watch: watch })
    }
}
