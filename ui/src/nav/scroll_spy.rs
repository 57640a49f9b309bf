use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use anyhow::ensure;

use super::ActiveSection;
use crate::sections::Section;

/// Visibility threshold and root margin handed to the browser observer.
#[derive(Clone, Debug, PartialEq)]
pub struct SpyOptions {
    /// Fraction of a section that has to be on screen before it counts as active.
    pub threshold: f64,
    pub root_margin: String,
}

impl SpyOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&threshold),
            "scroll-spy threshold must be within 0.0..=1.0, got {threshold}"
        );
        Ok(Self {
            threshold,
            root_margin: root_margin.into(),
        })
    }
}

impl Default for SpyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            root_margin: "0px".into(),
        }
    }
}

/// One intersection entry, as delivered by the browser or built by hand in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Crossing {
    pub target_id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

impl Crossing {
    pub fn new(target_id: impl Into<String>, ratio: f64, intersecting: bool) -> Self {
        Self {
            target_id: target_id.into(),
            ratio,
            intersecting,
        }
    }

    fn activates(&self, threshold: f64) -> Option<Section> {
        if self.intersecting && self.ratio >= threshold {
            Section::from_id(&self.target_id)
        } else {
            None
        }
    }
}

/// Section a batch should activate: the last qualifying entry in notification order.
pub fn pick_active(batch: &[Crossing], threshold: f64) -> Option<Section> {
    batch.iter().rev().find_map(|c| c.activates(threshold))
}

/// Turns visibility batches into active-section updates.
///
/// Batches are ignored unless a [`Watch`] is alive, so nothing reaches the
/// state before mount or after teardown.
#[derive(Clone)]
pub struct ScrollSpy {
    active: ActiveSection,
    options: SpyOptions,
    live: Rc<Cell<bool>>,
}

impl ScrollSpy {
    pub fn new(active: ActiveSection, options: SpyOptions) -> Self {
        Self {
            active,
            options,
            live: Rc::new(Cell::new(false)),
        }
    }

    pub fn options(&self) -> &SpyOptions {
        &self.options
    }

    pub fn is_watching(&self) -> bool {
        self.live.get()
    }

    /// Starts accepting batches until the returned guard is dropped.
    pub fn watch(&self) -> Watch {
        self.live.set(true);
        Watch {
            live: self.live.clone(),
        }
    }

    pub fn on_crossings(&self, batch: &[Crossing]) {
        if !self.live.get() {
            return;
        }
        if let Some(section) = pick_active(batch, self.options.threshold) {
            self.active.set(section);
        }
    }
}

/// Keeps a [`ScrollSpy`] live. Dropping it detaches the spy.
pub struct Watch {
    live: Rc<Cell<bool>>,
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.live.set(false);
    }
}
