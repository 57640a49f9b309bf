use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;

use crate::sections::Section;

/// The section currently highlighted in the navigation bar.
///
/// One instance per page view. Readers get it as a prop; only the
/// [`Navigator`](super::Navigator) and the [`ScrollSpy`](super::ScrollSpy)
/// write to it.
#[derive(Copy, Clone)]
pub struct ActiveSection(RwSignal<Section>);

impl ActiveSection {
    pub fn new() -> Self {
        Self(RwSignal::new(Section::first()))
    }

    /// Reactive read, re-runs the surrounding effect/view on change.
    pub fn get(&self) -> Section {
        self.0.get()
    }

    pub fn get_untracked(&self) -> Section {
        self.0.get_untracked()
    }

    pub(crate) fn set(&self, section: Section) {
        // skip the notify when nothing changed, spy batches repeat a lot
        if self.0.get_untracked() != section {
            self.0.set(section);
        }
    }
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new()
    }
}
