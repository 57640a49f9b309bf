use leptos::leptos_dom::logging::console_warn;

use super::ActiveSection;
use super::dom::DomScroller;
use crate::sections::Section;

/// Something that can bring a section into view.
pub trait ScrollTarget {
    /// Starts a smooth scroll to the element with `id`.
    /// Returns false when no such element is in the document.
    fn scroll_to(&self, id: &str) -> bool;
}

/// Handles "go to section" requests from links and buttons.
#[derive(Copy, Clone)]
pub struct Navigator<S = DomScroller> {
    active: ActiveSection,
    scroller: S,
}

pub type PageNavigator = Navigator<DomScroller>;

impl<S: ScrollTarget> Navigator<S> {
    pub fn new(active: ActiveSection, scroller: S) -> Self {
        Self { active, scroller }
    }

    pub fn active(&self) -> ActiveSection {
        self.active
    }

    /// Scrolls to `id` and marks it active right away, without waiting for the
    /// scroll spy to see it. Unknown ids are ignored.
    pub fn navigate(&self, id: &str) {
        let Some(section) = Section::from_id(id) else {
            console_warn(&format!("ignoring navigation to unknown section {id:?}"));
            return;
        };

        if !self.scroller.scroll_to(section.id()) {
            return;
        }

        self.active.set(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::state::tests::in_owner;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeScroller {
        missing: Vec<&'static str>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollTarget for FakeScroller {
        fn scroll_to(&self, id: &str) -> bool {
            if self.missing.contains(&id) {
                return false;
            }
            self.calls.borrow_mut().push(id.to_owned());
            true
        }
    }

    #[test]
    fn every_section_becomes_active_immediately() {
        in_owner(|| {
            let active = ActiveSection::new();
            let scroller = FakeScroller::default();
            let nav = Navigator::new(active, scroller.clone());

            for s in Section::ALL.iter().rev() {
                nav.navigate(s.id());
                assert_eq!(active.get_untracked(), *s);
            }

            let calls = scroller.calls.borrow();
            assert_eq!(calls.first().map(String::as_str), Some("contact"));
            assert_eq!(calls.len(), Section::ALL.len());
        });
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        in_owner(|| {
            let active = ActiveSection::new();
            let scroller = FakeScroller::default();
            let nav = Navigator::new(active, scroller.clone());

            nav.navigate("about");
            nav.navigate("blog");
            nav.navigate("");

            assert_eq!(active.get_untracked(), Section::About);
            assert_eq!(scroller.calls.borrow().as_slice(), ["about"]);
        });
    }

    #[test]
    fn section_missing_from_document_is_a_no_op() {
        in_owner(|| {
            let active = ActiveSection::new();
            let scroller = FakeScroller {
                missing: vec!["skills"],
                ..Default::default()
            };
            let nav = Navigator::new(active, scroller.clone());

            nav.navigate("skills");

            assert_eq!(active.get_untracked(), Section::Home);
            assert!(scroller.calls.borrow().is_empty());
        });
    }

    #[test]
    fn navigator_and_spy_write_the_same_state() {
        use crate::nav::{Crossing, ScrollSpy, SpyOptions};

        in_owner(|| {
            let active = ActiveSection::new();
            let nav = Navigator::new(active, FakeScroller::default());
            let spy = ScrollSpy::new(active, SpyOptions::default());
            let _watch = spy.watch();

            nav.navigate("contact");
            assert_eq!(nav.active().get_untracked(), Section::Contact);

            spy.on_crossings(&[Crossing::new("projects", 0.8, true)]);
            assert_eq!(nav.active().get_untracked(), Section::Projects);
        });
    }
}
