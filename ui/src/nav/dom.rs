use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::Element;
use web_sys::IntersectionObserver;
use web_sys::IntersectionObserverEntry;
use web_sys::IntersectionObserverInit;

use super::navigator::ScrollTarget;
use super::scroll_spy::{Crossing, ScrollSpy, Watch};

fn js_err(v: JsValue) -> anyhow::Error {
    anyhow!("{v:?}")
}

fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .context("no window")?
        .document()
        .context("no document")
}

/// Smooth-scrolls real DOM elements into view.
#[derive(Copy, Clone, Default)]
pub struct DomScroller;

impl ScrollTarget for DomScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(el) = document().ok().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };

        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A browser `IntersectionObserver` watching every `section[id]` on the page.
///
/// Dropping the guard unobserves every section, disconnects the observer and
/// detaches the spy.
pub struct SpyGuard {
    observer: IntersectionObserver,
    targets: Vec<Element>,
    _watch: Watch,
    _callback: EntriesCallback,
}

impl SpyGuard {
    pub fn attach(spy: &ScrollSpy) -> Result<Self> {
        let handler = spy.clone();
        let callback: EntriesCallback =
            Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|e| {
                        Crossing::new(e.target().id(), e.intersection_ratio(), e.is_intersecting())
                    })
                    .collect::<Vec<_>>();
                handler.on_crossings(&batch);
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(spy.options().threshold));
        init.set_root_margin(&spy.options().root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err)
                .context("creating IntersectionObserver")?;

        // from here on any early return drops the guard and releases what was observed
        let mut guard = SpyGuard {
            observer,
            targets: Vec::new(),
            _watch: spy.watch(),
            _callback: callback,
        };

        let nodes = document()?
            .query_selector_all("section[id]")
            .map_err(js_err)
            .context("querying sections")?;

        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                guard.observer.observe(&el);
                guard.targets.push(el);
            }
        }

        Ok(guard)
    }

    pub fn watched(&self) -> usize {
        self.targets.len()
    }
}

impl Drop for SpyGuard {
    fn drop(&mut self) {
        for el in &self.targets {
            self.observer.unobserve(el);
        }
        self.observer.disconnect();
    }
}
