use leptos::prelude::*;

use crate::nav::PageNavigator;
use crate::sections::Section;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub section: Section,
    pub active: bool,
}

/// One entry per section, in document order, with exactly one marked active.
pub fn nav_items(active: Section) -> Vec<NavItem> {
    Section::ALL
        .into_iter()
        .map(|section| NavItem {
            section,
            active: section == active,
        })
        .collect()
}

pub fn link_class(active: bool) -> &'static str {
    if active {
        "text-lg font-medium px-3 py-2 rounded-md transition-colors duration-300 bg-indigo-600 text-white shadow-md"
    } else {
        "text-lg font-medium px-3 py-2 rounded-md transition-colors duration-300 text-gray-600 hover:bg-gray-100 hover:text-indigo-600"
    }
}

#[component]
fn NavLink(item: NavItem, nav: PageNavigator, menu_open: RwSignal<bool>) -> impl IntoView {
    let section = item.section;

    view! {
        <a
            href=section.href()
            class=link_class(item.active)
            aria-current=item.active.then_some("page")
            on:click=move |ev| {
                // keep the smooth scroll, skip the instant hash jump
                ev.prevent_default();
                nav.navigate(section.id());
                menu_open.set(false);
            }
        >
            { section.label() }
        </a>
    }
}

#[component]
pub fn NavBar(nav: PageNavigator, brand: String) -> impl IntoView {
    let active = nav.active();
    let menu_open = RwSignal::new(false);

    let links = move || {
        nav_items(active.get())
            .into_iter()
            .map(|item| view! { <NavLink item nav menu_open/> })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white shadow-md rounded-b-lg">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <a
                    href=Section::Home.href()
                    class="text-2xl font-bold text-indigo-600 hover:text-indigo-800 transition-colors duration-300"
                    on:click=move |ev| {
                        ev.prevent_default();
                        nav.navigate(Section::Home.id());
                    }
                >
                    { brand }
                </a>

                <div class="hidden md:flex space-x-8">{ links }</div>

                <div class="md:hidden">
                    <button
                        class="text-gray-600 focus:outline-none"
                        aria-label="Toggle navigation"
                        aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                        on:click=move |_| menu_open.update(|o| *o = !*o)
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path>
                        </svg>
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-2 px-4 pb-4">{ links }</div>
            </Show>
        </nav>
    }
}
