use leptos::prelude::*;

use crate::content::{PROJECT_PLACEHOLDER_IMAGE, Project};

/// Source to try after `failed` did not load. `None` once the fallback itself failed.
pub fn next_src(failed: &str, fallback: &'static str) -> Option<&'static str> {
    (failed != fallback).then_some(fallback)
}

/// `<img>` that swaps to `fallback` on a load error, once.
#[component]
pub fn FallbackImg(
    src: String,
    alt: String,
    fallback: &'static str,
    #[prop(into)] class: String,
) -> impl IntoView {
    let initial = if src.trim().is_empty() { fallback.to_owned() } else { src };
    let current = RwSignal::new(initial);

    let on_error = move |_| {
        if let Some(next) = next_src(&current.get_untracked(), fallback) {
            current.set(next.to_owned());
        }
    };

    view! {
        <img src=move || current.get() alt=alt class=class loading="lazy" on:error=on_error/>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="bg-gray-50 rounded-lg shadow-lg overflow-hidden transform transition-transform duration-300 hover:scale-105 hover:shadow-xl">
            <FallbackImg
                src=project.image_url
                alt=project.title.clone()
                fallback=PROJECT_PLACEHOLDER_IMAGE
                class="w-full h-48 object-cover"
            />
            <div class="p-6">
                <h3 class="text-2xl font-bold text-gray-900 mb-3">{ project.title }</h3>
                <p class="text-gray-700 mb-4">{ project.description }</p>
                <div class="flex space-x-4">
                    <a
                        href=project.live_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 bg-indigo-600 text-white text-center py-2 rounded-md font-semibold hover:bg-indigo-700 transition-colors duration-300"
                    >"Live Demo"</a>
                    <a
                        href=project.github_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 bg-gray-700 text-white text-center py-2 rounded-md font-semibold hover:bg-gray-800 transition-colors duration-300"
                    >"GitHub"</a>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_image_falls_back_once() {
        let first = next_src("https://x.dev/missing.png", PROJECT_PLACEHOLDER_IMAGE);
        assert_eq!(first, Some(PROJECT_PLACEHOLDER_IMAGE));

        // placeholder failing too must not loop
        assert_eq!(next_src(PROJECT_PLACEHOLDER_IMAGE, PROJECT_PLACEHOLDER_IMAGE), None);
    }
}
