use leptos::leptos_dom::logging::console_error;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::content::ContentModel;
use crate::pages::portfolio::Portfolio;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match ContentModel::builtin() {
        Ok(content) => view! { <Portfolio content/> }.into_any(),
        Err(e) => {
            console_error(&format!("{e:#}"));
            view! {
                <main class="min-h-screen flex items-center justify-center p-8">
                    <p class="text-red-600">"This page could not load its profile."</p>
                </main>
            }
            .into_any()
        }
    }
}
