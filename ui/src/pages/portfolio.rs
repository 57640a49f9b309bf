use chrono::Datelike;
use leptos::leptos_dom::logging::{console_error, console_log};
use leptos::prelude::*;

use crate::components::head::{PageHead, PageMeta};
use crate::components::nav_bar::NavBar;
use crate::components::project_card::{FallbackImg, ProjectCard};
use crate::content::{ContentModel, PROFILE_FALLBACK_IMAGE, Project, Skill, SocialLink};
use crate::nav::{ActiveSection, DomScroller, PageNavigator, ScrollSpy, SpyGuard, SpyOptions};
use crate::sections::Section;

const AVATAR_RING: &str =
    "background: linear-gradient(135deg, #00FFA4 0%, #A668FF 100%); display: inline-block;";

/// Attaches the browser observer once the sections are in the DOM and
/// releases it when the owning view is torn down.
fn use_scroll_spy(spy: ScrollSpy) {
    let guard = StoredValue::new_local(None::<SpyGuard>);

    Effect::new(move |_| {
        if guard.with_value(|g| g.is_some()) {
            return;
        }
        match SpyGuard::attach(&spy) {
            Ok(g) => {
                console_log(&format!("scroll spy watching {} sections", g.watched()));
                guard.set_value(Some(g));
            }
            Err(e) => console_error(&format!("scroll spy unavailable: {e:#}")),
        }
    });

    on_cleanup(move || {
        guard.try_update_value(|g| g.take());
    });
}

#[component]
fn Avatar(image: String, alt: &'static str, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class="p-1 rounded-full" style=AVATAR_RING>
            <FallbackImg src=image alt=alt.to_owned() fallback=PROFILE_FALLBACK_IMAGE class=class/>
        </div>
    }
}

#[component]
fn HomeSection(name: String, job_title: String, image: String, nav: PageNavigator) -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center bg-gradient-to-r from-indigo-500 to-purple-600 text-white p-8"
        >
            <div class="text-center max-w-4xl">
                <div class="flex justify-center mb-6">
                    <Avatar image alt="Profile" class="w-36 h-36 rounded-full border-4 border-white shadow-lg object-cover"/>
                </div>
                <h1 class="text-5xl font-extrabold mb-4 leading-tight">
                    "Hi, I'm " <span class="text-yellow-300">{ name }</span>
                </h1>
                <p class="text-xl mb-8">
                    "A passionate " <span class="font-semibold">{ job_title }</span>
                    " building modern and responsive web applications."
                </p>
                <button
                    class="bg-white text-indigo-600 hover:bg-indigo-100 px-8 py-3 rounded-full text-lg font-semibold shadow-lg transform transition-transform duration-300 hover:scale-105"
                    on:click=move |_| nav.navigate(Section::Projects.id())
                >
                    "View My Work"
                </button>
            </div>
        </section>
    }
}

#[component]
fn AboutSection(paragraphs: Vec<String>, image: String) -> impl IntoView {
    let paragraphs = paragraphs
        .into_iter()
        .map(|p| view! { <p class="text-lg leading-relaxed mb-4">{ p }</p> })
        .collect_view();

    view! {
        <section id=Section::About.id() class="py-20 px-8 bg-white">
            <div class="container mx-auto max-w-4xl">
                <h2 class="text-4xl font-bold text-center text-gray-900 mb-12">"About Me"</h2>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>{ paragraphs }</div>
                    <div class="flex justify-center">
                        <Avatar image alt="About Me" class="w-60 h-60 rounded-full border-4 border-white shadow-xl object-cover"/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-8 bg-gray-100">
            <div class="container mx-auto max-w-4xl">
                <h2 class="text-4xl font-bold text-center text-gray-900 mb-12">"My Skills"</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8">
                    <For
                        each=move || skills.clone()
                        key=|s: &Skill| s.name.clone()
                        children=move |s: Skill| {
                            let icon = format!(
                                "devicon-{} mx-auto text-5xl mb-2 {}",
                                s.icon,
                                s.color.as_deref().unwrap_or("text-gray-700")
                            );
                            view! {
                                <div class="bg-white p-6 rounded-lg shadow-md text-center transform transition-transform duration-300 hover:scale-105 hover:shadow-lg">
                                    <i class=icon></i>
                                    <p class="text-xl font-semibold text-indigo-700">{ s.name }</p>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-8 bg-white">
            <div class="container mx-auto max-w-4xl">
                <h2 class="text-4xl font-bold text-center text-gray-900 mb-12">"My Projects"</h2>
                <div class="grid md:grid-cols-2 gap-10">
                    // titles may repeat, key on position
                    <For
                        each=move || projects.clone().into_iter().enumerate()
                        key=|(i, _): &(usize, Project)| *i
                        children=move |(_, project): (usize, Project)| view! { <ProjectCard project/> }
                    />
                </div>
            </div>
        </section>
    }
}

const INPUT_CLASS: &str = "mt-1 block w-full px-4 py-2 border border-gray-300 rounded-md shadow-sm focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm";
const LABEL_CLASS: &str = "block text-left text-sm font-medium text-gray-700";

#[component]
fn ContactSection(social: Vec<SocialLink>) -> impl IntoView {
    let links = social
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-white hover:text-yellow-300 transition-colors duration-300 text-3xl"
                    aria-label=link.kind.label()
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="currentColor">
                        <path d=link.kind.svg_path()/>
                    </svg>
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Contact.id()
            class="py-20 px-8 bg-gradient-to-r from-purple-600 to-indigo-500 text-white"
        >
            <div class="container mx-auto max-w-2xl text-center">
                <h2 class="text-4xl font-bold mb-8">"Get In Touch"</h2>
                <p class="text-lg mb-8">
                    "Have a question or want to collaborate? Feel free to reach out!"
                </p>
                <div class="bg-white p-8 rounded-lg shadow-xl text-gray-800">
                    <form
                        class="space-y-6"
                        on:submit=move |ev| {
                            // no backend to send to
                            ev.prevent_default();
                            console_log("contact form submit ignored");
                        }
                    >
                        <div>
                            <label for="name" class=LABEL_CLASS>"Name"</label>
                            <input type="text" id="name" name="name" class=INPUT_CLASS placeholder="Your Name"/>
                        </div>
                        <div>
                            <label for="email" class=LABEL_CLASS>"Email"</label>
                            <input type="email" id="email" name="email" class=INPUT_CLASS placeholder="you@example.com"/>
                        </div>
                        <div>
                            <label for="message" class=LABEL_CLASS>"Message"</label>
                            <textarea id="message" name="message" rows="5" class=INPUT_CLASS placeholder="Your message here..."></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full bg-indigo-600 text-white py-3 rounded-md font-semibold text-lg hover:bg-indigo-700 transition-colors duration-300 shadow-md transform hover:scale-105"
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
                <div class="mt-12 text-center">
                    <p class="text-lg mb-4">"Find me on social media:"</p>
                    <div class="flex justify-center space-x-6">{ links }</div>
                </div>
            </div>
        </section>
    }
}

pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[component]
fn Footer(name: String) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-gray-800 text-white py-8 text-center rounded-t-lg">
            <div class="container mx-auto px-4">
                <p>{ copyright_line(year, &name) }</p>
                <p class="mt-2 text-sm">"Built with Rust, Leptos and Tailwind CSS"</p>
            </div>
        </footer>
    }
}

/// The whole single-page site for one profile.
#[component]
pub fn Portfolio(content: ContentModel) -> impl IntoView {
    let active = ActiveSection::new();
    let nav = PageNavigator::new(active, DomScroller);

    use_scroll_spy(ScrollSpy::new(active, SpyOptions::default()));

    let meta = PageMeta::from_content(&content);
    let ContentModel {
        name,
        brand,
        job_title,
        image,
        about,
        social,
        skills,
        projects,
        ..
    } = content;

    view! {
        <PageHead meta/>
        <div class="min-h-screen font-inter antialiased bg-gray-50 text-gray-800">
            <NavBar nav brand/>
            <main class="pt-20">
                <HomeSection name=name.clone() job_title image=image.clone() nav/>
                <AboutSection paragraphs=about image/>
                <SkillsSection skills/>
                <ProjectsSection projects/>
                <ContactSection social/>
            </main>
            <Footer name/>
        </div>
    }
}
