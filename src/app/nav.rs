use leptos::{ev::MouseEvent, prelude::*};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::section::Section;

/// Whether the mobile drawer is open.
#[derive(Clone, Copy)]
pub struct MenuState(pub RwSignal<bool>);

impl MenuState {
    pub fn provide() {
        provide_context(MenuState(RwSignal::new(false)));
    }
}

/// Smooth-scrolls the section's top to the top of the viewport. Returns
/// `false` without scrolling if the section isn't in the document.
pub fn scroll_to(section: Section) -> bool {
    let el = if let Some(el) = document().get_element_by_id(section.id()) {
        el
    } else {
        log::debug!("no element for section {}", section.id());
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[component]
pub fn SectionLink(
    section: Section,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let menu = use_context::<MenuState>();
    view! {
        <a
            href=section.href()
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                if scroll_to(section) {
                    if let Some(MenuState(open)) = menu {
                        open.set(false);
                    }
                }
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn NavBar(name: &'static str) -> impl IntoView {
    let MenuState(open) = expect_context::<MenuState>();

    let bar = move |when_open: &'static str| {
        move || {
            if open.get() {
                format!("block w-6 h-0.5 bg-white transition {when_open}")
            } else {
                "block w-6 h-0.5 bg-white transition".to_string()
            }
        }
    };

    view! {
        <nav class="fixed top-0 w-full bg-white/10 backdrop-blur-md border-b border-white/10 shadow-lg z-50">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <div class="text-xl font-bold bg-gradient-to-r from-emerald-400 to-sky-400 bg-clip-text text-transparent">
                    {name}
                </div>
                <ul class="hidden md:flex gap-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <SectionLink
                                        section
                                        class="nav-link text-white/80 hover:text-emerald-400 transition relative py-1"
                                    >
                                        {section.label()}
                                    </SectionLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    aria-label="Toggle menu"
                    class="md:hidden flex flex-col gap-1.5 z-50"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    <span class=bar("translate-y-2 rotate-45") />
                    <span class=bar("opacity-0") />
                    <span class=bar("-translate-y-2 -rotate-45") />
                </button>
            </div>
            <div class=move || {
                let slide = if open.get() { "translate-x-0" } else { "-translate-x-full" };
                format!(
                    "md:hidden fixed top-0 left-0 h-screen w-2/3 bg-black/95 backdrop-blur-md border-r border-white/10 transition-transform duration-300 {slide}",
                )
            }>
                <div class="px-6 pt-24 flex flex-col gap-6">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <SectionLink
                                    section
                                    class="text-lg text-white/80 hover:text-emerald-400 transition"
                                >
                                    {section.label()}
                                </SectionLink>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
