use leptos::{html, prelude::*};

use super::{reveal::use_reveal, tilt::TiltCard};
use crate::{
    content::{is_left, Experience},
    motion::RevealKey,
    section::Section,
};

#[component]
pub fn ExperienceSection(entries: &'static [Experience]) -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="max-w-6xl mx-auto px-6 py-24">
            <h2 class="section-title">"Professional Journey"</h2>
            <div class="relative">
                <div class="hidden md:block absolute left-1/2 -translate-x-1/2 top-0 bottom-0 w-px bg-gradient-to-b from-emerald-400 to-sky-400" />
                <div class="space-y-12">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <TimelineEntry entry left=is_left(index) /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: &'static Experience, left: bool) -> impl IntoView {
    let reveal = use_reveal();
    let entry_ref = NodeRef::<html::Div>::new();
    let key = RevealKey::Experience(entry.key());
    let attr = key.attr();
    let visible = reveal.revealed(key);

    Effect::new(move |_| {
        if let Some(el) = entry_ref.get() {
            reveal.observe(&el);
        }
    });

    let (side, dot) = if left {
        ("md:pr-16 md:text-right md:ml-0 md:mr-auto", "-right-2")
    } else {
        ("md:pl-16 md:ml-auto", "-left-2")
    };

    view! {
        <div
            node_ref=entry_ref
            data-reveal=attr
            class=format!("relative md:w-1/2 px-6 fade-in {side}")
            class:visible=move || visible.get()
        >
            <div class=format!(
                "hidden md:block absolute top-6 w-5 h-5 rounded-full bg-emerald-400 shadow-[0_0_15px] shadow-emerald-400/70 {dot}",
            ) />
            <TiltCard class="bg-white/10 border border-white/10 rounded-xl p-6 backdrop-blur-md transition-transform hover:-translate-y-1 hover:shadow-xl hover:border-emerald-400/30">
                <h3 class="text-emerald-400 font-semibold mb-1">{entry.title.clone()}</h3>
                <p class="text-white/70 text-sm mb-1">{entry.company.clone()}</p>
                <p class="text-white/50 text-sm mb-3">{entry.date.clone()}</p>
                <p class="text-white/80">{entry.description.clone()}</p>
            </TiltCard>
        </div>
    }
}
