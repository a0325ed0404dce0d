use leptos::{html, prelude::*};

use super::{reveal::use_reveal, tilt::TiltCard};
use crate::{
    content::Skill,
    motion::{skill_bar_schedule, RevealKey},
    section::Section,
};

#[component]
pub fn SkillsSection(skills: &'static [Skill]) -> impl IntoView {
    let reveal = use_reveal();
    let section_ref = NodeRef::<html::Section>::new();
    let widths = skills.iter().map(|_| RwSignal::new(0u8)).collect::<Vec<_>>();
    let pending = StoredValue::new(Vec::<TimeoutHandle>::new());

    Effect::new(move |_| {
        if let Some(el) = section_ref.get() {
            reveal.observe(&el);
        }
    });

    let shown = reveal.revealed(RevealKey::Skills);
    let bars = widths.clone();
    Effect::watch(
        move || shown.get(),
        move |shown, _, _| {
            if !*shown {
                return;
            }
            for anim in skill_bar_schedule(skills) {
                let width = if let Some(w) = bars.get(anim.index) {
                    *w
                } else {
                    continue;
                };
                match set_timeout_with_handle(move || width.set(anim.width), anim.delay) {
                    Ok(handle) => pending.update_value(|p| p.push(handle)),
                    Err(e) => {
                        log::warn!("couldn't schedule skill bar {}: {e:?}", anim.index);
                        width.set(anim.width);
                    }
                }
            }
        },
        false,
    );
    // bars that haven't started yet shouldn't outlive the page
    on_cleanup(move || {
        pending.with_value(|p| p.iter().for_each(|h| h.clear()));
    });

    view! {
        <section
            id=Section::Skills.id()
            node_ref=section_ref
            data-reveal=RevealKey::Skills.attr()
            class="max-w-6xl mx-auto px-6 py-24"
        >
            <h2 class="section-title">"Skills & Expertise"</h2>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                {skills
                    .iter()
                    .zip(widths)
                    .map(|(skill, width)| {
                        view! {
                            <TiltCard class="group bg-white/10 border border-white/10 rounded-xl p-6 backdrop-blur-md transition-transform hover:-translate-y-2 hover:shadow-xl hover:border-emerald-400/30">
                                <h3 class="text-emerald-400 font-semibold mb-3">
                                    {skill.name.clone()}
                                </h3>
                                <div class="h-2 rounded bg-white/10 overflow-hidden">
                                    <div
                                        class="skill-level h-full rounded bg-gradient-to-r from-emerald-400 to-sky-400 transition-all duration-1000"
                                        style:width=move || format!("{}%", width.get())
                                    />
                                </div>
                            </TiltCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
