use leptos::prelude::*;

use super::tilt::TiltCard;
use crate::{
    content::{filter_projects, Project, ProjectFilter},
    motion::RevealKey,
    section::Section,
};

#[component]
pub fn PortfolioSection(projects: &'static [Project]) -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);
    let shown = Memo::new(move |_| {
        filter_projects(projects, filter.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <section id=Section::Portfolio.id() class="max-w-6xl mx-auto px-6 py-24">
            <h2 class="section-title">"Featured Projects"</h2>
            <div class="flex flex-wrap items-center justify-center gap-3 mb-10">
                {ProjectFilter::BUTTONS
                    .into_iter()
                    .map(|button| {
                        view! {
                            <button
                                data-filter=button.to_string()
                                on:click=move |_| set_filter(button)
                                class=move || {
                                    if filter.get() == button {
                                        "px-4 py-2 rounded-full border transition bg-gradient-to-r from-emerald-400 to-sky-400 text-black border-transparent shadow-md"
                                    } else {
                                        "px-4 py-2 rounded-full border transition bg-transparent text-white/80 border-white/20 hover:bg-emerald-400/10 hover:border-emerald-400/30"
                                    }
                                }
                            >
                                {button.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                <For
                    each=move || shown.get()
                    key=|project: &Project| project.title.clone()
                    children=move |project: Project| view! { <ProjectCard project /> }
                />
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tags,
        ..
    } = project;
    view! {
        <TiltCard
            class="group bg-white/10 border border-white/10 rounded-xl overflow-hidden backdrop-blur-md transition-transform hover:-translate-y-2 hover:shadow-xl hover:border-emerald-400/30"
            reveal=RevealKey::Project(title.clone())
        >
            <div class="h-48 flex items-center justify-center bg-gradient-to-br from-neutral-900 to-neutral-800 text-white/60">
                <div class="text-center">
                    <div class="mx-auto mb-3">
                        <div class="bg-gray-200 border-2 border-dashed rounded-xl w-16 h-16 mx-auto" />
                    </div>
                    <p>"Project Image"</p>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-emerald-400 font-semibold mb-2">{title}</h3>
                <p class="text-white/80 mb-4">{description}</p>
                <div class="flex flex-wrap gap-2">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="text-sm px-3 py-1 rounded-full bg-emerald-400/10 text-emerald-400 border border-emerald-400/20">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </TiltCard>
    }
}
