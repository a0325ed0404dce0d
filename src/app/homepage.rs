use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};
use leptos_use::use_window_scroll;

use super::{
    contact::ContactSection,
    experience::ExperienceSection,
    nav::{MenuState, NavBar, SectionLink},
    portfolio::PortfolioSection,
    reveal::RevealContext,
    skills::SkillsSection,
};
use crate::{
    content::{Profile, SiteContent, SITE_CONTENT},
    motion::{translate_y, Parallax},
    section::Section,
};

#[component]
pub fn HomePage() -> impl IntoView {
    match &*SITE_CONTENT {
        Ok(content) => Either::Left(view! { <Portfolio content /> }),
        Err(e) => Either::Right(view! { <ContentUnavailable reason=e.to_string() /> }),
    }
}

#[component]
fn Portfolio(content: &'static SiteContent) -> impl IntoView {
    MenuState::provide();
    RevealContext::provide();

    let (_, scroll_y) = use_window_scroll();
    let parallax = Memo::new(move |_| Parallax::at(scroll_y.get()));
    let profile = &content.profile;

    view! {
        <Title text=profile.page_title.clone() />
        <Meta name="description" content=profile.description.clone() />
        <div class="min-h-screen bg-gradient-to-br from-neutral-900 to-black text-white overflow-x-hidden relative">
            <div
                class="parallax-bg fixed inset-0 -z-10 opacity-30"
                style:transform=move || translate_y(parallax.get().background)
            />
            <NavBar name=profile.name.as_str() />
            <section
                id=Section::Home.id()
                class="relative min-h-screen flex items-center justify-center text-center px-6"
                style:transform=move || translate_y(parallax.get().hero)
            >
                <Hero profile />
            </section>
            <About profile />
            <SkillsSection skills=content.skills.as_slice() />
            <ExperienceSection entries=content.experience.as_slice() />
            <PortfolioSection projects=content.projects.as_slice() />
            <ContactSection profile socials=content.socials.as_slice() />
            <footer class="bg-black text-center text-white/60 px-6 py-8">
                <p>{profile.copyright.clone()}</p>
            </footer>
        </div>
    }
}

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="max-w-3xl">
            <h1 class="text-5xl md:text-6xl font-extrabold mb-4 bg-gradient-to-r from-white to-emerald-400 bg-clip-text text-transparent">
                {profile.name.clone()}
            </h1>
            <p class="text-xl md:text-2xl text-white/80 mb-8">{profile.role.clone()}</p>
            <p class="text-base md:text-lg text-white/70 mb-10">{profile.tagline.clone()}</p>
            <SectionLink
                section=Section::Contact
                class="inline-block px-8 py-3 rounded-full font-semibold text-black bg-gradient-to-r from-emerald-400 to-sky-400 shadow-lg hover:shadow-emerald-500/30 transition-transform hover:-translate-y-1"
            >
                "Get In Touch"
            </SectionLink>
        </div>
    }
}

#[component]
fn About(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="max-w-6xl mx-auto px-6 py-24">
            <h2 class="section-title">"About Me"</h2>
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <div class="text-white/80 leading-relaxed space-y-4">
                    {profile
                        .about
                        .iter()
                        .map(|p| view! { <p>{p.clone()}</p> })
                        .collect_view()}
                </div>
                <div class="relative flex items-center justify-center">
                    <div class="w-72 h-96 rounded-2xl bg-gradient-to-br from-emerald-400 to-sky-400 p-1 rotate-3 hover:rotate-0 transition-transform">
                        <div class="w-full h-full rounded-2xl bg-neutral-900 flex items-center justify-center text-white/60">
                            <div class="text-center">
                                <div class="mx-auto mb-4">
                                    <div class="bg-gray-200 border-2 border-dashed rounded-xl w-16 h-16 mx-auto" />
                                </div>
                                <p>"Professional Headshot"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContentUnavailable(reason: String) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-black text-white/80">
            <h1 class="text-2xl font-bold">"This page couldn't be loaded"</h1>
            <pre class="text-rose-400 whitespace-pre-wrap">{reason}</pre>
        </div>
    }
}
