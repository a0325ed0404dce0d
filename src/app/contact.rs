use leptos::{either::*, html, prelude::*};
use web_sys::{Event, SubmitEvent};

use super::reveal::use_reveal;
use crate::{
    contact::{ContactForm, Field, FormStatus, LocalContactService},
    content::{Profile, SocialLink},
    motion::RevealKey,
    section::Section,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-white/10 border border-white/20 text-white focus:outline-none focus:ring-2 focus:ring-emerald-400/40 focus:border-emerald-400";

#[component]
pub fn ContactSection(profile: &'static Profile, socials: &'static [SocialLink]) -> impl IntoView {
    let reveal = use_reveal();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = reveal.revealed(RevealKey::Contact);
    Effect::new(move |_| {
        if let Some(el) = section_ref.get() {
            reveal.observe(&el);
        }
    });

    view! {
        <section
            id=Section::Contact.id()
            node_ref=section_ref
            data-reveal=RevealKey::Contact.attr()
            class="relative mt-8 py-24 px-6 bg-gradient-to-br from-neutral-900 to-black overflow-hidden fade-in"
            class:visible=move || visible.get()
        >
            <div class="contact-glow pointer-events-none absolute -inset-1 opacity-30" />
            <div class="relative max-w-2xl mx-auto text-center">
                <h2 class="section-title mb-4">{profile.contact_heading.clone()}</h2>
                <p class="text-white/80 mb-8">{profile.contact_blurb.clone()}</p>
                <ContactFormView />
                <div class="flex items-center justify-center gap-6 mt-10">
                    {socials
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href.clone()
                                    title=s.title.clone()
                                    class="w-12 h-12 rounded-full bg-white/10 border border-white/10 backdrop-blur-md flex items-center justify-center text-white hover:bg-emerald-400 hover:text-black hover:shadow-lg hover:-translate-y-1 transition"
                                >
                                    {s.label.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let status = Memo::new(move |_| form.with(|f| f.status()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let ticket = form.write().submit(&LocalContactService);
        if let Some(prev) = pending.get_value() {
            prev.clear();
        }
        let reset = move || {
            form.update(|f| {
                f.revert(ticket);
            })
        };
        match set_timeout_with_handle(reset, ticket.delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => log::warn!("couldn't schedule form status reset: {e:?}"),
        }
    };
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    view! {
        <form on:submit=on_submit class="text-left" novalidate=true>
            <FormField form field=Field::Name label="Name" />
            <FormField form field=Field::Email label="Email" />
            <FormField form field=Field::Message label="Message" />
            <button
                type="submit"
                class="inline-flex items-center justify-center px-8 py-3 rounded-full font-semibold text-black bg-gradient-to-r from-emerald-400 to-sky-400 shadow-lg hover:shadow-emerald-500/30 transition-transform hover:-translate-y-1"
            >
                "Send Message"
            </button>
            {move || match status.get() {
                FormStatus::Idle => EitherOf3::A(()),
                FormStatus::Success => {
                    EitherOf3::B(
                        view! {
                            <div class="mt-4 text-center text-emerald-400">
                                "Thank you for your message! I'll get back to you soon."
                            </div>
                        },
                    )
                }
                FormStatus::Error => {
                    EitherOf3::C(
                        view! {
                            <div class="mt-4 text-center text-rose-400">
                                "Please fill in all fields before sending."
                            </div>
                        },
                    )
                }
            }}
        </form>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field, label: &'static str) -> impl IntoView {
    let id = field.to_string();
    let input_type = if field == Field::Email { "email" } else { "text" };
    let value = move || form.with(|f| f.fields.get(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set_field(field, event_target_value(&ev)));

    view! {
        <div class="mb-6">
            <label for=id.clone() class="block mb-2 text-emerald-400 font-medium">
                {label}
            </label>
            {match field {
                Field::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                id=id
                                aria-required="true"
                                class=format!("{INPUT_CLASS} min-h-[150px]")
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
                Field::Name | Field::Email => {
                    Either::Right(
                        view! {
                            <input
                                id=id
                                type=input_type
                                aria-required="true"
                                class=INPUT_CLASS
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
            }}
        </div>
    }
}
