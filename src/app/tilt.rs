use leptos::{ev::MouseEvent, html, prelude::*};

use super::reveal::use_reveal;
use crate::motion::{RevealKey, Tilt};

/// Card that leans toward the pointer. With `reveal` set it also fades in
/// the first time it scrolls into view.
#[component]
pub fn TiltCard(
    #[prop(into)] class: String,
    #[prop(optional)] reveal: Option<RevealKey>,
    children: Children,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(String::new());

    let on_move = move |ev: MouseEvent| {
        let card = if let Some(card) = card_ref.get_untracked() {
            card
        } else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let tilt = Tilt::from_pointer(
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
            rect.width(),
            rect.height(),
        );
        set_transform(tilt.transform());
    };

    let reveal_attr = reveal.as_ref().map(|key| key.attr());
    let visible = reveal.map(|key| {
        let ctx = use_reveal();
        Effect::new(move |_| {
            if let Some(el) = card_ref.get() {
                ctx.observe(&el);
            }
        });
        ctx.revealed(key)
    });
    let class = if visible.is_some() {
        format!("{class} fade-in")
    } else {
        class
    };

    view! {
        <div
            node_ref=card_ref
            class=class
            class:visible=move || visible.map(|v| v.get()).unwrap_or(false)
            data-reveal=reveal_attr
            style:transform=move || transform.get()
            on:mousemove=on_move
            on:mouseleave=move |_| set_transform(Tilt::neutral_transform())
        >
            {children()}
        </div>
    }
}
