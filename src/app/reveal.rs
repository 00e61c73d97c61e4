use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::RevealLatch;

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn RevealOnce(children: Children, #[prop(optional)] class: &'static str) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let in_view = use_element_visibility(target);
    let (latch, set_latch) = signal(RevealLatch::once());

    Effect::watch(
        move || in_view.get(),
        move |visible, _, _| {
            set_latch.maybe_update(|latch| {
                let was_shown = latch.is_shown();
                latch.observe(*visible) != was_shown
            });
        },
        true,
    );

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if latch.with(RevealLatch::is_shown) {
                    "reveal-shown"
                } else {
                    "reveal-hidden"
                };
                format!("{class} {state}")
            }
        >
            {children()}
        </div>
    }
}
