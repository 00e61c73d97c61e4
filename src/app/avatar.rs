use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::{
    motion::RingSpin,
    ring::RingLayout,
    site::{OWNER, TECH_ICONS},
};

use super::hooks::use_scroll_samples;

/// Avatar image circled by technology glyphs. The ring turns with the visitor's scroll direction.
#[component]
pub fn IconRing() -> impl IntoView {
    let layout = RingLayout::default();
    let spin = StoredValue::new(RingSpin::default());
    let (angle, set_angle) = signal(0.0_f64);

    use_scroll_samples(move |sample| {
        spin.update_value(|spin| {
            if spin.set_direction(sample.direction) {
                log::trace!("icon ring now turning {:?}", sample.direction);
            }
        });
    });

    // stops itself when the component is disposed
    let _frames = use_raf_fn(move |frame: UseRafFnCallbackArgs| {
        if let Some(a) = spin.try_update_value(|spin| spin.advance(frame.delta)) {
            set_angle.set(a);
        }
    });

    let glyphs = TECH_ICONS
        .iter()
        .zip(layout.positions(TECH_ICONS.len()))
        .map(|(icon, pos)| {
            view! {
                <i
                    class=format!("{} absolute cursor-default select-none", icon.class)
                    title=icon.name
                    style=format!(
                        "left: {:.2}px; top: {:.2}px; font-size: {}px; color: {};",
                        pos.left,
                        pos.top,
                        layout.glyph_size,
                        icon.color,
                    )
                ></i>
            }
        })
        .collect_view();

    view! {
        <div
            class="md:w-1/3 flex justify-center items-center mt-20 md:mt-[140px] relative shrink-0"
            style=format!("width: {}px; height: {}px;", layout.width, layout.height)
        >
            <img
                src="/avatar.png"
                alt=OWNER
                width=layout.width.to_string()
                height=layout.height.to_string()
                class="max-w-full h-auto"
            />
            <div
                class="absolute top-0 left-0 w-full h-full pointer-events-none origin-center"
                style=move || format!("transform: rotate({:.3}deg);", angle.get())
            >
                {glyphs}
            </div>
        </div>
    }
}
