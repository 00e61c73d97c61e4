use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    motion::TITLE_INTERVAL,
    site::{OWNER, TITLES},
};

use super::{about::AboutSection, contact::ContactSection, hooks::use_title_rotation};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <HomeSection />
        <AboutSection />
        <ContactSection />
    }
}

#[component]
fn HomeSection() -> impl IntoView {
    let rotation = use_title_rotation(TITLES.len());
    let title_style = format!(
        "--title-interval: {}ms; font-family: 'JetBrains Mono', 'Fira Mono', monospace;",
        TITLE_INTERVAL.as_millis()
    );

    view! {
        <section
            id="home"
            class="flex flex-col md:flex-row min-h-screen w-full bg-gray-500 items-center justify-center px-4 sm:px-6"
        >
            <div class="flex justify-center items-center md:w-1/3 w-full mt-20 mb-8 md:my-0 md:mt-16">
                <img src="/profile.png" alt=OWNER width="400" height="350" class="max-w-full h-auto" />
            </div>
            <div class="flex flex-col justify-center items-center md:items-end md:w-2/3 w-full px-4 py-8 md:px-10 ml-auto text-center md:text-right">
                <span
                    class="font-extrabold mt-10 cursor-pointer name-pulse"
                    style="font-size: 68px; font-family: 'Raleway', Arial, sans-serif;"
                >
                    "I am "
                    {OWNER}
                </span>
                <div class="h-14 mt-6">
                    // a fresh span per index restarts the enter/exit keyframes
                    {move || {
                        let title = rotation.get().current(&TITLES).unwrap_or_default();
                        view! {
                            <span
                                class="block text-xl md:text-4xl font-semibold text-white title-cycle"
                                style=title_style.clone()
                            >
                                {title}
                            </span>
                        }
                    }}
                </div>
                <a
                    href="#contact"
                    class="mt-24 px-6 py-3 rounded-lg font-bold text-base md:text-lg bg-gradient-to-r from-gray-700 to-gray-400 hover:from-indigo-500 hover:to-indigo-700 hover:scale-110 hover:shadow-[0_8px_40px_rgba(99,102,241,0.6)] active:scale-95 transition-all duration-300 cursor-pointer inline-block tracking-tight text-white"
                >
                    "Connect with me"
                </a>
            </div>
        </section>
    }
}
