use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::{
    contact::{submit, Acknowledgment, ContactForm, RelayConfig},
    relay::HttpRelay,
    site::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, CONTACT_PHONE_URI, LINKEDIN_URL},
};

use super::reveal::RevealOnce;

const FIELD_CLASS: &str = "mt-2 p-3 rounded-md bg-gray-800 border border-gray-600 text-white focus:outline-none focus:ring-2 focus:ring-indigo-500";
const LABEL_CLASS: &str = "flex flex-col text-white font-semibold";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="flex flex-col min-h-screen w-full bg-gray-500 px-4 sm:px-6 py-8 gap-8">
            <RevealOnce>
                <h2 class="text-3xl md:text-4xl font-bold mb-4 text-center text-black">
                    "Contact Me"
                </h2>
            </RevealOnce>
            <div class="flex flex-col md:flex-row w-full gap-8 px-4 md:px-0 md:ml-[80px]">
                <ContactDetails />
                <div class="md:w-2/3 max-w-xl w-full mx-auto md:mx-0 md:ml-[80px]">
                    <ContactFormView />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="md:w-1/3 text-white flex flex-col gap-8 items-center justify-center mx-auto md:mx-0">
            <h3 class="text-2xl md:text-3xl font-semibold mb-4 text-center">
                "Ready to discuss your project?"
            </h3>
            <p class="text-base md:text-lg leading-relaxed mb-4 max-w-md text-center px-4 md:px-0">
                "I'm currently open to new opportunities and excited to take on fresh projects. Please don't hesitate to reach out to discuss potential collaborations."
            </p>
            <div class="flex flex-col gap-6 text-lg max-w-md text-center mx-auto md:mx-0">
                <div class="flex items-center justify-center gap-4">
                    <span aria-hidden="true">"✉"</span>
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="underline hover:text-indigo-300 break-words"
                    >
                        {CONTACT_EMAIL}
                    </a>
                </div>
                <div class="flex items-center justify-center gap-4">
                    <span aria-hidden="true">"☎"</span>
                    <a href=CONTACT_PHONE_URI class="underline hover:text-indigo-300 break-words">
                        {CONTACT_PHONE}
                    </a>
                </div>
                <div class="flex items-center justify-center gap-4">
                    <span aria-hidden="true">"📍"</span>
                    <span>{CONTACT_LOCATION}</span>
                </div>
                <div class="flex items-center justify-center gap-4">
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="underline hover:text-indigo-300 flex items-center gap-2 justify-center text-2xl"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
        spawn_local(async move {
            let config = RelayConfig::from_build_env();
            let relay = HttpRelay::new(&config);
            let outcome = submit(&relay, &config, &draft).await;
            let ack = set_form
                .try_update(|form| form.settle(&outcome))
                .unwrap_or(Acknowledgment::Failed);
            if let Err(e) = window().alert_with_message(ack.message()) {
                log::warn!("couldn't show submission alert: {e:?}");
            }
        });
    };

    view! {
        <form class="flex flex-col gap-6 bg-gray-700 p-6 rounded-lg shadow-lg" on:submit=on_submit>
            <label class=LABEL_CLASS>
                "Name"
                <input
                    type="text"
                    name="user_name"
                    required=true
                    placeholder="Your full name"
                    class=FIELD_CLASS
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.name = value);
                    }
                />
            </label>
            <label class=LABEL_CLASS>
                "Email"
                <input
                    type="email"
                    name="user_email"
                    required=true
                    placeholder="your.email@example.com"
                    class=FIELD_CLASS
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.email = value);
                    }
                />
            </label>
            <label class=LABEL_CLASS>
                "Message"
                <textarea
                    name="message"
                    rows="5"
                    required=true
                    placeholder="Write your message here..."
                    class=FIELD_CLASS
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.message = value);
                    }
                ></textarea>
            </label>
            <button
                type="submit"
                class="bg-indigo-600 hover:bg-indigo-700 text-white font-bold py-3 rounded-md transition-colors duration-300"
            >
                "Send Message"
            </button>
        </form>
    }
}
