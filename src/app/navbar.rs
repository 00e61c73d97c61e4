use leptos::{ev::MouseEvent, prelude::*};

use crate::{
    motion::PendingSlot,
    nav::{NavAction, SidebarEvent, SidebarState},
    site::{GITHUB_URL, NAV_ACTIONS},
};

use super::hooks::use_scroll_samples;

const NAV_SHOWN: &str = "fixed top-0 left-0 z-30 w-full h-[76px] bg-gray-500 border-b border-gray-600 flex items-center px-4 sm:px-6 md:px-8 transition-all duration-300 ease-in-out translate-y-0 opacity-100";
const NAV_HIDDEN: &str = "fixed top-0 left-0 z-30 w-full h-[76px] bg-gray-500 border-b border-gray-600 flex items-center px-4 sm:px-6 md:px-8 transition-all duration-300 ease-in-out -translate-y-full opacity-0 pointer-events-none";
const BUTTON_CLASS: &str = "flex items-center justify-center gap-2 px-3 py-1.5 md:px-4 md:py-2 rounded-md font-semibold shadow-sm whitespace-nowrap bg-black text-white translate-y-2 transition-all duration-150 hover:bg-white hover:text-black hover:scale-105 hover:translate-y-0 active:scale-95";
const SIDEBAR_LINK_CLASS: &str = "flex items-center gap-2 text-white hover:text-indigo-400 focus:outline-none focus:ring-2 focus:ring-indigo-500 rounded px-2 py-1";

#[component]
pub fn Navbar() -> impl IntoView {
    let (visible, set_visible) = signal(true);
    let (sidebar, set_sidebar) = signal(SidebarState::default());
    let dispatch = move |event: SidebarEvent| set_sidebar.maybe_update(|s| s.apply(event));

    use_scroll_samples(move |sample| {
        let show = sample.navbar_visible();
        if visible.get_untracked() != show {
            set_visible.set(show);
        }
    });

    // Escape only closes the sidebar while it is open, so the listener lives exactly that long.
    let escape_listener = StoredValue::new_local(PendingSlot::<WindowListenerHandle>::default());
    let release_escape = move || {
        if let Some(handle) = escape_listener.try_update_value(PendingSlot::take).flatten() {
            handle.remove();
        }
    };
    Effect::watch(
        move || sidebar.with(SidebarState::is_open),
        move |open, _, _| {
            release_escape();
            if !*open {
                return;
            }
            let handle = window_event_listener(leptos::ev::keydown, move |ev| {
                if let Some(event) = SidebarEvent::from_key(&ev.key()) {
                    dispatch(event);
                }
            });
            escape_listener.update_value(|slot| {
                if let Some(stale) = slot.replace(handle) {
                    stale.remove();
                }
            });
        },
        false,
    );
    on_cleanup(release_escape);

    let on_select = Callback::new(move |_: ()| dispatch(SidebarEvent::Select));

    view! {
        <nav class=move || if visible.get() { NAV_SHOWN } else { NAV_HIDDEN }>
            <div class="absolute left-4">
                <a href="/">
                    <img
                        src="/avatar.png"
                        alt="Profile Avatar"
                        width="48"
                        height="48"
                        class="rounded-full border-2 border-gray-300 shadow-sm object-cover cursor-pointer hover:ring-2 hover:ring-blue-400 transition"
                    />
                </a>
            </div>
            <div class="hidden md:flex flex-wrap gap-4 justify-center items-center flex-1 ml-16 md:ml-24">
                {NAV_ACTIONS
                    .iter()
                    .map(|action| view! { <NavLink action=*action class=BUTTON_CLASS /> })
                    .collect_view()}
            </div>
            <div class="hidden md:flex absolute right-4 items-center">
                <a
                    href=GITHUB_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class=BUTTON_CLASS
                    aria-label="GitHub"
                >
                    <i class="devicon-github-original text-xl"></i>
                    <span class="hidden sm:inline text-sm md:text-base">"GitHub"</span>
                </a>
            </div>
            <div class="md:hidden absolute right-4">
                <button
                    on:click=move |_| dispatch(SidebarEvent::Open)
                    aria-label="Open menu"
                    class="p-2 rounded-md bg-black text-white hover:bg-white hover:text-black transition focus:outline-none focus:ring-2 focus:ring-indigo-500"
                >
                    "☰"
                </button>
            </div>
        </nav>
        <Show when=move || sidebar.with(SidebarState::shows_backdrop)>
            <div
                class="fixed inset-0 z-40 bg-black/50 backdrop-fade-in"
                on:click=move |ev: MouseEvent| {
                    let on_backdrop = ev.target() == ev.current_target();
                    dispatch(SidebarEvent::BackdropClick { on_backdrop });
                }
            ></div>
            <div class="fixed top-0 left-0 z-50 h-full w-64 bg-gray-800 p-6 shadow-lg flex flex-col sidebar-slide-in">
                <button
                    on:click=move |_| dispatch(SidebarEvent::Close)
                    aria-label="Close menu"
                    class="self-end p-2 rounded-md text-gray-300 hover:text-white focus:outline-none focus:ring-2 focus:ring-indigo-500"
                >
                    "✕"
                </button>
                <nav class="mt-4 flex flex-col gap-4">
                    {NAV_ACTIONS
                        .iter()
                        .map(|action| {
                            view! { <NavLink action=*action class=SIDEBAR_LINK_CLASS on_select /> }
                        })
                        .collect_view()}
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=format!("mt-4 {SIDEBAR_LINK_CLASS}")
                    >
                        <i class="devicon-github-original"></i>
                        "GitHub"
                    </a>
                </nav>
            </div>
        </Show>
    }
}

#[component]
fn NavLink(
    action: NavAction,
    class: &'static str,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let NavAction {
        label,
        icon,
        target,
    } = action;
    view! {
        <a
            href=target.href()
            target=target.link_target()
            rel=target.link_rel()
            class=class
            on:click=move |_| {
                if let Some(on_select) = on_select {
                    on_select.run(());
                }
            }
        >
            {icon.map(|icon| view! { <i class=icon></i> })}
            <span class="text-sm md:text-base">{label}</span>
        </a>
    }
}
