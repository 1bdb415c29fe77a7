use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Dialog shell shared by the auth and waitlist modals
#[component]
pub fn BaseModal(
    /// Header title
    title: Signal<String>,
    /// Optional line under the title
    #[prop(optional)]
    subtitle: Option<Signal<String>>,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
    /// Maximum width class
    #[prop(default = "max-w-md")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4 transition-opacity duration-200"
                } else {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4 opacity-0 pointer-events-none transition-opacity duration-200"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    let on_backdrop = e
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .is_some_and(|element| element.class_list().contains("modal-backdrop"));
                    if on_backdrop {
                        on_close.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div
                class=format!("w-full {} max-h-[90vh] overflow-y-auto rounded-2xl bg-white shadow-2xl", max_width)
                role="dialog"
                aria-modal="true"
            >
                <div class="flex items-start justify-between px-6 pt-6">
                    <div>
                        <h3 class="text-xl font-bold text-gray-900">{move || title.get()}</h3>
                        {subtitle.map(|s| view! { <p class="mt-1 text-sm text-gray-500">{move || s.get()}</p> })}
                    </div>
                    <button
                        type="button"
                        class="rounded-md p-1 text-gray-400 hover:text-gray-700 transition-colors"
                        on:click=move |_| on_close.run(())
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
