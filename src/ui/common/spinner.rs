use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Spinning loader icon sized for button labels
#[component]
pub fn InlineSpinner(
    #[prop(default = "w-4 h-4")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class="inline-flex animate-spin" role="status" aria-label="Loading">
            <Icon name=icons::LOADER class=class />
        </span>
    }
}

/// Submit button that swaps its label for a spinner while `loading`
#[component]
pub fn LoadingButton(
    /// Whether a request is in flight
    loading: Signal<bool>,
    /// Label when idle
    text: Signal<String>,
    /// Label while loading
    loading_text: Signal<String>,
    /// Extra disable condition on top of `loading`
    #[prop(optional)]
    disabled: Option<Signal<bool>>,
    #[prop(default = "w-full bg-emerald-500 hover:bg-emerald-600 text-white font-semibold")]
    class: &'static str,
) -> impl IntoView {
    let is_disabled = move || loading.get() || disabled.map(|d| d.get()).unwrap_or(false);

    view! {
        <button
            type="submit"
            class=format!("btn-base {}", class)
            disabled=is_disabled
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{move || text.get()}</span> }
            >
                <span class="flex items-center justify-center gap-2">
                    <InlineSpinner />
                    <span>{move || loading_text.get()}</span>
                </span>
            </Show>
        </button>
    }
}
