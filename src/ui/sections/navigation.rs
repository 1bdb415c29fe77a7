use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::content::{BRAND, CallToAction};
use crate::ui::common::InlineSpinner;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::session::use_session_context;

/// Sticky top bar with the account controls
#[component]
pub fn Navigation(
    on_join: Callback<()>,
    /// Whether the copy follows the waitlist flag
    tracks_status: bool,
) -> impl IntoView {
    let session = use_session_context();
    let notifications = use_notifications();

    let reserved = move || tracks_status && session.is_on_waitlist();

    let on_sign_out = move |_| {
        spawn_local(async move {
            session.sign_out().await;
            notifications.info("Signed Out", "You have been signed out.");
        });
    };

    view! {
        <nav class="w-full bg-white/80 backdrop-blur-md border-b border-gray-200 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="flex items-center">
                        <div class="w-8 h-8 bg-gradient-to-r from-emerald-500 to-blue-500 rounded-lg"></div>
                        <span class="ml-2 text-xl font-bold text-gray-900">{BRAND}</span>
                    </a>

                    <div class="flex items-center gap-4">
                        <Show when=move || session.is_loading() || session.is_checking()>
                            <InlineSpinner />
                        </Show>
                        {move || match session.identity() {
                            Some(identity) => view! {
                                <div class="flex items-center gap-3">
                                    <div class="hidden sm:flex items-center gap-2 text-sm text-gray-600">
                                        <Icon name=icons::USER class="w-4 h-4" />
                                        <span>{identity.email}</span>
                                    </div>
                                    <button
                                        class="btn-base btn-outline btn-sm flex items-center gap-2"
                                        on:click=on_sign_out
                                    >
                                        <Icon name=icons::LOG_OUT class="w-4 h-4" />
                                        <span>"Sign Out"</span>
                                    </button>
                                </div>
                            }.into_any(),
                            None => view! {
                                <button
                                    class="btn-base bg-emerald-500 hover:bg-emerald-600 text-white"
                                    disabled=reserved
                                    on:click=move |_| on_join.run(())
                                >
                                    {move || CallToAction::for_status(reserved()).nav_button}
                                </button>
                            }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}
