use leptos::prelude::*;

use crate::core::content::CallToAction;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

/// Closing call to action, anchored at `#waitlist`
#[component]
pub fn WaitlistSection(on_join: Callback<()>, tracks_status: bool) -> impl IntoView {
    let session = use_session_context();
    let cta = move || CallToAction::for_status(tracks_status && session.is_on_waitlist());

    view! {
        <section id="waitlist" class="py-24 bg-gradient-to-br from-emerald-500 to-blue-500">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="bg-white/10 backdrop-blur-md rounded-3xl p-12 border border-white/20">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">{move || cta().heading}</h2>
                    <p class="text-xl text-white/90 mb-8 max-w-2xl mx-auto">{move || cta().body}</p>

                    <div class="flex justify-center mb-8">
                        <button
                            class="btn-base btn-lg bg-white text-emerald-600 hover:bg-gray-100 shadow-lg hover:shadow-xl"
                            on:click=move |_| on_join.run(())
                        >
                            {move || cta().button}
                        </button>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 text-white/80">
                        {move || cta().perks.into_iter().map(|perk| view! {
                            <div class="flex items-center justify-center gap-2">
                                <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 invert" />
                                <span>{perk}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
