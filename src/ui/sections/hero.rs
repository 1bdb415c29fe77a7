use leptos::prelude::*;

use crate::core::content::{CallToAction, HERO_HEADLINE, HERO_HIGHLIGHTS, HERO_LEAD};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[component]
pub fn Hero(
    on_join: Callback<()>,
    on_learn_more: Callback<()>,
    tracks_status: bool,
) -> impl IntoView {
    let session = use_session_context();
    let cta = move || CallToAction::for_status(tracks_status && session.is_on_waitlist());
    let (headline, highlight) = HERO_HEADLINE;

    view! {
        <section class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-emerald-50 pt-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="max-w-4xl mx-auto">
                    <h1 class="text-5xl md:text-7xl font-bold text-gray-900 mb-6 leading-tight">
                        {headline}
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-emerald-500 to-blue-500">
                            " "{highlight}
                        </span>
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-600 mb-12 max-w-3xl mx-auto leading-relaxed">
                        {HERO_LEAD}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center items-center mb-16">
                        <button
                            class="btn-base btn-lg bg-emerald-500 hover:bg-emerald-600 text-white shadow-lg hover:shadow-xl flex items-center gap-2"
                            on:click=move |_| on_join.run(())
                        >
                            <span>{move || cta().button}</span>
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                        </button>
                        <button
                            class="btn-base btn-lg btn-outline flex items-center gap-2"
                            on:click=move |_| on_learn_more.run(())
                        >
                            <Icon name=icons::PLAY class="w-5 h-5" />
                            <span>"Learn More"</span>
                        </button>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                        {HERO_HIGHLIGHTS.iter().map(|card| view! {
                            <div class="p-6">
                                <div class=format!("w-16 h-16 {} rounded-full flex items-center justify-center mx-auto mb-4", card.tint)>
                                    <span class="text-2xl">{card.emoji}</span>
                                </div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">{card.title}</h3>
                                <p class="text-gray-600">{card.description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
