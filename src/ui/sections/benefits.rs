use leptos::prelude::*;

use crate::core::content::{BENEFITS, BENEFITS_INTRO};
use crate::ui::icon::Icon;

#[component]
pub fn BenefitsSection() -> impl IntoView {
    view! {
        <section id="benefits" class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">{BENEFITS_INTRO.heading}</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">{BENEFITS_INTRO.lead}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {BENEFITS.iter().map(|benefit| view! {
                        <div class="text-center group">
                            <div class="bg-gradient-to-br from-emerald-500 to-blue-500 w-16 h-16 rounded-2xl flex items-center justify-center mx-auto mb-6 group-hover:scale-110 transition-transform duration-300">
                                <Icon name=benefit.icon class="h-8 w-8 invert" />
                            </div>
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">{benefit.title}</h3>
                            <p class="text-gray-600 leading-relaxed">{benefit.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
