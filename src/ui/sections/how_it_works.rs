use leptos::prelude::*;

use crate::core::content::{HOW_IT_WORKS, HOW_IT_WORKS_INTRO};
use crate::ui::icon::Icon;

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id="how-it-works" class="py-24 bg-gradient-to-br from-gray-50 to-emerald-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">{HOW_IT_WORKS_INTRO.heading}</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">{HOW_IT_WORKS_INTRO.lead}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                    {HOW_IT_WORKS.iter().enumerate().map(|(index, step)| view! {
                        <div class="relative text-center">
                            <div class=format!("bg-gradient-to-r {} w-20 h-20 rounded-full flex items-center justify-center mx-auto mb-6 shadow-lg", step.gradient)>
                                <Icon name=step.icon class="h-10 w-10 invert" />
                            </div>
                            <span class="absolute -top-2 left-1/2 ml-6 w-8 h-8 rounded-full bg-white border-2 border-emerald-500 text-emerald-600 font-bold flex items-center justify-center">
                                {index + 1}
                            </span>
                            <h3 class="text-2xl font-bold text-gray-900 mb-4">{step.title}</h3>
                            <p class="text-gray-600 leading-relaxed">{step.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
