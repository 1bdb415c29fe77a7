use leptos::prelude::*;

use crate::core::content::{BRAND, FOOTER_BLURB, FOOTER_COLUMNS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="md:col-span-2">
                        <div class="flex items-center mb-4">
                            <div class="w-8 h-8 bg-gradient-to-r from-emerald-500 to-blue-500 rounded-lg"></div>
                            <span class="ml-2 text-xl font-bold text-white">{BRAND}</span>
                        </div>
                        <p class="max-w-md">{FOOTER_BLURB}</p>
                    </div>

                    {FOOTER_COLUMNS.iter().map(|column| view! {
                        <div>
                            <h4 class="text-white font-semibold mb-4">{column.title}</h4>
                            <ul class="space-y-2">
                                {column.links.iter().map(|(label, href)| view! {
                                    <li><a href=*href class="hover:text-white transition-colors">{*label}</a></li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                <div class="border-t border-gray-800 mt-12 pt-8 text-sm text-center">
                    {format!("© 2025 {}. All rights reserved.", BRAND)}
                </div>
            </div>
        </footer>
    }
}
