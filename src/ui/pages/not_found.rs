//! 404 page for unknown routes

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::BRAND;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-emerald-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white rounded-full shadow flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-gray-900 mb-2">"Page Not Found"</h2>
                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="btn-base btn-lg bg-emerald-500 hover:bg-emerald-600 text-white"
                >
                    "Back to Home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-400">{format!("© 2025 {}", BRAND)}</p>
            </div>
        </div>
    }
}
