//! Not found page component
//!
//! Shown for any path other than the landing page.

use leptos::prelude::*;

use crate::core::content::BRAND_NAME;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#0b0b0f] text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-white/70 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist."
                </p>
                <a
                    href="/"
                    class="inline-flex items-center gap-2 rounded-2xl bg-white px-5 py-3 text-sm font-medium text-black hover:bg-white/90"
                >
                    {format!("Back to {}", BRAND_NAME)}
                </a>
            </div>
        </div>
    }
}
