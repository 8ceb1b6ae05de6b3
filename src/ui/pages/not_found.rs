//! Not found page component
//!
//! A 404 page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::content::{APP_NAME, COPYRIGHT};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Set the HTTP status on the server response
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("404 - {}", APP_NAME) />

        <div class="min-h-screen bg-[#F8F9FC] flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-black text-slate-900 mb-4">"404"</h1>

                <h2 class="text-2xl font-bold text-slate-900 mb-2">
                    "Halaman Tidak Ditemukan"
                </h2>

                <p class="text-slate-500 mb-8 max-w-md mx-auto">
                    "Halaman yang kamu cari tidak ada atau sudah dipindahkan."
                </p>

                <a
                    href="/"
                    class="px-6 py-3 bg-[#d84040] hover:bg-[#d84040]/90 text-white font-bold rounded-2xl transition-colors"
                >
                    "Kembali ke Beranda"
                </a>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-400">{COPYRIGHT}</p>
            </div>
        </div>
    }
}
