use leptos::prelude::*;

use crate::core::content::{COPYRIGHT, DOWNLOAD_URL, FOOTER_LINKS};
use crate::ui::common::CtaLink;
use crate::ui::icon::icons;

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-white pt-16 md:pt-20 pb-10 rounded-t-[3rem] mt-10">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center mb-12 md:mb-16 gap-8 text-center md:text-left">
                    <div>
                        <h2 class="text-4xl md:text-5xl font-black mb-4">
                            "Siap untuk " <span class="text-[#d84040]">"Hired?"</span>
                        </h2>
                        <p class="text-slate-400 max-w-md mx-auto md:mx-0">
                            "Download sekarang dan ubah caramu mempersiapkan masa depan karirmu."
                        </p>
                    </div>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <CtaLink href=DOWNLOAD_URL new_tab=true icon=icons::DOWNLOAD>
                            "Download untuk Android"
                        </CtaLink>
                    </div>
                </div>

                <div class="border-t border-slate-800 pt-8 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm gap-4">
                    <p class="text-center md:text-left">{COPYRIGHT}</p>
                    <div class="flex gap-6">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| view! {
                                <a href=link.href class="hover:text-white transition-colors">{link.label}</a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
