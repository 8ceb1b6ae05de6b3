use leptos::prelude::*;

use crate::core::content::{DEMO_VIDEO_SRC, STEPS, anchors};
use crate::ui::icon::{Icon, icons};

/// "Cara Kerja" section: three numbered step cards on a dark dotted backdrop
#[component]
pub fn Steps() -> impl IntoView {
    view! {
        <section class="py-20 md:py-24 bg-[#0F172A] text-white overflow-hidden relative" id=anchors::STEPS>
            <div class="absolute inset-0 opacity-10 landing-dot-grid" aria-hidden="true"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="flex flex-col md:flex-row justify-between items-start md:items-end mb-16 md:mb-20">
                    <div>
                        <h2 class="text-4xl md:text-5xl font-black mb-4">
                            "Cara Kerja " <br /> <span class="text-[#d84040]">"Simpel & Cepat"</span>
                        </h2>
                        <p class="text-slate-400 text-lg">
                            {format!("Hanya butuh {} langkah untuk memulai.", STEPS.len())}
                        </p>
                    </div>
                    <a
                        href=DEMO_VIDEO_SRC
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hidden md:flex items-center gap-2 text-white font-bold border-b-2 border-[#d84040] pb-1 hover:text-[#d84040] transition-colors mt-6 md:mt-0"
                    >
                        "Lihat Tutorial Lengkap"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5 invert" />
                    </a>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div
                                    class="landing-scroll-animate relative p-6 sm:p-8 rounded-3xl border border-slate-700 bg-slate-800/50 backdrop-blur-sm group hover:bg-slate-800 transition-colors shadow-lg"
                                    style=format!("transition-delay: {:.1}s", i as f32 * 0.2)
                                    data-step=step.num
                                >
                                    <div class="text-5xl sm:text-6xl font-black text-slate-700 mb-6 group-hover:text-red-600/20 transition-colors select-none">
                                        {step.num}
                                    </div>
                                    <h3 class="text-xl sm:text-2xl font-bold mb-4">{step.title}</h3>
                                    <p class="text-slate-400 leading-relaxed">{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
