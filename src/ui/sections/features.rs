use leptos::prelude::*;

use crate::core::content::{FEATURES, Feature, FeatureLayout, VOICE_BARS, anchors};
use crate::ui::icon::Icon;

/// Bento grid of product features
#[component]
pub fn FeatureBento() -> impl IntoView {
    view! {
        <section class="py-20 md:py-24 bg-white" id=anchors::FEATURES>
            <div class="container mx-auto px-6">
                <div class="text-center mb-16 max-w-2xl mx-auto landing-scroll-animate">
                    <span class="text-[#d84040] font-bold tracking-wider text-sm uppercase bg-red-50 px-3 py-1 rounded-full">
                        "Fitur Super"
                    </span>
                    <h2 class="text-4xl md:text-5xl font-black text-slate-900 mt-4 mb-6">
                        "Latihan Wawancara " <br /> "Senyata Aslinya."
                    </h2>
                    <p class="text-slate-500 text-lg">
                        "Kami menggabungkan Computer Vision dan Generative AI untuk memberikan pengalaman simulasi yang belum pernah ada sebelumnya."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=*feature /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

impl FeatureLayout {
    fn card_class(&self) -> &'static str {
        match self {
            FeatureLayout::Wide => {
                "md:col-span-2 bg-[#F8F9FC] border border-slate-100 group"
            }
            FeatureLayout::Tall => {
                "md:row-span-2 bg-slate-900 text-white flex flex-col justify-between"
            }
            FeatureLayout::Accent => "bg-[#d84040] text-white",
            FeatureLayout::Soft => "bg-[#FFF5F5] border border-red-50",
        }
    }

    fn icon_tile_class(&self) -> &'static str {
        match self {
            FeatureLayout::Wide | FeatureLayout::Soft => "bg-white shadow-sm",
            FeatureLayout::Tall => "bg-white/10 backdrop-blur-sm border border-white/10 invert",
            FeatureLayout::Accent => "bg-white/20 backdrop-blur-sm invert",
        }
    }

    fn description_class(&self) -> &'static str {
        match self {
            FeatureLayout::Wide => "text-slate-600 text-base sm:text-lg leading-relaxed",
            FeatureLayout::Tall => "text-slate-300 leading-relaxed mb-8",
            FeatureLayout::Accent => "text-red-100",
            FeatureLayout::Soft => "text-slate-600",
        }
    }

    fn is_dark(&self) -> bool {
        matches!(self, FeatureLayout::Tall | FeatureLayout::Accent)
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    let layout = feature.layout;
    let title_class = if layout.is_dark() {
        "text-2xl font-bold mb-4"
    } else {
        "text-2xl sm:text-3xl font-bold text-slate-900 mb-4"
    };

    view! {
        <div
            class=format!(
                "landing-scroll-animate hover-lift rounded-[2.5rem] p-8 sm:p-10 relative overflow-hidden {}",
                layout.card_class(),
            )
            data-feature-card=feature.icon
        >
            <div class="relative z-10 max-w-lg">
                <div class="flex justify-between items-start mb-6">
                    <div class=format!(
                        "w-14 h-14 rounded-2xl flex items-center justify-center {}",
                        layout.icon_tile_class(),
                    )>
                        <Icon name=feature.icon class="w-8 h-8" />
                    </div>
                    {feature.badge.map(|badge| view! {
                        <span class="px-3 py-1 bg-white/20 rounded-full text-xs font-bold uppercase backdrop-blur-sm">
                            {badge}
                        </span>
                    })}
                </div>
                <h3 class=title_class>{feature.title}</h3>
                <p class=layout.description_class()>{feature.description}</p>

                {(layout == FeatureLayout::Tall).then(|| view! { <VoiceVisualizer /> })}
            </div>

            {(layout == FeatureLayout::Wide).then(|| view! {
                <div class="absolute right-10 bottom-10 hidden md:block opacity-30 grayscale group-hover:grayscale-0 group-hover:opacity-100 transition-all duration-500 group-hover:scale-110" aria-hidden="true">
                    <Icon name=feature.icon class="w-36 h-36" />
                </div>
            })}
        </div>
    }
}

/// Looping equalizer bars inside the voice analysis card
#[component]
fn VoiceVisualizer() -> impl IntoView {
    view! {
        <div class="flex gap-1 h-12 items-end justify-center mb-4 opacity-70" aria-hidden="true">
            {VOICE_BARS
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let style = format!(
                        "--bar-peak: {}px; animation-delay: {:.2}s",
                        u32::from(*h) * 6,
                        i as f32 * 0.08,
                    );
                    view! { <div class="voice-bar w-1.5 sm:w-2 bg-[#d84040] rounded-full" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}
