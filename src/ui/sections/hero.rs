use leptos::prelude::*;

use crate::core::{DemoModal, PointerTarget};
use crate::core::content::{
    APP_DESCRIPTION, APP_TAGLINE, AVATAR_SEEDS, DEMO_VIDEO_SRC, DOWNLOAD_URL, HERO_STATS,
    PRODUCT_IMAGE_SRC, avatar_url,
};
use crate::ui::common::{CtaButton, CtaLink, CtaVariant, MediaModal};
use crate::ui::icon::{Icon, icons};

/// Placement and palette of the floating stat cards, paired with `HERO_STATS`
const STAT_CARD_STYLES: [(&str, &str, &str); 2] = [
    (
        "float-up absolute top-10 -left-16 sm:top-20 sm:-left-10 z-30 bg-white p-4 sm:p-5 rounded-3xl shadow-xl shadow-red-100 border border-slate-50",
        "bg-green-100 p-2.5 rounded-xl",
        "text-xl sm:text-2xl font-black text-slate-900",
    ),
    (
        "float-down absolute bottom-24 -right-16 sm:bottom-40 sm:-right-8 z-30 bg-slate-900 p-4 sm:p-5 rounded-3xl shadow-xl",
        "bg-slate-800 p-2.5 rounded-xl invert",
        "text-sm sm:text-lg font-bold text-white",
    ),
];

/// Hero banner with the phone mockup and the demo video modal
#[component]
pub fn Hero() -> impl IntoView {
    let modal = RwSignal::new(DemoModal::default());

    let open_demo = Callback::new(move |_: ()| modal.update(DemoModal::open));
    let close_demo = Callback::new(move |_: ()| modal.update(DemoModal::close));
    let on_pointer =
        Callback::new(move |target: PointerTarget| modal.update(|m| m.pointer(target)));

    view! {
        <section class="relative pt-32 pb-16 md:pt-40 md:pb-28 overflow-hidden bg-[#F8F9FC]">
            // Background shapes
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                <div class="animate-blob absolute top-[-10%] right-[-5%] w-[400px] h-[400px] sm:w-[600px] sm:h-[600px] bg-red-100/50 rounded-full blur-3xl mix-blend-multiply opacity-70"></div>
                <div
                    class="animate-blob absolute top-[20%] left-[-10%] w-[300px] h-[300px] sm:w-[500px] sm:h-[500px] bg-orange-100/50 rounded-full blur-3xl mix-blend-multiply opacity-70"
                    style="animation-delay: 2000ms"
                ></div>
            </div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="flex flex-col lg:flex-row items-center gap-12 lg:gap-16">
                    <div class="landing-fade-in-up lg:w-1/2 text-center lg:text-left">
                        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-white border border-slate-200 text-slate-600 font-bold text-xs uppercase tracking-wider mb-8 shadow-sm">
                            <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                            {APP_TAGLINE}
                        </div>

                        <h1 class="text-6xl md:text-7xl lg:text-8xl font-black text-slate-900 leading-[0.95] mb-8 tracking-tight">
                            "WAWANCARA?"
                            <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-[#d84040] to-orange-600">
                                "SIAPA TAKUT."
                            </span>
                        </h1>

                        <p class="text-lg sm:text-xl text-slate-500 mb-10 leading-relaxed max-w-xl mx-auto lg:mx-0">
                            {APP_DESCRIPTION}
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <CtaLink href=DOWNLOAD_URL new_tab=true icon=icons::DOWNLOAD>
                                "Download APK"
                            </CtaLink>
                            <CtaButton
                                on_click=open_demo
                                variant=CtaVariant::Outline
                                icon=icons::PLAY
                            >
                                "Lihat Demo"
                            </CtaButton>
                        </div>

                        <SocialProof />
                    </div>

                    <PhoneMockup />
                </div>
            </div>

            <MediaModal
                is_open=Signal::derive(move || modal.with(DemoModal::is_open))
                on_pointer=on_pointer
                on_close=close_demo
                label="Demo FLUENT.AI"
            >
                <DemoVideo />
            </MediaModal>
        </section>
    }
}

/// Product walkthrough shown inside the demo modal
#[component]
pub fn DemoVideo() -> impl IntoView {
    view! {
        <video
            src=DEMO_VIDEO_SRC
            autoplay=true
            loop=true
            muted=true
            controls=true
            playsinline=true
            class="w-full h-auto max-h-[80vh] object-contain"
        >
            "Sayangnya, browser Anda tidak mendukung tag video."
        </video>
    }
}

#[component]
fn SocialProof() -> impl IntoView {
    view! {
        <div class="mt-10 flex items-center gap-4 justify-center lg:justify-start">
            <div class="flex -space-x-3">
                {AVATAR_SEEDS
                    .iter()
                    .map(|seed| {
                        view! {
                            <div class="w-10 h-10 rounded-full border-2 border-white bg-slate-200 overflow-hidden">
                                <img src=avatar_url(*seed) alt="user" loading="lazy" />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="text-sm font-semibold text-slate-600">
                <span class="text-[#d84040] font-bold">"4.9/5"</span>
                " Rating dari 500+ User"
            </div>
        </div>
    }
}

/// Tilted phone with the app screenshot, face-tracking frame and feedback bubble
#[component]
fn PhoneMockup() -> impl IntoView {
    view! {
        <div class="landing-pop-in lg:w-1/2 relative mt-12 lg:mt-0 flex justify-center">
            <div class="relative z-20 w-[280px] sm:w-[320px] bg-slate-900 rounded-[3rem] p-3 shadow-2xl shadow-slate-400/50 rotate-[-3deg] border-8 border-white">
                <div class="bg-slate-800 rounded-[2.2rem] overflow-hidden h-[550px] sm:h-[600px] relative">
                    <img
                        src=PRODUCT_IMAGE_SRC
                        alt="Aplikasi Simulasi Wawancara AI"
                        class="w-full h-full object-cover opacity-90"
                        loading="lazy"
                    />

                    // Face tracking frame
                    <div class="absolute top-1/3 left-1/2 -translate-x-1/2 w-32 h-40 border-2 border-white/30 rounded-[3rem] animate-pulse" aria-hidden="true">
                        <div class="absolute -top-1 -left-1 w-4 h-4 border-t-2 border-l-2 border-[#d84040] rounded-tl-lg"></div>
                        <div class="absolute -top-1 -right-1 w-4 h-4 border-t-2 border-r-2 border-[#d84040] rounded-tr-lg"></div>
                        <div class="absolute -bottom-1 -left-1 w-4 h-4 border-b-2 border-l-2 border-[#d84040] rounded-bl-lg"></div>
                        <div class="absolute -bottom-1 -right-1 w-4 h-4 border-b-2 border-r-2 border-[#d84040] rounded-br-lg"></div>
                    </div>

                    // Feedback bubble
                    <div class="landing-fade-in-up landing-delay-1000 absolute bottom-20 right-4 left-4 bg-white/95 backdrop-blur-md p-4 rounded-2xl shadow-xl border border-white/20">
                        <div class="flex gap-3 items-start">
                            <div class="w-8 h-8 rounded-full bg-red-100 flex items-center justify-center shrink-0">
                                <Icon name=icons::SPARKLES class="w-4 h-4" />
                            </div>
                            <div>
                                <p class="text-xs font-bold text-slate-400 uppercase mb-1">"Analisis AI"</p>
                                <p class="text-sm font-semibold text-slate-800">
                                    "\"Kontak matamu bagus! Coba kurangi kata 'hmm' saat berpikir.\""
                                </p>
                            </div>
                        </div>
                    </div>

                    // Action bar
                    <div class="absolute bottom-6 left-0 w-full px-6 flex justify-center gap-4" aria-hidden="true">
                        <div class="w-14 h-14 bg-[#d84040] rounded-full flex items-center justify-center shadow-lg">
                            <Icon name=icons::MIC class="w-7 h-7 invert" />
                        </div>
                        <div class="w-14 h-14 bg-white/10 backdrop-blur-md rounded-full flex items-center justify-center border border-white/20">
                            <Icon name=icons::X class="w-7 h-7 invert" />
                        </div>
                    </div>
                </div>
            </div>

            {HERO_STATS
                .iter()
                .zip(STAT_CARD_STYLES)
                .map(|(stat, (card_class, icon_class, value_class))| {
                    view! {
                        <div class=card_class data-hero-stat=stat.label>
                            <div class="flex items-center gap-3">
                                <div class=icon_class>
                                    <Icon name=stat.icon class="w-5 h-5" />
                                </div>
                                <div>
                                    <div class="text-xs text-slate-500 font-bold uppercase">{stat.label}</div>
                                    <div class=value_class>{stat.value}</div>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
