use leptos::prelude::*;

use crate::core::content::{CONTACT_EMAIL, CONTACT_MAILTO, PRICING_TIERS, PricingTier, anchors};
use crate::ui::common::{CtaLink, CtaSize, CtaVariant};
use crate::ui::icon::{Icon, icons};

/// Pricing section component
#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section class="py-24 bg-[#FFF5F5]" id=anchors::PRICING>
            <div class="container mx-auto px-6">
                <div class="text-center mb-16 max-w-2xl mx-auto landing-scroll-animate">
                    <span class="text-amber-500 font-bold tracking-wider text-sm uppercase bg-amber-50 px-3 py-1 rounded-full border border-amber-100">
                        "Upgrade Karirmu"
                    </span>
                    <h2 class="text-4xl md:text-5xl font-black text-slate-900 mt-4 mb-6">
                        "Investasi Kecil, " <br /> "Hasil Maksimal."
                    </h2>
                    <p class="text-slate-600 text-lg">
                        "Pilih paket yang sesuai dengan kebutuhan persiapan karirmu. Mulai dari gratis hingga akses tanpa batas."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto items-center">
                    {PRICING_TIERS
                        .iter()
                        .map(|tier| {
                            if tier.highlight.is_some() {
                                view! { <HighlightedPlan tier=*tier /> }.into_any()
                            } else {
                                view! { <BasicPlan tier=*tier /> }.into_any()
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BasicPlan(tier: PricingTier) -> impl IntoView {
    view! {
        <div
            class="landing-scroll-animate hover-lift p-8 bg-white rounded-[2.5rem] border border-slate-100 shadow-sm relative overflow-hidden"
            data-pricing-tier=tier.name
        >
            <h3 class="text-2xl font-bold text-slate-900 mb-2">{tier.name}</h3>
            <p class="text-slate-500 mb-6">{tier.tagline}</p>
            <div class="text-4xl font-black text-slate-900 mb-8">
                {tier.price}
                " "
                <span class="text-lg font-medium text-slate-400">{tier.period}</span>
            </div>

            <ul class="space-y-4 mb-8">
                {tier
                    .perks
                    .iter()
                    .map(|perk| {
                        view! {
                            <li class="flex items-center gap-3 text-slate-600">
                                <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 opacity-40" />
                                {*perk}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <CtaLink
                href=tier.cta.href()
                new_tab=tier.cta.opens_new_context()
                variant=CtaVariant::Muted
                size=CtaSize::Block
            >
                {tier.cta_label}
            </CtaLink>
        </div>
    }
}

/// Gradient-framed plan with the ribbon and email activation note
#[component]
fn HighlightedPlan(tier: PricingTier) -> impl IntoView {
    view! {
        <div
            class="landing-scroll-animate hover-lift-strong p-1 bg-gradient-to-br from-amber-300 via-yellow-400 to-orange-400 rounded-[2.6rem] shadow-2xl shadow-orange-200/50 relative"
            data-pricing-tier=tier.name
        >
            <div class="absolute top-0 left-1/2 -translate-x-1/2 bg-gradient-to-r from-amber-500 to-orange-500 text-white px-4 py-1 rounded-b-xl text-sm font-bold shadow-sm z-20">
                {tier.highlight}
            </div>

            <div class="bg-white rounded-[2.5rem] p-8 h-full relative overflow-hidden">
                <div class="absolute top-0 right-0 w-64 h-64 bg-amber-50 rounded-full blur-3xl -translate-y-1/2 translate-x-1/2 opacity-50" aria-hidden="true"></div>

                <div class="relative z-10">
                    <div class="mb-4">
                        <h3 class="text-2xl font-bold text-slate-900 flex items-center gap-2">
                            {tier.name}
                            <Icon name=icons::DIAMOND class="w-5 h-5" />
                        </h3>
                        <p class="text-amber-600 font-medium">{tier.tagline}</p>
                    </div>

                    <div class="text-5xl font-black text-slate-900 mb-2">{tier.price}</div>
                    <p class="text-slate-400 mb-8 font-medium">{tier.period}</p>

                    <div class="bg-amber-50 rounded-2xl p-6 border border-amber-100 mb-8">
                        <ul class="space-y-4">
                            {tier
                                .perks
                                .iter()
                                .map(|perk| {
                                    view! {
                                        <li class="flex items-center gap-3 text-slate-800 font-medium">
                                            <Icon name=icons::CHECK_CIRCLE class="w-5 h-5" />
                                            {*perk}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="space-y-4">
                        <CtaLink
                            href=tier.cta.href()
                            new_tab=tier.cta.opens_new_context()
                            variant=CtaVariant::Premium
                            size=CtaSize::Block
                        >
                            {tier.cta_label}
                        </CtaLink>

                        <div class="flex items-center justify-center gap-2 text-sm text-slate-500">
                            <Icon name=icons::MAIL class="w-4 h-4" />
                            <span>"Aktivasi: "</span>
                            <a
                                href=CONTACT_MAILTO
                                class="font-bold text-slate-900 hover:text-amber-600 underline decoration-amber-200 decoration-2 underline-offset-2"
                            >
                                {CONTACT_EMAIL}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
