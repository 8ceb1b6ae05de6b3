use leptos::prelude::*;

use crate::core::content::{TESTIMONIAL_STARS, TESTIMONIALS, Testimonial, anchors};
use crate::ui::icon::{Icon, icons};

/// Testimonials section component
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-20 md:py-24 bg-white" id=anchors::TESTIMONIALS>
            <div class="container mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-black text-center text-slate-900 mb-16 landing-scroll-animate">
                    "Mereka Lolos Wawancara."
                </h2>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, t)| view! { <TestimonialCard testimonial=*t index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, index: usize) -> impl IntoView {
    view! {
        <div
            class="landing-scroll-animate hover-lift p-8 bg-[#F8F9FC] rounded-[2rem] border border-slate-100"
            style=format!("transition-delay: {:.1}s", index as f32 * 0.2)
            data-testimonial=testimonial.name
        >
            <div class="flex gap-1 mb-6" aria-label=format!("{} dari 5 bintang", TESTIMONIAL_STARS)>
                {(0..TESTIMONIAL_STARS)
                    .map(|_| view! { <Icon name=icons::STAR class="w-5 h-5" /> })
                    .collect_view()}
            </div>
            <p class="text-slate-700 text-lg mb-8 leading-relaxed font-medium">
                {format!("\"{}\"", testimonial.quote)}
            </p>
            <div class="flex items-center gap-4">
                <div class="w-12 h-12 bg-red-100 rounded-full flex items-center justify-center text-[#d84040] font-bold text-xl">
                    {testimonial.initial().to_string()}
                </div>
                <div>
                    <div class="font-bold text-slate-900">{testimonial.name}</div>
                    <div class="text-sm text-slate-500">{testimonial.role}</div>
                </div>
            </div>
        </div>
    }
}
