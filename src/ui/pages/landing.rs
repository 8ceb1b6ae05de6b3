//! Landing page component
//!
//! Composes the sections in their fixed order:
//! - Navbar with the mobile menu
//! - Hero with the demo video modal
//! - Feature bento grid
//! - Pricing tiers
//! - How-it-works steps
//! - Testimonials
//! - Footer call-to-action
//!
//! plus SEO meta tags, page-scoped CSS animations and the scroll entrance
//! observer.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{APP_DESCRIPTION, structured_data};
use crate::ui::sections::{FeatureBento, Footer, Hero, Navbar, Pricing, Steps, Testimonials};

const PAGE_TITLE: &str = "FLUENT.AI - Latihan Wawancara dengan AI";

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingSections />

        // CSS Animations
        <LandingStyles />

        // Intersection Observer for scroll animations
        <ScrollAnimationScript />
    }
}

/// Page body without head tags
#[component]
pub fn LandingSections() -> impl IntoView {
    view! {
        <div class="font-sans text-slate-900 bg-white selection:bg-red-200 selection:text-red-900 overflow-x-hidden">
            <Navbar />
            <Hero />
            <FeatureBento />
            <Pricing />
            <Steps />
            <Testimonials />
            <Footer />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let json_ld = structured_data().to_string();

    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=APP_DESCRIPTION />
        <Meta name="keywords" content="latihan wawancara, interview AI, simulasi interview, persiapan kerja, deteksi ekspresi wajah" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=APP_DESCRIPTION />
        <Meta property="og:image" content="/image.png" />
        <Meta property="og:locale" content="id_ID" />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=APP_DESCRIPTION />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            /* Press feedback for calls-to-action */
            .cta-press {
                transform: scale(1);
                transition: transform 0.2s, background-color 0.2s, border-color 0.2s;
                cursor: pointer;
            }
            .cta-press:hover { transform: scale(1.05); }
            .cta-press:active { transform: scale(0.95); }

            /* Card hover lift */
            .hover-lift, .hover-lift-strong {
                transition: transform 0.3s cubic-bezier(.34,1.56,.64,1), box-shadow 0.3s;
            }
            .hover-lift:hover {
                transform: translateY(-5px);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
            }
            .hover-lift-strong:hover { transform: translateY(-10px); }

            /* Navbar entrance */
            @keyframes navbar-drop-in {
                from { opacity: 0; transform: translateY(-50px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .navbar-drop-in { animation: navbar-drop-in 0.5s cubic-bezier(.34,1.56,.64,1) both; }

            /* Mobile menu */
            @keyframes menu-pop-in {
                from { opacity: 0; transform: scale(0.95) translateY(-10px); }
                to { opacity: 1; transform: scale(1) translateY(0); }
            }
            .menu-pop-in { animation: menu-pop-in 0.25s ease-out both; }

            /* Background blobs */
            @keyframes blob {
                0%, 100% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(30px, -50px) scale(1.1); }
                66% { transform: translate(-20px, 20px) scale(0.9); }
            }
            .animate-blob { animation: blob 7s infinite; }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(40px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.8s ease-out both; }
            .landing-delay-1000 { animation-delay: 1s; }

            @keyframes landing-pop-in {
                from { opacity: 0; transform: scale(0.8); }
                to { opacity: 1; transform: scale(1); }
            }
            .landing-pop-in { animation: landing-pop-in 0.8s 0.2s cubic-bezier(.34,1.56,.64,1) both; }

            /* Floating stat cards */
            @keyframes float-up {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-20px); }
            }
            @keyframes float-down {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(20px); }
            }
            .float-up { animation: float-up 4s ease-in-out infinite; }
            .float-down { animation: float-down 5s ease-in-out 1s infinite; }

            /* Voice visualizer */
            @keyframes voice-bar {
                0%, 60%, 100% { height: 10px; }
                30% { height: var(--bar-peak, 10px); }
            }
            .voice-bar { height: 10px; animation: voice-bar 2.5s ease-in-out infinite; }

            /* Dotted background of the steps section */
            .landing-dot-grid {
                background-image: radial-gradient(#475569 1px, transparent 1px);
                background-size: 30px 30px;
            }

            /* Demo modal */
            @keyframes modal-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            @keyframes modal-pop-in {
                from { opacity: 0; transform: scale(0.8); }
                to { opacity: 1; transform: scale(1); }
            }
            .modal-fade-in { animation: modal-fade-in 0.2s ease-out both; }
            .modal-pop-in { animation: modal-pop-in 0.3s cubic-bezier(.34,1.56,.64,1) both; }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-scroll-animate { opacity: 1; transform: none; transition: none; }
                .animate-blob, .float-up, .float-down, .voice-bar { animation: none; }
            }
            "#
        </style>

        // Without scripts the observer never runs, so show animated blocks as-is
        <noscript>
            <style>".landing-scroll-animate { opacity: 1; transform: none; }"</style>
        </noscript>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const targets = document.querySelectorAll('.landing-scroll-animate');
                    if (!('IntersectionObserver' in window)) {
                        targets.forEach(el => el.classList.add('visible'));
                        return;
                    }

                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    targets.forEach(el => observer.observe(el));
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::content::{DOWNLOAD_URL, NAV_ITEMS};
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    fn render<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
        Owner::new().with(|| view().to_html())
    }

    #[test]
    fn test_sections_render_in_page_order() {
        let html = render(|| view! { <LandingSections /> });

        let order = [
            "aria-label=\"Toggle Menu\"",
            "Lihat Demo",
            "id=\"fitur\"",
            "id=\"harga\"",
            "id=\"cara-kerja\"",
            "id=\"testimoni\"",
            "Siap untuk ",
        ];
        let found: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("{needle} missing")))
            .collect();
        assert!(found.windows(2).all(|w| w[0] < w[1]), "{found:?}");
    }

    #[test]
    fn test_every_nav_anchor_has_a_target() {
        let html = render(|| view! { <LandingSections /> });

        for item in NAV_ITEMS {
            let id = item.href.trim_start_matches('#');
            assert!(html.contains(&format!("id=\"{id}\"")), "no target for {}", item.href);
        }
    }

    #[test]
    fn test_distribution_link_count() {
        let html = render(|| view! { <LandingSections /> });

        // Navbar, hero, starter tier, footer (mobile menu closed)
        assert_eq!(html.matches(&format!("href=\"{DOWNLOAD_URL}\"")).count(), 4);
    }

    #[test]
    fn test_scroll_animated_blocks_visible_without_scripts() {
        let html = render(|| view! { <LandingStyles /> });

        let fallback = html.find("<noscript>").expect("noscript fallback missing");
        assert!(html[fallback..].contains(".landing-scroll-animate { opacity: 1; transform: none; }"));
    }
}
