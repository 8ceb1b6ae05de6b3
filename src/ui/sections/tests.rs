//! Server-side render checks for the landing sections

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

use super::hero::DemoVideo;
use super::navbar::MobileMenu;
use super::*;
use crate::core::PointerTarget;
use crate::ui::common::MediaModal;
use crate::core::content::{
    CONTACT_MAILTO, DOWNLOAD_URL, FEATURES, NAV_ITEMS, PRICING_TIERS, STEPS, TESTIMONIALS,
};

/// Renders inside a fresh reactive owner so component signals have an arena
fn render<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
    Owner::new().with(|| view().to_html())
}

fn positions(html: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle.as_str())
                .unwrap_or_else(|| panic!("{needle} not rendered"))
        })
        .collect()
}

fn assert_in_order(html: &str, needles: &[String]) {
    let found = positions(html, needles);
    let mut sorted = found.clone();
    sorted.sort_unstable();
    assert_eq!(found, sorted, "rendered out of order: {needles:?}");
}

#[test]
fn test_navbar_renders_links_and_closed_menu() {
    let html = render(|| view! { <Navbar /> });

    for item in NAV_ITEMS {
        assert!(html.contains(&format!("href=\"{}\"", item.href)), "{}", item.href);
    }
    assert!(html.contains("aria-label=\"Toggle Menu\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("/icons/menu.svg"));
    // Overlay is not mounted until toggled
    assert!(!html.contains("data-mobile-menu"));
    assert!(!html.contains("Unduh Aplikasi"));
}

#[test]
fn test_navbar_download_link_opens_new_context() {
    let html = render(|| view! { <Navbar /> });

    assert!(html.contains(&format!("href=\"{DOWNLOAD_URL}\"")));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert!(html.contains("Unduh Sekarang"));
}

#[test]
fn test_hero_renders_closed_modal() {
    let html = render(|| view! { <Hero /> });

    assert!(html.contains("Lihat Demo"));
    assert!(html.contains("Download APK"));
    assert!(html.contains(&format!("href=\"{DOWNLOAD_URL}\"")));
    assert!(html.contains("src=\"/image.png\""));
    assert_eq!(html.matches("data-hero-stat=").count(), 2);
    assert_eq!(html.matches("api.dicebear.com").count(), 4);

    assert!(!html.contains("role=\"dialog\""));
    assert!(!html.contains("data-modal-backdrop"));
    assert!(!html.contains("/demo-video.mp4"));
}

#[test]
fn test_open_demo_modal_renders_dialog_and_video() {
    let html = render(|| {
        view! {
            <MediaModal
                is_open=Signal::derive(|| true)
                on_pointer=Callback::new(|_: PointerTarget| {})
                on_close=Callback::new(|_: ()| {})
                label="Demo FLUENT.AI"
            >
                <DemoVideo />
            </MediaModal>
        }
    });

    assert!(html.contains("data-modal-backdrop=\"true\""));
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains("aria-label=\"Demo FLUENT.AI\""));
    assert!(html.contains("aria-label=\"Close modal\""));
    assert!(html.contains("<video src=\"/demo-video.mp4\" autoplay loop muted controls"));
    // Backdrop wraps the dialog, which holds the close control and the video
    assert_in_order(
        &html,
        &[
            "data-modal-backdrop".to_string(),
            "role=\"dialog\"".to_string(),
            "aria-label=\"Close modal\"".to_string(),
            "<video".to_string(),
        ],
    );
}

#[test]
fn test_closed_demo_modal_renders_nothing() {
    let html = render(|| {
        view! {
            <MediaModal
                is_open=Signal::derive(|| false)
                on_pointer=Callback::new(|_: PointerTarget| {})
                on_close=Callback::new(|_: ()| {})
                label="Demo FLUENT.AI"
            >
                <DemoVideo />
            </MediaModal>
        }
    });

    assert!(!html.contains("role=\"dialog\""));
    assert!(!html.contains("<video"));
}

#[test]
fn test_open_mobile_menu_renders_links_and_cta() {
    let html = render(|| {
        view! { <MobileMenu is_open=Signal::derive(|| true) on_select=Callback::new(|_: ()| {}) /> }
    });

    assert!(html.contains("data-mobile-menu=\"true\""));
    assert_eq!(html.matches("href=\"#").count(), NAV_ITEMS.len());
    let needles: Vec<String> = NAV_ITEMS
        .iter()
        .map(|item| format!("href=\"{}\"", item.href))
        .collect();
    assert_in_order(&html, &needles);
    assert!(html.contains("Unduh Aplikasi"));
    assert!(html.contains(&format!("href=\"{DOWNLOAD_URL}\"")));
}

#[test]
fn test_closed_mobile_menu_renders_nothing() {
    let html = render(|| {
        view! { <MobileMenu is_open=Signal::derive(|| false) on_select=Callback::new(|_: ()| {}) /> }
    });

    assert!(!html.contains("data-mobile-menu"));
    assert!(!html.contains("Unduh Aplikasi"));
}

#[test]
fn test_features_render_in_order() {
    let html = render(|| view! { <FeatureBento /> });

    assert!(html.contains("id=\"fitur\""));
    assert_eq!(html.matches("data-feature-card=").count(), FEATURES.len());
    let needles: Vec<String> = FEATURES
        .iter()
        .map(|f| format!("data-feature-card=\"{}\"", f.icon))
        .collect();
    assert_in_order(&html, &needles);
    assert_eq!(html.matches("voice-bar").count(), 15);
    assert!(html.contains("Powered by Gemini"));
}

#[test]
fn test_pricing_renders_two_tiers() {
    let html = render(|| view! { <Pricing /> });

    assert!(html.contains("id=\"harga\""));
    assert_eq!(html.matches("data-pricing-tier=").count(), 2);
    let needles: Vec<String> = PRICING_TIERS
        .iter()
        .map(|t| format!("data-pricing-tier=\"{}\"", t.name))
        .collect();
    assert_in_order(&html, &needles);

    assert!(html.contains("Rp 30.000"));
    assert!(html.contains("PALING LARIS"));
    assert!(html.contains("Mulai Gratis"));
    assert!(html.contains("Upgrade Sekarang"));
}

#[test]
fn test_pricing_links_use_literal_targets() {
    let html = render(|| view! { <Pricing /> });

    assert!(html.contains(&format!("href=\"{DOWNLOAD_URL}\"")));
    // Upgrade button and the activation address
    assert_eq!(
        html.matches(&format!("href=\"{CONTACT_MAILTO}\"")).count(),
        2
    );
    assert!(html.contains("tim2capstone2@gmail.com"));
}

#[test]
fn test_steps_render_three_cards() {
    let html = render(|| view! { <Steps /> });

    assert!(html.contains("id=\"cara-kerja\""));
    assert_eq!(html.matches("data-step=").count(), 3);
    let needles: Vec<String> = STEPS
        .iter()
        .map(|s| format!("data-step=\"{}\"", s.num))
        .collect();
    assert_in_order(&html, &needles);
    assert!(html.contains("Hanya butuh 3 langkah untuk memulai."));
}

#[test]
fn test_testimonials_render_three_cards() {
    let html = render(|| view! { <Testimonials /> });

    assert!(html.contains("id=\"testimoni\""));
    assert_eq!(html.matches("data-testimonial=").count(), 3);
    let needles: Vec<String> = TESTIMONIALS
        .iter()
        .map(|t| format!("data-testimonial=\"{}\"", t.name))
        .collect();
    assert_in_order(&html, &needles);
    assert_eq!(html.matches("/icons/star.svg").count(), 15);
    assert!(html.contains("Diterima di Tokopedia"));
}

#[test]
fn test_footer_links() {
    let html = render(|| view! { <Footer /> });

    assert!(html.contains(&format!("href=\"{DOWNLOAD_URL}\"")));
    assert!(html.contains(&format!("href=\"{CONTACT_MAILTO}\"")));
    assert!(html.contains("Download untuk Android"));
    assert!(html.contains("Privacy Policy"));
    assert!(html.contains("Terms of Service"));
}
