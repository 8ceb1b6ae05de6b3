//! Fixed page content
//!
//! Every collection the landing page iterates over lives here as a `'static`
//! slice, in display order. Components render these verbatim; nothing is
//! fetched or computed at runtime.

use serde::Serialize;
use serde_json::{Value, json};

pub const APP_NAME: &str = "FLUENT.AI";
pub const APP_TAGLINE: &str = "AI Interview Trainer #1 di Indonesia";
pub const APP_DESCRIPTION: &str = "Lupakan rasa gugup. Latih wawancara kerjamu dengan AI yang menganalisis ekspresi wajah, intonasi suara, dan kualitas jawabanmu secara real-time.";

/// Android build distribution page, opened in a new browsing context.
///
/// Placeholder release location; replace with the published APK link at deployment.
pub const DOWNLOAD_URL: &str =
    "https://github.com/fluent-ai-id/fluent-ai-mobile/releases/latest/download/fluent-ai.apk";
/// Premium activation happens over email
pub const CONTACT_EMAIL: &str = "tim2capstone2@gmail.com";
pub const CONTACT_MAILTO: &str = "mailto:tim2capstone2@gmail.com";

pub const LOGO_SRC: &str = "/logo.png";
pub const PRODUCT_IMAGE_SRC: &str = "/image.png";
pub const DEMO_VIDEO_SRC: &str = "/demo-video.mp4";

/// Section anchor ids (without the leading `#`)
pub mod anchors {
    pub const FEATURES: &str = "fitur";
    pub const PRICING: &str = "harga";
    pub const STEPS: &str = "cara-kerja";
    pub const TESTIMONIALS: &str = "testimoni";
}

/// In-page navigation link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Fitur", href: "#fitur" },
    NavItem { name: "Cara Kerja", href: "#cara-kerja" },
    NavItem { name: "Harga", href: "#harga" },
    NavItem { name: "Testimoni", href: "#testimoni" },
];

/// Visual treatment of a bento card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureLayout {
    /// Light card spanning two columns
    Wide,
    /// Dark card spanning two rows, hosts the voice visualizer
    Tall,
    /// Brand-red card
    Accent,
    /// Pale card
    Soft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub layout: FeatureLayout,
    pub badge: Option<&'static str>,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Deteksi Ekspresi Wajah",
        description: "Jangan biarkan wajah tegang merusak peluangmu. AI kami melacak 468 titik wajah untuk memastikan kamu tersenyum di saat yang tepat dan menjaga kontak mata.",
        icon: "scan-face",
        layout: FeatureLayout::Wide,
        badge: None,
    },
    Feature {
        title: "Analisis Suara & Filler Words",
        description: "Terlalu banyak \"Eee..\" atau \"Hmm..\"? Kami mendeteksinya secara real-time dan memberimu skor kelancaran bicara.",
        icon: "mic",
        layout: FeatureLayout::Tall,
        badge: None,
    },
    Feature {
        title: "Feedback Cerdas",
        description: "Dapatkan saran jawaban yang lebih baik, dikurasi langsung oleh AI Google.",
        icon: "brain",
        layout: FeatureLayout::Accent,
        badge: Some("Powered by Gemini"),
    },
    Feature {
        title: "Sistem Level",
        description: "Naikkan level dari 'Intern' ke 'CEO' dengan latihan rutin.",
        icon: "trophy",
        layout: FeatureLayout::Soft,
        badge: None,
    },
];

/// Relative bar heights of the voice visualizer in the tall feature card
pub const VOICE_BARS: [u8; 15] = [1, 3, 2, 5, 3, 6, 2, 4, 1, 3, 2, 5, 3, 6, 2];

/// Where a pricing call-to-action leads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaTarget {
    Download,
    Mail,
}

impl CtaTarget {
    pub fn href(&self) -> &'static str {
        match self {
            CtaTarget::Download => DOWNLOAD_URL,
            CtaTarget::Mail => CONTACT_MAILTO,
        }
    }

    /// External download opens in a new browsing context, mail does not
    pub fn opens_new_context(&self) -> bool {
        matches!(self, CtaTarget::Download)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    /// Price in rupiah, for structured data
    pub price_idr: u32,
    pub perks: &'static [&'static str],
    pub cta_label: &'static str,
    pub cta: CtaTarget,
    /// Ribbon text for the highlighted tier
    pub highlight: Option<&'static str>,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter (Gratis)",
        tagline: "Cukup untuk pemanasan.",
        price: "Rp 0",
        period: "/ selamanya",
        price_idr: 0,
        perks: &[
            "1x Latihan Interview / Hari",
            "Akses Topik Dasar (HR)",
            "Feedback AI Standar",
        ],
        cta_label: "Mulai Gratis",
        cta: CtaTarget::Download,
        highlight: None,
    },
    PricingTier {
        name: "Premium",
        tagline: "Latihan tanpa batas.",
        price: "Rp 30.000",
        period: "per bulan",
        price_idr: 30_000,
        perks: &[
            "7x Latihan Interview / Hari",
            "Bebas Akses Semua Topik",
            "Feedback AI Lebih Detail",
            "Analisis Emosi Wajah Full",
        ],
        cta_label: "Upgrade Sekarang",
        cta: CtaTarget::Mail,
        highlight: Some("PALING LARIS 🔥"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        num: "01",
        title: "Pilih Topik",
        description: "Pilih jenis wawancara: HR, User, atau Technical. Sesuaikan dengan bidang pekerjaanmu.",
    },
    Step {
        num: "02",
        title: "Rekam Video",
        description: "Jawab pertanyaan yang diberikan AI lewat kamera depan. Bersikaplah natural.",
    },
    Step {
        num: "03",
        title: "Evaluasi Instan",
        description: "Tunggu 30 detik. Dapatkan laporan lengkap tentang performa verbal & non-verbalmu.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Avatar letter
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Andi P.",
        role: "Diterima di Gojek",
        quote: "Fitur face tracking-nya juara. Ternyata muka saya terlalu tegang pas mikir. Fluent.AI bantu saya rileks.",
    },
    Testimonial {
        name: "Siti N.",
        role: "Diterima di Tokopedia",
        quote: "Latihan di sini berasa real banget. Pas wawancara asli jadi nggak kaget lagi sama pertanyaannya.",
    },
    Testimonial {
        name: "Budi S.",
        role: "Diterima di Traveloka",
        quote: "Saya pake ini 3 hari berturut-turut buat benerin 'filling words'. Hasilnya confidence score naik drastis.",
    },
];

/// Stars shown on every testimonial card
pub const TESTIMONIAL_STARS: usize = 5;

/// Floating stat card next to the phone mockup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FloatingStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const HERO_STATS: &[FloatingStat] = &[
    FloatingStat {
        label: "Confidence Score",
        value: "94%",
        icon: "trophy",
    },
    FloatingStat {
        label: "Ekspresi Wajah",
        value: "Stabil",
        icon: "scan-face",
    },
];

/// Seeds for the social proof avatars in the hero
pub const AVATAR_SEEDS: [u32; 4] = [51, 52, 53, 54];

pub fn avatar_url(seed: u32) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { label: "Privacy Policy", href: "#" },
    FooterLink { label: "Terms of Service", href: "#" },
    FooterLink { label: "Contact", href: CONTACT_MAILTO },
];

pub const COPYRIGHT: &str = "© 2025 FLUENT.AI Indonesia. All rights reserved.";

/// schema.org `SoftwareApplication` description of the app for the page head
pub fn structured_data() -> Value {
    let offers: Vec<Value> = PRICING_TIERS
        .iter()
        .map(|tier| {
            json!({
                "@type": "Offer",
                "name": tier.name,
                "price": tier.price_idr.to_string(),
                "priceCurrency": "IDR",
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": APP_NAME,
        "applicationCategory": "EducationalApplication",
        "operatingSystem": "Android",
        "description": APP_DESCRIPTION,
        "downloadUrl": DOWNLOAD_URL,
        "offers": offers,
        "featureList": FEATURES.iter().map(|f| f.title).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nav_items_order() {
        let names: Vec<_> = NAV_ITEMS.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Fitur", "Cara Kerja", "Harga", "Testimoni"]);
    }

    #[test]
    fn test_nav_items_point_at_section_anchors() {
        let ids = [
            anchors::FEATURES,
            anchors::STEPS,
            anchors::PRICING,
            anchors::TESTIMONIALS,
        ];
        for (item, id) in NAV_ITEMS.iter().zip(ids) {
            assert_eq!(item.href, format!("#{id}"));
        }
    }

    #[test]
    fn test_collection_sizes() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(PRICING_TIERS.len(), 2);
        assert_eq!(STEPS.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(HERO_STATS.len(), 2);
        assert_eq!(VOICE_BARS.len(), 15);
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        let nums: Vec<_> = STEPS.iter().map(|s| s.num).collect();
        assert_eq!(nums, vec!["01", "02", "03"]);
        assert_eq!(STEPS[0].title, "Pilih Topik");
        assert_eq!(STEPS[2].title, "Evaluasi Instan");
    }

    #[test]
    fn test_pricing_tiers() {
        let starter = &PRICING_TIERS[0];
        let premium = &PRICING_TIERS[1];

        assert_eq!(starter.price, "Rp 0");
        assert_eq!(starter.perks.len(), 3);
        assert_eq!(starter.cta, CtaTarget::Download);
        assert!(starter.highlight.is_none());

        assert_eq!(premium.price, "Rp 30.000");
        assert_eq!(premium.price_idr, 30_000);
        assert_eq!(premium.perks.len(), 4);
        assert_eq!(premium.cta, CtaTarget::Mail);
        assert!(premium.highlight.is_some());
    }

    #[test]
    fn test_cta_targets() {
        assert_eq!(CtaTarget::Download.href(), DOWNLOAD_URL);
        assert_eq!(CtaTarget::Mail.href(), "mailto:tim2capstone2@gmail.com");
        assert!(CtaTarget::Download.opens_new_context());
        assert!(!CtaTarget::Mail.opens_new_context());
        assert_eq!(CONTACT_MAILTO, format!("mailto:{CONTACT_EMAIL}"));
    }

    #[test]
    fn test_testimonial_initials() {
        let initials: String = TESTIMONIALS.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, "ASB");
    }

    #[test]
    fn test_avatar_url() {
        assert_eq!(
            avatar_url(51),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=51"
        );
    }

    #[test]
    fn test_structured_data_lists_both_offers() {
        let data = structured_data();
        let text = data.to_string();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["@type"], "SoftwareApplication");
        assert_eq!(parsed["name"], APP_NAME);
        let offers = parsed["offers"].as_array().unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0]["price"], "0");
        assert_eq!(offers[1]["price"], "30000");
        assert_eq!(offers[1]["priceCurrency"], "IDR");
        assert_eq!(parsed["featureList"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_feature_serializes_layout_lowercase() {
        let value = serde_json::to_value(FEATURES[1]).unwrap();
        assert_eq!(value["layout"], "tall");
        assert_eq!(value["badge"], Value::Null);
    }
}
