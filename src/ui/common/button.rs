use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Call-to-action color schemes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaVariant {
    /// Brand red, primary action
    Brand,
    /// Slate, turns brand red on hover
    Dark,
    /// White with a light border
    Outline,
    /// Amber gradient for the premium tier
    Premium,
    /// Pale slate for secondary tier actions
    Muted,
}

/// Call-to-action size options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaSize {
    /// Pill sized for the navbar
    Small,
    /// Hero and footer actions
    Large,
    /// Full width of the parent card
    Block,
}

impl CtaVariant {
    fn class(&self) -> &'static str {
        match self {
            CtaVariant::Brand => "bg-[#d84040] text-white shadow-xl shadow-red-200",
            CtaVariant::Dark => "bg-slate-900 text-white hover:bg-[#d84040] shadow-lg",
            CtaVariant::Outline => {
                "bg-white text-slate-900 border-2 border-slate-100 hover:border-slate-300"
            }
            CtaVariant::Premium => {
                "bg-gradient-to-r from-amber-500 to-orange-500 text-white shadow-lg shadow-orange-200"
            }
            CtaVariant::Muted => "bg-slate-100 text-slate-900 hover:bg-slate-200",
        }
    }
}

impl CtaSize {
    fn class(&self) -> &'static str {
        match self {
            CtaSize::Small => "px-5 py-2.5 rounded-full text-sm",
            CtaSize::Large => "w-full sm:w-auto px-8 py-4 rounded-2xl text-lg",
            CtaSize::Block => "w-full py-4 rounded-xl",
        }
    }
}

fn cta_classes(variant: CtaVariant, size: CtaSize, extra: &str) -> String {
    let base = format!(
        "cta-press inline-flex items-center justify-center gap-3 font-bold transition-colors {} {}",
        variant.class(),
        size.class()
    );
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

/// Anchor styled as a call-to-action
#[component]
pub fn CtaLink(
    /// Link target
    href: &'static str,
    /// Open in a new browsing context
    #[prop(default = false)]
    new_tab: bool,
    #[prop(default = CtaVariant::Brand)]
    variant: CtaVariant,
    #[prop(default = CtaSize::Large)]
    size: CtaSize,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Extra click handling (the link still navigates)
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=cta_classes(variant, size, class)
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {icon.map(|name| view! { <Icon name=name class="w-6 h-6" /> })}
            {children()}
        </a>
    }
}

/// Button styled as a call-to-action, for in-page actions
#[component]
pub fn CtaButton(
    /// Click handler
    on_click: Callback<()>,
    #[prop(default = CtaVariant::Brand)]
    variant: CtaVariant,
    #[prop(default = CtaSize::Large)]
    size: CtaSize,
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=cta_classes(variant, size, class)
            on:click=move |_| on_click.run(())
        >
            {icon.map(|name| view! { <Icon name=name class="w-6 h-6" /> })}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_classes_without_extra() {
        let classes = cta_classes(CtaVariant::Brand, CtaSize::Small, "");
        assert!(classes.starts_with("cta-press "));
        assert!(classes.contains("bg-[#d84040]"));
        assert!(classes.contains("rounded-full"));
        assert!(!classes.ends_with(' '));
    }

    #[test]
    fn test_cta_classes_with_extra() {
        let classes = cta_classes(CtaVariant::Muted, CtaSize::Block, "mt-3");
        assert!(classes.ends_with(" mt-3"));
        assert!(classes.contains("w-full py-4"));
    }
}
