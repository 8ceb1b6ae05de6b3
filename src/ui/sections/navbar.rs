use leptos::prelude::*;

use crate::core::NavMenu;
use crate::core::content::{APP_NAME, DOWNLOAD_URL, LOGO_SRC, NAV_ITEMS};
use crate::ui::common::{CtaLink, CtaSize, CtaVariant};
use crate::ui::icon::{Icon, icons};

/// Floating pill navbar with a mobile overlay menu
#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());
    let is_open = move || menu.with(NavMenu::is_open);
    let close_menu = Callback::new(move |_: ()| menu.update(NavMenu::select_item));

    view! {
        <nav class="fixed top-0 left-0 w-full z-50 flex justify-center pt-4 sm:pt-6 px-4 pointer-events-none">
            <div class="navbar-drop-in pointer-events-auto w-full max-w-5xl bg-white/80 backdrop-blur-xl border border-white/50
                        shadow-xl shadow-slate-200/50 rounded-full pl-6 pr-3 py-2 flex justify-between items-center">
                <Brand />

                // Desktop links
                <div class="hidden md:flex items-center gap-6 lg:gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="text-sm font-bold text-slate-500 hover:text-[#d84040] transition-colors"
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <CtaLink
                        href=DOWNLOAD_URL
                        new_tab=true
                        variant=CtaVariant::Dark
                        size=CtaSize::Small
                        class="ml-4"
                    >
                        "Unduh Sekarang"
                    </CtaLink>
                </div>

                // Mobile toggle
                <button
                    class="md:hidden text-slate-900 w-9 h-9 sm:w-10 sm:h-10 flex items-center justify-center bg-slate-100 rounded-full hover:bg-slate-200 transition-colors"
                    on:click=move |_| menu.update(NavMenu::toggle)
                    aria-label="Toggle Menu"
                    aria-expanded=move || is_open().to_string()
                >
                    {move || {
                        if is_open() {
                            view! { <Icon name=icons::X class="w-5 h-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-5 h-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <MobileMenu is_open=Signal::derive(is_open) on_select=close_menu />
        </nav>
    }
}

/// Overlay menu for small screens, mounted only while open
#[component]
pub fn MobileMenu(
    is_open: Signal<bool>,
    /// Any link or the call-to-action was selected
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div
                class="menu-pop-in pointer-events-auto absolute top-16 mt-4 left-4 right-4 bg-white rounded-3xl p-4 shadow-2xl border border-slate-100 md:hidden origin-top z-40"
                data-mobile-menu="true"
            >
                <div class="flex flex-col gap-1">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="text-lg font-bold text-slate-800 py-3 px-4 hover:bg-slate-50 rounded-xl transition-colors"
                                    on:click=move |_| on_select.run(())
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <CtaLink
                        href=DOWNLOAD_URL
                        new_tab=true
                        variant=CtaVariant::Brand
                        size=CtaSize::Block
                        class="mt-3"
                        on_click=on_select
                    >
                        "Unduh Aplikasi"
                    </CtaLink>
                </div>
            </div>
        </Show>
    }
}

/// Logo and wordmark
#[component]
fn Brand() -> impl IntoView {
    view! {
        <a href="#" class="flex items-center gap-2 sm:gap-3" aria-label=APP_NAME>
            <div class="w-8 h-8 sm:w-10 sm:h-10 flex items-center justify-center">
                <img src=LOGO_SRC alt="Fluent AI Logo" class="w-full h-full object-contain" loading="lazy" />
            </div>
            <span class="text-xl font-black text-slate-900 tracking-tight">
                "FLUENT"<span class="text-[#d84040]">".AI"</span>
            </span>
        </a>
    }
}
