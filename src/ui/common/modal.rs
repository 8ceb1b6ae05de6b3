use crate::core::PointerTarget;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Full-screen media overlay.
///
/// Nothing is mounted while `is_open` is false. Clicks on the dimmed backdrop
/// report [`PointerTarget::Backdrop`]; clicks inside the dialog are stopped at
/// the dialog and report [`PointerTarget::Content`], so they never reach the
/// backdrop handler.
#[component]
pub fn MediaModal(
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Pointer interaction inside the overlay
    on_pointer: Callback<PointerTarget>,
    /// Close button and Escape key
    on_close: Callback<()>,
    /// Accessible name of the dialog
    label: &'static str,
    /// Dialog content
    children: ChildrenFn,
    /// Maximum width class (default: max-w-4xl)
    #[prop(default = "max-w-4xl")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key, lock page scroll while open
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });
        on_cleanup(move || drop(handle_keydown));

        Effect::new(move |_| set_body_scroll_locked(is_open.get()));
        on_cleanup(|| set_body_scroll_locked(false));
    }

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-[100] flex items-center justify-center bg-black/80 backdrop-blur-sm p-4 modal-fade-in"
                data-modal-backdrop="true"
                on:click=move |_| on_pointer.run(PointerTarget::Backdrop)
            >
                <div
                    class=format!("relative w-full {} bg-black rounded-3xl overflow-hidden shadow-2xl modal-pop-in", max_width)
                    role="dialog"
                    aria-modal="true"
                    aria-label=label
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_pointer.run(PointerTarget::Content);
                    }
                >
                    <button
                        class="absolute top-4 right-4 z-10 w-10 h-10 bg-white/20 hover:bg-white/40 backdrop-blur-md rounded-full flex items-center justify-center transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Tutup"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="w-5 h-5 invert" />
                    </button>

                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        leptos::logging::warn!("failed to update body overflow: {err:?}");
    }
}
