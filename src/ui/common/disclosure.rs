use leptos::prelude::*;
use leptos::web_sys::MouseEvent;

use crate::core::content::PLACEHOLDER_HREF;
use crate::core::{Disclosure, DisclosureVariant, DisclosureView};
use crate::ui::icon::{Icon, icons};

/// Chevron that flips while its panel is open
#[component]
pub fn Chevron(#[prop(into)] rotated: Signal<bool>) -> impl IntoView {
    view! {
        <span
            class="inline-flex h-4 w-4 transition-transform"
            class=("rotate-180", move || rotated.get())
        >
            <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
        </span>
    }
}

/// Desktop dropdown: a trigger with a panel floating under it
///
/// Owns its open state. The panel closes only when the trigger is clicked
/// again.
#[component]
pub fn Dropdown(
    /// Trigger text
    label: &'static str,
    /// Panel links, all placeholders
    items: &'static [&'static str],
) -> impl IntoView {
    let state = RwSignal::new(Disclosure::default());
    let view_state = Memo::new(move |_| DisclosureView::of(state.get(), DisclosureVariant::Overlay));

    let toggle = move |_: MouseEvent| {
        state.update(|s| {
            s.toggle();
        });
    };

    view! {
        <div class="relative" data-state=move || state.get().to_string()>
            <button
                class="inline-flex items-center gap-1 rounded-lg px-3 py-2 text-sm/6 text-white/80 hover:bg-white/5 hover:text-white"
                on:click=toggle
                aria-haspopup="true"
                aria-expanded=move || view_state.get().aria_expanded.to_string()
            >
                {label}
                <Chevron rotated=Signal::derive(move || view_state.get().chevron_rotated) />
            </button>

            <Show when=move || view_state.get().panel_visible>
                <div class=view_state.get_untracked().panel_class role="menu">
                    {items.iter().map(|item| {
                        view! {
                            <a
                                href=PLACEHOLDER_HREF
                                class="block rounded-lg px-3 py-2 text-sm/6 text-white/80 hover:bg-white/5 hover:text-white"
                                role="menuitem"
                            >
                                {*item}
                            </a>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Mobile accordion: a trigger with a block expanding inline below it
///
/// State is held by the caller so it can outlive the accordion itself (the
/// mobile sheet keeps it while the sheet is closed).
#[component]
pub fn Accordion(
    /// Trigger text
    label: &'static str,
    /// Links shown when expanded, all placeholders
    items: &'static [&'static str],
    /// Current open state
    #[prop(into)]
    state: Signal<Disclosure>,
    /// Called when the trigger is clicked
    on_toggle: Callback<()>,
) -> impl IntoView {
    let view_state = Memo::new(move |_| DisclosureView::of(state.get(), DisclosureVariant::Inline));

    view! {
        <div data-state=move || state.get().to_string()>
            <button
                class="w-full cursor-pointer rounded-lg px-2 py-2 text-left text-sm/6 opacity-90 hover:opacity-100"
                on:click=move |_| on_toggle.run(())
                aria-expanded=move || view_state.get().aria_expanded.to_string()
            >
                <span class="inline-flex items-center gap-2">
                    {label}
                    <Chevron rotated=Signal::derive(move || view_state.get().chevron_rotated) />
                </span>
            </button>

            <Show when=move || view_state.get().panel_visible>
                <div class=view_state.get_untracked().panel_class>
                    {items.iter().map(|item| {
                        view! {
                            <a
                                href=PLACEHOLDER_HREF
                                class="rounded-md px-2 py-1 text-sm/6 opacity-80 hover:bg-white/5 hover:opacity-100"
                            >
                                {*item}
                            </a>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
