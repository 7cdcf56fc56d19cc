//! Landing page component
//!
//! Single-page marketing site for Nexa:
//! - Sticky header with desktop nav, "Creator Hub" dropdown and a mobile sheet
//! - Hero with a word-by-word animated headline
//! - Product cards, call-to-action band and footer

use leptos::prelude::*;
use leptos_meta::Meta;

use crate::core::content::{
    BADGE_TEXT, BRAND_NAME, CREATOR_HUB_ITEMS, CREATOR_HUB_LABEL, CTA_BODY, CTA_TITLE,
    FOOTER_LINKS, GET_STARTED_HREF, GET_STARTED_ID, LOGO_PATH, NAV_LINKS_AFTER, NAV_LINKS_BEFORE,
    PLACEHOLDER_HREF, PRODUCT_CARDS, ProductCard, copyright_line, current_year,
};
use crate::core::{MenuButtonView, MenuIcon, NavSheet};
use crate::ui::common::{Accordion, Dropdown};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{REVEAL_WORD_CLASS, RevealHeadline};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Meta
            name="description"
            content="Nexa gives Articulate Storyline creators modern AI tools: Translate, Scenario, Tutor and Creator Hub."
        />
        <LandingStyles />

        <div class="min-h-screen w-full bg-[#0b0b0f] text-white selection:bg-white/10 selection:text-white">
            <BackgroundAccents />
            <Header />

            <main class="mx-auto max-w-7xl px-4 pb-24 pt-16 sm:px-6 lg:px-8">
                <Hero />

                // Product cards
                <section class="mx-auto mt-20 grid max-w-6xl grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-3">
                    {PRODUCT_CARDS.iter().map(|card| view! { <ProductCardView card=*card /> }).collect_view()}
                </section>

                <CtaBand />
            </main>

            <Footer />
        </div>
    }
}

/// Grid and glow behind the page
#[component]
fn BackgroundAccents() -> impl IntoView {
    view! {
        <div class="pointer-events-none fixed inset-0 -z-10" aria-hidden="true">
            <div class="absolute inset-0 nexa-grid-bg"></div>
            <div class="absolute -top-32 left-1/2 h-[480px] w-[880px] -translate-x-1/2 rounded-full bg-[radial-gradient(ellipse_at_center,rgba(99,102,241,0.25),transparent_60%)] blur-3xl"></div>
        </div>
    }
}

/// Header with desktop navigation and the mobile sheet
#[component]
fn Header() -> impl IntoView {
    let nav = RwSignal::new(NavSheet::new());
    let menu = Memo::new(move |_| MenuButtonView::of(nav.get().sheet()));

    let toggle_accordion = Callback::new(move |_: ()| {
        nav.update(|n| {
            n.toggle_accordion();
        });
    });

    view! {
        <header class="sticky top-0 z-40 border-b border-white/5 bg-[#0b0b0f]/60 backdrop-blur-xl">
            <div class="mx-auto flex max-w-7xl items-center justify-between px-4 py-3 sm:px-6 lg:px-8">
                <div class="flex items-center gap-3">
                    <img src=LOGO_PATH alt="Nexa logo" class="h-8 w-auto" />
                    <span class="text-xl font-semibold tracking-tight">{BRAND_NAME}</span>
                </div>

                // Desktop nav
                <nav class="hidden items-center gap-2 md:flex">
                    {NAV_LINKS_BEFORE.iter().map(|label| view! { <NavLink label=*label /> }).collect_view()}
                    <Dropdown label=CREATOR_HUB_LABEL items=CREATOR_HUB_ITEMS />
                    {NAV_LINKS_AFTER.iter().map(|label| view! { <NavLink label=*label /> }).collect_view()}
                    <a
                        href=GET_STARTED_HREF
                        class="ml-2 inline-flex items-center gap-2 rounded-xl border border-white/10 bg-white/5 px-4 py-2 text-sm font-medium hover:bg-white/10"
                    >
                        "Get started"
                        <Icon name=icons::ARROW_RIGHT />
                    </a>
                </nav>

                // Mobile menu button
                <button
                    class="md:hidden inline-flex h-9 w-9 items-center justify-center rounded-lg border border-white/10 bg-white/5"
                    on:click=move |_| nav.update(|n| {
                        n.toggle();
                    })
                    aria-label=move || menu.get().aria_label
                    aria-expanded=move || menu.get().sheet_visible.to_string()
                >
                    {move || match menu.get().icon {
                        MenuIcon::Menu => view! { <Icon name=icons::MENU class="h-5 w-5" /> }.into_any(),
                        MenuIcon::Close => view! { <Icon name=icons::X class="h-5 w-5" /> }.into_any(),
                    }}
                </button>
            </div>

            // Mobile sheet
            <Show when=move || menu.get().sheet_visible>
                <div class="md:hidden border-t border-white/5 bg-[#0b0b0f]/90 px-4 py-4 sm:px-6">
                    <div class="flex flex-col gap-1">
                        {NAV_LINKS_BEFORE.iter().map(|label| view! { <MobileLink label=*label /> }).collect_view()}
                        <Accordion
                            label=CREATOR_HUB_LABEL
                            items=CREATOR_HUB_ITEMS
                            state=Signal::derive(move || nav.get().accordion())
                            on_toggle=toggle_accordion
                        />
                        {NAV_LINKS_AFTER.iter().map(|label| view! { <MobileLink label=*label /> }).collect_view()}
                        <a
                            href=GET_STARTED_HREF
                            class="mt-2 inline-flex items-center justify-center gap-2 rounded-xl border border-white/10 bg-white/5 px-4 py-2 text-sm font-medium hover:bg-white/10"
                        >
                            "Get started"
                            <Icon name=icons::ARROW_RIGHT />
                        </a>
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn NavLink(label: &'static str) -> impl IntoView {
    view! {
        <a
            href=PLACEHOLDER_HREF
            class="rounded-lg px-3 py-2 text-sm/6 text-white/80 ring-white/10 transition hover:bg-white/5 hover:text-white"
        >
            {label}
        </a>
    }
}

#[component]
fn MobileLink(label: &'static str) -> impl IntoView {
    view! {
        <a
            href=PLACEHOLDER_HREF
            class="rounded-lg px-2 py-2 text-sm/6 opacity-90 hover:bg-white/5 hover:opacity-100"
        >
            {label}
        </a>
    }
}

/// Hero section with the animated headline
#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="mx-auto max-w-3xl text-center">
            <Badge text=BADGE_TEXT />

            <RevealHeadline />

            <p class="mx-auto mt-5 max-w-2xl text-pretty text-base/7 text-white/70">
                "Nexa gives you modern AI tools: "
                <span class="text-white/90">"Translate"</span>", "
                <span class="text-white/90">"Scenario"</span>", "
                <span class="text-white/90">"Tutor"</span>" and "
                <span class="text-white/90">"Creator Hub"</span>
                " to craft engaging Storyline experiences, faster. Less fiddly workflows. More creative control."
            </p>

            <div class="mt-8 flex items-center justify-center gap-3">
                <a
                    id=GET_STARTED_ID
                    href=PLACEHOLDER_HREF
                    class="inline-flex items-center gap-2 rounded-2xl bg-white px-5 py-3 text-sm font-medium text-black shadow-sm hover:bg-white/90"
                >
                    "Try for free"
                    <Icon name=icons::ARROW_RIGHT />
                </a>
                <a
                    href=PLACEHOLDER_HREF
                    class="inline-flex items-center gap-2 rounded-2xl border border-white/15 bg-white/5 px-5 py-3 text-sm font-medium hover:bg-white/10"
                >
                    "Book a demo"
                </a>
            </div>
        </div>
    }
}

/// Pill with a pinging dot
#[component]
fn Badge(text: &'static str) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-3 py-1 text-xs text-white/80">
            <span class="relative inline-flex h-2 w-2">
                <span class="absolute inline-flex h-full w-full animate-ping rounded-full bg-white/40 opacity-40"></span>
                <span class="relative inline-flex h-2 w-2 rounded-full bg-white/80"></span>
            </span>
            {text}
        </span>
    }
}

/// Product feature card
#[component]
fn ProductCardView(card: ProductCard) -> impl IntoView {
    view! {
        <div class="group relative overflow-hidden rounded-3xl border border-white/10 bg-white/[0.03] p-5 transition hover:border-white/20">
            <div class="pointer-events-none absolute -right-10 -top-10 h-40 w-40 rounded-full bg-[radial-gradient(circle,rgba(255,255,255,0.06),transparent_60%)] opacity-0 transition group-hover:opacity-100"></div>
            <h3 class="text-lg font-semibold tracking-tight">{card.title}</h3>
            <p class="mt-1 text-sm text-white/70">{card.blurb}</p>
            <ul class="mt-4 grid gap-1 text-sm text-white/80 [list-style:inside_disc]">
                {card.bullets.iter().map(|bullet| view! { <li>{*bullet}</li> }).collect_view()}
            </ul>
            <a
                href=PLACEHOLDER_HREF
                class="mt-4 inline-flex items-center gap-2 text-sm text-white/80 hover:text-white"
            >
                "Learn more"
                <Icon name=icons::ARROW_RIGHT />
            </a>
        </div>
    }
}

/// Call-to-action band
#[component]
fn CtaBand() -> impl IntoView {
    view! {
        <section class="mx-auto mt-20 max-w-6xl overflow-hidden rounded-3xl border border-white/10 bg-gradient-to-br from-white/5 to-white/[0.03] p-8">
            <div class="grid gap-6 md:grid-cols-2 md:items-center">
                <div>
                    <h2 class="text-xl font-semibold tracking-tight">{CTA_TITLE}</h2>
                    <p class="mt-2 text-white/70">{CTA_BODY}</p>
                </div>
                <div class="flex gap-3 md:justify-end">
                    <a
                        href=PLACEHOLDER_HREF
                        class="inline-flex items-center gap-2 rounded-xl bg-white px-4 py-2 text-sm font-medium text-black hover:bg-white/90"
                    >
                        "Start building"
                        <Icon name=icons::ARROW_RIGHT />
                    </a>
                    <a
                        href=PLACEHOLDER_HREF
                        class="inline-flex items-center gap-2 rounded-xl border border-white/15 bg-white/5 px-4 py-2 text-sm hover:bg-white/10"
                    >
                        "View docs"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="border-t border-white/5 py-10">
            <div class="mx-auto flex max-w-7xl flex-col items-center justify-between gap-4 px-4 sm:flex-row sm:px-6 lg:px-8">
                <p class="text-sm text-white/50">{copyright_line(year)}</p>
                <div class="flex items-center gap-4 text-sm">
                    {FOOTER_LINKS.iter().map(|label| {
                        view! {
                            <a class="hover:text-white/80" href=PLACEHOLDER_HREF>{*label}</a>
                        }
                    }).collect_view()}
                </div>
            </div>
        </footer>
    }
}

/// CSS for the headline reveal and the background grid
#[component]
fn LandingStyles() -> impl IntoView {
    let css = format!(
        r#"
        /* Background grid */
        .nexa-grid-bg {{
            background-image:
                linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
                linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
            background-size: 32px 32px, 32px 32px;
            mask-image: radial-gradient(ellipse at center, black, transparent 70%);
        }}

        /* Headline reveal, timing set per word inline */
        @keyframes nexa-reveal {{
            from {{
                opacity: 0;
                transform: translateY(var(--reveal-offset, 20px));
            }}
            to {{
                opacity: 1;
                transform: translateY(0);
            }}
        }}

        @media (prefers-reduced-motion: reduce) {{
            .{word} {{
                animation: none !important;
            }}
        }}
        "#,
        word = REVEAL_WORD_CLASS
    );

    view! { <style>{css}</style> }
}
