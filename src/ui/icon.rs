use leptos::prelude::*;

/// Inline stroke icon, drawn in the surrounding text color
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes
    #[prop(default = "h-4 w-4")]
    class: &'static str,
) -> impl IntoView {
    match name {
        icons::ARROW_RIGHT => view! {
            <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                 stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </svg>
        }
        .into_any(),
        icons::CHEVRON_DOWN => view! {
            <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                 stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="m6 9 6 6 6-6" />
            </svg>
        }
        .into_any(),
        icons::MENU => view! {
            <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                 stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M4 6h16" />
                <path d="M4 12h16" />
                <path d="M4 18h16" />
            </svg>
        }
        .into_any(),
        icons::X => view! {
            <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                 stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </svg>
        }
        .into_any(),
        _ => view! { <span class=class aria-hidden="true"></span> }.into_any(),
    }
}

/// Icon names understood by [`Icon`]
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(name: &'static str) -> String {
        view! { <Icon name=name /> }.to_html()
    }

    #[test]
    fn test_icons_follow_text_color() {
        for name in [icons::ARROW_RIGHT, icons::CHEVRON_DOWN, icons::MENU, icons::X] {
            let html = render(name);
            assert!(html.contains("<svg"), "{}: {}", name, html);
            assert!(html.contains("stroke=\"currentColor\""), "{}: {}", name, html);
            assert!(html.contains("<path"), "{}: {}", name, html);
            assert!(!html.contains("#ffffff"), "{}: {}", name, html);
        }
    }

    #[test]
    fn test_unknown_icon_renders_placeholder() {
        let html = render("does-not-exist");
        assert!(!html.contains("<svg"));
        assert!(html.contains("<span"));
    }
}
