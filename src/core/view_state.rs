//! Render decisions derived from disclosure state
//!
//! Components read these flags instead of branching on raw state, so what the
//! page shows for a given state can be checked without rendering it.

use super::disclosure::{Disclosure, DisclosureVariant};

/// What a disclosure widget shows for a given state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisclosureView {
    /// Whether the panel is present in the tree
    pub panel_visible: bool,
    /// Whether the trigger chevron is rotated by 180 degrees
    pub chevron_rotated: bool,
    /// Value for the trigger's `aria-expanded`
    pub aria_expanded: bool,
    /// Layout classes of the panel
    pub panel_class: &'static str,
}

impl DisclosureView {
    pub fn of(state: Disclosure, variant: DisclosureVariant) -> Self {
        let open = state.is_open();
        Self {
            panel_visible: open,
            chevron_rotated: open,
            aria_expanded: open,
            panel_class: panel_class(variant),
        }
    }
}

fn panel_class(variant: DisclosureVariant) -> &'static str {
    match variant {
        DisclosureVariant::Overlay => {
            "absolute right-0 mt-2 min-w-[220px] overflow-hidden rounded-xl border border-white/10 bg-[#0e0e13] p-1 shadow-2xl"
        }
        DisclosureVariant::Inline => {
            "ml-2 mt-1 flex flex-col gap-1 border-l border-white/10 pl-3"
        }
    }
}

/// Icon shown on the mobile menu button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Menu,
    Close,
}

/// What the mobile menu button and sheet show for a given sheet state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuButtonView {
    pub icon: MenuIcon,
    pub sheet_visible: bool,
    pub aria_label: &'static str,
}

impl MenuButtonView {
    pub fn of(sheet: Disclosure) -> Self {
        let open = sheet.is_open();
        Self {
            icon: if open { MenuIcon::Close } else { MenuIcon::Menu },
            sheet_visible: open,
            aria_label: "Toggle menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_hides_panel_for_both_variants() {
        for variant in [DisclosureVariant::Overlay, DisclosureVariant::Inline] {
            let view = DisclosureView::of(Disclosure::Closed, variant);
            assert!(!view.panel_visible);
            assert!(!view.chevron_rotated);
            assert!(!view.aria_expanded);
        }
    }

    #[test]
    fn test_open_shows_panel_and_rotates_chevron() {
        let view = DisclosureView::of(Disclosure::Open, DisclosureVariant::Overlay);
        assert!(view.panel_visible);
        assert!(view.chevron_rotated);
        assert!(view.aria_expanded);
    }

    #[test]
    fn test_variant_only_changes_layout() {
        let overlay = DisclosureView::of(Disclosure::Open, DisclosureVariant::Overlay);
        let inline = DisclosureView::of(Disclosure::Open, DisclosureVariant::Inline);

        assert_eq!(overlay.panel_visible, inline.panel_visible);
        assert_eq!(overlay.chevron_rotated, inline.chevron_rotated);
        assert_ne!(overlay.panel_class, inline.panel_class);
        assert!(overlay.panel_class.contains("absolute"));
        assert!(!inline.panel_class.contains("absolute"));
    }

    #[test]
    fn test_menu_button_icon() {
        let closed = MenuButtonView::of(Disclosure::Closed);
        assert_eq!(closed.icon, MenuIcon::Menu);
        assert!(!closed.sheet_visible);

        let open = MenuButtonView::of(Disclosure::Open);
        assert_eq!(open.icon, MenuIcon::Close);
        assert!(open.sheet_visible);
        assert_eq!(open.aria_label, "Toggle menu");
    }
}
