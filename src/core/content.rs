//! Landing page copy
//!
//! All links on the page are placeholders: they point at `#` or at the
//! `#get-started` anchor of the hero section.

use chrono::Datelike;

pub const BRAND_NAME: &str = "Nexa";

/// Logo served from the site root
pub const LOGO_PATH: &str = "/nexa-logo.png";

pub const PLACEHOLDER_HREF: &str = "#";

pub const GET_STARTED_ID: &str = "get-started";
pub const GET_STARTED_HREF: &str = "#get-started";

pub const BADGE_TEXT: &str = "Built for Articulate Storyline creators";

/// Top-level navigation entries rendered before the dropdown
pub const NAV_LINKS_BEFORE: &[&str] = &["Translate", "Scenario", "Tutor"];

/// Top-level navigation entries rendered after the dropdown
pub const NAV_LINKS_AFTER: &[&str] = &["Contact"];

pub const CREATOR_HUB_LABEL: &str = "Creator Hub";

pub const CREATOR_HUB_ITEMS: &[&str] = &[
    "Articles & Guides",
    "Templates",
    "API & Examples",
    "Changelog",
];

/// A product feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub bullets: [&'static str; 3],
}

pub const PRODUCT_CARDS: [ProductCard; 3] = [
    ProductCard {
        title: "Translate",
        blurb: "Upload XLIFF. Get polished, on-brand translations with round-tripping to Word for review.",
        bullets: [
            "Glossary & tone control",
            "Word export / re-import",
            "Batch projects",
        ],
    },
    ProductCard {
        title: "Scenario",
        blurb: "AI-driven role-plays with branching logic, exportable as Storyline web objects.",
        bullets: ["Realistic characters", "Variables & scoring", "Export to LMS"],
    },
    ProductCard {
        title: "Tutor",
        blurb: "Context-aware assistant that answers course questions and tracks understanding.",
        bullets: ["Embeds in slides", "Analytics ready", "Low latency"],
    },
];

pub const CTA_TITLE: &str = "Ship courses your learners actually want to finish.";
pub const CTA_BODY: &str =
    "Bring a Linear-grade toolkit to e-learning. Cleaner workflows, stronger outcomes.";

pub const FOOTER_LINKS: &[&str] = &["Privacy", "Terms", "Status"];

/// Calendar year in the visitor's local time zone
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Footer notice for the given year
pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 Nexa. All rights reserved.");
    }

    #[test]
    fn test_current_year_uses_local_time() {
        let before = chrono::Local::now().year();
        let year = current_year();
        let after = chrono::Local::now().year();
        assert!(year == before || year == after);
    }

    #[test]
    fn test_product_cards() {
        let titles: Vec<_> = PRODUCT_CARDS.iter().map(|card| card.title).collect();
        assert_eq!(titles, vec!["Translate", "Scenario", "Tutor"]);
        assert!(PRODUCT_CARDS.iter().all(|card| !card.blurb.is_empty()));
    }

    #[test]
    fn test_get_started_anchor_matches_id() {
        assert_eq!(GET_STARTED_HREF, format!("#{}", GET_STARTED_ID));
    }

    #[test]
    fn test_creator_hub_items_order() {
        assert_eq!(CREATOR_HUB_ITEMS.first(), Some(&"Articles & Guides"));
        assert_eq!(CREATOR_HUB_ITEMS.last(), Some(&"Changelog"));
    }
}
