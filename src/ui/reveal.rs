//! Animated hero headline
//!
//! Each word is a `span` running the `nexa-reveal` keyframes (defined with
//! the page styles) with its own `animation-delay`. The spring curve is baked
//! into a CSS `linear()` easing, so no script drives the animation and the
//! words stay readable when animations are disabled.

use leptos::prelude::*;

use crate::core::{RevealConfig, RevealSequence, RevealToken};

/// Points sampled from the spring curve for the CSS easing
const EASING_SAMPLES: usize = 32;

/// Class carried by every animated word
pub const REVEAL_WORD_CLASS: &str = "nexa-reveal-word";

/// Headline revealed word by word on first render
#[component]
pub fn RevealHeadline(
    /// Words and timing; defaults to the hero headline
    #[prop(optional)]
    sequence: Option<RevealSequence>,
) -> impl IntoView {
    let sequence = sequence.unwrap_or_else(RevealSequence::headline);
    let config = *sequence.config();
    let easing = config.spring().css_easing(EASING_SAMPLES);
    let duration = config.spring().settle_duration();

    let words = sequence
        .tokens()
        .iter()
        .map(|token| {
            let style = word_style(token, &config, &easing, duration);
            view! {
                <span class=word_class(token) style=style>
                    {token.text.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <h1 class="mt-6 text-balance font-semibold tracking-tight text-white">
            <span class="sr-only">{sequence.accessible_text()}</span>
            <div class="text-4xl sm:text-5xl md:text-6xl" aria-hidden="true">
                {words}
            </div>
        </h1>
    }
}

fn word_class(token: &RevealToken) -> String {
    if token.emphasized {
        format!("{} inline-block will-change-transform mr-2 font-extrabold", REVEAL_WORD_CLASS)
    } else {
        format!("{} inline-block will-change-transform mr-2", REVEAL_WORD_CLASS)
    }
}

/// Inline style starting this word's entrance after its stagger delay
pub fn word_style(token: &RevealToken, config: &RevealConfig, easing: &str, duration: f64) -> String {
    format!(
        "--reveal-offset: {}px; animation: nexa-reveal {:.3}s {} {}s both;",
        config.offset_px(),
        duration,
        easing,
        token.delay
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HEADLINE_WORDS;

    fn token(index: usize, delay: f64) -> RevealToken {
        RevealToken {
            index,
            text: "word".to_string(),
            delay,
            emphasized: index == 0,
        }
    }

    #[test]
    fn test_word_style_carries_delay() {
        let config = RevealConfig::default();
        let style = word_style(&token(3, 0.36000000000000004), &config, "linear(0, 1)", 0.5);
        assert_eq!(
            style,
            "--reveal-offset: 20px; animation: nexa-reveal 0.500s linear(0, 1) 0.36000000000000004s both;"
        );
    }

    #[test]
    fn test_first_word_style_starts_immediately() {
        let config = RevealConfig::default();
        let style = word_style(&token(0, 0.0), &config, "ease", 1.0);
        assert!(style.ends_with(" 0s both;"));
    }

    #[test]
    fn test_word_class_emphasis() {
        assert!(word_class(&token(0, 0.0)).contains("font-extrabold"));
        assert!(!word_class(&token(1, 0.12)).contains("font-extrabold"));
        assert!(word_class(&token(1, 0.12)).starts_with(REVEAL_WORD_CLASS));
    }

    #[test]
    fn test_styles_follow_sequence_order() {
        let sequence = RevealSequence::headline();
        let config = *sequence.config();
        let styles: Vec<String> = sequence
            .tokens()
            .iter()
            .map(|t| word_style(t, &config, "ease", 0.4))
            .collect();
        assert!(styles[0].contains(" 0s both"));
        assert!(styles[1].contains(" 0.12s both"));
        assert!(styles[4].contains(" 0.48s both"));
    }

    fn start_time(style: &str) -> f64 {
        let rest = style
            .strip_suffix("s both;")
            .expect("style ends with the start time");
        let start = rest.rsplit(' ').next().expect("start time present");
        start.parse().expect("start time is a number")
    }

    #[test]
    fn test_tiny_step_keeps_words_apart() {
        let config = RevealConfig::new(0.004, 260.0, 24.0).unwrap();
        let sequence = RevealSequence::new(HEADLINE_WORDS, config);

        let starts: Vec<f64> = sequence
            .tokens()
            .iter()
            .map(|t| start_time(&word_style(t, &config, "ease", 0.4)))
            .collect();

        for (i, pair) in starts.windows(2).enumerate() {
            assert!(
                pair[0] < pair[1],
                "word {} starts at {} but word {} at {}",
                i,
                pair[0],
                i + 1,
                pair[1]
            );
        }
        for (token, start) in sequence.tokens().iter().zip(&starts) {
            assert_eq!(*start, token.delay);
        }
    }
}
