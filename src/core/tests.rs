#[cfg(test)]
mod tests {
    use crate::core::{
        Disclosure, DisclosureVariant, DisclosureView, HEADLINE_WORDS, NavSheet, RevealConfig,
        RevealSequence,
    };

    // ========================================================================
    // Disclosure toggles
    // ========================================================================

    #[test]
    fn test_toggle_parity() {
        for count in 0..=16 {
            let mut state = Disclosure::default();
            for _ in 0..count {
                state.toggle();
            }
            let expected = if count % 2 == 0 {
                Disclosure::Closed
            } else {
                Disclosure::Open
            };
            assert_eq!(state, expected, "after {} toggles", count);
        }
    }

    #[test]
    fn test_everything_starts_closed() {
        let sheet = NavSheet::new();
        let dropdown = Disclosure::default();

        assert_eq!(sheet.sheet(), Disclosure::Closed);
        assert_eq!(sheet.accordion(), Disclosure::Closed);
        assert_eq!(dropdown, Disclosure::Closed);
        assert!(!DisclosureView::of(dropdown, DisclosureVariant::Overlay).panel_visible);
    }

    #[test]
    fn test_sheet_and_accordion_are_independent() {
        let mut sheet = NavSheet::new();

        for _ in 0..3 {
            let accordion = sheet.accordion();
            sheet.toggle();
            assert_eq!(sheet.accordion(), accordion);
        }

        for _ in 0..3 {
            let outer = sheet.sheet();
            sheet.toggle_accordion();
            assert_eq!(sheet.sheet(), outer);
        }
    }

    #[test]
    fn test_dropdown_and_accordion_do_not_share_state() {
        for (desktop_toggles, mobile_toggles) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            let mut dropdown = Disclosure::default();
            let mut sheet = NavSheet::new();

            for _ in 0..desktop_toggles {
                dropdown.toggle();
            }
            for _ in 0..mobile_toggles {
                sheet.toggle_accordion();
            }

            assert_eq!(dropdown.is_open(), desktop_toggles == 1);
            assert_eq!(sheet.accordion().is_open(), mobile_toggles == 1);
            assert!(!sheet.is_open());
        }
    }

    // ========================================================================
    // Headline reveal
    // ========================================================================

    #[test]
    fn test_reveal_delays_are_index_times_step() {
        let sequence = RevealSequence::headline();
        let step = sequence.config().step_delay();
        assert!(step > 0.0);

        for (i, token) in sequence.tokens().iter().enumerate() {
            assert_eq!(token.index, i);
            assert_eq!(token.text, HEADLINE_WORDS[i]);
            assert_eq!(token.delay, i as f64 * step);
        }
        assert_eq!(sequence.delay_for(0), Some(0.0));
        assert_eq!(sequence.delay_for(4), Some(4.0 * step));
    }

    #[test]
    fn test_reveal_delays_strictly_increase() {
        let sequence = RevealSequence::headline();
        for pair in sequence.tokens().windows(2) {
            assert!(pair[0].delay < pair[1].delay);
        }
    }

    #[test]
    fn test_reveal_is_deterministic() {
        let first = RevealSequence::new(HEADLINE_WORDS, RevealConfig::default());
        let second = RevealSequence::new(HEADLINE_WORDS, RevealConfig::default());
        assert_eq!(first, second);
        assert_eq!(
            first.config().spring().css_easing(24),
            second.config().spring().css_easing(24)
        );
    }
}
