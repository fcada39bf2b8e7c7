//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences.

use proptest::prelude::*;
use tally::core::{apply, CalculatorState, Event, Rules};
use tally::{Calculator, CalculatorBuilder};

const KEYS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "x", "÷", "*", "/", "=",
    "Enter", "Backspace", "Escape", "q",
];

prop_compose! {
    fn arbitrary_key()(key in prop::sample::select(KEYS)) -> &'static str {
        key
    }
}

prop_compose! {
    fn arbitrary_digit()(d in 0u32..10) -> char {
        char::from_digit(d, 10).unwrap()
    }
}

/// Expected bottom line after typing digits only.
fn typed_model(digits: &[char], cap: usize) -> String {
    let mut entry = String::new();
    for &d in digits {
        if entry == "0" || entry.len() >= cap {
            entry = d.to_string();
        } else {
            entry.push(d);
        }
    }
    entry
}

proptest! {
    #[test]
    fn digits_show_with_leading_zero_suppressed(
        digits in prop::collection::vec(arbitrary_digit(), 0..40)
    ) {
        let mut calc = Calculator::new();
        for &d in &digits {
            calc.append_digit(d);
        }
        let display = calc.render_display();
        prop_assert_eq!(display.bottom, typed_model(&digits, 15));
        prop_assert_eq!(display.top, "");
    }

    #[test]
    fn typed_operand_has_at_most_one_point(
        keys in prop::collection::vec(arbitrary_key(), 0..60)
    ) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.dispatch_key(key);
            let points = calc.state().current_operand().matches('.').count();
            prop_assert!(points <= 1);
            calc.render_display();
        }
    }

    #[test]
    fn typed_operand_stays_within_cap(
        cap in 1usize..20,
        keys in prop::collection::vec(arbitrary_key(), 0..80)
    ) {
        let mut calc = CalculatorBuilder::new().max_entry_len(cap).build().unwrap();
        for key in keys {
            calc.dispatch_key(key);
            prop_assert!(calc.state().current_operand().chars().count() <= cap + 1);
        }
    }

    #[test]
    fn history_never_exceeds_limit(
        limit in 0usize..8,
        keys in prop::collection::vec(arbitrary_key(), 0..30)
    ) {
        let mut calc = CalculatorBuilder::new().history_limit(limit).build().unwrap();
        for key in keys {
            calc.dispatch_key(key);
        }
        prop_assert!(calc.history().len() <= limit);
    }

    #[test]
    fn chained_additions_accumulate(
        terms in prop::collection::vec(0u32..1000, 1..10)
    ) {
        let mut calc = Calculator::new();
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                calc.dispatch_key("+");
            }
            for c in term.to_string().chars() {
                calc.append_digit(c);
            }
        }
        calc.dispatch_key("=");

        let expected: u32 = terms.iter().sum();
        let display = calc.render_display();
        // A single term never meets an operator, so it stays on the bottom line
        if terms.len() == 1 {
            prop_assert_eq!(display.bottom, expected.to_string());
        } else {
            prop_assert_eq!(display.top, expected.to_string());
            prop_assert_eq!(display.bottom, "");
        }
    }

    #[test]
    fn render_without_pending_message_is_stable(
        keys in prop::collection::vec(arbitrary_key(), 0..40)
    ) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.dispatch_key(key);
        }
        if !calc.state().is_divide_by_zero() {
            let first = calc.render_display();
            let second = calc.render_display();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn pending_message_clears_after_one_render(
        keys in prop::collection::vec(arbitrary_key(), 0..40)
    ) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.dispatch_key(key);
        }
        calc.render_display();
        prop_assert!(!calc.state().is_divide_by_zero());
    }

    #[test]
    fn engine_matches_pure_fold(
        keys in prop::collection::vec(arbitrary_key(), 0..40)
    ) {
        let rules = Rules::default();
        let expected = keys
            .iter()
            .filter_map(|key| Event::from_key(key))
            .fold(CalculatorState::new(), |state, event| apply(state, &event, &rules));

        let mut calc = Calculator::new();
        for key in &keys {
            calc.dispatch_key(key);
        }
        prop_assert_eq!(calc.state(), &expected);
    }
}
