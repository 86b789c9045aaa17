//! Property tests for division classification

use proptest::prelude::*;

use crate::division::{classify, suggest_label, Division, DIVISIONS, OPEN_CLASS_LBS};

/// Weights inside the finite part of the table
fn finite_weight_strategy() -> impl Strategy<Value = f64> {
    (1u32..=20000u32).prop_map(|hundredths| hundredths as f64 / 100.0)
}

/// Weights above the top finite boundary
fn open_class_weight_strategy() -> impl Strategy<Value = f64> {
    (20001u32..=500000u32).prop_map(|hundredths| hundredths as f64 / 100.0)
}

proptest! {
    /// The chosen division admits the weight, and no lighter division does
    /// (minimality of the first-match scan).
    #[test]
    fn prop_classification_is_minimal(w in finite_weight_strategy()) {
        let division = classify(w).unwrap();
        prop_assert!(division.max_weight_lbs >= w);

        let lighter: Vec<&Division> = DIVISIONS
            .iter()
            .filter(|d| d.max_weight_lbs < division.max_weight_lbs)
            .collect();
        for d in lighter {
            prop_assert!(d.max_weight_lbs < w, "lighter {} also admits {}", d.name, w);
        }
    }

    /// Everything above the cruiserweight limit is heavyweight, with the
    /// sentinel limit and tolerance.
    #[test]
    fn prop_above_top_limit_is_open_class(w in open_class_weight_strategy()) {
        let division = classify(w).unwrap();
        prop_assert_eq!(division.name, "Peso Pesado");
        prop_assert_eq!(division.max_weight_lbs, OPEN_CLASS_LBS);
        prop_assert_eq!(division.tolerance_lbs, OPEN_CLASS_LBS);
    }

    /// Non-positive weights never classify.
    #[test]
    fn prop_non_positive_never_classifies(w in -10000i32..=0i32) {
        prop_assert!(classify(w as f64 / 10.0).is_none());
    }

    /// Classification is a pure function: repeated calls agree.
    #[test]
    fn prop_classification_is_idempotent(w in finite_weight_strategy()) {
        let first = classify(w);
        let second = classify(w);
        prop_assert_eq!(first, second);
    }

    /// The form-suggestion label and enforcement classification always
    /// name the same division (single canonical table).
    #[test]
    fn prop_suggestion_agrees_with_classification(w in finite_weight_strategy()) {
        prop_assert_eq!(suggest_label(w), classify(w).map(|d| d.name));
    }

    /// Classification is monotone: a heavier weight never lands in a
    /// lighter division.
    #[test]
    fn prop_classification_is_monotone(
        a in finite_weight_strategy(),
        b in finite_weight_strategy()
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_max = classify(lo).unwrap().max_weight_lbs;
        let hi_max = classify(hi).unwrap().max_weight_lbs;
        prop_assert!(lo_max <= hi_max);
    }
}
