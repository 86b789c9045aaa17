//! Division classification - first-match scan over the canonical table

use crate::division::table::{open_class, Division, DIVISIONS};

/// Classify a nominal weight into the lightest division whose maximum
/// admits it.
///
/// The boundary is inclusive: a boxer exactly at the divisional limit is
/// in weight. Weights above the cruiserweight limit resolve to the
/// open-ended heavyweight class. Non-positive or non-finite input has no
/// classification; callers must treat `None` as its own state, never as a
/// zero-weight division.
#[inline]
pub fn classify(weight_lbs: f64) -> Option<&'static Division> {
    if !weight_lbs.is_finite() || weight_lbs <= 0.0 {
        return None;
    }

    Some(
        DIVISIONS
            .iter()
            .find(|division| weight_lbs <= division.max_weight_lbs)
            .unwrap_or_else(open_class),
    )
}

/// Classify an optional weight, for hosts that hand over `number | null`
#[inline]
pub fn classify_opt(weight_lbs: Option<f64>) -> Option<&'static Division> {
    weight_lbs.and_then(classify)
}

/// Division name suggestion for a weight being typed into a fight form
///
/// Reads the same canonical table as enforcement-time classification.
#[inline]
pub fn suggest_label(weight_lbs: f64) -> Option<&'static str> {
    classify(weight_lbs).map(|division| division.name)
}
