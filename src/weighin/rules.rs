//! Enforcement rules derived from a contracted weight

use serde::Serialize;

use crate::division::{classify, OPEN_CLASS_LBS};
use crate::weighin::parser::extract_pounds;

/// Division name reported when the contracted weight is unresolvable
pub const UNRESOLVED_DIVISION: &str = "N/A";

/// Limit and tolerance enforced at the scale for one fight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeighInRules {
    /// Name of the division the contracted weight falls into
    pub division_name: &'static str,
    /// Inclusive limit the official reading is checked against
    pub limit_lbs: f64,
    /// Allowed overage above the limit
    pub tolerance_lbs: f64,
}

impl WeighInRules {
    /// Degenerate rules for an unresolvable contracted weight.
    ///
    /// A defined pass-through state, not an error: any positive reading
    /// against these rules is out of tolerance by the full amount.
    #[inline]
    pub fn unresolved() -> Self {
        Self {
            division_name: UNRESOLVED_DIVISION,
            limit_lbs: 0.0,
            tolerance_lbs: 0.0,
        }
    }

    /// Whether these rules belong to the open-ended heavyweight class
    #[inline]
    pub fn is_open_class(&self) -> bool {
        self.limit_lbs >= OPEN_CLASS_LBS
    }
}

/// Derive the enforcement rules for a fight from its contracted-weight
/// text.
///
/// The enforced limit is the classified division's maximum, so a fight
/// contracted inside a band (say 145 lbs) is checked against the band
/// boundary (147 lbs for welterweight).
pub fn rules_for_contracted(contracted_weight: &str) -> WeighInRules {
    match extract_pounds(contracted_weight).and_then(classify) {
        Some(division) => WeighInRules {
            division_name: division.name,
            limit_lbs: division.max_weight_lbs,
            tolerance_lbs: division.tolerance_lbs,
        },
        None => WeighInRules::unresolved(),
    }
}
