//! Canonical division table
//!
//! The historical admin app carried two hand-maintained copies of this
//! table that drifted apart between 108 and 126 lbs. This is the
//! consolidated enforcement copy; every call site reads it.

use serde::Serialize;

/// Sentinel limit for the open-ended heavyweight class.
///
/// The heaviest division has no upper bound; 9999 is the commission's
/// conventional stand-in and must survive round-trips to the host intact.
pub const OPEN_CLASS_LBS: f64 = 9999.0;

/// One boxing weight class: inclusive upper bound plus the overage the
/// commission tolerates at the official weigh-in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Division {
    /// Canonical name as it appears on commission paperwork
    pub name: &'static str,
    /// English name used on license cards
    pub name_en: &'static str,
    /// Inclusive maximum weight admitted into this division
    pub max_weight_lbs: f64,
    /// Pounds allowed above the limit before the boxer is non-compliant
    pub tolerance_lbs: f64,
}

impl Division {
    /// Whether this is the open-ended heavyweight class
    #[inline]
    pub fn is_open_class(&self) -> bool {
        self.max_weight_lbs >= OPEN_CLASS_LBS
    }
}

/// Division table ordered ascending by `max_weight_lbs`.
///
/// Maxima are unique and strictly increasing, the table is exhaustive from
/// the lightest class upward, and exactly one open-ended class closes it.
pub static DIVISIONS: [Division; 17] = [
    Division { name: "Peso Mínimo", name_en: "Minimumweight", max_weight_lbs: 105.0, tolerance_lbs: 1.0 },
    Division { name: "Peso Ligero Mosca", name_en: "Light Flyweight", max_weight_lbs: 108.0, tolerance_lbs: 1.0 },
    Division { name: "Peso Mosca", name_en: "Flyweight", max_weight_lbs: 112.0, tolerance_lbs: 1.0 },
    Division { name: "Peso Súper Mosca", name_en: "Super Flyweight", max_weight_lbs: 115.0, tolerance_lbs: 1.0 },
    Division { name: "Peso Gallo", name_en: "Bantamweight", max_weight_lbs: 118.0, tolerance_lbs: 2.0 },
    Division { name: "Peso Súper Gallo", name_en: "Super Bantamweight", max_weight_lbs: 122.0, tolerance_lbs: 2.0 },
    Division { name: "Peso Pluma", name_en: "Featherweight", max_weight_lbs: 126.0, tolerance_lbs: 2.0 },
    Division { name: "Peso Súper Pluma", name_en: "Super Featherweight", max_weight_lbs: 130.0, tolerance_lbs: 2.0 },
    Division { name: "Peso Ligero", name_en: "Lightweight", max_weight_lbs: 135.0, tolerance_lbs: 2.0 },
    Division { name: "Peso Súper Ligero", name_en: "Super Lightweight", max_weight_lbs: 140.0, tolerance_lbs: 3.0 },
    Division { name: "Peso Welter", name_en: "Welterweight", max_weight_lbs: 147.0, tolerance_lbs: 3.0 },
    Division { name: "Peso Súper Welter", name_en: "Super Welterweight", max_weight_lbs: 154.0, tolerance_lbs: 3.0 },
    Division { name: "Peso Mediano", name_en: "Middleweight", max_weight_lbs: 160.0, tolerance_lbs: 4.0 },
    Division { name: "Peso Súper Mediano", name_en: "Super Middleweight", max_weight_lbs: 168.0, tolerance_lbs: 4.0 },
    Division { name: "Peso Semi Pesado", name_en: "Light Heavyweight", max_weight_lbs: 175.0, tolerance_lbs: 4.0 },
    Division { name: "Peso Crucero", name_en: "Cruiserweight", max_weight_lbs: 200.0, tolerance_lbs: 5.0 },
    Division { name: "Peso Pesado", name_en: "Heavyweight", max_weight_lbs: OPEN_CLASS_LBS, tolerance_lbs: OPEN_CLASS_LBS },
];

/// The open-ended heavyweight class
#[inline]
pub fn open_class() -> &'static Division {
    &DIVISIONS[DIVISIONS.len() - 1]
}

/// Largest finite division boundary (the cruiserweight limit)
#[inline]
pub fn top_finite_limit_lbs() -> f64 {
    DIVISIONS[DIVISIONS.len() - 2].max_weight_lbs
}
