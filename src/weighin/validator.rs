//! Official-weight validation against the contracted weight

use serde::Serialize;

use crate::weighin::rules::{rules_for_contracted, WeighInRules};

/// Compliance verdict for one official scale reading.
///
/// Serialized with the wire values the admin host stores and matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VerdictStatus {
    /// No weight entered yet
    #[serde(rename = "PENDIENTE")]
    Pending,
    /// At or under the limit, or heavyweight exemption
    #[serde(rename = "OK")]
    Ok,
    /// Over the limit but inside the tolerance band
    #[serde(rename = "ADVERTENCIA")]
    Warning,
    /// Excess beyond the allowed tolerance
    #[serde(rename = "FALLO")]
    Fail,
}

impl VerdictStatus {
    /// Wire value as stored by the host
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Pending => "PENDIENTE",
            VerdictStatus::Ok => "OK",
            VerdictStatus::Warning => "ADVERTENCIA",
            VerdictStatus::Fail => "FALLO",
        }
    }

    /// Presentation-independent severity tag for the rendering layer
    pub fn severity(&self) -> Severity {
        match self {
            VerdictStatus::Pending => Severity::Neutral,
            VerdictStatus::Ok => Severity::Success,
            VerdictStatus::Warning => Severity::Caution,
            VerdictStatus::Fail => Severity::Danger,
        }
    }
}

/// Severity tag consumable by any rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Neutral,
    Success,
    Caution,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Neutral => "neutral",
            Severity::Success => "success",
            Severity::Caution => "caution",
            Severity::Danger => "danger",
        }
    }
}

/// Result of validating one scale reading: status, display message, and
/// severity. A derived value, recomputed on every input change and never
/// persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictReport {
    pub status: VerdictStatus,
    pub message: String,
    pub severity: Severity,
}

impl VerdictReport {
    fn new(status: VerdictStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            severity: status.severity(),
        }
    }
}

/// Validate an official scale reading against a fight's contracted-weight
/// text.
///
/// Rules are ordered; the first match wins:
/// 1. no reading entered (or a non-finite one) -> PENDING
/// 2. heavyweight contract -> OK, exempt from tolerance checks
/// 3. at or under the limit -> OK
/// 4. inside the tolerance band -> WARNING with the excess
/// 5. beyond tolerance -> FAIL with the excess
pub fn validate(official_weight_lbs: f64, contracted_weight: &str) -> VerdictReport {
    let rules = rules_for_contracted(contracted_weight);
    validate_against(official_weight_lbs, &rules)
}

/// Validate a reading against already-derived rules (one lookup per fight
/// when both corners share the same contract).
pub fn validate_against(official_weight_lbs: f64, rules: &WeighInRules) -> VerdictReport {
    if !official_weight_lbs.is_finite() || official_weight_lbs <= 0.0 {
        return VerdictReport::new(VerdictStatus::Pending, "Ingresar peso");
    }

    if rules.is_open_class() {
        return VerdictReport::new(VerdictStatus::Ok, "OK (Peso Pesado)");
    }

    if official_weight_lbs <= rules.limit_lbs {
        return VerdictReport::new(VerdictStatus::Ok, "¡En peso!");
    }

    let excess = official_weight_lbs - rules.limit_lbs;
    if official_weight_lbs <= rules.limit_lbs + rules.tolerance_lbs {
        VerdictReport::new(
            VerdictStatus::Warning,
            format!("Exceso: +{:.1} lbs (dentro de tolerancia)", excess),
        )
    } else {
        VerdictReport::new(
            VerdictStatus::Fail,
            format!("Exceso: +{:.1} lbs (¡FUERA DE TOLERANCIA!)", excess),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_when_no_weight_entered() {
        let report = validate(0.0, "147 lbs");
        assert_eq!(report.status, VerdictStatus::Pending);
        assert_eq!(report.message, "Ingresar peso");
        assert_eq!(report.severity, Severity::Neutral);
    }

    #[test]
    fn test_pending_for_non_finite_reading() {
        assert_eq!(validate(f64::NAN, "147 lbs").status, VerdictStatus::Pending);
    }

    #[test]
    fn test_ok_under_the_limit() {
        let report = validate(146.8, "147 lbs");
        assert_eq!(report.status, VerdictStatus::Ok);
        assert_eq!(report.message, "¡En peso!");
        assert_eq!(report.severity, Severity::Success);
    }

    #[test]
    fn test_ok_exactly_at_the_limit() {
        // Inclusive boundary: rule 3 wins before rule 4.
        assert_eq!(validate(147.0, "147 lbs").status, VerdictStatus::Ok);
    }

    #[test]
    fn test_warning_inside_tolerance_band() {
        // Welterweight: 147 + 3 of tolerance.
        let report = validate(149.5, "147 lbs");
        assert_eq!(report.status, VerdictStatus::Warning);
        assert_eq!(report.message, "Exceso: +2.5 lbs (dentro de tolerancia)");
        assert_eq!(report.severity, Severity::Caution);
    }

    #[test]
    fn test_warning_at_tolerance_boundary() {
        assert_eq!(validate(150.0, "147 lbs").status, VerdictStatus::Warning);
    }

    #[test]
    fn test_fail_beyond_tolerance() {
        let report = validate(151.0, "147 lbs");
        assert_eq!(report.status, VerdictStatus::Fail);
        assert_eq!(report.message, "Exceso: +4.0 lbs (¡FUERA DE TOLERANCIA!)");
        assert_eq!(report.severity, Severity::Danger);
    }

    #[test]
    fn test_heavyweight_exemption() {
        let report = validate(210.0, "210 lbs");
        assert_eq!(report.status, VerdictStatus::Ok);
        assert_eq!(report.message, "OK (Peso Pesado)");

        // Any positive reading is exempt once the contract is above the
        // top finite boundary.
        assert_eq!(validate(260.0, "205 lbs").status, VerdictStatus::Ok);
    }

    #[test]
    fn test_unresolvable_contract_with_reading_fails() {
        let report = validate(150.0, "por definir");
        assert_eq!(report.status, VerdictStatus::Fail);
        assert_eq!(report.message, "Exceso: +150.0 lbs (¡FUERA DE TOLERANCIA!)");
    }

    #[test]
    fn test_unresolvable_contract_without_reading_is_pending() {
        assert_eq!(validate(0.0, "").status, VerdictStatus::Pending);
    }

    #[test]
    fn test_excess_formatted_to_one_decimal() {
        let report = validate(148.25, "147 lbs");
        assert_eq!(report.message, "Exceso: +1.2 lbs (dentro de tolerancia)");
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(VerdictStatus::Pending.as_str(), "PENDIENTE");
        assert_eq!(VerdictStatus::Ok.as_str(), "OK");
        assert_eq!(VerdictStatus::Warning.as_str(), "ADVERTENCIA");
        assert_eq!(VerdictStatus::Fail.as_str(), "FALLO");
    }

    #[test]
    fn test_report_serializes_wire_values() {
        let json = serde_json::to_value(validate(151.0, "147 lbs")).unwrap();
        assert_eq!(json["status"], "FALLO");
        assert_eq!(json["severity"], "danger");
    }
}
