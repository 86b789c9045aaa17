//! WeighInSheet - Stateful sheet for the host boundary
//!
//! Holds a full card evaluation in Rust heap memory so the host can
//! lazily pull lines, per-fight verdicts, and the persistence payload
//! without the whole evaluation being serialized upfront.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::card::evaluator::{CardEvaluation, EvaluatedFight};
use crate::error::WeighInCoreError;
use crate::report::{render_fight_line, render_tally_line, NameDirectory};
use crate::weighin::VerdictReport;

/// Pre-rendered weigh-in sheet.
///
/// # Thread Safety
/// WeighInSheet is Send + Sync: it owns only Strings, plain data, and the
/// evaluation itself; nothing is shared mutably after construction.
#[pyclass]
pub struct WeighInSheet {
    evaluation: CardEvaluation,
    /// One printable line per fight, in card order
    lines: Vec<String>,
    /// Compliance tally footer
    tally_line: String,
}

impl WeighInSheet {
    /// Pre-render all report lines at construction, resolving corner
    /// names through the supplied directory.
    pub fn new(evaluation: CardEvaluation, directory: &NameDirectory) -> Self {
        let lines = evaluation
            .fights
            .iter()
            .enumerate()
            .map(|(i, evaluated)| render_fight_line(evaluated, i + 1, directory))
            .collect();
        let tally_line = render_tally_line(&evaluation.tally);

        Self {
            evaluation,
            lines,
            tally_line,
        }
    }

    fn verdict_to_dict<'py>(
        &self,
        py: Python<'py>,
        verdict: &VerdictReport,
    ) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("status", verdict.status.as_str())?;
        dict.set_item("message", &verdict.message)?;
        dict.set_item("severity", verdict.severity.as_str())?;
        Ok(dict)
    }

    fn fight_to_dict<'py>(
        &self,
        py: Python<'py>,
        evaluated: &EvaluatedFight,
    ) -> PyResult<Bound<'py, PyDict>> {
        let fight = &evaluated.fight;
        let dict = PyDict::new(py);
        dict.set_item("fight_id", &fight.fight_id)?;
        dict.set_item("bout_number", fight.bout_number)?;
        dict.set_item("contracted_weight", &fight.contracted_weight)?;
        dict.set_item("division", evaluated.division_name())?;
        dict.set_item("limit_lbs", evaluated.rules.limit_lbs)?;
        dict.set_item("tolerance_lbs", evaluated.rules.tolerance_lbs)?;
        dict.set_item("weight_a_lbs", fight.weight_a_lbs)?;
        dict.set_item("weight_b_lbs", fight.weight_b_lbs)?;
        dict.set_item("verdict_a", self.verdict_to_dict(py, &evaluated.verdict_a)?)?;
        dict.set_item("verdict_b", self.verdict_to_dict(py, &evaluated.verdict_b)?)?;
        dict.set_item("requires_confirmation", evaluated.requires_confirmation)?;
        Ok(dict)
    }
}

#[pymethods]
impl WeighInSheet {
    /// Number of fights on the sheet
    #[getter]
    fn total_fights(&self) -> usize {
        self.evaluation.fights.len()
    }

    /// Whether saving this sheet needs an out-of-tolerance confirmation
    #[getter]
    fn requires_confirmation(&self) -> bool {
        self.evaluation.requires_confirmation
    }

    /// Corner verdicts still waiting for a scale reading
    #[getter]
    fn pending(&self) -> usize {
        self.evaluation.tally.pending
    }

    /// Corner verdicts at or under the limit
    #[getter]
    fn in_weight(&self) -> usize {
        self.evaluation.tally.ok
    }

    /// Corner verdicts inside the tolerance band
    #[getter]
    fn in_tolerance(&self) -> usize {
        self.evaluation.tally.warning
    }

    /// Corner verdicts out of tolerance
    #[getter]
    fn out_of_tolerance(&self) -> usize {
        self.evaluation.tally.fail
    }

    /// Pre-rendered compliance footer
    #[getter]
    fn tally_line(&self) -> String {
        self.tally_line.clone()
    }

    /// All pre-rendered report lines, in card order
    fn get_lines(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::new(py, &self.lines)?;
        Ok(list.into())
    }

    /// One pre-rendered line by card position, or None if out of bounds
    fn get_line(&self, index: usize) -> Option<String> {
        self.lines.get(index).cloned()
    }

    /// Full verdict data for one fight by card position, or None
    fn get_fight(&self, py: Python<'_>, index: usize) -> PyResult<Py<PyAny>> {
        match self.evaluation.fights.get(index) {
            Some(evaluated) => Ok(self.fight_to_dict(py, evaluated)?.into()),
            None => Ok(py.None()),
        }
    }

    /// Full verdict data for one fight by id
    ///
    /// # Raises
    /// KeyError if the id is not on the sheet
    fn get_fight_by_id(&self, py: Python<'_>, fight_id: &str) -> PyResult<Py<PyAny>> {
        let evaluated = self
            .evaluation
            .find_fight(fight_id)
            .map_err(PyErr::from)?;
        Ok(self.fight_to_dict(py, evaluated)?.into())
    }

    /// Verdict tally as a dict
    fn get_tally(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let tally = &self.evaluation.tally;
        let dict = PyDict::new(py);
        dict.set_item("pending", tally.pending)?;
        dict.set_item("ok", tally.ok)?;
        dict.set_item("warning", tally.warning)?;
        dict.set_item("fail", tally.fail)?;
        Ok(dict.into())
    }

    /// Serialize the full evaluation for the host to persist
    fn to_json(&self) -> PyResult<String> {
        self.evaluation
            .to_json()
            .map_err(|e: WeighInCoreError| e.into())
    }
}

// Test accessors (crate-visible for property tests)
impl WeighInSheet {
    #[cfg(test)]
    pub(crate) fn lines_len(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub(crate) fn line_at(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn tally(&self) -> crate::card::evaluator::VerdictTally {
        self.evaluation.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{evaluate_card, FightWeighIn};

    fn fight(id: &str, contracted: &str, a: f64, b: f64) -> FightWeighIn {
        FightWeighIn {
            fight_id: id.to_string(),
            bout_number: None,
            contracted_weight: contracted.to_string(),
            boxer_a_id: None,
            boxer_a_name: Some("Juan Pérez".to_string()),
            weight_a_lbs: a,
            boxer_b_id: None,
            boxer_b_name: Some("Pedro Gómez".to_string()),
            weight_b_lbs: b,
        }
    }

    #[test]
    fn test_sheet_pre_renders_all_lines() {
        // f1: 146.8 in weight, 149.5 inside the 147+3 band.
        // f2: no reading yet, 136.9 inside the 135+2 band.
        let card = evaluate_card(vec![
            fight("f1", "147 lbs", 146.8, 149.5),
            fight("f2", "135 lbs", 0.0, 136.9),
        ]);
        let sheet = WeighInSheet::new(card, &NameDirectory::new());

        assert_eq!(sheet.lines_len(), 2);
        assert!(sheet.line_at(0).unwrap().starts_with("Pelea 1 ·"));
        assert!(sheet.line_at(1).unwrap().starts_with("Pelea 2 ·"));

        let tally = sheet.tally();
        assert_eq!(tally.ok, 1);
        assert_eq!(tally.warning, 2);
        assert_eq!(tally.pending, 1);
        assert_eq!(tally.fail, 0);
    }

    #[test]
    fn test_sheet_tally_line() {
        let card = evaluate_card(vec![fight("f1", "118 lbs", 121.0, 118.0)]);
        let sheet = WeighInSheet::new(card, &NameDirectory::new());
        assert_eq!(
            sheet.tally_line,
            "Pesajes: 1 en peso, 0 en tolerancia, 1 fuera de tolerancia, 0 pendientes"
        );
    }
}
