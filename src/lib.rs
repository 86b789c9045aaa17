//! Weigh-In Core - compliance engine for boxing commission administration
//!
//! This crate provides the division classification and weigh-in
//! validation rules used by the commission's admin application, with
//! Python bindings via PyO3.

use pyo3::prelude::*;

pub mod card;
pub mod division;
pub mod error;
pub mod report;
pub mod weighin;

use pyo3::types::{PyDict, PyList};

use crate::card::extract::{deserialize_card, deserialize_name_map};
use crate::card::WeighInSheet;
use crate::division::Division;
use crate::report::NameDirectory;

// ============================================================================
// Helper Functions
// ============================================================================

fn division_to_dict<'py>(py: Python<'py>, division: &Division) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", division.name)?;
    dict.set_item("name_en", division.name_en)?;
    dict.set_item("max_weight_lbs", division.max_weight_lbs)?;
    dict.set_item("tolerance_lbs", division.tolerance_lbs)?;
    Ok(dict)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Classify a nominal weight into its division
///
/// # Arguments
/// * `weight_lbs` - Weight in pounds, or None while the form field is empty
///
/// # Returns
/// A division dict {name, name_en, max_weight_lbs, tolerance_lbs}, or
/// None when no classification is possible (absent or non-positive input)
#[pyfunction]
#[pyo3(signature = (weight_lbs))]
fn classify_weight(py: Python<'_>, weight_lbs: Option<f64>) -> PyResult<Py<PyAny>> {
    match division::classify_opt(weight_lbs) {
        Some(d) => Ok(division_to_dict(py, d)?.into()),
        None => Ok(py.None()),
    }
}

/// Division name suggestion while a contracted weight is being typed
#[pyfunction]
#[pyo3(signature = (weight_lbs))]
fn suggest_division(weight_lbs: Option<f64>) -> Option<&'static str> {
    division::classify_opt(weight_lbs).map(|d| d.name)
}

/// Validate one official scale reading against a fight's contracted
/// weight text
///
/// # Returns
/// A verdict dict {status, message, severity}; status is one of
/// PENDIENTE/OK/ADVERTENCIA/FALLO and severity one of
/// neutral/success/caution/danger
#[pyfunction]
fn validate_weight(
    py: Python<'_>,
    official_weight_lbs: f64,
    contracted_weight: &str,
) -> PyResult<Py<PyAny>> {
    let verdict = weighin::validate(official_weight_lbs, contracted_weight);
    let dict = PyDict::new(py);
    dict.set_item("status", verdict.status.as_str())?;
    dict.set_item("message", &verdict.message)?;
    dict.set_item("severity", verdict.severity.as_str())?;
    Ok(dict.into())
}

/// The full canonical division table, lightest first
#[pyfunction]
fn division_table(py: Python<'_>) -> PyResult<Py<PyAny>> {
    let list = PyList::empty(py);
    for division in &division::DIVISIONS {
        list.append(division_to_dict(py, division)?)?;
    }
    Ok(list.into())
}

/// Evaluate a full fight card's weigh-ins
///
/// # Arguments
/// * `fights` - List of fight dicts/objects (snake_case or the admin
///   host's legacy camelCase field names)
/// * `names` - Optional boxer-id -> display-name map for report lines
///
/// # Returns
/// A WeighInSheet holding pre-rendered report lines and per-fight
/// verdicts
#[pyfunction]
#[pyo3(signature = (fights, names=None))]
fn evaluate_card(
    fights: &Bound<'_, PyAny>,
    names: Option<&Bound<'_, PyDict>>,
) -> PyResult<WeighInSheet> {
    let fight_records = deserialize_card(fights)?;

    let directory = NameDirectory::new();
    if let Some(names) = names {
        directory.preload(deserialize_name_map(names)?);
    }

    Ok(WeighInSheet::new(
        card::evaluate_card(fight_records),
        &directory,
    ))
}

/// Evaluate a full fight card asynchronously
///
/// Input is deserialized upfront; the evaluation itself runs on a
/// blocking thread via Tokio's spawn_blocking, keeping the host's asyncio
/// event loop responsive on large cards.
///
/// # Returns
/// A Python awaitable that resolves to a WeighInSheet
///
/// # Example (Python)
/// ```python
/// sheet = await evaluate_card_async(fights, names)
/// if sheet.requires_confirmation:
///     ...
/// ```
#[pyfunction]
#[pyo3(signature = (fights, names=None))]
fn evaluate_card_async<'py>(
    py: Python<'py>,
    fights: &Bound<'py, PyAny>,
    names: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyAny>> {
    // Pull everything out of Python objects before entering async context
    let fight_records = deserialize_card(fights)?;
    let name_pairs = match names {
        Some(dict) => deserialize_name_map(dict)?,
        None => Vec::new(),
    };

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let sheet = tokio::task::spawn_blocking(move || {
            let directory = NameDirectory::new();
            directory.preload(name_pairs);
            WeighInSheet::new(card::evaluate_card(fight_records), &directory)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Evaluation task panicked: {}",
                e
            ))
        })?;

        Ok(sheet)
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn weighin_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify_weight, m)?)?;
    m.add_function(wrap_pyfunction!(suggest_division, m)?)?;
    m.add_function(wrap_pyfunction!(validate_weight, m)?)?;
    m.add_function(wrap_pyfunction!(division_table, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_card, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_card_async, m)?)?;
    m.add_class::<WeighInSheet>()?;
    Ok(())
}
