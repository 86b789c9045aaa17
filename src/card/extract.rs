//! Host-boundary extraction of fight-card input
//!
//! The host hands fights over as a list of dicts or objects; records may
//! use either the crate's snake_case field names or the admin host's
//! legacy camelCase ones.

use pyo3::exceptions::PyValueError;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods};
use pyo3::{Bound, PyErr};

use crate::card::fight::FightWeighIn;
use crate::error::WeighInCoreError;

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
) -> Option<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

fn opt_string(obj: &Bound<'_, pyo3::PyAny>, names: &[&str]) -> Option<String> {
    for name in names {
        if let Some(value) = get_attr_opt(obj, name) {
            if !value.is_none() {
                if let Ok(s) = value.extract::<String>() {
                    return Some(s);
                }
            }
        }
    }
    None
}

fn opt_weight(obj: &Bound<'_, pyo3::PyAny>, names: &[&str]) -> f64 {
    for name in names {
        if let Some(value) = get_attr_opt(obj, name) {
            if !value.is_none() {
                if let Ok(w) = value.extract::<f64>() {
                    return w;
                }
            }
        }
    }
    0.0
}

/// Extract one fight from a host dict or object
pub fn extract_fight(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<FightWeighIn> {
    // Support both "fight_id" and the host's legacy "peleaId"/"id"
    let fight_id = opt_string(obj, &["fight_id", "peleaId", "id"]).ok_or_else(|| {
        PyErr::from(WeighInCoreError::InvalidFight(
            "missing fight id".to_string(),
        ))
    })?;

    let contracted_weight =
        opt_string(obj, &["contracted_weight", "pesoPactado"]).unwrap_or_default();

    let bout_number: Option<u32> = get_attr_opt(obj, "bout_number")
        .or_else(|| get_attr_opt(obj, "orden"))
        .and_then(|v| v.extract().ok());

    Ok(FightWeighIn {
        fight_id,
        bout_number,
        contracted_weight,
        boxer_a_id: opt_string(obj, &["boxer_a_id", "boxeadorA_Id"]),
        boxer_a_name: opt_string(obj, &["boxer_a_name", "boxeadorA_Nombre"]),
        weight_a_lbs: opt_weight(obj, &["weight_a_lbs", "boxeadorA_Peso"]),
        boxer_b_id: opt_string(obj, &["boxer_b_id", "boxeadorB_Id"]),
        boxer_b_name: opt_string(obj, &["boxer_b_name", "boxeadorB_Nombre"]),
        weight_b_lbs: opt_weight(obj, &["weight_b_lbs", "boxeadorB_Peso"]),
    })
}

/// Deserialize a fight card from a host list
pub fn deserialize_card(fights: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<Vec<FightWeighIn>> {
    let list: Bound<'_, PyList> = fights
        .downcast::<PyList>()
        .map_err(|_| PyValueError::new_err("fights must be a list"))?
        .clone();

    let mut card = Vec::with_capacity(list.len());
    for item in list.iter() {
        card.push(extract_fight(&item)?);
    }
    Ok(card)
}

/// Deserialize an id -> display-name map used to resolve corner names on
/// the printed report
pub fn deserialize_name_map(dict: &Bound<'_, PyDict>) -> pyo3::PyResult<Vec<(String, String)>> {
    let mut names = Vec::with_capacity(dict.len());
    for (key, value) in dict.iter() {
        let id: String = key.extract()?;
        let name: String = value.extract()?;
        names.push((id, name));
    }
    Ok(names)
}
