//! Fight weigh-in input records

use serde::{Deserialize, Serialize};

/// Corner designation on the weigh-in sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Corner {
    #[serde(rename = "rojo")]
    Red,
    #[serde(rename = "azul")]
    Blue,
}

impl Corner {
    /// Corner label as printed on the report
    pub fn label(&self) -> &'static str {
        match self {
            Corner::Red => "Rojo",
            Corner::Blue => "Azul",
        }
    }
}

/// One fight's weigh-in input as handed over by the host.
///
/// Field aliases accept the admin host's legacy record names
/// (`pesoPactado`, `boxeadorA_Peso`, ...) alongside the crate's own.
/// A scale reading of `0.0` means the boxer has not stepped on the scale
/// yet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FightWeighIn {
    #[serde(alias = "peleaId")]
    pub fight_id: String,
    #[serde(default, alias = "orden")]
    pub bout_number: Option<u32>,
    #[serde(alias = "pesoPactado")]
    pub contracted_weight: String,

    #[serde(default, alias = "boxeadorA_Id")]
    pub boxer_a_id: Option<String>,
    #[serde(default, alias = "boxeadorA_Nombre")]
    pub boxer_a_name: Option<String>,
    #[serde(default, alias = "boxeadorA_Peso")]
    pub weight_a_lbs: f64,

    #[serde(default, alias = "boxeadorB_Id")]
    pub boxer_b_id: Option<String>,
    #[serde(default, alias = "boxeadorB_Nombre")]
    pub boxer_b_name: Option<String>,
    #[serde(default, alias = "boxeadorB_Peso")]
    pub weight_b_lbs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snake_case() {
        let fight: FightWeighIn = serde_json::from_str(
            r#"{
                "fight_id": "f1",
                "contracted_weight": "147 lbs",
                "boxer_a_name": "Juan Pérez",
                "weight_a_lbs": 146.8,
                "weight_b_lbs": 0.0
            }"#,
        )
        .unwrap();
        assert_eq!(fight.fight_id, "f1");
        assert_eq!(fight.weight_a_lbs, 146.8);
        assert_eq!(fight.boxer_a_name.as_deref(), Some("Juan Pérez"));
        assert!(fight.bout_number.is_none());
    }

    #[test]
    fn test_deserialize_legacy_host_names() {
        let fight: FightWeighIn = serde_json::from_str(
            r#"{
                "peleaId": "f2",
                "orden": 3,
                "pesoPactado": "135 lbs",
                "boxeadorA_Id": "bx-1",
                "boxeadorA_Peso": 134.6,
                "boxeadorB_Id": "bx-2",
                "boxeadorB_Peso": 137.2
            }"#,
        )
        .unwrap();
        assert_eq!(fight.fight_id, "f2");
        assert_eq!(fight.bout_number, Some(3));
        assert_eq!(fight.contracted_weight, "135 lbs");
        assert_eq!(fight.boxer_a_id.as_deref(), Some("bx-1"));
        assert_eq!(fight.weight_b_lbs, 137.2);
    }

    #[test]
    fn test_corner_labels() {
        assert_eq!(Corner::Red.label(), "Rojo");
        assert_eq!(Corner::Blue.label(), "Azul");
    }
}
