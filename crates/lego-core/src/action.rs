use serde::{Deserialize, Serialize};

/// One generated news action for a single date.
///
/// Field names on the wire keep the dashboard's original casing:
/// `Description` and `Republican` are capitalized, `coverage` and
/// `agreement` are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "Description")]
    pub description: String,
    /// Lean score in [-1, 1]: positive is Republican-leaning, negative
    /// Democrat-leaning. Rounded to 3 decimals.
    #[serde(rename = "Republican")]
    pub republican_score: f64,
    /// Share of the day's total attention, rounded to 4 decimals.
    pub coverage: f64,
    /// Aggregated `[supporting, non_supporting, neutral]`, each rounded to
    /// 3 decimals, summing to 1 within rounding.
    pub agreement: [f64; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_original_wire_casing() {
        let action = Action {
            description: "Action A".to_string(),
            republican_score: 0.421,
            coverage: 0.0712,
            agreement: [0.5, 0.2, 0.3],
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["Description"], "Action A");
        assert_eq!(json["Republican"], 0.421);
        assert_eq!(json["coverage"], 0.0712);
        assert_eq!(json["agreement"][0], 0.5);
    }

    #[test]
    fn json_roundtrip() {
        let action = Action {
            description: "Action Z".to_string(),
            republican_score: -0.9,
            coverage: 0.0051,
            agreement: [0.1, 0.6, 0.3],
        };
        let json = serde_json::to_string(&action).unwrap();
        let parsed: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, action);
    }
}
