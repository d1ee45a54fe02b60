//! Raw categorical answers from the income questionnaire.

use serde::{Deserialize, Serialize};

/// The answers exactly as the closed questionnaire UI collected them.
///
/// Yes/no/maybe questions carry the literal option text ("да", "нет",
/// "возможно"); readiness and time carry the chosen range phrase. The
/// engine inspects substrings and never validates the strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeAnswers {
    /// Enjoys physical, body-centered work.
    pub enjoys_physical: String,
    /// Comfortable selling and negotiating.
    pub enjoys_selling: String,
    /// Comfortable working fully online.
    pub comfortable_online: String,
    /// Has a creative hobby that could take commissions.
    pub has_creative_hobby: String,
    /// Enjoys long one-on-one conversations.
    pub patient_listener: String,
    /// How soon they could start ("готов начать сразу", ...).
    pub start_readiness: String,
    /// Weekly hours available ("до 5 часов", "больше 10 часов", ...).
    pub time_available: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_serialize_with_camel_case_keys() {
        let answers = IncomeAnswers {
            enjoys_physical: "да".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&answers).unwrap();
        assert!(json.contains("enjoysPhysical"));
        assert!(json.contains("timeAvailable"));
    }
}
