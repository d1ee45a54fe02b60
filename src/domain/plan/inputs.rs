//! Input bundle for a planning session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ScaleValue;
use crate::domain::income::IncomeDirection;

/// Everything the planning questionnaire collects.
///
/// Created once per session and never mutated after the plan is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInputs {
    pub direction: IncomeDirection,
    pub energy: ScaleValue,
    pub motivation: ScaleValue,
    pub confidence: ScaleValue,
    /// Hours available per week.
    pub time_per_week: u32,
    /// Desired monthly income.
    pub income_target: u64,
    /// Current monthly income.
    pub current_income: u64,
}

impl PlanInputs {
    /// Creates the input bundle.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        direction: IncomeDirection,
        energy: ScaleValue,
        motivation: ScaleValue,
        confidence: ScaleValue,
        time_per_week: u32,
        income_target: u64,
        current_income: u64,
    ) -> Self {
        Self {
            direction,
            energy,
            motivation,
            confidence,
            time_per_week,
            income_target,
            current_income,
        }
    }
}
