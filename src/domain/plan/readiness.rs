//! Readiness index, strategy tier and income gap calculators.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ScaleValue;

/// Plan intensity tier chosen from the readiness index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTier {
    Intensive,
    Balanced,
    Soft,
}

impl StrategyTier {
    /// Selects the tier: readiness >=8 intensive, >=5 balanced, else
    /// soft. Boundaries are inclusive on the high side; 7 is balanced.
    pub fn from_readiness(readiness: u8) -> Self {
        if readiness >= 8 {
            StrategyTier::Intensive
        } else if readiness >= 5 {
            StrategyTier::Balanced
        } else {
            StrategyTier::Soft
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            StrategyTier::Intensive => "intensive",
            StrategyTier::Balanced => "balanced",
            StrategyTier::Soft => "soft",
        }
    }
}

/// Computes the readiness index: the rounded mean of the three
/// self-reported scalars.
pub fn readiness_index(energy: ScaleValue, motivation: ScaleValue, confidence: ScaleValue) -> u8 {
    let mean = (energy.as_f64() + motivation.as_f64() + confidence.as_f64()) / 3.0;
    mean.round() as u8
}

/// Computes how much of the income target is unmet, in percent.
///
/// A target of 0 means "fully unmet" (100) rather than a division by
/// zero. The result goes negative when current income already exceeds
/// the target.
pub fn gap_percent(income_target: u64, current_income: u64) -> f64 {
    if income_target == 0 {
        return 100.0;
    }
    (income_target as f64 - current_income as f64) * 100.0 / income_target as f64
}
