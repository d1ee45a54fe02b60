//! Income direction catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five fixed income directions.
///
/// Declaration order is the priority order used to break equal
/// accumulator scores; it must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeDirection {
    Body,
    Sales,
    Online,
    Creative,
    Soft,
}

impl IncomeDirection {
    /// All directions in priority order.
    pub const ALL: [IncomeDirection; 5] = [
        IncomeDirection::Body,
        IncomeDirection::Sales,
        IncomeDirection::Online,
        IncomeDirection::Creative,
        IncomeDirection::Soft,
    ];

    /// Returns the display name.
    pub fn label(&self) -> &'static str {
        match self {
            IncomeDirection::Body => "Body & wellness practice",
            IncomeDirection::Sales => "Sales & negotiation",
            IncomeDirection::Online => "Online services",
            IncomeDirection::Creative => "Creative commissions",
            IncomeDirection::Soft => "Soft-skill consulting",
        }
    }

    /// Returns the stable key used in stored snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeDirection::Body => "body",
            IncomeDirection::Sales => "sales",
            IncomeDirection::Online => "online",
            IncomeDirection::Creative => "creative",
            IncomeDirection::Soft => "soft",
        }
    }
}

impl fmt::Display for IncomeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_catalogue_has_five_entries() {
        assert_eq!(IncomeDirection::ALL.len(), 5);
    }

    #[test]
    fn priority_order_starts_with_body() {
        assert_eq!(IncomeDirection::ALL[0], IncomeDirection::Body);
        assert_eq!(IncomeDirection::ALL[4], IncomeDirection::Soft);
    }

    #[test]
    fn direction_serializes_as_snake_case() {
        let json = serde_json::to_string(&IncomeDirection::Soft).unwrap();
        assert_eq!(json, "\"soft\"");
    }
}
