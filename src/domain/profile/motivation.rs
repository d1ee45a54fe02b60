//! Motivation driver catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six fixed motivation drivers.
///
/// Declaration order breaks arg-max ties; `Process` doubles as the silent
/// fallback when a motivation statement yields no lexical evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motivation {
    Money,
    Meaning,
    Recognition,
    Freedom,
    Process,
    Status,
}

impl Motivation {
    /// All motivations in catalogue order.
    pub const ALL: [Motivation; 6] = [
        Motivation::Money,
        Motivation::Meaning,
        Motivation::Recognition,
        Motivation::Freedom,
        Motivation::Process,
        Motivation::Status,
    ];

    /// The driver assumed when no keyword evidence is found.
    pub const FALLBACK: Motivation = Motivation::Process;

    /// Returns the display name.
    pub fn label(&self) -> &'static str {
        match self {
            Motivation::Money => "Income",
            Motivation::Meaning => "Meaning",
            Motivation::Recognition => "Recognition",
            Motivation::Freedom => "Freedom",
            Motivation::Process => "Enjoying the process",
            Motivation::Status => "Status",
        }
    }

    /// Returns the stable key used in stored snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Motivation::Money => "money",
            Motivation::Meaning => "meaning",
            Motivation::Recognition => "recognition",
            Motivation::Freedom => "freedom",
            Motivation::Process => "process",
            Motivation::Status => "status",
        }
    }
}

impl fmt::Display for Motivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
