//! Interest segment catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten fixed interest/occupation categories.
///
/// Declaration order is the catalogue order and therefore the tie-break
/// order for every ranking built on segment scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Creative,
    Analytics,
    Tech,
    HelpPeople,
    Communication,
    Organization,
    Sales,
    Education,
    Craft,
    Research,
}

impl Segment {
    /// All segments in catalogue order.
    pub const ALL: [Segment; 10] = [
        Segment::Creative,
        Segment::Analytics,
        Segment::Tech,
        Segment::HelpPeople,
        Segment::Communication,
        Segment::Organization,
        Segment::Sales,
        Segment::Education,
        Segment::Craft,
        Segment::Research,
    ];

    /// Returns the display name.
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Creative => "Creative work",
            Segment::Analytics => "Analytics",
            Segment::Tech => "Technology",
            Segment::HelpPeople => "Helping people",
            Segment::Communication => "Communication",
            Segment::Organization => "Organization",
            Segment::Sales => "Sales",
            Segment::Education => "Education",
            Segment::Craft => "Hands-on craft",
            Segment::Research => "Research",
        }
    }

    /// Returns the stable key used in stored snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Creative => "creative",
            Segment::Analytics => "analytics",
            Segment::Tech => "tech",
            Segment::HelpPeople => "help_people",
            Segment::Communication => "communication",
            Segment::Organization => "organization",
            Segment::Sales => "sales",
            Segment::Education => "education",
            Segment::Craft => "craft",
            Segment::Research => "research",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
