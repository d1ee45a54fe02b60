//! Plan module - Development plan construction.
//!
//! Turns a planning questionnaire into a strategy tier and a 3-month
//! schedule derived from static templates.

mod builder;
mod inputs;
mod readiness;
mod report;
mod templates;

pub use builder::{build_plan, FinalPlan};
pub use inputs::PlanInputs;
pub use readiness::{gap_percent, readiness_index, StrategyTier};
pub use report::format_plan_as_document;
pub use templates::{template_for, MonthPlan, WeekPlan};
