//! Development plan use case.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::foundation::{Timestamp, UserContext, UserId};
use crate::domain::plan::{build_plan, format_plan_as_document, FinalPlan, PlanInputs};
use crate::domain::report::Document;

/// Terminal snapshot of a completed planning session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSession {
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub inputs: PlanInputs,
    pub plan: FinalPlan,
    pub report: Document,
}

/// Builds the plan and its document from the questionnaire inputs.
pub fn run_plan_builder(ctx: &UserContext, inputs: PlanInputs) -> PlanSession {
    let plan = build_plan(&inputs);
    let report = format_plan_as_document(&plan);

    info!(
        user = %ctx.user_id,
        strategy = plan.strategy.label(),
        readiness = plan.readiness,
        "built development plan"
    );

    PlanSession {
        user_id: ctx.user_id.clone(),
        created_at: Timestamp::now(),
        inputs,
        plan,
        report,
    }
}
