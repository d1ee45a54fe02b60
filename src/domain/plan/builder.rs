//! Development plan builder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::income::IncomeDirection;

use super::templates::{
    template_for, MonthPlan, ACCELERATED_SUFFIX, CLIENT_SEARCH_TASKS, SCALE_UP_TASKS,
};
use super::{gap_percent, readiness_index, PlanInputs, StrategyTier};

/// Weekly hours below which the plan is thinned out.
const LOW_TIME_HOURS: u32 = 7;

/// Weekly hours above which month 3 gets the accelerated block.
const HIGH_TIME_HOURS: u32 = 20;

/// Share of each week's tasks kept under the low-time adaptation.
const LOW_TIME_KEEP_RATIO: f64 = 0.7;

/// Gap above which active client search is injected.
const WIDE_GAP_PERCENT: f64 = 70.0;

/// Gap below which scale-up tasks are injected.
const NARROW_GAP_PERCENT: f64 = 30.0;

/// Week index receiving injected tasks (the fourth week).
const INJECTION_WEEK: usize = 3;

/// The completed, read-only planning result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalPlan {
    pub direction: IncomeDirection,
    pub strategy: StrategyTier,
    pub readiness: u8,
    pub gap_percent: f64,
    pub low_time: bool,
    pub wide_gap: bool,
    pub scale_up: bool,
    pub accelerated: bool,
    pub months: Vec<MonthPlan>,
}

/// Builds the plan from the questionnaire inputs.
///
/// Readiness selects the tier, the tier selects the template, and the
/// derived flags transform a deep copy of it in fixed order: low-time
/// truncation, wide-gap client search, narrow-gap scale-up, accelerated
/// month-3 title. Output is idempotent for identical inputs and shares
/// no storage with the template.
pub fn build_plan(inputs: &PlanInputs) -> FinalPlan {
    let readiness = readiness_index(inputs.energy, inputs.motivation, inputs.confidence);
    let strategy = StrategyTier::from_readiness(readiness);
    let gap = gap_percent(inputs.income_target, inputs.current_income);

    let low_time = inputs.time_per_week < LOW_TIME_HOURS;
    let wide_gap = gap > WIDE_GAP_PERCENT;
    let scale_up = gap < NARROW_GAP_PERCENT;
    let accelerated = inputs.time_per_week > HIGH_TIME_HOURS;

    let mut months = template_for(inputs.direction, strategy);

    if low_time {
        for month in &mut months {
            for week in &mut month.weeks {
                week.tasks.truncate(truncated_len(week.tasks.len()));
            }
        }
    }

    if wide_gap {
        inject_tasks(&mut months, &CLIENT_SEARCH_TASKS);
    }

    if scale_up {
        inject_tasks(&mut months, &SCALE_UP_TASKS);
    }

    if accelerated {
        if let Some(last) = months.last_mut() {
            last.title.push_str(ACCELERATED_SUFFIX);
        }
    }

    debug!(
        readiness,
        strategy = strategy.label(),
        gap,
        "built development plan"
    );

    FinalPlan {
        direction: inputs.direction,
        strategy,
        readiness,
        gap_percent: gap,
        low_time,
        wide_gap,
        scale_up,
        accelerated,
        months,
    }
}

/// Week length under the low-time adaptation: ceil(0.7 x original),
/// keeping front tasks.
fn truncated_len(original: usize) -> usize {
    (original as f64 * LOW_TIME_KEEP_RATIO).ceil() as usize
}

/// Appends tasks to the fourth week of months 2 and 3.
fn inject_tasks(months: &mut [MonthPlan], tasks: &[&str]) {
    for month in months.iter_mut().skip(1) {
        if let Some(week) = month.weeks.get_mut(INJECTION_WEEK) {
            week.tasks.extend(tasks.iter().map(|t| t.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ScaleValue;

    fn inputs() -> PlanInputs {
        PlanInputs::new(
            IncomeDirection::Online,
            ScaleValue::new(6),
            ScaleValue::new(6),
            ScaleValue::new(6),
            10,
            100_000,
            50_000,
        )
    }

    #[test]
    fn default_inputs_build_balanced_untouched_plan() {
        let plan = build_plan(&inputs());
        assert_eq!(plan.strategy, StrategyTier::Balanced);
        assert!(!plan.low_time && !plan.wide_gap && !plan.scale_up && !plan.accelerated);
        assert_eq!(plan.months.len(), 3);
        assert_eq!(plan.months[0].weeks[0].tasks.len(), 4);
    }

    #[test]
    fn truncated_len_follows_ceiling_rule() {
        assert_eq!(truncated_len(6), 5);
        assert_eq!(truncated_len(5), 4);
        assert_eq!(truncated_len(4), 3);
        assert_eq!(truncated_len(3), 3);
    }

    #[test]
    fn low_time_thins_every_week_keeping_front_tasks() {
        let mut i = inputs();
        i.time_per_week = 5;
        let plan = build_plan(&i);
        assert!(plan.low_time);

        let full = template_for(i.direction, plan.strategy);
        for (month, full_month) in plan.months.iter().zip(&full) {
            for (week, full_week) in month.weeks.iter().zip(&full_month.weeks) {
                let expected = truncated_len(full_week.tasks.len());
                assert_eq!(week.tasks.len(), expected);
                assert_eq!(week.tasks[..], full_week.tasks[..expected]);
            }
        }
    }

    #[test]
    fn exactly_seven_hours_is_not_low_time() {
        let mut i = inputs();
        i.time_per_week = 7;
        assert!(!build_plan(&i).low_time);
    }

    #[test]
    fn wide_gap_injects_client_search_into_late_months() {
        let mut i = inputs();
        i.current_income = 20_000; // gap 80%
        let plan = build_plan(&i);
        assert!(plan.wide_gap);

        // Month 1 untouched, months 2 and 3 extended in week 4 only.
        assert!(!plan.months[0].weeks[3]
            .tasks
            .iter()
            .any(|t| t.contains("outreach sprint")));
        for month in &plan.months[1..] {
            let week = &month.weeks[INJECTION_WEEK];
            assert!(week.tasks.ends_with(&[
                CLIENT_SEARCH_TASKS[0].to_string(),
                CLIENT_SEARCH_TASKS[1].to_string(),
            ]));
            assert!(!month.weeks[0]
                .tasks
                .iter()
                .any(|t| t.contains("outreach sprint")));
        }
    }

    #[test]
    fn narrow_gap_injects_scale_up_tasks() {
        let mut i = inputs();
        i.current_income = 90_000; // gap 10%
        let plan = build_plan(&i);
        assert!(plan.scale_up && !plan.wide_gap);
        let week = &plan.months[2].weeks[INJECTION_WEEK];
        assert!(week.tasks.ends_with(&[
            SCALE_UP_TASKS[0].to_string(),
            SCALE_UP_TASKS[1].to_string(),
        ]));
    }

    #[test]
    fn heavy_schedule_marks_month_three_accelerated() {
        let mut i = inputs();
        i.time_per_week = 25;
        let plan = build_plan(&i);
        assert!(plan.accelerated);
        assert!(plan.months[2].title.ends_with(ACCELERATED_SUFFIX));
        assert!(!plan.months[0].title.contains(ACCELERATED_SUFFIX));
        assert!(!plan.months[1].title.contains(ACCELERATED_SUFFIX));
    }

    #[test]
    fn identical_inputs_build_identical_plans() {
        let a = build_plan(&inputs());
        let b = build_plan(&inputs());
        assert_eq!(a, b);
    }

    #[test]
    fn plans_never_share_task_storage() {
        let mut a = build_plan(&inputs());
        let b = build_plan(&inputs());
        a.months[0].weeks[0].tasks.push("mutated".into());
        assert_ne!(a.months[0].weeks[0].tasks, b.months[0].weeks[0].tasks);
        assert!(!b.months[0].weeks[0].tasks.iter().any(|t| t == "mutated"));
    }
}
