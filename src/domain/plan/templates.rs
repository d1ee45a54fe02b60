//! Static 3-month task templates per strategy tier.
//!
//! Reference data: templates are fetched as deep copies and never handed
//! out by reference, so no plan build can leak mutations into another.

use serde::{Deserialize, Serialize};

use crate::domain::income::IncomeDirection;

use super::StrategyTier;

/// Months in every plan.
pub const MONTHS_PER_PLAN: usize = 3;

/// Weeks in every month.
pub const WEEKS_PER_MONTH: usize = 4;

/// Tasks appended to late-plan weeks when the income gap is wide open.
pub const CLIENT_SEARCH_TASKS: [&str; 2] = [
    "Run an active outreach sprint: contact ten potential clients",
    "Ask two past contacts for referrals or introductions",
];

/// Tasks appended to late-plan weeks when the income gap is nearly
/// closed.
pub const SCALE_UP_TASKS: [&str; 2] = [
    "Raise your rate for new clients by 10-15%",
    "Package your service into a higher-value offer",
];

/// Suffix marking the accelerated-scaling bonus block on month 3.
pub const ACCELERATED_SUFFIX: &str = " + accelerated scaling block";

/// One week of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub title: String,
    pub tasks: Vec<String>,
}

/// One month of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthPlan {
    pub title: String,
    pub weeks: Vec<WeekPlan>,
}

const MONTH_THEMES: [&str; 3] = ["Foundations", "First clients", "Steady growth"];

const SOFT_WEEKS: [&[&str]; 12] = [
    &[
        "Write down what you already know how to do",
        "Pick one service idea to explore",
        "Tell one friend about your plan",
    ],
    &[
        "Read two beginner guides on your direction",
        "List three people already doing this work",
        "Note what they charge and how they present it",
    ],
    &[
        "Sketch a simple one-line offer",
        "Choose your first tool and set it up",
        "Block two quiet hours for practice",
    ],
    &[
        "Do one small practice run end to end",
        "Write down what felt hard",
        "Rest and review the month",
    ],
    &[
        "Refine your offer wording",
        "Prepare one work sample",
        "Share the sample with a friendly reviewer",
    ],
    &[
        "Offer a free trial to one person",
        "Collect their honest feedback",
        "Fix the roughest edge it revealed",
    ],
    &[
        "Set a modest starter price",
        "Offer a paid trial to one person",
        "Write down the objections you heard",
    ],
    &[
        "Complete the first paid order",
        "Ask for a short written review",
        "Log what the first sale taught you",
    ],
    &[
        "Publish your offer where your peers gather",
        "Answer every question you receive",
        "Track inquiries in one list",
    ],
    &[
        "Serve the next two clients",
        "Tighten your routine around the work",
        "Note which tasks drain you most",
    ],
    &[
        "Ask past clients for one referral each",
        "Update the offer with social proof",
        "Plan a sustainable weekly rhythm",
    ],
    &[
        "Review three months of notes",
        "Decide what to keep and what to drop",
        "Set one goal for the next quarter",
    ],
];

const BALANCED_WEEKS: [&[&str]; 12] = [
    &[
        "Map your current skills against the direction",
        "Pick the service you will sell first",
        "Set a concrete three-month income goal",
        "Tell two people what you are starting",
    ],
    &[
        "Study five competitors and their pricing",
        "Draft your one-line offer",
        "Set up the single tool you need most",
        "Schedule fixed working blocks for the week",
    ],
    &[
        "Produce one portfolio-quality sample",
        "Ask a practitioner to critique the sample",
        "Rework the sample once",
        "Write the short pitch you will send to leads",
    ],
    &[
        "Run one full dry run of your service",
        "Time every step and trim the slowest",
        "Publish a short post about what you offer",
        "Review month one against the income goal",
    ],
    &[
        "Offer a discounted pilot to three people",
        "Deliver the first pilot",
        "Collect structured feedback after delivery",
        "Adjust your offer based on the pilot",
    ],
    &[
        "Deliver the remaining pilots",
        "Ask each pilot client for a testimonial",
        "Set your standard rate",
        "List ten places your clients look for help",
    ],
    &[
        "Pitch your offer in five of those places",
        "Follow up on every warm reply",
        "Close your first full-price order",
        "Write down your delivery checklist",
    ],
    &[
        "Serve full-price clients for the week",
        "Log hours spent per order",
        "Raise anything mispriced",
        "Review month two against the income goal",
    ],
    &[
        "Build a simple referral ask into every delivery",
        "Pitch five new prospects",
        "Systematize your intake questions",
        "Drop the least profitable activity",
    ],
    &[
        "Batch similar work into fixed days",
        "Create one reusable asset (template, FAQ, checklist)",
        "Pitch five new prospects",
        "Hold your weekly review",
    ],
    &[
        "Test one small price increase",
        "Ask your best client what else they would buy",
        "Outline that second offer",
        "Keep pitching: five new prospects",
    ],
    &[
        "Close the quarter: totals, hours, earnings",
        "Compare the result with the month-one goal",
        "Decide the one bottleneck to fix next quarter",
        "Draft next quarter's plan in four lines",
    ],
];

const INTENSIVE_WEEKS: [&[&str]; 12] = [
    &[
        "Define your offer, audience and price in one page",
        "Set weekly income and outreach targets",
        "Prepare your workspace and tools in one sitting",
        "Announce your start to your whole network",
        "Book your first three practice sessions",
    ],
    &[
        "Run all three practice sessions",
        "Produce two portfolio samples from them",
        "Get critique from two practitioners",
        "Publish both samples publicly",
        "Draft outreach messages for three audiences",
    ],
    &[
        "Send twenty outreach messages",
        "Follow up on every reply within a day",
        "Close at least one discounted pilot",
        "Deliver the pilot the same week",
        "Turn pilot feedback into offer changes",
    ],
    &[
        "Send twenty more outreach messages",
        "Close two full-price orders",
        "Write your delivery checklist",
        "Log hours and effective hourly rate",
        "Review month one: funnel numbers and income",
    ],
    &[
        "Raise outreach to thirty messages this week",
        "Deliver all open orders",
        "Collect a testimonial from every delivery",
        "Publish one case study",
        "Test a 10% higher price on new leads",
    ],
    &[
        "Keep the thirty-message outreach pace",
        "Batch deliveries into fixed blocks",
        "Create one reusable asset to cut delivery time",
        "Ask every client for one referral",
        "Trim the weakest acquisition channel",
    ],
    &[
        "Double down on the best acquisition channel",
        "Close four orders this week",
        "Systematize intake with a short form",
        "Track conversion at each funnel step",
        "Hold a mid-quarter review",
    ],
    &[
        "Hold the four-order weekly pace",
        "Raise your standard rate",
        "Pre-sell next month with a waiting list",
        "Automate one repetitive step",
        "Review month two: income versus target",
    ],
    &[
        "Open the waiting list and schedule it",
        "Maintain outreach at thirty messages",
        "Outline a premium tier of your offer",
        "Sell the premium tier to one existing client",
        "Cut one low-value activity entirely",
    ],
    &[
        "Deliver premium and standard orders",
        "Gather numbers: hours, revenue, channel yield",
        "Refresh all public materials with results",
        "Ask two clients for public reviews",
        "Keep the referral loop running",
    ],
    &[
        "Stress-test capacity: book one extra order",
        "Decide what to delegate or drop",
        "Document your full delivery process",
        "Negotiate one retainer arrangement",
        "Plan quarter two targets",
    ],
    &[
        "Close the quarter with all orders delivered",
        "Compile the quarter's numbers in one page",
        "Compare against the week-one targets",
        "Lock next quarter's weekly rhythm",
        "Take two full days off before it starts",
    ],
];

fn weeks_for(tier: StrategyTier) -> &'static [&'static [&'static str]; 12] {
    match tier {
        StrategyTier::Soft => &SOFT_WEEKS,
        StrategyTier::Balanced => &BALANCED_WEEKS,
        StrategyTier::Intensive => &INTENSIVE_WEEKS,
    }
}

/// Fetches a deep copy of the template for a direction and tier.
///
/// Task copy is tier-specific; the direction names the month titles. The
/// returned months own every string, so builders may mutate freely.
pub fn template_for(direction: IncomeDirection, tier: StrategyTier) -> Vec<MonthPlan> {
    let weeks = weeks_for(tier);
    (0..MONTHS_PER_PLAN)
        .map(|month| MonthPlan {
            title: format!(
                "Month {} — {} ({})",
                month + 1,
                MONTH_THEMES[month],
                direction.label()
            ),
            weeks: (0..WEEKS_PER_MONTH)
                .map(|week| WeekPlan {
                    title: format!("Week {}", month * WEEKS_PER_MONTH + week + 1),
                    tasks: weeks[month * WEEKS_PER_MONTH + week]
                        .iter()
                        .map(|task| task.to_string())
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_three_months_of_four_weeks() {
        let months = template_for(IncomeDirection::Online, StrategyTier::Balanced);
        assert_eq!(months.len(), MONTHS_PER_PLAN);
        for month in &months {
            assert_eq!(month.weeks.len(), WEEKS_PER_MONTH);
        }
    }

    #[test]
    fn tiers_carry_different_weekly_load() {
        let soft = template_for(IncomeDirection::Body, StrategyTier::Soft);
        let balanced = template_for(IncomeDirection::Body, StrategyTier::Balanced);
        let intensive = template_for(IncomeDirection::Body, StrategyTier::Intensive);
        assert_eq!(soft[0].weeks[0].tasks.len(), 3);
        assert_eq!(balanced[0].weeks[0].tasks.len(), 4);
        assert_eq!(intensive[0].weeks[0].tasks.len(), 5);
    }

    #[test]
    fn month_titles_name_the_direction() {
        let months = template_for(IncomeDirection::Creative, StrategyTier::Soft);
        assert!(months[0].title.contains("Creative commissions"));
        assert!(months[2].title.contains("Month 3"));
    }

    #[test]
    fn week_numbering_runs_one_through_twelve() {
        let months = template_for(IncomeDirection::Soft, StrategyTier::Intensive);
        assert_eq!(months[0].weeks[0].title, "Week 1");
        assert_eq!(months[2].weeks[3].title, "Week 12");
    }

    #[test]
    fn fetches_are_independent_copies() {
        let mut first = template_for(IncomeDirection::Sales, StrategyTier::Soft);
        first[0].weeks[0].tasks.clear();
        let second = template_for(IncomeDirection::Sales, StrategyTier::Soft);
        assert_eq!(second[0].weeks[0].tasks.len(), 3);
    }
}
