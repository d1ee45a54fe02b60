//! Income module - Income-direction matching from categorical answers.

mod answers;
mod direction;
mod offers;
mod report;
mod scoring;

pub use answers::IncomeAnswers;
pub use direction::IncomeDirection;
pub use offers::{offers_for, rank_income_offers, MAX_OFFERS};
pub use report::build_income_report;
pub use scoring::{calc_income_scores, pick_income_direction};
