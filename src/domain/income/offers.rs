//! Static income-offer catalogue and its ranker.

use crate::domain::profile::Motivation;
use crate::domain::profile::Motivation::{Freedom, Meaning, Money, Process, Recognition};
use crate::domain::ranker::{rank_entries, CatalogueEntry};

use super::IncomeDirection;

/// Maximum offers returned by a ranking.
pub const MAX_OFFERS: usize = 5;

/// Returns the five catalogue offers for a direction, in catalogue order.
pub fn offers_for(direction: IncomeDirection) -> &'static [CatalogueEntry] {
    match direction {
        IncomeDirection::Body => &[
            CatalogueEntry { name: "Massage practice", tags: &[Process, Money] },
            CatalogueEntry { name: "Personal fitness training", tags: &[Money, Recognition] },
            CatalogueEntry { name: "Yoga classes", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Stretching workshops", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Wellness day retreats", tags: &[Meaning, Money] },
        ],
        IncomeDirection::Sales => &[
            CatalogueEntry { name: "Commission sales for a local business", tags: &[Money, Process] },
            CatalogueEntry { name: "Reselling with a marketplace storefront", tags: &[Money, Freedom] },
            CatalogueEntry { name: "Sales consulting for small teams", tags: &[Money, Recognition] },
            CatalogueEntry { name: "Affiliate partnerships", tags: &[Freedom, Money] },
            CatalogueEntry { name: "Negotiation coaching", tags: &[Recognition, Meaning] },
        ],
        IncomeDirection::Online => &[
            CatalogueEntry { name: "Virtual assistance", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Social media management", tags: &[Freedom, Money] },
            CatalogueEntry { name: "Online tutoring", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Template and preset shop", tags: &[Freedom, Money] },
            CatalogueEntry { name: "Community moderation", tags: &[Process, Meaning] },
        ],
        IncomeDirection::Creative => &[
            CatalogueEntry { name: "Commissioned illustration", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Handmade goods shop", tags: &[Process, Money] },
            CatalogueEntry { name: "Event photography", tags: &[Money, Freedom] },
            CatalogueEntry { name: "Custom printing and merch", tags: &[Money, Process] },
            CatalogueEntry { name: "Short-form video editing", tags: &[Freedom, Money] },
        ],
        IncomeDirection::Soft => &[
            CatalogueEntry { name: "One-on-one consulting", tags: &[Meaning, Money] },
            CatalogueEntry { name: "Peer support groups", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Interview coaching", tags: &[Money, Recognition] },
            CatalogueEntry { name: "Conflict mediation", tags: &[Meaning, Recognition] },
            CatalogueEntry { name: "Accountability partnership", tags: &[Process, Meaning] },
        ],
    }
}

/// Orders the direction's offers by fit with the primary motivation.
pub fn rank_income_offers(direction: IncomeDirection, primary: Motivation) -> Vec<CatalogueEntry> {
    rank_entries(offers_for(direction), primary, MAX_OFFERS)
}
