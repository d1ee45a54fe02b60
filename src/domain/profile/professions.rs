//! Static profession catalogue and the per-segment ranker.

use crate::domain::ranker::{rank_entries, CatalogueEntry};

use super::Motivation::{Freedom, Meaning, Money, Process, Recognition, Status};
use super::{Motivation, Segment};

/// Maximum professions returned by a ranking.
pub const MAX_RANKED: usize = 10;

/// Returns the ten catalogue professions for a segment, in catalogue
/// order.
pub fn professions_for(segment: Segment) -> &'static [CatalogueEntry] {
    match segment {
        Segment::Creative => &[
            CatalogueEntry { name: "Graphic designer", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Illustrator", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Copywriter", tags: &[Freedom, Money] },
            CatalogueEntry { name: "Art director", tags: &[Status, Recognition] },
            CatalogueEntry { name: "Photographer", tags: &[Freedom, Process] },
            CatalogueEntry { name: "Motion designer", tags: &[Process, Money] },
            CatalogueEntry { name: "Brand strategist", tags: &[Status, Money] },
            CatalogueEntry { name: "Interior designer", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Music producer", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Content creator", tags: &[Freedom, Recognition] },
        ],
        Segment::Analytics => &[
            CatalogueEntry { name: "Data analyst", tags: &[Process, Money] },
            CatalogueEntry { name: "Financial analyst", tags: &[Money, Status] },
            CatalogueEntry { name: "Product analyst", tags: &[Process, Status] },
            CatalogueEntry { name: "BI developer", tags: &[Process, Money] },
            CatalogueEntry { name: "Marketing analyst", tags: &[Money, Recognition] },
            CatalogueEntry { name: "Risk manager", tags: &[Status, Money] },
            CatalogueEntry { name: "Auditor", tags: &[Status, Process] },
            CatalogueEntry { name: "Pricing specialist", tags: &[Money, Process] },
            CatalogueEntry { name: "Operations researcher", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Data engineer", tags: &[Money, Freedom] },
        ],
        Segment::Tech => &[
            CatalogueEntry { name: "Backend developer", tags: &[Money, Process] },
            CatalogueEntry { name: "Frontend developer", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Mobile developer", tags: &[Money, Freedom] },
            CatalogueEntry { name: "DevOps engineer", tags: &[Money, Process] },
            CatalogueEntry { name: "QA engineer", tags: &[Process, Meaning] },
            CatalogueEntry { name: "Systems administrator", tags: &[Process, Money] },
            CatalogueEntry { name: "Automation engineer", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Security engineer", tags: &[Status, Money] },
            CatalogueEntry { name: "Tech lead", tags: &[Status, Recognition] },
            CatalogueEntry { name: "No-code developer", tags: &[Freedom, Money] },
        ],
        Segment::HelpPeople => &[
            CatalogueEntry { name: "Psychologist", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Coach", tags: &[Meaning, Freedom] },
            CatalogueEntry { name: "Social worker", tags: &[Meaning, Recognition] },
            CatalogueEntry { name: "HR specialist", tags: &[Meaning, Status] },
            CatalogueEntry { name: "Career counselor", tags: &[Meaning, Money] },
            CatalogueEntry { name: "Nurse", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Physical therapist", tags: &[Meaning, Money] },
            CatalogueEntry { name: "Support specialist", tags: &[Process, Meaning] },
            CatalogueEntry { name: "Mediator", tags: &[Meaning, Status] },
            CatalogueEntry { name: "Volunteer coordinator", tags: &[Meaning, Recognition] },
        ],
        Segment::Communication => &[
            CatalogueEntry { name: "PR manager", tags: &[Recognition, Status] },
            CatalogueEntry { name: "Community manager", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Journalist", tags: &[Recognition, Meaning] },
            CatalogueEntry { name: "Event manager", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Recruiter", tags: &[Money, Process] },
            CatalogueEntry { name: "Customer success manager", tags: &[Money, Meaning] },
            CatalogueEntry { name: "Interpreter", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Radio host", tags: &[Recognition, Process] },
            CatalogueEntry { name: "Partnership manager", tags: &[Money, Status] },
            CatalogueEntry { name: "Tour guide", tags: &[Freedom, Process] },
        ],
        Segment::Organization => &[
            CatalogueEntry { name: "Project manager", tags: &[Status, Money] },
            CatalogueEntry { name: "Product manager", tags: &[Status, Recognition] },
            CatalogueEntry { name: "Operations manager", tags: &[Process, Status] },
            CatalogueEntry { name: "Office manager", tags: &[Process, Meaning] },
            CatalogueEntry { name: "Supply chain manager", tags: &[Money, Process] },
            CatalogueEntry { name: "Scrum master", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Executive assistant", tags: &[Status, Process] },
            CatalogueEntry { name: "Logistics coordinator", tags: &[Process, Money] },
            CatalogueEntry { name: "Event producer", tags: &[Recognition, Money] },
            CatalogueEntry { name: "Administrator", tags: &[Process, Status] },
        ],
        Segment::Sales => &[
            CatalogueEntry { name: "Sales manager", tags: &[Money, Status] },
            CatalogueEntry { name: "Account executive", tags: &[Money, Recognition] },
            CatalogueEntry { name: "Business development manager", tags: &[Money, Status] },
            CatalogueEntry { name: "Real estate agent", tags: &[Money, Freedom] },
            CatalogueEntry { name: "Sales trainer", tags: &[Recognition, Money] },
            CatalogueEntry { name: "Key account manager", tags: &[Money, Status] },
            CatalogueEntry { name: "Insurance agent", tags: &[Money, Process] },
            CatalogueEntry { name: "Retail buyer", tags: &[Process, Money] },
            CatalogueEntry { name: "E-commerce manager", tags: &[Money, Freedom] },
            CatalogueEntry { name: "Telesales specialist", tags: &[Money, Process] },
        ],
        Segment::Education => &[
            CatalogueEntry { name: "School teacher", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Online course author", tags: &[Freedom, Money] },
            CatalogueEntry { name: "Corporate trainer", tags: &[Money, Recognition] },
            CatalogueEntry { name: "Tutor", tags: &[Freedom, Process] },
            CatalogueEntry { name: "Methodologist", tags: &[Process, Meaning] },
            CatalogueEntry { name: "Lecturer", tags: &[Recognition, Status] },
            CatalogueEntry { name: "Children's club leader", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Language instructor", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Learning designer", tags: &[Process, Money] },
            CatalogueEntry { name: "Education consultant", tags: &[Status, Meaning] },
        ],
        Segment::Craft => &[
            CatalogueEntry { name: "Furniture maker", tags: &[Process, Money] },
            CatalogueEntry { name: "Tailor", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Jeweler", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Pastry chef", tags: &[Process, Recognition] },
            CatalogueEntry { name: "Home renovation specialist", tags: &[Money, Process] },
            CatalogueEntry { name: "Florist", tags: &[Process, Meaning] },
            CatalogueEntry { name: "Ceramicist", tags: &[Process, Freedom] },
            CatalogueEntry { name: "Barber", tags: &[Money, Recognition] },
            CatalogueEntry { name: "Leather worker", tags: &[Process, Money] },
            CatalogueEntry { name: "Restorer", tags: &[Meaning, Process] },
        ],
        Segment::Research => &[
            CatalogueEntry { name: "Research scientist", tags: &[Meaning, Recognition] },
            CatalogueEntry { name: "UX researcher", tags: &[Process, Money] },
            CatalogueEntry { name: "Market researcher", tags: &[Money, Process] },
            CatalogueEntry { name: "Laboratory technician", tags: &[Process, Meaning] },
            CatalogueEntry { name: "Science journalist", tags: &[Meaning, Recognition] },
            CatalogueEntry { name: "Historian", tags: &[Meaning, Process] },
            CatalogueEntry { name: "Sociologist", tags: &[Meaning, Status] },
            CatalogueEntry { name: "R&D engineer", tags: &[Money, Process] },
            CatalogueEntry { name: "Archivist", tags: &[Process, Meaning] },
            CatalogueEntry { name: "Academic editor", tags: &[Process, Recognition] },
        ],
    }
}

/// Orders the segment's professions by fit with the primary motivation.
///
/// See [`rank_entries`] for the 2/1 scoring and the stable tie rule.
pub fn rank_professions(segment: Segment, primary: Motivation) -> Vec<CatalogueEntry> {
    rank_entries(professions_for(segment), primary, MAX_RANKED)
}
