// src/specs/heading.rs
//! Page heading → entity type.

use crate::data::EntityType;
use super::report::PageError;

pub const HEADINGS: &[(&str, EntityType)] = &[
    // sic: the portal misspells "Committee" on this one
    ("Political Issues Commitee Statement of Organization", EntityType::PoliticalIssuesCommittee),
    ("Political Issues Committee Statement of Organization", EntityType::PoliticalIssuesCommittee),
    ("Financial Disclosures Registration for Corporation", EntityType::Corporation),
    ("Political Action Committee Statement of Organization", EntityType::PoliticalActionCommittee),
    ("Candidates & Office Holders Statement of Organization", EntityType::CandidatesAndOfficeHolders),
    ("Financial Disclosures Registration for Political Party", EntityType::PoliticalParty),
    ("Financial Disclosures Registration for Independent Expenditures", EntityType::IndependentExpenditures),
    ("Financial Disclosures Registration for Electioneering", EntityType::Electioneering),
    ("Lobbyist Registration", EntityType::Lobbyist),
];

pub fn entity_type_for(heading: &str) -> Option<EntityType> {
    HEADINGS.iter()
        .find(|(h, _)| *h == heading)
        .map(|(_, t)| *t)
}

/// Resolve the heading of the page at `url`; unknown headings fail the page.
pub fn resolve_type(heading: &str, url: &str) -> Result<EntityType, PageError> {
    entity_type_for(heading).ok_or_else(|| PageError::UnresolvedType {
        heading: s!(heading),
        url: s!(url),
    })
}
