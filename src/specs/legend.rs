// src/specs/legend.rs
//! Section title ("legend") classification.
//!
//! A section either describes the entity itself, describes one associated
//! person, or is something we have not seen before. Unknown sections are
//! rejected rather than guessed: misfiling disclosure data is worse than
//! losing a section and reporting it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Legend {
    EntityLevel,
    PersonLevel,
    Unknown,
}

/// A versioned snapshot of the portal's section vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendTable {
    pub version: u32,
    /// Exact titles of sections describing the entity.
    pub entity_sections: &'static [&'static str],
    /// Title prefixes of sections describing one person each.
    pub person_prefixes: &'static [&'static str],
}

impl LegendTable {
    /// Exact entity title first, then person prefix; first match wins.
    pub fn classify(&self, legend: &str) -> Legend {
        if self.entity_sections.iter().any(|t| *t == legend) {
            Legend::EntityLevel
        } else if self.person_prefixes.iter().any(|p| legend.starts_with(p)) {
            Legend::PersonLevel
        } else {
            Legend::Unknown
        }
    }
}

const PERSON_PREFIXES: &[&str] = &["Information about", "Personal Campaign Committee"];

/// Entity and committee registrations.
pub const V1: LegendTable = LegendTable {
    version: 1,
    entity_sections: &[
        "Corporate Information",
        "PAC Information",
        "PIC Information",
        "Party Information",
        "Candidate Information",
        "Independent Expenditures Information",
        "Electioneer Information",
    ],
    person_prefixes: PERSON_PREFIXES,
};

/// V1 plus the business and lobbyist registration layouts.
pub const V2: LegendTable = LegendTable {
    version: 2,
    entity_sections: &[
        "Corporate Information",
        "PAC Information",
        "PIC Information",
        "Party Information",
        "Candidate Information",
        "Independent Expenditures Information",
        "Electioneer Information",
        "Business Information",
        "Lobbyist Information",
        "Payment Information",
    ],
    person_prefixes: PERSON_PREFIXES,
};

pub const CURRENT: LegendTable = V2;

pub fn classify(legend: &str) -> Legend {
    CURRENT.classify(legend)
}
