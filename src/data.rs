// src/data.rs
//
// Canonical records produced by the scrapers.
//
// - Entity / Person: one registration page, built once by specs::metadata
//                    and handed to store:: as a plain value.
// - Field:           closed set of canonical field names; every value on an
//                    Entity or Person is written through `slot()`.
// - EntityListing / DisclosureRow: rows of the search listing and of the
//                    yearly transaction report.

use std::fmt;

use serde::{Deserialize, Serialize};

/* ---------------- Entity type ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Corporation,
    #[serde(rename = "Political Action Committee")]
    PoliticalActionCommittee,
    #[serde(rename = "Political Issues Committee")]
    PoliticalIssuesCommittee,
    #[serde(rename = "Political Party")]
    PoliticalParty,
    #[serde(rename = "Candidates & Office Holders")]
    CandidatesAndOfficeHolders,
    #[serde(rename = "Independent Expenditures")]
    IndependentExpenditures,
    Electioneering,
    Lobbyist,
}

impl EntityType {
    pub const ALL: [EntityType; 8] = [
        EntityType::Corporation,
        EntityType::PoliticalActionCommittee,
        EntityType::PoliticalIssuesCommittee,
        EntityType::PoliticalParty,
        EntityType::CandidatesAndOfficeHolders,
        EntityType::IndependentExpenditures,
        EntityType::Electioneering,
        EntityType::Lobbyist,
    ];

    /// Display name, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            EntityType::Corporation => "Corporation",
            EntityType::PoliticalActionCommittee => "Political Action Committee",
            EntityType::PoliticalIssuesCommittee => "Political Issues Committee",
            EntityType::PoliticalParty => "Political Party",
            EntityType::CandidatesAndOfficeHolders => "Candidates & Office Holders",
            EntityType::IndependentExpenditures => "Independent Expenditures",
            EntityType::Electioneering => "Electioneering",
            EntityType::Lobbyist => "Lobbyist",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* ---------------- Canonical fields ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    // entity only
    Name,
    Aka,
    DateCreated,
    BallotProposition,
    BallotPosition,
    AffiliatedOrganization,
    PrincipalName,
    PrincipalInterests,
    ReimbursementTypes,
    // shared
    Phone,
    Address1,
    Address2,
    City,
    State,
    Zipcode,
    County,
    // person only
    First,
    Middle,
    Last,
    Suffix,
    Title,
    Email,
    Occupation,
    Office,
    DistrictNumber,
    Party,
}

impl Field {
    /// Canonical snake_case name; matches the JSON/CSV column.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Aka => "aka",
            Field::DateCreated => "date_created",
            Field::BallotProposition => "ballot_proposition",
            Field::BallotPosition => "ballot_position",
            Field::AffiliatedOrganization => "affiliated_organization",
            Field::PrincipalName => "principal_name",
            Field::PrincipalInterests => "principal_interests",
            Field::ReimbursementTypes => "reimbursement_types",
            Field::Phone => "phone",
            Field::Address1 => "address1",
            Field::Address2 => "address2",
            Field::City => "city",
            Field::State => "state",
            Field::Zipcode => "zipcode",
            Field::County => "county",
            Field::First => "first",
            Field::Middle => "middle",
            Field::Last => "last",
            Field::Suffix => "suffix",
            Field::Title => "title",
            Field::Email => "email",
            Field::Occupation => "occupation",
            Field::Office => "office",
            Field::DistrictNumber => "district_number",
            Field::Party => "party",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/* ---------------- Person ---------------- */

/// A natural person (or represented organization) listed on a registration.
/// Empty string means "not disclosed on this page".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub first: String,
    pub middle: String,
    pub last: String,
    pub suffix: String,
    pub title: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub county: String,
    pub phone: String,
    pub email: String,
    pub occupation: String,
    pub office: String,
    pub district_number: String,
    pub party: String,
}

impl Person {
    /// The storage for `field`, or `None` if a Person has no such field.
    pub fn slot(&mut self, field: Field) -> Option<&mut String> {
        let slot = match field {
            Field::First => &mut self.first,
            Field::Middle => &mut self.middle,
            Field::Last => &mut self.last,
            Field::Suffix => &mut self.suffix,
            Field::Title => &mut self.title,
            Field::Address1 => &mut self.address1,
            Field::Address2 => &mut self.address2,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Zipcode => &mut self.zipcode,
            Field::County => &mut self.county,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Occupation => &mut self.occupation,
            Field::Office => &mut self.office,
            Field::DistrictNumber => &mut self.district_number,
            Field::Party => &mut self.party,
            Field::Name
            | Field::Aka
            | Field::DateCreated
            | Field::BallotProposition
            | Field::BallotPosition
            | Field::AffiliatedOrganization
            | Field::PrincipalName
            | Field::PrincipalInterests
            | Field::ReimbursementTypes => return None,
        };
        Some(slot)
    }
}

/* ---------------- Entity ---------------- */

/// One registered organization, committee or individual filer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub source: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub aka: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub ballot_proposition: String,
    #[serde(default)]
    pub ballot_position: String,
    #[serde(default)]
    pub affiliated_organization: String,
    #[serde(default)]
    pub principal_name: String,
    #[serde(default)]
    pub principal_interests: String,
    #[serde(default)]
    pub reimbursement_types: String,
    #[serde(default)]
    pub associated_people: Vec<Person>,
}

impl Entity {
    /// Empty shell; the type is always known before any field is set.
    pub fn new(id: &str, source: &str, entity_type: EntityType) -> Self {
        Self {
            id: s!(id),
            source: s!(source),
            entity_type,
            name: s!(),
            phone: s!(),
            address1: s!(),
            address2: s!(),
            city: s!(),
            state: s!(),
            zipcode: s!(),
            county: s!(),
            aka: s!(),
            date_created: s!(),
            ballot_proposition: s!(),
            ballot_position: s!(),
            affiliated_organization: s!(),
            principal_name: s!(),
            principal_interests: s!(),
            reimbursement_types: s!(),
            associated_people: Vec::new(),
        }
    }

    /// The storage for `field`, or `None` if an Entity has no such field.
    pub fn slot(&mut self, field: Field) -> Option<&mut String> {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Address1 => &mut self.address1,
            Field::Address2 => &mut self.address2,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Zipcode => &mut self.zipcode,
            Field::County => &mut self.county,
            Field::Aka => &mut self.aka,
            Field::DateCreated => &mut self.date_created,
            Field::BallotProposition => &mut self.ballot_proposition,
            Field::BallotPosition => &mut self.ballot_position,
            Field::AffiliatedOrganization => &mut self.affiliated_organization,
            Field::PrincipalName => &mut self.principal_name,
            Field::PrincipalInterests => &mut self.principal_interests,
            Field::ReimbursementTypes => &mut self.reimbursement_types,
            Field::First
            | Field::Middle
            | Field::Last
            | Field::Suffix
            | Field::Title
            | Field::Email
            | Field::Occupation
            | Field::Office
            | Field::DistrictNumber
            | Field::Party => return None,
        };
        Some(slot)
    }
}

/* ---------------- Listing + report rows ---------------- */

/// One row of the advanced-search entity listing (`ut_entities.csv`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityListing {
    pub entity_id: String,
    pub entity_type: String,
    pub name: String,
}

/// One transaction row of the yearly report, columns as the regulator names them.
/// Amounts are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct DisclosureRow {
    pub corp: String,
    pub report: String,
    pub tran_id: String,
    pub tran_type: String,
    pub tran_date: String,
    pub tran_amt: String,
    pub inkind: String,
    pub loan: String,
    pub amends: String,
    pub name: String,
    pub purpose: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub inkind_comments: String,
}

/// A page that produced no Entity during a bulk run (`ut_failures.csv`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFailure {
    pub entity_id: String,
    pub url: String,
    pub reason: String,
}
