// src/specs/fields.rs
//! Label → canonical field table for the registration pages.
//!
//! The portal renders the same field under different captions depending on
//! the entity type ("Name", "Name of Corporation", "Name of Political Party").
//! Every caption we accept is listed here; anything else is an unmapped label
//! and gets reported by the caller. Lookup is exact on the
//! whitespace-normalized caption.

use crate::data::Field;

pub const FIELD_LABELS: &[(&str, Field)] = &[
    // names
    ("Name", Field::Name),
    ("Name of Corporation", Field::Name),
    ("Name of Political Party", Field::Name),
    ("Also known as", Field::Aka),
    ("Date Created", Field::DateCreated),
    // contact + address
    ("Telephone Number", Field::Phone),
    ("Street Address", Field::Address1),
    ("Business Address", Field::Address1),
    ("Suite/PO Box", Field::Address2),
    ("City", Field::City),
    ("State", Field::State),
    ("Zip", Field::Zipcode),
    ("County", Field::County),
    ("County of Election", Field::County),
    ("Email", Field::Email),
    // people
    ("First", Field::First),
    ("Middle", Field::Middle),
    ("Last", Field::Last),
    ("Suffix", Field::Suffix),
    ("Title", Field::Title),
    ("Occupation", Field::Occupation),
    ("Office", Field::Office),
    ("Party", Field::Party),
    ("District #", Field::DistrictNumber),
    // represented / affiliated organizations are listed as people
    ("Name of organization, individual, corporation, association, unit of government, or union that the PIC Represents", Field::First),
    ("Name of organization, individual, corporation, association, unit of government, or union that the PAC Represents", Field::First),
    ("Name of organization affiliated with the PAC", Field::First),
    ("Name of organization affiliated with the PIC", Field::First),
    // type specific
    ("Ballot Proposition", Field::BallotProposition),
    ("Ballot Position", Field::BallotPosition),
    ("Organization", Field::AffiliatedOrganization),
    ("Principal Name", Field::PrincipalName),
    ("Principal Interests", Field::PrincipalInterests),
    ("Reimbursement Types", Field::ReimbursementTypes),
];

/// Canonical field for a label, or `None` if the label is not in the table.
pub fn resolve(label: &str) -> Option<Field> {
    FIELD_LABELS.iter()
        .find(|(l, _)| *l == label)
        .map(|(_, f)| *f)
}
