// src/specs/report.rs
//! Outcome types of a metadata extraction.
//!
//! Section-level problems are `Issue`s: collected, logged, never fatal.
//! Page-level problems are `PageError`s: no Entity is produced.

use std::fmt;

use thiserror::Error;

use crate::data::{Entity, Field};
use super::page::LabeledValue;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("section {section}: unmapped label {label:?} (value {value:?})")]
    UnmappedLabel { section: usize, label: String, value: String },

    #[error(
        "section {section}: unknown legend {legend:?}; {} field(s) dropped: {}",
        .content.len(),
        fmt_content(.content)
    )]
    UnknownLegend { section: usize, legend: String, content: Vec<LabeledValue> },

    #[error("section {section}: no legend; section dropped")]
    MissingLegend { section: usize },

    #[error("section {section} ({legend}): field {field} does not belong there (value {value:?})")]
    MisroutedField { section: usize, legend: String, field: Field, value: String },

    #[error("section {section} ({legend}): {field} {previous:?} overwritten with {value:?}")]
    OverwrittenField { section: usize, legend: String, field: Field, previous: String, value: String },
}

/// `Label: "value"` pairs of a dropped section, in page order.
fn fmt_content(content: &[LabeledValue]) -> String {
    content.iter()
        .map(|lv| format!("{}: {:?}", lv.label, lv.value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueKind {
    UnmappedLabel,
    UnknownLegend,
    MissingLegend,
    MisroutedField,
    OverwrittenField,
}

impl IssueKind {
    /// snake_case name, as written to `ut_issues.csv`.
    pub fn name(self) -> &'static str {
        match self {
            IssueKind::UnmappedLabel => "unmapped_label",
            IssueKind::UnknownLegend => "unknown_legend",
            IssueKind::MissingLegend => "missing_legend",
            IssueKind::MisroutedField => "misrouted_field",
            IssueKind::OverwrittenField => "overwritten_field",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Issue {
    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::UnmappedLabel { .. } => IssueKind::UnmappedLabel,
            Issue::UnknownLegend { .. } => IssueKind::UnknownLegend,
            Issue::MissingLegend { .. } => IssueKind::MissingLegend,
            Issue::MisroutedField { .. } => IssueKind::MisroutedField,
            Issue::OverwrittenField { .. } => IssueKind::OverwrittenField,
        }
    }

    /// Index of the offending section in document order.
    pub fn section(&self) -> usize {
        match self {
            Issue::UnmappedLabel { section, .. }
            | Issue::UnknownLegend { section, .. }
            | Issue::MissingLegend { section }
            | Issue::MisroutedField { section, .. }
            | Issue::OverwrittenField { section, .. } => *section,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no heading on {url}")]
    MissingHeading { url: String },

    #[error("unknown entity type heading {heading:?} on {url}")]
    UnresolvedType { heading: String, url: String },
}

impl PageError {
    /// The page that could not be extracted.
    pub fn url(&self) -> &str {
        match self {
            PageError::MissingHeading { url } | PageError::UnresolvedType { url, .. } => url,
        }
    }
}

/// An issue tagged with the entity it was found on, for run-level reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityIssue {
    pub entity_id: String,
    pub issue: Issue,
}

/// A finished Entity plus everything that was dropped on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub entity: Entity,
    pub issues: Vec<Issue>,
}

impl Extraction {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(move |i| i.kind() == kind)
    }
}
