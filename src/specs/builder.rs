// src/specs/builder.rs
//! Accumulates mapped section fields into the Entity and its Persons.

use log::warn;

use crate::data::{Entity, Field, Person};
use super::report::{Extraction, Issue};

/// Mapped `(field, value)` pairs of one section, in label order.
pub type SectionFields = Vec<(Field, String)>;

pub struct EntityBuilder {
    entity: Entity,
    issues: Vec<Issue>,
}

impl EntityBuilder {
    pub fn new(entity: Entity) -> Self {
        Self { entity, issues: Vec::new() }
    }

    pub fn report(&mut self, issue: Issue) {
        warn!("{}: {issue}", self.entity.id);
        self.issues.push(issue);
    }

    /// Entity-level section: every field lands on the Entity, last write wins.
    pub fn apply_entity_section(&mut self, section: usize, legend: &str, fields: SectionFields) {
        for (field, value) in fields {
            let outcome = match self.entity.slot(field) {
                Some(slot) => assign(slot, value),
                None => Assigned::Misrouted(value),
            };
            self.note(section, legend, field, outcome);
        }
    }

    /// Person-level section: the whole section becomes one new Person.
    pub fn push_person_section(&mut self, section: usize, legend: &str, fields: SectionFields) {
        let mut person = Person::default();
        for (field, value) in fields {
            let outcome = match person.slot(field) {
                Some(slot) => assign(slot, value),
                None => Assigned::Misrouted(value),
            };
            self.note(section, legend, field, outcome);
        }
        self.entity.associated_people.push(person);
    }

    pub fn finish(self) -> Extraction {
        Extraction { entity: self.entity, issues: self.issues }
    }

    fn note(&mut self, section: usize, legend: &str, field: Field, outcome: Assigned) {
        match outcome {
            Assigned::Fresh => {}
            Assigned::Overwrote { previous, value } => self.report(Issue::OverwrittenField {
                section,
                legend: s!(legend),
                field,
                previous,
                value,
            }),
            Assigned::Misrouted(value) => self.report(Issue::MisroutedField {
                section,
                legend: s!(legend),
                field,
                value,
            }),
        }
    }
}

enum Assigned {
    Fresh,
    Overwrote { previous: String, value: String },
    Misrouted(String),
}

fn assign(slot: &mut String, value: String) -> Assigned {
    if slot.is_empty() || *slot == value {
        *slot = value;
        return Assigned::Fresh;
    }
    let previous = std::mem::replace(slot, value.clone());
    Assigned::Overwrote { previous, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EntityType;
    use crate::specs::report::IssueKind;

    fn builder() -> EntityBuilder {
        EntityBuilder::new(Entity::new("1", "src", EntityType::Corporation))
    }

    #[test]
    fn entity_section_sets_fields() {
        let mut b = builder();
        b.apply_entity_section(0, "Corporate Information", vec![
            (Field::Name, s!("Acme Inc")),
            (Field::City, s!("Provo")),
        ]);
        let out = b.finish();
        assert!(out.is_clean());
        assert_eq!(out.entity.name, "Acme Inc");
        assert_eq!(out.entity.city, "Provo");
    }

    #[test]
    fn repeated_field_last_write_wins_and_is_flagged() {
        let mut b = builder();
        b.apply_entity_section(0, "Corporate Information", vec![(Field::Name, s!("Old"))]);
        b.apply_entity_section(1, "Business Information", vec![(Field::Name, s!("New"))]);
        let out = b.finish();
        assert_eq!(out.entity.name, "New");
        assert_eq!(out.issues, vec![Issue::OverwrittenField {
            section: 1,
            legend: s!("Business Information"),
            field: Field::Name,
            previous: s!("Old"),
            value: s!("New"),
        }]);
    }

    #[test]
    fn identical_or_empty_previous_is_not_flagged() {
        let mut b = builder();
        b.apply_entity_section(0, "Corporate Information", vec![(Field::Name, s!("Same"))]);
        b.apply_entity_section(1, "Business Information", vec![(Field::Name, s!("Same"))]);
        assert!(b.finish().is_clean());
    }

    #[test]
    fn person_section_appends_whole_person() {
        let mut b = builder();
        b.push_person_section(0, "Information about Treasurer", vec![
            (Field::First, s!("Jane")),
            (Field::Last, s!("Doe")),
        ]);
        let out = b.finish();
        assert_eq!(out.entity.associated_people, vec![Person {
            first: s!("Jane"),
            last: s!("Doe"),
            ..Person::default()
        }]);
    }

    #[test]
    fn misrouted_fields_are_dropped_and_reported() {
        let mut b = builder();
        b.apply_entity_section(0, "Corporate Information", vec![(Field::First, s!("Jane"))]);
        b.push_person_section(1, "Information about Agent", vec![(Field::Aka, s!("JD"))]);
        let out = b.finish();

        assert_eq!(out.issues_of(IssueKind::MisroutedField).count(), 2);
        assert_eq!(out.entity.associated_people, vec![Person::default()]);
        assert_eq!(out.entity.name, "");
    }
}
