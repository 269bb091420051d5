// src/store.rs
//
// On-disk formats of a harvest:
//   ut_entities.csv                  entity_id,entity_type,name
//   ut_registration_{id}.json        one Entity with its people
//   ut_disclosures_{id}_{year}.csv   regulator columns, header always present
//   ut_failures.csv                  pages that produced no Entity, rewritten every run
//   ut_issues.csv                    section issues of the last run
//   ut_registrations.csv / ut_people.csv   consolidated, flattened tables

use std::{fs, io, path::{Path, PathBuf}};

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::config::consts::{PEOPLE_CSV, REGISTRATIONS_CSV};
use crate::data::{DisclosureRow, Entity, EntityListing, EntityType, PageFailure, Person};
use crate::file::{ensure_parent, registration_files, write_replace};
use crate::specs::disclosures::COLUMNS;
use crate::specs::report::EntityIssue;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, #[source] source: io::Error },
    #[error("{}: {source}", .path.display())]
    Json { path: PathBuf, #[source] source: serde_json::Error },
    #[error("{}: {source}", .path.display())]
    Csv { path: PathBuf, #[source] source: csv::Error },
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.to_path_buf(), source }
}

fn csv_err(path: &Path) -> impl FnOnce(csv::Error) -> StoreError + '_ {
    move |source| StoreError::Csv { path: path.to_path_buf(), source }
}

fn json_err(path: &Path) -> impl FnOnce(serde_json::Error) -> StoreError + '_ {
    move |source| StoreError::Json { path: path.to_path_buf(), source }
}

/// Serialize `rows` to a new CSV at `path`. The header comes from the row type;
/// with no rows, `header` is written instead so the file is never blank.
fn write_csv<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<(), StoreError> {
    ensure_parent(path).map_err(io_err(path))?;
    let mut w = csv::WriterBuilder::new()
        .has_headers(!rows.is_empty())
        .from_path(path)
        .map_err(csv_err(path))?;
    if rows.is_empty() {
        w.write_record(header).map_err(csv_err(path))?;
    }
    for row in rows {
        w.serialize(row).map_err(csv_err(path))?;
    }
    w.flush().map_err(io_err(path))?;
    Ok(())
}

/* ---------------- Entity listing ---------------- */

pub fn write_entity_list(path: &Path, rows: &[EntityListing]) -> Result<(), StoreError> {
    write_csv(path, &["entity_id", "entity_type", "name"], rows)?;
    info!("wrote {} to {}", rows.len(), path.display());
    Ok(())
}

pub fn read_entity_list(path: &Path) -> Result<Vec<EntityListing>, StoreError> {
    let mut r = csv::Reader::from_path(path).map_err(csv_err(path))?;
    r.deserialize::<EntityListing>().collect::<Result<Vec<_>, _>>().map_err(csv_err(path))
}

/* ---------------- Registrations ---------------- */

pub fn write_registration(path: &Path, entity: &Entity) -> Result<(), StoreError> {
    let json = serde_json::to_vec(entity).map_err(json_err(path))?;
    write_replace(path, &json).map_err(io_err(path))?;
    info!("wrote {}", path.display());
    Ok(())
}

pub fn read_registration(path: &Path) -> Result<Entity, StoreError> {
    let text = fs::read(path).map_err(io_err(path))?;
    serde_json::from_slice(&text).map_err(json_err(path))
}

/* ---------------- Disclosures ---------------- */

pub fn write_disclosures(path: &Path, rows: &[DisclosureRow]) -> Result<(), StoreError> {
    write_csv(path, &COLUMNS, rows)?;
    info!("wrote {} to {}", rows.len(), path.display());
    Ok(())
}

/* ---------------- Failures ---------------- */

pub fn write_failures(path: &Path, failures: &[PageFailure]) -> Result<(), StoreError> {
    write_csv(path, &["entity_id", "url", "reason"], failures)
}

/* ---------------- Section issues ---------------- */

#[derive(Debug, Serialize)]
struct IssueRow<'a> {
    entity_id: &'a str,
    section: usize,
    kind: &'static str,
    detail: String,
}

/// One row per issue, `detail` holding the full message (dropped values included).
pub fn write_issues(path: &Path, issues: &[EntityIssue]) -> Result<(), StoreError> {
    let rows: Vec<IssueRow<'_>> = issues.iter()
        .map(|ei| IssueRow {
            entity_id: &ei.entity_id,
            section: ei.issue.section(),
            kind: ei.issue.kind().name(),
            detail: ei.issue.to_string(),
        })
        .collect();
    write_csv(path, &["entity_id", "section", "kind", "detail"], &rows)
}

/* ---------------- Consolidation ---------------- */

/// One entity without its people.
#[derive(Debug, Serialize)]
pub struct EntityRow<'a> {
    pub id: &'a str,
    pub source: &'a str,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub name: &'a str,
    pub phone: &'a str,
    pub address1: &'a str,
    pub address2: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zipcode: &'a str,
    pub county: &'a str,
    pub aka: &'a str,
    pub date_created: &'a str,
    pub ballot_proposition: &'a str,
    pub ballot_position: &'a str,
    pub affiliated_organization: &'a str,
    pub principal_name: &'a str,
    pub principal_interests: &'a str,
    pub reimbursement_types: &'a str,
    pub people: usize,
}

impl<'a> From<&'a Entity> for EntityRow<'a> {
    fn from(e: &'a Entity) -> Self {
        Self {
            id: &e.id,
            source: &e.source,
            entity_type: e.entity_type,
            name: &e.name,
            phone: &e.phone,
            address1: &e.address1,
            address2: &e.address2,
            city: &e.city,
            state: &e.state,
            zipcode: &e.zipcode,
            county: &e.county,
            aka: &e.aka,
            date_created: &e.date_created,
            ballot_proposition: &e.ballot_proposition,
            ballot_position: &e.ballot_position,
            affiliated_organization: &e.affiliated_organization,
            principal_name: &e.principal_name,
            principal_interests: &e.principal_interests,
            reimbursement_types: &e.reimbursement_types,
            people: e.associated_people.len(),
        }
    }
}

/// One person keyed by its parent entity.
#[derive(Debug, Serialize)]
pub struct PersonRow<'a> {
    pub entity_id: &'a str,
    pub first: &'a str,
    pub middle: &'a str,
    pub last: &'a str,
    pub suffix: &'a str,
    pub title: &'a str,
    pub address1: &'a str,
    pub address2: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zipcode: &'a str,
    pub county: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub occupation: &'a str,
    pub office: &'a str,
    pub district_number: &'a str,
    pub party: &'a str,
}

pub const ENTITY_COLUMNS: [&str; 20] = [
    "id", "source", "type", "name", "phone", "address1", "address2", "city", "state",
    "zipcode", "county", "aka", "date_created", "ballot_proposition", "ballot_position",
    "affiliated_organization", "principal_name", "principal_interests",
    "reimbursement_types", "people",
];

pub const PERSON_COLUMNS: [&str; 18] = [
    "entity_id", "first", "middle", "last", "suffix", "title", "address1", "address2",
    "city", "state", "zipcode", "county", "phone", "email", "occupation", "office",
    "district_number", "party",
];

impl<'a> PersonRow<'a> {
    pub fn new(entity_id: &'a str, p: &'a Person) -> Self {
        Self {
            entity_id,
            first: &p.first,
            middle: &p.middle,
            last: &p.last,
            suffix: &p.suffix,
            title: &p.title,
            address1: &p.address1,
            address2: &p.address2,
            city: &p.city,
            state: &p.state,
            zipcode: &p.zipcode,
            county: &p.county,
            phone: &p.phone,
            email: &p.email,
            occupation: &p.occupation,
            office: &p.office,
            district_number: &p.district_number,
            party: &p.party,
        }
    }
}

pub fn flatten_people(entity: &Entity) -> Vec<PersonRow<'_>> {
    entity.associated_people.iter()
        .map(|p| PersonRow::new(&entity.id, p))
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
pub struct Consolidated {
    pub entities: usize,
    pub people: usize,
    pub registrations_csv: PathBuf,
    pub people_csv: PathBuf,
}

/// Flatten every registration JSON in `data_dir` into two CSV tables.
pub fn consolidate(data_dir: &Path) -> Result<Consolidated, StoreError> {
    let files = registration_files(data_dir).map_err(io_err(data_dir))?;
    let entities = files.iter()
        .map(|p| read_registration(p.as_path()))
        .collect::<Result<Vec<_>, _>>()?;

    let entity_rows: Vec<EntityRow<'_>> = entities.iter().map(EntityRow::from).collect();
    let person_rows: Vec<PersonRow<'_>> = entities.iter().flat_map(flatten_people).collect();

    let registrations_csv = data_dir.join(REGISTRATIONS_CSV);
    let people_csv = data_dir.join(PEOPLE_CSV);
    write_csv(&registrations_csv, &ENTITY_COLUMNS, &entity_rows)?;
    write_csv(&people_csv, &PERSON_COLUMNS, &person_rows)?;
    info!(
        "consolidated {} entities / {} people into {}",
        entity_rows.len(), person_rows.len(), data_dir.display()
    );

    Ok(Consolidated {
        entities: entity_rows.len(),
        people: person_rows.len(),
        registrations_csv,
        people_csv,
    })
}
