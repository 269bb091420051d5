// tests/extract_pages.rs
//
// Whole registration pages through the HTML layer.

use ut_disclosures::specs::page::{DetailPage, HtmlDetailPage};
use ut_disclosures::{extract, extract_html, EntityType, Issue, IssueKind, PageError, Person};

const PAC: &str = include_str!("fixtures/pac.html");
const CORPORATION: &str = include_str!("fixtures/corporation.html");
const CANDIDATE: &str = include_str!("fixtures/candidate.html");
const UNKNOWN: &str = include_str!("fixtures/unknown_heading.html");

const URL: &str = "https://disclosures.utah.gov/Registration/EntityDetails/1409777";

#[test]
fn pac_page_builds_entity_and_people() {
    let out = extract_html(PAC, "1409777", URL).unwrap();
    assert!(out.is_clean(), "unexpected issues: {:?}", out.issues);

    let e = &out.entity;
    assert_eq!(e.id, "1409777");
    assert_eq!(e.source, URL);
    assert_eq!(e.entity_type, EntityType::PoliticalActionCommittee);
    assert_eq!(e.name, "Acme PAC");
    assert_eq!(e.aka, "Acme");
    assert_eq!(e.address1, "1 Main St");
    assert_eq!(e.address2, "");
    assert_eq!(e.city, "Salt Lake City");
    assert_eq!(e.state, "UT");
    assert_eq!(e.zipcode, "84111");
    assert_eq!(e.phone, "801-555-0100");
    assert_eq!(e.date_created, "03/14/2019");

    assert_eq!(e.associated_people, vec![
        Person { first: "Jane".into(), last: "Doe".into(), ..Person::default() },
        Person { first: "Acme Widgets Inc.".into(), ..Person::default() },
    ]);
}

#[test]
fn extraction_is_repeatable() {
    let a = extract_html(PAC, "1409777", URL).unwrap();
    let b = extract_html(PAC, "1409777", URL).unwrap();
    assert_eq!(a, b);

    // one parsed page can be extracted more than once
    let page = HtmlDetailPage::parse(CANDIDATE);
    assert_eq!(extract(&page, "9", URL).unwrap(), extract(&page, "9", URL).unwrap());
}

#[test]
fn heading_whitespace_is_normalized() {
    let page = HtmlDetailPage::parse(CORPORATION);
    assert_eq!(page.heading().as_deref(), Some("Financial Disclosures Registration for Corporation"));
}

#[test]
fn unknown_legend_does_not_leak_into_entity() {
    let out = extract_html(CORPORATION, "1409778", URL).unwrap();
    let e = &out.entity;

    assert_eq!(e.entity_type, EntityType::Corporation);
    assert_eq!(e.name, "Beehive Holdings LLC");
    assert_eq!(e.county, "Utah");
    assert_eq!(e.address1, "400 S State");
    assert_eq!(e.city, "Provo");
    assert!(e.associated_people.is_empty());

    let unknown: Vec<&Issue> = out.issues_of(IssueKind::UnknownLegend).collect();
    assert_eq!(unknown.len(), 1);
    match unknown[0] {
        Issue::UnknownLegend { section, legend, content } => {
            assert_eq!(*section, 1);
            assert_eq!(legend, "Misc Notes");
            assert_eq!(content.len(), 2);
        }
        other => panic!("unexpected issue {other:?}"),
    }

    // what a user reads in the log names every dropped value
    let message = unknown[0].to_string();
    assert!(message.contains("Misc Notes"), "{message}");
    assert!(message.contains(r#"First: "Should""#), "{message}");
    assert!(message.contains(r#"Last: "Vanish""#), "{message}");

    // "Fax Number" is not a known caption
    let unmapped: Vec<&Issue> = out.issues_of(IssueKind::UnmappedLabel).collect();
    assert_eq!(unmapped, vec![&Issue::UnmappedLabel {
        section: 0,
        label: "Fax Number".into(),
        value: "801-555-0199".into(),
    }]);
}

#[test]
fn one_person_per_person_section_in_order() {
    let out = extract_html(CANDIDATE, "1409779", URL).unwrap();
    assert!(out.is_clean(), "unexpected issues: {:?}", out.issues);
    assert_eq!(out.entity.entity_type, EntityType::CandidatesAndOfficeHolders);

    let people = &out.entity.associated_people;
    assert_eq!(people.len(), 3);

    assert_eq!(people[0].first, "Ann");
    assert_eq!(people[0].office, "State Senate");
    assert_eq!(people[0].district_number, "12");
    assert_eq!(people[0].party, "Independent");
    assert_eq!(people[0].county, "Cache");

    assert_eq!(people[1].first, "Bob");
    assert_eq!(people[1].email, "bob@example.org");

    assert_eq!(people[2].last, "Gamma");
    assert_eq!(people[2].occupation, "Accountant");

    // the candidate page has no entity-level section
    assert_eq!(out.entity.name, "");
}

#[test]
fn unknown_heading_fails_the_page() {
    let err = extract_html(UNKNOWN, "1", URL).unwrap_err();
    assert_eq!(err, PageError::UnresolvedType {
        heading: "Financial Disclosures Registration for Something New".into(),
        url: URL.into(),
    });
}

#[test]
fn page_without_heading_fails() {
    let err = extract_html("<html><body><p>maintenance</p></body></html>", "1", URL).unwrap_err();
    assert!(matches!(err, PageError::MissingHeading { .. }));
}

#[test]
fn registration_json_shape() {
    let out = extract_html(PAC, "1409777", URL).unwrap();
    let v = serde_json::to_value(&out.entity).unwrap();

    assert_eq!(v["id"], "1409777");
    assert_eq!(v["type"], "Political Action Committee");
    assert_eq!(v["name"], "Acme PAC");
    assert_eq!(v["associated_people"][0]["first"], "Jane");
    assert_eq!(v["associated_people"][1]["first"], "Acme Widgets Inc.");
    assert!(v.get("entity_type").is_none());
}
