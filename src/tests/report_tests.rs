// src/tests/report_tests.rs

use crate::error::GigPayError;
use crate::models::{PaymentStatus, ViewerRole};
use crate::presenter::{HistoryRow, present};
use crate::report::{build_report, export_report};
use crate::tests::record;

#[test]
fn empty_history_is_rejected() {
    let err = build_report(&[], ViewerRole::Freelancer).unwrap_err();
    assert!(matches!(err, GigPayError::EmptyDataset));

    let err = export_report(&[], ViewerRole::Client).unwrap_err();
    assert!(matches!(err, GigPayError::EmptyDataset));
}

#[test]
fn single_record_yields_header_plus_one_row() {
    let records = vec![record(
        "p1",
        150.0,
        "Alice",
        (2024, 3, 1),
        PaymentStatus::Completed,
    )];

    let document = build_report(&records, ViewerRole::Freelancer).unwrap();

    assert_eq!(document.headers().len(), 4);
    assert_eq!(document.rows().len(), 1);
}

#[test]
fn headers_follow_the_viewer_role() {
    let records = vec![record(
        "p1",
        10.0,
        "Alice",
        (2024, 1, 1),
        PaymentStatus::Completed,
    )];

    let freelancer = build_report(&records, ViewerRole::Freelancer).unwrap();
    assert_eq!(freelancer.headers(), ["Client", "Reçu", "Date", "Statut"]);

    let client = build_report(&records, ViewerRole::Client).unwrap();
    assert_eq!(client.headers(), ["Freelance", "Payé", "Date", "Statut"]);
}

#[test]
fn freelancer_report_matches_worked_scenario() {
    let records = vec![
        record("p1", 150.0, "Alice", (2024, 3, 1), PaymentStatus::Completed),
        record("p2", 75.5, "Bob", (2024, 2, 15), PaymentStatus::Pending),
    ];

    let document = build_report(&records, ViewerRole::Freelancer).unwrap();

    assert_eq!(document.headers(), ["Client", "Reçu", "Date", "Statut"]);
    assert_eq!(
        document.rows()[0],
        vec!["Alice", "150.00 €", "2024-03-01", "Effectué"]
    );
    assert_eq!(
        document.rows()[1],
        vec!["Bob", "75.50 €", "2024-02-15", "En attente"]
    );
}

#[test]
fn report_rows_follow_presentation_order() {
    let records = vec![
        record("p3", 30.0, "Carol", (2024, 6, 1), PaymentStatus::Completed),
        record("p1", 10.0, "Alice", (2024, 5, 1), PaymentStatus::Completed),
        record("p2", 20.0, "Bob", (2024, 4, 1), PaymentStatus::Completed),
    ];

    let view = present(&records, ViewerRole::Client);
    let document = build_report(&records, ViewerRole::Client).unwrap();

    let presented: Vec<_> = view
        .rows
        .iter()
        .map(|row| match row {
            HistoryRow::Payment { counterparty, .. } => counterparty.clone(),
            HistoryRow::Empty { .. } => panic!("unexpected placeholder"),
        })
        .collect();
    let exported: Vec<_> = document.rows().iter().map(|row| row[0].clone()).collect();

    assert_eq!(presented, exported);
}

#[test]
fn export_renders_pdf_bytes() {
    let records = vec![record(
        "p1",
        150.0,
        "Alice",
        (2024, 3, 1),
        PaymentStatus::Completed,
    )];

    let bytes = export_report(&records, ViewerRole::Freelancer).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}
