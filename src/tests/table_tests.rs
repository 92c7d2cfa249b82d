// src/tests/table_tests.rs

use crate::constants::ROWS_PER_PAGE;
use crate::report::TableDocument;

fn table_with_rows(count: usize) -> TableDocument {
    let headers = vec!["A".to_string(), "B".to_string()];
    let rows = (0..count)
        .map(|i| vec![format!("a{}", i), format!("b{}", i)])
        .collect();
    TableDocument::new("Test".to_string(), headers, rows)
}

#[test]
fn rows_up_to_capacity_fit_on_one_page() {
    assert_eq!(table_with_rows(1).pages().len(), 1);
    assert_eq!(table_with_rows(ROWS_PER_PAGE).pages().len(), 1);
}

#[test]
fn overflow_spills_onto_a_second_page() {
    let table = table_with_rows(ROWS_PER_PAGE + 1);
    let pages = table.pages();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), ROWS_PER_PAGE);
    assert_eq!(pages[1].len(), 1);
}

#[test]
fn pagination_preserves_row_order() {
    let table = table_with_rows(ROWS_PER_PAGE * 2 + 3);
    let flattened: Vec<_> = table.pages().into_iter().flatten().collect();

    assert_eq!(flattened.len(), ROWS_PER_PAGE * 2 + 3);
    assert_eq!(flattened[0][0], "a0");
    assert_eq!(flattened[ROWS_PER_PAGE][0], format!("a{}", ROWS_PER_PAGE));
    let last = ROWS_PER_PAGE * 2 + 2;
    assert_eq!(flattened[last][0], format!("a{}", last));
}

#[test]
fn render_produces_pdf_bytes() {
    let bytes = table_with_rows(3).render().unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn multi_page_table_renders() {
    let bytes = table_with_rows(ROWS_PER_PAGE + 5).render().unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}
