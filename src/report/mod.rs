use crate::error::GigPayError;
use crate::models::{PaymentRecord, ViewerRole};
use async_trait::async_trait;
use tracing::info;

pub mod table;

pub use table::TableDocument;

pub const REPORT_TITLE: &str = "Historique des paiements";

/// Builds the report table for the records exactly as they are ordered
/// right now; the exporter follows presentation state, it does not
/// re-sort. Fails on an empty history rather than producing a
/// header-only document.
pub fn build_report(
    records: &[PaymentRecord],
    role: ViewerRole,
) -> Result<TableDocument, GigPayError> {
    if records.is_empty() {
        return Err(GigPayError::EmptyDataset);
    }

    let labels = role.labels();
    let headers = vec![
        labels.counterparty.to_string(),
        labels.amount.to_string(),
        "Date".to_string(),
        "Statut".to_string(),
    ];
    let rows = records
        .iter()
        .map(|record| {
            vec![
                record.counterparty_name.clone(),
                record.display_amount(),
                record.display_date(),
                record.status.to_string(),
            ]
        })
        .collect();

    Ok(TableDocument::new(REPORT_TITLE.to_string(), headers, rows))
}

/// Builds and renders in one step.
pub fn export_report(records: &[PaymentRecord], role: ViewerRole) -> Result<Vec<u8>, GigPayError> {
    let document = build_report(records, role)?;
    let bytes = document.render()?;
    info!(
        rows = records.len(),
        pages = document.pages().len(),
        size = bytes.len(),
        "payment report rendered"
    );
    Ok(bytes)
}

/// Document generation seam for the view controller, so the state
/// machine can be exercised against a stub instead of a PDF engine.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    async fn export(
        &self,
        records: &[PaymentRecord],
        role: ViewerRole,
    ) -> Result<Vec<u8>, GigPayError>;
}

pub struct PdfExporter;

#[async_trait]
impl ReportExporter for PdfExporter {
    async fn export(
        &self,
        records: &[PaymentRecord],
        role: ViewerRole,
    ) -> Result<Vec<u8>, GigPayError> {
        export_report(records, role)
    }
}
