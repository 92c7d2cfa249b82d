use crate::models::{PaymentRecord, ViewerRole};
use serde::Serialize;

pub const EMPTY_HISTORY_MESSAGE: &str = "Aucun paiement pour le moment";

/// One entry in the rendered history list. An empty history yields a
/// single `Empty` row so downstream rendering never special-cases
/// zero-length collections.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryRow {
    Payment {
        id: String,
        counterparty: String,
        amount: String,
        date: String,
        status: String,
    },
    Empty {
        message: String,
    },
}

/// Role-aware view of a payment history: column labels plus one row
/// descriptor per record, in the records' current order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryView {
    pub columns: Vec<String>,
    pub rows: Vec<HistoryRow>,
}

/// Derives the view for the given role. Pure; the records themselves
/// are never touched.
pub fn present(records: &[PaymentRecord], role: ViewerRole) -> HistoryView {
    let labels = role.labels();
    let columns = vec![
        labels.counterparty.to_string(),
        labels.amount.to_string(),
        "Date".to_string(),
        "Statut".to_string(),
    ];

    let rows = if records.is_empty() {
        vec![HistoryRow::Empty {
            message: EMPTY_HISTORY_MESSAGE.to_string(),
        }]
    } else {
        records
            .iter()
            .map(|record| HistoryRow::Payment {
                id: record.id.clone(),
                counterparty: record.counterparty_name.clone(),
                amount: record.display_amount(),
                date: record.display_date(),
                status: record.status.to_string(),
            })
            .collect()
    };

    HistoryView { columns, rows }
}
