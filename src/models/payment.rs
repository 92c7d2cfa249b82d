use crate::constants::{CURRENCY_SUFFIX, DATE_FORMAT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Pending => "En attente",
            PaymentStatus::Completed => "Effectué",
            PaymentStatus::Failed => "Échoué",
        };
        write!(f, "{}", label)
    }
}

/// One settled transaction between a freelancer and a client.
/// Records are immutable once fetched; the store assigns `id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub amount: f64,
    pub counterparty_name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    /// Amount with exactly two decimals and the fixed currency suffix.
    pub fn display_amount(&self) -> String {
        format!("{:.2} {}", self.amount, CURRENCY_SUFFIX)
    }

    /// Settlement date as an ISO-8601 calendar date.
    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
