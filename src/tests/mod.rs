// src/tests/mod.rs

mod report_tests;
mod table_tests;

use crate::models::{PaymentRecord, PaymentStatus};
use chrono::{TimeZone, Utc};

/// Builds a settled record for a given calendar day.
pub fn record(
    id: &str,
    amount: f64,
    counterparty: &str,
    date: (i32, u32, u32),
    status: PaymentStatus,
) -> PaymentRecord {
    PaymentRecord {
        id: id.to_string(),
        amount,
        counterparty_name: counterparty.to_string(),
        description: format!("Mission {}", id),
        date: Utc
            .with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0)
            .unwrap(),
        status,
    }
}
