use crate::error::GigPayError;
use crate::models::PaymentRecord;
use crate::store::PaymentStore;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// User-selectable sort column for the history view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Amount,
}

/// Re-orders records in place. Display and export both read whatever
/// order the records currently carry, so this is the only place the
/// order ever changes after a fetch.
pub fn sort_records(records: &mut [PaymentRecord], key: SortKey, descending: bool) {
    records.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a
                .amount
                .partial_cmp(&b.amount)
                .unwrap_or(Ordering::Equal),
        };
        if descending { ordering.reverse() } else { ordering }
    });
}

/// Fetches the viewer's payment history from the record store and
/// normalizes it: newest settlement first.
pub struct PaymentFetcher<S: PaymentStore> {
    store: Arc<S>,
}

impl<S: PaymentStore> PaymentFetcher<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn fetch_history(
        &self,
        viewer_id: &str,
    ) -> Result<Vec<PaymentRecord>, GigPayError> {
        let mut records = self.store.get_payment_history(viewer_id).await?;
        sort_records(&mut records, SortKey::Date, true);
        debug!(viewer_id, count = records.len(), "fetched payment history");
        Ok(records)
    }
}
