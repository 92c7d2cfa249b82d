use crate::error::GigPayError;
use crate::models::PaymentRecord;
use crate::store::PaymentStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// In-memory stand-in for the payment record store. Backs the demo
/// server and the tests; failure injection and artificial latency let
/// tests drive the controller through its error and coalescing paths.
pub struct InMemoryPaymentStore {
    records: Mutex<HashMap<String, Vec<PaymentRecord>>>,
    fail_next: Mutex<Option<GigPayError>>,
    delay: Mutex<Option<Duration>>,
    fetch_calls: AtomicUsize,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        InMemoryPaymentStore {
            records: Mutex::new(HashMap::new()),
            fail_next: Mutex::new(None),
            delay: Mutex::new(None),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub async fn seed(&self, viewer_id: &str, payments: Vec<PaymentRecord>) {
        let mut records = self.records.lock().await;
        records.entry(viewer_id.to_string()).or_default().extend(payments);
    }

    /// The next `get_payment_history` call fails with `err`, then the
    /// store recovers.
    pub async fn fail_next(&self, err: GigPayError) {
        *self.fail_next.lock().await = Some(err);
    }

    /// Every subsequent fetch sleeps before answering.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.lock().await = Some(delay);
    }

    /// How many times the store has been queried.
    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryPaymentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn get_payment_history(
        &self,
        viewer_id: &str,
    ) -> Result<Vec<PaymentRecord>, GigPayError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.fail_next.lock().await.take() {
            return Err(err);
        }

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        Ok(self
            .records
            .lock()
            .await
            .get(viewer_id)
            .cloned()
            .unwrap_or_default())
    }
}
