use crate::error::GigPayError;
use crate::models::PaymentRecord;
use async_trait::async_trait;

/// Read-only seam to the payment record store. The store is the
/// authoritative source of settled payments; this subsystem queries it
/// and never mutates it. Authentication travels with the session
/// upstream of this trait.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Raw payment history for the given viewer, in store order.
    /// No history is an empty vec, not an error.
    async fn get_payment_history(
        &self,
        viewer_id: &str,
    ) -> Result<Vec<PaymentRecord>, GigPayError>;
}

pub mod in_memory;
