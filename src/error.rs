use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
pub enum GigPayError {
    /// Transport-level failure (connection refused, timeout) while
    /// talking to the payment record store
    #[error("Network failure: {0}")]
    Network(String),

    /// Session is invalid or has expired
    #[error("Session invalid or expired")]
    Auth,

    /// Export was requested with no payment rows to export
    #[error("Cannot export a report from an empty payment history")]
    EmptyDataset,

    /// The PDF renderer failed to produce a document
    #[error("Report rendering failed: {0}")]
    RenderFailure(String),

    /// The viewer's role (freelancer or client) could not be resolved
    #[error("Viewer role could not be resolved for {0}")]
    RoleUnresolved(String),
}
