pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod presenter;
pub mod report;
pub mod roles;
pub mod store;

pub use controller::{HistoryController, ViewState};
pub use error::GigPayError;
pub use fetcher::{PaymentFetcher, SortKey};
pub use presenter::present;
pub use report::{PdfExporter, ReportExporter};
pub use roles::InMemoryRoleDirectory;
pub use store::in_memory::InMemoryPaymentStore;

#[cfg(test)]
mod tests;
