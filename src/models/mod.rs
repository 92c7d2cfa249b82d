pub mod payment;
pub mod role;

pub use payment::{PaymentRecord, PaymentStatus};
pub use role::{RoleLabels, ViewerRole};
