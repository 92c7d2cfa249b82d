use serde::{Deserialize, Serialize};

/// Perspective from which the current session views payment history.
/// Supplied externally and fixed for the lifetime of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Freelancer,
    Client,
}

/// Role-aware column labels. Both the on-screen history and the PDF
/// report read their labels from here, nowhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleLabels {
    pub counterparty: &'static str,
    pub amount: &'static str,
}

impl ViewerRole {
    pub fn labels(self) -> RoleLabels {
        match self {
            // A freelancer looks at money received from clients
            ViewerRole::Freelancer => RoleLabels {
                counterparty: "Client",
                amount: "Reçu",
            },
            // A client looks at money paid to freelancers
            ViewerRole::Client => RoleLabels {
                counterparty: "Freelance",
                amount: "Payé",
            },
        }
    }
}
