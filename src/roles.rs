use crate::error::GigPayError;
use crate::models::ViewerRole;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Seam to the profile service that knows whether the current session
/// belongs to a freelancer or a client.
#[async_trait]
pub trait RoleResolver: Send + Sync {
    /// An unknown viewer is a `RoleUnresolved` error, never a silent
    /// default to one role.
    async fn resolve_role(&self, viewer_id: &str) -> Result<ViewerRole, GigPayError>;
}

pub struct InMemoryRoleDirectory {
    roles: Mutex<HashMap<String, ViewerRole>>,
}

impl InMemoryRoleDirectory {
    pub fn new() -> Self {
        InMemoryRoleDirectory {
            roles: Mutex::new(HashMap::new()),
        }
    }

    pub async fn assign(&self, viewer_id: &str, role: ViewerRole) {
        self.roles.lock().await.insert(viewer_id.to_string(), role);
    }
}

impl Default for InMemoryRoleDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleResolver for InMemoryRoleDirectory {
    async fn resolve_role(&self, viewer_id: &str) -> Result<ViewerRole, GigPayError> {
        self.roles
            .lock()
            .await
            .get(viewer_id)
            .copied()
            .ok_or_else(|| GigPayError::RoleUnresolved(viewer_id.to_string()))
    }
}
