use serde::{Deserialize, Serialize};

/// Sign-off metadata found on the source document. Not employee data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationInfo {
    pub supervisor: Option<String>,
    pub approver: Option<String>,
    pub client: Option<String>,
    pub custom: Option<serde_json::Value>,
}

impl ValidationInfo {
    pub fn is_empty(&self) -> bool {
        self.supervisor.is_none()
            && self.approver.is_none()
            && self.client.is_none()
            && self.custom.as_ref().is_none_or(|v| v.is_null())
    }
}
