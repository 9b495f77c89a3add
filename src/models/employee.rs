use serde::{Deserialize, Serialize};

/// Employee identity as known locally (entered by the user or filled once
/// from an extraction).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub employee_id: Option<String>,
}

/// Placeholder used in exports when neither name nor email is known.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown Employee";

impl Employee {
    /// Name for exports: full name, else email, else a placeholder.
    pub fn display_name(&self) -> String {
        non_blank(&self.full_name)
            .or_else(|| non_blank(&self.email))
            .unwrap_or(UNKNOWN_EMPLOYEE)
            .to_string()
    }

    pub fn has_name(&self) -> bool {
        non_blank(&self.full_name).is_some()
    }
}

/// Some(trimmed) when the value is present and not only whitespace.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
