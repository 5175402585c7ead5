use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Caller-supplied credentials for the speech service.
///
/// Both fields are optional at the type level; a session refuses to start
/// unless both are present and non-empty. The session never refreshes or
/// validates them beyond that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionCredentials {
    /// Service region, e.g. "westeurope".
    pub region: Option<String>,
    /// Short-lived authorization token.
    pub token: Option<String>,
}

impl SessionCredentials {
    pub fn new(region: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            token: Some(token.into()),
        }
    }

    /// Return (region, token), failing when either is missing or empty.
    pub(crate) fn require(&self) -> Result<(&str, &str), SessionError> {
        match (self.region.as_deref(), self.token.as_deref()) {
            (Some(region), Some(token)) if !region.is_empty() && !token.is_empty() => {
                Ok((region, token))
            }
            _ => Err(SessionError::MissingCredentials),
        }
    }
}
