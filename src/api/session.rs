use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ChartError, ChartResult};

use super::DispatchMode;

/// Signed-in user as the dashboard sees it. The access token never leaves
/// the session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: Option<u64>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserProfile {
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => self.username.clone(),
        }
    }
}

/// Where the dashboard takes its charts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSource {
    /// Analysis results fetched for the signed-in user.
    Live,
    /// Built-in demo charts.
    Showcase,
}

impl ChartSource {
    #[must_use]
    pub fn dispatch_mode(self) -> DispatchMode {
        match self {
            Self::Live => DispatchMode::Live,
            Self::Showcase => DispatchMode::Showcase,
        }
    }
}

/// Explicit "current user" value handed to whatever needs it.
///
/// Set on sign-in, cleared on sign-out. Without a user the dashboard only
/// has the showcase to offer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    user: Option<UserProfile>,
    token: Option<String>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: UserProfile, token: impl Into<String>) -> ChartResult<()> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "session token must not be empty".to_owned(),
            ));
        }
        info!(username = ?user.username, "session started");
        self.user = Some(user);
        self.token = Some(token);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if self.user.take().is_some() {
            info!("session ended");
        }
        self.token = None;
    }

    /// Replaces the access token of an active session.
    pub fn refresh_token(&mut self, token: impl Into<String>) -> ChartResult<()> {
        if self.user.is_none() {
            return Err(ChartError::InvalidData(
                "cannot refresh token without a signed-in user".to_owned(),
            ));
        }
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "session token must not be empty".to_owned(),
            ));
        }
        self.token = Some(token);
        Ok(())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn chart_source(&self) -> ChartSource {
        if self.is_authenticated() {
            ChartSource::Live
        } else {
            ChartSource::Showcase
        }
    }

    #[must_use]
    pub fn dispatch_mode(&self) -> DispatchMode {
        self.chart_source().dispatch_mode()
    }
}
