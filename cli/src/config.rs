use anyhow::Context as _;
use aocv_webclient::{AocClient, SessionToken};
use serde::Deserialize;

/// Settings read from the process environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvConfig {
    /// Value of the `session` cookie, from `SESSION`.
    #[serde(default)]
    pub session: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        envy::from_env::<Self>().context("Failed to load settings from environment")
    }

    pub fn session_token(&self) -> Option<SessionToken> {
        self.session.as_deref().and_then(SessionToken::new)
    }

    pub fn make_client(&self) -> anyhow::Result<AocClient> {
        let token = self.session_token();
        if token.is_none() {
            log::warn!("SESSION is not set; requests for inputs and answers will be refused");
        }
        AocClient::public(token).context("Failed to build HTTP client")
    }
}
