use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::portfolio::domain::PortfolioWizard;

/// Handle of one in-progress wizard, carried in the form URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardId(Uuid);

impl WizardId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for WizardId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for WizardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for WizardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardSessionError {
    #[error("Wizard session not found: {0}")]
    NotFound(WizardId),
}

#[async_trait]
pub trait WizardSessionStore: Send + Sync {
    async fn insert(&self, wizard: PortfolioWizard) -> WizardId;

    async fn get(&self, id: WizardId) -> Option<PortfolioWizard>;

    /// Overwrites an existing session; unknown ids are rejected.
    async fn save(&self, id: WizardId, wizard: PortfolioWizard) -> Result<(), WizardSessionError>;

    /// Takes the session out; a second caller for the same id gets `None`.
    async fn remove(&self, id: WizardId) -> Option<PortfolioWizard>;

    /// Puts a session taken out with [`remove`](Self::remove) back under its
    /// old id.
    async fn restore(&self, id: WizardId, wizard: PortfolioWizard);
}
