//! External Collaborators
//!
//! The wallet/portfolio service and the account preference store. The
//! engine never calls these itself; tools use [`Collaborators`] to fill in
//! what a request left out before handing it over.

mod mock;

pub use mock::{MockPortfolioSource, MockPreferenceStore};

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::{PortfolioSnapshot, RiskLevel};
use crate::request::AdvisoryRequest;

/// Source of the user's current holdings
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, SourceError>;

    /// Source name, for logs
    fn name(&self) -> &str;
}

/// Stored account preferences
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// `Ok(None)` when the user never declared a tolerance
    async fn risk_tolerance(&self) -> Result<Option<RiskLevel>, SourceError>;

    fn name(&self) -> &str;
}

/// Optional collaborators available to the tools
#[derive(Clone, Default)]
pub struct Collaborators {
    pub portfolio: Option<Arc<dyn PortfolioSource>>,
    pub preferences: Option<Arc<dyn PreferenceStore>>,
}

impl Collaborators {
    pub fn none() -> Self {
        Self::default()
    }

    /// Demo dashboard data
    pub fn demo() -> Self {
        Self {
            portfolio: Some(Arc::new(MockPortfolioSource::new())),
            preferences: Some(Arc::new(MockPreferenceStore::new())),
        }
    }

    /// Fetch the portfolio, logging and swallowing failures
    pub async fn portfolio(&self) -> Option<PortfolioSnapshot> {
        let source = self.portfolio.as_ref()?;
        match source.fetch_portfolio().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "Portfolio unavailable, continuing without it");
                None
            }
        }
    }

    /// Fetch the stored tolerance, logging and swallowing failures
    pub async fn risk_tolerance(&self) -> Option<RiskLevel> {
        let store = self.preferences.as_ref()?;
        match store.risk_tolerance().await {
            Ok(tolerance) => tolerance,
            Err(e) => {
                tracing::warn!(store = store.name(), error = %e, "Preferences unavailable, continuing without them");
                None
            }
        }
    }

    /// Fill absent request fields from the collaborators
    pub async fn complete(&self, request: &mut AdvisoryRequest) {
        if request.portfolio.is_none() {
            request.portfolio = self.portfolio().await;
        }
        if request.risk_tolerance.is_none() {
            request.risk_tolerance = self.risk_tolerance().await;
        }
    }
}
