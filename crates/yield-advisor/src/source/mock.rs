//! Mock Collaborators
//!
//! For testing and demo purposes. Returns the dashboard's static wallet and
//! account data.

use async_trait::async_trait;
use rust_decimal_macros::dec;

use super::{PortfolioSource, PreferenceStore};
use crate::error::SourceError;
use crate::model::{PortfolioSnapshot, PositionRecord, RiskLevel};

/// Mock wallet service with a fixed snapshot
pub struct MockPortfolioSource {
    snapshot: Option<PortfolioSnapshot>,
}

impl Default for MockPortfolioSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPortfolioSource {
    /// Demo wallet: 1250.75 USDC, three active strategies
    pub fn new() -> Self {
        Self::with_snapshot(demo_portfolio())
    }

    pub const fn with_snapshot(snapshot: PortfolioSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// Always fails, like an unreachable RPC endpoint
    pub const fn unavailable() -> Self {
        Self { snapshot: None }
    }
}

#[async_trait]
impl PortfolioSource for MockPortfolioSource {
    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, SourceError> {
        self.snapshot
            .clone()
            .ok_or_else(|| SourceError::Unavailable("mock wallet offline".into()))
    }

    fn name(&self) -> &str {
        "MockWallet"
    }
}

/// Mock account service
pub struct MockPreferenceStore {
    tolerance: Option<RiskLevel>,
    available: bool,
}

impl Default for MockPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPreferenceStore {
    /// Demo account preference: `medium`
    pub const fn new() -> Self {
        Self::with_tolerance(Some(RiskLevel::Medium))
    }

    pub const fn with_tolerance(tolerance: Option<RiskLevel>) -> Self {
        Self {
            tolerance,
            available: true,
        }
    }

    pub const fn unavailable() -> Self {
        Self {
            tolerance: None,
            available: false,
        }
    }
}

#[async_trait]
impl PreferenceStore for MockPreferenceStore {
    async fn risk_tolerance(&self) -> Result<Option<RiskLevel>, SourceError> {
        if self.available {
            Ok(self.tolerance)
        } else {
            Err(SourceError::Unavailable("mock account service offline".into()))
        }
    }

    fn name(&self) -> &str {
        "MockAccounts"
    }
}

fn demo_portfolio() -> PortfolioSnapshot {
    let mut farm = PositionRecord::new("strat-1", "Stablecoin Yield Farm", dec!(8.5), dec!(50), RiskLevel::Low);
    farm.current_yield = Some(dec!(0.25));
    farm.strategy_type = Some("stablecoin".into());
    farm.min_amount = Some(dec!(100));
    farm.max_amount = Some(dec!(10000));

    let mut pool = PositionRecord::new("strat-2", "DeFi Liquidity Pool", dec!(12.3), dec!(750), RiskLevel::Medium);
    pool.current_yield = Some(dec!(0.45));
    pool.strategy_type = Some("liquidity".into());
    pool.min_amount = Some(dec!(50));
    pool.max_amount = Some(dec!(5000));

    let mut aggressive = PositionRecord::new("strat-3", "Aggressive Yield Farming", dec!(18.2), dec!(250), RiskLevel::High);
    aggressive.current_yield = Some(dec!(0.38));
    aggressive.strategy_type = Some("aggressive".into());
    aggressive.min_amount = Some(dec!(200));
    aggressive.max_amount = Some(dec!(2500));

    PortfolioSnapshot::new(dec!(1250.75), dec!(1542.30))
        .with_position(farm)
        .with_position(pool)
        .with_position(aggressive)
}
