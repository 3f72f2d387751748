//! Domain Models
//!
//! Plain data records exchanged with the engine. Uses `rust_decimal` for
//! every return, balance, confidence and threshold so the rule constants
//! stay exact.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level ordinal used for position risk, strategy risk and user
/// tolerance. Ordered `Low < Medium < High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A user's declared or derived risk tolerance
pub type RiskTolerance = RiskLevel;

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Stable => "stable",
        })
    }
}

/// Market volatility band
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Volatility {
    Low,
    Medium,
    High,
}

impl fmt::Display for Volatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// An existing yield position, as reported by the wallet service.
/// The engine only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub id: String,
    pub name: String,

    /// Annual yield in percent (8.5 = 8.5%)
    pub apy: Decimal,

    /// Capital currently deployed
    pub invested: Decimal,

    #[serde(alias = "risk_level")]
    pub risk_level: RiskLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_yield: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Decimal>,
}

impl PositionRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        apy: Decimal,
        invested: Decimal,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            apy,
            invested,
            risk_level,
            current_yield: None,
            strategy_type: None,
            contract_address: None,
            min_amount: None,
            max_amount: None,
        }
    }
}

/// A user's holdings at request time
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(alias = "usdc_balance")]
    pub usdc_balance: Decimal,

    /// Expected to be at least `usdc_balance`; advisory only
    #[serde(alias = "total_value")]
    pub total_value: Decimal,

    #[serde(default, alias = "active_strategies")]
    pub active_strategies: Vec<PositionRecord>,
}

impl PortfolioSnapshot {
    pub fn new(usdc_balance: Decimal, total_value: Decimal) -> Self {
        Self {
            usdc_balance,
            total_value,
            active_strategies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: PositionRecord) -> Self {
        self.active_strategies.push(position);
        self
    }

    pub fn position_count(&self) -> usize {
        self.active_strategies.len()
    }

    /// Share of positions tagged high risk, `None` without positions
    pub fn high_risk_fraction(&self) -> Option<Decimal> {
        let total = self.active_strategies.len();
        if total == 0 {
            return None;
        }

        let high = self
            .active_strategies
            .iter()
            .filter(|p| p.risk_level == RiskLevel::High)
            .count();

        Some(Decimal::from(high) / Decimal::from(total))
    }

    /// Sum of capital deployed across positions
    pub fn total_invested(&self) -> Decimal {
        self.active_strategies.iter().map(|p| p.invested).sum()
    }
}

/// Raw market indicators from the market-data feed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSignal {
    #[serde(alias = "price_change")]
    pub price_change: Decimal,

    #[serde(alias = "volume_change")]
    pub volume_change: Decimal,

    /// In `[0, 1]`
    #[serde(alias = "volatility_index")]
    pub volatility_index: Decimal,

    #[serde(alias = "price_swing")]
    pub price_swing: Decimal,

    /// In `[0, 1]`
    #[serde(default, alias = "clarity_score", skip_serializing_if = "Option::is_none")]
    pub clarity_score: Option<Decimal>,
}

impl MarketSignal {
    pub const fn new(
        price_change: Decimal,
        volume_change: Decimal,
        volatility_index: Decimal,
        price_swing: Decimal,
    ) -> Self {
        Self {
            price_change,
            volume_change,
            volatility_index,
            price_swing,
            clarity_score: None,
        }
    }

    #[must_use]
    pub const fn with_clarity(mut self, clarity: Decimal) -> Self {
        self.clarity_score = Some(clarity);
        self
    }
}

/// Discrete market state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCondition {
    pub trend: Trend,
    pub volatility: Volatility,
}

impl MarketCondition {
    pub const fn new(trend: Trend, volatility: Volatility) -> Self {
        Self { trend, volatility }
    }
}

/// Market data as callers supply it: either raw indicators or an
/// already-classified condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarketInput {
    Signal(MarketSignal),
    Condition(MarketCondition),
}

impl MarketInput {
    pub const fn signal(&self) -> Option<&MarketSignal> {
        match self {
            Self::Signal(signal) => Some(signal),
            Self::Condition(_) => None,
        }
    }

    pub fn clarity_score(&self) -> Option<Decimal> {
        self.signal().and_then(|s| s.clarity_score)
    }
}

impl From<MarketSignal> for MarketInput {
    fn from(signal: MarketSignal) -> Self {
        Self::Signal(signal)
    }
}

impl From<MarketCondition> for MarketInput {
    fn from(condition: MarketCondition) -> Self {
        Self::Condition(condition)
    }
}

/// Family a recommendation belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    Stablecoin,
    Conservative,
    Balanced,
    Aggressive,
    Diversified,
    Protective,
}

/// A candidate yield strategy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Unique within one response; not a durable key
    pub id: String,
    pub name: String,
    pub description: String,

    /// Fractional annual return (0.12 = 12%)
    pub expected_return: Decimal,
    pub risk_level: RiskLevel,

    /// In `[0, 1]`
    pub confidence: Decimal,

    /// `expected_return × 100`, one decimal place
    pub apy: Decimal,
    pub strategy_type: StrategyType,

    /// Advisory percent of capital, 0-100
    pub allocation_suggestion: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_horizon: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocol_suggestions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_gas_cost: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawal_flexibility: Option<String>,
}

impl Recommendation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        strategy_type: StrategyType,
        risk_level: RiskLevel,
        expected_return: Decimal,
        confidence: Decimal,
        allocation_suggestion: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            expected_return,
            risk_level,
            confidence,
            apy: apy_from_return(expected_return),
            strategy_type,
            allocation_suggestion,
            time_horizon: None,
            tags: Vec::new(),
            protocol_suggestions: Vec::new(),
            estimated_gas_cost: None,
            withdrawal_flexibility: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_time_horizon(mut self, horizon: impl Into<String>) -> Self {
        self.time_horizon = Some(horizon.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_protocols(mut self, protocols: &[&str]) -> Self {
        self.protocol_suggestions = protocols.iter().map(|p| (*p).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_costs(mut self, gas: impl Into<String>, withdrawal: impl Into<String>) -> Self {
        self.estimated_gas_cost = Some(gas.into());
        self.withdrawal_flexibility = Some(withdrawal.into());
        self
    }
}

/// Display APY for a fractional return: `round(r × 100, 1)`
pub fn apy_from_return(expected_return: Decimal) -> Decimal {
    (expected_return * dec!(100)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Portfolio-level action suggested by a prediction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    BuyAggressive,
    BuyBalanced,
    Hold,
    Rebalance,
    ReduceExposure,
    MoveToStable,
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BuyAggressive => "buy_aggressive",
            Self::BuyBalanced => "buy_balanced",
            Self::Hold => "hold",
            Self::Rebalance => "rebalance",
            Self::ReduceExposure => "reduce_exposure",
            Self::MoveToStable => "move_to_stable",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    MarketDownturn,
    HighVolatility,
    LiquidityRisk,
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MarketDownturn => "market_downturn",
            Self::HighVolatility => "high_volatility",
            Self::LiquidityRisk => "liquidity_risk",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    /// No duplicates; downturn, volatility, liquidity order
    pub risk_factors: Vec<RiskFactor>,
}

/// Output of the predict profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub market_trend: Trend,
    pub volatility: Volatility,
    pub recommended_action: RecommendedAction,
    pub confidence: Decimal,
    pub expected_return: Decimal,
    pub risk_assessment: RiskAssessment,
    pub optimal_strategies: Vec<Recommendation>,
    pub timestamp: DateTime<Utc>,
    pub model_version: String,
    pub prediction_horizon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::parse(" HIGH "), Some(RiskLevel::High));
        assert_eq!(RiskLevel::parse("extreme"), None);
    }

    #[test]
    fn test_apy_rounding() {
        assert_eq!(apy_from_return(dec!(0.185)), dec!(18.5));
        assert_eq!(apy_from_return(dec!(0.045)), dec!(4.5));
        assert_eq!(apy_from_return(dec!(0.12345)), dec!(12.3));
        assert_eq!(apy_from_return(dec!(0.12355)), dec!(12.4));
    }

    #[test]
    fn test_high_risk_fraction() {
        let empty = PortfolioSnapshot::new(dec!(100), dec!(100));
        assert_eq!(empty.high_risk_fraction(), None);

        let portfolio = PortfolioSnapshot::new(dec!(100), dec!(400))
            .with_position(PositionRecord::new("a", "A", dec!(5), dec!(100), RiskLevel::Low))
            .with_position(PositionRecord::new("b", "B", dec!(15), dec!(200), RiskLevel::High));
        assert_eq!(portfolio.high_risk_fraction(), Some(dec!(0.5)));
        assert_eq!(portfolio.total_invested(), dec!(300));
    }

    #[test]
    fn test_market_input_untagged() {
        let signal: MarketInput = serde_json::from_value(serde_json::json!({
            "priceChange": 0.03,
            "volumeChange": 0.2,
            "volatilityIndex": 0.5,
            "priceSwing": 0.01,
            "clarity_score": 0.9
        }))
        .unwrap();
        assert_eq!(signal.clarity_score(), Some(dec!(0.9)));

        let condition: MarketInput = serde_json::from_value(serde_json::json!({
            "trend": "bearish",
            "volatility": "high"
        }))
        .unwrap();
        assert_eq!(
            condition,
            MarketInput::Condition(MarketCondition::new(Trend::Bearish, Volatility::High))
        );
    }

    #[test]
    fn test_position_accepts_wallet_extras() {
        let position: PositionRecord = serde_json::from_value(serde_json::json!({
            "id": "strat-2",
            "name": "DeFi Liquidity Pool",
            "apy": 12.3,
            "invested": 750,
            "currentYield": 0.45,
            "riskLevel": "medium",
            "contractAddress": "0xabc",
            "strategyType": "liquidity",
            "minAmount": 50,
            "maxAmount": 5000
        }))
        .unwrap();
        assert_eq!(position.risk_level, RiskLevel::Medium);
        assert_eq!(position.max_amount, Some(dec!(5000)));
    }
}
