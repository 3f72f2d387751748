//! Engine Configuration
//!
//! Every threshold and fallback the classifier, profiler and aggregator use
//! lives here, so the rule constants can be audited in one place.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::{RiskLevel, Trend, Volatility};

/// How recommendation IDs get their per-call suffix
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdSuffix {
    /// `-1`, `-2`, ... in generation order; deterministic
    Sequence,
    /// Random v4 UUID
    #[default]
    Uuid,
}

impl IdSuffix {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequence" | "seq" => Some(Self::Sequence),
            "uuid" | "random" => Some(Self::Uuid),
            _ => None,
        }
    }
}

/// Classification cut-offs. Comparisons are strict (`>` / `<`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Thresholds {
    /// Price change above which a trend can be bullish
    pub bullish_price_change: Decimal,
    /// Price change below which a trend can be bearish
    pub bearish_price_change: Decimal,
    /// Volume change required for any directional trend
    pub trend_volume_change: Decimal,

    pub high_volatility_index: Decimal,
    pub high_price_swing: Decimal,
    pub medium_volatility_index: Decimal,
    pub medium_price_swing: Decimal,

    /// High-risk share of positions above which tolerance is `high`
    pub high_risk_majority: Decimal,

    /// Positions above this count make a portfolio "diversified"
    pub diversified_positions: usize,
    /// Positions above this count raise overall risk to `medium`
    pub crowded_positions: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bullish_price_change: dec!(0.02),
            bearish_price_change: dec!(-0.02),
            trend_volume_change: dec!(0.1),
            high_volatility_index: dec!(0.7),
            high_price_swing: dec!(0.05),
            medium_volatility_index: dec!(0.4),
            medium_price_swing: dec!(0.02),
            high_risk_majority: dec!(0.5),
            diversified_positions: 2,
            crowded_positions: 5,
        }
    }
}

/// Fallback values and weights
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Defaults {
    pub trend: Trend,
    pub volatility: Volatility,
    pub risk_tolerance: RiskLevel,

    pub data_completeness_present: Decimal,
    pub data_completeness_absent: Decimal,
    pub market_clarity: Decimal,
    pub diversity_broad: Decimal,
    pub diversity_narrow: Decimal,

    pub completeness_weight: Decimal,
    pub clarity_weight: Decimal,
    pub diversity_weight: Decimal,

    pub base_return: Decimal,
    pub bullish_return_adjustment: Decimal,
    pub bearish_return_adjustment: Decimal,
    /// Applied only under high volatility, keyed by tolerance
    pub volatile_high_tolerance_adjustment: Decimal,
    pub volatile_medium_tolerance_adjustment: Decimal,
    pub volatile_low_tolerance_adjustment: Decimal,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            trend: Trend::Stable,
            volatility: Volatility::Medium,
            risk_tolerance: RiskLevel::Medium,
            data_completeness_present: dec!(0.8),
            data_completeness_absent: dec!(0.5),
            market_clarity: dec!(0.6),
            diversity_broad: dec!(0.8),
            diversity_narrow: dec!(0.6),
            completeness_weight: dec!(0.4),
            clarity_weight: dec!(0.4),
            diversity_weight: dec!(0.2),
            base_return: dec!(0.08),
            bullish_return_adjustment: dec!(0.03),
            bearish_return_adjustment: dec!(-0.02),
            volatile_high_tolerance_adjustment: dec!(0.04),
            volatile_medium_tolerance_adjustment: dec!(0.01),
            volatile_low_tolerance_adjustment: dec!(-0.02),
        }
    }
}

/// Full engine configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    pub thresholds: Thresholds,
    pub defaults: Defaults,
    pub model_version: String,
    pub prediction_horizon: String,
    pub id_suffix: IdSuffix,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            defaults: Defaults::default(),
            model_version: "v1.2.0".into(),
            prediction_horizon: "7d".into(),
            id_suffix: IdSuffix::default(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `ADVISOR_MODEL_VERSION`,
    /// `ADVISOR_PREDICTION_HORIZON` and `ADVISOR_ID_SUFFIX`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(version) = std::env::var("ADVISOR_MODEL_VERSION") {
            config.model_version = version;
        }
        if let Ok(horizon) = std::env::var("ADVISOR_PREDICTION_HORIZON") {
            config.prediction_horizon = horizon;
        }
        if let Ok(raw) = std::env::var("ADVISOR_ID_SUFFIX") {
            match IdSuffix::parse(&raw) {
                Some(suffix) => config.id_suffix = suffix,
                None => tracing::warn!(value = %raw, "Ignoring unknown ADVISOR_ID_SUFFIX"),
            }
        }

        config
    }

    /// Deterministic IDs, for tests and reproducible output
    #[must_use]
    pub fn with_sequential_ids(mut self) -> Self {
        self.id_suffix = IdSuffix::Sequence;
        self
    }
}
