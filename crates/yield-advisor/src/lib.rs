//! # yield-advisor
//!
//! Deterministic DeFi yield-strategy recommendation engine.
//!
//! Given an optional portfolio snapshot, optional market data and an
//! optional declared risk tolerance, the engine classifies the market,
//! profiles the user's risk, generates candidate strategies from a fixed
//! rule table, ranks them by confidence and, for the predict profile,
//! aggregates a portfolio-level prediction.
//!
//! ## Pipeline
//!
//! ```text
//! marketData ──▶ classify ──▶ (trend, volatility) ─┐
//!                                                  ├─▶ generate ──▶ rank ──▶ [Recommendation]
//! portfolio ──▶ assess_risk ──▶ tolerance ─────────┘                 │
//!                      ▲                                             ▼
//!            riskTolerance (wins when declared)          aggregate ──▶ PredictionResult
//! ```
//!
//! Two strategy presets exist, [`StrategyProfile::Predict`] and
//! [`StrategyProfile::Recommend`]. They gate and price strategies
//! differently and are never merged.
//!
//! ## Example
//!
//! ```
//! use yield_advisor::{AdvisoryRequest, MarketCondition, RiskLevel, Trend, Volatility, YieldAdvisor};
//!
//! let advisor = YieldAdvisor::default();
//! let request = AdvisoryRequest::default()
//!     .with_market(MarketCondition::new(Trend::Stable, Volatility::High))
//!     .with_risk_tolerance(RiskLevel::Medium);
//!
//! let ranked = advisor.recommend(&request).unwrap();
//! assert!(ranked.windows(2).all(|w| w[0].confidence >= w[1].confidence));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod market;
pub mod model;
pub mod prediction;
pub mod request;
pub mod risk;
pub mod source;
pub mod strategy;
pub mod svckit;
pub mod voice;

pub use config::{EngineConfig, IdSuffix};
pub use engine::YieldAdvisor;
pub use error::{AdvisorError, Result, SourceError};
pub use model::{
    MarketCondition, MarketInput, MarketSignal, PortfolioSnapshot, PositionRecord,
    PredictionResult, Recommendation, RecommendedAction, RiskLevel, RiskTolerance, StrategyType,
    Trend, Volatility,
};
pub use request::AdvisoryRequest;
pub use source::{Collaborators, PortfolioSource, PreferenceStore};
pub use strategy::StrategyProfile;
pub use svckit::register_tools;
pub use voice::{CommandIntent, IntentKind, route_command};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{
        AssessMarketTool, AssessRiskTool, PortfolioTool, PredictTool, RecommendTool,
        VoiceCommandTool,
    };
}
