//! Engine Facade
//!
//! [`YieldAdvisor`] wires classifier, profiler, generator, ranker and
//! aggregator together behind the two profile entry points. It holds only
//! configuration and is safe to share across threads.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::market;
use crate::model::{
    MarketCondition, MarketInput, PortfolioSnapshot, PredictionResult, Recommendation, RiskLevel,
};
use crate::prediction;
use crate::request::AdvisoryRequest;
use crate::risk;
use crate::strategy::{self, IdSequencer, StrategyProfile};

#[derive(Clone, Debug, Default)]
pub struct YieldAdvisor {
    config: EngineConfig,
}

impl YieldAdvisor {
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classify(&self, market_data: Option<&MarketInput>) -> MarketCondition {
        market::classify_input(market_data, &self.config.thresholds, &self.config.defaults)
    }

    pub fn assess_risk(&self, portfolio: Option<&PortfolioSnapshot>) -> RiskLevel {
        risk::assess_risk(portfolio, &self.config.thresholds, &self.config.defaults)
    }

    /// Declared tolerance wins; otherwise derive it from the portfolio.
    pub fn resolve_tolerance(&self, request: &AdvisoryRequest) -> RiskLevel {
        request
            .risk_tolerance
            .unwrap_or_else(|| self.assess_risk(request.portfolio.as_ref()))
    }

    /// Unranked candidates for one preset, with fresh per-call IDs
    pub fn generate(
        &self,
        profile: StrategyProfile,
        condition: MarketCondition,
        tolerance: RiskLevel,
    ) -> Vec<Recommendation> {
        let mut ids = IdSequencer::new(self.config.id_suffix);
        strategy::generate(profile, condition, tolerance, &mut ids)
    }

    /// Predict profile: full [`PredictionResult`]
    pub fn predict(&self, request: &AdvisoryRequest) -> Result<PredictionResult> {
        request.validate()?;

        let tolerance = self.resolve_tolerance(request);
        let result = prediction::aggregate(
            request.portfolio.as_ref(),
            request.market_data.as_ref(),
            tolerance,
            &self.config,
        );

        tracing::info!(
            trend = %result.market_trend,
            volatility = %result.volatility,
            %tolerance,
            action = %result.recommended_action,
            confidence = %result.confidence,
            strategies = result.optimal_strategies.len(),
            "Prediction complete"
        );

        Ok(result)
    }

    /// Recommend profile: ranked recommendations
    pub fn recommend(&self, request: &AdvisoryRequest) -> Result<Vec<Recommendation>> {
        request.validate()?;

        let tolerance = self.resolve_tolerance(request);
        let condition = self.classify(request.market_data.as_ref());
        let ranked = strategy::rank(self.generate(StrategyProfile::Recommend, condition, tolerance));

        tracing::info!(
            trend = %condition.trend,
            volatility = %condition.volatility,
            %tolerance,
            count = ranked.len(),
            "Recommendations complete"
        );

        Ok(ranked)
    }
}
