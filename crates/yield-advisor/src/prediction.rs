//! Prediction Aggregator
//!
//! Combines classification, risk profile and the predict preset into one
//! [`PredictionResult`].

use chrono::Utc;
use rust_decimal::Decimal;

use crate::config::{Defaults, EngineConfig, Thresholds};
use crate::market;
use crate::model::{
    MarketInput, PortfolioSnapshot, PredictionResult, RecommendedAction, RiskAssessment,
    RiskFactor, RiskLevel, Trend, Volatility,
};
use crate::strategy::{self, IdSequencer, StrategyProfile};

/// Build a prediction. `tolerance` is already resolved (declared or derived).
pub fn aggregate(
    portfolio: Option<&PortfolioSnapshot>,
    market_data: Option<&MarketInput>,
    tolerance: RiskLevel,
    config: &EngineConfig,
) -> PredictionResult {
    let condition = market::classify_input(market_data, &config.thresholds, &config.defaults);
    let positions = portfolio.map_or(0, PortfolioSnapshot::position_count);

    let mut ids = IdSequencer::new(config.id_suffix);
    let strategies = strategy::generate(StrategyProfile::Predict, condition, tolerance, &mut ids);

    PredictionResult {
        market_trend: condition.trend,
        volatility: condition.volatility,
        recommended_action: recommended_action(condition.trend, tolerance),
        confidence: confidence(market_data, positions, &config.thresholds, &config.defaults),
        expected_return: expected_return(
            condition.trend,
            condition.volatility,
            tolerance,
            &config.defaults,
        ),
        risk_assessment: RiskAssessment {
            overall_risk: overall_risk(condition.trend, tolerance, positions, &config.thresholds),
            risk_factors: risk_factors(condition.trend, condition.volatility),
        },
        optimal_strategies: strategy::rank(strategies),
        timestamp: Utc::now(),
        model_version: config.model_version.clone(),
        prediction_horizon: config.prediction_horizon.clone(),
    }
}

pub const fn recommended_action(trend: Trend, tolerance: RiskLevel) -> RecommendedAction {
    match (trend, tolerance) {
        (Trend::Bullish, RiskLevel::High) => RecommendedAction::BuyAggressive,
        (Trend::Bullish, RiskLevel::Medium) => RecommendedAction::BuyBalanced,
        (Trend::Bearish, RiskLevel::High) => RecommendedAction::Rebalance,
        (Trend::Bearish, RiskLevel::Medium) => RecommendedAction::ReduceExposure,
        (Trend::Bearish, RiskLevel::Low) => RecommendedAction::MoveToStable,
        (Trend::Bullish, RiskLevel::Low) | (Trend::Stable, _) => RecommendedAction::Hold,
    }
}

/// `0.4 × completeness + 0.4 × clarity + 0.2 × diversity`; every input is
/// already in `[0, 1]` so the sum is too.
pub fn confidence(
    market_data: Option<&MarketInput>,
    positions: usize,
    thresholds: &Thresholds,
    defaults: &Defaults,
) -> Decimal {
    let completeness = if market_data.is_some() {
        defaults.data_completeness_present
    } else {
        defaults.data_completeness_absent
    };
    let clarity = market_data
        .and_then(MarketInput::clarity_score)
        .unwrap_or(defaults.market_clarity);
    let diversity = if positions > thresholds.diversified_positions {
        defaults.diversity_broad
    } else {
        defaults.diversity_narrow
    };

    completeness * defaults.completeness_weight
        + clarity * defaults.clarity_weight
        + diversity * defaults.diversity_weight
}

pub fn expected_return(
    trend: Trend,
    volatility: Volatility,
    tolerance: RiskLevel,
    defaults: &Defaults,
) -> Decimal {
    let mut value = defaults.base_return;

    match trend {
        Trend::Bullish => value += defaults.bullish_return_adjustment,
        Trend::Bearish => value += defaults.bearish_return_adjustment,
        Trend::Stable => {}
    }

    if volatility == Volatility::High {
        value += match tolerance {
            RiskLevel::High => defaults.volatile_high_tolerance_adjustment,
            RiskLevel::Medium => defaults.volatile_medium_tolerance_adjustment,
            RiskLevel::Low => defaults.volatile_low_tolerance_adjustment,
        };
    }

    value
}

/// First matching rule wins
pub const fn overall_risk(
    trend: Trend,
    tolerance: RiskLevel,
    positions: usize,
    thresholds: &Thresholds,
) -> RiskLevel {
    let cautious_in_downturn =
        matches!(tolerance, RiskLevel::Low) && matches!(trend, Trend::Bearish);
    let bold_in_rally = matches!(tolerance, RiskLevel::High) && matches!(trend, Trend::Bullish);

    if cautious_in_downturn {
        RiskLevel::High
    } else if bold_in_rally || positions > thresholds.crowded_positions {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn risk_factors(trend: Trend, volatility: Volatility) -> Vec<RiskFactor> {
    let mut factors = Vec::with_capacity(3);

    if trend == Trend::Bearish {
        factors.push(RiskFactor::MarketDownturn);
    }
    if volatility == Volatility::High {
        factors.push(RiskFactor::HighVolatility);
    }
    factors.push(RiskFactor::LiquidityRisk);

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MarketCondition, MarketSignal, PositionRecord};
    use rust_decimal_macros::dec;

    fn portfolio_with(n: usize) -> PortfolioSnapshot {
        (0..n).fold(PortfolioSnapshot::new(dec!(500), dec!(1500)), |p, i| {
            p.with_position(PositionRecord::new(
                format!("p{i}"),
                "Pool",
                dec!(8),
                dec!(100),
                RiskLevel::Medium,
            ))
        })
    }

    fn condition(trend: Trend, volatility: Volatility) -> MarketInput {
        MarketInput::Condition(MarketCondition::new(trend, volatility))
    }

    #[test]
    fn test_action_table() {
        use RecommendedAction::*;
        let cases = [
            (Trend::Bullish, RiskLevel::High, BuyAggressive),
            (Trend::Bullish, RiskLevel::Medium, BuyBalanced),
            (Trend::Bullish, RiskLevel::Low, Hold),
            (Trend::Bearish, RiskLevel::High, Rebalance),
            (Trend::Bearish, RiskLevel::Medium, ReduceExposure),
            (Trend::Bearish, RiskLevel::Low, MoveToStable),
            (Trend::Stable, RiskLevel::High, Hold),
            (Trend::Stable, RiskLevel::Medium, Hold),
            (Trend::Stable, RiskLevel::Low, Hold),
        ];
        for (trend, tolerance, expected) in cases {
            assert_eq!(recommended_action(trend, tolerance), expected);
        }
    }

    #[test]
    fn test_confidence_formula() {
        let t = Thresholds::default();
        let d = Defaults::default();

        // nothing known: 0.4*0.5 + 0.4*0.6 + 0.2*0.6
        assert_eq!(confidence(None, 0, &t, &d), dec!(0.56));

        let clear = MarketInput::Signal(
            MarketSignal::new(dec!(0), dec!(0), dec!(0.2), dec!(0)).with_clarity(dec!(0.9)),
        );
        // 0.4*0.8 + 0.4*0.9 + 0.2*0.8
        assert_eq!(confidence(Some(&clear), 3, &t, &d), dec!(0.84));

        let classified = condition(Trend::Stable, Volatility::Low);
        // 0.4*0.8 + 0.4*0.6 + 0.2*0.6
        assert_eq!(confidence(Some(&classified), 2, &t, &d), dec!(0.68));
    }

    #[test]
    fn test_confidence_extremes_in_unit_range() {
        let t = Thresholds::default();
        let d = Defaults::default();
        for clarity in [dec!(0), dec!(1)] {
            let input = MarketInput::Signal(
                MarketSignal::new(dec!(0), dec!(0), dec!(0), dec!(0)).with_clarity(clarity),
            );
            for positions in [0, 10] {
                let c = confidence(Some(&input), positions, &t, &d);
                assert!(c >= Decimal::ZERO && c <= Decimal::ONE);
            }
        }
    }

    #[test]
    fn test_expected_return_adjustments() {
        let d = Defaults::default();
        assert_eq!(expected_return(Trend::Stable, Volatility::Low, RiskLevel::Low, &d), dec!(0.08));
        assert_eq!(expected_return(Trend::Bullish, Volatility::Medium, RiskLevel::High, &d), dec!(0.11));
        assert_eq!(expected_return(Trend::Bearish, Volatility::Low, RiskLevel::High, &d), dec!(0.06));
        assert_eq!(expected_return(Trend::Bullish, Volatility::High, RiskLevel::High, &d), dec!(0.15));
        assert_eq!(expected_return(Trend::Stable, Volatility::High, RiskLevel::Medium, &d), dec!(0.09));
        assert_eq!(expected_return(Trend::Bearish, Volatility::High, RiskLevel::Low, &d), dec!(0.04));
    }

    #[test]
    fn test_overall_risk_rule_order() {
        let t = Thresholds::default();
        assert_eq!(overall_risk(Trend::Bearish, RiskLevel::Low, 10, &t), RiskLevel::High);
        assert_eq!(overall_risk(Trend::Bullish, RiskLevel::High, 0, &t), RiskLevel::Medium);
        assert_eq!(overall_risk(Trend::Stable, RiskLevel::Medium, 6, &t), RiskLevel::Medium);
        assert_eq!(overall_risk(Trend::Stable, RiskLevel::Medium, 5, &t), RiskLevel::Low);
        assert_eq!(overall_risk(Trend::Bullish, RiskLevel::Low, 0, &t), RiskLevel::Low);
    }

    #[test]
    fn test_risk_factors() {
        assert_eq!(risk_factors(Trend::Stable, Volatility::Low), vec![RiskFactor::LiquidityRisk]);
        assert_eq!(
            risk_factors(Trend::Bearish, Volatility::High),
            vec![RiskFactor::MarketDownturn, RiskFactor::HighVolatility, RiskFactor::LiquidityRisk]
        );
    }

    #[test]
    fn test_stable_volatile_medium_without_portfolio() {
        let input = condition(Trend::Stable, Volatility::High);
        let result = aggregate(None, Some(&input), RiskLevel::Medium, &EngineConfig::default());

        assert_eq!(result.risk_assessment.overall_risk, RiskLevel::Low);
        assert_eq!(
            result.risk_assessment.risk_factors,
            vec![RiskFactor::HighVolatility, RiskFactor::LiquidityRisk]
        );
        assert_eq!(result.recommended_action, RecommendedAction::Hold);
        assert_eq!(result.model_version, "v1.2.0");
        assert_eq!(result.prediction_horizon, "7d");
    }

    #[test]
    fn test_crowded_portfolio_raises_risk() {
        let portfolio = portfolio_with(6);
        let input = condition(Trend::Stable, Volatility::Medium);
        let result = aggregate(Some(&portfolio), Some(&input), RiskLevel::Medium, &EngineConfig::default());
        assert_eq!(result.risk_assessment.overall_risk, RiskLevel::Medium);
    }

    #[test]
    fn test_strategies_are_ranked() {
        let input = condition(Trend::Bullish, Volatility::Low);
        let result = aggregate(None, Some(&input), RiskLevel::High, &EngineConfig::default());
        let confidences: Vec<_> = result.optimal_strategies.iter().map(|s| s.confidence).collect();
        assert_eq!(confidences, vec![dec!(0.85), dec!(0.82), dec!(0.75)]);
    }
}
