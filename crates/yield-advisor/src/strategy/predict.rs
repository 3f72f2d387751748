//! Predict preset: conservative and balanced always, aggressive when the
//! user tolerates risk or the market is rising.

use rust_decimal_macros::dec;

use super::IdSequencer;
use crate::model::{Recommendation, RiskLevel, StrategyType, Trend};

pub(super) fn generate(trend: Trend, tolerance: RiskLevel, ids: &mut IdSequencer) -> Vec<Recommendation> {
    let low = tolerance == RiskLevel::Low;
    let medium = tolerance == RiskLevel::Medium;
    let high = tolerance == RiskLevel::High;
    let bullish = trend == Trend::Bullish;

    let mut strategies = Vec::with_capacity(3);

    strategies.push(
        Recommendation::new(
            ids.next_id("conservative-yield"),
            "Conservative Stablecoin Yield",
            StrategyType::Stablecoin,
            RiskLevel::Low,
            if low { dec!(0.06) } else { dec!(0.045) },
            if low { dec!(0.92) } else { dec!(0.85) },
            if low { 60 } else { 30 },
        )
        .with_description("Focus on stablecoin yield farming with minimal risk"),
    );

    let balanced_return = if bullish {
        dec!(0.12)
    } else if medium {
        dec!(0.09)
    } else {
        dec!(0.07)
    };
    strategies.push(
        Recommendation::new(
            ids.next_id("balanced-yield"),
            "Balanced Yield Optimization",
            StrategyType::Balanced,
            RiskLevel::Medium,
            balanced_return,
            dec!(0.82),
            if medium { 60 } else { 40 },
        )
        .with_description("Moderate risk with diversified yield farming"),
    );

    if high || bullish {
        let aggressive_return = if bullish {
            dec!(0.18)
        } else if high {
            dec!(0.14)
        } else {
            dec!(0.10)
        };
        strategies.push(
            Recommendation::new(
                ids.next_id("aggressive-yield"),
                "Aggressive Yield Farming",
                StrategyType::Aggressive,
                RiskLevel::High,
                aggressive_return,
                if bullish { dec!(0.75) } else { dec!(0.65) },
                if high { 70 } else { 35 },
            )
            .with_description("High yield farming in optimistic market conditions"),
        );
    }

    strategies
}
