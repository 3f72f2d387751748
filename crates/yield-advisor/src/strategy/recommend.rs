//! Recommend preset: gated entries plus diversification, and hedging when
//! volatility runs high. Entries carry protocol and cost metadata.

use rust_decimal_macros::dec;

use super::IdSequencer;
use crate::model::{MarketCondition, Recommendation, RiskLevel, StrategyType, Trend, Volatility};

pub(super) fn generate(
    condition: MarketCondition,
    tolerance: RiskLevel,
    ids: &mut IdSequencer,
) -> Vec<Recommendation> {
    let MarketCondition { trend, volatility } = condition;
    let low = tolerance == RiskLevel::Low;
    let medium = tolerance == RiskLevel::Medium;
    let high = tolerance == RiskLevel::High;
    let bullish = trend == Trend::Bullish;
    let bearish = trend == Trend::Bearish;
    let stable = trend == Trend::Stable;

    let mut strategies = Vec::with_capacity(5);

    if low || bearish {
        strategies.push(
            Recommendation::new(
                ids.next_id("conservative"),
                "Conservative Stablecoin Yield",
                StrategyType::Conservative,
                RiskLevel::Low,
                dec!(0.055),
                dec!(0.92),
                70,
            )
            .with_description(
                "Focus on preserving capital with stablecoin yield farming in low-risk protocols",
            )
            .with_time_horizon("long")
            .with_tags(&["stablecoin", "low-risk", "capital-preserving"])
            .with_protocols(&["Aave USDC", "Compound USDC", "Yearn USDC Vault"])
            .with_costs("low", "high"),
        );
    }

    if medium || stable {
        let expected_return = if bullish {
            dec!(0.125)
        } else if medium {
            dec!(0.095)
        } else {
            dec!(0.075)
        };
        let protocols: &[&str] = if bullish {
            &["Aave WETH/USDC", "Uniswap LP", "Convex Curve Deposits"]
        } else {
            &["Aave USDC/DAI", "Balancer Stable Pools", "Curve TriCrypto"]
        };
        strategies.push(
            Recommendation::new(
                ids.next_id("balanced"),
                "Balanced Yield Optimization",
                StrategyType::Balanced,
                RiskLevel::Medium,
                expected_return,
                dec!(0.84),
                if medium { 60 } else { 40 },
            )
            .with_description(
                "Diversified approach balancing risk and return in current market conditions",
            )
            .with_time_horizon("medium")
            .with_tags(&["diversified", "balanced", "moderate-risk"])
            .with_protocols(protocols)
            .with_costs("medium", "medium"),
        );
    }

    if (high && !bearish) || (bullish && !low) {
        let expected_return = if bullish {
            dec!(0.185)
        } else if high {
            dec!(0.155)
        } else {
            dec!(0.115)
        };
        let protocols: &[&str] = if bullish {
            &["Frax Ether LP", "Curve Metapool Farming", "Solidly ve(3,3)"]
        } else {
            &["PancakeSwap Farms", "Quickswap Liquidity Mining", "Beefy Finance Vaults"]
        };
        strategies.push(
            Recommendation::new(
                ids.next_id("aggressive"),
                "Aggressive Yield Farming",
                StrategyType::Aggressive,
                RiskLevel::High,
                expected_return,
                if bullish { dec!(0.75) } else { dec!(0.65) },
                if high { 50 } else { 30 },
            )
            .with_description(
                "Maximize returns with high-yield farming in optimistic market conditions",
            )
            .with_time_horizon("short-to-medium")
            .with_tags(&["high-yield", "aggressive", "growth-focused"])
            .with_protocols(protocols)
            .with_costs("high", "low-to-medium"),
        );
    }

    strategies.push(
        Recommendation::new(
            ids.next_id("diversification"),
            "Portfolio Diversification",
            StrategyType::Diversified,
            if low { RiskLevel::Low } else { RiskLevel::Medium },
            dec!(0.085),
            dec!(0.88),
            25,
        )
        .with_description(
            "Spread investments across multiple protocols and strategies to reduce risk",
        )
        .with_time_horizon("medium")
        .with_tags(&["diversification", "risk-mitigation", "multi-protocol"])
        .with_protocols(&["Across Protocol", "Stargate", "Synapse"])
        .with_costs("medium", "medium"),
    );

    if volatility == Volatility::High {
        strategies.push(
            Recommendation::new(
                ids.next_id("hedging"),
                "Volatility Hedging",
                StrategyType::Protective,
                RiskLevel::Low,
                dec!(0.035),
                dec!(0.78),
                15,
            )
            .with_description("Implement hedging strategies to protect against market volatility")
            .with_time_horizon("short")
            .with_tags(&["hedging", "volatility-protection", "defensive"])
            .with_protocols(&["Ribbon Finance", "Opyn", "Derivadex"])
            .with_costs("medium", "medium"),
        );
    }

    strategies
}
