//! Market Classification
//!
//! Turns raw indicators into a discrete trend and volatility band. The
//! random [`simulated`] market lives next door and never feeds this path.

pub mod simulated;

pub use simulated::{MovementDirection, MovementForecast, SimulatedCondition, SimulatedMarket, VolumeLevel};

use crate::config::{Defaults, Thresholds};
use crate::model::{MarketCondition, MarketInput, MarketSignal, Trend, Volatility};

/// Classify a raw signal; an absent signal yields the configured defaults
/// (`stable` / `medium`).
pub fn classify(
    signal: Option<&MarketSignal>,
    thresholds: &Thresholds,
    defaults: &Defaults,
) -> MarketCondition {
    let Some(signal) = signal else {
        return MarketCondition::new(defaults.trend, defaults.volatility);
    };

    let condition = MarketCondition::new(trend(signal, thresholds), volatility(signal, thresholds));

    tracing::debug!(
        price_change = %signal.price_change,
        volume_change = %signal.volume_change,
        volatility_index = %signal.volatility_index,
        price_swing = %signal.price_swing,
        trend = %condition.trend,
        volatility = %condition.volatility,
        "Classified market signal"
    );

    condition
}

/// Classify whatever form of market data the caller sent
pub fn classify_input(
    input: Option<&MarketInput>,
    thresholds: &Thresholds,
    defaults: &Defaults,
) -> MarketCondition {
    match input {
        Some(MarketInput::Condition(condition)) => *condition,
        Some(MarketInput::Signal(signal)) => classify(Some(signal), thresholds, defaults),
        None => classify(None, thresholds, defaults),
    }
}

fn trend(signal: &MarketSignal, t: &Thresholds) -> Trend {
    let volume_confirms = signal.volume_change > t.trend_volume_change;

    // Bullish first; the two tests cannot both hold with sign-opposed cut-offs.
    if signal.price_change > t.bullish_price_change && volume_confirms {
        Trend::Bullish
    } else if signal.price_change < t.bearish_price_change && volume_confirms {
        Trend::Bearish
    } else {
        Trend::Stable
    }
}

fn volatility(signal: &MarketSignal, t: &Thresholds) -> Volatility {
    if signal.volatility_index > t.high_volatility_index || signal.price_swing > t.high_price_swing {
        Volatility::High
    } else if signal.volatility_index > t.medium_volatility_index
        || signal.price_swing > t.medium_price_swing
    {
        Volatility::Medium
    } else {
        Volatility::Low
    }
}
