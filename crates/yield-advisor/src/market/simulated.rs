//! Simulated Market
//!
//! Demo-only market assessment: uniform random draws over the enumerated
//! states. Non-deterministic on purpose and kept out of the classifier.

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Trend, Volatility};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLevel {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementDirection {
    Up,
    Down,
    Neutral,
}

/// A randomly drawn market state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedCondition {
    pub trend: Trend,
    pub volatility: Volatility,
    pub volume: VolumeLevel,
}

/// A randomly drawn price-direction guess
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementForecast {
    pub direction: MovementDirection,
    /// Two decimal places, in `[0.30, 0.70]`
    pub confidence: Decimal,
}

pub const TRENDS: [Trend; 3] = [Trend::Bullish, Trend::Stable, Trend::Bearish];
pub const VOLATILITIES: [Volatility; 3] = [Volatility::Low, Volatility::Medium, Volatility::High];
pub const VOLUMES: [VolumeLevel; 3] = [VolumeLevel::High, VolumeLevel::Medium, VolumeLevel::Low];
pub const DIRECTIONS: [MovementDirection; 3] =
    [MovementDirection::Up, MovementDirection::Down, MovementDirection::Neutral];

/// Random market generator for the demo dashboard
pub struct SimulatedMarket;

impl SimulatedMarket {
    pub fn assess<R: Rng + ?Sized>(rng: &mut R) -> SimulatedCondition {
        SimulatedCondition {
            trend: pick(rng, &TRENDS),
            volatility: pick(rng, &VOLATILITIES),
            volume: pick(rng, &VOLUMES),
        }
    }

    pub fn predict_movement<R: Rng + ?Sized>(rng: &mut R) -> MovementForecast {
        let hundredths: i64 = rng.random_range(30..=70);
        MovementForecast {
            direction: pick(rng, &DIRECTIONS),
            confidence: Decimal::new(hundredths, 2),
        }
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T; 3]) -> T {
    options[rng.random_range(0..options.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal_macros::dec;

    #[test]
    fn test_assess_draws_from_enumerations() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let c = SimulatedMarket::assess(&mut rng);
            assert!(TRENDS.contains(&c.trend));
            assert!(VOLATILITIES.contains(&c.volatility));
            assert!(VOLUMES.contains(&c.volume));
        }
    }

    #[test]
    fn test_movement_confidence_range() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let f = SimulatedMarket::predict_movement(&mut rng);
            assert!(DIRECTIONS.contains(&f.direction));
            assert!(f.confidence >= dec!(0.30) && f.confidence <= dec!(0.70));
            assert!(f.confidence.scale() <= 2);
        }
    }
}
