//! Strategy Generation
//!
//! Two rule presets produce candidate strategies. They come from two
//! independent call sites with different firing conditions and are kept
//! apart; callers pick one explicitly.

mod predict;
mod rank;
mod recommend;

pub use rank::rank;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::IdSuffix;
use crate::model::{MarketCondition, Recommendation, RiskLevel};

/// Which rule preset to run.
///
/// | | Predict | Recommend |
/// |---|---|---|
/// | Conservative | always | low tolerance or bearish |
/// | Balanced | always | medium tolerance or stable |
/// | Aggressive | high tolerance or bullish | (high and not bearish) or (bullish and not low) |
/// | Diversification | never | always |
/// | Hedging | never | high volatility |
///
/// Returns and allocations also differ per preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyProfile {
    Predict,
    Recommend,
}

/// Hands out per-call unique recommendation IDs
pub struct IdSequencer {
    mode: IdSuffix,
    next: u32,
}

impl IdSequencer {
    pub const fn new(mode: IdSuffix) -> Self {
        Self { mode, next: 1 }
    }

    /// `<slug>-<suffix>`
    pub fn next_id(&mut self, slug: &str) -> String {
        match self.mode {
            IdSuffix::Sequence => {
                let n = self.next;
                self.next += 1;
                format!("{slug}-{n}")
            }
            IdSuffix::Uuid => format!("{slug}-{}", Uuid::new_v4().simple()),
        }
    }
}

/// Generate candidates in construction order (not yet ranked)
pub fn generate(
    profile: StrategyProfile,
    condition: MarketCondition,
    tolerance: RiskLevel,
    ids: &mut IdSequencer,
) -> Vec<Recommendation> {
    let strategies = match profile {
        StrategyProfile::Predict => predict::generate(condition.trend, tolerance, ids),
        StrategyProfile::Recommend => recommend::generate(condition, tolerance, ids),
    };

    tracing::debug!(
        ?profile,
        trend = %condition.trend,
        volatility = %condition.volatility,
        %tolerance,
        count = strategies.len(),
        "Generated strategies"
    );

    strategies
}
