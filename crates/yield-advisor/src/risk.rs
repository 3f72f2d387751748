//! Risk Profiler
//!
//! Infers a tolerance from what the user already holds.

use crate::config::{Defaults, Thresholds};
use crate::model::{PortfolioSnapshot, RiskLevel};

/// Derive a risk tolerance from portfolio composition.
///
/// A majority of high-risk positions reads as `high`. Everything else,
/// including an absent or empty portfolio, falls back to the configured
/// default (`medium`), so the result never drops as the high-risk share
/// rises. With the default configuration composition never yields `low`.
pub fn assess_risk(
    portfolio: Option<&PortfolioSnapshot>,
    thresholds: &Thresholds,
    defaults: &Defaults,
) -> RiskLevel {
    let Some(fraction) = portfolio.and_then(PortfolioSnapshot::high_risk_fraction) else {
        return defaults.risk_tolerance;
    };

    let tolerance = if fraction > thresholds.high_risk_majority {
        RiskLevel::High
    } else {
        defaults.risk_tolerance
    };

    tracing::debug!(high_risk_fraction = %fraction, %tolerance, "Derived risk tolerance");
    tolerance
}
