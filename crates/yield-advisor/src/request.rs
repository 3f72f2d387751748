//! Advisory Request
//!
//! The input record both profiles accept, plus fail-fast validation that
//! names the first offending field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AdvisorError, Result};
use crate::model::{MarketInput, PortfolioSnapshot, RiskLevel};

/// `{ portfolio?, marketData?, riskTolerance? }`; each part may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<PortfolioSnapshot>,

    #[serde(default, alias = "market_data", skip_serializing_if = "Option::is_none")]
    pub market_data: Option<MarketInput>,

    #[serde(default, alias = "risk_tolerance", skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskLevel>,
}

impl AdvisoryRequest {
    #[must_use]
    pub fn with_portfolio(mut self, portfolio: PortfolioSnapshot) -> Self {
        self.portfolio = Some(portfolio);
        self
    }

    #[must_use]
    pub fn with_market(mut self, market: impl Into<MarketInput>) -> Self {
        self.market_data = Some(market.into());
        self
    }

    #[must_use]
    pub const fn with_risk_tolerance(mut self, tolerance: RiskLevel) -> Self {
        self.risk_tolerance = Some(tolerance);
        self
    }

    /// Parse a JSON object field by field so a type error names the field
    /// it came from. `null` and missing fields are both absent.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            if value.is_null() {
                return Ok(Self::default());
            }
            return Err(AdvisorError::invalid_input("request", "expected a JSON object"));
        };

        let lookup = |keys: &[&str]| {
            keys.iter()
                .filter_map(|k| object.get(*k))
                .find(|v| !v.is_null())
        };

        let request = Self {
            portfolio: parse_field(lookup(&["portfolio"]), "portfolio")?,
            market_data: parse_field(lookup(&["marketData", "market_data"]), "marketData")?,
            risk_tolerance: parse_field(lookup(&["riskTolerance", "risk_tolerance"]), "riskTolerance")?,
        };

        request.validate()?;
        Ok(request)
    }

    /// Range checks; stops at the first violation.
    pub fn validate(&self) -> Result<()> {
        if let Some(portfolio) = &self.portfolio {
            non_negative("portfolio.usdcBalance", portfolio.usdc_balance)?;
            non_negative("portfolio.totalValue", portfolio.total_value)?;

            for (i, position) in portfolio.active_strategies.iter().enumerate() {
                non_negative(&format!("portfolio.activeStrategies[{i}].invested"), position.invested)?;
            }

            if portfolio.total_value < portfolio.usdc_balance {
                tracing::warn!(
                    usdc_balance = %portfolio.usdc_balance,
                    total_value = %portfolio.total_value,
                    "Portfolio total value below USDC balance"
                );
            }
        }

        if let Some(signal) = self.market_data.as_ref().and_then(MarketInput::signal) {
            unit_interval("marketData.volatilityIndex", signal.volatility_index)?;
            non_negative("marketData.priceSwing", signal.price_swing)?;
            if let Some(clarity) = signal.clarity_score {
                unit_interval("marketData.clarityScore", clarity)?;
            }
        }

        Ok(())
    }
}

fn parse_field<T: serde::de::DeserializeOwned>(value: Option<&Value>, field: &str) -> Result<Option<T>> {
    value
        .map(|v| serde_json::from_value(v.clone()))
        .transpose()
        .map_err(|e| AdvisorError::invalid_input(field, e.to_string()))
}

fn non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(AdvisorError::invalid_input(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn unit_interval(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(AdvisorError::invalid_input(field, format!("must be within [0, 1], got {value}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MarketCondition, Trend, Volatility};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_empty_and_null_requests() {
        assert_eq!(AdvisoryRequest::from_json(&json!({})).unwrap(), AdvisoryRequest::default());
        assert_eq!(AdvisoryRequest::from_json(&Value::Null).unwrap(), AdvisoryRequest::default());

        let nulls = json!({ "portfolio": null, "marketData": null, "riskTolerance": null });
        assert_eq!(AdvisoryRequest::from_json(&nulls).unwrap(), AdvisoryRequest::default());
    }

    #[test]
    fn test_full_request() {
        let request = AdvisoryRequest::from_json(&json!({
            "portfolio": {
                "usdcBalance": 1250.75,
                "totalValue": 1542.30,
                "activeStrategies": [
                    { "id": "s1", "name": "Farm", "apy": 8.5, "invested": 50, "riskLevel": "low" }
                ]
            },
            "market_data": { "trend": "bullish", "volatility": "low" },
            "riskTolerance": "high"
        }))
        .unwrap();

        assert_eq!(request.portfolio.as_ref().unwrap().usdc_balance, dec!(1250.75));
        assert_eq!(
            request.market_data,
            Some(MarketInput::Condition(MarketCondition::new(Trend::Bullish, Volatility::Low)))
        );
        assert_eq!(request.risk_tolerance, Some(RiskLevel::High));
    }

    #[test]
    fn test_wrong_type_names_field() {
        let err = AdvisoryRequest::from_json(&json!({ "riskTolerance": "reckless" })).unwrap_err();
        assert_eq!(err.field(), "riskTolerance");

        let err = AdvisoryRequest::from_json(&json!({ "portfolio": "lots" })).unwrap_err();
        assert_eq!(err.field(), "portfolio");

        let err = AdvisoryRequest::from_json(&json!({ "marketData": { "priceChange": "up" } })).unwrap_err();
        assert_eq!(err.field(), "marketData");

        let err = AdvisoryRequest::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(err.field(), "request");
    }

    #[test]
    fn test_out_of_range_names_field() {
        let err = AdvisoryRequest::from_json(&json!({
            "marketData": { "priceChange": 0.01, "volumeChange": 0.2, "volatilityIndex": 1.2, "priceSwing": 0.01 }
        }))
        .unwrap_err();
        assert_eq!(err.field(), "marketData.volatilityIndex");

        let err = AdvisoryRequest::from_json(&json!({
            "marketData": {
                "priceChange": 0.01, "volumeChange": 0.2, "volatilityIndex": 0.2,
                "priceSwing": 0.01, "clarityScore": -0.1
            }
        }))
        .unwrap_err();
        assert_eq!(err.field(), "marketData.clarityScore");

        let err = AdvisoryRequest::from_json(&json!({
            "portfolio": {
                "usdcBalance": 10, "totalValue": 20,
                "activeStrategies": [
                    { "id": "a", "name": "A", "apy": 5, "invested": 5, "riskLevel": "low" },
                    { "id": "b", "name": "B", "apy": 5, "invested": -5, "riskLevel": "low" }
                ]
            }
        }))
        .unwrap_err();
        assert_eq!(err.field(), "portfolio.activeStrategies[1].invested");
    }

    #[test]
    fn test_total_below_balance_is_advisory() {
        let request = AdvisoryRequest::default()
            .with_portfolio(PortfolioSnapshot::new(dec!(500), dec!(100)));
        assert!(request.validate().is_ok());
    }
}
