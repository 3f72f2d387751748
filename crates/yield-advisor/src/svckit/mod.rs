//! Service Kit - Advisor Tools
//!
//! Domain tools that implement `advisor_core::Tool` for the yield advisor.

mod advisory;
mod market_assessor;
mod portfolio_viewer;
mod risk_profiler;
mod voice_command;

pub use advisory::{PredictTool, RecommendTool};
pub use market_assessor::AssessMarketTool;
pub use portfolio_viewer::PortfolioTool;
pub use risk_profiler::AssessRiskTool;
pub use voice_command::VoiceCommandTool;

use std::sync::Arc;

use advisor_core::{ParameterSchema, ToolCall, ToolRegistry};
use serde_json::Value;

use crate::engine::YieldAdvisor;
use crate::error::Result;
use crate::request::AdvisoryRequest;
use crate::source::Collaborators;

/// Register every advisor tool
pub fn register_tools(registry: &mut ToolRegistry, advisor: Arc<YieldAdvisor>, collaborators: &Collaborators) {
    registry.register(PredictTool::new(Arc::clone(&advisor), collaborators.clone()));
    registry.register(RecommendTool::new(Arc::clone(&advisor), collaborators.clone()));
    registry.register(AssessRiskTool::new(Arc::clone(&advisor), collaborators.clone()));
    registry.register(AssessMarketTool::new(advisor));
    registry.register(PortfolioTool::new(collaborators.clone()));
    registry.register(VoiceCommandTool);
}

/// Build an [`AdvisoryRequest`] from tool arguments. Accepts both
/// snake_case and camelCase argument names.
pub(crate) fn request_from_call(call: &ToolCall) -> Result<AdvisoryRequest> {
    let object = call
        .arguments
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect::<serde_json::Map<_, _>>();
    AdvisoryRequest::from_json(&Value::Object(object))
}

pub(crate) fn portfolio_parameter() -> ParameterSchema {
    ParameterSchema::optional(
        "portfolio",
        "object",
        "Portfolio snapshot { usdcBalance, totalValue, activeStrategies }. Fetched from the wallet when omitted.",
    )
}

pub(crate) fn market_parameter() -> ParameterSchema {
    ParameterSchema::optional(
        "market_data",
        "object",
        "Raw signal { priceChange, volumeChange, volatilityIndex, priceSwing, clarityScore? } or classified { trend, volatility }",
    )
}

pub(crate) fn tolerance_parameter() -> ParameterSchema {
    ParameterSchema::optional(
        "risk_tolerance",
        "string",
        "Declared risk tolerance. Derived from the portfolio when omitted.",
    )
    .with_enum(&["low", "medium", "high"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_tools() {
        let mut registry = ToolRegistry::new();
        register_tools(&mut registry, Arc::new(YieldAdvisor::default()), &Collaborators::none());

        assert_eq!(
            registry.names(),
            vec!["assess_market", "assess_risk", "portfolio", "predict", "recommend", "voice_command"]
        );
    }

    #[test]
    fn test_request_from_call_aliases() {
        let call = ToolCall::new("recommend")
            .with_argument("riskTolerance", json!("high"))
            .with_argument("market_data", json!({ "trend": "bearish", "volatility": "low" }));
        let request = request_from_call(&call).unwrap();

        assert_eq!(request.risk_tolerance, Some(crate::model::RiskLevel::High));
        assert!(request.market_data.is_some());
        assert!(request.portfolio.is_none());
    }
}
