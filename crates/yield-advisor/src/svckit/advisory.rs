//! Predict / Recommend Tools
//!
//! The two engine profiles behind the tool interface. Missing portfolio and
//! tolerance are filled from the collaborators before the engine runs.

use std::sync::Arc;

use advisor_core::{Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;

use super::{market_parameter, portfolio_parameter, request_from_call, tolerance_parameter};
use crate::engine::YieldAdvisor;
use crate::model::Recommendation;
use crate::source::Collaborators;

/// Full market prediction with optimal strategies
pub struct PredictTool {
    advisor: Arc<YieldAdvisor>,
    collaborators: Collaborators,
}

impl PredictTool {
    pub const fn new(advisor: Arc<YieldAdvisor>, collaborators: Collaborators) -> Self {
        Self {
            advisor,
            collaborators,
        }
    }
}

#[async_trait]
impl Tool for PredictTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "predict".into(),
            description: "Predict market trend, volatility, expected return and the portfolio-level action, with ranked strategies.".into(),
            parameters: vec![portfolio_parameter(), market_parameter(), tolerance_parameter()],
            category: Some("analysis".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let mut request = request_from_call(call)?;
        self.collaborators.complete(&mut request).await;

        let prediction = self.advisor.predict(&request)?;

        let mut output = String::from("Yield Prediction\n");
        output.push_str("═".repeat(50).as_str());
        output.push('\n');
        output.push_str(&format!("  Market:          {} / {} volatility\n", prediction.market_trend, prediction.volatility));
        output.push_str(&format!("  Action:          {}\n", prediction.recommended_action));
        output.push_str(&format!("  Confidence:      {:.2}\n", prediction.confidence));
        output.push_str(&format!("  Expected Return: {:.2}\n", prediction.expected_return));
        let factors: Vec<String> = prediction
            .risk_assessment
            .risk_factors
            .iter()
            .map(ToString::to_string)
            .collect();
        output.push_str(&format!("  Overall Risk:    {} ({})\n", prediction.risk_assessment.overall_risk, factors.join(", ")));
        output.push_str(&format!("  Horizon:         {} (model {})\n", prediction.prediction_horizon, prediction.model_version));
        output.push('\n');
        write_strategies(&mut output, &prediction.optimal_strategies);

        Ok(ToolResult::success("predict", output).with_data(serde_json::to_value(&prediction)?))
    }
}

/// Ranked recommendation list
pub struct RecommendTool {
    advisor: Arc<YieldAdvisor>,
    collaborators: Collaborators,
}

impl RecommendTool {
    pub const fn new(advisor: Arc<YieldAdvisor>, collaborators: Collaborators) -> Self {
        Self {
            advisor,
            collaborators,
        }
    }
}

#[async_trait]
impl Tool for RecommendTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "recommend".into(),
            description: "Recommend yield strategies for the current market and risk tolerance, ranked by confidence.".into(),
            parameters: vec![portfolio_parameter(), market_parameter(), tolerance_parameter()],
            category: Some("strategy".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let mut request = request_from_call(call)?;
        self.collaborators.complete(&mut request).await;

        let recommendations = self.advisor.recommend(&request)?;

        let mut output = String::from("Yield Recommendations\n");
        output.push_str("═".repeat(50).as_str());
        output.push_str("\n\n");
        write_strategies(&mut output, &recommendations);

        Ok(ToolResult::success("recommend", output).with_data(serde_json::to_value(&recommendations)?))
    }
}

fn write_strategies(output: &mut String, strategies: &[Recommendation]) {
    if strategies.is_empty() {
        output.push_str("No strategies match the current conditions.\n");
        return;
    }

    for (i, s) in strategies.iter().enumerate() {
        output.push_str(&format!("{}. {} [{}]\n", i + 1, s.name, s.risk_level));
        output.push_str(&format!("   APY {}%  Confidence {:.2}  Allocation {}%\n", s.apy, s.confidence, s.allocation_suggestion));
        if !s.protocol_suggestions.is_empty() {
            output.push_str(&format!("   Protocols: {}\n", s.protocol_suggestions.join(", ")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::model::RiskLevel;
    use crate::source::{MockPortfolioSource, MockPreferenceStore};
    use serde_json::json;

    fn advisor() -> Arc<YieldAdvisor> {
        Arc::new(YieldAdvisor::new(EngineConfig::default().with_sequential_ids()))
    }

    #[tokio::test]
    async fn test_recommend_tool() {
        let tool = RecommendTool::new(advisor(), Collaborators::none());
        let call = ToolCall::new("recommend")
            .with_argument("market_data", json!({ "trend": "bullish", "volatility": "medium" }))
            .with_argument("risk_tolerance", json!("high"));

        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        assert!(result.output.contains("Aggressive"));

        let data = result.data.unwrap();
        let list = data.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["strategyType"], "diversified");
        assert_eq!(list[1]["id"], "aggressive-1");
    }

    #[tokio::test]
    async fn test_recommend_tool_with_raw_signal() {
        let tool = RecommendTool::new(advisor(), Collaborators::none());
        let call = ToolCall::new("recommend")
            .with_argument(
                "marketData",
                json!({ "priceChange": 0.05, "volumeChange": 0.3, "volatilityIndex": 0.8, "priceSwing": 0.01 }),
            )
            .with_argument("riskTolerance", json!("high"));

        let data = tool.execute(&call).await.unwrap().data.unwrap();
        let types: Vec<_> = data
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["strategyType"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(types, vec!["diversified", "protective", "aggressive"]);
        assert_eq!(data[2]["expectedReturn"], "0.185");
    }

    #[tokio::test]
    async fn test_predict_tool_uses_collaborators() {
        let collaborators = Collaborators {
            portfolio: Some(Arc::new(MockPortfolioSource::new())),
            preferences: Some(Arc::new(MockPreferenceStore::with_tolerance(Some(RiskLevel::High)))),
        };
        let tool = PredictTool::new(advisor(), collaborators);
        let call = ToolCall::new("predict")
            .with_argument("market_data", json!({ "trend": "bullish", "volatility": "low" }));

        let result = tool.execute(&call).await.unwrap();
        assert!(result.output.contains("  Action:          buy_aggressive\n"));
        assert!(result.output.lines().any(|l| l.starts_with("1. ")));
        let data = result.data.unwrap();
        assert_eq!(data["recommendedAction"], "buy_aggressive");
        assert_eq!(data["modelVersion"], "v1.2.0");
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_validation_errors() {
        let tool = PredictTool::new(advisor(), Collaborators::none());
        let call = ToolCall::new("predict").with_argument("portfolio", json!("everything"));

        let err = tool.execute(&call).await.unwrap_err();
        assert!(err.is_caller_error());
        assert!(err.to_string().contains("portfolio"));
    }
}
