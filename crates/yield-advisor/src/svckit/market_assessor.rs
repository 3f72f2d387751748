//! Market Assessor Tool
//!
//! Classifies a market signal, or draws a simulated condition and movement
//! forecast for the demo dashboard.

use std::sync::Arc;

use advisor_core::{ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;

use super::{market_parameter, request_from_call};
use crate::engine::YieldAdvisor;
use crate::market::SimulatedMarket;

pub struct AssessMarketTool {
    advisor: Arc<YieldAdvisor>,
}

impl AssessMarketTool {
    pub const fn new(advisor: Arc<YieldAdvisor>) -> Self {
        Self { advisor }
    }
}

#[async_trait]
impl Tool for AssessMarketTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "assess_market".into(),
            description: "Classify market trend and volatility from a market signal. With simulate=true, draw a random demo condition instead.".into(),
            parameters: vec![
                market_parameter(),
                ParameterSchema::optional("simulate", "boolean", "Draw a random demo market instead of classifying")
                    .with_default(serde_json::json!(false)),
            ],
            category: Some("market".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let mut output = String::from("Market Assessment\n");
        output.push_str("═".repeat(50).as_str());
        output.push('\n');

        if call.bool_argument(&["simulate"]).unwrap_or(false) {
            let mut rng = rand::rng();
            let condition = SimulatedMarket::assess(&mut rng);
            let forecast = SimulatedMarket::predict_movement(&mut rng);

            output.push_str(&format!("  Trend:       {} (simulated)\n", condition.trend));
            output.push_str(&format!("  Volatility:  {}\n", condition.volatility));
            output.push_str(&format!("  Movement:    {:?} at {} confidence\n", forecast.direction, forecast.confidence));

            let data = serde_json::json!({
                "simulated": true,
                "condition": condition,
                "forecast": forecast,
            });
            return Ok(ToolResult::success("assess_market", output).with_data(data));
        }

        // the simulate flag is not part of the request
        let mut args = call.clone();
        args.arguments.remove("simulate");
        let request = request_from_call(&args)?;

        let condition = self.advisor.classify(request.market_data.as_ref());
        output.push_str(&format!("  Trend:       {}\n", condition.trend));
        output.push_str(&format!("  Volatility:  {}\n", condition.volatility));
        if request.market_data.is_none() {
            output.push_str("  No market data supplied; showing defaults.\n");
        }

        let data = serde_json::json!({
            "simulated": false,
            "condition": condition,
        });
        Ok(ToolResult::success("assess_market", output).with_data(data))
    }
}
