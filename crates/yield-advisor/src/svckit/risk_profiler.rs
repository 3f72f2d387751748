//! Risk Profiler Tool
//!
//! Derives a risk tolerance from the share of high-risk positions.

use std::sync::Arc;

use advisor_core::{Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use rust_decimal_macros::dec;

use super::{portfolio_parameter, request_from_call};
use crate::engine::YieldAdvisor;
use crate::source::Collaborators;

pub struct AssessRiskTool {
    advisor: Arc<YieldAdvisor>,
    collaborators: Collaborators,
}

impl AssessRiskTool {
    pub const fn new(advisor: Arc<YieldAdvisor>, collaborators: Collaborators) -> Self {
        Self {
            advisor,
            collaborators,
        }
    }
}

#[async_trait]
impl Tool for AssessRiskTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "assess_risk".into(),
            description: "Derive a risk tolerance from the portfolio's active strategies: high when most positions are high risk.".into(),
            parameters: vec![portfolio_parameter()],
            category: Some("analysis".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let mut request = request_from_call(call)?;
        if request.portfolio.is_none() {
            request.portfolio = self.collaborators.portfolio().await;
        }

        let portfolio = request.portfolio.as_ref();
        let tolerance = self.advisor.assess_risk(portfolio);

        let mut output = String::from("Risk Profile\n");
        output.push_str("═".repeat(50).as_str());
        output.push('\n');

        match portfolio {
            Some(p) if p.position_count() > 0 => {
                output.push_str(&format!("  Positions:        {}\n", p.position_count()));
                output.push_str(&format!("  Invested:         ${}\n", p.total_invested()));
                if let Some(fraction) = p.high_risk_fraction() {
                    output.push_str(&format!("  High-risk share:  {}%\n", (fraction * dec!(100)).round_dp(1)));
                }
            }
            _ => output.push_str("  No active strategies; using the default profile.\n"),
        }
        output.push_str(&format!("  Risk Tolerance:   {tolerance}\n"));

        let data = serde_json::json!({
            "riskTolerance": tolerance,
            "positions": portfolio.map_or(0, |p| p.position_count()),
        });

        Ok(ToolResult::success("assess_risk", output).with_data(data))
    }
}
