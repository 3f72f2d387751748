//! Portfolio Viewer Tool
//!
//! Reads the wallet snapshot from the configured portfolio source.

use advisor_core::{CoreError, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;

use crate::source::Collaborators;

pub struct PortfolioTool {
    collaborators: Collaborators,
}

impl PortfolioTool {
    pub const fn new(collaborators: Collaborators) -> Self {
        Self { collaborators }
    }
}

#[async_trait]
impl Tool for PortfolioTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "portfolio".into(),
            description: "Show the wallet's USDC balance, total value and active yield strategies.".into(),
            parameters: vec![],
            category: Some("portfolio".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, _call: &ToolCall) -> CoreResult<ToolResult> {
        let source = self
            .collaborators
            .portfolio
            .as_ref()
            .ok_or_else(|| CoreError::ToolExecution("No portfolio source configured".into()))?;

        let snapshot = match source.fetch_portfolio().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "Portfolio fetch failed");
                return Ok(ToolResult::failure("portfolio", e.to_string()));
            }
        };

        let mut output = String::from("Portfolio\n");
        output.push_str("═".repeat(50).as_str());
        output.push('\n');
        output.push_str(&format!("  USDC Balance:  ${}\n", snapshot.usdc_balance));
        output.push_str(&format!("  Total Value:   ${}\n", snapshot.total_value));
        output.push_str(&format!("  Invested:      ${}\n", snapshot.total_invested()));
        output.push('\n');

        if snapshot.active_strategies.is_empty() {
            output.push_str("No active strategies.\n");
        }
        for p in &snapshot.active_strategies {
            output.push_str(&format!("  {:<28} {:>6}% APY  ${:<10} [{}]\n", p.name, p.apy, p.invested, p.risk_level));
        }

        Ok(ToolResult::success("portfolio", output).with_data(serde_json::to_value(&snapshot)?))
    }
}
