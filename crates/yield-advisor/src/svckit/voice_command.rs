//! Voice Command Tool

use advisor_core::{ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;

use crate::voice::route_command;

/// Routes a transcribed voice command to an intent
pub struct VoiceCommandTool;

#[async_trait]
impl Tool for VoiceCommandTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "voice_command".into(),
            description: "Route a transcribed voice command to an intent, with the tool that serves it.".into(),
            parameters: vec![ParameterSchema::required("command", "string", "Transcribed command text")],
            category: Some("voice".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let command = call.str_argument(&["command"]).unwrap_or_default();
        let intent = route_command(command);

        Ok(ToolResult::success("voice_command", intent.message.clone()).with_data(serde_json::to_value(&intent)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::ToolRegistry;
    use serde_json::json;

    #[tokio::test]
    async fn test_routes_command() {
        let call = ToolCall::new("voice_command").with_argument("command", json!("recommend a strategy"));
        let data = VoiceCommandTool.execute(&call).await.unwrap().data.unwrap();

        assert_eq!(data["type"], "recommendation_request");
        assert_eq!(data["tool"], "recommend");
    }

    #[tokio::test]
    async fn test_command_required() {
        let mut registry = ToolRegistry::new();
        registry.register(VoiceCommandTool);

        let err = registry.execute(&ToolCall::new("voice_command")).await.unwrap_err();
        assert!(err.is_caller_error());
    }
}
