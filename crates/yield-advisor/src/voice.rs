//! Voice Command Router
//!
//! Keyword routing for transcribed voice commands. The first matching
//! keyword group wins, in declaration order, so "show my risk" is a
//! portfolio query.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    PortfolioQuery,
    RecommendationRequest,
    TransactionRequest,
    YieldQuery,
    Greeting,
    StatusQuery,
    MarketAnalysis,
    RiskAssessment,
    Unknown,
}

impl IntentKind {
    /// Registry tool that serves this intent, if any
    pub const fn tool(self) -> Option<&'static str> {
        match self {
            Self::PortfolioQuery => Some("portfolio"),
            Self::RecommendationRequest => Some("recommend"),
            Self::MarketAnalysis => Some("assess_market"),
            Self::RiskAssessment => Some("assess_risk"),
            Self::TransactionRequest
            | Self::YieldQuery
            | Self::Greeting
            | Self::StatusQuery
            | Self::Unknown => None,
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PortfolioQuery => "portfolio_query",
            Self::RecommendationRequest => "recommendation_request",
            Self::TransactionRequest => "transaction_request",
            Self::YieldQuery => "yield_query",
            Self::Greeting => "greeting",
            Self::StatusQuery => "status_query",
            Self::MarketAnalysis => "market_analysis",
            Self::RiskAssessment => "risk_assessment",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Routed command
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandIntent {
    #[serde(rename = "type")]
    pub kind: IntentKind,
    pub message: String,
    pub action: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
}

struct Route {
    keywords: &'static [&'static str],
    kind: IntentKind,
    message: &'static str,
    action: &'static str,
    priority: Priority,
}

const ROUTES: &[Route] = &[
    Route {
        keywords: &["portfolio", "balance", "holding", "show", "my"],
        kind: IntentKind::PortfolioQuery,
        message: "Retrieving your portfolio information...",
        action: "fetch_portfolio",
        priority: Priority::High,
    },
    Route {
        keywords: &["recommend", "suggest", "advice", "idea", "strategy"],
        kind: IntentKind::RecommendationRequest,
        message: "Analyzing market conditions and generating personalized recommendations...",
        action: "generate_recommendations",
        priority: Priority::High,
    },
    Route {
        keywords: &["transfer", "send", "invest", "execute", "deploy"],
        kind: IntentKind::TransactionRequest,
        message: "Preparing to execute transaction based on your request...",
        action: "prepare_transaction",
        priority: Priority::Critical,
    },
    Route {
        keywords: &["yield", "earnings", "profit", "returns", "performance"],
        kind: IntentKind::YieldQuery,
        message: "Checking your current yield performance and earnings...",
        action: "fetch_yield_data",
        priority: Priority::Medium,
    },
    Route {
        keywords: &["hello", "hi", "hey", "greetings"],
        kind: IntentKind::Greeting,
        message: "Hello! I'm your yield optimizer. I can check your portfolio, suggest strategies, or assess market conditions. What would you like to do?",
        action: "none",
        priority: Priority::Low,
    },
    Route {
        keywords: &["how", "doing", "today", "going"],
        kind: IntentKind::StatusQuery,
        message: "Checking the status of your active strategies...",
        action: "fetch_status",
        priority: Priority::Medium,
    },
    Route {
        keywords: &["market", "condition", "trend", "news"],
        kind: IntentKind::MarketAnalysis,
        message: "Analyzing current market conditions...",
        action: "fetch_market_analysis",
        priority: Priority::High,
    },
    Route {
        keywords: &["risk", "exposure", "safe", "secure"],
        kind: IntentKind::RiskAssessment,
        message: "Performing risk assessment of your current portfolio allocation...",
        action: "assess_risk",
        priority: Priority::High,
    },
];

/// Fragment hints for commands no route matched
const SUGGESTIONS: &[(&[&str], [&str; 2])] = &[
    (&["portf"], ["Check portfolio", "Show balance"]),
    (&["recomm"], ["Get recommendations", "Suggest strategies"]),
    (&["transac", "buy", "sell"], ["Execute transaction", "Transfer funds"]),
    (&["yield", "earn"], ["Check earnings", "Show performance"]),
    (&["market", "condit"], ["Market analysis", "Check trends"]),
];

const DEFAULT_SUGGESTIONS: [&str; 3] = ["Check portfolio", "Get recommendations", "Market analysis"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Route a transcribed command to an intent
pub fn route_command(command: &str) -> CommandIntent {
    let text = command.trim().to_lowercase();

    if let Some(route) = ROUTES.iter().find(|r| contains_any(&text, r.keywords)) {
        tracing::debug!(command = %text, intent = %route.kind, "Voice command routed");
        return CommandIntent {
            kind: route.kind,
            message: route.message.to_string(),
            action: route.action.to_string(),
            priority: route.priority,
            suggested_actions: Vec::new(),
            tool: route.kind.tool().map(str::to_string),
        };
    }

    let mut suggested_actions: Vec<String> = SUGGESTIONS
        .iter()
        .filter(|(fragments, _)| contains_any(&text, fragments))
        .flat_map(|(_, hints)| hints.iter().map(|h| (*h).to_string()))
        .collect();
    if suggested_actions.is_empty() {
        suggested_actions = DEFAULT_SUGGESTIONS.iter().map(|h| (*h).to_string()).collect();
    }

    tracing::debug!(command = %text, "Voice command not recognised");

    CommandIntent {
        kind: IntentKind::Unknown,
        message: format!(
            "I heard \"{text}\", but I'm not sure how to help with that. Try asking about your portfolio, recommendations, or market conditions."
        ),
        action: "none".to_string(),
        priority: Priority::Low,
        suggested_actions,
        tool: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_query() {
        let intent = route_command("  Show my PORTFOLIO ");
        assert_eq!(intent.kind, IntentKind::PortfolioQuery);
        assert_eq!(intent.priority, Priority::High);
        assert_eq!(intent.action, "fetch_portfolio");
        assert_eq!(intent.tool.as_deref(), Some("portfolio"));
    }

    #[test]
    fn test_first_group_wins() {
        // "strategy" is a recommendation keyword, "risk" comes later
        assert_eq!(route_command("risk strategy").kind, IntentKind::RecommendationRequest);
        assert_eq!(route_command("what is the market trend").kind, IntentKind::MarketAnalysis);
        assert_eq!(route_command("is it safe").kind, IntentKind::RiskAssessment);
    }

    #[test]
    fn test_intent_tools() {
        assert_eq!(route_command("recommend something").tool.as_deref(), Some("recommend"));
        assert_eq!(route_command("market news").tool.as_deref(), Some("assess_market"));
        assert_eq!(route_command("exposure check").tool.as_deref(), Some("assess_risk"));
        assert_eq!(route_command("deploy funds").tool, None);
    }

    #[test]
    fn test_transaction_is_critical() {
        let intent = route_command("send 100 USDC");
        assert_eq!(intent.kind, IntentKind::TransactionRequest);
        assert_eq!(intent.priority, Priority::Critical);
    }

    #[test]
    fn test_unknown_with_fragment_suggestions() {
        let intent = route_command("buy some tokens");
        assert_eq!(intent.kind, IntentKind::Unknown);
        assert_eq!(intent.priority, Priority::Low);
        assert_eq!(intent.suggested_actions, vec!["Execute transaction", "Transfer funds"]);
        assert!(intent.message.contains("buy some tokens"));
    }

    #[test]
    fn test_unknown_default_suggestions() {
        let intent = route_command("xyz");
        assert_eq!(intent.kind, IntentKind::Unknown);
        assert_eq!(intent.suggested_actions, DEFAULT_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(route_command("xyz")).unwrap();
        assert_eq!(value["type"], "unknown");
        assert_eq!(value["priority"], "low");
        assert!(value["suggestedActions"].is_array());
        assert!(value.get("tool").is_none());
    }
}
