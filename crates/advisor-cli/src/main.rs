//! yield-advisor CLI
//!
//! Runs the advisor tools from the command line. Reports go to stdout as
//! pretty JSON; logs go to stderr.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::{ToolCall, ToolRegistry, ToolResult};
use yield_advisor::{Collaborators, EngineConfig, YieldAdvisor, register_tools};

#[derive(Parser)]
#[command(name = "yield-advisor")]
#[command(about = "DeFi yield strategy advisor", long_about = None)]
struct Cli {
    /// Fill missing portfolio and tolerance from the demo wallet
    #[arg(long, global = true)]
    demo: bool,

    /// Print the human-readable report instead of JSON
    #[arg(long, global = true)]
    text: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full market prediction with optimal strategies
    Predict {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Ranked strategy recommendations
    Recommend {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Classify market data, or draw a simulated market
    Market {
        /// JSON file with market data (`-` for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Draw a random demo market instead
        #[arg(long)]
        simulate: bool,
    },
    /// Route a voice command and run the tool it maps to
    Voice {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// List available tools
    Tools,
}

#[derive(clap::Args)]
struct RequestArgs {
    /// JSON request `{ portfolio?, marketData?, riskTolerance? }` (`-` for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Declared risk tolerance, overrides the request's
    #[arg(short, long, value_parser = ["low", "medium", "high"])]
    risk: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,yield_advisor=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = EngineConfig::from_env();
    tracing::debug!(model = %config.model_version, horizon = %config.prediction_horizon, "Engine configured");

    let collaborators = if cli.demo {
        Collaborators::demo()
    } else {
        Collaborators::none()
    };

    let mut tools = ToolRegistry::new();
    register_tools(&mut tools, Arc::new(YieldAdvisor::new(config)), &collaborators);

    match cli.command {
        Commands::Predict { request } => {
            let call = request_call("predict", &request).await?;
            let result = dispatch(&tools, &call).await?;
            emit(&result, cli.text)?;
        }
        Commands::Recommend { request } => {
            let call = request_call("recommend", &request).await?;
            let result = dispatch(&tools, &call).await?;
            emit(&result, cli.text)?;
        }
        Commands::Market { input, simulate } => {
            let mut call = ToolCall::new("assess_market").with_argument("simulate", json!(simulate));
            if let Some(path) = input {
                call = call.with_argument("market_data", read_json(&path).await?);
            }
            let result = dispatch(&tools, &call).await?;
            emit(&result, cli.text)?;
        }
        Commands::Voice { words } => {
            let command = words.join(" ");
            let routed = dispatch(&tools, &ToolCall::new("voice_command").with_argument("command", json!(command))).await?;

            let follow_up = match routed.data.as_ref().and_then(|d| d.get("tool")).and_then(Value::as_str) {
                Some(name) => match dispatch(&tools, &ToolCall::new(name)).await {
                    Ok(result) => Some(result),
                    Err(e) => {
                        tracing::warn!(tool = name, error = %e, "Follow-up tool unavailable");
                        None
                    }
                },
                None => None,
            };

            if cli.text {
                println!("{}", routed.output);
                if let Some(result) = &follow_up {
                    println!("\n{}", result.output);
                }
            } else {
                let report = json!({
                    "intent": routed.data,
                    "result": follow_up.and_then(|r| r.data),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Commands::Tools => {
            if cli.text {
                print!("{}", tools.describe());
            } else {
                println!("{}", serde_json::to_string_pretty(&tools.schemas())?);
            }
        }
    }

    Ok(())
}

/// Tool call for the predict / recommend profiles
async fn request_call(name: &str, args: &RequestArgs) -> anyhow::Result<ToolCall> {
    let mut call = ToolCall::new(name);

    if let Some(path) = &args.input {
        match read_json(path).await? {
            Value::Object(fields) => {
                for (key, value) in fields {
                    call = call.with_argument(key, value);
                }
            }
            Value::Null => {}
            _ => bail!("request in {} must be a JSON object", path.display()),
        }
    }

    Ok(override_risk(call, args.risk.as_deref()))
}

/// `--risk` replaces whichever tolerance spelling the request carried
fn override_risk(mut call: ToolCall, risk: Option<&str>) -> ToolCall {
    let Some(risk) = risk else {
        return call;
    };
    call.arguments.remove("riskTolerance");
    call.with_argument("risk_tolerance", json!(risk))
}

async fn read_json(path: &Path) -> anyhow::Result<Value> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("reading request from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?
    };

    serde_json::from_str(&raw).with_context(|| format!("parsing JSON from {}", path.display()))
}

async fn dispatch(tools: &ToolRegistry, call: &ToolCall) -> anyhow::Result<ToolResult> {
    let result = tools.execute(call).await.map_err(|e| {
        tracing::error!(tool = %call.name, error = %e, "Tool call failed");
        anyhow::anyhow!(e.user_message())
    })?;

    if !result.success {
        bail!("{} failed: {}", result.name, result.output);
    }
    Ok(result)
}

fn emit(result: &ToolResult, text: bool) -> anyhow::Result<()> {
    if text {
        print!("{}", result.output);
    } else {
        let data = result.data.clone().unwrap_or(Value::Null);
        println!("{}", serde_json::to_string_pretty(&data)?);
    }
    Ok(())
}
