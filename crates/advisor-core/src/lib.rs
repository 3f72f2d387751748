//! # advisor-core
//!
//! Provider-agnostic tool framework for the yield advisor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  caller (CLI / handler / voice router)                      │
//! │        │ ToolCall { name, arguments }                        │
//! │        ▼                                                     │
//! │  ┌─────────────┐   validate   ┌──────────────────────────┐  │
//! │  │ ToolRegistry│─────────────▶│  Tool (predict, ...)     │  │
//! │  └─────────────┘   execute    └──────────────────────────┘  │
//! │        │ ToolResult { output, data }                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod tool;

pub use error::{CoreError, Result};
pub use tool::{ParameterSchema, Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
