pub mod card;
pub mod jsonrpc;
pub mod params;
pub mod schema;

pub use card::{AgentCapabilities, AgentCard, AgentEndpoints, AgentSkill, build_agent_card};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use params::{RequestMeta, extract_input};
pub use schema::{Equation, ExtractionMetadata, ExtractionOutput, Paper, validate_output};
