//! Agent Card served at the well-known discovery paths.
//!
//! The AgentBeats controller fetches `/.well-known/agent-card.json`;
//! other A2A clients commonly use `/.well-known/agent.json`.

use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

pub const PROTOCOL_VERSION: &str = "0.2.6";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCapabilities {
    pub streaming: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    pub tags: Vec<String>,
}

impl AgentSkill {
    pub fn new(id: String, name: String, description: String, tags: Vec<String>) -> Self {
        Self { id, name, description, examples: None, tags }
    }
}

/// Convenience pointers for clients; derived from the public base URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEndpoints {
    pub jsonrpc: String,
    pub card: String,
    pub agent: String,
    pub health: String,
}

impl AgentEndpoints {
    pub fn for_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            jsonrpc: format!("{}/", base),
            card: format!("{}/.well-known/agent-card.json", base),
            agent: format!("{}/.well-known/agent.json", base),
            health: format!("{}/health", base),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub url: String,
    pub version: String,
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: AgentCapabilities,
    #[serde(rename = "defaultInputModes")]
    pub default_input_modes: Vec<String>,
    #[serde(rename = "defaultOutputModes")]
    pub default_output_modes: Vec<String>,
    pub skills: Vec<AgentSkill>,
    pub endpoints: AgentEndpoints,
}

impl AgentCard {
    pub fn builder() -> AgentCardBuilder {
        AgentCardBuilder::default()
    }
}

#[derive(Default)]
pub struct AgentCardBuilder {
    name: Option<String>,
    description: Option<String>,
    url: Option<String>,
    version: Option<String>,
    streaming: bool,
    skills: Vec<AgentSkill>,
}

impl AgentCardBuilder {
    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    pub fn version(mut self, version: String) -> Self {
        self.version = Some(version);
        self
    }

    pub fn streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    pub fn skills(mut self, skills: Vec<AgentSkill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn build(self) -> AgentCard {
        let url = self.url.unwrap_or_default();
        AgentCard {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            endpoints: AgentEndpoints::for_base_url(&url),
            url,
            version: self.version.unwrap_or_else(|| "1.0.0".to_string()),
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: AgentCapabilities { streaming: self.streaming },
            default_input_modes: vec![
                "text".to_string(),
                "text/plain".to_string(),
                "application/json".to_string(),
            ],
            default_output_modes: vec!["application/json".to_string()],
            skills: self.skills,
        }
    }
}

/// The extraction skill advertised on the card.
pub fn build_agent_skills() -> Vec<AgentSkill> {
    let mut skill = AgentSkill::new(
        "extract_dairy_math_models".to_string(),
        "Dairy math model extraction".to_string(),
        "Extract equations/models from dairy science paper text into structured JSON.".to_string(),
        vec![
            "dairy".to_string(),
            "equations".to_string(),
            "latex".to_string(),
            "benchmark".to_string(),
        ],
    );
    skill.examples = Some(vec![
        "Extract the regression equations and reported metrics from this Methods section."
            .to_string(),
    ]);
    vec![skill]
}

pub fn build_agent_card(config: &ServerConfig) -> AgentCard {
    AgentCard::builder()
        .name(config.agent_name.clone())
        .description(config.agent_description.clone())
        .url(config.base_url.clone())
        .streaming(false)
        .skills(build_agent_skills())
        .build()
}
