use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Agent {
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub symbol: String,
    pub headquarters: String,
    pub credits: i64,
    #[serde(rename = "startingFaction", default)]
    pub starting_faction: Option<String>,
    #[serde(rename = "shipCount", default)]
    pub ship_count: Option<i32>,
}

/// The agent as reported by `GET /my/agent`.
pub type AgentInfo = Agent;

/// Body of `POST /register`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RegisterRequest {
    pub symbol: String,
    pub faction: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegisteredAgent {
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub symbol: String,
}

/// `data` of a successful registration. Contract, faction and ship are ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct RegisterData {
    pub token: String,
    pub agent: RegisteredAgent,
}

/// A freshly created account, flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub token: String,
    pub account_id: String,
    pub symbol: String,
}

impl From<RegisterData> for Registration {
    fn from(data: RegisterData) -> Self {
        Registration {
            token: data.token,
            account_id: data.agent.account_id,
            symbol: data.agent.symbol,
        }
    }
}
