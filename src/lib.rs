// SpaceTraders API client library
// Typed requests with classified failures, plus the stapictl command line

pub mod models;
pub mod client;
pub mod operations;
pub mod config;
pub mod error;
pub mod logging;
pub mod cli;

// Re-export commonly used types
pub use models::{
    agent::{Agent, AgentInfo, Registration},
    location::LocationRef,
    waypoint::{SystemInfo, Waypoint},
};

pub use client::{ClientConfig, SpaceTradersClient, Transport};
pub use config::StapiConfig;
pub use error::{ApiError, ApiResult, ConfigError, ErrorKind};

// Constants
pub const API_BASE_URL: &str = "https://api.spacetraders.io/v2";
pub const AGENT_TOKEN_FILE: &str = "AGENT_TOKEN";
pub const DEFAULT_FACTION: &str = "COSMIC";
