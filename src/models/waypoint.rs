use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Waypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    #[serde(rename = "systemSymbol", default)]
    pub system_symbol: Option<String>,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub orbitals: Vec<Orbital>,
    #[serde(default)]
    pub traits: Vec<Trait>,
    pub chart: Option<Chart>,
    pub faction: Option<WaypointFaction>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Orbital {
    pub symbol: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Trait {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Chart {
    #[serde(rename = "waypointSymbol")]
    pub waypoint_symbol: Option<String>,
    #[serde(rename = "submittedBy")]
    pub submitted_by: Option<String>,
    #[serde(rename = "submittedOn")]
    pub submitted_on: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WaypointFaction {
    pub symbol: String,
}

/// Summary of a waypoint as shown in account reports.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub symbol: String,
    pub waypoint_type: String,
    pub orbital_count: usize,
    /// Trait symbols, in the order the server listed them.
    pub traits: Vec<String>,
}

impl From<Waypoint> for SystemInfo {
    fn from(waypoint: Waypoint) -> Self {
        SystemInfo {
            symbol: waypoint.symbol,
            waypoint_type: waypoint.waypoint_type,
            orbital_count: waypoint.orbitals.len(),
            traits: waypoint.traits.into_iter().map(|t| t.symbol).collect(),
        }
    }
}
