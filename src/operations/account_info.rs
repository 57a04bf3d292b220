use log::debug;
use std::fmt;

use crate::client::{SpaceTradersClient, Transport};
use crate::error::ApiResult;
use crate::models::{AgentInfo, LocationRef, SystemInfo};

/// Where the account-info pipeline is. Any stage may end the run as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStage {
    FetchingAgent,
    ParsingLocation,
    FetchingSystem,
    Done,
}

impl fmt::Display for ReportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportStage::FetchingAgent => "fetching agent",
            ReportStage::ParsingLocation => "parsing location",
            ReportStage::FetchingSystem => "fetching system",
            ReportStage::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Agent and headquarters waypoint, merged.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfoReport {
    pub agent: AgentInfo,
    pub location: LocationRef,
    pub system: SystemInfo,
}

impl AccountInfoReport {
    /// Report fields in display order. The order is stable across runs.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("accountId", self.agent.account_id.clone()),
            ("symbol", self.agent.symbol.clone()),
            ("headquarters", self.agent.headquarters.clone()),
            ("credits", self.agent.credits.to_string()),
            ("system", self.location.system_symbol()),
            ("waypointType", self.system.waypoint_type.clone()),
            ("orbitals", self.system.orbital_count.to_string()),
            ("traits", self.system.traits.join(", ")),
        ]
    }
}

impl fmt::Display for AccountInfoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.fields() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

/// Fetches the agent, then its headquarters waypoint. Stops at the first failure.
pub async fn build_account_info<T: Transport>(
    client: &SpaceTradersClient<T>,
    token: &str,
) -> ApiResult<AccountInfoReport> {
    let mut stage = ReportStage::FetchingAgent;
    let result = run_pipeline(client, token, &mut stage).await;
    match &result {
        Ok(_) => debug!("account info: {}", ReportStage::Done),
        Err(e) => debug!("account info failed while {}: {}", stage, e),
    }
    result
}

async fn run_pipeline<T: Transport>(
    client: &SpaceTradersClient<T>,
    token: &str,
    stage: &mut ReportStage,
) -> ApiResult<AccountInfoReport> {
    debug!("account info: {}", stage);
    let agent = client.get_agent(token).await?;

    *stage = ReportStage::ParsingLocation;
    debug!("account info: {} '{}'", stage, agent.headquarters);
    let location = LocationRef::parse(&agent.headquarters)?;

    *stage = ReportStage::FetchingSystem;
    debug!("account info: {} {}", stage, location.system_symbol());
    let system = client
        .get_waypoint(token, &location.system_symbol(), &location.waypoint_symbol())
        .await?;

    Ok(AccountInfoReport {
        agent,
        location,
        system,
    })
}
