use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// A `SECTOR-SYSTEM-WAYPOINT` identifier such as an agent's headquarters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRef {
    sector: String,
    system: String,
    waypoint: String,
}

impl LocationRef {
    pub fn parse(value: &str) -> Result<Self, ApiError> {
        let segments: Vec<&str> = value.split('-').collect();
        match segments.as_slice() {
            [sector, system, waypoint]
                if !sector.is_empty() && !system.is_empty() && !waypoint.is_empty() =>
            {
                Ok(LocationRef {
                    sector: sector.to_string(),
                    system: system.to_string(),
                    waypoint: waypoint.to_string(),
                })
            }
            _ => Err(ApiError::DataFormat(format!(
                "location '{}' is not of the form SECTOR-SYSTEM-WAYPOINT",
                value
            ))),
        }
    }

    pub fn system_symbol(&self) -> String {
        format!("{}-{}", self.sector, self.system)
    }

    pub fn waypoint_symbol(&self) -> String {
        format!("{}-{}-{}", self.sector, self.system, self.waypoint)
    }
}

impl FromStr for LocationRef {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationRef::parse(s)
    }
}

impl fmt::Display for LocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.waypoint_symbol())
    }
}
