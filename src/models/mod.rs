// Models module - API payloads and the values derived from them

pub mod agent;
pub mod location;
pub mod waypoint;
pub mod responses;

// Re-export all models for easier imports
pub use agent::*;
pub use location::*;
pub use waypoint::*;
pub use responses::*;
